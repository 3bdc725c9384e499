use async_trait::async_trait;
use classwatch_domain::{
    BrowsingRecord, DomainError, MonitorStats, PageRequest, RecordFilters,
};

/// A record as read back: joined against the domain blocklist, with the
/// classification recomputed on every read rather than stored.
#[derive(Debug, Clone)]
pub struct AnnotatedRecord {
    pub record: BrowsingRecord,
    pub blacklisted: bool,
    pub blacklist_reason: Option<String>,
}

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert one record, returning the store-assigned id.
    async fn insert(&self, record: &BrowsingRecord) -> Result<i64, DomainError>;

    /// Filtered, paginated listing plus the total row count over the same
    /// filters and join.
    async fn list(
        &self,
        filters: &RecordFilters,
        page: PageRequest,
    ) -> Result<(Vec<AnnotatedRecord>, u64), DomainError>;

    /// Most recent rows, unfiltered.
    async fn latest(&self, limit: u32) -> Result<Vec<AnnotatedRecord>, DomainError>;

    /// Rows with id strictly greater than `cursor`, ascending by id.
    async fn fetch_after(
        &self,
        cursor: i64,
        limit: u32,
    ) -> Result<Vec<AnnotatedRecord>, DomainError>;

    /// Unpaginated listing for exports; same filter contract as `list`.
    async fn export(&self, filters: &RecordFilters) -> Result<Vec<AnnotatedRecord>, DomainError>;

    async fn stats(&self) -> Result<MonitorStats, DomainError>;

    /// Delete every record, returning the number deleted.
    async fn clear(&self) -> Result<u64, DomainError>;
}
