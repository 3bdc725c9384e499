use async_trait::async_trait;
use classwatch_domain::{blocklist::BlockedDomain, DomainError};

#[async_trait]
pub trait DomainBlocklistRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<BlockedDomain>, DomainError>;

    /// Insert with no-op-on-duplicate semantics. Returns `false` when the
    /// domain was already present.
    async fn add(&self, entry: &BlockedDomain) -> Result<bool, DomainError>;

    /// Returns `false` when no row had this id.
    async fn remove_by_id(&self, id: i64) -> Result<bool, DomainError>;

    /// First entry whose domain occurs as a substring of `candidate`.
    ///
    /// The direction is intentional and unusual: the blocklist entry is the
    /// needle, the candidate the haystack, so entry `a.com` also matches
    /// `xa.com`. Known false-positive source; load-bearing behavior.
    async fn find_match(&self, candidate: &str) -> Result<Option<BlockedDomain>, DomainError>;
}
