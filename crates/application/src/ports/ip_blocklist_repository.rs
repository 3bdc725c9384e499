use async_trait::async_trait;
use classwatch_domain::{blocklist::BlockedIp, DomainError};

#[async_trait]
pub trait IpBlocklistRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<BlockedIp>, DomainError>;

    /// Insert with no-op-on-duplicate semantics. Returns `false` when the
    /// address was already present.
    async fn add(&self, entry: &BlockedIp) -> Result<bool, DomainError>;

    async fn remove_by_id(&self, id: i64) -> Result<bool, DomainError>;

    async fn remove_by_ip(&self, ip: &str) -> Result<bool, DomainError>;

    /// Exact string-equality lookup.
    async fn find_exact(&self, ip: &str) -> Result<Option<BlockedIp>, DomainError>;
}
