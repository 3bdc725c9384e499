use crate::ports::IpBlocklistRepository;
use classwatch_domain::{blocklist::BlockedIp, DomainError};
use std::sync::Arc;

pub struct GetIpBlocksUseCase {
    repository: Arc<dyn IpBlocklistRepository>,
}

impl GetIpBlocksUseCase {
    pub fn new(repository: Arc<dyn IpBlocklistRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<BlockedIp>, DomainError> {
        self.repository.get_all().await
    }
}
