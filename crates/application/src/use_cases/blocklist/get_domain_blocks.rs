use crate::ports::DomainBlocklistRepository;
use classwatch_domain::{blocklist::BlockedDomain, DomainError};
use std::sync::Arc;

pub struct GetDomainBlocksUseCase {
    repository: Arc<dyn DomainBlocklistRepository>,
}

impl GetDomainBlocksUseCase {
    pub fn new(repository: Arc<dyn DomainBlocklistRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<BlockedDomain>, DomainError> {
        self.repository.get_all().await
    }
}
