use super::BlocklistMutation;
use crate::ports::DomainBlocklistRepository;
use classwatch_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct RemoveDomainBlockUseCase {
    repository: Arc<dyn DomainBlocklistRepository>,
}

impl RemoveDomainBlockUseCase {
    pub fn new(repository: Arc<dyn DomainBlocklistRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<BlocklistMutation, DomainError> {
        if self.repository.remove_by_id(id).await? {
            info!(id, "Domain removed from blocklist");
            Ok(BlocklistMutation {
                ok: true,
                message: "Domain removed from blocklist".to_string(),
            })
        } else {
            Ok(BlocklistMutation {
                ok: false,
                message: "Domain not found in blocklist".to_string(),
            })
        }
    }
}
