use super::{is_dotted_quad, BlocklistMutation};
use crate::ports::IpBlocklistRepository;
use classwatch_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct RemoveIpBlockUseCase {
    repository: Arc<dyn IpBlocklistRepository>,
}

impl RemoveIpBlockUseCase {
    pub fn new(repository: Arc<dyn IpBlocklistRepository>) -> Self {
        Self { repository }
    }

    /// The selector is a store id or a literal dotted-quad in the same
    /// parameter; syntax decides which delete runs.
    #[instrument(skip(self))]
    pub async fn execute(&self, selector: String) -> Result<BlocklistMutation, DomainError> {
        let removed = if is_dotted_quad(&selector) {
            self.repository.remove_by_ip(&selector).await?
        } else {
            let id = selector
                .parse::<i64>()
                .map_err(|_| DomainError::InvalidIpAddress(selector.clone()))?;
            self.repository.remove_by_id(id).await?
        };

        if removed {
            info!(selector = %selector, "IP address removed from blocklist");
            Ok(BlocklistMutation {
                ok: true,
                message: "IP address removed from blocklist".to_string(),
            })
        } else {
            Ok(BlocklistMutation {
                ok: false,
                message: "IP address not found in blocklist".to_string(),
            })
        }
    }
}
