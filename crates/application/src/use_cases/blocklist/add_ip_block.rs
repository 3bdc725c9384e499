use super::{is_dotted_quad, BlocklistMutation};
use crate::ports::IpBlocklistRepository;
use classwatch_domain::{blocklist::BlockedIp, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddIpBlockUseCase {
    repository: Arc<dyn IpBlocklistRepository>,
}

impl AddIpBlockUseCase {
    pub fn new(repository: Arc<dyn IpBlocklistRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        ip_address: String,
        reason: Option<String>,
    ) -> Result<BlocklistMutation, DomainError> {
        let clean = ip_address.trim().to_string();
        if !is_dotted_quad(&clean) {
            return Err(DomainError::InvalidIpAddress(ip_address));
        }

        let inserted = self
            .repository
            .add(&BlockedIp {
                id: None,
                ip_address: clean.clone(),
                reason,
                created_at: None,
            })
            .await?;

        if inserted {
            info!(ip = %clean, "IP address added to blocklist");
            Ok(BlocklistMutation {
                ok: true,
                message: format!("IP address {clean} added to blocklist"),
            })
        } else {
            Ok(BlocklistMutation {
                ok: false,
                message: format!("IP address {clean} is already blocklisted"),
            })
        }
    }
}
