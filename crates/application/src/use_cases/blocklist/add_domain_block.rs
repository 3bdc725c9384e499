use super::BlocklistMutation;
use crate::ports::DomainBlocklistRepository;
use classwatch_domain::{blocklist::BlockedDomain, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AddDomainBlockUseCase {
    repository: Arc<dyn DomainBlocklistRepository>,
}

impl AddDomainBlockUseCase {
    pub fn new(repository: Arc<dyn DomainBlocklistRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: String,
        reason: Option<String>,
    ) -> Result<BlocklistMutation, DomainError> {
        let clean = domain.trim().to_lowercase();
        if clean.is_empty() || !clean.contains('.') {
            return Err(DomainError::InvalidDomain(domain));
        }

        let inserted = self
            .repository
            .add(&BlockedDomain::new(clean.clone(), reason))
            .await?;

        if inserted {
            info!(domain = %clean, "Domain added to blocklist");
            Ok(BlocklistMutation {
                ok: true,
                message: format!("Domain {clean} added to blocklist"),
            })
        } else {
            Ok(BlocklistMutation {
                ok: false,
                message: format!("Domain {clean} is already blocklisted"),
            })
        }
    }
}
