use crate::ports::{DomainBlocklistRepository, IpBlocklistRepository};
use classwatch_domain::{BlockDecision, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The blocklist matcher exposed to clients for pre-flight checks.
///
/// Domain is always consulted first; the IP list only decides when no
/// domain entry matched. At least one of the two inputs must be present.
pub struct CheckBlacklistUseCase {
    domains: Arc<dyn DomainBlocklistRepository>,
    ips: Arc<dyn IpBlocklistRepository>,
}

impl CheckBlacklistUseCase {
    pub fn new(
        domains: Arc<dyn DomainBlocklistRepository>,
        ips: Arc<dyn IpBlocklistRepository>,
    ) -> Self {
        Self { domains, ips }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        domain: Option<String>,
        ip: Option<String>,
    ) -> Result<BlockDecision, DomainError> {
        let domain = domain.filter(|d| !d.is_empty());
        let ip = ip.filter(|i| !i.is_empty());

        if domain.is_none() && ip.is_none() {
            return Err(DomainError::MissingField("domain or ip"));
        }

        if let Some(candidate) = domain.as_deref() {
            if let Some(entry) = self.domains.find_match(candidate).await? {
                debug!(candidate, matched = %entry.domain, "Domain blocklist hit");
                return Ok(BlockDecision::domain_match(Some(
                    entry
                        .reason
                        .unwrap_or_else(|| "domain is blocklisted".to_string()),
                )));
            }
        }

        if let Some(candidate) = ip.as_deref() {
            if let Some(entry) = self.ips.find_exact(candidate).await? {
                debug!(candidate, "IP blocklist hit");
                return Ok(BlockDecision::ip_match(Some(
                    entry
                        .reason
                        .unwrap_or_else(|| "IP address is blocklisted".to_string()),
                )));
            }
        }

        Ok(BlockDecision::clear())
    }
}
