mod domain_blocklist_repository;
mod ip_blocklist_repository;
mod record_repository;

pub use domain_blocklist_repository::DomainBlocklistRepository;
pub use ip_blocklist_repository::IpBlocklistRepository;
pub use record_repository::{AnnotatedRecord, RecordRepository};
