mod domain_blocklist_repository;
mod ip_blocklist_repository;
mod record_repository;

pub use domain_blocklist_repository::SqliteDomainBlocklistRepository;
pub use ip_blocklist_repository::SqliteIpBlocklistRepository;
pub use record_repository::SqliteRecordRepository;
