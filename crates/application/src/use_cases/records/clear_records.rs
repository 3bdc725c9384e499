use crate::ports::RecordRepository;
use classwatch_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Unconditional bulk delete. Irreversible; only ever wired to an explicit
/// administrative route, never a default path.
pub struct ClearRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ClearRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<u64, DomainError> {
        let deleted = self.records.clear().await?;
        info!(deleted, "All browsing records cleared");
        Ok(deleted)
    }
}
