use crate::ports::RecordRepository;
use classwatch_domain::{DomainError, MonitorStats};
use std::sync::Arc;

pub struct GetStatsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl GetStatsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub async fn execute(&self) -> Result<MonitorStats, DomainError> {
        self.records.stats().await
    }
}
