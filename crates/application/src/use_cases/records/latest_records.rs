use super::view::RecordView;
use crate::ports::RecordRepository;
use classwatch_domain::record_query::MAX_PAGE_SIZE;
use classwatch_domain::DomainError;
use std::sync::Arc;

pub struct LatestRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl LatestRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub async fn execute(&self, limit: u32) -> Result<Vec<RecordView>, DomainError> {
        let rows = self.records.latest(limit.clamp(1, MAX_PAGE_SIZE)).await?;
        Ok(rows.into_iter().map(RecordView::from_annotated).collect())
    }
}
