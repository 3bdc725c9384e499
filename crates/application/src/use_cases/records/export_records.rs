use super::view::RecordView;
use crate::ports::RecordRepository;
use classwatch_domain::{DomainError, RecordFilters};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Same filter contract as the listing, unpaginated, reshaped flat for
/// export. Spreadsheet styling belongs to the caller.
pub struct ExportRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ExportRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, filters: RecordFilters) -> Result<Vec<RecordView>, DomainError> {
        let rows = self.records.export(&filters).await?;
        debug!(count = rows.len(), "Records exported");
        Ok(rows.into_iter().map(RecordView::from_annotated).collect())
    }
}
