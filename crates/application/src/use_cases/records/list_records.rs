use super::view::RecordView;
use crate::ports::RecordRepository;
use classwatch_domain::{DomainError, PageRequest, Pagination, RecordFilters};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone)]
pub struct RecordPage {
    pub data: Vec<RecordView>,
    pub pagination: Pagination,
}

pub struct ListRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        filters: RecordFilters,
        page: PageRequest,
    ) -> Result<RecordPage, DomainError> {
        let (rows, total) = self.records.list(&filters, page).await?;
        debug!(count = rows.len(), total, "Records listed");

        Ok(RecordPage {
            data: rows.into_iter().map(RecordView::from_annotated).collect(),
            pagination: Pagination::new(page, total),
        })
    }
}
