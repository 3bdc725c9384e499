use super::view::RecordView;
use crate::ports::RecordRepository;
use classwatch_domain::DomainError;
use std::sync::Arc;
use tracing::debug;

/// Cursor-based pull for listeners that poll for fresh rows.
///
/// The cursor is a high-water mark: only rows with strictly greater id are
/// returned, in ascending id order, so a listener that feeds the returned
/// cursor back in never sees a row twice.
pub struct PollNewRecordsUseCase {
    records: Arc<dyn RecordRepository>,
}

impl PollNewRecordsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    pub async fn execute(
        &self,
        after: i64,
        limit: u32,
    ) -> Result<(Vec<RecordView>, i64), DomainError> {
        let rows = self.records.fetch_after(after, limit).await?;
        let cursor = rows
            .iter()
            .filter_map(|r| r.record.id)
            .max()
            .unwrap_or(after);
        debug!(after, cursor, count = rows.len(), "Poll cycle served");

        Ok((
            rows.into_iter().map(RecordView::from_annotated).collect(),
            cursor,
        ))
    }
}
