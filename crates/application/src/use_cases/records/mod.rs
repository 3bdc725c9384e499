mod clear_records;
mod export_records;
mod get_stats;
mod latest_records;
mod list_records;
mod poll_new_records;
mod view;

pub use clear_records::ClearRecordsUseCase;
pub use export_records::ExportRecordsUseCase;
pub use get_stats::GetStatsUseCase;
pub use latest_records::LatestRecordsUseCase;
pub use list_records::{ListRecordsUseCase, RecordPage};
pub use poll_new_records::PollNewRecordsUseCase;
pub use view::RecordView;
