pub mod blocklist;
pub mod records;
pub mod reports;

pub use blocklist::{
    AddDomainBlockUseCase, AddIpBlockUseCase, BlocklistMutation, CheckBlacklistUseCase,
    GetDomainBlocksUseCase, GetIpBlocksUseCase, RemoveDomainBlockUseCase, RemoveIpBlockUseCase,
};
pub use records::{
    ClearRecordsUseCase, ExportRecordsUseCase, GetStatsUseCase, LatestRecordsUseCase,
    ListRecordsUseCase, PollNewRecordsUseCase, RecordPage, RecordView,
};
pub use reports::{ReportContext, ReportOutcome, ReportPayload, SubmitReportUseCase};
