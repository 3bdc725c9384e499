use classwatch_application::use_cases::{
    AddDomainBlockUseCase, AddIpBlockUseCase, CheckBlacklistUseCase, ClearRecordsUseCase,
    ExportRecordsUseCase, GetDomainBlocksUseCase, GetIpBlocksUseCase, GetStatsUseCase,
    LatestRecordsUseCase, ListRecordsUseCase, PollNewRecordsUseCase, RemoveDomainBlockUseCase,
    RemoveIpBlockUseCase, SubmitReportUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct RecordUseCases {
    pub list: Arc<ListRecordsUseCase>,
    pub latest: Arc<LatestRecordsUseCase>,
    pub poll: Arc<PollNewRecordsUseCase>,
    pub stats: Arc<GetStatsUseCase>,
    pub clear: Arc<ClearRecordsUseCase>,
    pub export: Arc<ExportRecordsUseCase>,
}

#[derive(Clone)]
pub struct BlacklistUseCases {
    pub get_domains: Arc<GetDomainBlocksUseCase>,
    pub add_domain: Arc<AddDomainBlockUseCase>,
    pub remove_domain: Arc<RemoveDomainBlockUseCase>,
    pub get_ips: Arc<GetIpBlocksUseCase>,
    pub add_ip: Arc<AddIpBlockUseCase>,
    pub remove_ip: Arc<RemoveIpBlockUseCase>,
    pub check: Arc<CheckBlacklistUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub submit_report: Arc<SubmitReportUseCase>,
    pub records: RecordUseCases,
    pub blacklist: BlacklistUseCases,
}
