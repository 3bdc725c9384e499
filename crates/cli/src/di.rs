use classwatch_api::{AppState, BlacklistUseCases, RecordUseCases};
use classwatch_application::ports::{
    DomainBlocklistRepository, IpBlocklistRepository, RecordRepository,
};
use classwatch_application::use_cases::{
    AddDomainBlockUseCase, AddIpBlockUseCase, CheckBlacklistUseCase, ClearRecordsUseCase,
    ExportRecordsUseCase, GetDomainBlocksUseCase, GetIpBlocksUseCase, GetStatsUseCase,
    LatestRecordsUseCase, ListRecordsUseCase, PollNewRecordsUseCase, RemoveDomainBlockUseCase,
    RemoveIpBlockUseCase, SubmitReportUseCase,
};
use classwatch_infrastructure::{
    SqliteDomainBlocklistRepository, SqliteIpBlocklistRepository, SqliteRecordRepository,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub records: Arc<dyn RecordRepository>,
    pub domain_blocklist: Arc<dyn DomainBlocklistRepository>,
    pub ip_blocklist: Arc<dyn IpBlocklistRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            records: Arc::new(SqliteRecordRepository::new(pool.clone())),
            domain_blocklist: Arc::new(SqliteDomainBlocklistRepository::new(pool.clone())),
            ip_blocklist: Arc::new(SqliteIpBlocklistRepository::new(pool)),
        }
    }
}

pub fn build_state(repos: &Repositories) -> AppState {
    AppState {
        submit_report: Arc::new(SubmitReportUseCase::new(
            repos.records.clone(),
            repos.domain_blocklist.clone(),
        )),
        records: RecordUseCases {
            list: Arc::new(ListRecordsUseCase::new(repos.records.clone())),
            latest: Arc::new(LatestRecordsUseCase::new(repos.records.clone())),
            poll: Arc::new(PollNewRecordsUseCase::new(repos.records.clone())),
            stats: Arc::new(GetStatsUseCase::new(repos.records.clone())),
            clear: Arc::new(ClearRecordsUseCase::new(repos.records.clone())),
            export: Arc::new(ExportRecordsUseCase::new(repos.records.clone())),
        },
        blacklist: BlacklistUseCases {
            get_domains: Arc::new(GetDomainBlocksUseCase::new(repos.domain_blocklist.clone())),
            add_domain: Arc::new(AddDomainBlockUseCase::new(repos.domain_blocklist.clone())),
            remove_domain: Arc::new(RemoveDomainBlockUseCase::new(
                repos.domain_blocklist.clone(),
            )),
            get_ips: Arc::new(GetIpBlocksUseCase::new(repos.ip_blocklist.clone())),
            add_ip: Arc::new(AddIpBlockUseCase::new(repos.ip_blocklist.clone())),
            remove_ip: Arc::new(RemoveIpBlockUseCase::new(repos.ip_blocklist.clone())),
            check: Arc::new(CheckBlacklistUseCase::new(
                repos.domain_blocklist.clone(),
                repos.ip_blocklist.clone(),
            )),
        },
    }
}
