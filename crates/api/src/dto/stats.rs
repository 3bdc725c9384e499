use classwatch_domain::{DomainVisits, MonitorStats};
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct TopDomainResponse {
    pub url: String,
    pub visit_count: u64,
}

#[derive(Serialize, Debug)]
pub struct StatsResponse {
    pub total_records: u64,
    pub blacklisted_count: u64,
    pub student_count: u64,
    pub top_domains: Vec<TopDomainResponse>,
}

impl From<MonitorStats> for StatsResponse {
    fn from(stats: MonitorStats) -> Self {
        Self {
            total_records: stats.total_records,
            blacklisted_count: stats.blacklisted_count,
            student_count: stats.student_count,
            top_domains: stats
                .top_domains
                .into_iter()
                .map(|DomainVisits { url, visit_count }| TopDomainResponse { url, visit_count })
                .collect(),
        }
    }
}
