use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DomainVisits {
    pub url: String,
    pub visit_count: u64,
}

/// Aggregate view over the record store. `blacklisted_count` is computed
/// with the same substring join the listings use, so blocklist edits
/// retroactively move historical records between buckets.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorStats {
    pub total_records: u64,
    pub blacklisted_count: u64,
    pub student_count: u64,
    pub top_domains: Vec<DomainVisits>,
}
