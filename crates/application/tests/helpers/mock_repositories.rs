#![allow(dead_code)]

use async_trait::async_trait;
use classwatch_application::ports::{
    AnnotatedRecord, DomainBlocklistRepository, IpBlocklistRepository, RecordRepository,
};
use classwatch_domain::{
    blocklist::{BlockedDomain, BlockedIp},
    BrowsingRecord, DomainError, DomainVisits, MonitorStats, PageRequest, RecordFilters,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockDomainBlocklistRepository {
    entries: Mutex<Vec<BlockedDomain>>,
    next_id: Mutex<i64>,
}

impl MockDomainBlocklistRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains(domains: Vec<&str>) -> Self {
        let repo = Self::new();
        {
            let mut entries = repo.entries.lock().unwrap();
            let mut next_id = repo.next_id.lock().unwrap();
            for domain in domains {
                *next_id += 1;
                entries.push(BlockedDomain {
                    id: Some(*next_id),
                    domain: domain.to_string(),
                    reason: None,
                    created_at: None,
                });
            }
        }
        repo
    }

    fn matches(&self, candidate: &str) -> Option<BlockedDomain> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .find(|entry| candidate.contains(&entry.domain))
            .cloned()
    }
}

#[async_trait]
impl DomainBlocklistRepository for MockDomainBlocklistRepository {
    async fn get_all(&self) -> Result<Vec<BlockedDomain>, DomainError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn add(&self, entry: &BlockedDomain) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.domain == entry.domain) {
            return Ok(false);
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        entries.push(BlockedDomain {
            id: Some(*next_id),
            ..entry.clone()
        });
        Ok(true)
    }

    async fn remove_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != Some(id));
        Ok(entries.len() < before)
    }

    async fn find_match(&self, candidate: &str) -> Result<Option<BlockedDomain>, DomainError> {
        Ok(self.matches(candidate))
    }
}

#[derive(Default)]
pub struct MockIpBlocklistRepository {
    entries: Mutex<Vec<BlockedIp>>,
    next_id: Mutex<i64>,
}

impl MockIpBlocklistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IpBlocklistRepository for MockIpBlocklistRepository {
    async fn get_all(&self) -> Result<Vec<BlockedIp>, DomainError> {
        Ok(self.entries.lock().unwrap().clone())
    }

    async fn add(&self, entry: &BlockedIp) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        if entries.iter().any(|e| e.ip_address == entry.ip_address) {
            return Ok(false);
        }
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        entries.push(BlockedIp {
            id: Some(*next_id),
            ..entry.clone()
        });
        Ok(true)
    }

    async fn remove_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.id != Some(id));
        Ok(entries.len() < before)
    }

    async fn remove_by_ip(&self, ip: &str) -> Result<bool, DomainError> {
        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.ip_address != ip);
        Ok(entries.len() < before)
    }

    async fn find_exact(&self, ip: &str) -> Result<Option<BlockedIp>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.ip_address == ip)
            .cloned())
    }
}

/// In-memory record store that reproduces the SQL read semantics: descending
/// timestamp/id order, substring annotation against a shared domain
/// blocklist, filter application, offset pagination.
pub struct MockRecordRepository {
    records: Mutex<Vec<BrowsingRecord>>,
    next_id: Mutex<i64>,
    blocklist: Arc<MockDomainBlocklistRepository>,
}

impl MockRecordRepository {
    pub fn new(blocklist: Arc<MockDomainBlocklistRepository>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(0),
            blocklist,
        }
    }

    fn annotate(&self, record: BrowsingRecord) -> AnnotatedRecord {
        let matched = self.blocklist.matches(&record.url);
        AnnotatedRecord {
            blacklisted: matched.is_some(),
            blacklist_reason: matched.and_then(|m| m.reason),
            record,
        }
    }

    fn sorted_desc(&self) -> Vec<BrowsingRecord> {
        let mut rows = self.records.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then(b.id.cmp(&a.id))
        });
        rows
    }

    fn apply_filters(&self, rows: Vec<BrowsingRecord>, filters: &RecordFilters) -> Vec<AnnotatedRecord> {
        rows.into_iter()
            .map(|r| self.annotate(r))
            .filter(|annotated| {
                let r = &annotated.record;
                if let Some(student_id) = &filters.student_id {
                    if &r.student_id != student_id {
                        return false;
                    }
                }
                if let Some(domain) = &filters.domain {
                    if !r.url.contains(domain.as_str()) {
                        return false;
                    }
                }
                if let Some(start) = &filters.start_time {
                    if r.timestamp.as_deref().unwrap_or("") < start.as_str() {
                        return false;
                    }
                }
                if let Some(end) = &filters.end_time {
                    if r.timestamp.as_deref().unwrap_or("") > end.as_str() {
                        return false;
                    }
                }
                if let Some(blocked) = filters.blacklisted {
                    if annotated.blacklisted != blocked {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn insert(&self, record: &BrowsingRecord) -> Result<i64, DomainError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let id = *next_id;

        let mut stored = record.clone();
        stored.id = Some(id);
        if stored.timestamp.is_none() {
            // Stand-in for the column default; monotonic with the id so
            // ordering matches the real store.
            stored.timestamp = Some(format!("2026-01-01 00:00:{id:02}"));
        }
        self.records.lock().unwrap().push(stored);
        Ok(id)
    }

    async fn list(
        &self,
        filters: &RecordFilters,
        page: PageRequest,
    ) -> Result<(Vec<AnnotatedRecord>, u64), DomainError> {
        let all = self.apply_filters(self.sorted_desc(), filters);
        let total = all.len() as u64;
        let rows = all
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.page_size as usize)
            .collect();
        Ok((rows, total))
    }

    async fn latest(&self, limit: u32) -> Result<Vec<AnnotatedRecord>, DomainError> {
        Ok(self
            .sorted_desc()
            .into_iter()
            .take(limit as usize)
            .map(|r| self.annotate(r))
            .collect())
    }

    async fn fetch_after(
        &self,
        cursor: i64,
        limit: u32,
    ) -> Result<Vec<AnnotatedRecord>, DomainError> {
        let mut rows = self.records.lock().unwrap().clone();
        rows.sort_by_key(|r| r.id);
        Ok(rows
            .into_iter()
            .filter(|r| r.id.unwrap_or(0) > cursor)
            .take(limit as usize)
            .map(|r| self.annotate(r))
            .collect())
    }

    async fn export(&self, filters: &RecordFilters) -> Result<Vec<AnnotatedRecord>, DomainError> {
        Ok(self.apply_filters(self.sorted_desc(), filters))
    }

    async fn stats(&self) -> Result<MonitorStats, DomainError> {
        let rows = self.records.lock().unwrap().clone();
        let total_records = rows.len() as u64;
        let blacklisted_count = rows
            .iter()
            .filter(|r| self.blocklist.matches(&r.url).is_some())
            .count() as u64;

        let mut students: Vec<&str> = rows.iter().map(|r| r.student_id.as_str()).collect();
        students.sort();
        students.dedup();

        let mut visits: HashMap<String, u64> = HashMap::new();
        for row in &rows {
            *visits.entry(row.url.clone()).or_default() += 1;
        }
        let mut top_domains: Vec<DomainVisits> = visits
            .into_iter()
            .map(|(url, visit_count)| DomainVisits { url, visit_count })
            .collect();
        top_domains.sort_by(|a, b| b.visit_count.cmp(&a.visit_count));
        top_domains.truncate(10);

        Ok(MonitorStats {
            total_records,
            blacklisted_count,
            student_count: students.len() as u64,
            top_domains,
        })
    }

    async fn clear(&self) -> Result<u64, DomainError> {
        let mut records = self.records.lock().unwrap();
        let deleted = records.len() as u64;
        records.clear();
        Ok(deleted)
    }
}
