use classwatch_application::use_cases::RecordView;
use classwatch_domain::record_query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use classwatch_domain::{Pagination, RecordFilters};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct RecordsQuery {
    pub student_id: Option<String>,
    pub domain: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Tri-state as the literal strings `true` / `false`; anything else
    /// leaves the filter unset.
    pub blacklisted: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl RecordsQuery {
    pub fn filters(&self) -> RecordFilters {
        RecordFilters {
            student_id: self.student_id.clone(),
            domain: self.domain.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            blacklisted: match self.blacklisted.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
        }
    }
}

#[derive(Serialize, Debug)]
pub struct RecordResponse {
    pub id: i64,
    pub student_id: String,
    pub student_ip: String,
    pub url: String,
    pub original_url: Option<String>,
    pub title: String,
    pub timestamp: String,
    pub blacklisted: bool,
    pub blacklist_reason: Option<String>,
}

impl From<RecordView> for RecordResponse {
    fn from(view: RecordView) -> Self {
        Self {
            id: view.id,
            student_id: view.student_id,
            student_ip: view.student_ip,
            url: view.url,
            original_url: view.original_url,
            title: view.title,
            timestamp: view.timestamp,
            blacklisted: view.blacklisted,
            blacklist_reason: view.blacklist_reason,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct PaginatedRecords {
    pub data: Vec<RecordResponse>,
    pub pagination: Pagination,
}

#[derive(Deserialize, Debug)]
pub struct LatestQuery {
    #[serde(default = "default_page_size")]
    pub limit: u32,
}

#[derive(Deserialize, Debug)]
pub struct StreamQuery {
    #[serde(default)]
    pub after: i64,
    #[serde(default = "default_stream_limit")]
    pub limit: u32,
}

fn default_stream_limit() -> u32 {
    MAX_PAGE_SIZE
}

#[derive(Serialize, Debug)]
pub struct StreamResponse {
    pub data: Vec<RecordResponse>,
    /// High-water mark to feed back as `after` on the next poll.
    pub cursor: i64,
}

#[derive(Serialize, Debug)]
pub struct ClearResponse {
    pub ok: bool,
    pub message: String,
    pub deleted_count: u64,
}

/// Flat export shape: no id, no original_url, exactly the review columns.
#[derive(Serialize, Debug)]
pub struct ExportRowResponse {
    pub student_id: String,
    pub student_ip: String,
    pub url: String,
    pub title: String,
    pub timestamp: String,
    pub blacklisted: bool,
    pub blacklist_reason: Option<String>,
}

impl From<RecordView> for ExportRowResponse {
    fn from(view: RecordView) -> Self {
        Self {
            student_id: view.student_id,
            student_ip: view.student_ip,
            url: view.url,
            title: view.title,
            timestamp: view.timestamp,
            blacklisted: view.blacklisted,
            blacklist_reason: view.blacklist_reason,
        }
    }
}
