use classwatch_application::use_cases::{ReportOutcome, ReportPayload};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
pub struct ReportRequest {
    pub student_id: Option<String>,
    pub student_ip: Option<String>,
    pub url: Option<String>,
    pub original_url: Option<String>,
    pub domain: Option<String>,
    pub title: Option<String>,
    pub timestamp: Option<String>,
    /// Clients may attach a base64 screenshot; accepted for compatibility
    /// and discarded — binary payloads are not stored.
    #[serde(default)]
    pub screenshot: Option<String>,
}

impl ReportRequest {
    pub fn into_payload(self) -> ReportPayload {
        ReportPayload {
            student_id: self.student_id,
            student_ip: self.student_ip,
            url: self.url,
            original_url: self.original_url,
            domain: self.domain,
            title: self.title,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ReportResponse {
    pub ok: bool,
    pub blacklisted: bool,
    pub message: String,
}

impl From<ReportOutcome> for ReportResponse {
    fn from(outcome: ReportOutcome) -> Self {
        Self {
            ok: outcome.ok,
            blacklisted: outcome.blacklisted,
            message: outcome.message,
        }
    }
}
