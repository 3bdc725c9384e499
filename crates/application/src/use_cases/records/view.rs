use crate::ports::AnnotatedRecord;
use classwatch_domain::normalizer::{display_domain, display_ip, PLACEHOLDER};

/// A record shaped for reviewers: domain and IP passed through the
/// display-time normalizer, placeholders filled in. This is the shape every
/// read path (list, latest, poll, export) hands to the transport layer.
#[derive(Debug, Clone)]
pub struct RecordView {
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

impl RecordView {
    pub fn from_annotated(annotated: AnnotatedRecord) -> Self {
        let AnnotatedRecord {
            record,
            blacklisted,
            blacklist_reason,
        } = annotated;

        let original_url = record.original_url.clone();
        Self {
            id: record.id.unwrap_or_default(),
            student_id: record.student_id,
            student_ip: display_ip(record.student_ip.as_deref()),
            url: display_domain(&record.url, original_url.as_deref().unwrap_or("")),
            original_url,
            title: record
                .title
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            timestamp: record.timestamp.unwrap_or_default(),
            blacklisted,
            blacklist_reason,
        }
    }
}
