/// A single browsing-activity report, as persisted.
///
/// `url` always holds the normalized domain used for blocklist matching,
/// never the raw scheme/path form — that lives in `original_url` and is only
/// consulted when redisplaying a record whose stored domain is a sentinel.
/// Records are immutable once written; the only delete path is the bulk
/// clear operation.
#[derive(Debug, Clone)]
pub struct BrowsingRecord {
    pub id: Option<i64>,
    pub student_id: String,
    pub student_ip: Option<String>,
    pub url: String,
    pub original_url: Option<String>,
    pub title: Option<String>,
    pub timestamp: Option<String>,
}
