use async_trait::async_trait;
use classwatch_application::ports::{AnnotatedRecord, RecordRepository};
use classwatch_domain::{
    BrowsingRecord, DomainError, DomainVisits, MonitorStats, PageRequest, RecordFilters,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::{debug, error, instrument};

/// Columns every annotated read selects. The CASE folds the join into the
/// per-row blocked flag; reason comes from whichever blocklist row matched.
const RECORD_COLUMNS: &str = "r.id, r.student_id, r.student_ip, r.url, r.original_url, r.title,
        datetime(r.timestamp) as timestamp,
        CASE WHEN b.id IS NOT NULL THEN 1 ELSE 0 END AS blacklisted,
        b.reason AS blacklist_reason";

/// The substring join: a record is annotated as blocked when any blocklist
/// domain occurs inside its stored url. Candidate on the left, entry as the
/// needle — deliberately loose, see the matcher port docs.
const BLOCKLIST_JOIN: &str = "LEFT JOIN blacklist b ON r.url LIKE '%' || b.domain || '%'";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

type SqliteQuery<'q> = sqlx::query::Query<'q, sqlx::Sqlite, sqlx::sqlite::SqliteArguments<'q>>;

/// Build the WHERE fragment for the optional filters. Bind order must match
/// [`bind_filters`]: student_id, domain pattern, start_time, end_time. The
/// blacklisted tri-state adds no bind.
fn filter_clause(filters: &RecordFilters) -> String {
    let mut conditions: Vec<&str> = Vec::new();

    if filters.student_id.is_some() {
        conditions.push("r.student_id = ?");
    }
    if filters.domain.is_some() {
        conditions.push("r.url LIKE ?");
    }
    if filters.start_time.is_some() {
        conditions.push("r.timestamp >= ?");
    }
    if filters.end_time.is_some() {
        conditions.push("r.timestamp <= ?");
    }
    match filters.blacklisted {
        Some(true) => conditions.push("b.id IS NOT NULL"),
        Some(false) => conditions.push("b.id IS NULL"),
        None => {}
    }

    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

fn bind_filters<'q>(mut query: SqliteQuery<'q>, filters: &'q RecordFilters) -> SqliteQuery<'q> {
    if let Some(student_id) = &filters.student_id {
        query = query.bind(student_id);
    }
    if let Some(domain) = &filters.domain {
        query = query.bind(format!("%{domain}%"));
    }
    if let Some(start) = &filters.start_time {
        query = query.bind(start);
    }
    if let Some(end) = &filters.end_time {
        query = query.bind(end);
    }
    query
}

fn row_to_annotated(row: SqliteRow) -> AnnotatedRecord {
    AnnotatedRecord {
        record: BrowsingRecord {
            id: Some(row.get("id")),
            student_id: row.get("student_id"),
            student_ip: row.get("student_ip"),
            url: row.get("url"),
            original_url: row.get("original_url"),
            title: row.get("title"),
            timestamp: row.get("timestamp"),
        },
        blacklisted: row.get::<i64, _>("blacklisted") != 0,
        blacklist_reason: row.get("blacklist_reason"),
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self, record), fields(student_id = %record.student_id))]
    async fn insert(&self, record: &BrowsingRecord) -> Result<i64, DomainError> {
        // Records with no client timestamp take the column default, so the
        // insert statement only names the column when a value exists.
        let result = if let Some(timestamp) = &record.timestamp {
            sqlx::query(
                "INSERT INTO browsing_records
                 (student_id, student_ip, url, original_url, title, timestamp)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&record.student_id)
            .bind(&record.student_ip)
            .bind(&record.url)
            .bind(&record.original_url)
            .bind(&record.title)
            .bind(timestamp)
            .execute(&self.pool)
            .await
        } else {
            sqlx::query(
                "INSERT INTO browsing_records
                 (student_id, student_ip, url, original_url, title)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&record.student_id)
            .bind(&record.student_ip)
            .bind(&record.url)
            .bind(&record.original_url)
            .bind(&record.title)
            .execute(&self.pool)
            .await
        }
        .map_err(|e| {
            error!(error = %e, "Failed to insert browsing record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(result.last_insert_rowid())
    }

    #[instrument(skip(self))]
    async fn list(
        &self,
        filters: &RecordFilters,
        page: PageRequest,
    ) -> Result<(Vec<AnnotatedRecord>, u64), DomainError> {
        let where_clause = filter_clause(filters);

        let data_sql = format!(
            "SELECT {RECORD_COLUMNS}
             FROM browsing_records r
             {BLOCKLIST_JOIN}
             {where_clause}
             ORDER BY r.timestamp DESC, r.id DESC
             LIMIT ? OFFSET ?"
        );
        let rows = bind_filters(sqlx::query(&data_sql), filters)
            .bind(page.page_size as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to list browsing records");
                DomainError::DatabaseError(e.to_string())
            })?;

        let count_sql = format!(
            "SELECT COUNT(*) as total
             FROM browsing_records r
             {BLOCKLIST_JOIN}
             {where_clause}"
        );
        let total: i64 = bind_filters(sqlx::query(&count_sql), filters)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count browsing records");
                DomainError::DatabaseError(e.to_string())
            })?
            .get("total");

        debug!(count = rows.len(), total, "Records page fetched");
        Ok((
            rows.into_iter().map(row_to_annotated).collect(),
            total as u64,
        ))
    }

    async fn latest(&self, limit: u32) -> Result<Vec<AnnotatedRecord>, DomainError> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS}
             FROM browsing_records r
             {BLOCKLIST_JOIN}
             ORDER BY r.timestamp DESC, r.id DESC
             LIMIT ?"
        );
        let rows = sqlx::query(&sql)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch latest records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_annotated).collect())
    }

    async fn fetch_after(
        &self,
        cursor: i64,
        limit: u32,
    ) -> Result<Vec<AnnotatedRecord>, DomainError> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS}
             FROM browsing_records r
             {BLOCKLIST_JOIN}
             WHERE r.id > ?
             ORDER BY r.id ASC
             LIMIT ?"
        );
        let rows = sqlx::query(&sql)
            .bind(cursor)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, cursor, "Failed to fetch records after cursor");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_annotated).collect())
    }

    #[instrument(skip(self))]
    async fn export(&self, filters: &RecordFilters) -> Result<Vec<AnnotatedRecord>, DomainError> {
        let where_clause = filter_clause(filters);
        let sql = format!(
            "SELECT {RECORD_COLUMNS}
             FROM browsing_records r
             {BLOCKLIST_JOIN}
             {where_clause}
             ORDER BY r.timestamp DESC, r.id DESC"
        );
        let rows = bind_filters(sqlx::query(&sql), filters)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to export browsing records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(rows.into_iter().map(row_to_annotated).collect())
    }

    #[instrument(skip(self))]
    async fn stats(&self) -> Result<MonitorStats, DomainError> {
        let (total, blocked, students, top) = tokio::join!(
            sqlx::query("SELECT COUNT(*) as total FROM browsing_records").fetch_one(&self.pool),
            sqlx::query(
                "SELECT COUNT(*) as total
                 FROM browsing_records r
                 JOIN blacklist b ON r.url LIKE '%' || b.domain || '%'"
            )
            .fetch_one(&self.pool),
            sqlx::query("SELECT COUNT(DISTINCT student_id) as total FROM browsing_records")
                .fetch_one(&self.pool),
            sqlx::query(
                "SELECT url, COUNT(*) as visit_count
                 FROM browsing_records
                 GROUP BY url
                 ORDER BY visit_count DESC
                 LIMIT 10"
            )
            .fetch_all(&self.pool),
        );

        let map_db_err = |e: sqlx::Error| {
            error!(error = %e, "Failed to compute statistics");
            DomainError::DatabaseError(e.to_string())
        };

        Ok(MonitorStats {
            total_records: total.map_err(map_db_err)?.get::<i64, _>("total") as u64,
            blacklisted_count: blocked.map_err(map_db_err)?.get::<i64, _>("total") as u64,
            student_count: students.map_err(map_db_err)?.get::<i64, _>("total") as u64,
            top_domains: top
                .map_err(map_db_err)?
                .into_iter()
                .map(|row| DomainVisits {
                    url: row.get("url"),
                    visit_count: row.get::<i64, _>("visit_count") as u64,
                })
                .collect(),
        })
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM browsing_records")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to clear browsing records");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
