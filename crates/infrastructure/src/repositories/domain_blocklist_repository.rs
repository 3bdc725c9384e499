use async_trait::async_trait;
use classwatch_application::ports::DomainBlocklistRepository;
use classwatch_domain::{blocklist::BlockedDomain, DomainError};
use sqlx::{Row, SqlitePool};
use tracing::{debug, error};

pub struct SqliteDomainBlocklistRepository {
    pool: SqlitePool,
}

impl SqliteDomainBlocklistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DomainBlocklistRepository for SqliteDomainBlocklistRepository {
    async fn get_all(&self) -> Result<Vec<BlockedDomain>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, domain, reason, datetime(created_at) as created_at
             FROM blacklist ORDER BY domain",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch domain blocklist");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows
            .into_iter()
            .map(|row| BlockedDomain {
                id: Some(row.get("id")),
                domain: row.get("domain"),
                reason: row.get("reason"),
                created_at: row.get("created_at"),
            })
            .collect())
    }

    async fn add(&self, entry: &BlockedDomain) -> Result<bool, DomainError> {
        let result = sqlx::query("INSERT OR IGNORE INTO blacklist (domain, reason) VALUES (?, ?)")
            .bind(&entry.domain)
            .bind(&entry.reason)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, domain = %entry.domain, "Failed to add domain to blocklist");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM blacklist WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Failed to remove domain from blocklist");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_match(&self, candidate: &str) -> Result<Option<BlockedDomain>, DomainError> {
        // Candidate on the left: the stored domain is the needle. Entry
        // `a.com` therefore also matches `xa.com` — observed, load-bearing
        // over-blocking that must not be tightened here.
        let row = sqlx::query(
            "SELECT id, domain, reason, datetime(created_at) as created_at
             FROM blacklist WHERE ? LIKE '%' || domain || '%' LIMIT 1",
        )
        .bind(candidate)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, candidate, "Domain blocklist lookup failed");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(candidate, matched = row.is_some(), "Domain blocklist lookup");
        Ok(row.map(|row| BlockedDomain {
            id: Some(row.get("id")),
            domain: row.get("domain"),
            reason: row.get("reason"),
            created_at: row.get("created_at"),
        }))
    }
}
