use async_trait::async_trait;
use classwatch_application::ports::IpBlocklistRepository;
use classwatch_domain::{blocklist::BlockedIp, DomainError};
use sqlx::{Row, SqlitePool};
use tracing::error;

pub struct SqliteIpBlocklistRepository {
    pool: SqlitePool,
}

impl SqliteIpBlocklistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: sqlx::sqlite::SqliteRow) -> BlockedIp {
        BlockedIp {
            id: Some(row.get("id")),
            ip_address: row.get("ip_address"),
            reason: row.get("reason"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl IpBlocklistRepository for SqliteIpBlocklistRepository {
    async fn get_all(&self) -> Result<Vec<BlockedIp>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, ip_address, reason, datetime(created_at) as created_at
             FROM ip_blacklist ORDER BY ip_address",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch IP blocklist");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_entry).collect())
    }

    async fn add(&self, entry: &BlockedIp) -> Result<bool, DomainError> {
        let result =
            sqlx::query("INSERT OR IGNORE INTO ip_blacklist (ip_address, reason) VALUES (?, ?)")
                .bind(&entry.ip_address)
                .bind(&entry.reason)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, ip = %entry.ip_address, "Failed to add IP to blocklist");
                    DomainError::DatabaseError(e.to_string())
                })?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM ip_blacklist WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, id, "Failed to remove IP from blocklist");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_by_ip(&self, ip: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM ip_blacklist WHERE ip_address = ?")
            .bind(ip)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, ip, "Failed to remove IP from blocklist");
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_exact(&self, ip: &str) -> Result<Option<BlockedIp>, DomainError> {
        let row = sqlx::query(
            "SELECT id, ip_address, reason, datetime(created_at) as created_at
             FROM ip_blacklist WHERE ip_address = ?",
        )
        .bind(ip)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, ip, "IP blocklist lookup failed");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Self::row_to_entry))
    }
}
