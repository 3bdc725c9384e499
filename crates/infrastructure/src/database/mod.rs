use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{info, warn};

/// How to bring the schema up on start.
///
/// `CreateIfAbsent` is the production default and preserves existing rows on
/// every restart. `DropAndRecreate` destroys all three tables first; it is
/// only reachable through an explicit opt-in and must never run silently
/// against a live data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    CreateIfAbsent,
    DropAndRecreate,
}

/// Default blocked domains, seeded with insert-or-ignore semantics so a
/// restart never errors and never duplicates.
const SEED_DOMAINS: &[(&str, &str)] = &[
    ("qq.com", "social media"),
    ("youku.com", "video streaming"),
    ("games.com", "gaming"),
    ("douyu.com", "live streaming"),
];

pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Idempotent schema setup: three tables, their indexes, and the seed
/// blocklist. Safe to run on every process start in `CreateIfAbsent` mode.
pub async fn init_schema(pool: &SqlitePool, mode: SchemaMode) -> Result<(), sqlx::Error> {
    if mode == SchemaMode::DropAndRecreate {
        warn!("Dropping all tables before recreation; existing data is lost");
        for table in ["browsing_records", "blacklist", "ip_blacklist"] {
            sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
                .execute(pool)
                .await?;
        }
    }

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS browsing_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            student_id TEXT NOT NULL,
            student_ip TEXT,
            url TEXT NOT NULL,
            original_url TEXT,
            title TEXT,
            timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS blacklist (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            domain TEXT NOT NULL UNIQUE,
            reason TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS ip_blacklist (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ip_address TEXT NOT NULL UNIQUE,
            reason TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;

    // Every read path joins or filters on these columns.
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_records_student_id ON browsing_records(student_id)",
        "CREATE INDEX IF NOT EXISTS idx_records_timestamp ON browsing_records(timestamp)",
        "CREATE INDEX IF NOT EXISTS idx_records_url ON browsing_records(url)",
        "CREATE INDEX IF NOT EXISTS idx_records_original_url ON browsing_records(original_url)",
        "CREATE INDEX IF NOT EXISTS idx_blacklist_domain ON blacklist(domain)",
        "CREATE INDEX IF NOT EXISTS idx_ip_blacklist_address ON ip_blacklist(ip_address)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    for (domain, reason) in SEED_DOMAINS {
        sqlx::query("INSERT OR IGNORE INTO blacklist (domain, reason) VALUES (?, ?)")
            .bind(domain)
            .bind(reason)
            .execute(pool)
            .await?;
    }

    info!(mode = ?mode, "Database schema ready");
    Ok(())
}
