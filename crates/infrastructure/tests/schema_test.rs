use classwatch_infrastructure::{create_pool, init_schema, SchemaMode};
use sqlx::Row;

#[tokio::test]
async fn init_is_idempotent_and_seeds_once() {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();

    init_schema(&pool, SchemaMode::CreateIfAbsent).await.unwrap();
    init_schema(&pool, SchemaMode::CreateIfAbsent).await.unwrap();

    let count: i64 = sqlx::query("SELECT COUNT(*) as total FROM blacklist")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("total");
    assert_eq!(count, 4, "seed domains must not duplicate across restarts");

    let seeded: i64 = sqlx::query("SELECT COUNT(*) as total FROM blacklist WHERE domain = 'qq.com'")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("total");
    assert_eq!(seeded, 1);
}

#[tokio::test]
async fn create_if_absent_preserves_rows_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("data.db").display());

    let pool = create_pool(&url, 2).await.unwrap();
    init_schema(&pool, SchemaMode::CreateIfAbsent).await.unwrap();
    sqlx::query("INSERT INTO browsing_records (student_id, url) VALUES ('s1', 'example.com')")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    // Simulated restart: same file, same init path.
    let pool = create_pool(&url, 2).await.unwrap();
    init_schema(&pool, SchemaMode::CreateIfAbsent).await.unwrap();

    let count: i64 = sqlx::query("SELECT COUNT(*) as total FROM browsing_records")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("total");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn drop_and_recreate_starts_clean_but_reseeds() {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    init_schema(&pool, SchemaMode::CreateIfAbsent).await.unwrap();

    sqlx::query("INSERT INTO browsing_records (student_id, url) VALUES ('s1', 'example.com')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO blacklist (domain) VALUES ('custom.example')")
        .execute(&pool)
        .await
        .unwrap();

    init_schema(&pool, SchemaMode::DropAndRecreate).await.unwrap();

    let records: i64 = sqlx::query("SELECT COUNT(*) as total FROM browsing_records")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("total");
    assert_eq!(records, 0);

    let blocked: i64 = sqlx::query("SELECT COUNT(*) as total FROM blacklist")
        .fetch_one(&pool)
        .await
        .unwrap()
        .get("total");
    assert_eq!(blocked, 4, "only the seed set survives a reset");
}
