use classwatch_application::ports::{DomainBlocklistRepository, IpBlocklistRepository};
use classwatch_domain::blocklist::{BlockedDomain, BlockedIp};
use classwatch_infrastructure::{
    create_pool, init_schema, SchemaMode, SqliteDomainBlocklistRepository,
    SqliteIpBlocklistRepository,
};
use sqlx::SqlitePool;

async fn memory_pool() -> SqlitePool {
    let pool = create_pool("sqlite::memory:", 1).await.unwrap();
    init_schema(&pool, SchemaMode::CreateIfAbsent).await.unwrap();
    pool
}

#[tokio::test]
async fn duplicate_domain_insert_is_ignored() {
    let repo = SqliteDomainBlocklistRepository::new(memory_pool().await);

    let entry = BlockedDomain::new("taobao.com".to_string(), Some("shopping".to_string()));
    assert!(repo.add(&entry).await.unwrap());
    assert!(!repo.add(&entry).await.unwrap());

    let all = repo.get_all().await.unwrap();
    let taobao: Vec<_> = all.iter().filter(|e| e.domain == "taobao.com").collect();
    assert_eq!(taobao.len(), 1);
}

#[tokio::test]
async fn sql_like_match_uses_entry_as_needle() {
    let repo = SqliteDomainBlocklistRepository::new(memory_pool().await);

    // Seeded qq.com: candidate containing it matches.
    assert!(repo.find_match("qq.com").await.unwrap().is_some());
    assert!(repo
        .find_match("www.qq.com.evil.org")
        .await
        .unwrap()
        .is_some());
    assert!(repo.find_match("baidu.com").await.unwrap().is_none());

    repo.add(&BlockedDomain::new("a.com".to_string(), None))
        .await
        .unwrap();
    // The reversed containment check: xa.com contains a.com.
    assert!(repo.find_match("xa.com").await.unwrap().is_some());
    // But a bare prefix of the entry does not.
    assert!(repo.find_match("a.co").await.unwrap().is_none());
}

#[tokio::test]
async fn remove_domain_by_id() {
    let repo = SqliteDomainBlocklistRepository::new(memory_pool().await);

    repo.add(&BlockedDomain::new("remove-me.org".to_string(), None))
        .await
        .unwrap();
    let id = repo
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .find(|e| e.domain == "remove-me.org")
        .and_then(|e| e.id)
        .unwrap();

    assert!(repo.remove_by_id(id).await.unwrap());
    assert!(!repo.remove_by_id(id).await.unwrap());
    assert!(repo.find_match("remove-me.org").await.unwrap().is_none());
}

#[tokio::test]
async fn ip_entries_match_exactly() {
    let repo = SqliteIpBlocklistRepository::new(memory_pool().await);

    let entry = BlockedIp {
        id: None,
        ip_address: "192.168.1.50".to_string(),
        reason: Some("lab machine".to_string()),
        created_at: None,
    };
    assert!(repo.add(&entry).await.unwrap());
    assert!(!repo.add(&entry).await.unwrap());

    let found = repo.find_exact("192.168.1.50").await.unwrap().unwrap();
    assert_eq!(found.reason.as_deref(), Some("lab machine"));

    // Exact equality only: no prefix or substring leniency.
    assert!(repo.find_exact("192.168.1.5").await.unwrap().is_none());
    assert!(repo.find_exact("192.168.1.500").await.unwrap().is_none());
}

#[tokio::test]
async fn ip_removal_by_id_and_by_address() {
    let repo = SqliteIpBlocklistRepository::new(memory_pool().await);

    for ip in ["10.0.0.1", "10.0.0.2"] {
        repo.add(&BlockedIp {
            id: None,
            ip_address: ip.to_string(),
            reason: None,
            created_at: None,
        })
        .await
        .unwrap();
    }

    assert!(repo.remove_by_ip("10.0.0.1").await.unwrap());
    assert!(!repo.remove_by_ip("10.0.0.1").await.unwrap());

    let id = repo.get_all().await.unwrap()[0].id.unwrap();
    assert!(repo.remove_by_id(id).await.unwrap());
    assert!(repo.get_all().await.unwrap().is_empty());
}
