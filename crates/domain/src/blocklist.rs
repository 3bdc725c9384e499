use serde::Serialize;

#[derive(Debug, Clone)]
pub struct BlockedDomain {
    pub id: Option<i64>,
    pub domain: String,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

impl BlockedDomain {
    pub fn new(domain: String, reason: Option<String>) -> Self {
        Self {
            id: None,
            domain,
            reason,
            created_at: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BlockedIp {
    pub id: Option<i64>,
    pub ip_address: String,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Domain,
    Ip,
}

/// Outcome of a blocklist check. `kind` is `None` when nothing matched.
#[derive(Debug, Clone)]
pub struct BlockDecision {
    pub blocked: bool,
    pub reason: Option<String>,
    pub kind: Option<BlockKind>,
}

impl BlockDecision {
    pub fn clear() -> Self {
        Self {
            blocked: false,
            reason: None,
            kind: None,
        }
    }

    pub fn domain_match(reason: Option<String>) -> Self {
        Self {
            blocked: true,
            reason,
            kind: Some(BlockKind::Domain),
        }
    }

    pub fn ip_match(reason: Option<String>) -> Self {
        Self {
            blocked: true,
            reason,
            kind: Some(BlockKind::Ip),
        }
    }
}
