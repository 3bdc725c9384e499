use classwatch_application::use_cases::BlocklistMutation;
use classwatch_domain::blocklist::{BlockKind, BlockedDomain, BlockedIp};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct DomainBlockResponse {
    pub id: i64,
    pub domain: String,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

impl From<BlockedDomain> for DomainBlockResponse {
    fn from(entry: BlockedDomain) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            domain: entry.domain,
            reason: entry.reason,
            created_at: entry.created_at,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct IpBlockResponse {
    pub id: i64,
    pub ip_address: String,
    /// Duplicate of `ip_address`, kept for older admin clients.
    pub ip: String,
    pub reason: Option<String>,
    pub created_at: Option<String>,
}

impl From<BlockedIp> for IpBlockResponse {
    fn from(entry: BlockedIp) -> Self {
        Self {
            id: entry.id.unwrap_or_default(),
            ip: entry.ip_address.clone(),
            ip_address: entry.ip_address,
            reason: entry.reason,
            created_at: entry.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AddDomainRequest {
    pub domain: Option<String>,
    pub reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct AddIpRequest {
    /// Either field name is accepted; `ip_address` wins when both appear.
    pub ip_address: Option<String>,
    pub ip: Option<String>,
    pub reason: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct MutationResponse {
    pub ok: bool,
    pub message: String,
}

impl From<BlocklistMutation> for MutationResponse {
    fn from(mutation: BlocklistMutation) -> Self {
        Self {
            ok: mutation.ok,
            message: mutation.message,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct CheckRequest {
    pub domain: Option<String>,
    pub ip: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CheckResponse {
    pub blacklisted: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<BlockKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
