use crate::{
    dto::{
        AddDomainRequest, AddIpRequest, CheckRequest, CheckResponse, DomainBlockResponse,
        IpBlockResponse, MutationResponse,
    },
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use classwatch_domain::DomainError;
use tracing::instrument;

pub async fn get_domain_blocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<DomainBlockResponse>>, ApiError> {
    let entries = state.blacklist.get_domains.execute().await?;
    Ok(Json(
        entries.into_iter().map(DomainBlockResponse::from).collect(),
    ))
}

#[instrument(skip(state), name = "api_add_domain_block")]
pub async fn add_domain_block(
    State(state): State<AppState>,
    Json(request): Json<AddDomainRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let domain = request
        .domain
        .ok_or(DomainError::MissingField("domain"))?;
    let mutation = state
        .blacklist
        .add_domain
        .execute(domain, request.reason)
        .await?;
    Ok(Json(mutation.into()))
}

pub async fn remove_domain_block(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mutation = state.blacklist.remove_domain.execute(id).await?;
    Ok(Json(mutation.into()))
}

pub async fn get_ip_blocks(
    State(state): State<AppState>,
) -> Result<Json<Vec<IpBlockResponse>>, ApiError> {
    let entries = state.blacklist.get_ips.execute().await?;
    Ok(Json(
        entries.into_iter().map(IpBlockResponse::from).collect(),
    ))
}

#[instrument(skip(state), name = "api_add_ip_block")]
pub async fn add_ip_block(
    State(state): State<AppState>,
    Json(request): Json<AddIpRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let ip_address = request
        .ip_address
        .or(request.ip)
        .ok_or(DomainError::MissingField("ip_address"))?;
    let mutation = state
        .blacklist
        .add_ip
        .execute(ip_address, request.reason)
        .await?;
    Ok(Json(mutation.into()))
}

/// The path segment is a store id or a literal dotted-quad; the use case
/// disambiguates by syntax.
pub async fn remove_ip_block(
    State(state): State<AppState>,
    Path(selector): Path<String>,
) -> Result<Json<MutationResponse>, ApiError> {
    let mutation = state.blacklist.remove_ip.execute(selector).await?;
    Ok(Json(mutation.into()))
}

pub async fn check_blacklist(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, ApiError> {
    let decision = state
        .blacklist
        .check
        .execute(request.domain, request.ip)
        .await?;

    Ok(Json(CheckResponse {
        blacklisted: decision.blocked,
        kind: decision.kind,
        reason: decision.reason,
    }))
}
