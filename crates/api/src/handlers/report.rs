use crate::{
    dto::{ReportRequest, ReportResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Extension, Json,
};
use classwatch_application::use_cases::ReportContext;
use std::net::SocketAddr;
use tracing::instrument;

#[instrument(skip_all, name = "api_submit_report")]
pub async fn submit_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    connect_info: Option<Extension<ConnectInfo<SocketAddr>>>,
    Json(request): Json<ReportRequest>,
) -> Result<Json<ReportResponse>, ApiError> {
    let ctx = ReportContext {
        forwarded_for: headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        peer_addr: connect_info.map(|Extension(ConnectInfo(addr))| addr.ip()),
    };

    let outcome = state
        .submit_report
        .execute(request.into_payload(), ctx)
        .await?;

    Ok(Json(outcome.into()))
}
