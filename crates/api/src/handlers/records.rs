use crate::{
    dto::{
        ClearResponse, ExportRowResponse, LatestQuery, PaginatedRecords, RecordResponse,
        RecordsQuery, StreamQuery, StreamResponse,
    },
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use classwatch_domain::PageRequest;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_records")]
pub async fn get_records(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<PaginatedRecords>, ApiError> {
    let page = PageRequest::new(params.page, params.page_size);
    let result = state.records.list.execute(params.filters(), page).await?;

    debug!(
        count = result.data.len(),
        total = result.pagination.total_items,
        "Records retrieved"
    );

    Ok(Json(PaginatedRecords {
        data: result.data.into_iter().map(RecordResponse::from).collect(),
        pagination: result.pagination,
    }))
}

pub async fn get_latest(
    State(state): State<AppState>,
    Query(params): Query<LatestQuery>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let rows = state.records.latest.execute(params.limit).await?;
    Ok(Json(rows.into_iter().map(RecordResponse::from).collect()))
}

pub async fn stream_records(
    State(state): State<AppState>,
    Query(params): Query<StreamQuery>,
) -> Result<Json<StreamResponse>, ApiError> {
    let (rows, cursor) = state
        .records
        .poll
        .execute(params.after, params.limit)
        .await?;

    Ok(Json(StreamResponse {
        data: rows.into_iter().map(RecordResponse::from).collect(),
        cursor,
    }))
}

#[instrument(skip(state), name = "api_clear_records")]
pub async fn clear_records(
    State(state): State<AppState>,
) -> Result<Json<ClearResponse>, ApiError> {
    let deleted_count = state.records.clear.execute().await?;
    Ok(Json(ClearResponse {
        ok: true,
        message: format!("Cleared {deleted_count} records"),
        deleted_count,
    }))
}

#[instrument(skip(state), name = "api_export_records")]
pub async fn export_records(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> Result<Json<Vec<ExportRowResponse>>, ApiError> {
    let rows = state.records.export.execute(params.filters()).await?;
    Ok(Json(rows.into_iter().map(ExportRowResponse::from).collect()))
}
