use crate::{dto::StatsResponse, errors::ApiError, state::AppState};
use axum::{extract::State, Json};

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.records.stats.execute().await?;
    Ok(Json(stats.into()))
}
