use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classwatch_domain::DomainError;
use serde_json::json;

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::MissingField(_)
            | DomainError::InvalidDomain(_)
            | DomainError::InvalidIpAddress(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),

            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),

            DomainError::DatabaseError(_) | DomainError::ConfigError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
