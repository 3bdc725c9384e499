//! Classwatch HTTP API
//!
//! Thin axum adapter over the application use cases: DTOs in, DTOs out,
//! error mapping to HTTP statuses. No business rules live here.
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_api_routes;
pub use state::{AppState, BlacklistUseCases, RecordUseCases};
