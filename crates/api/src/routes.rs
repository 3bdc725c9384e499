use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/report", post(handlers::report::submit_report))
        .route("/api/records", get(handlers::records::get_records))
        .route("/api/records/stream", get(handlers::records::stream_records))
        .route("/api/records/clear", delete(handlers::records::clear_records))
        .route("/api/latest", get(handlers::records::get_latest))
        .route("/api/export", get(handlers::records::export_records))
        .route("/api/stats", get(handlers::stats::get_stats))
        .route(
            "/api/blacklist/domains",
            get(handlers::blacklist::get_domain_blocks),
        )
        .route(
            "/api/blacklist/domains/add",
            post(handlers::blacklist::add_domain_block),
        )
        .route(
            "/api/blacklist/domains/{id}",
            delete(handlers::blacklist::remove_domain_block),
        )
        .route("/api/blacklist/ips", get(handlers::blacklist::get_ip_blocks))
        .route(
            "/api/blacklist/ips/add",
            post(handlers::blacklist::add_ip_block),
        )
        .route(
            "/api/blacklist/ips/{id}",
            delete(handlers::blacklist::remove_ip_block),
        )
        .route(
            "/api/blacklist/check",
            post(handlers::blacklist::check_blacklist),
        )
        .with_state(state)
}
