pub mod dto;
pub mod entries;
pub mod errors;
pub mod extract;
pub mod models;
pub mod photos;
pub mod routes;
pub mod state;
pub mod store;
pub mod votes;

use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{routes::method_not_allowed, state::AppState};

/// Upper bound on any single request, store access included. The
/// original deployment leaned on the platform default; here it is
/// explicit.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the application router. Tests call this directly with an
/// in-memory store; `main` wraps it in a TCP listener.
pub fn app(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/votes",
            get(routes::votes::get_votes)
                .post(routes::votes::cast_vote)
                .fallback(method_not_allowed),
        )
        .route(
            "/entries",
            get(routes::entries::get_entries)
                .post(routes::entries::create_entry)
                .fallback(method_not_allowed),
        )
        .route(
            "/photos",
            get(routes::photos::get_photos).fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
}
