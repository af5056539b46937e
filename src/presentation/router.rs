use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::error::panic_response;
use crate::presentation::handlers::{
    enhance_handler, health_handler, not_found_handler, transcribe_handler, upload_handler,
};
use crate::presentation::middleware::permissive_cors_headers;
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload", post(upload_handler))
        .route("/upload/", post(upload_handler))
        .route("/transcribe", post(transcribe_handler))
        .route("/transcribe/", post(transcribe_handler))
        .route("/enhance", post(enhance_handler))
        .route("/enhance/", post(enhance_handler))
        .fallback(not_found_handler)
        .layer(body_limit)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        // Outermost so it also covers panics, rejections and the fallback.
        .layer(middleware::from_fn(permissive_cors_headers))
        .with_state(state)
}
