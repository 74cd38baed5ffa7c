use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{Transcoder, Transcriber, Translator};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, languages_handler, translate_handler};
use crate::presentation::state::AppState;

/// Uploads are capped well above one minute of WAV audio.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router<T, S, L>(state: AppState<T, S, L>) -> Router
where
    T: Transcoder + 'static,
    S: Transcriber + 'static,
    L: Translator + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/languages", get(languages_handler))
        .route("/api/v1/translate", post(translate_handler::<T, S, L>))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
