//! Route table, shared state and HTTP middleware.

use std::sync::Arc;

use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use speedio_core::{BatchMode, NoteRepository};

use crate::handlers;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Note storage; a PostgreSQL repository in production.
    pub notes: Arc<dyn NoteRepository>,
    pub batch_mode: BatchMode,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteRepository>, batch_mode: BatchMode) -> Self {
        Self { notes, batch_mode }
    }
}

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Any origin may call the API.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/persistnotes", post(handlers::persist_notes))
        .route("/deletenote/:id", delete(handlers::delete_note))
        .route("/getnote/:token", get(handlers::get_notes))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}
