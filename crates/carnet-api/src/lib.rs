//! # carnet-api
//!
//! HTTP API server for carnet. The library target exposes the router and
//! state so integration tests can drive the full middleware stack
//! in-process.

pub mod error;
pub mod handlers;
pub mod state;

use axum::{
    http::Request,
    routing::{get, post, put},
    Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

pub use error::ApiError;
pub use state::AppState;

/// Maximum accepted request body size (1 MiB). Every body this service
/// accepts is a small JSON document.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful
/// for log correlation when chasing a failing request.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Build the application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Users
        .route("/utilisateur", post(handlers::users::create_user))
        .route(
            "/utilisateur/:id",
            put(handlers::users::update_user).delete(handlers::users::delete_user),
        )
        // Categories
        .route("/categorie", post(handlers::categories::create_category))
        .route(
            "/categorie/:id",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        // Tags
        .route("/tag", post(handlers::tags::create_tag))
        .route(
            "/tag/:id",
            put(handlers::tags::update_tag).delete(handlers::tags::delete_tag),
        )
        // Notes
        .route("/note", post(handlers::notes::create_note))
        .route(
            "/note/:id",
            put(handlers::notes::update_note).delete(handlers::notes::delete_note),
        )
        .route("/notes", get(handlers::notes::list_notes))
        // Middleware: request-id must wrap tracing so the id is on every span
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state)
}
