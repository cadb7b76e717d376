//! API routes and handlers.

mod squirrels;

use axum::{
    Router,
    http::{Method, Uri},
    routing::get,
};

use super::{error::ApiError, state::AppState};

/// Build the API router.
///
/// Only `/squirrels` and `/squirrels/{id}` resolve. Unknown paths, and known
/// paths with an unsupported method, answer 404. `get` would also answer
/// HEAD, so HEAD is routed to the 404 handler explicitly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/squirrels",
            get(squirrels::list)
                .head(not_found)
                .post(squirrels::create),
        )
        .route(
            "/squirrels/{id}",
            get(squirrels::show)
                .head(not_found)
                .put(squirrels::update)
                .delete(squirrels::remove),
        )
        .method_not_allowed_fallback(not_found)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::route_not_found(method.as_str(), uri.path())
}
