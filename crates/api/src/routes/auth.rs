//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /        -> register
/// POST /token   -> login_for_access_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(auth::register))
        .route("/token", post(auth::login_for_access_token))
}
