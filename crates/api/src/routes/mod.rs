pub mod auth;
pub mod health;
pub mod movie;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth                 register (public; administrator token to create administrators)
/// /auth/token           issue access token (public)
///
/// /movies               list (public), create (administrator)
/// /movies/{id}          get (public), update, delete (administrator)
///
/// /users                list (administrator)
/// /users/{id}           get (administrator)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/movies", movie::router())
        .nest("/users", user::router())
}
