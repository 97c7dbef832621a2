//! Handlers for the `/auth` resource (registration, token issuance).

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use reelhouse_core::roles::Role;
use reelhouse_db::models::user::{CreateUser, UserResponse};
use reelhouse_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::authenticator::authenticate;
use crate::auth::gate::require_role;
use crate::auth::jwt::issue_access_token;
use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 8, max = 100))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 100))]
    pub phone_number: String,
    /// Defaults to `standard_user` when omitted.
    #[serde(default)]
    pub role: Role,
}

/// Form body for `POST /auth/token` (OAuth2 password grant fields).
///
/// Other grant fields (`grant_type`, `scope`, `client_id`) are accepted and
/// ignored.
#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

/// Successful token response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth
///
/// Register a user. Anyone may create a `standard_user`; creating an
/// `administrator` requires an administrator's bearer token.
pub async fn register(
    State(state): State<AppState>,
    caller: Option<AuthUser>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    input.validate()?;

    match input.role {
        Role::StandardUser => {}
        Role::Administrator => {
            require_role(caller.as_ref().map(|c| &c.0), Role::Administrator)?;
        }
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create_dto = CreateUser {
        username: input.username,
        email: input.email,
        first_name: input.first_name,
        last_name: input.last_name,
        phone_number: input.phone_number,
        password_hash,
        role: input.role,
    };

    let user = UserRepo::create(&state.pool, &create_dto).await?;
    tracing::info!(user_id = user.id, role = %user.role, "User registered");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// POST /auth/token
///
/// Exchange a username and password for a bearer access token.
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = authenticate(&state.pool, &form.username, &form.password).await?;

    let jwt = &state.config.jwt;
    let access_token = issue_access_token(
        &user.username,
        user.id,
        user.role,
        jwt.access_token_lifetime(),
        jwt,
    )?;
    tracing::info!(user_id = user.id, "Access token issued");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
