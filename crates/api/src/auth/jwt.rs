//! Access-token issuance and resolution.
//!
//! Access tokens are HS256-signed JWTs carrying a [`Claims`] payload. Nothing
//! about an issued token is stored server-side: a token is valid exactly when
//! its signature checks out against the configured secret and its `exp` lies
//! in the future.

use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use reelhouse_core::roles::Role;
use reelhouse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Default access token lifetime in minutes.
pub const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 20;

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject -- the username.
    pub sub: String,
    /// The user's internal database id.
    pub id: DbId,
    /// The user's role. Tokens minted before roles existed carry no role.
    #[serde(default)]
    pub role: Option<Role>,
    /// Expiration time (UTC Unix timestamp, seconds).
    pub exp: i64,
}

/// The verified identity behind a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
    pub user_id: DbId,
    pub role: Option<Role>,
}

/// Configuration for JWT token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 20).
    pub access_token_expiry_mins: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("access_token_expiry_mins", &self.access_token_expiry_mins)
            .finish()
    }
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `20`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty, or if the expiry is not
    /// a positive integer.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");
        assert!(
            access_token_expiry_mins > 0,
            "JWT_ACCESS_EXPIRY_MINS must be positive"
        );

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Lifetime applied to tokens minted at login.
    pub fn access_token_lifetime(&self) -> Duration {
        Duration::minutes(self.access_token_expiry_mins)
    }
}

/// Issue an HS256 access token for the given identity, valid for `lifetime`
/// from now.
pub fn issue_access_token(
    username: &str,
    user_id: DbId,
    role: Role,
    lifetime: Duration,
    config: &JwtConfig,
) -> Result<String, AuthError> {
    issue_access_token_at(username, user_id, role, lifetime, config, Utc::now())
}

/// Issue an access token as if the current time were `now`.
pub fn issue_access_token_at(
    username: &str,
    user_id: DbId,
    role: Role,
    lifetime: Duration,
    config: &JwtConfig,
    now: Timestamp,
) -> Result<String, AuthError> {
    let claims = Claims {
        sub: username.to_string(),
        id: user_id,
        role: Some(role),
        exp: (now + lifetime).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("Token encoding error: {e}")))
}

/// Validate a bearer token and resolve the [`Principal`] it names.
pub fn resolve_token(token: &str, config: &JwtConfig) -> Result<Principal, AuthError> {
    resolve_token_at(token, config, Utc::now())
}

/// Resolve a token as if the current time were `now`.
///
/// Every rejection -- bad signature, unexpected algorithm, expiry, missing
/// claims, garbage input -- is reported as [`AuthError::InvalidToken`].
pub fn resolve_token_at(
    token: &str,
    config: &JwtConfig,
    now: Timestamp,
) -> Result<Principal, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Expiry is compared against `now` below, with no leeway.
    validation.validate_exp = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidToken)?
    .claims;

    if now.timestamp() >= claims.exp {
        return Err(AuthError::InvalidToken);
    }
    if claims.sub.is_empty() {
        return Err(AuthError::InvalidToken);
    }

    Ok(Principal {
        username: claims.sub,
        user_id: claims.id,
        role: claims.role,
    })
}
