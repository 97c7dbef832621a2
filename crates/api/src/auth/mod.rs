//! Authentication and authorization.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`authenticator`] -- Username/password verification against stored credentials.
//! - [`jwt`] -- Access-token issuance and resolution into a [`jwt::Principal`].
//! - [`gate`] -- Flat role check applied by protected endpoints.
//!
//! Every operation is a stateless function of its inputs. The signing secret
//! is passed in through [`jwt::JwtConfig`], never read from a global.

pub mod authenticator;
pub mod gate;
pub mod jwt;
pub mod password;

/// Outcome of a failed authentication or authorization step.
///
/// Messages are deliberately coarse: callers must not learn whether a
/// username exists, or why a token was rejected.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Unknown username or wrong password.
    #[error("Incorrect username or password")]
    AuthenticationFailed,

    /// Malformed, mis-signed, expired, or incomplete token.
    #[error("Could not validate credentials")]
    InvalidToken,

    /// No bearer token was presented.
    #[error("Not authenticated")]
    MissingToken,

    /// Valid principal lacking the required role.
    #[error("Insufficient role for this operation")]
    Forbidden,

    /// Storage, hashing, or signing failure unrelated to the caller's input.
    #[error("Authentication backend error: {0}")]
    Internal(String),
}
