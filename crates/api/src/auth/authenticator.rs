//! Username/password verification against stored credentials.

use std::future::Future;
use std::sync::OnceLock;

use reelhouse_db::models::user::User;
use reelhouse_db::repositories::UserRepo;
use reelhouse_db::DbPool;

use super::password::{hash_password, verify_password};
use super::AuthError;

/// Lookup of credential records by username.
pub trait CredentialStore {
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, sqlx::Error>> + Send;
}

impl CredentialStore for DbPool {
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, sqlx::Error>> + Send {
        UserRepo::find_by_username(self, username)
    }
}

/// Verify `password` for `username`, returning the stored record on a match.
///
/// An unknown username and a wrong password both yield
/// [`AuthError::AuthenticationFailed`]. For unknown usernames the password is
/// still checked against a throwaway hash so both paths pay the Argon2 cost.
pub async fn authenticate<S: CredentialStore>(
    store: &S,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let user = store
        .find_by_username(username)
        .await
        .map_err(|e| AuthError::Internal(format!("Credential lookup error: {e}")))?;

    let Some(user) = user else {
        if let Some(hash) = placeholder_hash() {
            let _ = verify_password(password, hash);
        }
        tracing::debug!(%username, "Login rejected: unknown username");
        return Err(AuthError::AuthenticationFailed);
    };

    let matches = verify_password(password, &user.password_hash)
        .map_err(|e| AuthError::Internal(format!("Password verification error: {e}")))?;

    if !matches {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(AuthError::AuthenticationFailed);
    }

    Ok(user)
}

/// Hash verified when the username does not exist.
fn placeholder_hash() -> Option<&'static str> {
    static HASH: OnceLock<Option<String>> = OnceLock::new();
    HASH.get_or_init(|| hash_password("reelhouse-placeholder-password").ok())
        .as_deref()
}
