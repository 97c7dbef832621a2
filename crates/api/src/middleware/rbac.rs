//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! satisfy [`require_role`]. Use these in route handlers to enforce
//! authorization at the type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use reelhouse_core::roles::Role;

use super::auth::AuthUser;
use crate::auth::gate::require_role;
use crate::auth::jwt::Principal;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `administrator` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(principal): RequireAdmin) -> AppResult<Json<()>> {
///     // principal is guaranteed to be an administrator here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Principal);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(principal) = AuthUser::from_request_parts(parts, state).await?;
        if let Err(err) = require_role(Some(&principal), Role::Administrator) {
            tracing::info!(
                user_id = principal.user_id,
                role = ?principal.role,
                "Administrator role required"
            );
            return Err(err.into());
        }
        Ok(RequireAdmin(principal))
    }
}
