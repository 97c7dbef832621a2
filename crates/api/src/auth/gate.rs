//! Flat role gate for protected operations.

use reelhouse_core::roles::Role;

use super::jwt::Principal;
use super::AuthError;

/// Allow the operation only when a principal is present and holds exactly
/// `required`.
///
/// Roles are not ordered: an administrator does not implicitly satisfy a
/// `standard_user` requirement.
pub fn require_role(principal: Option<&Principal>, required: Role) -> Result<(), AuthError> {
    let Some(principal) = principal else {
        return Err(AuthError::Forbidden);
    };

    let allowed = match (principal.role, required) {
        (Some(Role::Administrator), Role::Administrator) => true,
        (Some(Role::StandardUser), Role::StandardUser) => true,
        (Some(Role::Administrator), Role::StandardUser) => false,
        (Some(Role::StandardUser), Role::Administrator) => false,
        (None, _) => false,
    };

    if allowed {
        Ok(())
    } else {
        Err(AuthError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{issue_access_token, resolve_token, JwtConfig};
    use assert_matches::assert_matches;

    fn principal(role: Option<Role>) -> Principal {
        Principal {
            username: "alice".to_string(),
            user_id: 7,
            role,
        }
    }

    #[test]
    fn allows_only_matching_role() {
        let roles = [Role::Administrator, Role::StandardUser];
        for held in roles {
            for required in roles {
                let result = require_role(Some(&principal(Some(held))), required);
                if held == required {
                    assert!(result.is_ok(), "{held} must satisfy {required}");
                } else {
                    assert_matches!(result, Err(AuthError::Forbidden));
                }
            }
        }
    }

    #[test]
    fn missing_principal_is_forbidden() {
        assert_matches!(
            require_role(None, Role::StandardUser),
            Err(AuthError::Forbidden)
        );
        assert_matches!(
            require_role(None, Role::Administrator),
            Err(AuthError::Forbidden)
        );
    }

    #[test]
    fn principal_without_role_is_forbidden() {
        let p = principal(None);
        assert_matches!(
            require_role(Some(&p), Role::StandardUser),
            Err(AuthError::Forbidden)
        );
    }

    #[test]
    fn standard_user_cannot_reach_administrator_operations() {
        let p = principal(Some(Role::StandardUser));
        assert_matches!(
            require_role(Some(&p), Role::Administrator),
            Err(AuthError::Forbidden)
        );
    }

    #[test]
    fn resolved_standard_user_token_is_denied_admin_operations() {
        let config = JwtConfig {
            secret: "gate-test-secret".to_string(),
            access_token_expiry_mins: 20,
        };
        let token = issue_access_token(
            "alice",
            7,
            Role::StandardUser,
            config.access_token_lifetime(),
            &config,
        )
        .expect("token issuance should succeed");
        let p = resolve_token(&token, &config).expect("token should resolve");

        assert_eq!(p, principal(Some(Role::StandardUser)));
        assert!(require_role(Some(&p), Role::StandardUser).is_ok());
        assert_matches!(
            require_role(Some(&p), Role::Administrator),
            Err(AuthError::Forbidden)
        );
    }
}
