//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the principal from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `administrator` role.

pub mod auth;
pub mod rbac;
