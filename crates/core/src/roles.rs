//! The closed set of user roles.
//!
//! Stored in `users.role` and carried in the `role` claim of access tokens
//! using the snake_case names below. The `CHECK` constraint in
//! `20250829000001_create_users_table.sql` must list the same names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_ADMINISTRATOR: &str = "administrator";
pub const ROLE_STANDARD_USER: &str = "standard_user";

/// A coarse permission tier used for a single flat access check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    #[default]
    StandardUser,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Administrator => ROLE_ADMINISTRATOR,
            Role::StandardUser => ROLE_STANDARD_USER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored or submitted role name is not one of the known roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMINISTRATOR => Ok(Role::Administrator),
            ROLE_STANDARD_USER => Ok(Role::StandardUser),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
