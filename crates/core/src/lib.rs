//! Domain types shared by the database and API crates.

pub mod error;
pub mod movie;
pub mod roles;
pub mod types;
