//! Row types and request DTOs, one module per table.

pub mod movie;
pub mod user;
