//! Domain model structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus the raw request DTOs and their validated forms.

pub mod book;
pub mod publisher;
pub mod rating;
pub mod user;
