//! Domain types and rules for the book catalog.
//!
//! This crate has no I/O: it holds the closed error taxonomy shared by the
//! storage and HTTP layers, plus the pure field rules (year format, score
//! range, email format, password strength) that boundary validation applies
//! before any domain logic runs.

pub mod book;
pub mod error;
pub mod identity;
pub mod types;
