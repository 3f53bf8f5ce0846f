//! Identity collaborator: JWT bearer tokens and password hashing.
//!
//! The catalog itself never inspects credentials; it only sees the verified
//! caller produced by the [`crate::middleware::auth::AuthUser`] extractor.

pub mod jwt;
pub mod password;
