//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod book_repo;
pub mod rating_repo;
pub mod user_repo;

pub use book_repo::BookRepo;
pub use rating_repo::RatingRepo;
pub use user_repo::UserRepo;
