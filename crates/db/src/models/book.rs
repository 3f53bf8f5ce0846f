//! Book entity model and DTOs.

use bookstack_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::publisher::Publisher;
use crate::models::rating::Rating;

/// A book row from the `books` table, with its owned ratings attached.
///
/// Ratings are loaded by a second query (`BookRepo` groups them by book id);
/// they always appear in submission order.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub publication_year: i32,
    pub author: String,
    pub publisher: Publisher,
    #[sqlx(skip)]
    pub ratings: Vec<Rating>,
}

/// Raw creation payload. Year and publisher arrive as text and are checked
/// by boundary validation before conversion into [`NewBook`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: Option<String>,
    pub year: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
}

/// A validated creation payload, ready to insert.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub publication_year: i32,
    pub author: String,
    pub publisher: Publisher,
}

/// Raw partial-update payload. All fields are optional; absent fields are
/// left untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub year: Option<String>,
    pub author: Option<String>,
}

/// Validated partial-update fields. `None` means "keep the current value".
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub publication_year: Option<i32>,
    pub author: Option<String>,
}

impl BookChanges {
    /// True when the payload supplied no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.publication_year.is_none() && self.author.is_none()
    }
}

/// Validated filter criteria. Present fields combine with AND; absent fields
/// impose no constraint.
#[derive(Debug, Clone, Default)]
pub struct BookFilter {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub rating: Option<i32>,
}

/// Raw batch rating submission.
#[derive(Debug, Clone, Deserialize)]
pub struct RateBooks {
    pub ratings: Option<Vec<BookRating>>,
}

/// One (book id, score) pair within a batch submission.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRating {
    pub id: Option<DbId>,
    pub score: Option<i32>,
}
