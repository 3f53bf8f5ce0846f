//! Repository for the `ratings` table.
//!
//! Ratings are append-only: they are created in batches and removed only
//! when their owning book is deleted (`BookRepo::delete`).

use bookstack_core::types::DbId;
use sqlx::PgPool;

/// Provides batch insertion for ratings.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert all `(book_id, score)` pairs as one statement.
    ///
    /// A single multi-row `INSERT` executes atomically, so either every
    /// rating in the batch becomes visible or none do. Caller must have
    /// verified that every `book_id` exists.
    pub async fn insert_batch(pool: &PgPool, pairs: &[(DbId, i32)]) -> Result<u64, sqlx::Error> {
        if pairs.is_empty() {
            return Ok(0);
        }
        let (book_ids, scores): (Vec<DbId>, Vec<i32>) = pairs.iter().copied().unzip();
        let result = sqlx::query(
            "INSERT INTO ratings (book_id, score)
             SELECT * FROM UNNEST($1::int4[], $2::int4[])",
        )
        .bind(&book_ids)
        .bind(&scores)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
