//! Repository for the `books` table.

use std::collections::HashMap;

use bookstack_core::types::DbId;
use sqlx::PgPool;

use crate::models::book::{Book, BookChanges, BookFilter, NewBook};
use crate::models::rating::Rating;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, publication_year, author, publisher";

/// Provides CRUD and filter operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row with an empty ratings
    /// collection.
    pub async fn create(pool: &PgPool, input: &NewBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, publication_year, author, publisher)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(input.publication_year)
            .bind(&input.author)
            .bind(input.publisher)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its internal ID, with ratings attached.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        match book {
            Some(book) => {
                let mut books = Self::attach_ratings(pool, vec![book]).await?;
                Ok(books.pop())
            }
            None => Ok(None),
        }
    }

    /// List all books in id order, with ratings attached.
    pub async fn list(pool: &PgPool) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id");
        let books = sqlx::query_as::<_, Book>(&query).fetch_all(pool).await?;
        Self::attach_ratings(pool, books).await
    }

    /// Filter books by optional criteria combined with AND.
    ///
    /// Title and author match by case-sensitive substring; year by equality;
    /// rating by "has at least one rating with exactly this score", so a
    /// book with no ratings never matches a rating criterion.
    pub async fn filter(pool: &PgPool, criteria: &BookFilter) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE ($1::text IS NULL OR title LIKE '%' || $1 || '%')
               AND ($2::int4 IS NULL OR publication_year = $2)
               AND ($3::text IS NULL OR author LIKE '%' || $3 || '%')
               AND ($4::int4 IS NULL OR EXISTS (
                     SELECT 1 FROM ratings r WHERE r.book_id = books.id AND r.score = $4))
             ORDER BY id"
        );
        let books = sqlx::query_as::<_, Book>(&query)
            .bind(&criteria.title)
            .bind(criteria.year)
            .bind(&criteria.author)
            .bind(criteria.rating)
            .fetch_all(pool)
            .await?;
        Self::attach_ratings(pool, books).await
    }

    /// Fetch all books whose id is in `ids`, without ratings. Missing ids are
    /// simply absent from the result.
    pub async fn find_all_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = ANY($1)");
        sqlx::query_as::<_, Book>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial update. Only non-`None` fields in `changes` are
    /// written; the merge is a single `UPDATE` so a concurrent reader never
    /// observes a half-merged row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        changes: &BookChanges,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($2, title),
                publication_year = COALESCE($3, publication_year),
                author = COALESCE($4, author)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let book = sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(changes.publication_year)
            .bind(&changes.author)
            .fetch_optional(pool)
            .await?;
        match book {
            Some(book) => {
                let mut books = Self::attach_ratings(pool, vec![book]).await?;
                Ok(books.pop())
            }
            None => Ok(None),
        }
    }

    /// Delete a book and its ratings in one transaction. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM ratings WHERE book_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load ratings for the given books and attach them in submission (id)
    /// order.
    async fn attach_ratings(pool: &PgPool, mut books: Vec<Book>) -> Result<Vec<Book>, sqlx::Error> {
        if books.is_empty() {
            return Ok(books);
        }
        let ids: Vec<DbId> = books.iter().map(|b| b.id).collect();
        let ratings = sqlx::query_as::<_, Rating>(
            "SELECT id, score, book_id FROM ratings WHERE book_id = ANY($1) ORDER BY id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_book: HashMap<DbId, Vec<Rating>> = HashMap::new();
        for rating in ratings {
            by_book.entry(rating.book_id).or_default().push(rating);
        }
        for book in &mut books {
            book.ratings = by_book.remove(&book.id).unwrap_or_default();
        }
        Ok(books)
    }
}
