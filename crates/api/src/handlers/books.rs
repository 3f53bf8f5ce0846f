//! Handlers for the `/books` resource.
//!
//! All operations require an authenticated caller ([`AuthUser`]). Path ids
//! arrive as text and are rejected with a 400 before any lookup when they
//! are not unsigned integers.

use std::collections::HashSet;

use axum::extract::{Path, Query, State};
use axum::Json;
use bookstack_db::models::book::{Book, CreateBook, RateBooks, UpdateBook};
use bookstack_db::repositories::{BookRepo, RatingRepo};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AuthUser;
use crate::query::BookFilterParams;
use crate::response::SuccessResponse;
use crate::state::AppState;
use crate::validation;

/// GET /api/v1/books
pub async fn list(_user: AuthUser, State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool).await?;
    Ok(Json(books))
}

/// GET /api/v1/books/filter
///
/// Present criteria combine with AND; an all-absent filter equals the plain
/// listing. Returns an empty array (never an error) when nothing matches.
pub async fn filter(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<BookFilterParams>,
) -> AppResult<Json<Vec<Book>>> {
    let criteria = validation::validate_filter_params(&params)?;
    let books = BookRepo::filter(&state.pool, &criteria).await?;
    Ok(Json(books))
}

/// GET /api/v1/books/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let id = validation::parse_book_id(&id)?;
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Book doesn't exist"))?;
    Ok(Json(book))
}

/// POST /api/v1/books
pub async fn create(
    _user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateBook>,
) -> AppResult<Json<SuccessResponse>> {
    let new_book = validation::validate_new_book(&input)?;
    let book = BookRepo::create(&state.pool, &new_book).await?;
    tracing::info!(book_id = book.id, "book created");
    Ok(Json(SuccessResponse::new("Book added successfully")))
}

/// PUT /api/v1/books/{id}
///
/// Applies exactly the supplied fields; absent fields keep their current
/// values. An existing book with an all-empty payload is a bad request, not
/// a no-op.
pub async fn update(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateBook>,
) -> AppResult<Json<SuccessResponse>> {
    let id = validation::parse_book_id(&id)?;
    let changes = validation::validate_book_changes(&input)?;

    // Resolve the target first: an unknown id is NotFound even when the
    // payload is empty.
    BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Book doesn't exist"))?;

    if changes.is_empty() {
        return Err(AppError::bad_request("No data provided for update"));
    }

    BookRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| AppError::not_found("Book doesn't exist"))?;
    Ok(Json(SuccessResponse::new("Book updated successfully")))
}

/// DELETE /api/v1/books/{id}
///
/// Removes the book and all its ratings in one transaction.
pub async fn delete(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = validation::parse_book_id(&id)?;
    let deleted = BookRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found("Book doesn't exist"));
    }
    Ok(Json(SuccessResponse::new("Book deleted successfully")))
}

/// POST /api/v1/books/rating
///
/// All-or-nothing: every referenced book must exist before any rating is
/// written, and the batch persists as a single statement.
pub async fn rate(
    _user: AuthUser,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RateBooks>,
) -> AppResult<Json<SuccessResponse>> {
    let pairs = validation::validate_rating_batch(&input)?;

    let distinct: Vec<_> = {
        let mut seen = HashSet::new();
        pairs
            .iter()
            .map(|&(id, _)| id)
            .filter(|&id| seen.insert(id))
            .collect()
    };
    let found: HashSet<_> = BookRepo::find_all_by_ids(&state.pool, &distinct)
        .await?
        .into_iter()
        .map(|book| book.id)
        .collect();

    // Fail on the first unresolved id in submission order.
    for &(id, _) in &pairs {
        if !found.contains(&id) {
            return Err(AppError::not_found(format!(
                "Book with ID {id} doesn't exist"
            )));
        }
    }

    let inserted = RatingRepo::insert_batch(&state.pool, &pairs).await?;
    tracing::info!(count = inserted, "ratings added");
    Ok(Json(SuccessResponse::new("Ratings added successfully")))
}
