pub mod auth;
pub mod books;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
///
/// /books                         list, create (auth required)
/// /books/filter                  multi-criteria filter
/// /books/rating                  batch rating submission
/// /books/{id}                    get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/books", books::router())
}
