//! Route definitions for the `/books` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Routes mounted at `/books`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create
/// GET    /filter      -> filter
/// POST   /rating      -> rate
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(books::list).post(books::create))
        .route("/filter", get(books::filter))
        .route("/rating", post(books::rate))
        .route(
            "/{id}",
            get(books::get_by_id)
                .put(books::update)
                .delete(books::delete),
        )
}
