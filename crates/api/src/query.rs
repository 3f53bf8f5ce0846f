//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Raw criteria for `GET /books/filter`.
///
/// Every parameter is independently optional. Year and rating arrive as text
/// and are checked by [`crate::validation::validate_filter_params`] before
/// the store is queried.
#[derive(Debug, Default, Deserialize)]
pub struct BookFilterParams {
    pub title: Option<String>,
    pub year: Option<String>,
    pub author: Option<String>,
    pub rating: Option<String>,
}
