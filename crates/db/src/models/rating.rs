use bookstack_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A rating row from the `ratings` table.
///
/// The back-reference to the owning book is a storage detail and is not
/// serialized; clients see `{id, score}` only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub score: i32,
    #[serde(skip)]
    pub book_id: DbId,
}
