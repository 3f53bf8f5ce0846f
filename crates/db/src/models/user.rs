use bookstack_core::types::DbId;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

/// A user row from the `users` table. Never serialized to clients.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login payload.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginUser {
    pub email: Option<String>,
    pub password: Option<String>,
}
