//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use bookstack_db::models::user::{LoginUser, RegisterUser};
use bookstack_db::repositories::UserRepo;
use bookstack_core::error::CoreError;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{SuccessResponse, TokenResponse};
use crate::state::AppState;
use crate::validation;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RegisterUser>,
) -> AppResult<Json<SuccessResponse>> {
    let (email, password) = validation::validate_registration(&input)?;

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::bad_request("User already exists"));
    }

    let hash = hash_password(&password)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("password hashing: {e}"))))?;
    let user = UserRepo::create(&state.pool, &email, &hash).await?;
    tracing::info!(user_id = user.id, "user registered");
    Ok(Json(SuccessResponse::new("User registered successfully")))
}

/// POST /api/v1/auth/login
///
/// A wrong email and a wrong password produce the same response, so callers
/// cannot probe which addresses are registered.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginUser>,
) -> AppResult<Json<TokenResponse>> {
    let (email, password) = validation::validate_login(&input)?;

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::bad_request("Invalid email or password"))?;

    let matches = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("password verify: {e}"))))?;
    if !matches {
        return Err(AppError::bad_request("Invalid email or password"));
    }

    let token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::Core(CoreError::Internal(format!("token generation: {e}"))))?;
    Ok(Json(TokenResponse { token }))
}
