//! Account handlers (register, login)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use libris_types::{AuthResponse, LoginRequest, RegisterRequest};

use crate::error::ApiResult;
use crate::state::AppState;

/// POST /API/Auth/register
///
/// Create an account. The new account always receives the fixed "User"
/// role; the `role` field of the body is required but not applied.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<StatusCode> {
    state.auth.register(&req).await?;
    Ok(StatusCode::ACCEPTED)
}

/// POST /API/Auth/Login
///
/// Exchange credentials for a signed token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = state.auth.login(&req).await?;
    Ok((StatusCode::ACCEPTED, Json(response)))
}
