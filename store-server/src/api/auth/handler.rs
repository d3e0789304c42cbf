//! Authentication handlers
//!
//! Login, registration, and current-user lookup.

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::UserCreate;
use crate::db::repository::user::UserRepository;
use crate::utils::validation::validate_credentials;
use crate::utils::{AppError, AppResponse, AppResult, ok};

/// Failed and successful logins take the same minimum time, so response
/// latency does not reveal whether a username exists.
const LOGIN_MIN_DELAY: Duration = Duration::from_millis(500);

/// Register a new API user
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<AppResponse<UserInfo>>> {
    validate_credentials(&req.username, &req.password)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .create(UserCreate {
            username: req.username,
            password: req.password,
            roles: req.roles,
        })
        .await?;

    tracing::info!(username = %user.username, "User registered");

    Ok(ok(user.into()))
}

/// Login handler
///
/// Verifies credentials and returns a JWT token. Unknown usernames and
/// wrong passwords produce the identical error.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    let started = tokio::time::Instant::now();

    let repo = UserRepository::new(state.get_db());
    let user = repo.find_by_username(&req.username).await?;

    let result = match user {
        Some(user) => {
            let valid = user
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
            if valid { Some(user) } else { None }
        }
        None => None,
    };

    // Pad the response to a fixed floor before reporting the outcome
    if let Some(remaining) = LOGIN_MIN_DELAY.checked_sub(started.elapsed()) {
        tokio::time::sleep(remaining).await;
    }

    let user = result.ok_or_else(AppError::invalid_credentials)?;

    let user_id = user.id.as_ref().map(|t| t.to_string()).unwrap_or_default();
    let token = state
        .get_jwt_service()
        .generate_token(&user_id, &user.username, &user.roles)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(user_id = %user_id, username = %user.username, "User logged in");

    Ok(ok(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Current authenticated user, from the validated token claims
pub async fn me(
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<AppResponse<UserInfo>>> {
    Ok(ok(UserInfo {
        id: current_user.id,
        username: current_user.username,
        roles: current_user.roles,
    }))
}
