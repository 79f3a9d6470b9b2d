//! Axum route handlers for the Auth API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::auth::extractor::CurrentUser;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::store::{find_by_email, insert_user, NewUser};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::{Role, User};
use crate::state::AppState;

const MISSING_FIELDS: &str = "Missing required fields!";

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields!"))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "Invalid email address!"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields!"))]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// POST /api/auth/register
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    if request.email.is_empty() || request.role.is_empty() {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }
    request.validate()?;

    let role: Role = request
        .role
        .parse()
        .map_err(|_| AppError::Validation("Invalid role!".to_string()))?;

    if find_by_email(&state.db, &request.email).await?.is_some() {
        return Err(AppError::Conflict("User already exists!".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user = insert_user(
        &state.db,
        NewUser {
            username: &request.username,
            email: &request.email,
            password_hash: &password_hash,
            role,
        },
    )
    .await?;

    let token = issue_token(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully!".to_string(),
            token,
            user,
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(AppError::Validation("Missing email or password!".to_string()));
    }

    let user = find_by_email(&state.db, &request.email)
        .await?
        .filter(|user| verify_password(&request.password, &user.password_hash))
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password!".to_string()))?;

    let token = issue_token(&state, &user)?;
    info!("User {} logged in", user.id);

    Ok(Json(AuthResponse {
        message: "Login successful!".to_string(),
        token,
        user,
    }))
}

/// GET /api/auth/me
pub async fn handle_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

fn issue_token(state: &AppState, user: &User) -> Result<String, AppError> {
    state
        .tokens
        .issue(user.id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))
}
