use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::errors::AppError;
use crate::models::user::{Role, User};

pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
}

/// Inserts a user. A duplicate email maps to `AppError::Conflict`.
pub async fn insert_user(pool: &SqlitePool, new_user: NewUser<'_>) -> Result<User, AppError> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, email, password_hash, role, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(new_user.username)
    .bind(new_user.email)
    .bind(new_user.password_hash)
    .bind(new_user.role)
    .bind(Utc::now())
    .fetch_one(pool)
    .await;

    match result {
        Ok(user) => {
            info!("Registered user {} ({})", user.id, user.role);
            Ok(user)
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(AppError::Conflict("User already exists!".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
