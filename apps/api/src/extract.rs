//! Request body extractor whose rejections render as `AppError`.

use axum::extract::FromRequest;
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// `axum::Json` with malformed, mistyped or non-JSON bodies reported as a 400
/// `{"message","code"}` body instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Number(i64),
    Text(String),
}

/// Accepts an id sent as a JSON number or a numeric string. Anything else,
/// `null` included, reads as absent.
pub fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let input = Option::<serde_json::Value>::deserialize(deserializer)?;
    let id = input.and_then(|v| serde_json::from_value::<IdInput>(v).ok());
    Ok(match id {
        Some(IdInput::Number(id)) => Some(id),
        Some(IdInput::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}
