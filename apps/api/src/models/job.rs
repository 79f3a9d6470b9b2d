use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::parse_string_list;

/// Raw `jobs` row; `requirements` is a JSON text column.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: String,
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A job posting owned by a company user.
#[derive(Debug, Clone, Serialize)]
pub struct Job {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Job {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            company: row.company,
            description: row.description,
            requirements: parse_string_list(&row.requirements),
            source_url: row.source_url,
            created_at: row.created_at,
        }
    }
}
