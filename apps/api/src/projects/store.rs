use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::encode_string_list;
use crate::models::project::{OwnedProject, OwnedProjectRow, Project, ProjectRow};

pub struct NewProject<'a> {
    pub user_id: i64,
    pub name: &'a str,
    pub url: &'a str,
    pub description: &'a str,
    pub languages: &'a [String],
}

pub async fn insert_project(
    pool: &SqlitePool,
    new_project: NewProject<'_>,
) -> Result<Project, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        r#"
        INSERT INTO projects (user_id, name, url, description, languages, last_analyzed)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(new_project.user_id)
    .bind(new_project.name)
    .bind(new_project.url)
    .bind(new_project.description)
    .bind(encode_string_list(new_project.languages))
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(row.into())
}

pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Project>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE user_id = $1 ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Project::from).collect())
}

/// Fetches a project only if `user_id` owns it.
pub async fn find_owned(
    pool: &SqlitePool,
    id: i64,
    user_id: i64,
) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Project::from))
}

/// Deletes a project owned by `user_id`. Returns false when nothing matched.
pub async fn delete_owned(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Every project in the store with its owner's username.
pub async fn list_all_with_owner(pool: &SqlitePool) -> Result<Vec<OwnedProject>, sqlx::Error> {
    let rows = sqlx::query_as::<_, OwnedProjectRow>(
        r#"
        SELECT p.*, u.username
        FROM projects p
        LEFT JOIN users u ON p.user_id = u.id
        ORDER BY p.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(OwnedProject::from).collect())
}
