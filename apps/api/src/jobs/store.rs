use chrono::Utc;
use sqlx::{Executor, Sqlite, SqlitePool};

use crate::models::encode_string_list;
use crate::models::job::{Job, JobRow};

pub struct NewJob<'a> {
    pub user_id: i64,
    pub title: &'a str,
    pub company: &'a str,
    pub description: &'a str,
    pub requirements: &'a [String],
    pub source_url: Option<&'a str>,
}

/// Inserts a job. Accepts a pool or a transaction.
pub async fn insert_job<'e, E>(executor: E, new_job: NewJob<'_>) -> Result<Job, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (user_id, title, company, description, requirements, source_url, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(new_job.user_id)
    .bind(new_job.title)
    .bind(new_job.company)
    .bind(new_job.description)
    .bind(encode_string_list(new_job.requirements))
    .bind(new_job.source_url)
    .bind(Utc::now())
    .fetch_one(executor)
    .await?;

    Ok(row.into())
}

pub async fn list_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Job>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE user_id = $1 ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Job::from).collect())
}

/// Every job in the store, across all owners.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Job>, sqlx::Error> {
    let rows = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(Job::from).collect())
}

/// Fetches a job only if `user_id` owns it.
pub async fn find_owned(pool: &SqlitePool, id: i64, user_id: i64) -> Result<Option<Job>, sqlx::Error> {
    let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Job::from))
}

/// Deletes a job owned by `user_id`. Returns false when nothing matched.
pub async fn delete_owned(pool: &SqlitePool, id: i64, user_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::{insert_user, NewUser};
    use crate::db::create_pool;
    use crate::models::user::Role;

    async fn setup() -> (SqlitePool, i64, i64) {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        let mut ids = Vec::new();
        for (name, email) in [("acme", "hr@acme.test"), ("globex", "hr@globex.test")] {
            let user = insert_user(
                &pool,
                NewUser {
                    username: name,
                    email,
                    password_hash: "$argon2id$stub",
                    role: Role::Company,
                },
            )
            .await
            .unwrap();
            ids.push(user.id);
        }
        (pool, ids[0], ids[1])
    }

    fn new_job<'a>(user_id: i64, title: &'a str, requirements: &'a [String]) -> NewJob<'a> {
        NewJob {
            user_id,
            title,
            company: "Acme",
            description: "Build things",
            requirements,
            source_url: None,
        }
    }

    #[tokio::test]
    async fn test_insert_keeps_requirements_and_source() {
        let (pool, acme, _) = setup().await;
        let requirements = vec!["Rust".to_string()];
        let job = insert_job(
            &pool,
            NewJob {
                source_url: Some("https://example.com/job/1"),
                ..new_job(acme, "Backend Engineer", &requirements)
            },
        )
        .await
        .unwrap();
        assert_eq!(job.requirements, requirements);
        assert_eq!(job.source_url.as_deref(), Some("https://example.com/job/1"));
    }

    #[tokio::test]
    async fn test_insert_inside_transaction() {
        let (pool, acme, _) = setup().await;
        let mut tx = pool.begin().await.unwrap();
        insert_job(&mut *tx, new_job(acme, "One", &[])).await.unwrap();
        insert_job(&mut *tx, new_job(acme, "Two", &[])).await.unwrap();
        tx.rollback().await.unwrap();
        assert!(list_all(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scoping_by_owner() {
        let (pool, acme, globex) = setup().await;
        let job = insert_job(&pool, new_job(acme, "One", &[])).await.unwrap();
        insert_job(&pool, new_job(globex, "Two", &[])).await.unwrap();

        assert_eq!(list_for_user(&pool, acme).await.unwrap().len(), 1);
        assert_eq!(list_all(&pool).await.unwrap().len(), 2);
        assert!(find_owned(&pool, job.id, globex).await.unwrap().is_none());
        assert!(!delete_owned(&pool, job.id, globex).await.unwrap());
        assert!(delete_owned(&pool, job.id, acme).await.unwrap());
        assert_eq!(list_all(&pool).await.unwrap().len(), 1);
    }
}
