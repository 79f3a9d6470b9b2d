//! Axum route handlers for the Scraping API. Company users only.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::auth::extractor::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::jobs::store::{insert_job, NewJob};
use crate::models::user::Role;
use crate::scraping::scraper::{parse_keywords, scrape_batch, scrape_url, ScrapeResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScrapeUrlRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct ScrapeBatchRequest {
    /// Newline-separated keywords.
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Deserialize)]
pub struct SaveScrapedRequest {
    /// Postings as echoed back by the client. Only `"status": "success"`
    /// entries are read; everything else is skipped unexamined.
    #[serde(default)]
    pub jobs: Option<Vec<Value>>,
}

/// Fields of a posting that will be stored.
#[derive(Debug, PartialEq, Eq)]
pub struct PostingToSave<'a> {
    pub title: &'a str,
    pub company: &'a str,
    pub url: &'a str,
    pub description: &'a str,
}

fn is_success(job: &Value) -> bool {
    job.get("status").and_then(Value::as_str) == Some("success")
}

fn posting_to_save(index: usize, job: &Value) -> Result<PostingToSave<'_>, AppError> {
    let field = |name: &str| {
        job.get(name)
            .and_then(Value::as_str)
            .ok_or_else(|| AppError::Validation(format!("Job {index} is missing '{name}'!")))
    };
    Ok(PostingToSave {
        title: field("title")?,
        company: field("company")?,
        url: field("url")?,
        description: field("description")?,
    })
}

/// Picks the successful postings, failing if any of them lacks a text field.
pub fn postings_to_save(jobs: &[Value]) -> Result<Vec<PostingToSave<'_>>, AppError> {
    jobs.iter()
        .enumerate()
        .filter(|(_, job)| is_success(job))
        .map(|(index, job)| posting_to_save(index, job))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct SaveScrapedResponse {
    pub message: String,
    pub saved: usize,
}

/// POST /api/scrape/url
pub async fn handle_scrape_url(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<ScrapeUrlRequest>,
) -> Result<Json<ScrapeResponse>, AppError> {
    current.require_role(Role::Company)?;

    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("Missing URL!".to_string()));
    }

    let response = scrape_url(state.scraper_runtime.as_ref(), url).await?;
    Ok(Json(response))
}

/// POST /api/scrape/batch
pub async fn handle_scrape_batch(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<ScrapeBatchRequest>,
) -> Result<Json<ScrapeResponse>, AppError> {
    current.require_role(Role::Company)?;

    let keywords = parse_keywords(&request.keywords);
    if keywords.is_empty() {
        return Err(AppError::Validation("Missing keywords!".to_string()));
    }

    let response = scrape_batch(state.scraper_runtime.as_ref(), &keywords).await?;
    Ok(Json(response))
}

/// POST /api/scrape/save
///
/// Stores the successful postings as jobs owned by the caller, in one transaction.
pub async fn handle_save_scraped(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<SaveScrapedRequest>,
) -> Result<Json<SaveScrapedResponse>, AppError> {
    let user = current.require_role(Role::Company)?;

    let jobs = request.jobs.unwrap_or_default();
    if jobs.is_empty() {
        return Err(AppError::Validation("Missing jobs!".to_string()));
    }
    let postings = postings_to_save(&jobs)?;

    let mut tx = state.db.begin().await?;
    for posting in &postings {
        insert_job(
            &mut *tx,
            NewJob {
                user_id: user.id,
                title: posting.title,
                company: posting.company,
                description: posting.description,
                requirements: &[],
                source_url: Some(posting.url),
            },
        )
        .await?;
    }
    tx.commit().await?;

    let saved = postings.len();
    info!(
        "User {} saved {saved} of {} scraped postings",
        user.id,
        jobs.len()
    );

    Ok(Json(SaveScrapedResponse {
        message: "Jobs saved successfully!".to_string(),
        saved,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted(raw: Value) -> Vec<Value> {
        serde_json::from_value::<SaveScrapedRequest>(raw)
            .unwrap()
            .jobs
            .unwrap_or_default()
    }

    #[test]
    fn test_only_success_postings_are_kept() {
        let jobs = submitted(serde_json::json!({"jobs": [
            {"title": "SRE", "company": "Acme", "url": "https://acme.dev/1",
             "description": "Keep it up", "status": "success"},
            {"status": "error", "error": "Failed to parse job details"},
            {"title": "QA", "company": "Acme", "url": "https://acme.dev/2",
             "description": "Test it", "status": "pending"},
            {"title": 7, "status": "error"},
            {"status": 1},
            "not a posting",
            {}
        ]}));
        let postings = postings_to_save(&jobs).unwrap();
        assert_eq!(
            postings,
            vec![PostingToSave {
                title: "SRE",
                company: "Acme",
                url: "https://acme.dev/1",
                description: "Keep it up",
            }]
        );
    }

    #[test]
    fn test_success_posting_missing_field_is_rejected() {
        let jobs = submitted(serde_json::json!({"jobs": [
            {"status": "error"},
            {"title": "SRE", "company": "Acme", "description": "x", "status": "success"}
        ]}));
        match postings_to_save(&jobs) {
            Err(AppError::Validation(message)) => assert_eq!(message, "Job 1 is missing 'url'!"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_null_jobs_reads_as_missing() {
        assert!(submitted(serde_json::json!({"jobs": null})).is_empty());
    }
}
