use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::auth::extractor::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::jobs::store::{delete_owned, insert_job, list_for_user, NewJob};
use crate::models::job::Job;
use crate::models::user::Role;
use crate::routes::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct AddJobRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields!"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing required fields!"))]
    pub description: String,
    /// Defaults to the caller's username.
    pub company: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct JobCreatedResponse {
    pub message: String,
    pub job: Job,
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<JobListResponse>, AppError> {
    let user = current.require_role(Role::Company)?;
    let jobs = list_for_user(&state.db, user.id).await?;
    Ok(Json(JobListResponse { jobs }))
}

/// POST /api/jobs
pub async fn handle_add_job(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<AddJobRequest>,
) -> Result<(StatusCode, Json<JobCreatedResponse>), AppError> {
    let user = current.require_role(Role::Company)?;
    request.validate()?;

    let company = request
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(user.username.as_str());

    let job = insert_job(
        &state.db,
        NewJob {
            user_id: user.id,
            title: &request.title,
            company,
            description: &request.description,
            requirements: &request.requirements,
            source_url: None,
        },
    )
    .await?;

    info!("User {} added job {} ({})", user.id, job.id, job.title);

    Ok((
        StatusCode::CREATED,
        Json(JobCreatedResponse {
            message: "Job added successfully!".to_string(),
            job,
        }),
    ))
}

/// DELETE /api/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(job_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = current.require_role(Role::Company)?;

    if !delete_owned(&state.db, job_id, user.id).await? {
        return Err(AppError::NotFound("Job not found!".to_string()));
    }

    info!("User {} deleted job {job_id}", user.id);
    Ok(Json(MessageResponse {
        message: "Job deleted successfully!".to_string(),
    }))
}
