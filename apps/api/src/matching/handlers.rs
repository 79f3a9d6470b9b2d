//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::auth::extractor::CurrentUser;
use crate::errors::AppError;
use crate::extract::{lenient_id, AppJson};
use crate::jobs;
use crate::matching::matcher::{
    match_job_to_projects, match_project_to_jobs, JobMatch, MatchResponse, ProjectMatch,
};
use crate::models::user::Role;
use crate::projects;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectToJobsRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub project_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct JobToProjectsRequest {
    #[serde(default, deserialize_with = "lenient_id")]
    pub job_id: Option<i64>,
}

/// POST /api/match/project-to-jobs
///
/// Scores one of the caller's projects against every job in the store.
pub async fn handle_project_to_jobs(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<ProjectToJobsRequest>,
) -> Result<Json<MatchResponse<JobMatch>>, AppError> {
    let user = current.require_role(Role::Talent)?;
    let project_id = request
        .project_id
        .ok_or_else(|| AppError::Validation("Missing project ID!".to_string()))?;

    let project = projects::store::find_owned(&state.db, project_id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found!".to_string()))?;

    let jobs = jobs::store::list_all(&state.db).await?;
    if jobs.is_empty() {
        return Err(AppError::NotFound("No jobs found!".to_string()));
    }

    let response = match_project_to_jobs(state.matcher_runtime.as_ref(), &project, &jobs).await?;
    Ok(Json(response))
}

/// POST /api/match/job-to-projects
///
/// Scores one of the caller's jobs against every project in the store.
pub async fn handle_job_to_projects(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<JobToProjectsRequest>,
) -> Result<Json<MatchResponse<ProjectMatch>>, AppError> {
    let user = current.require_role(Role::Company)?;
    let job_id = request
        .job_id
        .ok_or_else(|| AppError::Validation("Missing job ID!".to_string()))?;

    let job = jobs::store::find_owned(&state.db, job_id, user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Job not found!".to_string()))?;

    let projects = projects::store::list_all_with_owner(&state.db).await?;
    if projects.is_empty() {
        return Err(AppError::NotFound("No projects found!".to_string()));
    }

    let response = match_job_to_projects(state.matcher_runtime.as_ref(), &job, &projects).await?;
    Ok(Json(response))
}
