use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extractor::CurrentUser;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::project::Project;
use crate::models::user::Role;
use crate::projects::store::{delete_owned, insert_project, list_for_user, NewProject};
use crate::projects::{repo_name_from_url, STUB_DESCRIPTION, STUB_LANGUAGES};
use crate::routes::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddProjectRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub message: String,
    pub project: Project,
}

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Json<ProjectListResponse>, AppError> {
    let user = current.require_role(Role::Talent)?;
    let projects = list_for_user(&state.db, user.id).await?;
    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/projects
pub async fn handle_add_project(
    State(state): State<AppState>,
    current: CurrentUser,
    AppJson(request): AppJson<AddProjectRequest>,
) -> Result<(StatusCode, Json<ProjectCreatedResponse>), AppError> {
    let user = current.require_role(Role::Talent)?;

    let url = request.url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("Missing project URL!".to_string()));
    }
    let name = repo_name_from_url(url).ok_or_else(|| {
        AppError::Validation("Could not derive a repository name from the URL!".to_string())
    })?;

    let languages: Vec<String> = STUB_LANGUAGES.iter().map(|l| l.to_string()).collect();
    let project = insert_project(
        &state.db,
        NewProject {
            user_id: user.id,
            name,
            url,
            description: STUB_DESCRIPTION,
            languages: &languages,
        },
    )
    .await?;

    info!("User {} added project {} ({})", user.id, project.id, project.name);

    Ok((
        StatusCode::CREATED,
        Json(ProjectCreatedResponse {
            message: "Project added successfully!".to_string(),
            project,
        }),
    ))
}

/// DELETE /api/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(project_id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let user = current.require_role(Role::Talent)?;

    if !delete_owned(&state.db, project_id, user.id).await? {
        return Err(AppError::NotFound("Project not found!".to_string()));
    }

    info!("User {} deleted project {project_id}", user.id);
    Ok(Json(MessageResponse {
        message: "Project deleted successfully!".to_string(),
    }))
}
