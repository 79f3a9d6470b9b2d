pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};
use serde::Serialize;

use crate::state::AppState;
use crate::{auth, jobs, matching, projects, scraping};

/// Body for endpoints that only confirm an action.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handlers::handle_register))
        .route("/api/auth/login", post(auth::handlers::handle_login))
        .route("/api/auth/me", get(auth::handlers::handle_me))
        // Projects (talent)
        .route(
            "/api/projects",
            get(projects::handlers::handle_list_projects).post(projects::handlers::handle_add_project),
        )
        .route(
            "/api/projects/:id",
            delete(projects::handlers::handle_delete_project),
        )
        // Jobs (company)
        .route(
            "/api/jobs",
            get(jobs::handlers::handle_list_jobs).post(jobs::handlers::handle_add_job),
        )
        .route("/api/jobs/:id", delete(jobs::handlers::handle_delete_job))
        // Matching
        .route(
            "/api/match/project-to-jobs",
            post(matching::handlers::handle_project_to_jobs),
        )
        .route(
            "/api/match/job-to-projects",
            post(matching::handlers::handle_job_to_projects),
        )
        // Scraping (company)
        .route("/api/scrape/url", post(scraping::handlers::handle_scrape_url))
        .route("/api/scrape/batch", post(scraping::handlers::handle_scrape_batch))
        .route("/api/scrape/save", post(scraping::handlers::handle_save_scraped))
        .with_state(state)
}
