//! Matcher: builds the analysis/scoring crew for a project or a job and
//! returns a templated score list for the counter-collection.
//!
//! Task order is fixed: analyze the subject, analyze each candidate, then
//! score the subject against each candidate.

use serde::Serialize;
use tracing::{debug, info};

use crate::crew::runtime::AgentRuntime;
use crate::crew::{fill_template, Crew, Task};
use crate::errors::AppError;
use crate::matching::agents::{matching_agents, COMPATIBILITY_SCORER, JOB_ANALYZER, REPO_ANALYZER};
use crate::matching::prompts::{
    JOB_ANALYSIS_EXPECTED, JOB_ANALYSIS_TEMPLATE, JOB_MATCH_FACTORS, JOB_TO_PROJECT_SCORE_TEMPLATE,
    PROJECT_MATCH_FACTORS, PROJECT_TO_JOB_SCORE_TEMPLATE, REPO_ANALYSIS_EXPECTED,
    REPO_ANALYSIS_TEMPLATE, SCORE_EXPECTED,
};
use crate::models::job::Job;
use crate::models::project::{OwnedProject, Project};

const JOB_SCORE_START: u32 = 85;
const JOB_SCORE_STEP: u32 = 10;
const PROJECT_SCORE_START: u32 = 90;
const PROJECT_SCORE_STEP: u32 = 15;
const UNKNOWN_USER: &str = "Unknown User";

#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    pub job_id: i64,
    pub job_title: String,
    pub company: String,
    pub match_score: u32,
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectMatch {
    pub project_id: i64,
    pub username: String,
    pub repository_name: String,
    pub repository_url: String,
    pub match_score: u32,
    pub key_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse<T> {
    pub matches: Vec<T>,
}

// ────────────────────────────────────────────────────────────────────────────
// Task builders
// ────────────────────────────────────────────────────────────────────────────

fn repo_analysis_task(project: &Project) -> Task {
    let description = fill_template(
        REPO_ANALYSIS_TEMPLATE,
        &[
            ("name", project.name.as_str()),
            ("url", project.url.as_str()),
            ("languages", project.languages.join(", ").as_str()),
        ],
    );
    Task::new(REPO_ANALYZER, description, REPO_ANALYSIS_EXPECTED)
}

fn job_analysis_task(job: &Job) -> Task {
    let description = fill_template(
        JOB_ANALYSIS_TEMPLATE,
        &[
            ("title", job.title.as_str()),
            ("company", job.company.as_str()),
            ("requirements", job.requirements.join(", ").as_str()),
        ],
    );
    Task::new(JOB_ANALYZER, description, JOB_ANALYSIS_EXPECTED)
}

pub fn project_to_jobs_crew(project: &Project, jobs: &[Job]) -> Crew {
    let mut tasks = Vec::with_capacity(1 + jobs.len() * 2);
    tasks.push(repo_analysis_task(project));
    tasks.extend(jobs.iter().map(job_analysis_task));
    tasks.extend(jobs.iter().map(|job| {
        let description = fill_template(
            PROJECT_TO_JOB_SCORE_TEMPLATE,
            &[
                ("name", project.name.as_str()),
                ("title", job.title.as_str()),
                ("company", job.company.as_str()),
            ],
        );
        Task::new(COMPATIBILITY_SCORER, description, SCORE_EXPECTED)
    }));
    Crew::new(matching_agents(), tasks)
}

pub fn job_to_projects_crew(job: &Job, projects: &[OwnedProject]) -> Crew {
    let mut tasks = Vec::with_capacity(1 + projects.len() * 2);
    tasks.push(job_analysis_task(job));
    tasks.extend(projects.iter().map(|p| repo_analysis_task(&p.project)));
    tasks.extend(projects.iter().map(|p| {
        let description = fill_template(
            JOB_TO_PROJECT_SCORE_TEMPLATE,
            &[
                ("title", job.title.as_str()),
                ("company", job.company.as_str()),
                ("name", p.project.name.as_str()),
            ],
        );
        Task::new(COMPATIBILITY_SCORER, description, SCORE_EXPECTED)
    }));
    Crew::new(matching_agents(), tasks)
}

// ────────────────────────────────────────────────────────────────────────────
// Templated results
// ────────────────────────────────────────────────────────────────────────────

/// `start - step * index`, floored at zero.
fn templated_score(start: u32, step: u32, index: usize) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    start.saturating_sub(step.saturating_mul(index))
}

fn factors(list: &[&str]) -> Vec<String> {
    list.iter().map(|f| f.to_string()).collect()
}

pub fn templated_job_matches(jobs: &[Job]) -> Vec<JobMatch> {
    jobs.iter()
        .enumerate()
        .map(|(i, job)| JobMatch {
            job_id: job.id,
            job_title: job.title.clone(),
            company: job.company.clone(),
            match_score: templated_score(JOB_SCORE_START, JOB_SCORE_STEP, i),
            key_factors: factors(&JOB_MATCH_FACTORS),
        })
        .collect()
}

pub fn templated_project_matches(projects: &[OwnedProject]) -> Vec<ProjectMatch> {
    projects
        .iter()
        .enumerate()
        .map(|(i, owned)| ProjectMatch {
            project_id: owned.project.id,
            username: owned
                .username
                .clone()
                .unwrap_or_else(|| UNKNOWN_USER.to_string()),
            repository_name: owned.project.name.clone(),
            repository_url: owned.project.url.clone(),
            match_score: templated_score(PROJECT_SCORE_START, PROJECT_SCORE_STEP, i),
            key_factors: factors(&PROJECT_MATCH_FACTORS),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Pipelines
// ────────────────────────────────────────────────────────────────────────────

/// Runs the matching crew for one project against `jobs`.
pub async fn match_project_to_jobs(
    runtime: &dyn AgentRuntime,
    project: &Project,
    jobs: &[Job],
) -> Result<MatchResponse<JobMatch>, AppError> {
    info!("Matching project {} against {} jobs", project.id, jobs.len());

    let output = project_to_jobs_crew(project, jobs)
        .kickoff(runtime)
        .await
        .map_err(|e| AppError::Llm(format!("Project matching failed: {e}")))?;
    debug!("Matching crew output ({} bytes) not used for scoring", output.raw().len());

    Ok(MatchResponse {
        matches: templated_job_matches(jobs),
    })
}

/// Runs the matching crew for one job against `projects`.
pub async fn match_job_to_projects(
    runtime: &dyn AgentRuntime,
    job: &Job,
    projects: &[OwnedProject],
) -> Result<MatchResponse<ProjectMatch>, AppError> {
    info!("Matching job {} against {} projects", job.id, projects.len());

    let output = job_to_projects_crew(job, projects)
        .kickoff(runtime)
        .await
        .map_err(|e| AppError::Llm(format!("Job matching failed: {e}")))?;
    debug!("Matching crew output ({} bytes) not used for scoring", output.raw().len());

    Ok(MatchResponse {
        matches: templated_project_matches(projects),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::testing::RecordingRuntime;
    use chrono::Utc;

    fn project(id: i64, name: &str) -> Project {
        Project {
            id,
            user_id: 1,
            name: name.to_string(),
            url: format!("https://github.com/acme/{name}"),
            description: "Repository description".to_string(),
            languages: vec!["Rust".to_string(), "TypeScript".to_string()],
            last_analyzed: Utc::now(),
        }
    }

    fn job(id: i64, title: &str) -> Job {
        Job {
            id,
            user_id: 2,
            title: title.to_string(),
            company: "Acme".to_string(),
            description: "Build the platform".to_string(),
            requirements: vec!["Rust".to_string(), "SQL".to_string()],
            source_url: None,
            created_at: Utc::now(),
        }
    }

    fn owned(id: i64, name: &str, username: Option<&str>) -> OwnedProject {
        OwnedProject {
            project: project(id, name),
            username: username.map(str::to_string),
        }
    }

    #[test]
    fn test_project_to_jobs_task_order() {
        let jobs = vec![job(10, "Backend"), job(11, "Frontend")];
        let crew = project_to_jobs_crew(&project(1, "otic"), &jobs);

        let roles: Vec<&str> = crew.tasks.iter().map(|t| t.agent.role).collect();
        assert_eq!(
            roles,
            vec![
                REPO_ANALYZER.role,
                JOB_ANALYZER.role,
                JOB_ANALYZER.role,
                COMPATIBILITY_SCORER.role,
                COMPATIBILITY_SCORER.role,
            ]
        );
        assert_eq!(crew.agents.len(), 3);
        assert!(crew.tasks[0].description.contains("otic at https://github.com/acme/otic"));
        assert!(crew.tasks[0].description.contains("Rust, TypeScript"));
        assert!(crew.tasks[1].description.contains("'Backend' at Acme with requirements Rust, SQL"));
        assert!(crew.tasks[4].description.contains("repository otic and job 'Frontend'"));
    }

    #[test]
    fn test_job_to_projects_task_order() {
        let projects = vec![owned(1, "alpha", Some("ada")), owned(2, "beta", None)];
        let crew = job_to_projects_crew(&job(10, "Backend"), &projects);

        assert_eq!(crew.tasks.len(), 5);
        assert_eq!(crew.tasks[0].agent, JOB_ANALYZER);
        assert_eq!(crew.tasks[1].agent, REPO_ANALYZER);
        assert!(crew.tasks[2].description.contains("beta"));
        assert_eq!(crew.tasks[3].agent, COMPATIBILITY_SCORER);
        assert!(crew.tasks[3].description.contains("job 'Backend' at Acme and GitHub repository alpha"));
    }

    #[test]
    fn test_placeholder_text_in_titles_stays_literal() {
        let jobs = vec![job(10, "{company}")];
        let crew = project_to_jobs_crew(&project(1, "{title}"), &jobs);
        assert!(crew.tasks[1].description.contains("job '{company}' at Acme"));
        assert!(crew.tasks[2].description.contains("repository {title} and job '{company}'"));
    }

    #[test]
    fn test_templated_scores_decrease_and_floor_at_zero() {
        assert_eq!(templated_score(85, 10, 0), 85);
        assert_eq!(templated_score(85, 10, 2), 65);
        assert_eq!(templated_score(85, 10, 9), 0);
        assert_eq!(templated_score(90, 15, 6), 0);
        assert_eq!(templated_score(90, 15, usize::MAX), 0);
    }

    #[test]
    fn test_templated_job_matches_follow_input_order() {
        let matches = templated_job_matches(&[job(10, "Backend"), job(11, "Frontend")]);
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].job_id, 10);
        assert_eq!(matches[0].match_score, 85);
        assert_eq!(matches[1].job_title, "Frontend");
        assert_eq!(matches[1].match_score, 75);
        assert_eq!(matches[1].key_factors.len(), 4);
    }

    #[test]
    fn test_templated_project_matches_default_username() {
        let matches = templated_project_matches(&[owned(1, "alpha", Some("ada")), owned(2, "beta", None)]);
        assert_eq!(matches[0].username, "ada");
        assert_eq!(matches[0].match_score, 90);
        assert_eq!(matches[1].username, "Unknown User");
        assert_eq!(matches[1].match_score, 75);
        assert_eq!(matches[1].repository_url, "https://github.com/acme/beta");
    }

    #[tokio::test]
    async fn test_match_project_to_jobs_runs_every_task() {
        let runtime = RecordingRuntime::default();
        let jobs = vec![job(10, "Backend"), job(11, "Frontend"), job(12, "Data")];
        let response = match_project_to_jobs(&runtime, &project(1, "otic"), &jobs)
            .await
            .unwrap();

        assert_eq!(runtime.calls().len(), 7);
        let scores: Vec<u32> = response.matches.iter().map(|m| m.match_score).collect();
        assert_eq!(scores, vec![85, 75, 65]);
    }

    #[tokio::test]
    async fn test_match_job_to_projects_surfaces_runtime_failure() {
        let runtime = RecordingRuntime::failing_at(1);
        let err = match_job_to_projects(&runtime, &job(10, "Backend"), &[owned(1, "alpha", None)])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }

    #[test]
    fn test_match_response_shape() {
        let response = MatchResponse {
            matches: templated_job_matches(&[job(10, "Backend")]),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["matches"][0]["job_id"], 10);
        assert_eq!(value["matches"][0]["company"], "Acme");
        assert_eq!(value["matches"][0]["match_score"], 85);
    }
}
