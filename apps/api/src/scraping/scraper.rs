//! Scraper: builds the scrape/parse crew for a URL or a keyword batch and
//! returns canned postings.

use serde::Serialize;
use tracing::{debug, info};

use crate::crew::runtime::AgentRuntime;
use crate::crew::{fill_template, Crew, Task};
use crate::errors::AppError;
use crate::scraping::prompts::{
    LISTING_PARSER, LISTING_SCRAPER, PARSE_DESCRIPTION, PARSE_EXPECTED, PARSE_KEYWORD_TEMPLATE,
    SCRAPE_KEYWORD_EXPECTED, SCRAPE_KEYWORD_TEMPLATE, SCRAPE_URL_EXPECTED, SCRAPE_URL_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    Success,
    Error,
}

/// One posting as extracted by the scraper crew.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapedJob {
    pub title: String,
    pub company: String,
    pub url: String,
    pub description: String,
    pub status: ScrapeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScrapeResponse {
    pub jobs: Vec<ScrapedJob>,
}

// (title, company, url, description)
const URL_POSTINGS: [(&str, &str, &str, &str); 2] = [
    (
        "Senior Frontend Developer",
        "TechCorp",
        "https://example.com/job/123",
        "We're looking for a senior frontend developer with experience in React and TypeScript.",
    ),
    (
        "Full Stack Engineer",
        "InnovateSoft",
        "https://example.com/job/456",
        "Join our team as a full stack engineer working on exciting projects.",
    ),
];

const BATCH_EXTRA_POSTING: (&str, &str, &str, &str) = (
    "React Developer",
    "WebSolutions",
    "https://example.com/job/789",
    "Looking for a React developer to join our team.",
);

const BATCH_FAILED_POSTING: (&str, &str, &str, &str) = (
    "Frontend Engineer",
    "TechStartup",
    "https://example.com/job/101",
    "Frontend engineer position at a fast-growing startup.",
);

fn posting((title, company, url, description): (&str, &str, &str, &str)) -> ScrapedJob {
    ScrapedJob {
        title: title.to_string(),
        company: company.to_string(),
        url: url.to_string(),
        description: description.to_string(),
        status: ScrapeStatus::Success,
        error: None,
    }
}

pub fn canned_url_postings() -> Vec<ScrapedJob> {
    URL_POSTINGS.into_iter().map(posting).collect()
}

pub fn canned_batch_postings() -> Vec<ScrapedJob> {
    let mut jobs = canned_url_postings();
    jobs.push(posting(BATCH_EXTRA_POSTING));
    jobs.push(ScrapedJob {
        status: ScrapeStatus::Error,
        error: Some("Failed to parse job details".to_string()),
        ..posting(BATCH_FAILED_POSTING)
    });
    jobs
}

/// Splits a newline-separated keyword block, dropping blank lines.
pub fn parse_keywords(keywords: &str) -> Vec<String> {
    keywords
        .lines()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn scraper_agents() -> Vec<crate::crew::Agent> {
    vec![LISTING_SCRAPER, LISTING_PARSER]
}

pub fn url_crew(url: &str) -> Crew {
    Crew::new(
        scraper_agents(),
        vec![
            Task::new(
                LISTING_SCRAPER,
                fill_template(SCRAPE_URL_TEMPLATE, &[("url", url)]),
                SCRAPE_URL_EXPECTED,
            ),
            Task::new(LISTING_PARSER, PARSE_DESCRIPTION.to_string(), PARSE_EXPECTED),
        ],
    )
}

pub fn batch_crew(keywords: &[String]) -> Crew {
    let scrape = keywords.iter().map(|k| {
        Task::new(
            LISTING_SCRAPER,
            fill_template(SCRAPE_KEYWORD_TEMPLATE, &[("keyword", k.as_str())]),
            SCRAPE_KEYWORD_EXPECTED,
        )
    });
    let parse = keywords.iter().map(|k| {
        Task::new(
            LISTING_PARSER,
            fill_template(PARSE_KEYWORD_TEMPLATE, &[("keyword", k.as_str())]),
            PARSE_EXPECTED,
        )
    });
    Crew::new(scraper_agents(), scrape.chain(parse).collect())
}

pub async fn scrape_url(runtime: &dyn AgentRuntime, url: &str) -> Result<ScrapeResponse, AppError> {
    info!("Scraping postings from {url}");

    let output = url_crew(url)
        .kickoff(runtime)
        .await
        .map_err(|e| AppError::Llm(format!("Scraping {url} failed: {e}")))?;
    debug!("Scraper crew output ({} bytes) replaced by stub postings", output.raw().len());

    Ok(ScrapeResponse {
        jobs: canned_url_postings(),
    })
}

/// Runs one scrape and one parse task per keyword. `keywords` must be non-empty.
pub async fn scrape_batch(
    runtime: &dyn AgentRuntime,
    keywords: &[String],
) -> Result<ScrapeResponse, AppError> {
    info!("Scraping postings for {} keywords", keywords.len());

    let output = batch_crew(keywords)
        .kickoff(runtime)
        .await
        .map_err(|e| AppError::Llm(format!("Batch scraping failed: {e}")))?;
    debug!("Scraper crew output ({} bytes) replaced by stub postings", output.raw().len());

    Ok(ScrapeResponse {
        jobs: canned_batch_postings(),
    })
}
