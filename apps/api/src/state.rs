use std::sync::Arc;

use anyhow::Result;
use chrono::Duration;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::auth::token::TokenService;
use crate::config::Config;
use crate::crew::runtime::{AgentRuntime, LlmRuntime, OfflineRuntime};
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
    pub tokens: TokenService,
    /// Runtime behind the project/job matcher crews.
    pub matcher_runtime: Arc<dyn AgentRuntime>,
    /// Runtime behind the job scraper crews.
    pub scraper_runtime: Arc<dyn AgentRuntime>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Result<Self> {
        let (matcher_runtime, scraper_runtime): (Arc<dyn AgentRuntime>, Arc<dyn AgentRuntime>) =
            match &config.llm_api_key {
                Some(key) => {
                    let matcher = LlmClient::new(key.clone(), config.matcher_model.clone())?;
                    let scraper = LlmClient::new(key.clone(), config.scraper_model.clone())?;
                    info!(
                        "LLM runtimes initialized (matcher: {}, scraper: {})",
                        matcher.model(),
                        scraper.model()
                    );
                    (Arc::new(LlmRuntime(matcher)), Arc::new(LlmRuntime(scraper)))
                }
                None => {
                    warn!("LLM_API_KEY not set, agent crews will run offline");
                    (Arc::new(OfflineRuntime), Arc::new(OfflineRuntime))
                }
            };

        let tokens = TokenService::new(
            &config.secret_key,
            Duration::hours(config.token_ttl_hours),
        );

        Ok(AppState {
            db,
            config,
            tokens,
            matcher_runtime,
            scraper_runtime,
        })
    }
}
