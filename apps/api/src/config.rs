use anyhow::{Context, Result};

pub const DEFAULT_SECRET_KEY: &str = "dev_secret_key";
pub const DEFAULT_MATCHER_MODEL: &str = "claude-sonnet-4-5";
pub const DEFAULT_SCRAPER_MODEL: &str = "claude-haiku-4-5";

/// Application configuration loaded from environment variables.
/// Every variable has a development default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub token_ttl_hours: i64,
    /// `None` runs the agent crews offline (no provider calls).
    pub llm_api_key: Option<String>,
    pub matcher_model: String,
    pub scraper_model: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secret_key = std::env::var("SECRET_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SECRET_KEY.to_string());

        Ok(Config {
            database_url: env_or("DATABASE_URL", "sqlite://otic.db"),
            secret_key,
            token_ttl_hours: env_or("TOKEN_TTL_HOURS", "24")
                .parse::<i64>()
                .context("TOKEN_TTL_HOURS must be a whole number of hours")?,
            llm_api_key: std::env::var("LLM_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            matcher_model: env_or("MATCHER_MODEL", DEFAULT_MATCHER_MODEL),
            scraper_model: env_or("SCRAPER_MODEL", DEFAULT_SCRAPER_MODEL),
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Offline configuration backed by an in-memory database.
    pub fn for_tests() -> Self {
        Config {
            database_url: "sqlite::memory:".to_string(),
            secret_key: "test-secret-key-for-jwt-validation".to_string(),
            token_ttl_hours: 1,
            llm_api_key: None,
            matcher_model: DEFAULT_MATCHER_MODEL.to_string(),
            scraper_model: DEFAULT_SCRAPER_MODEL.to_string(),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
