use serde::{Deserialize, Serialize};
use std::env;

use crate::services::pagination::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: String,
    pub log_level: String,

    // Content settings
    pub comments_per_page: usize,
    pub max_comment_length: usize,

    // Initial forest, loaded once at startup when set
    pub seed_path: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),

            comments_per_page: env::var("COMMENTS_PER_PAGE")
                .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
                .parse()?,
            max_comment_length: env::var("MAX_COMMENT_LENGTH")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()?,

            seed_path: env::var("SEED_PATH").ok(),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "development".to_string(),
            log_level: "info".to_string(),
            comments_per_page: DEFAULT_PAGE_SIZE,
            max_comment_length: 10000,
            seed_path: None,
        }
    }
}
