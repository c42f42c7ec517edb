use crate::error::{CurioError, Result};

/// Application configuration loaded from environment variables. Each binary
/// loads only the secrets it needs; the rest stay empty.
#[derive(Debug, Clone)]
pub struct Config {
    pub apify_token: String,
    pub notion_api_key: String,
    pub notion_db_id: String,
}

impl Config {
    /// Load configuration for the fetch binary.
    pub fn fetch_from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            apify_token: required_env("APIFY_API_TOKEN")?,
            notion_api_key: String::new(),
            notion_db_id: String::new(),
        })
    }

    /// Load configuration for the save binary.
    pub fn save_from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            apify_token: String::new(),
            notion_api_key: required_env("NOTION_API_KEY")?,
            notion_db_id: required_env("NOTION_DB_ID")?,
        })
    }
}

fn required_env(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| CurioError::Config(format!("{key} environment variable is required")))
}
