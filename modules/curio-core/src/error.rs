use thiserror::Error;

pub type Result<T> = std::result::Result<T, CurioError>;

#[derive(Debug, Error)]
pub enum CurioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error(transparent)]
    Apify(#[from] apify_client::ApifyError),

    #[error(transparent)]
    Notion(#[from] notion_client::NotionError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
