pub mod blocks;
pub mod error;
pub mod types;

pub use blocks::{markdown_to_blocks, MAX_BLOCKS};
pub use error::{NotionError, Result};
pub use types::{Block, CreatedPage, PageProperties};

use serde_json::json;

const BASE_URL: &str = "https://api.notion.com/v1";

/// Pinned API revision; the property and block payload shapes in this crate
/// follow this version's schema.
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionClient {
    client: reqwest::Client,
    api_key: String,
}

impl NotionClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Create a page in a database with the given properties and body blocks.
    pub async fn create_page(
        &self,
        database_id: &str,
        properties: &PageProperties,
        children: &[Block],
    ) -> Result<CreatedPage> {
        let body = json!({
            "parent": { "database_id": database_id },
            "properties": properties.to_api(),
            "children": children.iter().map(Block::to_api).collect::<Vec<_>>(),
        });

        let resp = self
            .client
            .post(format!("{BASE_URL}/pages"))
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(NotionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: CreatedPage = resp.json().await?;
        tracing::info!(page_id = %page.id, "Created page");
        Ok(page)
    }
}
