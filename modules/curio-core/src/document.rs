// Document assembly for the save pipeline: property map plus markdown body.

use notion_client::{markdown_to_blocks, Block, CreatedPage, NotionClient, PageProperties};
use tracing::info;

use crate::error::Result;

/// Input fields for one saved article.
#[derive(Debug, Clone, Default)]
pub struct SaveRequest {
    pub title: String,
    pub url: String,
    pub source: Option<String>,
    pub summary: Option<String>,
    pub full_text: Option<String>,
    pub memo: Option<String>,
}

impl SaveRequest {
    /// Page properties for the store. Truncation to store limits happens at
    /// the API boundary, not here.
    pub fn properties(&self) -> PageProperties {
        PageProperties {
            title: self.title.clone(),
            url: self.url.clone(),
            source: self.source.clone(),
            summary: self.summary.clone(),
            memo: self.memo.clone(),
        }
    }

    /// The markdown body: optional summary and full-text sections, then a
    /// divider and the source URL.
    pub fn body_markdown(&self) -> String {
        let mut parts = Vec::new();
        if let Some(summary) = &self.summary {
            parts.push(format!("## Summary\n\n{summary}"));
        }
        if let Some(full_text) = &self.full_text {
            parts.push(format!("## Body\n\n{full_text}"));
        }
        parts.push(format!("---\nSource: {}", self.url));
        parts.join("\n\n")
    }

    /// Body blocks for page creation.
    pub fn body_blocks(&self) -> Vec<Block> {
        markdown_to_blocks(&self.body_markdown())
    }
}

pub struct ArticleSaver {
    client: NotionClient,
    database_id: String,
}

impl ArticleSaver {
    pub fn new(client: NotionClient, database_id: String) -> Self {
        Self {
            client,
            database_id,
        }
    }

    /// Create the article page: properties plus segmented body blocks.
    pub async fn save(&self, request: &SaveRequest) -> Result<CreatedPage> {
        let properties = request.properties();
        let blocks = request.body_blocks();
        info!(
            title = request.title.as_str(),
            blocks = blocks.len(),
            "Saving article"
        );

        let page = self
            .client
            .create_page(&self.database_id, &properties, &blocks)
            .await?;
        Ok(page)
    }
}
