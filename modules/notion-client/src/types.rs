use serde::Deserialize;
use serde_json::{json, Value};

/// Notion caps any single rich-text content string at 2000 characters.
pub const RICH_TEXT_LIMIT: usize = 2000;

/// Notion caps title property content at 200 characters.
pub const TITLE_LIMIT: usize = 200;

/// Truncate to at most `max` characters, never splitting a character.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// One structural unit of a page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading2(String),
    Heading3(String),
    BulletItem(String),
    NumberedItem(String),
    Divider,
    Paragraph(String),
}

impl Block {
    /// Render as the Notion API block object.
    pub fn to_api(&self) -> Value {
        match self {
            Block::Heading2(text) => json!({
                "object": "block",
                "type": "heading_2",
                "heading_2": { "rich_text": [rich_text(text)] },
            }),
            Block::Heading3(text) => json!({
                "object": "block",
                "type": "heading_3",
                "heading_3": { "rich_text": [rich_text(text)] },
            }),
            Block::BulletItem(text) => json!({
                "object": "block",
                "type": "bulleted_list_item",
                "bulleted_list_item": { "rich_text": [rich_text(text)] },
            }),
            Block::NumberedItem(text) => json!({
                "object": "block",
                "type": "numbered_list_item",
                "numbered_list_item": { "rich_text": [rich_text(text)] },
            }),
            Block::Divider => json!({
                "object": "block",
                "type": "divider",
                "divider": {},
            }),
            Block::Paragraph(text) => json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": { "rich_text": [rich_text(text)] },
            }),
        }
    }
}

fn rich_text(content: &str) -> Value {
    json!({ "type": "text", "text": { "content": content } })
}

/// Property values for a page in an articles database.
#[derive(Debug, Clone, Default)]
pub struct PageProperties {
    pub title: String,
    pub url: String,
    pub source: Option<String>,
    pub summary: Option<String>,
    pub memo: Option<String>,
}

impl PageProperties {
    /// Render as the Notion API property map. Store limits are applied here:
    /// titles are capped at 200 characters, rich-text fields at 2000.
    pub fn to_api(&self) -> Value {
        let mut props = serde_json::Map::new();
        props.insert(
            "title".to_string(),
            json!({
                "title": [{ "text": { "content": truncate_chars(&self.title, TITLE_LIMIT) } }]
            }),
        );
        props.insert("url".to_string(), json!({ "url": self.url }));

        if let Some(source) = &self.source {
            props.insert("source".to_string(), json!({ "select": { "name": source } }));
        }
        if let Some(summary) = &self.summary {
            props.insert(
                "summary".to_string(),
                json!({
                    "rich_text": [{ "text": { "content": truncate_chars(summary, RICH_TEXT_LIMIT) } }]
                }),
            );
        }
        if let Some(memo) = &self.memo {
            props.insert(
                "memo".to_string(),
                json!({
                    "rich_text": [{ "text": { "content": truncate_chars(memo, RICH_TEXT_LIMIT) } }]
                }),
            );
        }

        Value::Object(props)
    }
}

/// A created page reference from the Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    pub url: String,
}
