// Canonical content extraction with ordered fallback chains.

use std::collections::BTreeMap;

use apify_client::{InstagramPost, ThreadsPost, Tweet};
use serde::Serialize;
use serde_json::Value;

use crate::platform::Platform;

/// Longest raw-item snapshot embedded when an item defeats its platform
/// schema entirely.
const SNAPSHOT_LIMIT: usize = 2000;

/// The canonical, platform-independent content record. `text` and `author`
/// are always present, possibly empty.
#[derive(Debug, Clone, Serialize)]
pub struct PostContent {
    pub text: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<BTreeMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PostContent {
    /// The empty-but-valid record for a run that produced no items.
    fn no_data() -> Self {
        Self {
            text: String::new(),
            author: String::new(),
            metrics: None,
            note: Some("No data returned".to_string()),
        }
    }
}

/// First defined string candidate, else "". The slice spells out the
/// resolution order.
fn first_text(candidates: &[Option<&str>]) -> String {
    candidates.iter().find_map(|c| *c).unwrap_or("").to_string()
}

/// First defined numeric candidate, else 0.
fn first_count(candidates: &[Option<i64>]) -> i64 {
    candidates.iter().find_map(|c| *c).unwrap_or(0)
}

/// Normalize one raw dataset page into the canonical record. Total: missing
/// fields degrade to empty strings and zero counts; an empty or non-array
/// page yields the annotated empty record, never an error.
pub fn normalize(platform: Platform, page: &Value) -> PostContent {
    let Some(item) = page.as_array().and_then(|items| items.first()) else {
        return PostContent::no_data();
    };

    match platform {
        Platform::Twitter => match serde_json::from_value::<Tweet>(item.clone()) {
            Ok(tweet) => normalize_tweet(&tweet),
            Err(_) => raw_snapshot(item),
        },
        Platform::Instagram => match serde_json::from_value::<InstagramPost>(item.clone()) {
            Ok(post) => normalize_instagram(&post),
            Err(_) => raw_snapshot(item),
        },
        Platform::Threads => match serde_json::from_value::<ThreadsPost>(item.clone()) {
            Ok(post) => normalize_threads(&post),
            Err(_) => raw_snapshot(item),
        },
    }
}

fn normalize_tweet(tweet: &Tweet) -> PostContent {
    let text = first_text(&[
        tweet.full_text.as_deref(),
        tweet.text.as_deref(),
        tweet.tweet.as_ref().and_then(|t| t.full_text.as_deref()),
    ]);
    let author = first_text(&[
        tweet.user.as_ref().and_then(|u| u.screen_name.as_deref()),
        tweet.author.as_ref().and_then(|a| a.user_name.as_deref()),
    ]);

    let mut metrics = BTreeMap::new();
    metrics.insert(
        "likes".to_string(),
        first_count(&[tweet.favorite_count, tweet.like_count]),
    );
    metrics.insert(
        "retweets".to_string(),
        first_count(&[tweet.retweet_count_legacy, tweet.retweet_count]),
    );

    PostContent {
        text,
        author,
        metrics: Some(metrics),
        note: None,
    }
}

fn normalize_instagram(post: &InstagramPost) -> PostContent {
    let mut metrics = BTreeMap::new();
    metrics.insert("likes".to_string(), first_count(&[post.likes_count]));
    metrics.insert("comments".to_string(), first_count(&[post.comments_count]));

    PostContent {
        text: first_text(&[post.caption.as_deref()]),
        author: first_text(&[post.owner_username.as_deref()]),
        metrics: Some(metrics),
        note: None,
    }
}

fn normalize_threads(post: &ThreadsPost) -> PostContent {
    let text = first_text(&[post.text.as_deref(), post.caption.as_deref()]);
    let author = first_text(&[
        post.author.as_ref().and_then(|a| a.username.as_deref()),
        post.owner_username.as_deref(),
    ]);

    // The Threads actor exposes no engagement counts; the map stays empty.
    PostContent {
        text,
        author,
        metrics: Some(BTreeMap::new()),
        note: None,
    }
}

/// Defensive fallback for an item that defeats its platform schema: embed a
/// compact JSON snapshot, truncated, instead of failing the fetch.
fn raw_snapshot(item: &Value) -> PostContent {
    let rendered = item.to_string();
    PostContent {
        text: rendered.chars().take(SNAPSHOT_LIMIT).collect(),
        author: String::new(),
        metrics: None,
        note: None,
    }
}
