use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// --- Actor input payloads ---

/// Input for the apidojo~tweet-scraper actor, targeting one post URL.
#[derive(Debug, Clone, Serialize)]
pub struct TweetScrapeInput {
    #[serde(rename = "startUrls")]
    pub start_urls: Vec<String>,
    #[serde(rename = "maxItems")]
    pub max_items: u32,
    #[serde(rename = "addUserInfo")]
    pub add_user_info: bool,
}

/// Input for the apify~instagram-scraper actor, targeting one post URL.
#[derive(Debug, Clone, Serialize)]
pub struct InstagramScrapeInput {
    #[serde(rename = "directUrls")]
    pub direct_urls: Vec<String>,
    #[serde(rename = "resultsLimit")]
    pub results_limit: u32,
}

/// Input for the curious_coder~threads-scraper actor.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadsScrapeInput {
    pub urls: Vec<String>,
    #[serde(rename = "maxItems")]
    pub max_items: u32,
}

// --- Run metadata ---

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct RunData {
    pub id: String,
    pub status: String,
    /// Absent when the service accepted the run but allocated no result set.
    #[serde(rename = "defaultDatasetId")]
    pub default_dataset_id: Option<String>,
    #[serde(rename = "startedAt")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "finishedAt")]
    pub finished_at: Option<DateTime<Utc>>,
}

// --- Raw dataset items ---
// Actor output schemas are not owned by this crate. Every field is optional
// so schema drift surfaces as missing values, not deserialization failures.

/// Author info nested inside a Tweet (current actor schema).
#[derive(Debug, Clone, Deserialize)]
pub struct TweetAuthor {
    #[serde(rename = "userName")]
    pub user_name: Option<String>,
}

/// Legacy user object nested inside a Tweet.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetUser {
    pub screen_name: Option<String>,
}

/// Nested tweet payload some actor versions emit.
#[derive(Debug, Clone, Deserialize)]
pub struct NestedTweet {
    pub full_text: Option<String>,
}

/// A single tweet from the Apify dataset. Carries both the legacy API field
/// spellings and the current actor's camelCase ones.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub full_text: Option<String>,
    pub text: Option<String>,
    pub tweet: Option<NestedTweet>,
    pub user: Option<TweetUser>,
    pub author: Option<TweetAuthor>,
    pub favorite_count: Option<i64>,
    #[serde(rename = "likeCount")]
    pub like_count: Option<i64>,
    #[serde(rename = "retweet_count")]
    pub retweet_count_legacy: Option<i64>,
    #[serde(rename = "retweetCount")]
    pub retweet_count: Option<i64>,
}

/// A single Instagram post from the Apify dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct InstagramPost {
    pub caption: Option<String>,
    #[serde(rename = "ownerUsername")]
    pub owner_username: Option<String>,
    #[serde(rename = "likesCount")]
    pub likes_count: Option<i64>,
    #[serde(rename = "commentsCount")]
    pub comments_count: Option<i64>,
}

/// Author info nested inside a Threads post.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadsAuthor {
    pub username: Option<String>,
}

/// A single Threads post from the Apify dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadsPost {
    pub text: Option<String>,
    pub caption: Option<String>,
    pub author: Option<ThreadsAuthor>,
    #[serde(rename = "ownerUsername")]
    pub owner_username: Option<String>,
}
