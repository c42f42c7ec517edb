pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{
    InstagramPost, InstagramScrapeInput, RunData, ThreadsPost, ThreadsScrapeInput, Tweet,
    TweetScrapeInput,
};

use serde::Serialize;
use serde_json::Value;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Ceiling in seconds for the synchronous wait on an actor run. When it
/// elapses the run is consumed in whatever state it reached; there is no
/// retry and no abort.
const WAIT_FOR_FINISH_SECS: u32 = 120;

/// Dataset page size. Each scrape asks its actor for a single item, so one
/// small page is enough; only the first item is consulted downstream.
const DATASET_PAGE_LIMIT: u32 = 5;

pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
        }
    }

    /// Start an actor run and wait (bounded) for it to finish.
    pub async fn run_actor_sync<I: Serialize>(&self, actor_id: &str, input: &I) -> Result<RunData> {
        let url = format!(
            "{}/acts/{}/runs?waitForFinish={}",
            BASE_URL, actor_id, WAIT_FOR_FINISH_SECS
        );
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Fetch one page of dataset items as raw JSON. Interpretation belongs to
    /// the caller; a body that is not an array is not an error here.
    pub async fn dataset_items(&self, dataset_id: &str) -> Result<Value> {
        let url = format!(
            "{}/datasets/{}/items?format=json&limit={}",
            BASE_URL, dataset_id, DATASET_PAGE_LIMIT
        );
        let resp = self.client.get(&url).bearer_auth(&self.token).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApifyError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }

    /// Scrape a single post end-to-end: start the run, wait out the finish
    /// ceiling, fetch the first result page.
    pub async fn scrape_post<I: Serialize>(&self, actor_id: &str, input: &I) -> Result<Value> {
        tracing::info!(actor_id, "Starting actor run");

        let run = self.run_actor_sync(actor_id, input).await?;
        tracing::info!(run_id = %run.id, status = %run.status, "Actor run returned");

        let dataset_id = run.default_dataset_id.ok_or(ApifyError::MissingDataset)?;
        let page = self.dataset_items(&dataset_id).await?;
        tracing::info!(dataset_id = %dataset_id, "Fetched dataset items");

        Ok(page)
    }
}
