// The fetch pipeline: build the job input, run the actor, normalize the
// first result.

use apify_client::ApifyClient;
use tracing::info;

use crate::error::Result;
use crate::job::{ActorRegistry, ScrapeInput};
use crate::normalize::{self, PostContent};
use crate::platform::Platform;

pub struct PostFetcher {
    client: ApifyClient,
    actors: ActorRegistry,
}

impl PostFetcher {
    pub fn new(client: ApifyClient, actors: ActorRegistry) -> Self {
        Self { client, actors }
    }

    /// Fetch one post and normalize it into the canonical record.
    pub async fn fetch(&self, platform: Platform, url: &str) -> Result<PostContent> {
        info!(%platform, url, "Fetching post");

        let input = ScrapeInput::for_platform(platform, url);
        let actor_id = self.actors.actor_for(platform);
        let page = self.client.scrape_post(actor_id, &input).await?;

        let content = normalize::normalize(platform, &page);
        info!(
            chars = content.text.chars().count(),
            author = content.author.as_str(),
            "Normalized post content"
        );
        Ok(content)
    }
}
