// Per-platform actor selection and job input construction.

use apify_client::{InstagramScrapeInput, ThreadsScrapeInput, TweetScrapeInput};
use serde::Serialize;

use crate::platform::Platform;

/// Apify actor identifiers, one per supported platform, in the API's
/// path-safe `user~actor` spelling. Built once and handed to the fetch
/// pipeline; never mutated.
#[derive(Debug, Clone)]
pub struct ActorRegistry {
    pub twitter: String,
    pub instagram: String,
    pub threads: String,
}

impl Default for ActorRegistry {
    fn default() -> Self {
        Self {
            twitter: "apidojo~tweet-scraper".to_string(),
            instagram: "apify~instagram-scraper".to_string(),
            threads: "curious_coder~threads-scraper".to_string(),
        }
    }
}

impl ActorRegistry {
    pub fn actor_for(&self, platform: Platform) -> &str {
        match platform {
            Platform::Twitter => &self.twitter,
            Platform::Instagram => &self.instagram,
            Platform::Threads => &self.threads,
        }
    }
}

/// A platform-specific scrape job input. Serializes as the bare actor
/// payload; the variant itself never appears on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ScrapeInput {
    Twitter(TweetScrapeInput),
    Instagram(InstagramScrapeInput),
    Threads(ThreadsScrapeInput),
}

impl ScrapeInput {
    /// Build the job input for one post URL. Every shape asks its actor for
    /// exactly one item; that bound is a cost decision, not a default to
    /// relax quietly.
    pub fn for_platform(platform: Platform, url: &str) -> ScrapeInput {
        match platform {
            Platform::Twitter => ScrapeInput::Twitter(TweetScrapeInput {
                start_urls: vec![url.to_string()],
                max_items: 1,
                add_user_info: true,
            }),
            Platform::Instagram => ScrapeInput::Instagram(InstagramScrapeInput {
                direct_urls: vec![url.to_string()],
                results_limit: 1,
            }),
            Platform::Threads => ScrapeInput::Threads(ThreadsScrapeInput {
                urls: vec![url.to_string()],
                max_items: 1,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn twitter_input_shape() {
        let input =
            ScrapeInput::for_platform(Platform::Twitter, "https://x.com/u/status/1?ref=abc");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "startUrls": ["https://x.com/u/status/1?ref=abc"],
                "maxItems": 1,
                "addUserInfo": true,
            })
        );
    }

    #[test]
    fn instagram_input_shape() {
        let input = ScrapeInput::for_platform(Platform::Instagram, "https://instagram.com/p/abc/");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "directUrls": ["https://instagram.com/p/abc/"],
                "resultsLimit": 1,
            })
        );
    }

    #[test]
    fn threads_input_shape() {
        let input =
            ScrapeInput::for_platform(Platform::Threads, "https://threads.net/@u/post/xyz");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "urls": ["https://threads.net/@u/post/xyz"],
                "maxItems": 1,
            })
        );
    }

    #[test]
    fn default_registry_covers_every_platform() {
        let actors = ActorRegistry::default();
        assert_eq!(actors.actor_for(Platform::Twitter), "apidojo~tweet-scraper");
        assert_eq!(
            actors.actor_for(Platform::Instagram),
            "apify~instagram-scraper"
        );
        assert_eq!(
            actors.actor_for(Platform::Threads),
            "curious_coder~threads-scraper"
        );
    }
}
