use clap::Parser;
use serde::Serialize;

use apify_client::ApifyClient;
use curio_cli::{exit_with_error, init_tracing, parse_args};
use curio_core::fetch::PostFetcher;
use curio_core::job::ActorRegistry;
use curio_core::normalize::PostContent;
use curio_core::{platform, Config, Platform, Result};

/// Fetch a single social post through a scraping actor and print it as JSON.
#[derive(Parser, Debug)]
#[command(name = "curio-fetch", version, about)]
struct Args {
    /// Post URL to fetch
    #[arg(long)]
    url: String,

    /// Platform key override (twitter, x, instagram, threads)
    #[arg(long)]
    platform: Option<String>,
}

#[derive(Serialize)]
struct FetchOutput<'a> {
    success: bool,
    platform: Platform,
    url: &'a str,
    #[serde(flatten)]
    content: PostContent,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let args: Args = parse_args();

    match run(&args).await {
        Ok(output) => println!("{output}"),
        Err(err) => exit_with_error(&err.to_string()),
    }
}

async fn run(args: &Args) -> Result<String> {
    let config = Config::fetch_from_env()?;
    let platform = platform::resolve(&args.url, args.platform.as_deref())?;

    let fetcher = PostFetcher::new(
        ApifyClient::new(config.apify_token),
        ActorRegistry::default(),
    );
    let content = fetcher.fetch(platform, &args.url).await?;

    let output = FetchOutput {
        success: true,
        platform,
        url: &args.url,
        content,
    };
    Ok(serde_json::to_string(&output)?)
}
