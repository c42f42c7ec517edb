use clap::Parser;
use serde::Serialize;

use curio_cli::{exit_with_error, init_tracing, parse_args};
use curio_core::document::{ArticleSaver, SaveRequest};
use curio_core::{Config, Result};
use notion_client::NotionClient;

/// Save an article into the knowledge database and print the created page
/// reference as JSON.
#[derive(Parser, Debug)]
#[command(name = "curio-save", version, about)]
struct Args {
    /// Page title
    #[arg(long)]
    title: String,

    /// Source URL stored on the page
    #[arg(long)]
    url: String,

    /// Category label (select property)
    #[arg(long)]
    source: Option<String>,

    /// Short summary, stored as a property and a body section
    #[arg(long)]
    summary: Option<String>,

    /// Full article text, stored as a body section
    #[arg(long = "full_text")]
    full_text: Option<String>,

    /// Free-form note, stored as a property
    #[arg(long)]
    memo: Option<String>,
}

#[derive(Serialize)]
struct SaveOutput<'a> {
    success: bool,
    #[serde(rename = "pageId")]
    page_id: String,
    #[serde(rename = "pageUrl")]
    page_url: String,
    title: &'a str,
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
    let config = Config::save_from_env()?;

    let request = SaveRequest {
        title: args.title.clone(),
        url: args.url.clone(),
        source: non_empty(&args.source),
        summary: non_empty(&args.summary),
        full_text: non_empty(&args.full_text),
        memo: non_empty(&args.memo),
    };

    let saver = ArticleSaver::new(NotionClient::new(config.notion_api_key), config.notion_db_id);
    let page = saver.save(&request).await?;

    let output = SaveOutput {
        success: true,
        page_id: page.id,
        page_url: page.url,
        title: &args.title,
    };
    Ok(serde_json::to_string(&output)?)
}

/// Treat an empty flag value as absent; empty sections and properties are
/// skipped, not stored blank.
fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(String::from)
}
