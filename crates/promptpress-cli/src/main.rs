//! Promptpress - publish the curated prompt collection to a Notion page
//!
//! Single-shot, interactively run tool. Configuration comes from the
//! environment:
//!
//! - `NOTION_API_KEY`: Notion integration token
//! - `NOTION_PAGE_URL`: shareable URL of the target page
//!
//! The run builds the block document, appends it to the page in ordered
//! batches, and prints a final success or failure summary. The first
//! rejected batch aborts the run; batches already appended stay on the page.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use promptpress_core::{
    build_document, Config, NotionTransport, PromptSet, Publisher,
};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "promptpress")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Publish the curated prompt collection to a Notion page", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    promptpress_core::init_tracing(cli.json, level);

    // Configuration is resolved before any network activity; a missing
    // credential aborts here.
    let config = Config::from_env().context("Configuration error")?;
    let target = config.target();

    println!("Publishing prompt collection to Notion");
    println!("Target page: {}", target.page_id);

    let timestamp = Local::now().format("%Y年%m月%d日 %H:%M").to_string();
    let set = PromptSet::curated(timestamp);
    let doc = build_document(&set);
    info!(blocks = doc.len(), "document built");

    let transport = NotionTransport::new(&target.token);
    let publisher = Publisher::new(transport, target.page_id.clone());

    let report = publisher
        .publish(&doc)
        .await
        .context("Failed to publish the prompt collection")?;

    println!(
        "Done: appended {} blocks in {} batch(es) to {}",
        report.blocks, report.batches, target.page_id
    );
    println!("Open the page to verify: {}", config.page_url);

    Ok(())
}
