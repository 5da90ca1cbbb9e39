use std::{error::Error, path::PathBuf, sync::Arc, time::Duration};

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use cs2inventory::{
    browser::{
        search::{SearchItems, DEFAULT_SEARCH_COUNT},
        steamcommunity::{CS2_APPID, CS2_CONTEXTID},
    },
    EnrichConfig, Enricher, HttpFetcher, SteamInventory,
};

#[derive(Parser, Debug)]
#[command(name = "cs2inventory", about = "Steam inventories with float, pattern and sticker info")]
struct Args {
    /// JSON config file, see `EnrichConfig`
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    pretty: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an inventory and inspect every item that can be inspected
    Inventory {
        /// SteamID64 of the inventory owner
        #[arg(long)]
        steamid: u64,
        #[arg(long, default_value_t = CS2_APPID)]
        appid: u32,
        #[arg(long, default_value_t = CS2_CONTEXTID)]
        contextid: u32,
        /// Overrides the max number of inspection requests in flight
        #[arg(long)]
        concurrency: Option<usize>,
    },
    /// Search the community market
    Search {
        query: String,
        #[arg(long, default_value_t = CS2_APPID)]
        appid: u32,
        #[arg(long, default_value_t = 0)]
        start: u32,
        #[arg(long, default_value_t = DEFAULT_SEARCH_COUNT)]
        count: u32,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config: EnrichConfig = match &args.config {
        Some(path) => EnrichConfig::from_path(path)?,
        None => EnrichConfig::default(),
    };

    let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(config.request_timeout_secs))?);

    let out: Value = match args.command {
        Command::Inventory { steamid, appid, contextid, concurrency } => {
            if let Some(concurrency) = concurrency { config.concurrency = concurrency; }
            if config.owner_steamid.is_none() { config.owner_steamid = Some(steamid); }

            let raw = SteamInventory::fetch(fetcher.as_ref(), steamid, appid, contextid).await?;
            info!(bytes = raw.len(), "Got steam inventory");

            let enricher = Enricher::new(fetcher, config)?;
            serde_json::to_value(enricher.enrich(&raw).await?)?
        }
        Command::Search { query, appid, start, count } => {
            let raw = SearchItems::new(appid)
                .start(start)
                .count(count)
                .query(&query)
                .fetch(fetcher.as_ref())
                .await?;
            serde_json::from_slice(&raw)?
        }
    };

    let out = if args.pretty { serde_json::to_string_pretty(&out)? } else { serde_json::to_string(&out)? };
    println!("{}", out);

    Ok(())
}
