mod detail;
mod render;

use std::sync::Arc;

use brewfind_core::AppConfig;
use brewfind_places::{CoffeeStoreFetcher, FetcherConfig, UnsplashPhotos};
use brewfind_voting::VotingClient;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brewfind")]
#[command(about = "Discover nearby coffee shops and upvote your favourites")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List coffee shops near a location.
    Stores {
        /// Search centre as "lat,long".
        #[arg(long)]
        ll: Option<String>,
        /// Maximum number of shops to return.
        #[arg(long)]
        limit: Option<u32>,
        /// Look up a photo for each shop instead of the fallback image.
        #[arg(long)]
        photos: bool,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show one shop with its current vote count.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Add one vote to a shop.
    Upvote { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // --help and usage errors must not depend on the environment.
    let cli = Cli::parse();

    let config = brewfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::Stores {
            ll,
            limit,
            photos,
            json,
        }) => {
            let fetcher = build_fetcher(&config, photos || config.enable_photos)?;
            let stores = fetcher.fetch(ll.as_deref(), limit).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&stores)?);
            } else {
                print!("{}", render::store_table(&stores));
            }
        }
        Some(Commands::Show { id, json }) => {
            let fetcher = build_fetcher(&config, config.enable_photos)?;
            let voting = build_voting_client(&config)?;
            let Some(store) = detail::load_store_detail(&fetcher, &voting, &id).await else {
                anyhow::bail!("no coffee store found with id {id}");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&store)?);
            } else {
                print!("{}", render::store_detail(&store));
            }
        }
        Some(Commands::Upvote { id }) => {
            let voting = build_voting_client(&config)?;
            match detail::upvote(&voting, &id).await? {
                Some(votes) => println!("{id}: {votes} votes"),
                None => anyhow::bail!(
                    "coffee store {id} is not stored yet; run `brewfind show {id}` first"
                ),
            }
        }
        None => Cli::command().print_help()?,
    }

    Ok(())
}

fn build_fetcher(config: &AppConfig, photos: bool) -> anyhow::Result<CoffeeStoreFetcher> {
    let fetcher_config = FetcherConfig::from_app_config(config);
    let fetcher = CoffeeStoreFetcher::new(&fetcher_config)?;
    if !photos {
        return Ok(fetcher);
    }
    let lookup = UnsplashPhotos::from_config(&fetcher_config)?;
    Ok(fetcher.with_photos(Arc::new(lookup)))
}

fn build_voting_client(config: &AppConfig) -> anyhow::Result<VotingClient> {
    Ok(VotingClient::with_base_url(
        &config.voting_base_url,
        &config.user_agent,
        config
            .request_timeout_secs
            .map(std::time::Duration::from_secs),
    )?)
}
