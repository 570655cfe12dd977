use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use housing_catalog::catalog::{build, CatalogSource, HttpCatalogClient};
use housing_catalog::config::CatalogConfig;
use housing_catalog::pagination::compute;
use housing_catalog::query::{self, FilterKey};
use housing_catalog::render;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "housing-catalog")]
#[command(about = "Browse the housing catalog with URL-driven filters and paging")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: CatalogConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print one page of housings
    List {
        /// Query-string, e.g. "city=Trondheim&page=2"
        #[arg(default_value = "")]
        query: String,
    },

    /// Print the query-string after editing one filter
    Set {
        query: String,
        /// Filter key, e.g. city or minPricePerMonth
        key: FilterKey,
        /// New value; blank removes the filter
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Print the query-string with every filter cleared
    Reset,

    /// Print the catalog request URL without sending it
    Request {
        #[arg(default_value = "")]
        query: String,
    },

    /// Print the page window for a page position
    Window {
        #[arg(allow_hyphen_values = true)]
        current: i64,
        #[arg(allow_hyphen_values = true)]
        page_count: i64,
        /// Window width, defaults to --page-window
        #[arg(long)]
        size: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    match cli.command {
        Commands::List { query } => {
            let client = HttpCatalogClient::new(&config).context("Failed to create HTTP client")?;
            let request = build(&query, config.page_size);

            info!("Loading page {} from {}", request.page + 1, client.source_name());

            let page = client
                .fetch_page(&request)
                .await
                .context("Failed to load housings")?;

            println!("{}", render::page(&page, config.page_window, &query));
        }
        Commands::Set { query: current, key, value } => {
            println!("{}", query::set_field(&current, key, &value));
        }
        Commands::Reset => {
            println!("{}", query::reset());
        }
        Commands::Request { query } => {
            let url = build(&query, config.page_size)
                .to_url(&config.base_url)
                .context("Invalid catalog base URL")?;
            println!("{url}");
        }
        Commands::Window { current, page_count, size } => {
            let window = compute(current, page_count, size.unwrap_or(config.page_window));
            println!("{}", serde_json::to_string_pretty(&window)?);
        }
    }

    Ok(())
}
