use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use bookdex_normalize::TracingSink;

#[derive(Parser)]
#[command(name = "bookdex")]
#[command(about = "Catalog scraping and normalization tool")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the catalog and persist raw product records
    Acquire {
        /// Which stage(s) to run
        #[arg(short, long, value_enum, default_value = "all")]
        mode: AcquireMode,

        /// Catalog root URL
        #[arg(short, long, default_value = "http://books.toscrape.com/")]
        base_url: String,

        /// File for product URLs (one per line)
        #[arg(short, long, default_value = "product_urls.txt")]
        urls_file: PathBuf,

        /// Output file for raw `;`-delimited records
        #[arg(short, long, default_value = "books.txt")]
        output: PathBuf,
    },

    /// Normalize raw records and export CSV + JSON
    Normalize {
        /// Raw input file (one `title;price;rating;stock` line per record)
        #[arg(short, long, default_value = "books.txt")]
        input: PathBuf,

        /// Row-oriented output path
        #[arg(long, default_value = "products.csv")]
        csv: PathBuf,

        /// Document-oriented output path
        #[arg(long, default_value = "products.json")]
        json: PathBuf,
    },
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum AcquireMode {
    /// Only collect product URLs
    Urls,
    /// Only scrape products from an existing URLs file
    Scrape,
    /// Collect URLs, then scrape (default)
    All,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Map log level, suppressing noisy HTML-parsing crates at debug/trace
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Timestamp format: 2026-08-30 19:44:09.123 -08:00
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Acquire {
            mode,
            base_url,
            urls_file,
            output,
        } => run_acquire(mode, &base_url, &urls_file, &output).await,
        Commands::Normalize { input, csv, json } => run_normalize(&input, &csv, &json),
    }
}

async fn run_acquire(
    mode: AcquireMode,
    base_url: &str,
    urls_file: &Path,
    output: &Path,
) -> Result<()> {
    let client = bookdex_acquire::client()?;

    let urls = match mode {
        AcquireMode::Urls | AcquireMode::All => {
            tracing::info!(base_url = %base_url, "Collecting product URLs");
            let urls = bookdex_acquire::catalog::collect_product_urls(&client, base_url).await?;
            bookdex_acquire::output::save_urls(&urls, urls_file)?;
            urls
        }
        AcquireMode::Scrape => {
            let urls = bookdex_acquire::output::load_urls(urls_file);
            anyhow::ensure!(
                !urls.is_empty(),
                "No URLs to process — run `bookdex acquire --mode urls` first"
            );
            urls
        }
    };

    if mode == AcquireMode::Urls {
        return Ok(());
    }

    let records = bookdex_acquire::scrape::scrape_products(&client, &urls).await;
    bookdex_acquire::output::write_records(&records, output)?;
    bookdex_acquire::output::write_provenance(
        base_url,
        urls.len(),
        records.len(),
        &output.with_file_name("source.md"),
    )?;

    tracing::info!(
        processed = records.len(),
        path = %output.display(),
        "Acquire complete"
    );
    Ok(())
}

fn run_normalize(input: &Path, csv_path: &Path, json_path: &Path) -> Result<()> {
    tracing::info!(input = %input.display(), "Normalizing raw records");

    let mut sink = TracingSink;
    let products = bookdex_normalize::read_products(input, &mut sink);
    tracing::info!(valid = products.len(), "Assembled products");

    // Each writer's failure is its own; always attempt both.
    let mut failed = false;
    if let Err(e) = bookdex_export::write_csv(&products, csv_path) {
        tracing::error!(error = %e, path = %csv_path.display(), "CSV export failed");
        failed = true;
    }
    if let Err(e) = bookdex_export::write_json(&products, json_path) {
        tracing::error!(error = %e, path = %json_path.display(), "JSON export failed");
        failed = true;
    }
    anyhow::ensure!(!failed, "one or more exports failed");

    Ok(())
}
