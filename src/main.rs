//! Divar-Harvest main entry point
//!
//! Command-line interface for the divar.ir listing crawler. The crawl
//! result is written to stdout as a JSON array; all logging goes to stderr
//! so the output stream stays a clean JSON document.

use clap::Parser;
use divar_harvest::config::Config;
use divar_harvest::crawler::crawl;
use divar_harvest::output::write_json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Divar-Harvest: a focused listing crawler for divar.ir
///
/// Starting from a seed search page, Divar-Harvest follows listing links up
/// to a bounded depth, extracts title, year, mileage, price, and description
/// from each detail page, and prints the results as JSON.
#[derive(Parser, Debug)]
#[command(name = "divar-harvest")]
#[command(version)]
#[command(about = "Extracts divar.ir car listings as JSON", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from (defaults to the Tehran car search)
    #[arg(value_name = "SEED_URL")]
    seed: Option<String>,

    /// Maximum number of link-hops to follow from the seed
    #[arg(long, value_name = "N")]
    max_depth: Option<u32>,

    /// Write the JSON array to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = Config::default();
    if let Some(seed) = cli.seed {
        config.site.seed_url = seed;
    }
    if let Some(max_depth) = cli.max_depth {
        config.crawler.max_depth = max_depth;
    }

    let listings = match crawl(config).await {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    tracing::info!("Collected {} listings", listings.len());

    match cli.output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            write_json(file, &listings)?;
            tracing::info!("Wrote JSON to {}", path.display());
        }
        None => {
            write_json(std::io::stdout().lock(), &listings)?;
        }
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("divar_harvest=info,warn"),
            1 => EnvFilter::new("divar_harvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
