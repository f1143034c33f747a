//! Sitemapper main entry point
//!
//! Command-line interface for the sitemapper crawler.

use clap::Parser;
use sitemapper::config::load_config;
use sitemapper::crawler::crawl_site;
use sitemapper::output::write_sitemap;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Sitemapper: a single-domain sitemap generator
///
/// Crawls a site from its root, honoring robots.txt and per-page robots
/// meta directives, and writes the surviving URLs with their last-modified
/// dates to a sitemap XML file.
#[derive(Parser, Debug)]
#[command(name = "sitemapper")]
#[command(version = "1.0.0")]
#[command(about = "A single-domain sitemap generator", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitemapper=info,warn"),
            1 => EnvFilter::new("sitemapper=debug,info"),
            2 => EnvFilter::new("sitemapper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &sitemapper::config::Config) {
    println!("=== Sitemapper Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.crawler_name);
    println!("  Version: {}", config.user_agent.crawler_version);
    println!("  Contact URL: {}", config.user_agent.contact_url);
    println!("  Contact Email: {}", config.user_agent.contact_email);
    println!("  Header: {}", config.user_agent.header_value());

    println!("\nFetch:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);

    println!("\nOutput:");
    println!("  Sitemap: {}", config.output.sitemap_path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would crawl {} and write the sitemap", config.site.base_url);
}

/// Handles the main crawl-and-write operation
async fn handle_crawl(
    config: sitemapper::config::Config,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting crawl of {}", config.site.base_url);

    let records = match crawl_site(&config).await {
        Ok(records) => records,
        Err(e) => {
            // Fatal conditions (robots.txt unavailable or malformed) leave
            // any existing sitemap untouched
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let sitemap_path = PathBuf::from(&config.output.sitemap_path);
    write_sitemap(&records, &sitemap_path)?;

    println!(
        "Sitemap generated at {} ({} URLs)",
        sitemap_path.display(),
        records.len()
    );
    println!("URL: {}sitemap.xml", config.site.base_url);

    Ok(())
}
