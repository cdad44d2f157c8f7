//! amz-wishlist - Stateless Amazon wish list extractor CLI
//!
//! A Rust implementation with TLS fingerprint emulation for reliable scraping.

use amz_wishlist::commands::WishListCommand;
use amz_wishlist::config::{Config, OutputFormat};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-wishlist",
    version,
    about = "Extract the items of a public Amazon wish list",
    after_help = "Example:\n  amz-wishlist .co.uk 2OABCDE0FGH42"
)]
struct Cli {
    /// Amazon locale suffix (e.g., .com, .co.uk, .de)
    locale: String,

    /// Wish list id (the part after /hz/wishlist/ls/)
    list_id: String,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Delay before the request in milliseconds
    #[arg(long, env = "AMZ_DELAY")]
    delay: Option<u64>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(delay) = cli.delay {
        config.delay_ms = delay;
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    let cmd = WishListCommand::new(config);
    let output = cmd.execute(&cli.locale, &cli.list_id).await?;
    println!("{}", output);

    Ok(())
}
