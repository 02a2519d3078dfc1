//! I-Chu card crawler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ichu_crawler::{error::Result, models::Config, pipeline, storage::LocalStorage};

/// I-Chu wiki card crawler
#[derive(Parser, Debug)]
#[command(
    name = "ichu-crawler",
    version,
    about = "Scrapes LE/GR card data from the I-Chu fan wiki"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "crawler.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl all card pages and write the dataset
    Crawl {
        /// Output file (default: output.path from the config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the discovered card URLs without scraping them
    Links,

    /// Validate configuration
    Validate,

    /// Show dataset info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("I-Chu crawler starting...");

    let config = if cli.config.exists() {
        let config = Config::load(&cli.config)?;
        log::info!("Loaded configuration from {}", cli.config.display());
        config
    } else {
        Config::load_or_default(&cli.config)
    };

    match cli.command.unwrap_or(Command::Crawl { output: None }) {
        Command::Crawl { output } => {
            config.validate()?;
            let path = output.unwrap_or_else(|| config.output.path.clone());
            let storage = LocalStorage::new(path);
            pipeline::run_crawler(&config, &storage).await?;
        }

        Command::Links => {
            config.validate()?;
            let links = pipeline::run_links(&config).await?;
            for link in &links {
                println!("{}", link);
            }
            log::info!("{} card links", links.len());
        }

        Command::Validate => {
            pipeline::run_validate(&config, &cli.config)?;
        }

        Command::Info => {
            let storage = LocalStorage::new(&config.output.path);
            pipeline::run_info(&storage).await?;
        }
    }

    Ok(())
}
