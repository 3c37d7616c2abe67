//! Mailsift main entry point
//!
//! This is the command-line interface for the mailsift directory email
//! harvester.

use anyhow::Context;
use clap::Parser;
use mailsift::config::load_config_with_hash;
use mailsift::ledger::XlsxLedger;
use mailsift::report::print_report;
use mailsift::Harvester;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Mailsift: a business-directory email harvester
///
/// Mailsift reads one page of a paginated business directory, follows each
/// listing and its contact page, extracts email addresses, and appends the
/// new ones to an xlsx ledger after backing the previous file up.
#[derive(Parser, Debug)]
#[command(name = "mailsift")]
#[command(version)]
#[command(about = "A business-directory email harvester", long_about = None)]
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

    /// Validate config and show what would be harvested without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_harvest(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mailsift=info,warn"),
            1 => EnvFilter::new("mailsift=debug,info"),
            2 => EnvFilter::new("mailsift=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows what would run
fn handle_dry_run(config: &mailsift::Config) {
    println!("=== Mailsift Dry Run ===\n");

    println!("Directory:");
    println!("  Target URL: {}", config.directory.target_url());
    println!("  Page number: {}", config.directory.page_number);
    println!("  Anchor selector: {}", config.directory.anchor_selector);
    println!("  Contact path: {}", config.directory.contact_path);

    println!("\nLedger:");
    println!("  Spreadsheet: {}", config.ledger.spreadsheet_path);
    println!("  Backup: {}", config.ledger.backup_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main harvest operation
async fn handle_harvest(config: mailsift::Config) -> anyhow::Result<()> {
    tracing::info!("Starting harvest of {}", config.directory.target_url());

    let mut ledger = XlsxLedger::new(config.ledger.clone());
    let harvester = Harvester::new(config)?;

    match harvester.run(&mut ledger).await {
        Ok(report) => {
            tracing::info!("Harvest completed successfully");
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
