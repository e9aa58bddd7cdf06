//! CLI administration tool for shortify.
//!
//! Runs registry operations and database maintenance without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/some/long/path
//!
//! # Resolve a short code
//! cargo run --bin admin -- resolve aB3xY9
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`shortify::config`]. `db` commands require
//! `DATABASE_URL` (or the `DB_*` components).

use shortify::application::services::CreateOutcome;
use shortify::config::{self, Config, mask_connection_string};
use shortify::domain::errors::ShortifyError;
use shortify::infrastructure::persistence::MIGRATOR;
use shortify::server::{build_state, connect_database};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing shortify.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL, or show the existing short URL
    Shorten {
        /// Absolute http(s) URL
        url: String,
    },

    /// Resolve a short code to its original URL
    Resolve {
        /// Short code to look up
        short_code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, &url).await?,
        Commands::Resolve { short_code } => resolve(&config, &short_code).await?,
        Commands::Db { action } => handle_db_action(action, &config).await?,
    }

    Ok(())
}

async fn shorten(config: &Config, url: &str) -> Result<()> {
    warn_if_ephemeral(config);
    let state = build_state(config).await?;

    match state.registry.create(url).await {
        Ok(shortened) => {
            let label = match shortened.outcome {
                CreateOutcome::Created => "✨ Created".green().bold(),
                CreateOutcome::Existing => "♻️  Already shortened".yellow().bold(),
            };
            println!("{}", label);
            println!();
            println!("  Code:      {}", shortened.record.short_code.cyan());
            println!(
                "  Short URL: {}",
                shortened.record.shortened_url.bright_yellow().bold()
            );
            println!("  Original:  {}", shortened.record.original_url);
            println!();
            Ok(())
        }
        Err(ShortifyError::InvalidUrl(rejection)) => {
            println!("{} {}", "❌ Invalid URL:".red().bold(), rejection);
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

async fn resolve(config: &Config, short_code: &str) -> Result<()> {
    warn_if_ephemeral(config);
    let state = build_state(config).await?;

    match state.registry.resolve(short_code).await {
        Ok(resolved) => {
            println!("{}", "🔗 Resolved".bright_blue().bold());
            println!();
            println!("  Code:      {}", resolved.short_code.cyan());
            println!("  Short URL: {}", resolved.shortened_url);
            println!("  Original:  {}", resolved.original_url.bright_white().bold());
            println!();
            Ok(())
        }
        Err(ShortifyError::NotFound { short_code }) => {
            println!("{} {}", "❌ Short code not found:".red().bold(), short_code);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// In-memory store state does not outlive this process.
fn warn_if_ephemeral(config: &Config) {
    if config.database_url.is_none() {
        println!(
            "{}",
            "⚠️  DATABASE_URL not set: using a throwaway in-memory store".yellow()
        );
        println!();
    }
}

/// Dispatches database operation commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set for database commands")?;

    match action {
        DbAction::Check => check_database(config, database_url).await,
        DbAction::Migrate => migrate_database(config, database_url).await,
    }
}

async fn check_database(config: &Config, database_url: &str) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue().bold());
    println!();
    println!("  Database: {}", mask_connection_string(database_url).cyan());

    let pool = connect_database(config, database_url).await?;

    let row: (String,) = sqlx::query_as("SELECT version()")
        .fetch_one(&pool)
        .await
        .context("Failed to query server version")?;

    let (records,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM short_urls")
        .fetch_one(&pool)
        .await
        .unwrap_or((0,));

    println!("  Version:  {}", row.0.bright_black());
    println!("  Records:  {}", records.to_string().bright_white().bold());
    println!();
    println!("{}", "✅ Database connection OK".green().bold());
    println!();

    Ok(())
}

async fn migrate_database(config: &Config, database_url: &str) -> Result<()> {
    println!("{}", "📦 Applying migrations...".bright_blue().bold());
    println!();

    let pool = connect_database(config, database_url).await?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    for migration in MIGRATOR.iter() {
        println!(
            "  {} {}",
            migration.version.to_string().bright_black(),
            migration.description.cyan()
        );
    }
    println!();
    println!("{}", "✅ Migrations applied".green().bold());
    println!();

    Ok(())
}
