//! CLI administration tool for url-shortener.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every short link with its click count
//! cargo run --bin admin -- list
//!
//! # Show a single short link
//! cargo run --bin admin -- stats aZ3kQ9x
//!
//! # Create a short link
//! cargo run --bin admin -- shorten https://example.com
//!
//! # Check database connection and migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`url_shortener::config`].

use url_shortener::config::{self, Config};
use url_shortener::error::AppError;
use url_shortener::server::{build_state, init_pool};
use url_shortener::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all short links
    List,

    /// Show statistics for one short code
    Stats {
        /// The short code to inspect
        short_code: String,
    },

    /// Create a short link
    Shorten {
        /// Destination URL (http or https)
        url: String,
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
    /// Check database connection and apply migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let pool = init_pool(&config).await?;
    let state = build_state(pool.clone(), &config);

    let result = match cli.command {
        Commands::List => list(&state).await,
        Commands::Stats { short_code } => stats(&state, &short_code).await,
        Commands::Shorten { url } => shorten(&state, url).await,
        Commands::Db {
            action: DbAction::Check,
        } => db_check(&state, &config).await,
    };

    pool.close().await;
    result
}

/// Prints every record as a table.
async fn list(state: &AppState) -> Result<()> {
    let records = state.url_service.list_all().await?;

    println!("{}", "🔗 Short links".bright_blue().bold());
    println!();

    if records.is_empty() {
        println!("{}", "No short links yet.".yellow());
        return Ok(());
    }

    println!(
        "{:<6} {:<9} {:>8}  {}",
        "ID".bold(),
        "CODE".bold(),
        "CLICKS".bold(),
        "URL".bold()
    );
    for record in &records {
        println!(
            "{:<6} {:<9} {:>8}  {}",
            record.id,
            record.short_code.cyan(),
            record.click_count,
            record.original_url
        );
    }

    println!();
    println!("Total: {}", records.len().to_string().bright_white().bold());

    Ok(())
}

/// Prints a single record; an unknown code is reported as an error.
async fn stats(state: &AppState, short_code: &str) -> Result<()> {
    match state.url_service.get_stats(short_code).await {
        Ok(record) => {
            println!("{}", "📊 Link statistics".bright_blue().bold());
            println!();
            println!("  ID:     {}", record.id);
            println!("  Code:   {}", record.short_code.cyan());
            println!("  URL:    {}", record.original_url);
            println!("  Clicks: {}", record.click_count.to_string().green().bold());
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            anyhow::bail!("Short code not found: {short_code}")
        }
        Err(e) => Err(e.into()),
    }
}

/// Creates a record and prints its code.
async fn shorten(state: &AppState, url: String) -> Result<()> {
    let record = state
        .url_service
        .create(url)
        .await
        .context("Failed to shorten URL")?;

    println!("{}", "✨ Short link created".green());
    println!("  Code: {}", record.short_code.cyan().bold());
    println!("  URL:  {}", record.original_url);

    Ok(())
}

/// Reports connectivity and record count.
async fn db_check(state: &AppState, config: &Config) -> Result<()> {
    let count = state
        .url_service
        .count()
        .await
        .context("Database query failed")?;

    println!("{}", "✓ Database connection OK".green());
    println!("  Database: {}", config.database_url);
    println!("  Migrations: {}", "applied".green());
    println!("  Records: {}", count);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;
    use std::sync::Arc;
    use url_shortener::application::services::UrlService;
    use url_shortener::infrastructure::persistence::SqliteUrlRepository;
    use url_shortener::utils::code_generator::Base62CodeGenerator;

    fn state(pool: SqlitePool) -> AppState {
        let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
        AppState::new(Arc::new(UrlService::new(repository, Base62CodeGenerator)))
    }

    #[sqlx::test]
    async fn test_stats_unknown_code_is_an_error(pool: SqlitePool) {
        let err = stats(&state(pool), "missing").await.unwrap_err();

        assert_eq!(err.to_string(), "Short code not found: missing");
    }

    #[sqlx::test]
    async fn test_shorten_then_stats(pool: SqlitePool) {
        let state = state(pool);

        shorten(&state, "https://example.com".to_string())
            .await
            .unwrap();

        let records = state.url_service.list_all().await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(stats(&state, &records[0].short_code).await.is_ok());
    }
}
