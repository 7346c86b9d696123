//! CLI administration tool for the favorites service.
//!
//! Manages API tokens, prints favorite counts and runs database diagnostics
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin admin -- token create --name "Mobile App"
//! cargo run --bin admin -- token list
//! cargo run --bin admin -- token revoke "Mobile App"
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (`DATABASE_URL` or `DB_*`,
//! `TOKEN_SIGNING_SECRET`). Tokens created here are hashed with the signing
//! secret, so it must match the server's.

use favorites_service::application::services::hash_token;
use favorites_service::config;
use favorites_service::domain::repositories::{ApiToken, TokenRepository};
use favorites_service::infrastructure::persistence::PgTokenRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the favorites service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show favorite, report, merchandiser and token counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "Mobile App", "Back Office")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID
        name_or_id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show server version and applied migrations
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => {
            let repo = PgTokenRepository::new(Arc::new(pool));
            handle_token_action(action, &repo, &config.token_signing_secret).await?
        }
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_token_action(
    action: TokenAction,
    repo: &dyn TokenRepository,
    signing_secret: &str,
) -> Result<()> {
    match action {
        TokenAction::Create { name, yes } => create_token(repo, signing_secret, name, yes).await,
        TokenAction::List => list_tokens(repo).await,
        TokenAction::Revoke { name_or_id, yes } => revoke_token(repo, &name_or_id, yes).await,
    }
}

/// Creates a token, stores its HMAC hash and prints the raw value once.
async fn create_token(
    repo: &dyn TokenRepository,
    signing_secret: &str,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create API token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Mobile App")
            .interact_text()?,
    };

    if repo
        .find_by_name(&token_name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        anyhow::bail!("A token named '{}' already exists", token_name);
    }

    if !skip_confirm
        && !Confirm::new()
            .with_prompt(format!("Create token '{token_name}'?"))
            .default(true)
            .interact()?
    {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    let token_value = generate_token();
    let token = repo
        .create_token(&token_name, &hash_token(signing_secret, &token_value))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!(
        "{} {} (id {})",
        "Token created:".green().bold(),
        token.name.cyan(),
        token.id
    );
    println!();
    println!("  {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "Save this token now. Only its hash is stored.".red().bold()
    );
    println!();
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/v1/favorites",
        token_value
    );
    println!();

    Ok(())
}

async fn list_tokens(repo: &dyn TokenRepository) -> Result<()> {
    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "No tokens found".yellow());
        println!("Create one with: admin token create");
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<17} {:<17} {}",
        "ID".bold(),
        "Name".bold(),
        "Created".bold(),
        "Last used".bold(),
        "Status".bold()
    );

    for token in &tokens {
        println!(
            "  {:<5} {:<30} {:<17} {:<17} {}",
            token.id,
            token.name.cyan(),
            token.created_at.format("%Y-%m-%d %H:%M").to_string(),
            token
                .last_used_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "never".to_string()),
            status_label(token)
        );
    }

    println!();
    println!("  Total: {}", tokens.len().to_string().bold());

    Ok(())
}

fn status_label(token: &ApiToken) -> ColoredString {
    if token.is_revoked() {
        "REVOKED".red()
    } else {
        "ACTIVE".green()
    }
}

/// Revokes a token looked up by numeric id or exact name.
async fn revoke_token(
    repo: &dyn TokenRepository,
    name_or_id: &str,
    skip_confirm: bool,
) -> Result<()> {
    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(name_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .with_context(|| format!("Token '{name_or_id}' not found"))?;

    if token.is_revoked() {
        println!("{}", "Token is already revoked".yellow());
        return Ok(());
    }

    if !skip_confirm
        && !Confirm::new()
            .with_prompt(format!("Revoke token '{}' (id {})?", token.name, token.id))
            .default(false)
            .interact()?
    {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!("{}", "Token revoked".green().bold());

    Ok(())
}

async fn handle_stats(pool: &PgPool) -> Result<()> {
    let count = |sql: &'static str| async move {
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(pool)
            .await
            .with_context(|| format!("Query failed: {sql}"))
    };

    let favorites = count("SELECT COUNT(*) FROM report_favorites").await?;
    let owners = count("SELECT COUNT(DISTINCT merchandiser_id) FROM report_favorites").await?;
    let reports = count("SELECT COUNT(*) FROM reports").await?;
    let merchandisers = count("SELECT COUNT(*) FROM merchandisers").await?;
    let tokens = count("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL").await?;

    println!("{}", "Statistics".bright_blue().bold());
    println!();
    println!("  Favorites:        {}", favorites.to_string().bright_green().bold());
    println!(
        "  Merchandisers:    {} ({} with favorites)",
        merchandisers.to_string().bright_green().bold(),
        owners
    );
    println!("  Reports:          {}", reports.to_string().bright_green().bold());
    println!("  Active tokens:    {}", tokens.to_string().bright_green().bold());

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database is not reachable")?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success")
                    .fetch_one(pool)
                    .await
                    .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Applied migrations: {}", migrations);
        }
    }

    Ok(())
}

/// Generates a 48-character alphanumeric token.
fn generate_token() -> String {
    use rand::Rng;
    use rand::distr::Alphanumeric;

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(48)
        .map(char::from)
        .collect()
}
