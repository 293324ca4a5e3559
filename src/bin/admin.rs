//! CLI administration tool for category-service.
//!
//! Manages user accounts and their access tokens without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an admin user (prints the token once)
//! cargo run --bin admin -- user create --name "Ops" --admin
//!
//! # List users
//! cargo run --bin admin -- user list
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `user create`): must match the server's value

use category_service::application::services::AuthService;
use category_service::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing category-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage users and their access tokens
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a user with a fresh access token
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Grant the admin role
        #[arg(short, long)]
        admin: bool,

        /// Custom token value (auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and catalog size
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    // Listing never hashes, so the secret is only required for `create`.
    let signing_secret = std::env::var("TOKEN_SIGNING_SECRET").unwrap_or_default();
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = AuthService::new(repo, signing_secret.clone());

    match action {
        UserAction::Create {
            name,
            admin,
            token,
            yes,
        } => {
            if signing_secret.is_empty() {
                anyhow::bail!("TOKEN_SIGNING_SECRET must be set to create users");
            }
            create_user(&service, name, admin, token, yes).await?;
        }
        UserAction::List => list_users(&service).await?,
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// The raw token is printed once; only its HMAC is stored.
async fn create_user(
    service: &AuthService,
    name: Option<String>,
    is_admin: bool,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create user".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("User name").interact_text()?,
    };

    let role = if is_admin { "admin" } else { "customer" };

    println!("  Name: {}", name.cyan());
    println!("  Role: {}", role.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let (user, token) = service
        .issue_user(&name, is_admin, token)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "User created successfully!".green().bold(),
        user.id
    );
    println!();
    println!("  Token: {}", token.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/categories",
        token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all users.
///
/// # Output Format
///
/// ```text
///   ID  Name                           Role       Last used
///   1   Ops                            admin      2025-01-15 10:30
///   2   Shop front                     customer   never
/// ```
async fn list_users(service: &AuthService) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<10} {:<20}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Role".bright_white().bold(),
        "Last used".bright_white().bold()
    );
    println!("  {}", "-".repeat(66).bright_black());

    for user in &users {
        let role = if user.is_admin {
            "admin".green()
        } else {
            "customer".normal()
        };
        let last_used = user
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<3} {:<30} {:<10} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            role,
            last_used.bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
                .fetch_one(pool)
                .await
                .context("Categories table missing, have migrations run?")?;

            println!("{}", "Database connection OK".green().bold());
            println!(
                "  Categories: {}",
                categories.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}
