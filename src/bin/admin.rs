//! CLI administration tool for todo-service.
//!
//! Provides commands for managing activity groups, viewing row counts,
//! and performing database checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an activity group interactively
//! cargo run --bin admin -- group create
//!
//! # List activity groups
//! cargo run --bin admin -- group list
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/
//! `DB_PASSWORD`/`DB_NAME`.

use todo_service::application::services::ActivityGroupService;
use todo_service::config;
use todo_service::error::AppError;
use todo_service::infrastructure::persistence::PgActivityGroupRepository;
use todo_service::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing todo-service.
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
    /// Manage activity groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },

    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Activity group subcommands.
#[derive(Subcommand)]
enum GroupAction {
    /// Create a new activity group
    Create {
        /// Group title (prompted if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// Owner email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all activity groups
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Group { action } => handle_group_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches activity group commands through the service layer.
async fn handle_group_action(action: GroupAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgActivityGroupRepository::new(Arc::new(pool.clone())));
    let service = ActivityGroupService::new(repo);

    match action {
        GroupAction::Create { title, email, yes } => {
            create_group(&service, title, email, yes).await?;
        }
        GroupAction::List => {
            list_groups(&service).await?;
        }
    }

    Ok(())
}

/// Creates an activity group, prompting for anything not given on the command line.
async fn create_group(
    service: &ActivityGroupService,
    title: Option<String>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📁 Create Activity Group".bright_blue().bold());
    println!();

    let title = match title {
        Some(t) => t,
        None => Input::new().with_prompt("Title").interact_text()?,
    };

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    if title.is_empty() || email.is_empty() {
        anyhow::bail!("Title and email must not be empty");
    }

    println!();
    println!("{}", "Group details:".bright_white().bold());
    println!("  Title: {}", title.cyan());
    println!("  Email: {}", email.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this group?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let group = service
        .create_activity_group(title, email)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create activity group: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Activity group created!".green().bold(),
        group.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists all activity groups.
///
/// # Output Format
///
/// ```text
/// 📋 Activity Groups
///
///   ID  Title                          Email                          Created
///   ───────────────────────────────────────────────────────────────────────────────
///   1   Groceries                      me@example.com                 2026-01-15 10:30
/// ```
async fn list_groups(service: &ActivityGroupService) -> Result<()> {
    println!("{}", "📋 Activity Groups".bright_blue().bold());
    println!();

    let groups = match service.list_activity_groups().await {
        Ok(groups) => groups,
        Err(AppError::NotFound { .. }) => {
            println!("{}", "  No activity groups found".yellow());
            println!();
            println!(
                "  Create one with: {} admin group create",
                "cargo run --bin".bright_cyan()
            );
            return Ok(());
        }
        Err(e) => anyhow::bail!("Failed to list activity groups: {}", e),
    };

    println!(
        "  {:<5} {:<30} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for group in &groups {
        println!(
            "  {:<5} {:<30} {:<30} {}",
            group.id.to_string().bright_black(),
            group.title.cyan(),
            group.email,
            group
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        groups.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays row counts of both tables.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let groups_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activities")
        .fetch_one(pool)
        .await?;

    let todos_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos")
        .fetch_one(pool)
        .await?;

    let active_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM todos WHERE is_active")
        .fetch_one(pool)
        .await?;

    println!(
        "  Activity groups: {}",
        groups_count.to_string().bright_green().bold()
    );
    println!(
        "  Todo items:      {}",
        todos_count.to_string().bright_green().bold()
    );
    println!(
        "  Active todos:    {}",
        active_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
