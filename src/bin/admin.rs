//! CLI administration tool for task-tracker.
//!
//! Provides commands for managing user accounts, viewing statistics,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a user account
//! cargo run --bin admin -- user create
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Reset a user's password
//! cargo run --bin admin -- user reset-password jane@example.com
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
//! - `DATABASE_URL` (required): PostgreSQL connection string

use task_tracker::domain::entities::{NewUser, UserPatch};
use task_tracker::domain::repositories::UserRepository;
use task_tracker::infrastructure::persistence::PgUserRepository;
use task_tracker::utils::password::hash_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing task-tracker.
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
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Create {
        /// Email address for the new account
        #[arg(short, long)]
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Reset a user's password
    ResetPassword {
        /// Email of the account to reset
        email: String,
    },
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

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create { email, yes } => {
            create_user(repo, email, yes).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::ResetPassword { email } => {
            reset_password(repo, email).await?;
        }
    }

    Ok(())
}

/// Creates a user account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email (or use provided)
/// 2. Prompt for optional first and last name
/// 3. Prompt for the password with confirmation
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash the password and store the account
async fn create_user(
    repo: Arc<PgUserRepository>,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Create User Account".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let first_name: String = Input::new()
        .with_prompt("First name (optional)")
        .allow_empty(true)
        .interact_text()?;

    let last_name: String = Input::new()
        .with_prompt("Last name (optional)")
        .allow_empty(true)
        .interact_text()?;

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    println!();
    println!("{}", "Account details:".bright_white().bold());
    println!("  Email: {}", email.cyan());
    if !first_name.is_empty() || !last_name.is_empty() {
        println!("  Name:  {} {}", first_name.cyan(), last_name.cyan());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this account?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let user = repo
        .create(NewUser {
            first_name: (!first_name.is_empty()).then_some(first_name),
            last_name: (!last_name.is_empty()).then_some(last_name),
            email,
            password_digest: hash_password(&password),
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "Account created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST -H \"Content-Type: application/json\" \\\n       -d '{{\"username\": \"{}\", \"password\": \"...\"}}' \\\n       http://localhost:3000/api/login",
        user.email.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all user accounts.
///
/// # Output Format
///
/// ```text
/// User Accounts
///
///   ID  Email                          Name                 Created
///   ─────────────────────────────────────────────────────────────────────
///   1   hexlet@example.com                                  2024-01-15 10:30
///   2   jane@example.com               Jane Doe             2024-01-16 14:20
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "User Accounts".bright_blue().bold());
    println!();

    let users = repo
        .list()
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
        "  {:<4} {:<30} {:<20} {:<16}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(72).bright_black());

    for user in &users {
        let name = [user.first_name.as_deref(), user.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "  {:<4} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            name,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Resets a user's password after confirmation.
async fn reset_password(repo: Arc<PgUserRepository>, email: String) -> Result<()> {
    println!("{}", "Reset Password".bright_blue().bold());
    println!();

    let user = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  Email: {}", user.email.cyan());
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!();

    let password = Password::new()
        .with_prompt("New password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let confirmed = Confirm::new()
        .with_prompt("Reset this user's password?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "Cancelled".red());
        return Ok(());
    }

    repo.update(
        user.id,
        UserPatch {
            password_digest: Some(hash_password(&password)),
            ..UserPatch::default()
        },
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to reset password: {}", e))?;

    println!();
    println!("{}", "Password reset successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows row counts for users, tasks, task statuses, and labels.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let tasks_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await?;

    let statuses_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM task_statuses")
        .fetch_one(pool)
        .await?;

    let labels_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM labels")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:    {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Tasks:    {}",
        tasks_count.to_string().bright_green().bold()
    );
    println!(
        "  Statuses: {}",
        statuses_count.to_string().bright_green().bold()
    );
    println!(
        "  Labels:   {}",
        labels_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
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
