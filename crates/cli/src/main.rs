//! Shopkeep CLI - Database migrations and account management.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! shopkeep migrate
//!
//! # Create a staff user who can manage customers
//! shopkeep staff create -e staff@example.com -p 's3cret-passw0rd' --permission account.manage_users
//!
//! # Create a superuser
//! shopkeep staff create -e root@example.com -p 's3cret-passw0rd' --superuser
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use shopkeep_core::Permission;

mod commands;

#[derive(Parser)]
#[command(name = "shopkeep")]
#[command(author, version, about = "Shopkeep CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage staff users
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
}

#[derive(Subcommand)]
enum StaffAction {
    /// Create a new staff user
    Create {
        /// Staff email address
        #[arg(short, long)]
        email: String,

        /// Initial password
        #[arg(short, long)]
        password: String,

        /// Grant every permission
        #[arg(long)]
        superuser: bool,

        /// Permission codename (e.g. `account.manage_users`), repeatable
        #[arg(long = "permission")]
        permissions: Vec<Permission>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Staff { action } => match action {
            StaffAction::Create {
                email,
                password,
                superuser,
                permissions,
            } => {
                commands::staff::create_user(&email, &password, superuser, permissions).await?;
            }
        },
    }
    Ok(())
}
