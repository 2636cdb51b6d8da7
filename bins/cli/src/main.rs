//! Tally command-line client.
//!
//! Each invocation logs in, runs one command, prints the wallet's
//! notifications and writes the whole state back on logout.

mod args;
mod commands;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::auth::AuthService;
use tally_shared::AppConfig;
use tally_store::JsonUserRepository;

use crate::args::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let users_path = cli
        .users
        .clone()
        .unwrap_or_else(|| config.storage.users_path.clone());
    let repository = JsonUserRepository::open(&users_path)
        .with_context(|| format!("Failed to open {}", users_path.display()))?;
    info!(path = %users_path.display(), users = repository.len(), "User store opened");

    let mut auth = AuthService::new(repository);
    commands::run(&mut auth, &cli.credentials, cli.command, &config)
}
