//
//  bitbucket-cloud-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bitbucket_cloud_client::auth::TokenCache;
use bitbucket_cloud_client::cli::{Cli, Commands};
use bitbucket_cloud_client::config::Config;
use bitbucket_cloud_client::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("BB_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load configuration and dispatch the command
async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    let tokens = TokenCache::new(config.token_url.as_str()).with_timeout(config.timeout);

    match cli.command {
        Commands::CreateRepo(cmd) => cmd.run(&config, &tokens).await,
    }
}
