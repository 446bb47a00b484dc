mod cli;
mod client;
mod commands;
mod config;
mod error;
mod output;
mod responses;
mod router;
mod screens;
mod types;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use client::EmployeeClient;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    output::set_format(cli.output_format());
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "employees", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that talk to the backend
        command => {
            let config = Config::load()?;
            let client = EmployeeClient::from_config(&config)?;
            tracing::debug!(base = %client.base_url(), timeout = ?config.timeout(), "client ready");

            match command {
                Commands::Add(args) => {
                    commands::add::run(&client, args).await?;
                }
                Commands::List(args) => {
                    commands::list::run(&client, args).await?;
                }
                Commands::Show { id } => {
                    commands::show::run(&client, &id).await?;
                }
                Commands::Open { path } => {
                    commands::open::run(&client, &path).await?;
                }
                Commands::Health => {
                    commands::health::run(&client).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
