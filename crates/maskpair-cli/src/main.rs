//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, bootstraps the
//! `CliContext` and dispatches to a handler.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use maskpair_cli::handlers::{self, add::AddArgs};
use maskpair_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

/// Install the stderr log subscriber; `-v` forces debug output.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::resolve(cli.db)?;

    match command {
        Commands::Paths => handlers::paths::execute(&config.database_path, cli.json)?,
        Commands::Add {
            original,
            mask,
            width,
            height,
        } => {
            let ctx = bootstrap(config).await?;
            let args = AddArgs {
                original: &original,
                mask: &mask,
                width,
                height,
            };
            handlers::add::execute(&ctx, args, cli.json).await?;
        }
        Commands::Show { id } => {
            let ctx = bootstrap(config).await?;
            handlers::show::execute(&ctx, id, cli.json).await?;
        }
        Commands::Recent { limit } => {
            let ctx = bootstrap(config).await?;
            handlers::recent::execute(&ctx, limit, cli.json).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads MASKPAIR_DB_PATH
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
