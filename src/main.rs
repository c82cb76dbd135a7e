use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod command;
mod config;
mod host;
mod packages;
mod project;
mod sdk;
mod util;

use cli::{Cli, Commands};
use config::Config;
use host::TerminalHost;
use sdk::Sdks;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let roots = cli::resolve_roots(cli.roots)?;
    let config = Config::new(cli.exclude);
    let sdks = Sdks::discover(cli.dart_sdk, cli.flutter_sdk);
    let host = TerminalHost::new(roots, sdks.clone());

    match cli.command {
        Some(Commands::List { flutter_only }) => {
            command::run_list(&host, &config, flutter_only).await?;
        }
        Some(Commands::Check {
            path,
            all,
            flutter_only,
            no_prompt,
        }) => {
            let action_required = command::run_check(
                &host,
                &config,
                &sdks,
                path.as_deref(),
                all,
                flutter_only,
                no_prompt,
            )
            .await?;
            if action_required {
                std::process::exit(1);
            }
        }
        Some(Commands::Get {
            path,
            all,
            flutter_only,
        }) => {
            command::run_get(&host, &config, path.as_deref(), all, flutter_only).await?;
        }
        Some(Commands::Upgrade {
            path,
            all,
            flutter_only,
        }) => {
            command::run_upgrade(&host, &config, path.as_deref(), all, flutter_only).await?;
        }
        None => {
            // No command specified, show help
            eprintln!("No command specified. Use --help for usage information.");
            eprintln!("Use 'pubcheck check' to see whether your packages are up to date.");
        }
    }

    Ok(())
}
