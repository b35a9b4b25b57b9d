use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mediabin::cli::{Cli, Command};
use mediabin::commands;
use mediabin::config::Config;

fn init_tracing(verbose: bool) {
    // Logs go to stderr so `ls --json` and `completions` stay pipeable.
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load()?.with_server_override(cli.server);

    match cli.command {
        Command::Up { paths } => commands::up(&config, &paths).await,
        Command::Ls { json } => commands::ls(&config, json).await,
        Command::Rm { id, yes } => commands::rm(&config, id, yes).await,
        Command::View { id } => commands::view(&config, id).await,
        Command::Get { id, output } => commands::get(&config, id, output).await,
        Command::Config => commands::show_config(&config),
        Command::Completions { shell } => Ok(commands::completions(shell)),
    }
}
