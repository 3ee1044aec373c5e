use shell_cli::{App, Cli, CliResult, logger};
use shell_config::Config;

use std::process::ExitCode;

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Log file path is relative to the config directory
    let log_file = match config.logging.file {
        Some(ref filename) => Some(Config::config_dir()?.join(filename)),
        None => None,
    };
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting shell v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let app = App::from_config(&config)?;
    let (success, output) = app.execute(cli.command).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
