pub mod commands;
pub mod logging;
pub mod types;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use crate::config::{self, Config};
use crate::utils::error::{ErrorKind, Result};
use types::{Cli, Commands};

/// Run the command-line interface and report the outcome as an exit code
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::New { path, force } => {
            logging::init_logging(logging::level_for(cli.quiet, cli.verbose));
            commands::handle_new_command(path, *force)
        }
        command => match config::load_config(&cli.source, cli.overrides()) {
            Ok(config) => {
                // gen.yml may turn quiet mode on as well
                logging::init_logging(logging::level_for(config.quiet, config.verbose));
                dispatch(command, &config).await
            }
            Err(e) => {
                logging::init_logging(logging::level_for(cli.quiet, cli.verbose));
                Err(e)
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            exit_code(e.kind())
        }
    }
}

/// Configuration problems exit with 2, everything else with 1
fn exit_code(kind: ErrorKind) -> ExitCode {
    match kind {
        ErrorKind::Config => ExitCode::from(2),
        ErrorKind::Parse | ErrorKind::Render | ErrorKind::Io | ErrorKind::Server => ExitCode::FAILURE,
    }
}

async fn dispatch(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Build => commands::handle_build_command(config),
        Commands::Clean => commands::handle_clean_command(config),
        Commands::Serve { .. } => commands::handle_serve_command(config).await,
        Commands::New { path, force } => commands::handle_new_command(path, *force),
    }
}
