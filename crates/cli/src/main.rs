//! # dns-admin
//!
//! Command-line administration of a BIND name server fleet whose
//! configuration lives in a PostgreSQL schema.

mod bootstrap;
mod cli;
mod commands;

use clap::{CommandFactory, Parser};
use dns_admin_application::ports::DbHandle;
use dns_admin_infrastructure::PgDbHandle;
use std::process::ExitCode;
use tracing::{debug, info, warn};

use cli::{Cli, Command, GlobalArgs, NsCommand};

/// Exit status for usage errors, matching clap's own.
const USAGE_EXIT_CODE: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    bootstrap::init_logging(cli.global.verbose);

    let command = match require_command(cli.command) {
        Ok(command) => command,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::from(USAGE_EXIT_CODE);
        }
    };

    match run(&cli.global, command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// The selected subcommand, or the usage error to print when there is none.
fn require_command(command: Option<Command>) -> Result<Command, String> {
    command.ok_or_else(|| {
        format!(
            "error: no subcommand given\n\n{}",
            Cli::command().render_usage()
        )
    })
}

async fn run(global: &GlobalArgs, command: Command) -> anyhow::Result<()> {
    let config = bootstrap::load_config(global)?;

    if config.simulate {
        info!("Simulation mode, no changes will be written");
    }

    match command {
        Command::Config { json } => commands::show_config(&config, json),
        Command::Ns(NsCommand::Check(args)) => commands::check_name_server(&args),
        Command::SchemaVersion => {
            let mut handle = bootstrap::init_database(&config)?;
            let result = commands::print_schema_version(&mut handle).await;
            release(handle).await;
            result
        }
        Command::Ns(NsCommand::List) => {
            let mut handle = bootstrap::init_database(&config)?;
            let result = commands::list_name_servers(&mut handle).await;
            release(handle).await;
            result
        }
        Command::Ns(NsCommand::Show { name }) => {
            let mut handle = bootstrap::init_database(&config)?;
            let result = commands::show_name_server(&mut handle, &name).await;
            release(handle).await;
            result
        }
    }
}

/// Closes the connection, whether or not the command succeeded.
async fn release(mut handle: PgDbHandle) {
    if let Err(e) = handle.disconnect().await {
        warn!(error = %e, "Failed to close database connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_missing_subcommand_is_a_usage_error() {
        let cli = Cli::try_parse_from(["dns-admin", "--db-host", "db1"]).unwrap();

        let usage = require_command(cli.command).unwrap_err();

        assert!(usage.starts_with("error: no subcommand given"));
        assert!(usage.contains("Usage: dns-admin"));
        assert_eq!(USAGE_EXIT_CODE, 2);
    }

    #[test]
    fn test_selected_subcommand_is_returned() {
        let cli = Cli::try_parse_from(["dns-admin", "ns", "list"]).unwrap();

        let command = require_command(cli.command).unwrap();
        assert!(matches!(command, Command::Ns(NsCommand::List)));
    }
}
