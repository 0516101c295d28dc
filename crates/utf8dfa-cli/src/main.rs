//! The `utf8dfa` command-line tool.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use utf8dfa_cli::{Cli, CliError, run};

const LOG_ENV: &str = "UTF8DFA_LOG";

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    debug!(command = ?cli.command, "starting");

    let input = match cli.command.input().map(|input| input.read_all()).transpose() {
        Ok(input) => input.unwrap_or_default(),
        Err(err) => {
            let err = CliError::from(err);
            error!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = run(&cli.command, &input, &mut out).and_then(|()| out.flush().map_err(CliError::from));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
