//! Library half of the `utf8dfa` binary: argument definitions and the
//! subcommand runners, kept apart from `main` so they can be tested against
//! in-memory readers and writers.

mod cli;
mod error;
mod run;

pub use cli::{Cli, Command, Input};
pub use error::CliError;
pub use run::run;
