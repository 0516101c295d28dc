use std::{
    fs::File,
    io::{self, Read},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use utf8dfa::CodePoint;

/// Validate, measure, decode, encode and sanitize UTF-8.
#[derive(Debug, Parser)]
#[command(name = "utf8dfa", version)]
pub struct Cli {
    /// Log diagnostics at debug level (overrides `UTF8DFA_LOG`)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// What to do with the input
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report whether the input is valid UTF-8 and where it breaks
    Check {
        #[command(flatten)]
        input: Input,
    },
    /// Count the characters before the first NUL byte
    Len {
        #[command(flatten)]
        input: Input,
    },
    /// Print one code point per line
    Decode {
        #[command(flatten)]
        input: Input,
    },
    /// Write the UTF-8 encoding of the given code points
    Encode {
        /// Code points as `U+20AC`, `0x20AC` or bare hex
        #[arg(value_name = "CODE_POINT", required = true)]
        code_points: Vec<CodePoint>,

        /// Print the bytes as hex instead of writing them raw
        #[arg(long)]
        hex: bool,
    },
    /// Copy the input, replacing invalid runs
    Sanitize {
        #[command(flatten)]
        input: Input,

        /// Code point written in place of each invalid run
        #[arg(long, short = 'r', default_value = "U+FFFD")]
        replacement: CodePoint,
    },
}

/// Where input bytes come from.
#[derive(Debug, Clone, clap::Args)]
pub struct Input {
    /// File to read; standard input when absent or `-`
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,
}

impl Input {
    /// Reads the whole input.
    ///
    /// # Errors
    ///
    /// Any error from opening or reading the source.
    pub fn read_all(&self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        match &self.path {
            Some(path) if path.as_os_str() != "-" => {
                File::open(path)?.read_to_end(&mut bytes)?;
            }
            _ => {
                io::stdin().lock().read_to_end(&mut bytes)?;
            }
        }
        Ok(bytes)
    }
}

impl Command {
    /// The input of subcommands that read one.
    #[must_use]
    pub fn input(&self) -> Option<&Input> {
        match self {
            Command::Check { input }
            | Command::Len { input }
            | Command::Decode { input }
            | Command::Sanitize { input, .. } => Some(input),
            Command::Encode { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_code_points_and_replacement() {
        let cli = Cli::try_parse_from(["utf8dfa", "encode", "U+24", "0xA3", "20AC"]).unwrap();
        match cli.command {
            Command::Encode { code_points, hex } => {
                assert!(!hex);
                assert_eq!(code_points, [0x24, 0xA3, 0x20AC].map(|v| CodePoint::new(v).unwrap()));
            }
            other => panic!("unexpected {other:?}"),
        }

        let cli = Cli::try_parse_from(["utf8dfa", "-v", "sanitize", "-r", "U+3F", "in.txt"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Sanitize { input, replacement } => {
                assert_eq!(replacement, CodePoint::from('?'));
                assert_eq!(input.path, Some(PathBuf::from("in.txt")));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_surrogate_code_points() {
        assert!(Cli::try_parse_from(["utf8dfa", "encode", "U+D800"]).is_err());
        assert!(Cli::try_parse_from(["utf8dfa", "encode"]).is_err());
    }
}
