//! Command-line interface for the packwise knapsack engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod format;
mod pack;
mod parse;

pub use error::CliError;
pub use format::{format_selection, join_lines};
pub use parse::{LineParser, ParseError};

pub(crate) const ARG_PACK_INPUT: &str = "input";
pub(crate) const ENV_PACK_INPUT: &str = "PACKWISE_CMDS_PACK_INPUT";

/// Run the packwise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Pack(args) => {
            let mut stdout = std::io::stdout().lock();
            let mut stderr = std::io::stderr().lock();
            pack::run_pack(args, &mut stdout, &mut stderr)
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "packwise",
    about = "Solve 0/1 knapsack packing problems from an input file",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve every packing problem in an input file.
    Pack(pack::PackArgs),
}
