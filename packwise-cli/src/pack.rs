//! `pack` subcommand: solve every problem line in an input file.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use packwise_core::{SolveError, Solver};
use packwise_solver_pareto::ParetoSolver;

use crate::format::{format_selection, join_lines};
use crate::parse::{LineParser, ParseError};
use crate::{CliError, ARG_PACK_INPUT, ENV_PACK_INPUT};

/// CLI arguments for the `pack` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read packing problems, one per line, in the form \
                 `<capacity> : (<id>,<weight>,€<cost>) ...` and print one \
                 result line per problem: the chosen item ids, or `-` when \
                 no item fits. The input path can come from the CLI, \
                 configuration files, or the environment.",
    about = "Solve packing problems from an input file"
)]
#[ortho_config(prefix = "PACKWISE")]
pub(crate) struct PackArgs {
    /// Path to the problem input file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
}

impl PackArgs {
    fn into_config(self) -> Result<PackConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PackConfig::try_from(merged)
    }
}

/// Resolved `pack` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PackConfig {
    input: Utf8PathBuf,
}

impl PackConfig {
    fn validate_sources(&self) -> Result<(), CliError> {
        if self.input.is_file() {
            Ok(())
        } else {
            Err(CliError::MissingSourceFile {
                field: ARG_PACK_INPUT,
                path: self.input.clone(),
            })
        }
    }
}

impl TryFrom<PackArgs> for PackConfig {
    type Error = CliError;

    fn try_from(args: PackArgs) -> Result<Self, Self::Error> {
        let input = args.input.ok_or(CliError::MissingArgument {
            field: ARG_PACK_INPUT,
            env: ENV_PACK_INPUT,
        })?;
        Ok(Self { input })
    }
}

/// Failure of a single problem line. Other lines are unaffected.
#[derive(Debug, Error)]
pub(crate) enum LineError {
    /// The line could not be parsed into a problem.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed problem failed validation.
    #[error("line {line}: {source}")]
    Solve {
        line: usize,
        #[source]
        source: SolveError,
    },
}

pub(crate) fn run_pack(
    args: PackArgs,
    out: &mut dyn Write,
    report: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let text = std::fs::read_to_string(&config.input).map_err(|source| CliError::ReadInput {
        path: config.input.clone(),
        source,
    })?;
    let outcomes = solve_lines(&text);
    write_outcomes(&outcomes, out, report)
}

/// Solve every non-empty input line independently, so one bad problem
/// cannot abort the rest of the batch.
pub(crate) fn solve_lines(text: &str) -> Vec<Result<String, LineError>> {
    let parser = LineParser::new();
    let solver = ParetoSolver::new();
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| solve_line(&parser, &solver, index + 1, line))
        .collect()
}

fn solve_line(
    parser: &LineParser,
    solver: &ParetoSolver,
    line_number: usize,
    line: &str,
) -> Result<String, LineError> {
    let problem = parser.parse_line(line_number, line)?;
    let selection = solver.solve(&problem).map_err(|source| LineError::Solve {
        line: line_number,
        source,
    })?;
    Ok(format_selection(&selection))
}

/// Write successful result lines to `out` and per-line failures to
/// `report`; a non-empty failure count surfaces as a single batch error.
fn write_outcomes(
    outcomes: &[Result<String, LineError>],
    out: &mut dyn Write,
    report: &mut dyn Write,
) -> Result<(), CliError> {
    let mut lines = Vec::with_capacity(outcomes.len());
    let mut failed = 0_usize;
    for outcome in outcomes {
        match outcome {
            Ok(line) => lines.push(line.clone()),
            Err(err) => {
                failed += 1;
                writeln!(report, "packwise: {err}").map_err(CliError::WriteOutput)?;
            }
        }
    }
    if !lines.is_empty() {
        writeln!(out, "{}", join_lines(&lines)).map_err(CliError::WriteOutput)?;
    }
    if failed == 0 {
        Ok(())
    } else {
        Err(CliError::ProblemLines {
            failed,
            total: outcomes.len(),
        })
    }
}
