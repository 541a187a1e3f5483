//! Error types emitted by the packwise CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the packwise CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass {field} or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Name of the argument the path came from.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// Reading the input file failed.
    #[error("failed to read input {path:?}: {source}")]
    ReadInput {
        /// The input path.
        path: Utf8PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Writing results failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// One or more problem lines could not be parsed or solved.
    #[error("{failed} of {total} problem lines failed")]
    ProblemLines {
        /// Number of failed lines.
        failed: usize,
        /// Number of problem lines in the input.
        total: usize,
    },
}
