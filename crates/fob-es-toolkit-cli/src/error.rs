//! Error handling for the CLI.

use fob_plugin_es_toolkit::RewriteError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Options could not be loaded or the rewriter could not be built
    #[error("Configuration error: {0}")]
    #[diagnostic(code(fob_es_toolkit::config))]
    Config(#[source] RewriteError),

    /// A source file could not be read or written
    #[error("Failed to access {}: {source}", .path.display())]
    #[diagnostic(code(fob_es_toolkit::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rewrite of one file failed (strict mode)
    #[error("Failed to rewrite {}: {source}", .path.display())]
    #[diagnostic(
        code(fob_es_toolkit::rewrite),
        help("Run without --strict to skip malformed import lists")
    )]
    Rewrite {
        path: PathBuf,
        #[source]
        source: RewriteError,
    },

    /// `--check` found files that would change
    #[error("{files} file(s) would be rewritten")]
    #[diagnostic(
        code(fob_es_toolkit::check_failed),
        help("Run with --write to apply the changes")
    )]
    CheckFailed { files: usize },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn rewrite(path: impl Into<PathBuf>, source: RewriteError) -> Self {
        Self::Rewrite {
            path: path.into(),
            source,
        }
    }
}
