//! Advisory diagnostics emitted while rewriting
//!
//! Diagnostics never change what the rewriter produces. They are handed to a
//! [`DiagnosticSink`] chosen by the host: the Rolldown plugin forwards them to
//! `tracing`, tests collect them into a `Vec`.

use crate::error::NamedImportError;
use std::fmt;
use tracing::warn;

/// Something the host may want to tell the user about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteDiagnostic {
    /// Functions that stay on the source library
    UnsupportedFunctions { library: String, names: Vec<String> },

    /// A named import list that was skipped because a token could not be parsed
    MalformedImport {
        statement: String,
        error: NamedImportError,
    },
}

impl RewriteDiagnostic {
    pub fn unsupported(library: impl Into<String>, names: Vec<String>) -> Self {
        Self::UnsupportedFunctions {
            library: library.into(),
            names,
        }
    }
}

impl fmt::Display for RewriteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFunctions { library, names } => {
                let plural = if names.len() > 1 { "s" } else { "" };
                write!(
                    f,
                    "Unsupported {} function{}: {}",
                    library,
                    plural,
                    names.join(", ")
                )
            }
            Self::MalformedImport { statement, error } => {
                write!(f, "Skipping malformed import `{}`: {}", statement, error)
            }
        }
    }
}

/// Receiver for rewrite diagnostics
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: RewriteDiagnostic);
}

impl DiagnosticSink for Vec<RewriteDiagnostic> {
    fn report(&mut self, diagnostic: RewriteDiagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing::warn!`, tagged with the module id
#[derive(Debug, Clone, Copy)]
pub struct TracingSink<'a> {
    id: &'a str,
}

impl<'a> TracingSink<'a> {
    pub fn new(id: &'a str) -> Self {
        Self { id }
    }
}

impl DiagnosticSink for TracingSink<'_> {
    fn report(&mut self, diagnostic: RewriteDiagnostic) {
        warn!(module = %self.id, "[fob-es-toolkit] {}", diagnostic);
    }
}

/// Discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: RewriteDiagnostic) {}
}
