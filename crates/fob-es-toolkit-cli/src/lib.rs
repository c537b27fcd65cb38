//! Command-line runner for the fob es-toolkit import rewriter.
//!
//! Applies the same rewrite the `fob-es-toolkit` Rolldown plugin performs to
//! files on disk, either printing the result, writing it back in place, or
//! checking that no file would change.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - The rewrite command
//! - [`error`] - CLI error types, rendered through miette
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
