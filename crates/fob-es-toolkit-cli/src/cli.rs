//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

/// Rewrite lodash imports to es-toolkit/compat
#[derive(Parser, Debug)]
#[command(
    name = "fob-es-toolkit",
    version,
    about = "Rewrite lodash imports to es-toolkit/compat",
    long_about = "Redirects static lodash imports to the es-toolkit compat build.\n\
                  Functions es-toolkit does not provide keep importing from lodash\n\
                  and are reported as warnings."
)]
pub struct Cli {
    /// Files to rewrite
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Write rewritten files back in place
    #[arg(short, long)]
    pub write: bool,

    /// Exit with an error if any file would be rewritten
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// JSON options file (same format as the plugin options)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Library whose imports are rewritten
    #[arg(long, value_name = "LIB")]
    pub source: Option<String>,

    /// Library supported functions are imported from
    #[arg(long, value_name = "LIB")]
    pub replacement: Option<String>,

    /// Keep a function on the source library (repeatable)
    #[arg(long, value_name = "NAME")]
    pub keep: Vec<String>,

    /// Fail on malformed import lists instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}
