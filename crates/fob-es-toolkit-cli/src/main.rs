//! fob-es-toolkit CLI - rewrite lodash imports to es-toolkit/compat.

use clap::Parser;
use fob_es_toolkit_cli::{cli, commands, logger};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    commands::execute(args).map_err(miette::Report::new)
}
