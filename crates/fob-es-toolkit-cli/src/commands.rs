//! Rewrite command implementation.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::ui;
use fob_plugin_es_toolkit::{
    EsToolkitPluginOptions, FobEsToolkitPlugin, MalformedImportPolicy, RewriteDiagnostic,
};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Totals over all processed files
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub changed_files: usize,
    pub replaced: usize,
    pub warnings: usize,
}

/// Build plugin options from the config file, environment and flags.
///
/// Flags take priority over `FOB_ES_TOOLKIT_*` variables and the config file.
pub fn load_options(args: &Cli) -> Result<EsToolkitPluginOptions> {
    let mut options =
        EsToolkitPluginOptions::load(args.config.as_deref()).map_err(CliError::Config)?;

    if let Some(source) = &args.source {
        options.source_library = source.clone();
    }
    if let Some(replacement) = &args.replacement {
        options.replacement_library = replacement.clone();
    }
    options.keep.extend(args.keep.iter().cloned());
    if args.strict {
        options.on_malformed = MalformedImportPolicy::Fail;
    }

    Ok(options)
}

/// Execute the rewrite over every file in `args`.
///
/// # Errors
///
/// Returns errors for unreadable files, malformed imports in strict mode,
/// and for `--check` when any file would change.
pub fn execute(args: Cli) -> Result<()> {
    ui::set_colors(!args.no_color);

    let options = load_options(&args)?;
    let plugin = FobEsToolkitPlugin::with_options(options).map_err(CliError::Config)?;

    let mut summary = Summary::default();
    let mut pending = Vec::new();

    for path in &args.files {
        summary.files += 1;
        let Some(code) = rewrite_file(&plugin, path, args.quiet, &mut summary)? else {
            continue;
        };

        if args.write {
            fs::write(path, &code).map_err(|e| CliError::io(path, e))?;
            debug!("Wrote {}", path.display());
        } else if args.check {
            if !args.quiet {
                ui::info(&format!("Would rewrite {}", path.display()));
            }
        } else {
            pending.push((path, code));
        }
    }

    let show_headers = pending.len() > 1;
    for (path, code) in pending {
        if show_headers {
            println!("// {}", path.display());
        }
        print!("{}", code);
    }

    if args.check && summary.changed_files > 0 {
        return Err(CliError::CheckFailed {
            files: summary.changed_files,
        });
    }

    if !args.quiet {
        ui::success(&format!(
            "Rewrote {} import statement(s) in {} of {} file(s), {} warning(s)",
            summary.replaced, summary.changed_files, summary.files, summary.warnings
        ));
    }

    Ok(())
}

/// Rewrite one file, returning the new text when something changed.
fn rewrite_file(
    plugin: &FobEsToolkitPlugin,
    path: &Path,
    quiet: bool,
    summary: &mut Summary,
) -> Result<Option<String>> {
    let code = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let id = path.to_string_lossy();

    let mut diagnostics: Vec<RewriteDiagnostic> = Vec::new();
    let rewrite = plugin
        .transform_source_with(&id, &code, &mut diagnostics)
        .map_err(|e| CliError::rewrite(path, e))?;

    summary.warnings += diagnostics.len();
    if !quiet {
        for diagnostic in &diagnostics {
            ui::warning(&format!("{}: {}", path.display(), diagnostic));
        }
    }

    match rewrite {
        Some(rewrite) if rewrite.is_changed() => {
            summary.changed_files += 1;
            summary.replaced += rewrite.replaced;
            Ok(Some(rewrite.code))
        }
        _ => {
            debug!("No changes for {}", path.display());
            Ok(None)
        }
    }
}
