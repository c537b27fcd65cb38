//! Import rewriting
//!
//! [`Rewriter::rewrite`] runs three independent passes over the source text,
//! each returning a new string that the next pass consumes:
//!
//! 1. namespace default imports (`import _ from 'lodash'`)
//! 2. named import lists (`import { map } from 'lodash'`)
//! 3. single function imports (`import map from 'lodash/map'`)
//!
//! Each pass decides per statement whether to keep it, redirect it to the
//! replacement library, or split it between both libraries.

use crate::config::{EsToolkitPluginOptions, MalformedImportPolicy};
use crate::diagnostics::{DiagnosticSink, RewriteDiagnostic};
use crate::error::{NamedImportError, RewriteError, Result};
use crate::named_import::{NamedImport, render_list};
use crate::patterns::{ImportPatterns, member_usages};
use crate::support::SupportedFunctions;
use regex::{Captures, Regex};
use tracing::debug;

pub const DEFAULT_SOURCE_LIBRARY: &str = "lodash";
pub const DEFAULT_REPLACEMENT_LIBRARY: &str = "es-toolkit/compat";

/// Result of rewriting a file that references the source library
///
/// No source map is produced; hosts should treat positions in `code` as
/// unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// Full rewritten source text
    pub code: String,
    /// Number of import statements that were replaced
    pub replaced: usize,
}

impl Rewrite {
    pub fn is_changed(&self) -> bool {
        self.replaced > 0
    }
}

/// Rewrites source-library imports into replacement-library imports
#[derive(Debug, Clone)]
pub struct Rewriter {
    patterns: ImportPatterns,
    replacement_library: String,
    supported: SupportedFunctions,
    on_malformed: MalformedImportPolicy,
}

impl Rewriter {
    /// `lodash` to `es-toolkit/compat` with the given support table
    pub fn new(supported: SupportedFunctions) -> Result<Self> {
        Self::with_libraries(
            DEFAULT_SOURCE_LIBRARY,
            DEFAULT_REPLACEMENT_LIBRARY,
            supported,
        )
    }

    pub fn with_libraries(
        source_library: &str,
        replacement_library: &str,
        supported: SupportedFunctions,
    ) -> Result<Self> {
        Ok(Self {
            patterns: ImportPatterns::new(source_library)?,
            replacement_library: replacement_library.to_string(),
            supported,
            on_malformed: MalformedImportPolicy::default(),
        })
    }

    /// Build a rewriter from plugin options
    pub fn from_options(options: &EsToolkitPluginOptions) -> Result<Self> {
        let rewriter = Self::with_libraries(
            &options.source_library,
            &options.replacement_library,
            options.supported_functions(),
        )?;
        Ok(rewriter.with_malformed_policy(options.on_malformed))
    }

    pub fn with_malformed_policy(mut self, policy: MalformedImportPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    pub fn source_library(&self) -> &str {
        self.patterns.library()
    }

    pub fn replacement_library(&self) -> &str {
        &self.replacement_library
    }

    pub fn supported(&self) -> &SupportedFunctions {
        &self.supported
    }

    /// Rewrite every recognized import in `code`
    ///
    /// Returns `Ok(None)` when the source library is never mentioned, which
    /// lets hosts skip the file entirely. Otherwise the result holds the full
    /// text, even when no statement needed to change.
    pub fn rewrite(
        &self,
        code: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<Rewrite>> {
        if !self.patterns.references_library(code) {
            return Ok(None);
        }

        let mut replaced = 0;
        let code = self.rewrite_namespace_imports(code, &mut replaced, sink)?;
        let code = self.rewrite_named_imports(&code, &mut replaced, sink)?;
        let code = self.rewrite_single_function_imports(&code, &mut replaced, sink)?;

        debug!(
            "[fob-es-toolkit] Rewrote {} import statement(s) from '{}'",
            replaced,
            self.source_library()
        );

        Ok(Some(Rewrite { code, replaced }))
    }

    /// `import _ from 'lodash'` becomes a namespace import when every
    /// `_.member` used in the file is supported
    fn rewrite_namespace_imports(
        &self,
        code: &str,
        replaced: &mut usize,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String> {
        replace_matches(self.patterns.namespace_default(), code, |caps| {
            let binding = &caps[1];
            let members = member_usages(binding, code)?;
            if members.is_empty() {
                return Ok(None);
            }

            let unsupported: Vec<String> = members
                .into_iter()
                .filter(|member| self.supported.is_unsupported(member))
                .collect();
            if !unsupported.is_empty() {
                sink.report(RewriteDiagnostic::unsupported(
                    self.source_library(),
                    unsupported,
                ));
                return Ok(None);
            }

            *replaced += 1;
            Ok(Some(format!(
                "import * as {} from '{}'",
                binding, self.replacement_library
            )))
        })
    }

    /// `import { a, b as c } from 'lodash'` is redirected, kept, or split in two
    fn rewrite_named_imports(
        &self,
        code: &str,
        replaced: &mut usize,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String> {
        replace_matches(self.patterns.named_list(), code, |caps| {
            let statement = &caps[0];
            let imports = match parse_list(&caps[1]) {
                Ok(imports) => imports,
                Err(err) => match self.on_malformed {
                    MalformedImportPolicy::Fail => {
                        return Err(RewriteError::malformed_import(statement, err));
                    }
                    MalformedImportPolicy::Skip => {
                        sink.report(RewriteDiagnostic::MalformedImport {
                            statement: statement.to_string(),
                            error: err,
                        });
                        return Ok(None);
                    }
                },
            };
            if imports.is_empty() {
                return Ok(None);
            }

            let (supported, unsupported): (Vec<NamedImport>, Vec<NamedImport>) = imports
                .into_iter()
                .partition(|import| self.supported.is_supported(&import.actual_name));

            if unsupported.is_empty() {
                *replaced += 1;
                return Ok(Some(self.named_import(&self.replacement_library, &supported)));
            }

            sink.report(RewriteDiagnostic::unsupported(
                self.source_library(),
                unsupported
                    .iter()
                    .map(|import| import.actual_name.clone())
                    .collect(),
            ));
            if supported.is_empty() {
                return Ok(None);
            }

            *replaced += 1;
            Ok(Some(format!(
                "{};{}",
                self.named_import(&self.replacement_library, &supported),
                self.named_import(self.source_library(), &unsupported)
            )))
        })
    }

    /// `import isEqual from 'lodash/isEqual'` becomes a named import
    fn rewrite_single_function_imports(
        &self,
        code: &str,
        replaced: &mut usize,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String> {
        replace_matches(self.patterns.single_function(), code, |caps| {
            let binding = &caps[1];
            let symbol = &caps[2];
            if self.supported.is_unsupported(symbol) {
                sink.report(RewriteDiagnostic::unsupported(
                    self.source_library(),
                    vec![symbol.to_string()],
                ));
                return Ok(None);
            }

            *replaced += 1;
            let import = NamedImport::renamed(symbol, binding);
            Ok(Some(self.named_import(&self.replacement_library, &[import])))
        })
    }

    fn named_import(&self, library: &str, imports: &[NamedImport]) -> String {
        format!("import {{ {} }} from '{}'", render_list(imports), library)
    }
}

/// Parse a raw `{ ... }` body; empty entries from trailing commas are ignored
fn parse_list(raw: &str) -> std::result::Result<Vec<NamedImport>, NamedImportError> {
    raw.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(NamedImport::parse)
        .collect()
}

/// Like `Regex::replace_all`, but the replacement may fail or keep the match
/// (`Ok(None)`) unchanged
fn replace_matches<F>(re: &Regex, text: &str, mut replacement: F) -> Result<String>
where
    F: FnMut(&Captures<'_>) -> Result<Option<String>>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&text[last..whole.start()]);
        match replacement(&caps)? {
            Some(new_text) => out.push_str(&new_text),
            None => out.push_str(whole.as_str()),
        }
        last = whole.end();
    }
    out.push_str(&text[last..]);
    Ok(out)
}
