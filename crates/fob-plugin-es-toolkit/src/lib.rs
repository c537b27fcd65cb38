//! Rolldown plugin that swaps lodash imports for es-toolkit/compat
//!
//! es-toolkit's compat build is a drop-in replacement for most of lodash.
//! This plugin rewrites the static lodash imports of every module so that the
//! supported functions come from `es-toolkit/compat`, while anything the
//! compat layer lacks keeps importing from lodash (with a warning).
//!
//! ## Architecture
//!
//! ```text
//! module source → transform() → lodash mentioned? ── no ──→ unchanged
//!                                      │
//!                                     yes
//!                                      ↓
//!              namespace pass → named list pass → single function pass → code
//! ```
//!
//! The rewrite is textual: only whole import statements are replaced and no
//! source map is produced.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use fob_plugin_es_toolkit::FobEsToolkitPlugin;
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Use with your Rolldown bundler configuration
//! let plugin = Arc::new(FobEsToolkitPlugin::new()?);
//! # Ok(())
//! # }
//! ```

use anyhow::Context;
use rolldown_plugin::{
    HookTransformArgs, HookTransformOutput, HookTransformReturn, HookUsage, Plugin,
    SharedTransformPluginContext,
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::debug;

mod config;
mod diagnostics;
mod error;
mod named_import;
mod patterns;
mod rewrite;
mod support;

pub use config::{ENV_PREFIX, EsToolkitPluginOptions, MalformedImportPolicy};
pub use diagnostics::{DiagnosticSink, NullSink, RewriteDiagnostic, TracingSink};
pub use error::{NamedImportError, Result, RewriteError};
pub use named_import::{NamedImport, is_identifier, render_list};
pub use patterns::{ImportPatterns, member_usages};
pub use rewrite::{DEFAULT_REPLACEMENT_LIBRARY, DEFAULT_SOURCE_LIBRARY, Rewrite, Rewriter};
pub use support::{ES_TOOLKIT_COMPAT_FUNCTIONS, SupportedFunctions};

/// Rolldown plugin that redirects lodash imports to es-toolkit/compat
///
/// The rewriter is compiled once and shared by every concurrent `transform`
/// call; it holds no mutable state.
#[derive(Debug, Clone)]
pub struct FobEsToolkitPlugin {
    /// Configuration options
    options: Arc<EsToolkitPluginOptions>,

    /// Compiled import patterns and support table
    rewriter: Arc<Rewriter>,
}

impl FobEsToolkitPlugin {
    /// Create a plugin with default options (lodash → es-toolkit/compat)
    ///
    /// # Example
    ///
    /// ```rust
    /// use fob_plugin_es_toolkit::FobEsToolkitPlugin;
    ///
    /// let plugin = FobEsToolkitPlugin::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        Self::with_options(EsToolkitPluginOptions::default())
    }

    /// Create a plugin with custom options
    ///
    /// # Example
    ///
    /// ```rust
    /// use fob_plugin_es_toolkit::{EsToolkitPluginOptions, FobEsToolkitPlugin};
    ///
    /// let options = EsToolkitPluginOptions::new()
    ///     .keep("debounce")
    ///     .exclude("/node_modules/");
    ///
    /// let plugin = FobEsToolkitPlugin::with_options(options).unwrap();
    /// ```
    pub fn with_options(options: EsToolkitPluginOptions) -> Result<Self> {
        let rewriter = Rewriter::from_options(&options)?;
        Ok(Self {
            options: Arc::new(options),
            rewriter: Arc::new(rewriter),
        })
    }

    pub fn options(&self) -> &EsToolkitPluginOptions {
        &self.options
    }

    pub fn rewriter(&self) -> &Rewriter {
        &self.rewriter
    }

    /// Rewrite one module outside of Rolldown
    ///
    /// `id` only decides whether the module is handled and tags log output.
    /// Diagnostics go to `tracing`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(rewrite))` - The module mentions the source library
    /// - `Ok(None)` - Module skipped or the library is never mentioned
    /// - `Err(e)` - Malformed import with [`MalformedImportPolicy::Fail`]
    pub fn transform_source(&self, id: &str, code: &str) -> Result<Option<Rewrite>> {
        self.transform_source_with(id, code, &mut TracingSink::new(id))
    }

    /// Same as [`transform_source`](Self::transform_source) with a custom sink
    pub fn transform_source_with(
        &self,
        id: &str,
        code: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Option<Rewrite>> {
        if !self.options.should_process(id) {
            return Ok(None);
        }

        let Some(rewrite) = self.rewriter.rewrite(code, sink)? else {
            return Ok(None);
        };

        debug!(
            "[fob-es-toolkit] Processed {} ({} statements replaced, {} → {} bytes)",
            id,
            rewrite.replaced,
            code.len(),
            rewrite.code.len()
        );

        Ok(Some(rewrite))
    }
}

impl Plugin for FobEsToolkitPlugin {
    /// Returns the plugin name for debugging and logging
    fn name(&self) -> Cow<'static, str> {
        "fob-es-toolkit".into()
    }

    /// Declare which hooks this plugin uses
    ///
    /// This allows Rolldown to optimize by skipping unused hooks.
    fn register_hook_usage(&self) -> HookUsage {
        HookUsage::Transform
    }

    /// Transform hook - rewrites lodash imports in JS/TS modules
    ///
    /// # Returns
    ///
    /// - `Ok(Some(output))` - Module mentions lodash; code returned without a source map
    /// - `Ok(None)` - Module not handled or lodash never mentioned
    /// - `Err(e)` - Malformed import list under the `fail` policy
    fn transform(
        &self,
        _ctx: SharedTransformPluginContext,
        args: &HookTransformArgs<'_>,
    ) -> impl std::future::Future<Output = HookTransformReturn> + Send {
        let id = args.id.to_string();
        let code = args.code.to_string();
        let plugin = self.clone();

        async move {
            let rewrite = plugin
                .transform_source(&id, &code)
                .with_context(|| format!("Failed to rewrite lodash imports in: {}", id))?;

            Ok(rewrite.map(|rewrite| HookTransformOutput {
                code: Some(rewrite.code),
                map: None,
                side_effects: None,
                module_type: None,
            }))
        }
    }
}
