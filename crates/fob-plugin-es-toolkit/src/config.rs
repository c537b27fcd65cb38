//! es-toolkit plugin configuration
//!
//! Options can be built in code or loaded from a JSON file plus
//! `FOB_ES_TOOLKIT_*` environment variables.

use crate::error::Result;
use crate::rewrite::{DEFAULT_REPLACEMENT_LIBRARY, DEFAULT_SOURCE_LIBRARY};
use crate::support::SupportedFunctions;
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
    value::{Uncased, UncasedStr},
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Environment variable prefix for option overrides
pub const ENV_PREFIX: &str = "FOB_ES_TOOLKIT_";

/// What to do with a named import list containing an unparsable entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedImportPolicy {
    /// Leave the statement untouched and report a diagnostic
    #[default]
    Skip,
    /// Abort the rewrite of the whole file
    Fail,
}

/// Configuration for the es-toolkit plugin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EsToolkitPluginOptions {
    /// Library whose imports are rewritten
    pub source_library: String,

    /// Library the supported functions are imported from instead
    pub replacement_library: String,

    /// Module id substrings to process (empty = all)
    #[serde(deserialize_with = "string_or_list")]
    pub include: Vec<String>,

    /// Module id substrings to skip; checked before `include`
    #[serde(deserialize_with = "string_or_list")]
    pub exclude: Vec<String>,

    /// File extensions (without the dot) to restrict processing to (empty = all)
    #[serde(deserialize_with = "string_or_list")]
    pub extensions: Vec<String>,

    /// Explicit list of supported functions, replacing the built-in table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported: Option<Vec<String>>,

    /// Functions that always stay on the source library
    #[serde(deserialize_with = "string_or_list")]
    pub keep: Vec<String>,

    /// Handling of unparsable named import entries
    pub on_malformed: MalformedImportPolicy,
}

impl Default for EsToolkitPluginOptions {
    fn default() -> Self {
        Self {
            source_library: DEFAULT_SOURCE_LIBRARY.to_string(),
            replacement_library: DEFAULT_REPLACEMENT_LIBRARY.to_string(),
            include: Vec::new(),
            exclude: Vec::new(),
            extensions: Vec::new(),
            supported: None,
            keep: Vec::new(),
            on_malformed: MalformedImportPolicy::Skip,
        }
    }
}

impl EsToolkitPluginOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from defaults, an optional JSON file and the environment
    ///
    /// Priority: environment variables > config file > defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Json::file(path));
        }

        // FOB_ES_TOOLKIT_SOURCE_LIBRARY -> sourceLibrary
        figment = figment.merge(Env::prefixed(ENV_PREFIX).map(env_key));

        Ok(figment.extract()?)
    }

    pub fn with_source_library(mut self, library: impl Into<String>) -> Self {
        self.source_library = library.into();
        self
    }

    pub fn with_replacement_library(mut self, library: impl Into<String>) -> Self {
        self.replacement_library = library.into();
        self
    }

    /// Add an include pattern
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include.push(pattern.into());
        self
    }

    /// Add an exclude pattern
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the built-in supported function table
    pub fn with_supported<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Keep `name` on the source library even if it is supported
    pub fn keep(mut self, name: impl Into<String>) -> Self {
        self.keep.push(name.into());
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedImportPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    /// The effective supported set after `supported` and `keep` are applied
    pub fn supported_functions(&self) -> SupportedFunctions {
        let base = match &self.supported {
            Some(names) => SupportedFunctions::from_names(names.iter().cloned()),
            None => SupportedFunctions::es_toolkit_compat(),
        };
        base.without(self.keep.iter().map(String::as_str))
    }

    /// Whether a module id should be handled at all
    pub fn should_process(&self, id: &str) -> bool {
        if !self.extensions.is_empty() {
            let path = id.split(['?', '#']).next().unwrap_or(id);
            let has_extension = path
                .rsplit_once('.')
                .is_some_and(|(_, ext)| self.extensions.iter().any(|e| e == ext));
            if !has_extension {
                return false;
            }
        }

        if self
            .exclude
            .iter()
            .any(|pattern| id.contains(pattern.as_str()))
        {
            return false;
        }

        self.include.is_empty()
            || self
                .include
                .iter()
                .any(|pattern| id.contains(pattern.as_str()))
    }
}

/// Accept either a list or a comma-separated string, so that
/// `FOB_ES_TOOLKIT_KEEP=debounce,throttle` works as well as `[debounce,throttle]`
fn string_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        String(String),
        List(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::String(value) => value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect(),
        StringOrList::List(items) => items,
    })
}

fn env_key(key: &UncasedStr) -> Uncased<'_> {
    let mut camel = String::with_capacity(key.as_str().len());
    let mut upper_next = false;
    for c in key.as_str().chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            camel.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            camel.push(c.to_ascii_lowercase());
        }
    }
    Uncased::new(camel)
}
