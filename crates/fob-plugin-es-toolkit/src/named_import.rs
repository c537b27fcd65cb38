//! Parsing and rendering of `{ ... }` import list entries
//!
//! An entry is either a bare name (`isEqual`) or a name with a rename clause
//! (`isEqual as lodashIsEqual`). Rendering reproduces the same notation, so a
//! list that is moved to another library keeps its local bindings.

use crate::error::NamedImportError;
use std::fmt;

const RENAME_SEPARATOR: &str = " as ";

/// One entry of a named import list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedImport {
    /// Name exported by the imported library
    pub actual_name: String,
    /// Name bound in the importing module
    pub custom_name: String,
}

impl NamedImport {
    /// Import of `name` bound under the same name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            custom_name: name.clone(),
            actual_name: name,
        }
    }

    /// Import of `actual_name` bound as `custom_name`
    pub fn renamed(actual_name: impl Into<String>, custom_name: impl Into<String>) -> Self {
        Self {
            actual_name: actual_name.into(),
            custom_name: custom_name.into(),
        }
    }

    /// Parse a single list entry such as `isEqual` or `isEqual as eq`
    ///
    /// Whitespace runs inside the token (including newlines from multi-line
    /// import lists) are treated as a single space.
    pub fn parse(token: &str) -> Result<Self, NamedImportError> {
        let normalized = collapse_whitespace(token);

        let (actual, custom) = match normalized.split_once(RENAME_SEPARATOR) {
            Some((actual, custom)) => (actual.trim(), Some(custom.trim())),
            None => (normalized.trim(), None),
        };

        if actual.is_empty() {
            return Err(NamedImportError::missing_name(token.trim()));
        }
        if !is_identifier(actual) {
            return Err(NamedImportError::invalid_identifier(token.trim(), actual));
        }

        match custom {
            None => Ok(Self::new(actual)),
            Some("") => Err(NamedImportError::missing_alias(token.trim())),
            Some(custom) if !is_identifier(custom) => {
                Err(NamedImportError::invalid_identifier(token.trim(), custom))
            }
            Some(custom) => Ok(Self::renamed(actual, custom)),
        }
    }

    pub fn is_renamed(&self) -> bool {
        self.actual_name != self.custom_name
    }

    /// Render back to list-entry notation
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NamedImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_renamed() {
            write!(f, "{}{}{}", self.actual_name, RENAME_SEPARATOR, self.custom_name)
        } else {
            f.write_str(&self.actual_name)
        }
    }
}

/// Join rendered entries with `, ` in their original order
pub fn render_list(imports: &[NamedImport]) -> String {
    imports
        .iter()
        .map(NamedImport::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Whether `name` is a plain JavaScript identifier
///
/// Unicode letters and digits are accepted; escape sequences are not.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| {
        c.is_alphanumeric() || matches!(c, '_' | '$' | '\u{200c}' | '\u{200d}')
    })
}

fn collapse_whitespace(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut in_whitespace = false;
    for c in token.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
