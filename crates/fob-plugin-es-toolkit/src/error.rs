//! Error types for import rewriting

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RewriteError>;

/// A single token from a `{ ... }` import list that could not be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum NamedImportError {
    /// Nothing in front of the rename clause, e.g. `{ as foo }`
    #[error("named import '{token}' has no imported name")]
    #[diagnostic(
        code(fob::es_toolkit::missing_name),
        help("Each entry in an import list needs a name: `{{ name }}` or `{{ name as alias }}`")
    )]
    MissingName { token: String },

    /// Rename clause without a local binding, e.g. `{ foo as }`
    #[error("named import '{token}' has an empty alias")]
    #[diagnostic(code(fob::es_toolkit::missing_alias))]
    MissingAlias { token: String },

    /// One side of the token is not a plain identifier (type-only imports end up here)
    #[error("'{name}' in named import '{token}' is not an identifier")]
    #[diagnostic(
        code(fob::es_toolkit::invalid_identifier),
        help("Type-only imports and string-named imports are left for the source library")
    )]
    InvalidIdentifier { token: String, name: String },
}

impl NamedImportError {
    pub fn missing_name(token: impl Into<String>) -> Self {
        Self::MissingName {
            token: token.into(),
        }
    }

    pub fn missing_alias(token: impl Into<String>) -> Self {
        Self::MissingAlias {
            token: token.into(),
        }
    }

    pub fn invalid_identifier(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            token: token.into(),
            name: name.into(),
        }
    }

    /// The raw token the error refers to
    pub fn token(&self) -> &str {
        match self {
            Self::MissingName { token }
            | Self::MissingAlias { token }
            | Self::InvalidIdentifier { token, .. } => token,
        }
    }
}

/// Errors that abort the rewrite of a whole file
#[derive(Error, Debug, Diagnostic)]
pub enum RewriteError {
    /// A named import list contained a token that could not be parsed
    #[error("malformed import statement `{statement}`: {source}")]
    #[diagnostic(
        code(fob::es_toolkit::malformed_import),
        help("Set `onMalformed` to \"skip\" to leave such statements untouched")
    )]
    MalformedImport {
        statement: String,
        #[source]
        source: NamedImportError,
    },

    /// The import patterns for the configured library could not be compiled
    #[error("failed to compile import pattern: {0}")]
    #[diagnostic(code(fob::es_toolkit::pattern))]
    Pattern(#[from] regex::Error),

    /// Plugin options could not be loaded
    #[error("invalid es-toolkit plugin options: {0}")]
    #[diagnostic(
        code(fob::es_toolkit::config),
        help("Check the config file syntax and the FOB_ES_TOOLKIT_* environment variables")
    )]
    Config(#[from] Box<figment::Error>),
}

impl RewriteError {
    pub fn malformed_import(statement: impl Into<String>, source: NamedImportError) -> Self {
        Self::MalformedImport {
            statement: statement.into(),
            source,
        }
    }
}

impl From<figment::Error> for RewriteError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_import_error_token() {
        let err = NamedImportError::missing_name(" as foo");
        assert_eq!(err.token(), " as foo");

        let err = NamedImportError::invalid_identifier("type Foo", "type Foo");
        assert_eq!(err.token(), "type Foo");
    }

    #[test]
    fn test_malformed_import_message() {
        let err = RewriteError::malformed_import(
            "import { as foo } from 'lodash'",
            NamedImportError::missing_name("as foo"),
        );
        let message = err.to_string();
        assert!(message.contains("import { as foo } from 'lodash'"));
        assert!(message.contains("has no imported name"));
    }
}
