//! Textual import patterns for the source library
//!
//! Three static import shapes are recognized:
//!
//! ```text
//! import _ from 'lodash'                  namespace default
//! import { isEqual, map as m } from 'lodash'   named list
//! import isEqual from 'lodash/isEqual'    single function default
//! ```
//!
//! Matching is purely textual. Import-like text inside strings or comments is
//! matched as well, and mixed forms (`import _, { map } from 'lodash'`) or
//! type-only lists are left alone.

use regex::Regex;

/// Identifier as bound by an import (`_`, `$`, `lodashIsEqual`, `café`, ...)
const IDENT: &str = r"[\p{L}_$][\w$\x{200C}\x{200D}]*";

/// Compiled patterns for one source library
#[derive(Debug, Clone)]
pub struct ImportPatterns {
    library: String,
    namespace_default: Regex,
    named_list: Regex,
    single_function: Regex,
}

impl ImportPatterns {
    /// Compile the patterns for `library` (for example `lodash` or `lodash-es`)
    pub fn new(library: impl Into<String>) -> Result<Self, regex::Error> {
        let library = library.into();
        let escaped = regex::escape(&library);

        // import <Name> from '<lib>'
        let namespace_default = Regex::new(&format!(
            r#"\bimport\s+({IDENT})\s+from\s*['"]{escaped}['"]"#
        ))?;

        // import { <list> } from '<lib>'
        let named_list = Regex::new(&format!(
            r#"\bimport\s*\{{([^}}]*)\}}\s*from\s*['"]{escaped}['"]"#
        ))?;

        // import <Name> from '<lib>/<symbol>' (optional .js extension)
        let single_function = Regex::new(&format!(
            r#"\bimport\s+({IDENT})\s+from\s*['"]{escaped}/([\w$]+)(?:\.js)?['"]"#
        ))?;

        Ok(Self {
            library,
            namespace_default,
            named_list,
            single_function,
        })
    }

    /// Library name the patterns were compiled for
    pub fn library(&self) -> &str {
        &self.library
    }

    /// Cheap pre-check: does the text mention the library at all
    pub fn references_library(&self, code: &str) -> bool {
        code.contains(self.library.as_str())
    }

    /// Matches `import <Name> from '<lib>'`; group 1 is the binding
    pub fn namespace_default(&self) -> &Regex {
        &self.namespace_default
    }

    /// Matches `import { ... } from '<lib>'`; group 1 is the raw list
    pub fn named_list(&self) -> &Regex {
        &self.named_list
    }

    /// Matches `import <Name> from '<lib>/<symbol>'`; groups 1 and 2 are
    /// the binding and the symbol
    pub fn single_function(&self) -> &Regex {
        &self.single_function
    }
}

/// Member names accessed as `<binding>.<member>` anywhere in `code`
///
/// Names are returned once each, in order of first appearance. The scan is not
/// scope aware, so a shadowed binding with the same name is counted too.
pub fn member_usages(binding: &str, code: &str) -> Result<Vec<String>, regex::Error> {
    let usage = Regex::new(&format!(
        r"(?:^|[^\w$.]){}\.({IDENT})",
        regex::escape(binding)
    ))?;

    let mut members: Vec<String> = Vec::new();
    for caps in usage.captures_iter(code) {
        if let Some(member) = caps.get(1) {
            let member = member.as_str();
            if !members.iter().any(|m| m == member) {
                members.push(member.to_string());
            }
        }
    }
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lodash() -> ImportPatterns {
        ImportPatterns::new("lodash").unwrap()
    }

    #[test]
    fn test_references_library() {
        let patterns = lodash();
        assert!(patterns.references_library("import _ from 'lodash';"));
        assert!(!patterns.references_library("import { ref } from 'vue';"));
    }

    #[test]
    fn test_namespace_default_captures_binding() {
        let patterns = lodash();
        let caps = patterns
            .namespace_default()
            .captures("import _ from 'lodash';")
            .unwrap();
        assert_eq!(&caps[1], "_");

        let caps = patterns
            .namespace_default()
            .captures(r#"import $lodash from "lodash""#)
            .unwrap();
        assert_eq!(&caps[1], "$lodash");
    }

    #[test]
    fn test_namespace_default_ignores_subpaths_and_other_libraries() {
        let patterns = lodash();
        assert!(!patterns
            .namespace_default()
            .is_match("import isEqual from 'lodash/isEqual';"));
        assert!(!patterns
            .namespace_default()
            .is_match("import _ from 'lodash-es';"));
        assert!(!patterns
            .namespace_default()
            .is_match("import _, { map } from 'lodash';"));
    }

    #[test]
    fn test_named_list_captures_raw_list() {
        let patterns = lodash();
        let code = "import {\n  isEqual,\n  map as m,\n} from 'lodash';";
        let caps = patterns.named_list().captures(code).unwrap();
        assert_eq!(&caps[1], "\n  isEqual,\n  map as m,\n");
    }

    #[test]
    fn test_named_list_skips_type_only_imports() {
        let patterns = lodash();
        assert!(!patterns
            .named_list()
            .is_match("import type { Dictionary } from 'lodash';"));
    }

    #[test]
    fn test_single_function_captures_binding_and_symbol() {
        let patterns = lodash();
        let caps = patterns
            .single_function()
            .captures("import lodashIsEqual from 'lodash/isEqual';")
            .unwrap();
        assert_eq!(&caps[1], "lodashIsEqual");
        assert_eq!(&caps[2], "isEqual");

        let caps = patterns
            .single_function()
            .captures("import debounce from 'lodash/debounce.js'")
            .unwrap();
        assert_eq!(&caps[2], "debounce");
    }

    #[test]
    fn test_single_function_unicode_binding() {
        let caps = lodash()
            .single_function()
            .captures("import égal from 'lodash/isEqual';")
            .unwrap();
        assert_eq!(&caps[1], "égal");
    }

    #[test]
    fn test_single_function_ignores_nested_paths() {
        let patterns = lodash();
        assert!(!patterns
            .single_function()
            .is_match("import map from 'lodash/fp/map';"));
    }

    #[test]
    fn test_library_name_is_escaped() {
        let patterns = ImportPatterns::new("lodash.es").unwrap();
        assert!(!patterns.namespace_default().is_match("import _ from 'lodashXes';"));
        assert!(patterns.namespace_default().is_match("import _ from 'lodash.es';"));
    }

    #[test]
    fn test_member_usages_in_first_appearance_order() {
        let code = "_.map(xs, f); _.isEqual(a, b); _.map(ys, g);";
        assert_eq!(member_usages("_", code).unwrap(), vec!["map", "isEqual"]);
    }

    #[test]
    fn test_member_usages_requires_exact_binding() {
        let code = "foo_.map(xs); obj._.get(); __.pick(o);";
        assert!(member_usages("_", code).unwrap().is_empty());
    }

    #[test]
    fn test_member_usages_at_start_of_text() {
        assert_eq!(member_usages("_", "_.noop()").unwrap(), vec!["noop"]);
    }

    #[test]
    fn test_member_usages_dollar_binding() {
        let code = "const x = $.get(o, 'a');";
        assert_eq!(member_usages("$", code).unwrap(), vec!["get"]);
    }
}
