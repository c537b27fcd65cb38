//! Classification of lodash functions against the es-toolkit/compat surface
//!
//! The built-in table mirrors the named exports of `es-toolkit/compat`. Hosts
//! that track a different es-toolkit release can supply their own list through
//! [`SupportedFunctions::from_names`].

use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Named exports of `es-toolkit/compat`
///
/// Lodash's chaining and context helpers (`chain`, `tap`, `thru`, `mixin`,
/// `runInContext`, `noConflict`) have no compat counterpart and are absent.
pub static ES_TOOLKIT_COMPAT_FUNCTIONS: phf::Set<&'static str> = phf::phf_set! {
    // Array
    "castArray", "chunk", "compact", "concat", "difference", "differenceBy",
    "differenceWith", "drop", "dropRight", "dropRightWhile", "dropWhile", "fill",
    "findIndex", "findLastIndex", "first", "flatten", "flattenDeep", "flattenDepth",
    "fromPairs", "head", "indexOf", "initial", "intersection", "intersectionBy",
    "intersectionWith", "join", "last", "lastIndexOf", "nth", "pull", "pullAll",
    "pullAllBy", "pullAllWith", "pullAt", "remove", "reverse", "slice", "sortedIndex",
    "sortedIndexBy", "sortedIndexOf", "sortedLastIndex", "sortedLastIndexBy",
    "sortedLastIndexOf", "sortedUniq", "sortedUniqBy", "tail", "take", "takeRight",
    "takeRightWhile", "takeWhile", "union", "unionBy", "unionWith", "uniq", "uniqBy",
    "uniqWith", "unzip", "unzipWith", "without", "xor", "xorBy", "xorWith", "zip",
    "zipObject", "zipObjectDeep", "zipWith",
    // Collection
    "countBy", "each", "eachRight", "every", "filter", "find", "findLast", "flatMap",
    "flatMapDeep", "flatMapDepth", "forEach", "forEachRight", "groupBy", "includes",
    "invokeMap", "keyBy", "map", "orderBy", "partition", "reduce", "reduceRight",
    "reject", "sample", "sampleSize", "shuffle", "size", "some", "sortBy",
    // Date
    "now",
    // Function
    "after", "ary", "attempt", "before", "bind", "bindKey", "curry", "curryRight",
    "debounce", "defer", "delay", "flip", "memoize", "negate", "nthArg", "once",
    "overArgs", "partial", "partialRight", "rearg", "rest", "spread", "throttle",
    "unary", "wrap",
    // Lang
    "clone", "cloneDeep", "cloneDeepWith", "cloneWith", "conformsTo", "eq", "gt",
    "gte", "isArguments", "isArray", "isArrayBuffer", "isArrayLike",
    "isArrayLikeObject", "isBoolean", "isBuffer", "isDate", "isElement", "isEmpty",
    "isEqual", "isEqualWith", "isError", "isFinite", "isFunction", "isInteger",
    "isLength", "isMap", "isMatch", "isMatchWith", "isNaN", "isNative", "isNil",
    "isNull", "isNumber", "isObject", "isObjectLike", "isPlainObject", "isRegExp",
    "isSafeInteger", "isSet", "isString", "isSymbol", "isTypedArray", "isUndefined",
    "isWeakMap", "isWeakSet", "lt", "lte", "toArray", "toFinite", "toInteger",
    "toLength", "toNumber", "toPlainObject", "toSafeInteger", "toString",
    // Math
    "add", "ceil", "divide", "floor", "max", "maxBy", "mean", "meanBy", "min", "minBy",
    "multiply", "round", "subtract", "sum", "sumBy",
    // Number
    "clamp", "inRange", "random",
    // Object
    "assign", "assignIn", "assignInWith", "assignWith", "at", "create", "defaults",
    "defaultsDeep", "entries", "entriesIn", "extend", "extendWith", "findKey",
    "findLastKey", "forIn", "forInRight", "forOwn", "forOwnRight", "functions",
    "functionsIn", "get", "has", "hasIn", "invert", "invertBy", "invoke", "keys",
    "keysIn", "mapKeys", "mapValues", "merge", "mergeWith", "omit", "omitBy", "pick",
    "pickBy", "result", "set", "setWith", "toPairs", "toPairsIn", "transform", "unset",
    "update", "updateWith", "values", "valuesIn",
    // String
    "camelCase", "capitalize", "deburr", "endsWith", "escape", "escapeRegExp",
    "kebabCase", "lowerCase", "lowerFirst", "pad", "padEnd", "padStart", "parseInt",
    "repeat", "replace", "snakeCase", "split", "startCase", "startsWith", "template",
    "templateSettings", "toLower", "toUpper", "trim", "trimEnd", "trimStart",
    "truncate", "unescape", "upperCase", "upperFirst", "words",
    // Util
    "cond", "conforms", "constant", "defaultTo", "flow", "flowRight", "identity",
    "iteratee", "matches", "matchesProperty", "method", "methodOf", "noop",
    "over", "overEvery", "overSome", "property", "propertyOf", "range", "rangeRight",
    "stubArray", "stubFalse", "stubObject", "stubString", "stubTrue", "times",
    "toPath", "uniqueId",
};

/// The set of function names the replacement library can serve
///
/// Cheap to clone and safe to share between concurrent transforms; the set is
/// never mutated after construction.
#[derive(Debug, Clone)]
pub enum SupportedFunctions {
    /// The embedded es-toolkit/compat table
    Builtin,
    /// A caller-supplied list of names
    Custom(Arc<FxHashSet<String>>),
}

impl SupportedFunctions {
    /// The built-in es-toolkit/compat table
    pub fn es_toolkit_compat() -> Self {
        Self::Builtin
    }

    /// Build a set from an arbitrary list of exported names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Custom(Arc::new(names.into_iter().map(Into::into).collect()))
    }

    /// Copy of this set with `names` removed, so they stay on the source library
    pub fn without<'a, I>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let removed: FxHashSet<&str> = names.into_iter().collect();
        if removed.is_empty() {
            return self.clone();
        }

        let kept: FxHashSet<String> = self
            .names()
            .filter(|name| !removed.contains(name))
            .map(str::to_string)
            .collect();
        Self::Custom(Arc::new(kept))
    }

    /// Whether `name` can be imported from the replacement library
    pub fn is_supported(&self, name: &str) -> bool {
        match self {
            Self::Builtin => ES_TOOLKIT_COMPAT_FUNCTIONS.contains(name),
            Self::Custom(names) => names.contains(name),
        }
    }

    /// Negation of [`is_supported`](Self::is_supported)
    pub fn is_unsupported(&self, name: &str) -> bool {
        !self.is_supported(name)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Builtin => ES_TOOLKIT_COMPAT_FUNCTIONS.len(),
            Self::Custom(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Builtin => Box::new(ES_TOOLKIT_COMPAT_FUNCTIONS.iter().copied()),
            Self::Custom(names) => Box::new(names.iter().map(String::as_str)),
        }
    }
}

impl Default for SupportedFunctions {
    fn default() -> Self {
        Self::es_toolkit_compat()
    }
}
