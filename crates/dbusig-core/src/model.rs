use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Options for the signature generator.
///
/// Numeric fields are signed so that out-of-range values read from a profile
/// reach the validator instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SignatureOptions {
    /// Maximum number of type codes in one complete type.
    #[serde(default = "default_max_codes")]
    pub max_codes: i64,
    /// Minimum number of complete types in a signature.
    #[serde(default)]
    pub min_complete_types: i64,
    /// Maximum number of complete types in a signature; absent means unbounded.
    #[serde(default = "default_max_complete_types")]
    pub max_complete_types: Option<i64>,
    /// Minimum number of complete types inside a struct.
    #[serde(default = "default_min_struct_len")]
    pub min_struct_len: i64,
    /// Maximum number of complete types inside a struct; absent means unbounded.
    #[serde(default = "default_max_struct_len")]
    pub max_struct_len: Option<i64>,
    /// Never generate arrays.
    #[serde(default)]
    pub exclude_arrays: bool,
    /// Never generate dict entries.
    #[serde(default)]
    pub exclude_dicts: bool,
    /// Never generate structs.
    #[serde(default)]
    pub exclude_structs: bool,
    /// Symbols that must not appear in any generated signature.
    ///
    /// Type codes remove a primitive from the alphabet. `a`, `(`, `)`, `{`
    /// and `}` remove the constructors that would emit them.
    #[serde(default, alias = "blacklist", skip_serializing_if = "Option::is_none")]
    pub exclusion_list: Option<String>,
    /// Symbols a top-level complete type may begin with; absent means any.
    ///
    /// Type codes allow that leaf, `a` allows arrays and dict entries, `(`
    /// allows structs and `{` allows dict entries.
    #[serde(default, alias = "startswith", skip_serializing_if = "Option::is_none")]
    pub start_symbols: Option<String>,
    /// Charge the key of a dict entry against `max_codes`.
    #[serde(default)]
    pub strict_leaf_cap: bool,
}

impl Default for SignatureOptions {
    fn default() -> Self {
        Self {
            max_codes: default_max_codes(),
            min_complete_types: 0,
            max_complete_types: default_max_complete_types(),
            min_struct_len: default_min_struct_len(),
            max_struct_len: default_max_struct_len(),
            exclude_arrays: false,
            exclude_dicts: false,
            exclude_structs: false,
            exclusion_list: None,
            start_symbols: None,
            strict_leaf_cap: false,
        }
    }
}

impl SignatureOptions {
    pub fn with_max_codes(mut self, max_codes: i64) -> Self {
        self.max_codes = max_codes;
        self
    }

    pub fn with_complete_types(mut self, min: i64, max: Option<i64>) -> Self {
        self.min_complete_types = min;
        self.max_complete_types = max;
        self
    }

    pub fn with_struct_len(mut self, min: i64, max: Option<i64>) -> Self {
        self.min_struct_len = min;
        self.max_struct_len = max;
        self
    }

    pub fn with_exclusions(mut self, symbols: impl Into<String>) -> Self {
        self.exclusion_list = Some(symbols.into());
        self
    }

    pub fn with_start_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.start_symbols = Some(symbols.into());
        self
    }

    pub fn without_arrays(mut self) -> Self {
        self.exclude_arrays = true;
        self
    }

    pub fn without_dicts(mut self) -> Self {
        self.exclude_dicts = true;
        self
    }

    pub fn without_structs(mut self) -> Self {
        self.exclude_structs = true;
        self
    }

    pub fn with_strict_leaf_cap(mut self, strict: bool) -> Self {
        self.strict_leaf_cap = strict;
        self
    }
}

fn default_max_codes() -> i64 {
    5
}

fn default_max_complete_types() -> Option<i64> {
    Some(5)
}

fn default_min_struct_len() -> i64 {
    1
}

fn default_max_struct_len() -> Option<i64> {
    Some(5)
}
