//! Primitive type codes and exclusion handling.

use std::collections::BTreeSet;

use tracing::debug;

/// The D-Bus primitive type codes, in canonical order.
pub const TYPE_CODES: [char; 14] = [
    'b', 'd', 'g', 'h', 'i', 'n', 'o', 'q', 's', 't', 'u', 'v', 'x', 'y',
];

/// The variant code. Never valid as a dict-entry key.
pub const VARIANT: char = 'v';

pub const ARRAY_MARKER: char = 'a';
pub const STRUCT_OPEN: char = '(';
pub const STRUCT_CLOSE: char = ')';
pub const DICT_OPEN: char = '{';
pub const DICT_CLOSE: char = '}';

pub fn is_type_code(symbol: char) -> bool {
    TYPE_CODES.contains(&symbol)
}

/// Symbols banned from generated output, split by what they affect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    pub codes: BTreeSet<char>,
    pub arrays: bool,
    pub structs: bool,
    pub dicts: bool,
}

impl Exclusions {
    pub fn parse(symbols: &str) -> Self {
        let mut exclusions = Exclusions::default();
        for symbol in symbols.chars() {
            match symbol {
                // dict entries are spelled `a{..}`, so banning `a` bans both
                ARRAY_MARKER => {
                    exclusions.arrays = true;
                    exclusions.dicts = true;
                }
                STRUCT_OPEN | STRUCT_CLOSE => exclusions.structs = true,
                DICT_OPEN | DICT_CLOSE => exclusions.dicts = true,
                code if is_type_code(code) => {
                    exclusions.codes.insert(code);
                }
                other => {
                    debug!(symbol = %other, "ignoring exclusion symbol outside the signature alphabet");
                }
            }
        }
        exclusions
    }
}

/// Forms a top-level complete type may begin with.
///
/// A type code admits that code as a bare leaf, `a` admits arrays and dict
/// entries, `(` admits structs and `{` admits dict entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartSymbols {
    pub codes: BTreeSet<char>,
    pub arrays: bool,
    pub structs: bool,
    pub dicts: bool,
}

impl StartSymbols {
    /// Parse a start set, returning the first symbol no complete type can begin with.
    pub fn parse(symbols: &str) -> Result<Self, char> {
        let mut starts = StartSymbols::default();
        for symbol in symbols.chars() {
            match symbol {
                ARRAY_MARKER => {
                    starts.arrays = true;
                    starts.dicts = true;
                }
                STRUCT_OPEN => starts.structs = true,
                DICT_OPEN => starts.dicts = true,
                code if is_type_code(code) => {
                    starts.codes.insert(code);
                }
                other => return Err(other),
            }
        }
        Ok(starts)
    }
}

/// Effective leaf alphabet after exclusions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    codes: Vec<char>,
    key_codes: Vec<char>,
}

impl Alphabet {
    pub fn resolve(exclusions: &Exclusions) -> Self {
        let codes: Vec<char> = TYPE_CODES
            .iter()
            .copied()
            .filter(|code| !exclusions.codes.contains(code))
            .collect();
        let key_codes = codes
            .iter()
            .copied()
            .filter(|code| *code != VARIANT)
            .collect();
        Self { codes, key_codes }
    }

    pub fn codes(&self) -> &[char] {
        &self.codes
    }

    /// Codes usable as the key of a dict entry.
    pub fn key_codes(&self) -> &[char] {
        &self.key_codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// True when no dict entry can be formed from this alphabet.
    pub fn lacks_dict_keys(&self) -> bool {
        self.key_codes.is_empty()
    }
}
