use rand::Rng;

use crate::alphabet::{Alphabet, Exclusions, StartSymbols};
use crate::errors::{Result, SignatureError};
use crate::model::SignatureOptions;

/// Inclusive count bounds; `max == None` means unbounded.
///
/// Only produced by [`validate_options`], so `min <= max` always holds:
///
/// ```compile_fail
/// let range = dbusig_core::CountRange { min: 3, max: Some(1) };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub(crate) min: usize,
    pub(crate) max: Option<usize>,
}

/// Continuation probability for counts with no upper bound.
const UNBOUNDED_CONTINUE: f64 = 0.8;

impl CountRange {
    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }

    /// Draw a count in `[min, min(max, cap)]`. Callers guarantee `min <= cap`.
    pub(crate) fn draw_capped(&self, cap: usize, rng: &mut impl Rng) -> usize {
        let upper = self.max.map_or(cap, |max| max.min(cap));
        rng.random_range(self.min..=upper)
    }

    /// Draw a count in `[min, max]`, geometric above `min` when unbounded.
    pub(crate) fn draw(&self, rng: &mut impl Rng) -> usize {
        match self.max {
            Some(max) => rng.random_range(self.min..=max),
            None => {
                let mut count = self.min;
                while rng.random_bool(UNBOUNDED_CONTINUE) {
                    count += 1;
                }
                count
            }
        }
    }
}

/// How the key of a dict entry is charged against the leaf cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafCap {
    /// Keys are free; a complete type may exceed `max_codes` by one code per
    /// dict entry it contains.
    KeysExempt,
    /// Keys cost one leaf like any other code.
    Strict,
}

impl LeafCap {
    pub(crate) fn key_cost(self) -> usize {
        match self {
            LeafCap::KeysExempt => 0,
            LeafCap::Strict => 1,
        }
    }
}

/// Normalized, validated generation parameters.
///
/// Fields are read through accessors; the only constructor is
/// [`validate_options`].
/// The grammar that consumes it is not reachable from outside the crate:
///
/// ```compile_fail
/// use dbusig_core::grammar::Grammar;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarConfig {
    pub(crate) max_codes: usize,
    pub(crate) complete_types: CountRange,
    pub(crate) struct_len: CountRange,
    pub(crate) arrays: bool,
    pub(crate) structs: bool,
    pub(crate) dicts: bool,
    pub(crate) leaf_cap: LeafCap,
    pub(crate) alphabet: Alphabet,
    /// Narrowed to what the alphabet and switches allow.
    pub(crate) starts: Option<StartSymbols>,
}

impl GrammarConfig {
    pub fn max_codes(&self) -> usize {
        self.max_codes
    }

    pub fn complete_types(&self) -> CountRange {
        self.complete_types
    }

    pub fn struct_len(&self) -> CountRange {
        self.struct_len
    }

    pub fn arrays(&self) -> bool {
        self.arrays
    }

    pub fn structs(&self) -> bool {
        self.structs
    }

    pub fn dicts(&self) -> bool {
        self.dicts
    }

    pub fn leaf_cap(&self) -> LeafCap {
        self.leaf_cap
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Allowed first symbols of a top-level complete type, if restricted.
    pub fn start_symbols(&self) -> Option<&StartSymbols> {
        self.starts.as_ref()
    }
}

/// Check options for internal consistency and normalize them.
pub fn validate_options(options: &SignatureOptions) -> Result<GrammarConfig> {
    let exclusions = options
        .exclusion_list
        .as_deref()
        .map(Exclusions::parse)
        .unwrap_or_default();
    let alphabet = Alphabet::resolve(&exclusions);

    if alphabet.is_empty() {
        return Err(SignatureError::invalid(
            "all type codes excluded, no signature possible",
        ));
    }
    if options.max_codes < 1 {
        return Err(SignatureError::invalid(
            "can not have signature with 0 type codes",
        ));
    }
    if options.min_complete_types < 0 {
        return Err(SignatureError::invalid(
            "can not have signature of negative length",
        ));
    }
    if options.min_struct_len < 1 {
        return Err(SignatureError::invalid("can not have struct of zero length"));
    }
    if let Some(max) = options.max_complete_types
        && max < options.min_complete_types
    {
        return Err(SignatureError::invalid(
            "minimum complete types specified greater than maximum",
        ));
    }
    if let Some(max) = options.max_struct_len
        && max < options.min_struct_len
    {
        return Err(SignatureError::invalid(
            "minimum struct length specified is greater than maximum",
        ));
    }

    // dicts need a non-variant key; with none left they are silently dropped
    let dicts = !(options.exclude_dicts || exclusions.dicts || alphabet.lacks_dict_keys());
    let arrays = !(options.exclude_arrays || exclusions.arrays);
    let structs = !(options.exclude_structs || exclusions.structs);
    let leaf_cap = if options.strict_leaf_cap {
        LeafCap::Strict
    } else {
        LeafCap::KeysExempt
    };
    let max_codes = to_count(options.max_codes)?;
    let min_struct_len = to_count(options.min_struct_len)?;

    let starts = match options.start_symbols.as_deref() {
        None => None,
        Some("") => {
            return Err(SignatureError::invalid(
                "start symbols are empty, no signature possible",
            ));
        }
        Some(symbols) => {
            let requested = StartSymbols::parse(symbols).map_err(|symbol| {
                SignatureError::invalid(format!(
                    "no complete type can start with '{symbol}'"
                ))
            })?;
            let starts = StartSymbols {
                codes: requested
                    .codes
                    .into_iter()
                    .filter(|code| alphabet.codes().contains(code))
                    .collect(),
                arrays: requested.arrays && arrays,
                structs: requested.structs && structs && min_struct_len <= max_codes,
                dicts: requested.dicts && dicts && max_codes >= 1 + leaf_cap.key_cost(),
            };
            if starts.codes.is_empty() && !starts.arrays && !starts.structs && !starts.dicts {
                return Err(SignatureError::invalid(
                    "start symbols are all excluded, no signature possible",
                ));
            }
            Some(starts)
        }
    };

    Ok(GrammarConfig {
        max_codes,
        complete_types: CountRange {
            min: to_count(options.min_complete_types)?,
            max: options.max_complete_types.map(to_count).transpose()?,
        },
        struct_len: CountRange {
            min: min_struct_len,
            max: options.max_struct_len.map(to_count).transpose()?,
        },
        arrays,
        structs,
        dicts,
        leaf_cap,
        alphabet,
        starts,
    })
}

fn to_count(value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| SignatureError::invalid(format!("count {value} is out of range")))
}
