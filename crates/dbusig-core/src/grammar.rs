//! Recursive complete-type production with an explicit leaf budget.

use rand::Rng;

use crate::alphabet::{ARRAY_MARKER, DICT_CLOSE, DICT_OPEN, STRUCT_CLOSE, STRUCT_OPEN};
use crate::validate::GrammarConfig;

/// One alternative of the complete-type rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Production {
    /// A single primitive type code.
    Leaf,
    /// `a` followed by a complete type.
    Array,
    /// `(` one or more complete types `)`.
    Struct,
    /// `a{` key code, complete type `}`.
    DictEntry,
}

/// The complete-type grammar for one validated configuration.
#[derive(Debug, Clone)]
pub(crate) struct Grammar {
    config: GrammarConfig,
    productions: Vec<Production>,
    /// Productions allowed at the top level, `Leaf` only when `start_codes`
    /// is non-empty.
    start_productions: Vec<Production>,
    start_codes: Vec<char>,
}

impl Grammar {
    pub(crate) fn new(config: GrammarConfig) -> Self {
        let mut productions = vec![Production::Leaf];
        if config.arrays {
            productions.push(Production::Array);
        }
        if config.structs {
            productions.push(Production::Struct);
        }
        if config.dicts {
            productions.push(Production::DictEntry);
        }

        let (start_productions, start_codes) = match &config.starts {
            None => (productions.clone(), config.alphabet.codes().to_vec()),
            Some(starts) => {
                let start_codes: Vec<char> = starts.codes.iter().copied().collect();
                let start_productions = [
                    (Production::Leaf, !start_codes.is_empty()),
                    (Production::Array, starts.arrays),
                    (Production::Struct, starts.structs),
                    (Production::DictEntry, starts.dicts),
                ]
                .into_iter()
                .filter_map(|(production, allowed)| allowed.then_some(production))
                .collect();
                (start_productions, start_codes)
            }
        };

        Self {
            config,
            productions,
            start_productions,
            start_codes,
        }
    }

    pub(crate) fn config(&self) -> &GrammarConfig {
        &self.config
    }

    /// Enabled productions, `Leaf` first.
    #[cfg(test)]
    pub(crate) fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Append one top-level complete type, restricted to the configured
    /// start symbols, and return the leaves charged.
    ///
    /// Validation guarantees that some start production fits `max_codes`.
    pub(crate) fn top_level_type(&self, rng: &mut impl Rng, out: &mut String) -> usize {
        let budget = self.config.max_codes;
        let production = self.pick(&self.start_productions, budget, rng);
        self.expand(production, budget, &self.start_codes, rng, out)
    }

    /// Append one complete type to `out` and return the leaves charged.
    ///
    /// `budget` must be at least 1; the return value never exceeds it.
    pub(crate) fn complete_type(&self, budget: usize, rng: &mut impl Rng, out: &mut String) -> usize {
        let production = self.pick(&self.productions, budget, rng);
        self.expand(production, budget, self.config.alphabet.codes(), rng, out)
    }

    fn expand(
        &self,
        production: Production,
        budget: usize,
        leaf_codes: &[char],
        rng: &mut impl Rng,
        out: &mut String,
    ) -> usize {
        match production {
            Production::Leaf => {
                out.push(pick_code(leaf_codes, rng));
                1
            }
            Production::Array => {
                out.push(ARRAY_MARKER);
                self.complete_type(budget, rng, out)
            }
            Production::Struct => {
                let count = self.config.struct_len.draw_capped(budget, rng);
                out.push(STRUCT_OPEN);
                let mut remaining = budget;
                for index in 0..count {
                    // keep one leaf for every member still to come
                    let reserved = count - 1 - index;
                    remaining -= self.complete_type(remaining - reserved, rng, out);
                }
                out.push(STRUCT_CLOSE);
                budget - remaining
            }
            Production::DictEntry => {
                let key_cost = self.config.leaf_cap.key_cost();
                out.push(ARRAY_MARKER);
                out.push(DICT_OPEN);
                out.push(pick_code(self.config.alphabet.key_codes(), rng));
                let used = self.complete_type(budget - key_cost, rng, out);
                out.push(DICT_CLOSE);
                used + key_cost
            }
        }
    }

    fn fits(&self, production: Production, budget: usize) -> bool {
        match production {
            Production::Leaf | Production::Array => budget >= 1,
            Production::Struct => budget >= self.config.struct_len.min,
            Production::DictEntry => budget >= 1 + self.config.leaf_cap.key_cost(),
        }
    }

    /// Uniform choice among `candidates` that fit `budget`. With
    /// `budget >= 1` and `Leaf` among the candidates the choice is never
    /// empty.
    fn pick(&self, candidates: &[Production], budget: usize, rng: &mut impl Rng) -> Production {
        let eligible: Vec<Production> = candidates
            .iter()
            .copied()
            .filter(|production| self.fits(*production, budget))
            .collect();
        eligible[rng.random_range(0..eligible.len())]
    }
}

fn pick_code(codes: &[char], rng: &mut impl Rng) -> char {
    codes[rng.random_range(0..codes.len())]
}
