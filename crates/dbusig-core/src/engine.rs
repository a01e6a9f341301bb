use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::errors::Result;
use crate::grammar::Grammar;
use crate::model::SignatureOptions;
use crate::validate::{GrammarConfig, validate_options};

/// Reusable producer of D-Bus signatures for one configuration.
///
/// Construction validates the options; every draw afterwards is infallible
/// and depends only on the random stream it is given.
#[derive(Debug, Clone)]
pub struct SignatureGenerator {
    grammar: Grammar,
}

/// Build a signature generator, failing on inconsistent options.
pub fn dbus_signatures(options: &SignatureOptions) -> Result<SignatureGenerator> {
    SignatureGenerator::new(options)
}

impl SignatureGenerator {
    pub fn new(options: &SignatureOptions) -> Result<Self> {
        let config = validate_options(options)?;
        let grammar = Grammar::new(config);
        let config = grammar.config();

        debug!(
            max_codes = config.max_codes,
            min_complete_types = config.complete_types.min,
            max_complete_types = ?config.complete_types.max,
            min_struct_len = config.struct_len.min,
            max_struct_len = ?config.struct_len.max,
            codes = %config.alphabet.codes().iter().collect::<String>(),
            arrays = config.arrays,
            structs = config.structs,
            dicts = config.dicts,
            leaf_cap = ?config.leaf_cap,
            starts = ?config.starts,
            "signature grammar built"
        );

        Ok(Self { grammar })
    }

    pub fn config(&self) -> &GrammarConfig {
        self.grammar.config()
    }

    /// Draw one signature from `rng`.
    pub fn generate(&self, rng: &mut impl Rng) -> String {
        let config = self.grammar.config();
        let count = config.complete_types.draw(rng);
        let mut signature = String::new();
        for _ in 0..count {
            self.grammar.top_level_type(rng, &mut signature);
        }
        signature
    }

    /// Draw one signature from a fresh RNG seeded with `seed`.
    pub fn generate_seeded(&self, seed: u64) -> String {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Draw `count` signatures from a single seeded stream.
    pub fn sample(&self, seed: u64, count: usize) -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..count).map(|_| self.generate(&mut rng)).collect()
    }
}
