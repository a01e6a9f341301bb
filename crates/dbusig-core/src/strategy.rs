//! proptest integration.
//!
//! The framework draws a `u64` seed and the generator expands it into a
//! signature, so persisted failures replay exactly.
//!
//! Shrinking acts on the seed, not on the signature. A shrunk value is the
//! signature of a smaller seed: still valid for the same options, but
//! unrelated in shape to the failing one, so a minimized counterexample is
//! not structurally simpler than the original.

use proptest::prelude::*;

use crate::engine::SignatureGenerator;
use crate::errors::Result;
use crate::model::SignatureOptions;

impl SignatureGenerator {
    pub fn into_strategy(self) -> impl Strategy<Value = String> {
        any::<u64>().prop_map(move |seed| self.generate_seeded(seed))
    }
}

/// Strategy yielding signatures for `options`; fails on invalid options.
///
/// The strategy owns its generator and does not borrow `options`.
pub fn dbus_signature_strategy(
    options: &SignatureOptions,
) -> Result<impl Strategy<Value = String> + use<>> {
    Ok(SignatureGenerator::new(options)?.into_strategy())
}
