//! Randomized D-Bus signature generation for property-based tests.
//!
//! A [`SignatureGenerator`] is built once from [`SignatureOptions`] and then
//! drawn from repeatedly. Every draw is a grammatical signature that honors
//! the configured size bounds and exclusions.

pub mod alphabet;
pub mod engine;
pub mod errors;
mod grammar;
pub mod model;
pub mod schema;
pub mod strategy;
pub mod validate;

pub use alphabet::{Alphabet, Exclusions, StartSymbols, TYPE_CODES, VARIANT};
pub use engine::{SignatureGenerator, dbus_signatures};
pub use errors::{Result, SignatureError};
pub use model::SignatureOptions;
pub use schema::options_json_schema;
pub use strategy::dbus_signature_strategy;
pub use validate::{CountRange, GrammarConfig, LeafCap, validate_options};
