//! Entropy gathering subsystem for generator seeding.
//!
//! Collects raw unpredictable values from up to four independent host
//! sources and folds them into a single 32-bit seed via repeated FNV-1a
//! hashing. Used only when the caller does not supply an explicit seed.

pub mod collector;
pub mod source;

pub use collector::{derive_seed, mix};
pub use source::{EntropySource, SystemEntropy};
