//! MT19937 Mersenne Twister PRNG with multi-source entropy seeding.
//!
//! This crate provides the classic 32-bit Mersenne Twister (MT19937)
//! generator with a seeding scheme that mixes four independent entropy
//! sources — the operating system's preferred cryptographic random
//! source, the wall clock, a monotonic high-resolution counter, and the
//! CPU cycle counter — through a double-pass FNV-1a hash before the
//! result is expanded into the generator's 624-word state.
//!
//! This is **not** a CSPRNG: tempered MT19937 output is predictable after
//! observing 624 consecutive values. The entropy-mixed seeding only makes
//! the starting point hard to guess; it adds no security to the stream.
//!
//! # Architecture
//!
//! ```text
//! EntropySource   (capability — OS CSPRNG, wall clock, perf counter, TSC)
//!     ↓ consumed by
//! collector       (wrapping add + double-pass FNV-1a mix → one u32 seed)
//!     ↓ feeds
//! Generator       (MT19937 — 624-word state, twist every 624 outputs)
//! ```
//!
//! # Examples
//!
//! Deterministic generation from an explicit seed:
//!
//! ```
//! use mtrand::Generator;
//!
//! let mut a = Generator::with_seed(5489);
//! let mut b = Generator::with_seed(5489);
//!
//! assert_eq!(a.next_u32(), 3_499_211_612);
//! assert_eq!(b.next_u32(), 3_499_211_612);
//! assert_eq!(a.next_u32(), b.next_u32());
//! ```
//!
//! Auto-seeding from the host's entropy sources:
//!
//! ```no_run
//! use mtrand::Generator;
//!
//! let mut rng = Generator::new().expect("OS random source unavailable");
//! let roll = rng.next_bounded(6) + 1;
//! assert!((1..=6).contains(&roll));
//! ```

#![deny(clippy::all)]

pub mod entropy;
pub mod error;

mod generator;

pub use generator::Generator;
