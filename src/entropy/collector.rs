//! Seed derivation: multi-source gathering and FNV-1a mixing.
//!
//! Combines the four samples of an [`EntropySource`] into one 32-bit
//! seed. No single source is a point of predictability: the OS random
//! sample anchors the base, the clocks and cycle counter perturb it, and
//! every combination step runs through [`mix`].

use crate::entropy::source::EntropySource;
use crate::error::EntropyError;

/// FNV-1a 32-bit offset basis.
const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 16_777_619;

/// Combines two 32-bit values into one via byte-wise FNV-1a hashing.
///
/// Hashes the 8 little-endian bytes of `(a, b)` starting from the FNV
/// offset basis, then hashes the same 8 bytes a second time over the
/// running value. The double pass is part of the seeding pipeline's
/// contract and changes the final seed distribution; it must not be
/// collapsed to a single pass.
pub fn mix(a: u32, b: u32) -> u32 {
    let mut data = [0u8; 8];
    data[..4].copy_from_slice(&a.to_le_bytes());
    data[4..].copy_from_slice(&b.to_le_bytes());

    let mut hash = FNV_OFFSET_BASIS;
    for _ in 0..2 {
        for &byte in &data {
            hash ^= u32::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
    }
    hash
}

/// Derives a 32-bit seed from the four samples of `source`.
///
/// Pipeline:
/// 1. `base` = hardware sample + wall-clock millis (wrapping add).
/// 2. `counter_mix` = `mix(base, performance_counter)`.
/// 3. `cycle_mix` = `mix(base, cpu_cycles)`.
/// 4. seed = `mix(base, cycle_mix)`.
///
/// `counter_mix` is computed and logged but not folded into the final
/// seed, matching the historical pipeline byte for byte. A derived seed
/// of zero is returned as-is; zero has no sentinel meaning here.
///
/// # Errors
/// [`EntropyError::SourceFailed`] if the hardware sample cannot be
/// gathered. No other step can fail.
pub fn derive_seed(source: &mut dyn EntropySource) -> Result<u32, EntropyError> {
    let base = source.hardware()?.wrapping_add(source.wall_clock());
    log::trace!("entropy base (hardware + clock): {}", base);

    let counter_mix = mix(base, source.performance_counter());
    log::trace!("performance counter mix: {}", counter_mix);

    let cycle_mix = mix(base, source.cpu_cycles());
    log::trace!("cpu cycle mix: {}", cycle_mix);

    let seed = mix(base, cycle_mix);
    log::debug!("derived seed: {}", seed);
    Ok(seed)
}
