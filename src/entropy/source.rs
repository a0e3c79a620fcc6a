//! EntropySource trait and the production host implementation.
//!
//! Defines the capability seam between the seed-derivation pipeline and
//! the platform facilities it samples. The pipeline only ever sees this
//! trait, so tests can drive it with deterministic fakes and the
//! platform-specific reads stay confined to [`SystemEntropy`].

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use crate::error::EntropyError;

/// Capability providing raw 32-bit entropy samples from the host.
///
/// Implementations supply four independent sources. Only the hardware
/// source can fail; the remaining three are clock-derived and always
/// produce a value. Samples are ephemeral: the collector mixes them into
/// a seed and discards them.
pub trait EntropySource {
    /// Returns 4 bytes from the OS preferred cryptographic random
    /// source, as a little-endian `u32`.
    ///
    /// # Errors
    /// [`EntropyError::SourceFailed`] if the OS call reports failure.
    fn hardware(&mut self) -> Result<u32, EntropyError>;

    /// Returns the current wall-clock time as milliseconds since the
    /// Unix epoch, truncated to 32 bits.
    fn wall_clock(&mut self) -> u32;

    /// Returns a monotonic high-resolution counter value, truncated to
    /// 32 bits. Successive reads are non-decreasing modulo truncation.
    fn performance_counter(&mut self) -> u32;

    /// Returns a CPU cycle counter sample folded to 32 bits.
    ///
    /// On platforms without an accessible cycle counter a monotonic
    /// clock reading is substituted. The value carries low-order timing
    /// jitter, not cryptographic strength.
    fn cpu_cycles(&mut self) -> u32;
}

/// Production entropy source backed by the host platform.
///
/// Hardware bytes come from the [`getrandom`] crate (BCryptGenRandom,
/// `getrandom(2)`, or equivalent), the wall clock from [`SystemTime`],
/// and the high-resolution counter from [`Instant`] deltas against an
/// anchor captured at construction. On x86_64 the cycle source is
/// `rdtsc`; elsewhere it falls back to the monotonic clock.
pub struct SystemEntropy {
    anchor: Instant,
}

impl SystemEntropy {
    /// Creates a source anchored at the current instant.
    pub fn new() -> Self {
        SystemEntropy {
            anchor: Instant::now(),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for SystemEntropy {
    fn hardware(&mut self) -> Result<u32, EntropyError> {
        let mut bytes = [0u8; 4];
        getrandom::fill(&mut bytes).map_err(|e| {
            log::warn!("OS random source failed: {}", e);
            EntropyError::SourceFailed
        })?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn wall_clock(&mut self) -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u32)
            .unwrap_or(0)
    }

    fn performance_counter(&mut self) -> u32 {
        self.anchor.elapsed().as_nanos() as u32
    }

    #[cfg(target_arch = "x86_64")]
    fn cpu_cycles(&mut self) -> u32 {
        // Low-order TSC jitter; the >>12 fold pulls fast-moving bits down.
        let tsc = unsafe { core::arch::x86_64::_rdtsc() };
        (tsc ^ (tsc >> 12)) as u32
    }

    #[cfg(not(target_arch = "x86_64"))]
    fn cpu_cycles(&mut self) -> u32 {
        let ticks = self.anchor.elapsed().as_nanos() as u64;
        (ticks ^ (ticks >> 12)) as u32
    }
}
