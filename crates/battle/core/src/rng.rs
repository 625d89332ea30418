//! RNG oracle for deterministic damage rolls.
//!
//! Battles must replay identically from a single `u64` seed, so the engine
//! never carries mutable RNG state. Instead it derives a fresh seed per turn
//! from `(battle seed, turn nonce)` and hands it to a stateless oracle.
//! Tests substitute an oracle with scripted rolls.

/// Stateless source of randomness for the engine.
///
/// Implementations must be deterministic: the same seed always produces the
/// same value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform integer in `[0, bound)`.
    ///
    /// Used for the per-turn damage roll. Returns 0 for `bound <= 1`.
    fn roll_below(&self, seed: u64, bound: u32) -> u32 {
        if bound <= 1 {
            return 0;
        }
        self.next_u32(seed) % bound
    }
}

/// PCG random number generator (PCG-XSH-RR variant).
///
/// Fast, small-state, and statistically solid; the standard oracle used by
/// the runtime. See <https://www.pcg-random.org/>.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// LCG state advance: `state' = state × multiplier + increment (mod 2^64)`.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Compute a per-turn seed from the battle seed and turn nonce.
///
/// `context` distinguishes independent rolls within the same turn; the damage
/// roll uses context 0.
pub fn compute_seed(battle_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64-style mixing: combine the entropy sources, then avalanche.
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
