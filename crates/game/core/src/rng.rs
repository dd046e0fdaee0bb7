//! RNG oracle for deterministic random number generation.
//!
//! Combat variance and level-up rolls draw from a trait object injected by
//! the embedder, so tests can supply a scripted sequence and assert exact
//! outcomes while normal play uses a seeded generator.
//!
//! # Determinism
//!
//! All implementations must be deterministic: given the same seed, they
//! must produce the same sequence. This is what makes a session replayable
//! from a seed plus an input trace.

/// RNG oracle for deterministic random number generation.
///
/// Implementations advance internal state on every call; cloning an oracle
/// mid-session would fork the sequence.
pub trait RngOracle: Send {
    /// Generate the next random u32 value.
    fn next_u32(&mut self) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + (self.next_u32() % span) as i32
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
/// - Implementation based on PCG-XSH-RR variant
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed using the reference initialization
    /// sequence (zero state, one step, add seed, one step).
    pub fn seed_from(seed: u64) -> Self {
        let mut state = Self::pcg_step(0);
        state = state.wrapping_add(seed);
        state = Self::pcg_step(state);
        Self { state }
    }

    /// Advance the PCG state by one LCG step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::pcg_step(self.state);
        Self::pcg_output(self.state)
    }
}

/// Scripted oracle that replays a fixed sequence of range results.
///
/// Each [`RngOracle::range_i32`] call pops the next scripted value, clamped
/// into the requested range. When the script runs out, the range minimum is
/// returned. Intended for tests that need exact roll outcomes.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: std::collections::VecDeque<i32>,
}

impl ScriptedRng {
    pub fn new(rolls: impl IntoIterator<Item = i32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    /// Number of scripted rolls not yet consumed.
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(0).max(0) as u32
    }

    fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        match self.rolls.pop_front() {
            Some(roll) if min < max => roll.clamp(min, max),
            _ => min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_same_sequence() {
        let mut a = PcgRng::seed_from(42);
        let mut b = PcgRng::seed_from(42);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = PcgRng::seed_from(1);
        let mut b = PcgRng::seed_from(2);
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let mut rng = PcgRng::seed_from(7);
        let mut seen = [false; 3];
        for _ in 0..256 {
            let roll = rng.range_i32(0, 2);
            assert!((0..=2).contains(&roll));
            seen[roll as usize] = true;
        }
        assert!(seen.iter().all(|&hit| hit), "all values in [0, 2] reachable");
    }

    #[test]
    fn degenerate_range_returns_min() {
        let mut rng = PcgRng::seed_from(7);
        assert_eq!(rng.range_i32(5, 5), 5);
        assert_eq!(rng.range_i32(5, 3), 5);
    }

    #[test]
    fn scripted_rolls_replay_in_order_then_fall_back_to_min() {
        let mut rng = ScriptedRng::new([2, 0, 99]);
        assert_eq!(rng.range_i32(0, 2), 2);
        assert_eq!(rng.range_i32(0, 2), 0);
        assert_eq!(rng.range_i32(0, 2), 2, "out-of-range roll clamps");
        assert_eq!(rng.range_i32(0, 2), 0, "exhausted script yields min");
        assert_eq!(rng.remaining(), 0);
    }
}
