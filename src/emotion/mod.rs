// SPDX-License-Identifier: MPL-2.0
//! Stand-in emotion "detector".
//!
//! No signal is analyzed: [`RandomEmotionStub`] draws a label uniformly at
//! random. The random source is injectable so demos and tests can replay a
//! fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::emotion::EmotionLabel;

/// Picks a uniformly random [`EmotionLabel`] on every call.
///
/// ```
/// use emotion_lens::emotion::RandomEmotionStub;
///
/// let mut a = RandomEmotionStub::seeded(7);
/// let mut b = RandomEmotionStub::seeded(7);
/// assert_eq!(a.detect(), b.detect());
/// ```
#[derive(Debug, Clone)]
pub struct RandomEmotionStub<R = StdRng> {
    rng: R,
}

impl RandomEmotionStub<StdRng> {
    /// Seeds from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeds deterministically.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Uses `seed` when given, entropy otherwise.
    #[must_use]
    pub fn with_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> RandomEmotionStub<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn detect(&mut self) -> EmotionLabel {
        EmotionLabel::ALL[self.rng.gen_range(0..EmotionLabel::ALL.len())]
    }
}

impl Default for RandomEmotionStub<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn same_seed_same_sequence() {
        let mut first = RandomEmotionStub::seeded(42);
        let mut second = RandomEmotionStub::seeded(42);
        let a: Vec<_> = (0..5).map(|_| first.detect()).collect();
        let b: Vec<_> = (0..5).map(|_| second.detect()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn draws_are_roughly_uniform() {
        const DRAWS: usize = 10_000;
        let mut stub = RandomEmotionStub::seeded(0x5eed);
        let mut counts: HashMap<EmotionLabel, usize> = HashMap::new();
        for _ in 0..DRAWS {
            *counts.entry(stub.detect()).or_insert(0) += 1;
        }

        // Expected 2000 per label, std dev 40; 5 sigma keeps this robust.
        let expected = DRAWS / EmotionLabel::ALL.len();
        for label in EmotionLabel::ALL {
            let count = counts.get(&label).copied().unwrap_or(0);
            assert!(
                count.abs_diff(expected) <= 200,
                "{label}: {count} draws, expected about {expected}"
            );
        }
    }

    #[test]
    fn accepts_any_rng() {
        let mut stub = RandomEmotionStub::new(rand::rngs::mock::StepRng::new(0, 0));
        assert!(EmotionLabel::ALL.contains(&stub.detect()));
    }

    #[test]
    fn optional_seed_is_honored() {
        let mut seeded = RandomEmotionStub::with_optional_seed(Some(9));
        let mut reference = RandomEmotionStub::seeded(9);
        assert_eq!(seeded.detect(), reference.detect());
    }
}
