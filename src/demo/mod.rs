//! Synthetic payloads served when no external provider is configured.
//!
//! `standalone` holds the fixed payloads of the enveloped surface. The other
//! modules build the randomized gateway payloads from an injected RNG, so a
//! seeded [`DemoSource`] makes every response reproducible.

pub mod accounts;
pub mod assistant;
pub mod compliance;
pub mod dashboard;
pub mod finops;
pub mod guardrails;
pub mod remediation;
pub mod security;
pub mod standalone;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Hands out one RNG per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource {
    seed: Option<u64>,
}

impl DemoSource {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Uniform pick from a non-empty slice.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Weighted pick from a non-empty slice of `(value, weight)` pairs.
pub(crate) fn pick_weighted<T: Copy, R: Rng + ?Sized>(rng: &mut R, choices: &[(T, u32)]) -> T {
    debug_assert!(
        choices.iter().any(|(_, weight)| *weight > 0),
        "weighted choices need at least one positive weight"
    );
    choices
        .choose_weighted(rng, |(_, weight)| *weight)
        .map(|(value, _)| *value)
        .unwrap_or(choices[0].0)
}

/// Random 12-digit AWS account id.
pub(crate) fn account_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(100_000_000_000u64..=999_999_999_999).to_string()
}
