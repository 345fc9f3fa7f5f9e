use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use serde::Serialize;

use crate::functions::cross_multiply::{FactorGroup, expand};
use crate::syntax::PolynomialCoeffs;

/// Largest accepted `bound` for generated problems. Every coefficient of the
/// expansion stays within `2 · bound²`, below the default search limit.
pub const MAX_PRACTICE_BOUND: i128 = 500_000;

/// A generated exercise together with the split it was built from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PracticeProblem {
  pub coeffs: PolynomialCoeffs,
  pub group1: FactorGroup,
  pub group2: FactorGroup,
}

fn nonzero(rng: &mut dyn rand::RngCore, bound: i128) -> i128 {
  let magnitude = rng.gen_range(1..=bound);
  if rng.gen_bool(0.5) {
    -magnitude
  } else {
    magnitude
  }
}

/// Draw two factor groups with nonzero entries in `[-bound, bound]` and
/// multiply them out. With A, B and K all nonzero every divisor pair of
/// the true split is enumerated, so the search always finds a split.
///
/// `bound` is clamped to `1..=MAX_PRACTICE_BOUND`.
pub fn random_problem(
  rng: &mut dyn rand::RngCore,
  bound: i128,
) -> PracticeProblem {
  let bound = bound.clamp(1, MAX_PRACTICE_BOUND);
  let group1 =
    FactorGroup::new(nonzero(rng, bound), nonzero(rng, bound), nonzero(rng, bound));
  let group2 =
    FactorGroup::new(nonzero(rng, bound), nonzero(rng, bound), nonzero(rng, bound));

  PracticeProblem {
    coeffs: expand(&group1, &group2),
    group1,
    group2,
  }
}

/// A practice problem from a seeded generator, or from `thread_rng()` when
/// no seed is given.
pub fn practice_problem(seed: Option<u64>, bound: i128) -> PracticeProblem {
  match seed {
    Some(seed) => random_problem(&mut ChaCha8Rng::seed_from_u64(seed), bound),
    None => random_problem(&mut rand::thread_rng(), bound),
  }
}

/// Serialize `value`, or an `{"error": ...}` object if that fails.
pub fn to_json<T: Serialize>(value: &T) -> String {
  serde_json::to_string(value).unwrap_or_else(|e| error_json(&e.to_string()))
}

pub fn error_json(message: &str) -> String {
  serde_json::json!({ "error": message }).to_string()
}
