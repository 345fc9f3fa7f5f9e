use serde::{Deserialize, Serialize};
use std::fmt;

use super::steps::narrate;
use super::{Locale, enumerate_divisor_pairs};
use crate::syntax::{CoeffKey, PolynomialCoeffs};

// ─── Types ──────────────────────────────────────────────────────────

/// One linear factor `a·x + b·y + c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorGroup {
  pub a: i128,
  pub b: i128,
  pub c: i128,
}

impl FactorGroup {
  pub fn new(a: i128, b: i128, c: i128) -> Self {
    Self { a, b, c }
  }
}

/// A successful split together with its narration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Factorization {
  pub group1: FactorGroup,
  pub group2: FactorGroup,
  pub steps: Vec<super::FactorStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
  /// A, B and D are all zero: nothing to cross-multiply.
  MissingQuadraticTerm,
  /// No combination of divisor pairs satisfies the three constraints.
  NoIntegerSplit,
  NonIntegerCoefficient,
  CoefficientTooLarge,
}

impl FailureReason {
  pub fn message(self, locale: Locale) -> &'static str {
    match (self, locale) {
      (FailureReason::MissingQuadraticTerm, Locale::En) => {
        "Cannot factor: the quadratic term is missing"
      }
      (FailureReason::MissingQuadraticTerm, Locale::Zh) => {
        "无法分解：缺少二次项"
      }
      (FailureReason::NoIntegerSplit, Locale::En) => {
        "This polynomial cannot be factored by cross-multiplication"
      }
      (FailureReason::NoIntegerSplit, Locale::Zh) => {
        "该多项式不能用十字相乘法分解"
      }
      (FailureReason::NonIntegerCoefficient, Locale::En) => {
        "Cannot factor: coefficients must be integers"
      }
      (FailureReason::NonIntegerCoefficient, Locale::Zh) => {
        "无法分解：系数必须是整数"
      }
      (FailureReason::CoefficientTooLarge, Locale::En) => {
        "Cannot factor: a coefficient is too large"
      }
      (FailureReason::CoefficientTooLarge, Locale::Zh) => {
        "无法分解：系数过大"
      }
    }
  }
}

impl fmt::Display for FailureReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.message(Locale::En))
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FactorResult {
  Success(Factorization),
  Failure { reason: FailureReason },
}

impl FactorResult {
  pub fn is_success(&self) -> bool {
    matches!(self, FactorResult::Success(_))
  }

  pub fn factorization(&self) -> Option<&Factorization> {
    match self {
      FactorResult::Success(factorization) => Some(factorization),
      FactorResult::Failure { .. } => None,
    }
  }

  pub fn failure_reason(&self) -> Option<FailureReason> {
    match self {
      FactorResult::Success(_) => None,
      FactorResult::Failure { reason } => Some(*reason),
    }
  }
}

/// Settings for one factorization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorOptions {
  /// Language of the narration text.
  pub locale: Locale,
  /// Largest accepted |A|, |B|, |D|, |G|, |H| or |K|. Keeps the divisor
  /// enumeration bounded for any input. A negative limit accepts nothing.
  pub max_magnitude: i128,
}

impl Default for FactorOptions {
  fn default() -> Self {
    Self {
      locale: Locale::En,
      max_magnitude: 1_000_000_000_000,
    }
  }
}

/// Integer targets of the search, named after their coefficient keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Targets {
  pub a: i128,
  pub b: i128,
  pub d: i128,
  pub g: i128,
  pub h: i128,
  pub k: i128,
}

impl Targets {
  fn magnitude(&self) -> u128 {
    [self.a, self.b, self.d, self.g, self.h, self.k]
      .iter()
      .map(|v| v.unsigned_abs())
      .max()
      .unwrap_or(0)
  }
}

// ─── Search ─────────────────────────────────────────────────────────

/// `p1·q2 + p2·q1`, or `None` on overflow.
fn cross_sum(p1: i128, q2: i128, p2: i128, q1: i128) -> Option<i128> {
  p1.checked_mul(q2)?.checked_add(p2.checked_mul(q1)?)
}

fn find_split(
  t: &Targets,
  max_magnitude: i128,
) -> Result<(FactorGroup, FactorGroup), FailureReason> {
  if t.a == 0 && t.b == 0 && t.d == 0 {
    return Err(FailureReason::MissingQuadraticTerm);
  }
  let limit = u128::try_from(max_magnitude).unwrap_or(0);
  if t.magnitude() > limit {
    return Err(FailureReason::CoefficientTooLarge);
  }

  let factors_a = enumerate_divisor_pairs(t.a);
  let factors_b = enumerate_divisor_pairs(t.b);
  let factors_k = enumerate_divisor_pairs(t.k);

  for &(a1, a2) in &factors_a {
    for &(b1, b2) in &factors_b {
      if cross_sum(a1, b2, a2, b1) != Some(t.d) {
        continue;
      }
      tracing::trace!(a1, a2, b1, b2, "xy constraint satisfied");

      for &(c1, c2) in &factors_k {
        if cross_sum(a1, c2, a2, c1) == Some(t.g)
          && cross_sum(b1, c2, b2, c1) == Some(t.h)
        {
          return Ok((FactorGroup::new(a1, b1, c1), FactorGroup::new(a2, b2, c2)));
        }
      }
    }
  }

  Err(FailureReason::NoIntegerSplit)
}

/// Single-shot search: the first `(a-pair, b-pair, c-pair)` combination, in
/// enumeration order, with
///
/// - `a1·b2 + a2·b1 = D`
/// - `a1·c2 + a2·c1 = G`
/// - `b1·c2 + b2·c1 = H`
///
/// Other valid splits are not explored, so the result is not unique when
/// several exist.
pub fn search(
  a: i128,
  b: i128,
  d: i128,
  g: i128,
  h: i128,
  k: i128,
) -> Result<(FactorGroup, FactorGroup), FailureReason> {
  let targets = Targets { a, b, d, g, h, k };
  find_split(&targets, FactorOptions::default().max_magnitude)
}

/// Factor `Ax² + Dxy + By² + Gx + Hy + K` and narrate the derivation in
/// English.
pub fn factorize(
  a: i128,
  b: i128,
  d: i128,
  g: i128,
  h: i128,
  k: i128,
) -> FactorResult {
  let targets = Targets { a, b, d, g, h, k };
  run(&targets, &FactorOptions::default())
}

/// Factor entered coefficients. Non-integer values among A, B, D, G, H, K
/// fail the attempt; C, E and F are ignored.
pub fn factorize_coeffs(
  coeffs: &PolynomialCoeffs,
  options: &FactorOptions,
) -> FactorResult {
  // Zero-check on the raw values first, so 0.0 entries count as missing.
  if coeffs.a == 0.0 && coeffs.b == 0.0 && coeffs.d == 0.0 {
    return failure(FailureReason::MissingQuadraticTerm);
  }

  let integer = |key| coeffs.integer(key);
  let targets = match (
    integer(CoeffKey::A),
    integer(CoeffKey::B),
    integer(CoeffKey::D),
    integer(CoeffKey::G),
    integer(CoeffKey::H),
    integer(CoeffKey::K),
  ) {
    (Some(a), Some(b), Some(d), Some(g), Some(h), Some(k)) => {
      Targets { a, b, d, g, h, k }
    }
    _ => return failure(FailureReason::NonIntegerCoefficient),
  };

  run(&targets, options)
}

fn run(targets: &Targets, options: &FactorOptions) -> FactorResult {
  match find_split(targets, options.max_magnitude) {
    Ok((group1, group2)) => {
      tracing::debug!(?group1, ?group2, "factorization found");
      let steps = narrate(targets, &group1, &group2, options.locale);
      FactorResult::Success(Factorization {
        group1,
        group2,
        steps,
      })
    }
    Err(reason) => failure(reason),
  }
}

fn failure(reason: FailureReason) -> FactorResult {
  tracing::debug!(%reason, "factorization failed");
  FactorResult::Failure { reason }
}
