use serde::{Deserialize, Serialize};

use super::{FactorGroup, FactorStep, Locale};
use crate::syntax::{PolynomialCoeffs, parse_leading_float};

// ─── Round trip ─────────────────────────────────────────────────────

/// Multiply `(a1·x + b1·y + c1)(a2·x + b2·y + c2)` back out.
pub fn expand(g1: &FactorGroup, g2: &FactorGroup) -> PolynomialCoeffs {
  PolynomialCoeffs::quadratic(
    g1.a * g2.a,
    g1.b * g2.b,
    g1.a * g2.b + g2.a * g1.b,
    g1.a * g2.c + g2.a * g1.c,
    g1.b * g2.c + g2.b * g1.c,
    g1.c * g2.c,
  )
}

/// The six coefficient checks of a split, one line each, in the order
/// x², xy, y², x, y, constant.
pub fn verification_lines(
  g1: &FactorGroup,
  g2: &FactorGroup,
  locale: Locale,
) -> Vec<String> {
  let labels = match locale {
    Locale::En => [
      "x² term", "xy term", "y² term", "x term", "y term", "constant term",
    ],
    Locale::Zh => ["x² 项", "xy 项", "y² 项", "x 项", "y 项", "常数项"],
  };

  let product = |label: &str, p: i128, q: i128| {
    format!("{label}: {p} × {q} = {}", p * q)
  };
  let cross = |label: &str, p1: i128, q2: i128, p2: i128, q1: i128| {
    let (left, right) = (p1 * q2, p2 * q1);
    format!(
      "{label}: {p1} × {q2} + {p2} × {q1} = {left} + {right} = {}",
      left + right
    )
  };

  vec![
    product(labels[0], g1.a, g2.a),
    cross(labels[1], g1.a, g2.b, g2.a, g1.b),
    product(labels[2], g1.b, g2.b),
    cross(labels[3], g1.a, g2.c, g2.a, g1.c),
    cross(labels[4], g1.b, g2.c, g2.b, g1.c),
    product(labels[5], g1.c, g2.c),
  ]
}

// ─── Interactive answers ────────────────────────────────────────────

/// Exact comparison of a submitted pair against an expected pair.
/// NaN never matches.
pub fn matches_expected(submitted: [f64; 2], expected: [i128; 2]) -> bool {
  submitted
    .iter()
    .zip(expected.iter())
    .all(|(s, e)| *s == *e as f64)
}

/// Raw text the learner typed into the three columns of the diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInputs {
  pub left: Option<[String; 2]>,
  pub mid: Option<[String; 2]>,
  pub right: Option<[String; 2]>,
}

impl ColumnInputs {
  pub fn with_left(mut self, first: &str, second: &str) -> Self {
    self.left = Some([first.to_string(), second.to_string()]);
    self
  }

  pub fn with_mid(mut self, first: &str, second: &str) -> Self {
    self.mid = Some([first.to_string(), second.to_string()]);
    self
  }

  pub fn with_right(mut self, first: &str, second: &str) -> Self {
    self.right = Some([first.to_string(), second.to_string()]);
    self
  }
}

fn read_pair(pair: &[String; 2]) -> [f64; 2] {
  [
    parse_leading_float(&pair[0]).unwrap_or(f64::NAN),
    parse_leading_float(&pair[1]).unwrap_or(f64::NAN),
  ]
}

/// Check the entered columns against a step's expectations. Only columns
/// that have both an expectation and an entry are compared.
pub fn validate_inputs(step: &FactorStep, inputs: &ColumnInputs) -> bool {
  [
    (&step.expected_left, &inputs.left),
    (&step.expected_mid, &inputs.mid),
    (&step.expected_right, &inputs.right),
  ]
  .into_iter()
  .all(|(expected, entered)| match (expected, entered) {
    (Some(expected), Some(entered)) => {
      matches_expected(read_pair(entered), *expected)
    }
    _ => true,
  })
}
