use crate::functions::cross_multiply::FactorGroup;
use crate::syntax::{CoeffKey, PolynomialCoeffs};

/// Format a real coefficient: integral values without a fraction part.
fn fmt_number(value: f64) -> String {
  if value.fract() == 0.0 && value.abs() < 1.0e15 {
    format!("{}", value as i64)
  } else {
    format!("{value}")
  }
}

/// Join signed terms into `t1 + t2 - t3`. Unit coefficients are elided in
/// front of a variable, zero terms are dropped, and an empty sum is `0`.
fn join_terms<'a>(terms: impl IntoIterator<Item = (f64, &'a str)>) -> String {
  let mut out = String::new();

  for (coeff, var) in terms {
    if coeff == 0.0 {
      continue;
    }
    let magnitude = coeff.abs();
    let body = if magnitude == 1.0 && !var.is_empty() {
      var.to_string()
    } else {
      format!("{}{var}", fmt_number(magnitude))
    };

    if out.is_empty() {
      if coeff < 0.0 {
        out.push('-');
      }
    } else {
      out.push_str(if coeff < 0.0 { " - " } else { " + " });
    }
    out.push_str(&body);
  }

  if out.is_empty() {
    "0".to_string()
  } else {
    out
  }
}

/// `Ax² + Dxy + By² + Gx + Hy + K` as text, e.g. `2x² + 7xy + 3y² + x + 4y - 1`.
pub fn format_polynomial(coeffs: &PolynomialCoeffs) -> String {
  join_terms(
    CoeffKey::DISPLAY_ORDER
      .iter()
      .map(|&key| (coeffs.get(key), key.term())),
  )
}

/// One factor as `(a·x + b·y + c)`, e.g. `(2x - y + 3)`.
pub fn format_group(group: &FactorGroup) -> String {
  format!(
    "({})",
    join_terms([
      (group.a as f64, "x"),
      (group.b as f64, "y"),
      (group.c as f64, ""),
    ])
  )
}

pub fn format_factorization(g1: &FactorGroup, g2: &FactorGroup) -> String {
  format!("{}{}", format_group(g1), format_group(g2))
}
