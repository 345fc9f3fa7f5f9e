use wasm_bindgen::prelude::*;

use crate::utils::{error_json, to_json};
use crate::{
  FactorOptions, Locale, PolynomialCoeffs, enumerate_divisor_pairs,
  factorize_coeffs, solve,
};

fn options_for(locale: &str) -> FactorOptions {
  FactorOptions {
    locale: locale.parse().unwrap_or(Locale::En),
    ..FactorOptions::default()
  }
}

/// Factor the coefficients A, B, D, G, H, K and return the result as JSON.
#[wasm_bindgen]
pub fn factorize_json(
  a: f64,
  b: f64,
  d: f64,
  g: f64,
  h: f64,
  k: f64,
  locale: &str,
) -> String {
  let coeffs = PolynomialCoeffs {
    a,
    b,
    d,
    g,
    h,
    k,
    ..PolynomialCoeffs::default()
  };
  to_json(&factorize_coeffs(&coeffs, &options_for(locale)))
}

/// Divisor pairs of `n` as a JSON array of `[p, q]`.
#[wasm_bindgen]
pub fn divisor_pairs_json(n: f64) -> String {
  if n.fract() != 0.0 || !n.is_finite() {
    return "[]".to_string();
  }
  to_json(&enumerate_divisor_pairs(n as i128))
}

/// Parse a polynomial typed as text and factor it.
#[wasm_bindgen]
pub fn solve_text(input: &str, locale: &str) -> String {
  match solve(input, &options_for(locale)) {
    Ok(result) => to_json(&result),
    Err(e) => error_json(&e.to_string()),
  }
}
