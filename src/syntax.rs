use pest::iterators::Pair;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{FactorError, Rule};

/// Coefficient slots of `Ax² + By² + Cz² + Dxy + Eyz + Fzx + Gx + Hy + K`.
/// C, E and F are reserved for three-variable input and never searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoeffKey {
  A,
  B,
  C,
  D,
  E,
  F,
  G,
  H,
  K,
}

impl CoeffKey {
  pub const ALL: [CoeffKey; 9] = [
    CoeffKey::A,
    CoeffKey::B,
    CoeffKey::C,
    CoeffKey::D,
    CoeffKey::E,
    CoeffKey::F,
    CoeffKey::G,
    CoeffKey::H,
    CoeffKey::K,
  ];

  /// Display order of the two-variable form: x², xy, y², x, y, constant.
  pub const DISPLAY_ORDER: [CoeffKey; 6] = [
    CoeffKey::A,
    CoeffKey::D,
    CoeffKey::B,
    CoeffKey::G,
    CoeffKey::H,
    CoeffKey::K,
  ];

  /// The monomial a key multiplies. The constant term has none.
  pub fn term(self) -> &'static str {
    match self {
      CoeffKey::A => "x²",
      CoeffKey::B => "y²",
      CoeffKey::C => "z²",
      CoeffKey::D => "xy",
      CoeffKey::E => "yz",
      CoeffKey::F => "zx",
      CoeffKey::G => "x",
      CoeffKey::H => "y",
      CoeffKey::K => "",
    }
  }

  /// Key for a monomial `x^dx y^dy` of the two-variable form.
  pub fn from_degrees(dx: u32, dy: u32) -> Option<CoeffKey> {
    match (dx, dy) {
      (2, 0) => Some(CoeffKey::A),
      (0, 2) => Some(CoeffKey::B),
      (1, 1) => Some(CoeffKey::D),
      (1, 0) => Some(CoeffKey::G),
      (0, 1) => Some(CoeffKey::H),
      (0, 0) => Some(CoeffKey::K),
      _ => None,
    }
  }
}

impl fmt::Display for CoeffKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:?}", self)
  }
}

impl FromStr for CoeffKey {
  type Err = FactorError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    CoeffKey::ALL
      .into_iter()
      .find(|key| key.to_string().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| FactorError::InvalidCoefficient {
        key: s.trim().to_string(),
        text: String::new(),
      })
  }
}

/// Coefficients as entered. Values are real numbers; the search only
/// accepts them when they are exact integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PolynomialCoeffs {
  pub a: f64,
  pub b: f64,
  pub c: f64,
  pub d: f64,
  pub e: f64,
  pub f: f64,
  pub g: f64,
  pub h: f64,
  pub k: f64,
}

impl PolynomialCoeffs {
  /// Two-variable coefficients in the argument order A, B, D, G, H, K.
  pub fn quadratic(a: i128, b: i128, d: i128, g: i128, h: i128, k: i128) -> Self {
    Self {
      a: a as f64,
      b: b as f64,
      d: d as f64,
      g: g as f64,
      h: h as f64,
      k: k as f64,
      ..Self::default()
    }
  }

  pub fn get(&self, key: CoeffKey) -> f64 {
    match key {
      CoeffKey::A => self.a,
      CoeffKey::B => self.b,
      CoeffKey::C => self.c,
      CoeffKey::D => self.d,
      CoeffKey::E => self.e,
      CoeffKey::F => self.f,
      CoeffKey::G => self.g,
      CoeffKey::H => self.h,
      CoeffKey::K => self.k,
    }
  }

  pub fn set(&mut self, key: CoeffKey, value: f64) {
    let slot = match key {
      CoeffKey::A => &mut self.a,
      CoeffKey::B => &mut self.b,
      CoeffKey::C => &mut self.c,
      CoeffKey::D => &mut self.d,
      CoeffKey::E => &mut self.e,
      CoeffKey::F => &mut self.f,
      CoeffKey::G => &mut self.g,
      CoeffKey::H => &mut self.h,
      CoeffKey::K => &mut self.k,
    };
    *slot = value;
  }

  /// The coefficient as an exact integer, if it is one.
  pub fn integer(&self, key: CoeffKey) -> Option<i128> {
    let value = self.get(key);
    // integral f64 values below 1e30 cast to i128 exactly
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1.0e30 {
      Some(value as i128)
    } else {
      None
    }
  }
}

/// Coerce a typed coefficient the way the input form does: an empty field
/// is zero, otherwise the longest numeric prefix is used, and text without
/// one is zero.
pub fn parse_coefficient_text(text: &str) -> f64 {
  parse_leading_float(text).unwrap_or(0.0)
}

/// Longest prefix of `text` (after leading whitespace) that reads as a number.
/// `"3abc"` reads as 3, `"abc"` reads as nothing.
pub fn parse_leading_float(text: &str) -> Option<f64> {
  let candidate: String = text
    .trim_start()
    .chars()
    .take_while(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    .collect();

  (1..=candidate.len())
    .rev()
    .find_map(|end| candidate[..end].parse::<f64>().ok())
}

/// Parse a `KEY=VALUE` assignment such as `D=-7`.
pub fn parse_assignment(text: &str) -> Result<(CoeffKey, f64), FactorError> {
  let (key, value) =
    text
      .split_once('=')
      .ok_or_else(|| FactorError::InvalidCoefficient {
        key: text.to_string(),
        text: String::new(),
      })?;
  let key = key.parse::<CoeffKey>().map_err(|_| {
    FactorError::InvalidCoefficient {
      key: key.trim().to_string(),
      text: value.to_string(),
    }
  })?;
  Ok((key, parse_coefficient_text(value)))
}

/// Parse a polynomial such as `2x^2 + 7xy + 3y^2 + x + 4y - 1` into its
/// coefficients. Like terms are summed.
pub fn parse_polynomial(input: &str) -> Result<PolynomialCoeffs, FactorError> {
  if input.trim().is_empty() {
    return Err(FactorError::EmptyInput);
  }

  let program = crate::parse(input)?
    .next()
    .ok_or(FactorError::EmptyInput)?;

  let mut coeffs = PolynomialCoeffs::default();
  let mut negative = false;

  for pair in program.into_inner() {
    match pair.as_rule() {
      Rule::LeadingSign | Rule::Sign => {
        negative = pair.as_str() == "-";
      }
      Rule::Term => {
        let (key, value) = parse_term(pair)?;
        let signed = if negative { -value } else { value };
        coeffs.set(key, coeffs.get(key) + signed);
        negative = false;
      }
      _ => {}
    }
  }

  Ok(coeffs)
}

fn parse_term(pair: Pair<Rule>) -> Result<(CoeffKey, f64), FactorError> {
  let text = pair.as_str().to_string();
  let mut value = 1.0;
  let (mut dx, mut dy) = (0u32, 0u32);

  for part in pair.into_inner() {
    match part.as_rule() {
      Rule::Coefficient => {
        value = part
          .as_str()
          .parse::<f64>()
          .map_err(|_| FactorError::UnsupportedTerm(text.clone()))?;
      }
      Rule::Monomial => {
        for factor in part.into_inner() {
          let (var, power) = parse_factor(factor, &text)?;
          let slot = if var == "x" { &mut dx } else { &mut dy };
          *slot = slot
            .checked_add(power)
            .ok_or_else(|| FactorError::UnsupportedTerm(text.clone()))?;
        }
      }
      _ => {}
    }
  }

  let key = CoeffKey::from_degrees(dx, dy)
    .ok_or_else(|| FactorError::UnsupportedTerm(text.trim().to_string()))?;
  Ok((key, value))
}

fn parse_factor<'a>(
  factor: Pair<'a, Rule>,
  term: &str,
) -> Result<(&'a str, u32), FactorError> {
  let mut var = "";
  let mut power = 1;

  for part in factor.into_inner() {
    match part.as_rule() {
      Rule::Variable => var = part.as_str(),
      Rule::Exponent => {
        let exponent = part
          .into_inner()
          .next()
          .ok_or_else(|| FactorError::UnsupportedTerm(term.to_string()))?;
        power = match exponent.as_str() {
          "²" => 2,
          "¹" => 1,
          "⁰" => 0,
          digits => digits
            .parse::<u32>()
            .map_err(|_| FactorError::UnsupportedTerm(term.to_string()))?,
        };
      }
      _ => {}
    }
  }

  Ok((var, power))
}
