use crate::syntax::PolynomialCoeffs;

/// A built-in example polynomial offered next to the input form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
  pub label: &'static str,
  pub coeffs: PolynomialCoeffs,
}

/// The examples shown on the input form, in display order.
///
/// None of them has an integer split: they exercise the failure path as
/// much as the form. `practice_problem` generates factorable ones.
pub fn presets() -> Vec<Preset> {
  vec![
    Preset {
      label: "x² + 5xy + y² + 2x + 3y + 6",
      coeffs: PolynomialCoeffs::quadratic(1, 1, 5, 2, 3, 6),
    },
    Preset {
      label: "2x² + 7xy + 3y² + x + 4y - 1",
      coeffs: PolynomialCoeffs::quadratic(2, 3, 7, 1, 4, -1),
    },
    Preset {
      label: "x² + 5xy + 6y² + 5x + 6y",
      coeffs: PolynomialCoeffs::quadratic(1, 6, 5, 5, 6, 0),
    },
  ]
}
