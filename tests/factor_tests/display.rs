use super::*;

mod polynomial {
  use super::*;

  #[test]
  fn presets_render_as_labelled() {
    for preset in presets() {
      assert_eq!(format_polynomial(&preset.coeffs), preset.label);
    }
  }

  #[test]
  fn unit_and_negative_coefficients() {
    assert_eq!(
      format_polynomial(&PolynomialCoeffs::quadratic(-1, 1, -1, 0, -3, 2)),
      "-x² - xy + y² - 3y + 2"
    );
  }

  #[test]
  fn constant_one_is_kept() {
    assert_eq!(
      format_polynomial(&PolynomialCoeffs::quadratic(1, 1, 0, 0, 0, 1)),
      "x² + y² + 1"
    );
  }

  #[test]
  fn zero_polynomial() {
    assert_eq!(format_polynomial(&PolynomialCoeffs::default()), "0");
  }
}

mod groups {
  use super::*;

  #[test]
  fn signs_inline() {
    assert_eq!(format_group(&FactorGroup::new(2, -3, -1)), "(2x - 3y - 1)");
  }

  #[test]
  fn zero_terms_dropped() {
    assert_eq!(format_group(&FactorGroup::new(1, 0, 0)), "(x)");
    assert_eq!(format_group(&FactorGroup::new(0, 1, -1)), "(y - 1)");
    assert_eq!(format_group(&FactorGroup::new(0, 0, 0)), "(0)");
  }

  #[test]
  fn pair_of_groups() {
    assert_eq!(
      format_factorization(
        &FactorGroup::new(1, 0, -2),
        &FactorGroup::new(1, 1, 3)
      ),
      "(x - 2)(x + y + 3)"
    );
  }
}
