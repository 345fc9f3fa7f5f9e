use super::*;

fn assert_round_trip(result: &FactorResult, coeffs: &PolynomialCoeffs) {
  let f = result.factorization().expect("expected a factorization");
  assert_eq!(expand(&f.group1, &f.group2), *coeffs);
}

mod success {
  use super::*;

  #[test]
  fn first_match_is_positive_split() {
    let (g1, g2) = search(1, 6, 5, 5, 13, 6).unwrap();
    assert_eq!(g1, FactorGroup::new(1, 2, 3));
    assert_eq!(g2, FactorGroup::new(1, 3, 2));
  }

  #[test]
  fn constraints_hold_exactly() {
    let f = sample();
    let (g1, g2) = (f.group1, f.group2);
    assert_eq!(g1.a * g2.a, 1);
    assert_eq!(g1.b * g2.b, 6);
    assert_eq!(g1.a * g2.b + g2.a * g1.b, 5);
    assert_eq!(g1.a * g2.c + g2.a * g1.c, 5);
    assert_eq!(g1.b * g2.c + g2.b * g1.c, 13);
    assert_eq!(g1.c * g2.c, 6);
  }

  #[test]
  fn zero_constant() {
    // x² + 3xy + 2y² + x + y
    let result = factorize(1, 2, 3, 1, 1, 0);
    let f = result.factorization().unwrap();
    assert_eq!(f.group1, FactorGroup::new(1, 1, 0));
    assert_eq!(f.group2, FactorGroup::new(1, 2, 1));
  }

  #[test]
  fn zero_y_squared_with_negative_constant() {
    // (x - 2)(x + y + 3)
    let (g1, g2) = search(1, 0, 1, 1, -2, -6).unwrap();
    assert_eq!(g1, FactorGroup::new(1, 0, -2));
    assert_eq!(g2, FactorGroup::new(1, 1, 3));
  }

  #[test]
  fn mixed_signs_round_trip() {
    // (2x - y + 1)(x + 3y - 2)
    let coeffs = PolynomialCoeffs::quadratic(2, -3, 5, -3, 5, -2);
    let result = factorize_coeffs(&coeffs, &FactorOptions::default());
    assert_round_trip(&result, &coeffs);
  }

  #[test]
  fn generated_problems_round_trip() {
    for seed in 0..200 {
      let problem = practice_problem(Some(seed), 6);
      let result = factorize_coeffs(&problem.coeffs, &FactorOptions::default());
      assert_round_trip(&result, &problem.coeffs);
    }
  }

  #[test]
  fn generated_problems_at_largest_bound_factor() {
    for seed in 0..10 {
      let problem = practice_problem(Some(seed), MAX_PRACTICE_BOUND);
      let result = factorize_coeffs(&problem.coeffs, &FactorOptions::default());
      assert!(result.is_success(), "seed {seed}: {result:?}");
      assert_round_trip(&result, &problem.coeffs);
    }
  }

  #[test]
  fn oversized_bound_still_factors() {
    let problem = practice_problem(Some(1), 10i128.pow(20));
    let result = factorize_coeffs(&problem.coeffs, &FactorOptions::default());
    assert!(result.is_success());
  }

  #[test]
  fn reserved_slots_are_ignored() {
    let mut coeffs = PolynomialCoeffs::quadratic(1, 6, 5, 5, 13, 6);
    coeffs.set(CoeffKey::C, 4.0);
    coeffs.set(CoeffKey::E, -2.0);
    let result = factorize_coeffs(&coeffs, &FactorOptions::default());
    assert!(result.is_success());
  }

  #[test]
  fn search_matches_narrated_result() {
    let f = sample();
    assert_eq!(search(1, 6, 5, 5, 13, 6).unwrap(), (f.group1, f.group2));
  }
}

mod failure {
  use super::*;

  #[test]
  fn degenerate_polynomial() {
    for (g, h, k) in [(0, 0, 0), (1, 2, 3), (-5, 0, 7)] {
      assert_eq!(
        factorize(0, 0, 0, g, h, k).failure_reason(),
        Some(FailureReason::MissingQuadraticTerm)
      );
    }
  }

  #[test]
  fn sum_of_squares_plus_one() {
    assert_eq!(
      factorize(1, 1, 0, 0, 0, 1).failure_reason(),
      Some(FailureReason::NoIntegerSplit)
    );
  }

  #[test]
  fn first_preset_has_no_split() {
    // a1·a2 = 1 and b1·b2 = 1 only allow D = ±2
    assert_eq!(
      factorize(1, 1, 5, 2, 3, 6).failure_reason(),
      Some(FailureReason::NoIntegerSplit)
    );
  }

  #[test]
  fn second_preset_has_no_split() {
    // (2x + y + c1)(x + 3y + c2) needs c2 = -1/5
    assert_eq!(
      factorize(2, 3, 7, 1, 4, -1).failure_reason(),
      Some(FailureReason::NoIntegerSplit)
    );
  }

  #[test]
  fn zero_sentinel_baseline() {
    // x² is (x)(x), but B = 0 only offers (0, 1), forcing an xy term.
    let first = factorize(1, 0, 0, 0, 0, 0);
    assert_eq!(first.failure_reason(), Some(FailureReason::NoIntegerSplit));
    assert_eq!(first, factorize(1, 0, 0, 0, 0, 0));
  }

  #[test]
  fn zero_sentinel_misses_difference_of_squares() {
    assert_eq!(
      factorize(1, -1, 0, 0, 0, 0).failure_reason(),
      Some(FailureReason::NoIntegerSplit)
    );
  }

  #[test]
  fn non_integer_coefficient() {
    let mut coeffs = PolynomialCoeffs::quadratic(1, 6, 5, 5, 13, 6);
    coeffs.set(CoeffKey::G, 5.5);
    let result = factorize_coeffs(&coeffs, &FactorOptions::default());
    assert_eq!(
      result.failure_reason(),
      Some(FailureReason::NonIntegerCoefficient)
    );
  }

  #[test]
  fn zero_floats_count_as_missing() {
    let mut coeffs = PolynomialCoeffs::default();
    coeffs.set(CoeffKey::G, 0.5);
    let result = factorize_coeffs(&coeffs, &FactorOptions::default());
    assert_eq!(
      result.failure_reason(),
      Some(FailureReason::MissingQuadraticTerm)
    );
  }

  #[test]
  fn magnitude_limit() {
    let options = FactorOptions {
      max_magnitude: 100,
      ..FactorOptions::default()
    };
    let coeffs = PolynomialCoeffs::quadratic(1, 1, 2, 0, 0, 1000);
    assert_eq!(
      factorize_coeffs(&coeffs, &options).failure_reason(),
      Some(FailureReason::CoefficientTooLarge)
    );
    assert_eq!(
      factorize(10_000_000_000_000, 1, 0, 0, 0, 0).failure_reason(),
      Some(FailureReason::CoefficientTooLarge)
    );
  }

  #[test]
  fn negative_limit_accepts_nothing() {
    let options = FactorOptions {
      max_magnitude: -1_000,
      ..FactorOptions::default()
    };
    let coeffs = PolynomialCoeffs::quadratic(1, 6, 5, 5, 13, 6);
    assert_eq!(
      factorize_coeffs(&coeffs, &options).failure_reason(),
      Some(FailureReason::CoefficientTooLarge)
    );
  }

  #[test]
  fn failure_messages_are_localized() {
    assert_eq!(
      FailureReason::MissingQuadraticTerm.message(Locale::Zh),
      "无法分解：缺少二次项"
    );
    assert_eq!(
      FailureReason::NoIntegerSplit.to_string(),
      "This polynomial cannot be factored by cross-multiplication"
    );
  }
}
