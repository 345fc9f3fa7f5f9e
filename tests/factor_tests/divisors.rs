use super::*;

mod ordering {
  use super::*;

  #[test]
  fn positive_composite() {
    assert_eq!(
      enumerate_divisor_pairs(6),
      vec![
        (1, 6),
        (-1, -6),
        (6, 1),
        (-6, -1),
        (2, 3),
        (-2, -3),
        (3, 2),
        (-3, -2)
      ]
    );
  }

  #[test]
  fn negative_square() {
    assert_eq!(
      enumerate_divisor_pairs(-4),
      vec![(1, -4), (-1, 4), (4, -1), (-4, 1), (2, -2), (-2, 2)]
    );
  }

  #[test]
  fn prime() {
    assert_eq!(
      enumerate_divisor_pairs(7),
      vec![(1, 7), (-1, -7), (7, 1), (-7, -1)]
    );
  }

  #[test]
  fn zero_is_sentinel() {
    assert_eq!(enumerate_divisor_pairs(0), vec![(0, 1)]);
  }
}

mod properties {
  use super::*;

  #[test]
  fn every_pair_multiplies_back() {
    for n in (-120i128..=120).filter(|&n| n != 0) {
      for (p, q) in enumerate_divisor_pairs(n) {
        assert_eq!(p * q, n, "({p}, {q}) for {n}");
      }
    }
  }

  #[test]
  fn both_orientations_and_negations() {
    let pairs = enumerate_divisor_pairs(12);
    for pair in [(3, 4), (4, 3), (-3, -4), (-4, -3), (1, 12), (-12, -1)] {
      assert!(pairs.contains(&pair), "missing {pair:?}");
    }
    assert_eq!(pairs.len(), 12);
  }

  #[test]
  fn no_duplicates() {
    for n in [36i128, -36, 49, 100] {
      let pairs = enumerate_divisor_pairs(n);
      let mut deduped = pairs.clone();
      deduped.sort();
      deduped.dedup();
      assert_eq!(deduped.len(), pairs.len(), "duplicates for {n}");
    }
  }
}
