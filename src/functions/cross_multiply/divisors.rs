// ─── Divisor pairs ──────────────────────────────────────────────────

/// An ordered pair `(p, q)` with `p * q == n`.
pub type DivisorPair = (i128, i128);

/// All ordered integer pairs whose product is `n`, sign variants included.
///
/// Pairs are emitted for ascending `i` up to `isqrt(|n|)`: the pair, its
/// negation, then (when `i != j`) the swapped pair and its negation.
///
/// Zero is special-cased to the single pair `(0, 1)`. This is not every
/// factorization of zero (`(0, k)` works for any `k`), so callers must not
/// treat the result as complete when `n == 0`.
pub fn enumerate_divisor_pairs(n: i128) -> Vec<DivisorPair> {
  if n == 0 {
    return vec![(0, 1)];
  }

  let Some(abs_n) = n.checked_abs() else {
    tracing::debug!(n, "magnitude not representable, no divisor pairs");
    return Vec::new();
  };

  let mut pairs = Vec::new();
  let mut i: i128 = 1;
  while i <= abs_n / i {
    if abs_n % i == 0 {
      let j = abs_n / i;
      if n > 0 {
        pairs.push((i, j));
        pairs.push((-i, -j));
        if i != j {
          pairs.push((j, i));
          pairs.push((-j, -i));
        }
      } else {
        pairs.push((i, -j));
        pairs.push((-i, j));
        if i != j {
          pairs.push((j, -i));
          pairs.push((-j, i));
        }
      }
    }
    i += 1;
  }

  pairs
}
