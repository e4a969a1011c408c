use num::BigInt;
use proptest::prelude::*;

/// Shared helpers for the test modules.

pub fn big(v: i64) -> BigInt { BigInt::from(v) }

pub fn bigs(vs: &[i64]) -> Vec<BigInt> {
  vs.iter().map(|&v| BigInt::from(v)).collect()
}

/// An arbitrary sequence element.  Kept small so O(n^2) combinators stay
/// cheap under proptest's case counts.
pub fn element() -> impl Strategy<Value = BigInt> {
  (-1000i64 .. 1000).prop_map(BigInt::from)
}
