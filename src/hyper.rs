use std::collections::VecDeque;

use num::BigInt;

use crate::error::Error;
use crate::seq::{Sequence,Step};

/// The self-indexed subsequence `a(a(n))` of a strictly increasing,
/// positive sequence `a`: position `n` (1-indexed) is kept exactly when
/// `n` has appeared as a value of `a`.
///
/// For example the hypersequence of `1, 3, 5, 7, 9, 11, 13, ...` is
/// `1, 5, 9, 13, ...`, and the hypersequence of the primes is the
/// superprimes.
///
/// Fails with `InvalidDomain` on the first pull that observes a value that
/// is not positive or does not increase.
pub fn hypersequence<S>(seq: S) -> Hypersequence<S>
  where S: Sequence<Item = BigInt>
{
  Hypersequence
    { seq
    , targets:  VecDeque::new()
    , position: BigInt::from(1u8)
    , previous: BigInt::from(0u8)
    , done:     false
    }
}

pub struct Hypersequence<S> {
  seq:      S,
  /// Values of the input not yet reached as positions.  Strict
  /// monotonicity gives `a(n) >= n`, so the next position that can match
  /// is always the front.
  targets:  VecDeque<BigInt>,
  /// 1-based position of the next input value.
  position: BigInt,
  previous: BigInt,
  done:     bool
}

impl<S> Sequence for Hypersequence<S>
  where S: Sequence<Item = BigInt>
{
  type Item = BigInt;

  fn next(&mut self) -> Step<BigInt> {
    if self.done { return Ok(None) }

    loop {
      let v = match self.seq.next()? {
        Some(v) => v,
        None    => { self.done = true; return Ok(None) }
      };

      // previous starts at 0, so this also rejects non-positive values.
      if v <= self.previous {
        self.done = true;
        return Err(Error::invalid_domain(
          "hypersequence requires a strictly increasing positive sequence"))
      }
      self.previous = v.clone();
      self.targets.push_back(v.clone());

      let matched = self.targets.front() == Some(&self.position);
      self.position += 1;
      if matched {
        self.targets.pop_front();
        return Ok(Some(v))
      }
    }
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::proptest::{big,bigs};
  use crate::seq::from_vec;
  use crate::simple::{arithmetic,naturals};

  #[test]
  fn hypersequence_of_the_odds() {
    let mut s = hypersequence(arithmetic(big(1), big(2)));
    assert_eq!(s.take_vec(5).unwrap(), bigs(&[1,5,9,13,17]));
  }

  // A006450, the superprimes.
  #[test]
  fn hypersequence_of_the_primes() {
    let mut s = hypersequence(crate::primes::primes());
    assert_eq!(s.take_vec(10).unwrap(),
               bigs(&[3,5,11,17,31,41,59,67,83,109]));
  }

  #[test]
  fn hypersequence_of_positive_naturals_is_identity() {
    let mut s = hypersequence(naturals(big(1)).unwrap());
    assert_eq!(s.take_vec(6).unwrap(), bigs(&[1,2,3,4,5,6]));
  }

  #[test]
  fn rejects_a_zero_value() {
    let mut s = hypersequence(naturals(big(0)).unwrap());
    assert!(matches!(s.next(), Err(Error::InvalidDomain(_))));
  }

  #[test]
  fn rejects_a_non_increasing_value() {
    let mut s = hypersequence(from_vec(bigs(&[1,3,3,4])));
    // 1 is emitted (position 1 matches the value 1) before the
    // violation at position 3 is observed.
    assert_eq!(s.next().unwrap(), Some(big(1)));
    assert!(matches!(s.next(), Err(Error::InvalidDomain(_))));
    assert_eq!(s.next().unwrap(), None);
  }

  #[test]
  fn finite_input_exhausts() {
    let mut s = hypersequence(from_vec(bigs(&[2,3,5])));
    // positions 2 and 3 match values 2 and 3.
    assert_eq!(s.take_vec(10).unwrap(), bigs(&[3,5]));
  }
}
