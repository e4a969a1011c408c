use std::collections::HashMap;

use num::BigInt;

use crate::seq::{Sequence,Step};

/// The prime numbers `2, 3, 5, 7, 11, ...` in increasing order.
///
/// Uses an incremental sieve: marking a prime's multiples is deferred until
/// the candidate reaches them, so there is no a-priori upper bound and no
/// allocation proportional to one.  Through candidate `q` the witness map
/// holds one entry per prime below `sqrt(q)`.
pub fn primes() -> Primes {
  Primes { witnesses: HashMap::new(), candidate: BigInt::from(2u8) }
}

pub struct Primes {
  /// Maps the next composite each known prime will hit to the primes
  /// responsible for it.
  witnesses: HashMap<BigInt, Vec<BigInt>>,
  candidate: BigInt
}

impl Sequence for Primes {
  type Item = BigInt;

  fn next(&mut self) -> Step<BigInt> {
    loop {
      let q = self.candidate.clone();
      self.candidate += 1;

      match self.witnesses.remove(&q) {
        None => {
          // No known prime divides q, so q is prime.  Its first relevant
          // composite is q^2; smaller multiples have smaller witnesses.
          self.witnesses.insert(&q * &q, vec![q.clone()]);
          return Ok(Some(q))
        }
        Some(ps) => {
          // q is composite; advance each witnessing prime to its next
          // multiple past q.
          for p in ps {
            let next = &p + &q;
            self.witnesses.entry(next).or_default().push(p);
          }
        }
      }
    }
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::proptest::bigs;

  #[test]
  fn first_ten() {
    let mut s = primes();
    assert_eq!(s.take_vec(10).unwrap(), bigs(&[2,3,5,7,11,13,17,19,23,29]));
  }

  // Completeness and soundness of a longer prefix against trial division.
  #[test]
  fn matches_trial_division_below_one_thousand() {
    fn is_prime(n: u64) -> bool {
      if n < 2 { return false }
      let mut d = 2;
      while d * d <= n {
        if n % d == 0 { return false }
        d += 1;
      }
      true
    }

    let expected: Vec<BigInt> =
      (0u64 .. 1000).filter(|&n| is_prime(n)).map(BigInt::from).collect();

    let mut s = primes();
    let got = s.take_vec(expected.len()).unwrap();
    assert_eq!(got, expected);
  }

  #[test]
  fn strictly_increasing() {
    let mut s = primes();
    let ps = s.take_vec(200).unwrap();
    assert!(ps.windows(2).all(|w| w[0] < w[1]));
  }
}
