use num::BigInt;

use crate::seq::{Sequence,Step};
use crate::traits::Ring;

/// Convolution of two sequences:
/// `out[n] = sum of a[k] * b[n-k] for k = 0 .. n`.
///
/// Keeps growing prefixes of both inputs, so term `n` costs O(n) work and
/// the buffers hold `n+1` values each.  One value is pulled from each input
/// per output term; the output exhausts when either input does.
pub fn convolution<A, B>(a: A, b: B) -> Convolution<A,B>
  where
  A: Sequence,
  A::Item: Ring,
  B: Sequence<Item = A::Item>
{
  Convolution { a, b, xs: Vec::new(), ys: Vec::new(), done: false }
}

pub struct Convolution<A: Sequence, B> {
  a:    A,
  b:    B,
  xs:   Vec<A::Item>,
  ys:   Vec<A::Item>,
  done: bool
}

impl<A, B> Sequence for Convolution<A,B>
  where
  A: Sequence,
  A::Item: Ring,
  B: Sequence<Item = A::Item>
{
  type Item = A::Item;

  fn next(&mut self) -> Step<A::Item> {
    if self.done { return Ok(None) }

    let x = self.a.next()?;
    let y = self.b.next()?;
    match (x, y) {
      (Some(x), Some(y)) => {
        self.xs.push(x);
        self.ys.push(y);
      }
      _ => { self.done = true; return Ok(None) }
    }

    let mut out = <A::Item as Ring>::zero();
    for (a, b) in self.xs.iter().zip(self.ys.iter().rev()) {
      out = Ring::add(&out, &Ring::mul(a, b));
    }
    Ok(Some(out))
  }
}


/// The binomial transform `out[n] = sum of C(n,k) * s[k]`, or with
/// `invert` the signed inverse `out[n] = sum of (-1)^(n-k) C(n,k) * s[k]`.
///
/// The binomial coefficients are kept as one row of Pascal's triangle and
/// updated in place each term, and the input prefix is buffered in full,
/// so term `n` costs O(n) work.
pub fn binomial_transform<S>(seq: S, invert: bool) -> BinomialTransform<S>
  where S: Sequence, S::Item: Ring
{
  BinomialTransform
    { seq, invert, prefix: Vec::new(), row: Vec::new(), done: false }
}

pub struct BinomialTransform<S: Sequence> {
  seq:    S,
  invert: bool,
  prefix: Vec<S::Item>,
  /// Row n of Pascal's triangle: `row[k] = C(n,k)`.
  row:    Vec<BigInt>,
  done:   bool
}

impl<S> Sequence for BinomialTransform<S>
  where S: Sequence, S::Item: Ring
{
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    match self.seq.next()? {
      Some(v) => self.prefix.push(v),
      None    => { self.done = true; return Ok(None) }
    }

    // Row update: C(n,k) = C(n-1,k-1) + C(n-1,k), edges stay 1.
    if self.row.is_empty() {
      self.row.push(BigInt::from(1u8));
    } else {
      let n = self.row.len();
      self.row.push(BigInt::from(1u8));
      for k in (1 .. n).rev() {
        let prev = self.row[k - 1].clone();
        self.row[k] += prev;
      }
    }

    let n = self.prefix.len() - 1;
    let mut out = <S::Item as Ring>::zero();
    for (k, s) in self.prefix.iter().enumerate() {
      let term = Ring::mul(&Ring::from_integer(&self.row[k]), s);
      let term =
        if self.invert && (n - k) % 2 == 1 { Ring::negate(&term) }
        else                               { term };
      out = Ring::add(&out, &term);
    }
    Ok(Some(out))
  }
}
