use num::BigInt;

use crate::error::Error;
use crate::seq::{Sequence,Step};

/// The natural numbers `offset, offset+1, offset+2, ...`
///
/// Fails with `InvalidArgument` if `offset` is negative.
pub fn naturals(offset: BigInt) -> Result<Naturals, Error> {
  if offset.sign() == num::bigint::Sign::Minus {
    return Err(Error::invalid_argument("naturals: offset must be non-negative"))
  }
  Ok(Naturals { next: offset })
}

pub struct Naturals {
  next: BigInt
}

impl Sequence for Naturals {
  type Item = BigInt;
  fn next(&mut self) -> Step<BigInt> {
    let result = self.next.clone();
    self.next += 1;
    Ok(Some(result))
  }
}


/// All integers in the order `0, 1, -1, 2, -2, ...`
pub fn integers() -> Integers {
  Integers { magnitude: BigInt::from(0u8), negative: true }
}

pub struct Integers {
  magnitude: BigInt,
  negative:  bool
}

impl Sequence for Integers {
  type Item = BigInt;
  fn next(&mut self) -> Step<BigInt> {
    // Zero is emitted once, through the negative branch.
    let result =
      if self.negative { -self.magnitude.clone() }
      else             {  self.magnitude.clone() };
    if self.negative { self.magnitude += 1 }
    self.negative = !self.negative;
    Ok(Some(result))
  }
}


/// The arithmetic progression `start, start+step, start+2*step, ...`
/// `step` may be any integer, including zero or negative.
pub fn arithmetic(start: BigInt, step: BigInt) -> Arithmetic {
  Arithmetic { next: start, step }
}

pub struct Arithmetic {
  next: BigInt,
  step: BigInt
}

impl Sequence for Arithmetic {
  type Item = BigInt;
  fn next(&mut self) -> Step<BigInt> {
    let result = self.next.clone();
    self.next += &self.step;
    Ok(Some(result))
  }
}


/// The geometric progression `start, start*ratio, start*ratio^2, ...`
pub fn geometric(start: BigInt, ratio: BigInt) -> Geometric {
  Geometric { next: start, ratio }
}

pub struct Geometric {
  next:  BigInt,
  ratio: BigInt
}

impl Sequence for Geometric {
  type Item = BigInt;
  fn next(&mut self) -> Step<BigInt> {
    let result = self.next.clone();
    self.next *= &self.ratio;
    Ok(Some(result))
  }
}


/// The powers `1, n, n^2, n^3, ...`
///
/// Fails with `InvalidArgument` if `n` is negative.
pub fn powers(n: BigInt) -> Result<Geometric, Error> {
  if n.sign() == num::bigint::Sign::Minus {
    return Err(Error::invalid_argument("powers: base must be non-negative"))
  }
  Ok(geometric(BigInt::from(1u8), n))
}


/// The non-negative even numbers `0, 2, 4, ...`
pub fn evens() -> Arithmetic {
  arithmetic(BigInt::from(0u8), BigInt::from(2u8))
}

/// The positive odd numbers `1, 3, 5, ...`
pub fn odds() -> Arithmetic {
  arithmetic(BigInt::from(1u8), BigInt::from(2u8))
}


/// The constant sequence `value, value, value, ...`
pub fn constant<T: Clone>(value: T) -> Constant<T> {
  Constant { value }
}

pub struct Constant<T> {
  value: T
}

impl<T: Clone> Sequence for Constant<T> {
  type Item = T;
  fn next(&mut self) -> Step<T> { Ok(Some(self.value.clone())) }
}
