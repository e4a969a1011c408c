use num::BigInt;

/// Element operations required by the arithmetic combinators.
///
/// Most sequences range over arbitrary-precision integers, but the
/// combinators only care that their elements form a ring, so they are
/// generic over this trait instead of `BigInt` directly.
pub trait Ring: Clone {

  /// The value that acts like 0.
  fn zero() -> Self;

  /// x + y
  fn add(x: &Self, y: &Self) -> Self;

  /// x - y
  fn sub(x: &Self, y: &Self) -> Self;

  /// x * y
  fn mul(x: &Self, y: &Self) -> Self;

  /// Negate a value
  fn negate(x: &Self) -> Self;

  /// Convert an integer to a value of the given type.
  fn from_integer(x: &BigInt) -> Self;
}


/// Ring elements that are integers in disguise, for combinators that must
/// reinterpret a value as a count or an index.
pub trait Integral: Ring {
  fn to_integer(x: &Self) -> BigInt;
}


impl Ring for BigInt {
  fn zero()                     -> Self { <Self as num::Zero>::zero() }
  fn add   (x: &Self, y: &Self) -> Self { x + y }
  fn sub   (x: &Self, y: &Self) -> Self { x - y }
  fn mul   (x: &Self, y: &Self) -> Self { x * y }
  fn negate(x: &Self)           -> Self { -x }
  fn from_integer(x: &BigInt)   -> Self { x.clone() }
}

impl Integral for BigInt {
  fn to_integer(x: &Self) -> BigInt { x.clone() }
}
