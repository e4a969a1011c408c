pub mod error;
pub mod seq;
pub mod traits;
pub mod simple;
pub mod primes;
pub mod select;
pub mod zip;
pub mod fold;
pub mod transform;
pub mod shape;
pub mod rle;
pub mod hyper;
pub mod check;

#[cfg(test)]
pub mod proptest;

pub use crate::error::Error;
pub use crate::seq::{Sequence,Step};
pub use crate::traits::{Integral,Ring};
