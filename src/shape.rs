use std::fmt;

use crate::error::Error;
use crate::seq::{Sequence,Step};
use crate::traits::Ring;

/// A row of values, displayed as `(a, b, c)`.
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Row<T>(pub Vec<T>);

impl<T: fmt::Display> fmt::Display for Row<T> {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    write!(fmt, "(")?;
    for (i, v) in self.0.iter().enumerate() {
      if i > 0 { write!(fmt, ", ")? }
      write!(fmt, "{}", v)?;
    }
    write!(fmt, ")")
  }
}


/// The standard triangular arrangement of a sequence:
/// ```text
/// 0
/// 1 2
/// 3 4 5
/// 6 7 8 9
/// ```
/// Row n (1-indexed) consumes exactly n source values, in order, none
/// reused or skipped.  If the source exhausts mid-row the partial row is
/// dropped and the triangle ends.
pub fn make_triangle<S: Sequence>(seq: S) -> MakeTriangle<S> {
  MakeTriangle { seq, width: 0, done: false }
}

pub struct MakeTriangle<S> {
  seq:   S,
  width: usize,
  done:  bool
}

impl<S: Sequence> Sequence for MakeTriangle<S> {
  type Item = Row<S::Item>;

  fn next(&mut self) -> Step<Row<S::Item>> {
    if self.done { return Ok(None) }

    self.width += 1;
    let mut row = Vec::with_capacity(self.width);
    for _ in 0 .. self.width {
      match self.seq.next()? {
        Some(v) => row.push(v),
        None    => { self.done = true; return Ok(None) }
      }
    }
    Ok(Some(Row(row)))
  }
}


/// Sums of the rows of the standard triangular arrangement.
pub fn triangle_sums<S>(seq: S) -> impl Sequence<Item = S::Item>
  where S: Sequence, S::Item: Ring
{
  crate::select::apply(make_triangle(seq), |row| {
    row.0.iter().fold(Ring::zero(), |acc, v| Ring::add(&acc, v))
  })
}

/// Products of the rows of the standard triangular arrangement.
pub fn triangle_products<S>(seq: S) -> impl Sequence<Item = S::Item>
  where S: Sequence, S::Item: Ring
{
  crate::select::apply(make_triangle(seq), |row| {
    row.0.iter().fold(Ring::from_integer(&num::BigInt::from(1u8)),
                      |acc, v| Ring::mul(&acc, v))
  })
}


/// Collect a sequence into fixed-length blocks of `n` values.
///
/// A final short block is padded with `fill` if one is given, and emitted
/// short otherwise.  `n = 0` is an `InvalidArgument`.
pub fn chunk_by_n<S: Sequence>(seq: S, n: usize, fill: Option<S::Item>)
  -> Result<ChunkByN<S>, Error>
{
  if n == 0 {
    return Err(Error::invalid_argument("chunk_by_n: block size must be positive"))
  }
  Ok(ChunkByN { seq, n, fill, done: false })
}

pub struct ChunkByN<S: Sequence> {
  seq:  S,
  n:    usize,
  fill: Option<S::Item>,
  done: bool
}

impl<S> Sequence for ChunkByN<S>
  where S: Sequence, S::Item: Clone
{
  type Item = Row<S::Item>;

  fn next(&mut self) -> Step<Row<S::Item>> {
    if self.done { return Ok(None) }

    let mut block = Vec::with_capacity(self.n);
    for _ in 0 .. self.n {
      match self.seq.next()? {
        Some(v) => block.push(v),
        None    => { self.done = true; break }
      }
    }

    if block.is_empty() { return Ok(None) }

    if block.len() < self.n {
      if let Some(fill) = &self.fill {
        block.resize(self.n, fill.clone());
      }
    }
    Ok(Some(Row(block)))
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::proptest::{big,bigs,element};
  use crate::seq::from_vec;
  use crate::simple::naturals;
  use ::proptest::prelude::*;

  fn rows(rs: &[&[i64]]) -> Vec<Row<num::BigInt>> {
    rs.iter().map(|r| Row(bigs(r))).collect()
  }

  #[test]
  fn triangle_over_naturals() {
    let mut s = make_triangle(naturals(big(0)).unwrap());
    assert_eq!(s.take_vec(4).unwrap(),
               rows(&[&[0], &[1,2], &[3,4,5], &[6,7,8,9]]));
  }

  #[test]
  fn triangle_drops_partial_final_row() {
    // 0..8: rows of width 1, 2, 3 use 6 values; the last 3 cannot fill
    // a width-4 row.
    let mut s = make_triangle(from_vec(bigs(&[0,1,2,3,4,5,6,7,8])));
    assert_eq!(s.take_vec(10).unwrap(),
               rows(&[&[0], &[1,2], &[3,4,5]]));
    assert_eq!(s.next().unwrap(), None);
  }

  proptest! {
    // Concatenating rows 1..k reproduces the first 1+2+...+k source
    // values, with nothing reused or skipped.
    #[test]
    fn triangle_flattens_back(
      xs in ::proptest::collection::vec(element(), 0..60)
    ) {
      let mut s = make_triangle(from_vec(xs.clone()));
      let rows = s.take_vec(xs.len() + 1).unwrap();
      let flat: Vec<_> = rows.into_iter().flat_map(|r| r.0).collect();
      prop_assert_eq!(&xs[.. flat.len()], &flat[..]);
    }
  }

  #[test]
  fn triangle_sums_of_naturals() {
    // A006003: row sums 0, 1+2, 3+4+5, ...
    let mut s = triangle_sums(naturals(big(0)).unwrap());
    assert_eq!(s.take_vec(6).unwrap(), bigs(&[0,3,12,30,60,105]));
  }

  #[test]
  fn triangle_products_of_naturals_from_one() {
    let mut s = triangle_products(naturals(big(1)).unwrap());
    assert_eq!(s.take_vec(4).unwrap(), bigs(&[1,6,120,5040]));
  }

  #[test]
  fn chunk_even_split() {
    let mut s = chunk_by_n(from_vec(bigs(&[1,2,3,4])), 2, None).unwrap();
    assert_eq!(s.take_vec(10).unwrap(), rows(&[&[1,2], &[3,4]]));
  }

  #[test]
  fn chunk_short_final_block() {
    let mut s = chunk_by_n(from_vec(bigs(&[1,2,3,4,5])), 2, None).unwrap();
    assert_eq!(s.take_vec(10).unwrap(), rows(&[&[1,2], &[3,4], &[5]]));
  }

  #[test]
  fn chunk_padded_final_block() {
    let mut s =
      chunk_by_n(from_vec(bigs(&[1,2,3,4,5])), 2, Some(big(0))).unwrap();
    assert_eq!(s.take_vec(10).unwrap(), rows(&[&[1,2], &[3,4], &[5,0]]));
  }

  #[test]
  fn chunk_rejects_zero_width() {
    assert!(matches!(chunk_by_n(from_vec(bigs(&[1])), 0, None),
                     Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn row_display() {
    assert_eq!(Row(bigs(&[220, 284])).to_string(), "(220, 284)");
    assert_eq!(Row(bigs(&[0])).to_string(), "(0)");
  }
}
