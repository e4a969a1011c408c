use crate::seq::{Sequence,Step};

/// Skip the first `n` values of a sequence.
///
/// The skipped values are pulled exactly once, lazily: nothing is consumed
/// from the source until the first downstream pull.
pub fn offset<S: Sequence>(seq: S, n: usize) -> Offset<S> {
  Offset { seq, to_skip: n }
}

pub struct Offset<S> {
  seq:     S,
  to_skip: usize
}

impl<S: Sequence> Sequence for Offset<S> {
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    while self.to_skip > 0 {
      self.to_skip -= 1;
      if self.seq.next()?.is_none() {
        self.to_skip = 0;
        return Ok(None)
      }
    }
    self.seq.next()
  }
}


/// A finite window of a sequence: skip `start` values, then emit `count`
/// values.  `count = None` means "to the end", which for an infinite source
/// is forever.
pub fn segment<S: Sequence>(seq: S, start: usize, count: Option<usize>)
  -> Segment<S>
{
  Segment { seq: offset(seq, start), remaining: count }
}

pub struct Segment<S> {
  seq:       Offset<S>,
  remaining: Option<usize>
}

impl<S: Sequence> Sequence for Segment<S> {
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    match self.remaining {
      Some(0) => Ok(None),
      Some(ref mut n) => { *n -= 1; self.seq.next() }
      None => self.seq.next()
    }
  }
}


/// Emit one value, discard the next `step`, and repeat.
pub fn skips<S: Sequence>(seq: S, step: usize) -> Skips<S> {
  Skips { seq, step, started: false, done: false }
}

pub struct Skips<S> {
  seq:     S,
  step:    usize,
  started: bool,
  done:    bool
}

impl<S: Sequence> Sequence for Skips<S> {
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    // Discard between emissions rather than after, so a final value right
    // before exhaustion is still emitted.
    if self.started {
      for _ in 0 .. self.step {
        if self.seq.next()?.is_none() {
          self.done = true;
          return Ok(None)
        }
      }
    }
    self.started = true;

    match self.seq.next()? {
      Some(v) => Ok(Some(v)),
      None    => { self.done = true; Ok(None) }
    }
  }
}


/// A single value in front of a sequence.
pub fn prepend<S: Sequence>(value: S::Item, seq: S) -> Prepend<S> {
  Prepend { seq, head: Some(value) }
}

pub struct Prepend<S: Sequence> {
  seq:  S,
  head: Option<S::Item>
}

impl<S: Sequence> Sequence for Prepend<S> {
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    match self.head.take() {
      Some(v) => Ok(Some(v)),
      None    => self.seq.next()
    }
  }
}


/// Apply a function to each value of a sequence.
pub fn apply<S: Sequence, T, F>(seq: S, f: F) -> Apply<S,F>
  where F: FnMut(S::Item) -> T
{
  Apply { seq, f }
}

pub struct Apply<S,F> {
  seq: S,
  f:   F
}

impl<S: Sequence, T, F> Sequence for Apply<S,F>
  where F: FnMut(S::Item) -> T
{
  type Item = T;

  fn next(&mut self) -> Step<T> {
    Ok(self.seq.next()?.map(&mut self.f))
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::proptest::{big,bigs};
  use crate::seq::from_vec;
  use crate::simple::naturals;

  #[test]
  fn segment_of_naturals() {
    let mut s = segment(naturals(big(0)).unwrap(), 0, Some(10));
    assert_eq!(s.take_vec(100).unwrap(), bigs(&[0,1,2,3,4,5,6,7,8,9]));
  }

  #[test]
  fn segment_with_offset() {
    let mut s = segment(naturals(big(0)).unwrap(), 5, Some(3));
    assert_eq!(s.take_vec(100).unwrap(), bigs(&[5,6,7]));
  }

  #[test]
  fn segment_count_zero_is_empty() {
    let mut s = segment(naturals(big(0)).unwrap(), 3, Some(0));
    assert_eq!(s.next().unwrap(), None);
  }

  #[test]
  fn segment_to_the_end() {
    let mut s = segment(from_vec(bigs(&[1,2,3,4])), 1, None);
    assert_eq!(s.take_vec(100).unwrap(), bigs(&[2,3,4]));
  }

  #[test]
  fn offset_skips_exactly_n() {
    let mut s = offset(naturals(big(0)).unwrap(), 7);
    assert_eq!(s.take_vec(3).unwrap(), bigs(&[7,8,9]));
  }

  #[test]
  fn offset_past_the_end_exhausts() {
    let mut s = offset(from_vec(bigs(&[1,2])), 5);
    assert_eq!(s.next().unwrap(), None);
    assert_eq!(s.next().unwrap(), None);
  }

  #[test]
  fn skips_every_other() {
    let mut s = skips(naturals(big(0)).unwrap(), 1);
    assert_eq!(s.take_vec(5).unwrap(), bigs(&[0,2,4,6,8]));
  }

  #[test]
  fn skips_zero_is_identity() {
    let mut s = skips(from_vec(bigs(&[4,5,6])), 0);
    assert_eq!(s.take_vec(10).unwrap(), bigs(&[4,5,6]));
  }

  #[test]
  fn skips_emits_final_value_before_exhaustion() {
    let mut s = skips(from_vec(bigs(&[0,1,2,3,4])), 3);
    assert_eq!(s.take_vec(10).unwrap(), bigs(&[0,4]));
  }

  #[test]
  fn prepend_puts_value_first() {
    let mut s = prepend(big(9), from_vec(bigs(&[1,2])));
    assert_eq!(s.take_vec(10).unwrap(), bigs(&[9,1,2]));
  }

  #[test]
  fn apply_maps_each_value() {
    let mut s = apply(naturals(big(0)).unwrap(), |x| x * 2);
    assert_eq!(s.take_vec(5).unwrap(), bigs(&[0,2,4,6,8]));
  }
}
