use crate::seq::{Sequence,Step};
use crate::traits::Ring;

/// Running totals of a sequence.
///
/// The first emitted value is `start` if given, else the first element of
/// the input.  With `start = Some(zero)` this is the exact inverse of
/// [`differences`].
pub fn partial_sums<S>(seq: S, start: Option<S::Item>) -> Accumulate<S>
  where S: Sequence, S::Item: Ring
{
  Accumulate
    { seq, start, acc: None, op: <S::Item as Ring>::add, done: false }
}

/// Running products of a sequence.  `start` behaves as in [`partial_sums`].
pub fn partial_prods<S>(seq: S, start: Option<S::Item>) -> Accumulate<S>
  where S: Sequence, S::Item: Ring
{
  Accumulate
    { seq, start, acc: None, op: <S::Item as Ring>::mul, done: false }
}

pub struct Accumulate<S: Sequence> {
  seq:   S,
  /// A start value still waiting to be emitted, ahead of any input.
  start: Option<S::Item>,
  /// The running total last emitted.
  acc:   Option<S::Item>,
  op:    fn(&S::Item, &S::Item) -> S::Item,
  done:  bool
}

impl<S> Sequence for Accumulate<S>
  where S: Sequence, S::Item: Ring
{
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    if let Some(s) = self.start.take() {
      self.acc = Some(s.clone());
      return Ok(Some(s))
    }

    match self.seq.next()? {
      Some(v) => {
        let result = match &self.acc {
          Some(acc) => (self.op)(acc, &v),
          None      => v,
        };
        self.acc = Some(result.clone());
        Ok(Some(result))
      }
      None => { self.done = true; Ok(None) }
    }
  }
}


/// Consecutive deltas of a sequence.
///
/// Needs at least two input elements to emit anything; shorter inputs
/// exhaust silently.
pub fn differences<S>(seq: S) -> Differences<S>
  where S: Sequence, S::Item: Ring
{
  Differences { seq, prev: None, done: false }
}

pub struct Differences<S: Sequence> {
  seq:  S,
  prev: Option<S::Item>,
  done: bool
}

impl<S> Sequence for Differences<S>
  where S: Sequence, S::Item: Ring
{
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    if self.prev.is_none() {
      match self.seq.next()? {
        Some(v) => self.prev = Some(v),
        None    => { self.done = true; return Ok(None) }
      }
    }

    match self.seq.next()? {
      Some(v) => {
        // prev is always set here
        let prev = self.prev.replace(v.clone()).unwrap();
        Ok(Some(Ring::sub(&v, &prev)))
      }
      None => { self.done = true; Ok(None) }
    }
  }
}
