use num::BigInt;

use crate::error::Error;
use crate::seq::{Sequence,Step};
use crate::traits::{Integral,Ring};

/// Run-length encoding: maximal runs of consecutive equal values collapse
/// to a flattened `value, count` pair of output values.
///
/// The final run is emitted when the input exhausts, so for every finite
/// input [`run_length_decoding`] is an exact left inverse.
pub fn run_length_encoding<S>(seq: S) -> RunLengthEncoding<S>
  where S: Sequence, S::Item: Ring + PartialEq
{
  RunLengthEncoding { seq, run: None, pending: None, done: false }
}

pub struct RunLengthEncoding<S: Sequence> {
  seq:     S,
  /// Current run: the value and how many times it has been seen.
  run:     Option<(S::Item, u64)>,
  /// A count waiting to be emitted after its value.
  pending: Option<u64>,
  done:    bool
}

impl<S> RunLengthEncoding<S>
  where S: Sequence, S::Item: Ring + PartialEq
{
  /// Close out the current run: return its value and queue its count.
  fn flush(&mut self, next_run: Option<(S::Item, u64)>) -> Option<S::Item> {
    let (value, count) = self.run.take()?;
    self.pending = Some(count);
    self.run = next_run;
    Some(value)
  }
}

impl<S> Sequence for RunLengthEncoding<S>
  where S: Sequence, S::Item: Ring + PartialEq
{
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if let Some(count) = self.pending.take() {
      return Ok(Some(Ring::from_integer(&BigInt::from(count))))
    }
    if self.done { return Ok(None) }

    loop {
      match self.seq.next()? {
        Some(v) => {
          match &mut self.run {
            Some((cur, count)) if *cur == v => *count += 1,
            Some(_) => return Ok(self.flush(Some((v, 1)))),
            None    => self.run = Some((v, 1)),
          }
        }
        None => {
          self.done = true;
          return Ok(self.flush(None))
        }
      }
    }
  }
}


/// Decode a flattened `value, count` stream: each value is emitted `count`
/// times.  A negative count, or a trailing value with no count, is an
/// `InvalidDomain` failure.
pub fn run_length_decoding<S>(seq: S) -> RunLengthDecoding<S>
  where S: Sequence, S::Item: Integral
{
  RunLengthDecoding { seq, current: None, done: false }
}

pub struct RunLengthDecoding<S: Sequence> {
  seq:     S,
  current: Option<(S::Item, BigInt)>,
  done:    bool
}

impl<S> Sequence for RunLengthDecoding<S>
  where S: Sequence, S::Item: Integral
{
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    loop {
      if let Some((value, remaining)) = &mut self.current {
        if *remaining > BigInt::from(0u8) {
          *remaining -= 1;
          return Ok(Some(value.clone()))
        }
      }
      self.current = None;

      let value = match self.seq.next()? {
        Some(v) => v,
        None    => { self.done = true; return Ok(None) }
      };
      let count = match self.seq.next()? {
        Some(c) => Integral::to_integer(&c),
        None    => {
          self.done = true;
          return Err(Error::invalid_domain(
            "run_length_decoding: value with no count"))
        }
      };
      if count.sign() == num::bigint::Sign::Minus {
        self.done = true;
        return Err(Error::invalid_domain(
          "run_length_decoding: negative count"))
      }
      // A zero count decodes to nothing; loop on to the next pair.
      self.current = Some((value, count));
    }
  }
}


/// Just the lengths of the maximal runs of consecutive equal values.
pub fn run_lengths<S>(seq: S) -> RunLengths<S>
  where S: Sequence, S::Item: Ring + PartialEq
{
  RunLengths { seq, run: None, done: false }
}

pub struct RunLengths<S: Sequence> {
  seq:  S,
  run:  Option<(S::Item, u64)>,
  done: bool
}

impl<S> Sequence for RunLengths<S>
  where S: Sequence, S::Item: Ring + PartialEq
{
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    loop {
      match self.seq.next()? {
        Some(v) => {
          match &mut self.run {
            Some((cur, count)) if *cur == v => *count += 1,
            Some(_) => {
              let (_, count) = self.run.replace((v, 1)).unwrap();
              return Ok(Some(Ring::from_integer(&BigInt::from(count))))
            }
            None => self.run = Some((v, 1)),
          }
        }
        None => {
          self.done = true;
          return match self.run.take() {
            Some((_, count)) =>
              Ok(Some(Ring::from_integer(&BigInt::from(count)))),
            None => Ok(None),
          }
        }
      }
    }
  }
}
