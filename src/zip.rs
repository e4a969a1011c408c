use crate::seq::{Sequence,Step};
use crate::traits::Ring;

/// Combine two sequences elementwise with a function.
/// Stops at the shorter input.
pub fn pairwise_apply<A, B, T, F>(a: A, b: B, f: F) -> PairwiseApply<A,B,F>
  where
  A: Sequence,
  B: Sequence,
  F: FnMut(A::Item, B::Item) -> T
{
  PairwiseApply { a, b, f, done: false }
}

pub struct PairwiseApply<A,B,F> {
  a:    A,
  b:    B,
  f:    F,
  done: bool
}

impl<A, B, T, F> Sequence for PairwiseApply<A,B,F>
  where
  A: Sequence,
  B: Sequence,
  F: FnMut(A::Item, B::Item) -> T
{
  type Item = T;

  fn next(&mut self) -> Step<T> {
    if self.done { return Ok(None) }

    // Pull the left input first; if it is exhausted the right input is
    // not touched at all on this pull.
    let x = match self.a.next()? {
      Some(x) => x,
      None    => { self.done = true; return Ok(None) }
    };
    match self.b.next()? {
      Some(y) => Ok(Some((self.f)(x, y))),
      None    => { self.done = true; Ok(None) }
    }
  }
}


/// Sum two sequences elementwise.  Stops at the shorter input.
pub fn pairwise_sum<A, B>(a: A, b: B) -> impl Sequence<Item = A::Item>
  where
  A: Sequence,
  A::Item: Ring,
  B: Sequence<Item = A::Item>
{
  pairwise_apply(a, b, |x, y| Ring::add(&x, &y))
}

/// Multiply two sequences elementwise.  Stops at the shorter input.
pub fn pairwise_prod<A, B>(a: A, b: B) -> impl Sequence<Item = A::Item>
  where
  A: Sequence,
  A::Item: Ring,
  B: Sequence<Item = A::Item>
{
  pairwise_apply(a, b, |x, y| Ring::mul(&x, &y))
}


/// Round-robin interleaving of any number of sequences.
///
/// The interleaving stops the moment any source is exhausted; values
/// already emitted from the final partial round stay emitted.  With no
/// sources the result is empty.
pub fn interleave<S: Sequence>(sources: Vec<S>) -> Interleave<S> {
  let done = sources.is_empty();
  Interleave { sources, turn: 0, done }
}

pub struct Interleave<S> {
  sources: Vec<S>,
  turn:    usize,
  done:    bool
}

impl<S: Sequence> Sequence for Interleave<S> {
  type Item = S::Item;

  fn next(&mut self) -> Step<S::Item> {
    if self.done { return Ok(None) }

    match self.sources[self.turn].next()? {
      Some(v) => {
        self.turn = (self.turn + 1) % self.sources.len();
        Ok(Some(v))
      }
      None => { self.done = true; Ok(None) }
    }
  }
}
