use crate::error::Error;

/// Result of pulling on a sequence: the next value, exhaustion (`Ok(None)`),
/// or a mid-stream domain failure.
pub type Step<T> = Result<Option<T>, Error>;

/// A lazily-produced, ordered, single-pass stream of values.
///
/// Sequences are advanced only by their sole consumer; a combinator that
/// owns upstream sequences pulls from them in lockstep, exactly as often as
/// needed to produce one downstream value.  Exhaustion is fused: after a
/// sequence reports `Ok(None)` every later pull also reports `Ok(None)`.
/// There is no restart; to iterate again, construct a fresh pipeline.
pub trait Sequence {
  type Item;

  /// Produce the next value, report exhaustion, or fail.
  fn next(&mut self) -> Step<Self::Item>;

  /// Pull at most `n` values into a vector, stopping early at exhaustion.
  fn take_vec(&mut self, n: usize) -> Result<Vec<Self::Item>, Error>
    where Self: Sized
  {
    let mut out = Vec::with_capacity(n);
    for _ in 0 .. n {
      match self.next()? {
        Some(v) => out.push(v),
        None    => break,
      }
    }
    Ok(out)
  }
}

impl<S: Sequence + ?Sized> Sequence for Box<S> {
  type Item = S::Item;
  fn next(&mut self) -> Step<Self::Item> { (**self).next() }
}

/// A boxed sequence, for pipelines that mix source types.
pub type BoxSeq<T> = Box<dyn Sequence<Item = T>>;


// -----------------------------------------------------------------------------


/// A sequence drawn from an ordinary iterator.  Infallible.
pub struct Iter<I> {
  iter: I
}

/// Treat an iterator as a sequence.
pub fn from_iter<I: Iterator>(iter: I) -> Iter<I> {
  Iter { iter }
}

/// A finite sequence over the elements of a vector, in order.
pub fn from_vec<T>(values: Vec<T>) -> Iter<std::vec::IntoIter<T>> {
  from_iter(values.into_iter())
}

impl<I: Iterator> Sequence for Iter<I> {
  type Item = I::Item;
  fn next(&mut self) -> Step<Self::Item> { Ok(self.iter.next()) }
}
