use thiserror::Error;

/// Failures a sequence pipeline can surface to its consumer.
///
/// Exhaustion of a finite sequence is not an error; it is signalled as
/// `Ok(None)` by [`crate::Sequence::next`].
#[derive(Debug,Clone,PartialEq,Eq,Error)]
pub enum Error {

  /// A construction parameter violates a documented precondition.
  /// Raised by the constructor, before any value is produced.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// An invariant about an input sequence was violated mid-stream.
  /// Raised on the offending pull; the sequence is unusable afterward.
  #[error("invalid domain: {0}")]
  InvalidDomain(String),
}

impl Error {
  pub fn invalid_argument(msg: impl Into<String>) -> Self {
    Error::InvalidArgument(msg.into())
  }

  pub fn invalid_domain(msg: impl Into<String>) -> Self {
    Error::InvalidDomain(msg.into())
  }
}
