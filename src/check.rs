use std::fmt;

use crate::error::Error;
use crate::seq::Sequence;

/// Result of checking a sequence prefix against a known-good literal.
/// A pass carries the rendered values for the report to echo.
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum Outcome {
  Pass(String),
  Mismatch { expected: String, produced: String },
  Failed(Error)
}

impl Outcome {
  pub fn passed(&self) -> bool { matches!(self, Outcome::Pass(_)) }
}

/// Render the first `count` values of a sequence as a comma-joined string,
/// the form the expected literals are written in.
pub fn render<S>(seq: &mut S, count: usize) -> Result<String, Error>
  where S: Sequence, S::Item: fmt::Display
{
  let vals = seq.take_vec(count)?;
  let strs: Vec<String> = vals.iter().map(|v| v.to_string()).collect();
  Ok(strs.join(", "))
}

/// Pull `count` terms of a sequence and diff the rendering against a
/// known-correct literal (OEIS, typically).  Never panics, so dozens of
/// sequences can be verified in one batch run.
pub fn check<S>(mut seq: S, count: usize, expected: &str) -> Outcome
  where S: Sequence, S::Item: fmt::Display
{
  match render(&mut seq, count) {
    Err(e) => Outcome::Failed(e),
    Ok(produced) =>
      if produced == expected {
        Outcome::Pass(produced)
      } else {
        Outcome::Mismatch { expected: expected.to_string(), produced }
      }
  }
}

/// Console presentation of an outcome, one sequence per block.
/// Returns whether the check passed, for the battery's exit code.
pub fn report(name: &str, outcome: &Outcome) -> bool {
  match outcome {
    Outcome::Pass(produced) => {
      println!("{}", name);
      println!("{}", produced);
      true
    }
    Outcome::Mismatch { expected, produced } => {
      println!("{}", name);
      println!("ERROR");
      println!("Expected:\n{}", expected);
      println!("Produced:\n{}", produced);
      false
    }
    Outcome::Failed(e) => {
      println!("{}", name);
      println!("ERROR");
      println!("Failed: {}", e);
      false
    }
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use crate::proptest::big;
  use crate::simple::naturals;

  #[test]
  fn check_passes_on_exact_match() {
    let s = naturals(big(0)).unwrap();
    assert!(check(s, 10, "0, 1, 2, 3, 4, 5, 6, 7, 8, 9").passed());
  }

  #[test]
  fn check_reports_mismatch_with_both_strings() {
    let s = naturals(big(1)).unwrap();
    let out = check(s, 3, "0, 1, 2");
    assert_eq!(out,
               Outcome::Mismatch
                 { expected: "0, 1, 2".to_string()
                 , produced: "1, 2, 3".to_string()
                 });
  }

  #[test]
  fn check_surfaces_stream_failures() {
    let s = crate::hyper::hypersequence(naturals(big(0)).unwrap());
    assert!(matches!(check(s, 5, "whatever"), Outcome::Failed(_)));
  }

  #[test]
  fn short_sequences_render_short() {
    let s = crate::seq::from_vec(vec![big(4), big(5)]);
    assert!(check(s, 10, "4, 5").passed());
  }
}
