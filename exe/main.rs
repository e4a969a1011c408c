use num::BigInt;

use intseq::check::{check,report,Outcome};
use intseq::fold::{differences,partial_sums};
use intseq::hyper::hypersequence;
use intseq::primes::primes;
use intseq::rle::{run_length_decoding,run_length_encoding,run_lengths};
use intseq::select::{offset,segment,skips};
use intseq::seq::{BoxSeq,Sequence};
use intseq::shape::{chunk_by_n,make_triangle,triangle_sums};
use intseq::simple::{constant,evens,geometric,naturals,odds,powers};
use intseq::transform::{binomial_transform,convolution};
use intseq::zip::{interleave,pairwise_sum};

fn big(v: i64) -> BigInt { BigInt::from(v) }

fn nats() -> intseq::simple::Naturals {
  naturals(big(0)).expect("0 is a valid offset")
}

/// Each positive even number E, repeated E-1 times.
fn even_runs() -> impl Sequence<Item = BigInt> {
  let code: Vec<BoxSeq<BigInt>> =
    vec![Box::new(offset(evens(), 1)), Box::new(odds())];
  run_length_decoding(interleave(code))
}

/// Verify a battery of known sequences against OEIS literals: print each
/// result, report every failure, and exit nonzero if anything failed.
fn main() {
  let mut all = true;
  let mut run = |name: &str, outcome: Outcome| {
    all &= report(name, &outcome);
    println!();
  };

  run("A001477 Natural numbers",
      check(segment(nats(), 0, Some(10)), 100,
            "0, 1, 2, 3, 4, 5, 6, 7, 8, 9"));

  run("A000040 Primes",
      check(primes(), 10,
            "2, 3, 5, 7, 11, 13, 17, 19, 23, 29"));

  run("A000079 Powers of two",
      check(powers(big(2)).expect("2 is a valid base"), 10,
            "1, 2, 4, 8, 16, 32, 64, 128, 256, 512"));

  run("A007283 3 times the powers of two",
      check(geometric(big(3), big(2)), 10,
            "3, 6, 12, 24, 48, 96, 192, 384, 768, 1536"));

  run("A142150 Naturals interleaved with zeros",
      check(interleave(vec![Box::new(nats()) as BoxSeq<BigInt>,
                            Box::new(constant(big(0)))]), 10,
            "0, 0, 1, 0, 2, 0, 3, 0, 4, 0"));

  run("A000217 Triangular numbers (partial sums of naturals)",
      check(partial_sums(nats(), None), 10,
            "0, 1, 3, 6, 10, 15, 21, 28, 36, 45"));

  run("A000217 Triangular numbers (convolution with ones)",
      check(convolution(nats(), constant(big(1))), 10,
            "0, 1, 3, 6, 10, 15, 21, 28, 36, 45"));

  run("A000027 Differences of the triangular numbers",
      check(differences(partial_sums(nats(), None)), 10,
            "1, 2, 3, 4, 5, 6, 7, 8, 9, 10"));

  run("A000079 Binomial transform of the ones sequence",
      check(binomial_transform(constant(big(1)), false), 10,
            "1, 2, 4, 8, 16, 32, 64, 128, 256, 512"));

  run("A000012 Inverse binomial transform of the powers of two",
      check(binomial_transform(powers(big(2)).expect("valid base"), true), 10,
            "1, 1, 1, 1, 1, 1, 1, 1, 1, 1"));

  run("A006450 Superprimes",
      check(hypersequence(primes()), 10,
            "3, 5, 11, 17, 31, 41, 59, 67, 83, 109"));

  run("Each positive even number E, repeated E-1 times",
      check(even_runs(), 10,
            "2, 4, 4, 4, 6, 6, 6, 6, 6, 8"));

  run("Run-length encoding of the even runs",
      check(run_length_encoding(even_runs()), 10,
            "2, 1, 4, 3, 6, 5, 8, 7, 10, 9"));

  run("A005408 Run lengths of the even runs",
      check(run_lengths(even_runs()), 10,
            "1, 3, 5, 7, 9, 11, 13, 15, 17, 19"));

  run("A005843 Even numbers (skipping odd naturals)",
      check(skips(nats(), 1), 10,
            "0, 2, 4, 6, 8, 10, 12, 14, 16, 18"));

  run("A016777 Naturals plus odds",
      check(pairwise_sum(nats(), odds()), 10,
            "1, 4, 7, 10, 13, 16, 19, 22, 25, 28"));

  run("Triangle of the naturals",
      check(make_triangle(nats()), 4,
            "(0), (1, 2), (3, 4, 5), (6, 7, 8, 9)"));

  run("A006003 Row sums of the triangle of naturals",
      check(triangle_sums(nats()), 10,
            "0, 3, 12, 30, 60, 105, 168, 252, 360, 495"));

  run("Naturals in pairs",
      check(chunk_by_n(nats(), 2, None).expect("2 is a valid width"), 5,
            "(0, 1), (2, 3), (4, 5), (6, 7), (8, 9)"));

  if !all {
    std::process::exit(1)
  }
}
