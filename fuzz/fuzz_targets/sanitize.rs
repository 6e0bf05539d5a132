#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use profilecss::sanitize::{GLOBAL_DENYLIST, VALUE_DENYLIST};
use profilecss::validate_and_sanitize;

// Well under the sanitizer's own length gate so that re-serialization (which
// can expand terse input) cannot push a valid output over the limit.
const MAX_LEN: usize = 32 * 1024;

#[derive(Arbitrary, Debug)]
struct SanitizeInput {
  raw_bytes: Vec<u8>,
  unicode: String,
}

fn lossy_truncate(bytes: &[u8]) -> String {
  let slice = if bytes.len() > MAX_LEN {
    &bytes[..MAX_LEN]
  } else {
    bytes
  };
  String::from_utf8_lossy(slice).into_owned()
}

fn truncate_str(s: &str) -> String {
  s.chars().take(MAX_LEN).collect()
}

fn check(input: &str) {
  let outcome = validate_and_sanitize(input);

  if !outcome.valid {
    assert!(outcome.sanitized.is_empty());
    assert!(outcome.error.is_some());
    return;
  }

  let lowered = outcome.sanitized.to_lowercase();
  for token in GLOBAL_DENYLIST.iter().chain(VALUE_DENYLIST.iter()) {
    assert!(
      !lowered.contains(token),
      "{:?} survived in {:?}",
      token,
      outcome.sanitized
    );
  }

  let again = validate_and_sanitize(&outcome.sanitized);
  assert!(again.valid, "sanitized output must re-validate");
  assert_eq!(again.sanitized, outcome.sanitized, "sanitize must be idempotent");
}

fuzz_target!(|input: SanitizeInput| {
  check(&lossy_truncate(&input.raw_bytes));
  check(&truncate_str(&input.unicode));
});
