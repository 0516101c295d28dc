#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8dfa::{CodePoint, iter, unchecked};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    bytes: &'a [u8],
    replacement: char,
    cursor: usize,
    steps: i8,
}

fn check(input: Input<'_>) {
    let bytes = input.bytes;

    // validity agrees with core and between entry points
    let valid_up_to = match std::str::from_utf8(bytes) {
        Ok(_) => bytes.len(),
        Err(err) => err.valid_up_to(),
    };
    let invalid_at = utf8dfa::find_invalid(bytes);
    assert_eq!(invalid_at, valid_up_to);
    assert_eq!(utf8dfa::is_valid(bytes), invalid_at == bytes.len());

    // single characters agree with bstr
    let ours = utf8dfa::decode_first(bytes).ok();
    let theirs = match bstr::decode_utf8(bytes) {
        (Some(ch), len) => Some((CodePoint::from(ch), len)),
        (None, _) => None,
    };
    assert_eq!(ours, theirs);

    // decoded prefix re-encodes to the same bytes
    let mut decoded = Vec::new();
    let report = utf8dfa::decode_into(bytes, &mut decoded);
    assert_eq!(report.rest.len(), bytes.len() - invalid_at);
    assert_eq!(utf8dfa::encode_to_vec(decoded), &bytes[..invalid_at]);

    // sanitized output is valid and keeps valid input untouched
    let replacement = CodePoint::from(input.replacement);
    let mut clean = Vec::new();
    let sanitized = utf8dfa::sanitize_into_with(bytes, &mut clean, replacement);
    assert!(utf8dfa::is_valid(&clean));
    assert_eq!(sanitized.written, clean.len());
    assert_eq!(sanitized.replacements == 0, invalid_at == bytes.len());
    assert_eq!(utf8dfa::sanitize_with(bytes, replacement).as_bytes(), clean.as_slice());

    // both iteration directions see the same characters in valid prefixes
    let prefix = &bytes[..invalid_at];
    let forward: Vec<_> = utf8dfa::chars(prefix).collect();
    let mut backward: Vec<_> = utf8dfa::chars(prefix).rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);

    // checked and unchecked cursors agree on valid prefixes
    let boundaries: Vec<usize> = utf8dfa::char_indices(prefix)
        .map(|item| item.map(|(at, _)| at))
        .chain([Ok(prefix.len())])
        .collect::<Result<_, _>>()
        .unwrap();
    let start = boundaries[input.cursor % boundaries.len()];
    let n = isize::from(input.steps);
    let bound = if n >= 0 { prefix.len() } else { 0 };
    let checked = iter::advance(prefix, start, n, bound).unwrap();
    // SAFETY: `prefix` is valid UTF-8 and `start` and `bound` are boundaries.
    let fast = unsafe { unchecked::advance_bounded(prefix, start, n, bound) };
    assert_eq!(checked, fast);
}

fuzz_target!(|input: Input<'_>| check(input));
