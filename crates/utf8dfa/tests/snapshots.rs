#![allow(missing_docs)]

use insta::assert_snapshot;
use utf8dfa::{
    CodePoint, CodePointError, DecodeError, Error,
    dfa::{self, State},
};

#[test]
fn error_messages() {
    let rendered = Error::ALL
        .iter()
        .map(|err| {
            assert_eq!(err.message(), err.to_string());
            format!("{err:?}: {err}")
        })
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r"
    LeadingByte: expected a leading byte
    OverlongEncoded: detected overlong encoding
    ContinuationByte: expected a continuation byte
    MissingByte: expected more bytes
    ");
}

#[test]
fn wrapper_error_messages() {
    let rendered = [
        DecodeError::Invalid(Error::OverlongEncoded).to_string(),
        DecodeError::TrailingBytes.to_string(),
        CodePointError::Surrogate(0xDC00).to_string(),
        CodePointError::OutOfRange(0x11_0000).to_string(),
        "U+zz".parse::<CodePoint>().unwrap_err().to_string(),
    ]
    .join("\n");

    assert_snapshot!(rendered, @r"
    detected overlong encoding
    the range is too long for a single UTF-8 character
    U+DC00 is a surrogate
    0x110000 is larger than the maximum code point U+10FFFF
    invalid hexadecimal code point: invalid digit found in string
    ");
}

#[test]
fn byte_classes() {
    let mut runs: Vec<(u8, u8, dfa::CharClass)> = Vec::new();
    for byte in 0..=u8::MAX {
        let class = dfa::classify(byte);
        match runs.last_mut() {
            Some((_, end, last)) if *last == class => *end = byte,
            _ => runs.push((byte, byte, class)),
        }
    }
    let rendered = runs
        .iter()
        .map(|(start, end, class)| format!("{start:02X}..={end:02X} {class:?}"))
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r"
    00..=7F Ascii
    80..=8F C1
    90..=9F C2
    A0..=BF C3
    C0..=C1 Illegal
    C2..=DF C4
    E0..=E0 C5
    E1..=EC C6
    ED..=ED C7
    EE..=EF C6
    F0..=F0 C8
    F1..=F3 C9
    F4..=F4 C10
    F5..=FF Illegal
    ");
}

#[test]
fn leading_byte_states() {
    let mut runs: Vec<(u8, u8, State)> = Vec::new();
    for byte in 0x80..=u8::MAX {
        let state = dfa::leading_byte_info(byte).next_state;
        match runs.last_mut() {
            Some((_, end, last)) if *last == state => *end = byte,
            _ => runs.push((byte, byte, state)),
        }
    }
    let rendered = runs
        .iter()
        .map(|(start, end, state)| format!("{start:02X}..={end:02X} {state:?}"))
        .collect::<Vec<_>>()
        .join("\n");

    assert_snapshot!(rendered, @r"
    80..=BF ErrLeadingByte
    C0..=C1 ErrOverlong
    C2..=DF S1
    E0..=E0 S2
    E1..=EC S4
    ED..=ED S3
    EE..=EF S4
    F0..=F0 S5
    F1..=F3 S6
    F4..=F4 S7
    F5..=FF ErrLeadingByte
    ");
}
