use alloc::vec::Vec;

use rstest::rstest;

use super::*;
use crate::dfa::tables::{BACKWARD, CHAR_CLASSES, FORWARD};

#[rstest]
#[case(b"$", 1, 0x24)]
#[case(b"\xC2\xA3", 2, 0xA3)]
#[case(b"\xE0\xA4\xB9", 3, 0x939)]
#[case(b"\xE2\x82\xAC", 3, 0x20AC)]
#[case(b"\xED\x95\x9C", 3, 0xD55C)]
#[case(b"\xED\x9F\xBF", 3, 0xD7FF)]
#[case(b"\xEE\x80\x80", 3, 0xE000)]
#[case(b"\xEF\xBF\xBD", 3, 0xFFFD)]
#[case(b"\xF0\x90\x8D\x88", 4, 0x10348)]
#[case(b"\xF3\xBF\xBF\xBF", 4, 0xF_FFFF)]
#[case(b"\xF4\x8F\xBF\xBF", 4, 0x10_FFFF)]
fn accepts_in_both_directions(#[case] bytes: &[u8], #[case] len: usize, #[case] value: u32) {
    let fwd = decode_and_advance_forward_once(bytes);
    assert_eq!((fwd.len, fwd.state, fwd.value), (len, State::Accept, value));

    let bwd = decode_and_advance_backward_once(bytes);
    assert_eq!((bwd.len, bwd.state, bwd.value), (len, State::Accept, value));

    assert_eq!(advance_forward_once(bytes), Step { len, state: State::Accept });
    assert_eq!(advance_backward_once(bytes), Step { len, state: State::Accept });
}

#[rstest]
#[case::stray_continuation(b"\x80", State::ErrLeadingByte)]
#[case::above_f4(b"\xF5\x80\x80\x80", State::ErrLeadingByte)]
#[case::ff(b"\xFF", State::ErrLeadingByte)]
#[case::c0(b"\xC0\xAF", State::ErrOverlong)]
#[case::c1(b"\xC1\xBF", State::ErrOverlong)]
#[case::e0_overlong(b"\xE0\x80\xAF", State::ErrOverlong)]
#[case::f0_overlong(b"\xF0\x82\x82\xAC", State::ErrOverlong)]
#[case::surrogate(b"\xED\xA0\x80", State::ErrContinuation)]
#[case::f4_too_large(b"\xF4\x90\x80\x80", State::ErrContinuation)]
#[case::ascii_inside(b"\xE2\x82A", State::ErrContinuation)]
#[case::lead_inside(b"\xC2\xC2", State::ErrContinuation)]
#[case::truncated_two(b"\xC2", State::ErrMissingBytes)]
#[case::truncated_three(b"\xE2\x82", State::ErrMissingBytes)]
#[case::truncated_four(b"\xF0\x90\x8D", State::ErrMissingBytes)]
#[case::empty(b"", State::ErrMissingBytes)]
fn rejects_forward(#[case] bytes: &[u8], #[case] state: State) {
    assert_eq!(advance_forward_once(bytes).state, state);
    assert_eq!(decode_and_advance_forward_once(bytes).state, state);
}

#[rstest]
#[case::leading_byte_last(b"\xE2", State::ErrContinuation)]
#[case::truncated_front(b"\x82\xAC", State::ErrMissingBytes)]
#[case::lone_continuation(b"\xAC", State::ErrMissingBytes)]
#[case::too_many_continuations(b"\xF0\x90\x8D\x88\x88", State::ErrLeadingByte)]
#[case::ascii_before_continuation(b"A\x88", State::ErrContinuation)]
#[case::surrogate(b"\xED\xA0\x80", State::ErrContinuation)]
#[case::e0_overlong(b"\xE0\x80\xAF", State::ErrOverlong)]
#[case::f0_overlong(b"\xF0\x82\x82\xAC", State::ErrOverlong)]
#[case::f4_too_large(b"\xF4\x90\x80\x80", State::ErrLeadingByte)]
#[case::empty(b"", State::ErrMissingBytes)]
fn rejects_backward(#[case] bytes: &[u8], #[case] state: State) {
    assert_eq!(advance_backward_once(bytes).state, state);
    assert_eq!(decode_and_advance_backward_once(bytes).state, state);
}

#[test]
fn forward_walk_stops_after_one_character() {
    let step = advance_forward_once(b"\xC2\xA3\xE2\x82\xAC");
    assert_eq!(step.len, 2);
    assert_eq!(step.into_result(), Ok(2));
}

#[test]
fn backward_walk_stops_after_one_character() {
    let bytes = b"\xC2\xA3\xE2\x82\xAC";
    let step = decode_and_advance_backward_once(bytes);
    assert_eq!(bytes.len() - step.len, 2);
    assert_eq!(step.into_result(), Ok((CodePoint::from('€'), 3)));
}

#[test]
fn into_result_maps_errors() {
    assert_eq!(advance_forward_once(b"\xC0\x80").into_result(), Err(Error::OverlongEncoded));
    assert_eq!(advance_forward_once(b"").into_result(), Err(Error::MissingByte));
    assert_eq!(
        decode_and_advance_backward_once(b"\xE2").into_result(),
        Err(Error::ContinuationByte)
    );
    assert_eq!(decode_and_advance_forward_once(b"\x9F").code_point(), None);
}

#[test]
fn copy_writes_only_accepted_characters() {
    let mut out = Vec::new();
    let step = copy_and_advance_forward_once(b"\xE2\x82\xACtail", &mut out);
    assert_eq!(step, Step { len: 3, state: State::Accept });
    assert_eq!(out, b"\xE2\x82\xAC");

    let step = copy_and_advance_forward_once(b"\xE2\x82", &mut out);
    assert_eq!(step.state, State::ErrMissingBytes);
    assert_eq!(out, b"\xE2\x82\xAC");
}

#[test]
fn class_table_matches_ranges() {
    assert_eq!(classify(0x00), CharClass::Ascii);
    assert_eq!(classify(0x7F), CharClass::Ascii);
    assert_eq!(classify(0x8F), CharClass::C1);
    assert_eq!(classify(0x90), CharClass::C2);
    assert_eq!(classify(0xBF), CharClass::C3);
    assert_eq!(classify(0xC0), CharClass::Illegal);
    assert_eq!(classify(0xC2), CharClass::C4);
    assert_eq!(classify(0xE0), CharClass::C5);
    assert_eq!(classify(0xEE), CharClass::C6);
    assert_eq!(classify(0xED), CharClass::C7);
    assert_eq!(classify(0xF0), CharClass::C8);
    assert_eq!(classify(0xF3), CharClass::C9);
    assert_eq!(classify(0xF4), CharClass::C10);
    assert_eq!(classify(0xF5), CharClass::Illegal);
    assert_eq!(CHAR_CLASSES.len(), 256);
}

#[test]
fn leading_byte_entries() {
    let info = leading_byte_info(0xC2);
    assert_eq!((info.next_state, info.data), (State::S1, 0x02));
    assert_eq!(leading_byte_info(0xE0).next_state, State::S2);
    assert_eq!(leading_byte_info(0xED).next_state, State::S3);
    assert_eq!(leading_byte_info(0xEF).next_state, State::S4);
    assert_eq!(leading_byte_info(0xF0).next_state, State::S5);
    assert_eq!(leading_byte_info(0xF2).next_state, State::S6);
    assert_eq!(leading_byte_info(0xF4).next_state, State::S7);
    assert_eq!(leading_byte_info(0xC1).next_state, State::ErrOverlong);
    assert_eq!(leading_byte_info(0xBF).next_state, State::ErrLeadingByte);
    assert_eq!(leading_byte_info(0xF8).next_state, State::ErrLeadingByte);
}

#[test]
fn ascii_is_never_a_continuation() {
    for row in &FORWARD {
        assert_eq!(row[CharClass::Ascii as usize], State::ErrContinuation);
    }
    for row in &BACKWARD[..3] {
        assert_eq!(row[CharClass::Ascii as usize], State::ErrContinuation);
    }
}

#[test]
fn state_errors() {
    assert_eq!(State::Accept.to_error(), None);
    assert_eq!(State::S4.to_error(), None);
    assert_eq!(State::ErrLeadingByte.to_error(), Some(Error::LeadingByte));
    assert_eq!(State::ErrOverlong.to_error(), Some(Error::OverlongEncoded));
    assert_eq!(State::ErrContinuation.to_error(), Some(Error::ContinuationByte));
    assert_eq!(State::ErrMissingBytes.to_error(), Some(Error::MissingByte));
    assert!(State::S7.is_in_progress());
    assert!(!State::Accept.is_in_progress());
    assert_eq!(tables::ending_state(State::S5), State::ErrMissingBytes);
    assert_eq!(tables::ending_state(State::ErrOverlong), State::ErrOverlong);
}
