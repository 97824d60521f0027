//! Integration tests for the argument parser.
//!
//! Exercises the parser through the public API the way a command handler
//! would, including the refill-and-retry cycle for truncated literals.

#![allow(clippy::unwrap_used)]

use imap_args::{Arg, Error, encode, parse_args};
use proptest::prelude::*;

#[test]
fn test_fetch_style_response_line() {
    // * 12 FETCH (FLAGS (\Seen) RFC822.SIZE 4196 ENVELOPE (NIL "subj"))
    // minus the tag, sequence number, and command word.
    let parsed = parse_args(br#"(FLAGS (\Seen) RFC822.SIZE 4196 ENVELOPE (NIL "subj"))"#).unwrap();

    assert_eq!(parsed.raw_tail, b"");
    let Arg::List(items) = &parsed.args[0] else {
        panic!("expected list, got {:?}", parsed.args[0]);
    };
    assert_eq!(items[0], Arg::Atom("FLAGS".to_string()));
    assert_eq!(items[1], Arg::List(vec![Arg::Atom("\\Seen".to_string())]));
    assert_eq!(items[2], Arg::Atom("RFC822.SIZE".to_string()));
    assert_eq!(items[3], Arg::Number(4196));

    // NIL reaches the handler as an atom; null-ness is its call.
    let Arg::List(envelope) = &items[5] else {
        panic!("expected envelope list");
    };
    assert!(envelope[0].is_nil());
    assert_eq!(envelope[1], Arg::String(b"subj".to_vec()));
}

#[test]
fn test_status_response_line() {
    let parsed = parse_args(b"[UIDVALIDITY 3857529045] UIDs valid").unwrap();

    assert_eq!(
        parsed.args[0],
        Arg::ResponseText("UIDVALIDITY 3857529045".to_string())
    );
    assert_eq!(parsed.args.len(), 3);
}

#[test]
fn test_refill_and_retry_cycle() {
    // What the connection layer does: parse, learn the shortfall, read
    // more, parse the same line again from the start.
    let mut line = b"(BODY {11}".to_vec();

    let err = parse_args(&line).unwrap_err();
    assert_eq!(err.bytes_needed(), Some(11));

    line.extend_from_slice(b"hello");
    let err = parse_args(&line).unwrap_err();
    assert_eq!(err.bytes_needed(), Some(6));

    line.extend_from_slice(b" world)");
    let parsed = parse_args(&line).unwrap();
    assert_eq!(
        parsed.args,
        vec![Arg::List(vec![
            Arg::Atom("BODY".to_string()),
            Arg::String(b"hello world".to_vec()),
        ])]
    );
}

#[test]
fn test_literal_body_keeps_raw_bytes() {
    // Message bodies arrive as literals and may be arbitrary binary; the
    // bytes must reach the handler untouched.
    let parsed = parse_args(b"(BODY {4}\x00\xff\xfe\x01)").unwrap();
    assert_eq!(
        parsed.args,
        vec![Arg::List(vec![
            Arg::Atom("BODY".to_string()),
            Arg::String(vec![0x00, 0xff, 0xfe, 0x01]),
        ])]
    );
}

#[test]
fn test_malformed_is_not_retryable() {
    // A literal header missing its closing brace cannot be fixed by more
    // bytes; the error kind tells the caller not to retry.
    let err = parse_args(b"{42 oops").unwrap_err();
    assert!(matches!(err, Error::Malformed { .. }));
    assert_eq!(err.bytes_needed(), None);
}

#[test]
fn test_render_reflects_tree_shape() {
    let parsed = parse_args(b"A (B 2) \"c\"").unwrap();
    assert_eq!(
        parsed.render(),
        "ATOM A\nLIST\n  ATOM B\n  NUMBER 2\nSTRING c\n"
    );
}

proptest! {
    #[test]
    fn prop_digit_run_parses_to_base10_value(n in 0i64..=i64::MAX) {
        let parsed = parse_args(n.to_string().as_bytes()).unwrap();
        prop_assert_eq!(&parsed.args, &vec![Arg::Number(n)]);

        // A trailing sibling does not disturb the value.
        let parsed = parse_args(format!("{n} X").as_bytes()).unwrap();
        prop_assert_eq!(&parsed.args[0], &Arg::Number(n));
    }

    #[test]
    fn prop_quoted_strings_round_trip(a in "\\PC{0,24}", b in "\\PC{0,24}") {
        let args = vec![Arg::String(a.into_bytes()), Arg::String(b.into_bytes())];

        let wire = encode::encode_args(&args);
        let parsed = parse_args(&wire).unwrap();
        prop_assert_eq!(parsed.args, args);
    }

    #[test]
    fn prop_truncated_literal_shortfall_is_exact(
        (n, k) in (1usize..256).prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        let mut line = format!("{{{n}}}").into_bytes();
        line.extend(std::iter::repeat_n(b'x', k));

        let err = parse_args(&line).unwrap_err();
        prop_assert_eq!(err.bytes_needed(), Some(n - k));

        // Supplying exactly the shortfall completes the parse and the
        // string body consumes exactly n bytes.
        line.extend(std::iter::repeat_n(b'x', n - k));
        let parsed = parse_args(&line).unwrap();
        prop_assert_eq!(&parsed.args, &vec![Arg::String(vec![b'x'; n])]);
        prop_assert_eq!(&parsed.raw_tail, &Vec::<u8>::new());
    }
}
