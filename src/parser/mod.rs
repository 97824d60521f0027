//! Parser for IMAP argument strings.
//!
//! Turns the text that follows a response tag into a tree of typed
//! arguments: atoms, numbers, quoted/literal strings, bracketed status
//! text, and nested parenthesized lists.
//!
//! The parser performs no I/O. When the buffer ends in the middle of a
//! string it reports how many more bytes are required via
//! [`Error::Incomplete`]; the caller appends at least that many bytes to
//! the same line and parses again from the start. A partially built tree
//! is never returned.

mod cursor;

use cursor::Cursor;

use crate::args::{Arg, ParsedArgs};
use crate::error::{Error, Result};

/// Parses one response line, already stripped of its tag and command word.
///
/// On success the returned [`ParsedArgs`] carries the whole argument list
/// plus the unparsed tail of the line (non-empty only when parsing stopped
/// at a stray `)`). Empty input parses to an empty argument list.
///
/// # Errors
///
/// [`Error::Incomplete`] if the line is truncated inside a quoted or
/// literal string (or bracketed status text); retry after appending the
/// reported number of bytes. [`Error::Malformed`] if the line can never
/// parse, e.g. a literal header without its closing `}`.
pub fn parse_args(input: &[u8]) -> Result<ParsedArgs> {
    let mut cursor = Cursor::new(input);

    match parse_sequence(&mut cursor) {
        Ok(args) => {
            let raw_tail = cursor.remaining().to_vec();
            tracing::trace!(args = args.len(), tail = raw_tail.len(), "parsed argument line");
            Ok(ParsedArgs { args, raw_tail })
        }
        Err(e) => {
            // Truncation is a normal consequence of streaming reads, so it
            // is only ever traced, never logged as an error.
            if let Some(needed) = e.bytes_needed() {
                tracing::trace!(needed, "argument line incomplete");
            }
            Err(e)
        }
    }
}

/// Parses sibling arguments until end of input or an unconsumed `)`.
///
/// The `)` is left in place: it terminates this list level and the
/// enclosing call consumes it.
fn parse_sequence(cursor: &mut Cursor<'_>) -> Result<Vec<Arg>> {
    let mut args = Vec::new();

    while let Some(byte) = cursor.peek() {
        if byte == b')' {
            break;
        }

        let arg = match byte {
            b'0'..=b'9' => Arg::Number(parse_number(cursor)?),
            b'"' => Arg::String(parse_quoted(cursor)?),
            b'{' => Arg::String(parse_literal(cursor)?),
            b'[' => Arg::ResponseText(parse_response_text(cursor)?),
            b'(' => Arg::List(parse_list(cursor)?),
            // Anything else is an atom, including the bytes NIL: the
            // protocol is ambiguous about atom-vs-null, so commands that
            // care compare the text themselves.
            _ => Arg::Atom(parse_atom(cursor)?),
        };
        args.push(arg);

        // One separator between siblings.
        if cursor.peek() == Some(b' ') {
            cursor.advance();
        }
    }

    Ok(args)
}

/// Parses a nested list. The opening `(` is still unconsumed.
///
/// Truncation inside the body propagates unchanged. A body that ends
/// without a closing `)` and without a truncation cause is malformed, not
/// retryable.
fn parse_list(cursor: &mut Cursor<'_>) -> Result<Vec<Arg>> {
    cursor.advance(); // (
    let mut children = parse_sequence(cursor)?;
    if cursor.advance() != Some(b')') {
        return Err(malformed(cursor, "unterminated list"));
    }

    // "()" yields no children; "( )" yields one empty atom, collapse it
    // to the same shape.
    if let [Arg::Atom(text)] = children.as_slice()
        && text.is_empty()
    {
        children.clear();
    }

    Ok(children)
}

/// Parses a maximal base-10 digit run.
fn parse_number(cursor: &mut Cursor<'_>) -> Result<i64> {
    let mut value: i64 = 0;
    while let Some(byte @ b'0'..=b'9') = cursor.peek() {
        cursor.advance();
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(byte - b'0')))
            .ok_or_else(|| Error::Malformed {
                position: cursor.position(),
                message: "number too large".to_string(),
            })?;
    }
    Ok(value)
}

/// Parses a quoted string, honoring `\"` and `\\` escapes.
///
/// Quoted strings must be valid UTF-8; only literals carry arbitrary
/// bytes.
fn parse_quoted(cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
    let start = cursor.position();
    cursor.advance(); // "

    let mut body = Vec::new();
    loop {
        match cursor.advance() {
            Some(b'"') => break,
            Some(b'\\') => match cursor.advance() {
                Some(byte @ (b'"' | b'\\')) => body.push(byte),
                Some(byte) => {
                    return Err(malformed(cursor, &format!("invalid escape: \\{}", byte as char)));
                }
                // A dangling backslash may be an escape cut short.
                None => return Err(Error::incomplete(1)),
            },
            Some(byte) => body.push(byte),
            // The closing quote is past the end of the buffer and the
            // completed length is unknown; ask for the minimal refill.
            None => return Err(Error::incomplete(1)),
        }
    }

    ensure_utf8(&body, start)?;
    Ok(body)
}

/// Parses a literal string `{n}` followed by exactly `n` raw bytes,
/// spaces, parens, and quotes included. The body is kept as-is; it may
/// contain any byte, valid UTF-8 or not.
///
/// A header without its closing `}` is malformed rather than truncated:
/// the brace must appear immediately after the digits already seen, so
/// more bytes cannot repair it.
fn parse_literal(cursor: &mut Cursor<'_>) -> Result<Vec<u8>> {
    cursor.advance(); // {

    if !matches!(cursor.peek(), Some(b'0'..=b'9')) {
        return Err(malformed(cursor, "malformed literal header"));
    }
    let declared = parse_number(cursor)?;
    if cursor.advance() != Some(b'}') {
        return Err(malformed(cursor, "malformed literal header"));
    }

    let len = usize::try_from(declared)
        .map_err(|_| malformed(cursor, "literal length out of range"))?;
    let available = cursor.remaining().len();
    if available < len {
        return Err(Error::incomplete(len - available));
    }

    Ok(cursor.take(len).to_vec())
}

/// Parses bracketed status text, brackets excluded. The separator after
/// `]` is consumed by the shared sibling rule.
fn parse_response_text(cursor: &mut Cursor<'_>) -> Result<String> {
    cursor.advance(); // [

    let Some(end) = cursor.find(b']') else {
        // The closing bracket may still be in flight.
        return Err(Error::incomplete(1));
    };
    let start = cursor.position();
    let body = cursor.take(end).to_vec();
    cursor.advance(); // ]

    into_utf8(body, start)
}

/// Parses an atom: everything up to the nearest space or `)`, or to the
/// end of the buffer if neither occurs.
fn parse_atom(cursor: &mut Cursor<'_>) -> Result<String> {
    let len = cursor
        .remaining()
        .iter()
        .position(|&b| b == b' ' || b == b')')
        .unwrap_or(cursor.remaining().len());

    let start = cursor.position();
    let body = cursor.take(len).to_vec();
    into_utf8(body, start)
}

fn into_utf8(bytes: Vec<u8>, position: usize) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| Error::Malformed {
        position,
        message: "invalid UTF-8 in argument".to_string(),
    })
}

fn ensure_utf8(bytes: &[u8], position: usize) -> Result<()> {
    match std::str::from_utf8(bytes) {
        Ok(_) => Ok(()),
        Err(_) => Err(Error::Malformed {
            position,
            message: "invalid UTF-8 in argument".to_string(),
        }),
    }
}

fn malformed(cursor: &Cursor<'_>, message: &str) -> Error {
    Error::Malformed {
        position: cursor.position(),
        message: message.to_string(),
    }
}
