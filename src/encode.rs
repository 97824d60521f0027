//! Wire re-encoding of argument trees and command-line formatting.

use crate::args::Arg;

/// Writes an astring: atoms go verbatim, anything empty or containing
/// bytes that need quoting is emitted as a quoted string.
pub fn write_astring(buf: &mut Vec<u8>, s: &str) {
    if s.is_empty() || s.bytes().any(needs_quoting) {
        write_quoted(buf, s.as_bytes());
    } else {
        buf.extend_from_slice(s.as_bytes());
    }
}

/// Returns true if the byte needs quoting.
const fn needs_quoting(b: u8) -> bool {
    matches!(b, b' ' | b'"' | b'\\' | b'(' | b')' | b'{' | b'%' | b'*') || b < 0x20 || b == 0x7F
}

/// Writes a quoted string with `"` and `\` escaped.
fn write_quoted(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.push(b'"');
    for &b in bytes {
        if b == b'"' || b == b'\\' {
            buf.push(b'\\');
        }
        buf.push(b);
    }
    buf.push(b'"');
}

/// Re-encodes a parsed argument list to wire form.
///
/// Strings always come out quoted, so a tree built from quoted-string
/// input re-parses to an equal tree.
#[must_use]
pub fn encode_args(args: &[Arg]) -> Vec<u8> {
    let mut buf = Vec::new();
    write_args(&mut buf, args);
    buf
}

/// Writes a space-separated argument list.
pub fn write_args(buf: &mut Vec<u8>, args: &[Arg]) {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            buf.push(b' ');
        }
        write_arg(buf, arg);
    }
}

/// Writes a single argument.
pub fn write_arg(buf: &mut Vec<u8>, arg: &Arg) {
    match arg {
        Arg::Atom(s) => buf.extend_from_slice(s.as_bytes()),
        Arg::Number(n) => buf.extend_from_slice(n.to_string().as_bytes()),
        Arg::String(bytes) => write_quoted(buf, bytes),
        Arg::ResponseText(s) => {
            buf.push(b'[');
            buf.extend_from_slice(s.as_bytes());
            buf.push(b']');
        }
        Arg::List(children) => {
            buf.push(b'(');
            write_args(buf, children);
            buf.push(b')');
        }
    }
}

/// Formats a command line in the fixed `COMMAND "arg1" "arg2"` template,
/// e.g. `LIST "" "*"`. Every parameter is quoted.
///
/// This is what gets sent to the connection layer; its output is the kind
/// of line the parser later consumes as a response, never as its own
/// input.
#[must_use]
pub fn format_command(name: &str, params: &[&str]) -> Vec<u8> {
    let mut buf = Vec::from(name.as_bytes());
    for param in params {
        buf.push(b' ');
        write_quoted(&mut buf, param.as_bytes());
    }
    buf
}
