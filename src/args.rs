//! The argument tree produced by the parser.

/// A single parsed argument.
///
/// The variant determines the payload; no argument ever carries data for
/// more than one kind. Sibling chains are plain vectors, so ownership of
/// every node is exclusive and dropping a tree recurses only as deep as the
/// list nesting, never along sibling chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// Unquoted token terminated by a space or a list-closing `)`.
    ///
    /// The bytes `NIL` parse as `Atom("NIL")`. The protocol is explicitly
    /// ambiguous about whether they denote an atom or the literal NIL, so
    /// that distinction is left to command-level interpretation.
    Atom(String),
    /// Decimal number.
    Number(i64),
    /// Quoted or literal string.
    ///
    /// Stored as bytes: a literal body may contain any byte, including
    /// ones that are not valid UTF-8. Quoted strings are validated by the
    /// parser, so their bytes are always UTF-8.
    String(Vec<u8>),
    /// Bracketed status text from responses like `OK [UIDNEXT 4392] ...`.
    ResponseText(String),
    /// Parenthesized nested argument list. `()` parses as an empty vector.
    List(Vec<Arg>),
}

impl Arg {
    /// Returns true if this argument is the atom `NIL`.
    ///
    /// The parser never consults this; commands that need null semantics
    /// perform the text comparison themselves.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Atom(s) if s == "NIL")
    }

    /// Returns the textual payload of an atom, string, or response-text
    /// argument.
    ///
    /// `None` for numbers, lists, and string bodies that are not valid
    /// UTF-8.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Atom(s) | Self::ResponseText(s) => Some(s),
            Self::String(bytes) => std::str::from_utf8(bytes).ok(),
            Self::Number(_) | Self::List(_) => None,
        }
    }
}

/// A fully parsed argument line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArgs {
    /// Top-level arguments in order of appearance.
    pub args: Vec<Arg>,
    /// Unparsed remainder of the input line. Empty after a clean parse;
    /// non-empty when the top level stopped at a stray `)`. Kept for
    /// diagnostics only.
    pub raw_tail: Vec<u8>,
}

impl ParsedArgs {
    /// Renders the tree as an indented human-readable dump, one line per
    /// argument. Purely a debug aid.
    #[must_use]
    pub fn render(&self) -> String {
        render_args(&self.args)
    }
}

/// Renders a sibling slice the way [`ParsedArgs::render`] does.
#[must_use]
pub fn render_args(args: &[Arg]) -> String {
    let mut out = String::new();
    render_into(args, 0, &mut out);
    out
}

fn render_into(args: &[Arg], indent: usize, out: &mut String) {
    use std::fmt::Write as _;

    for arg in args {
        for _ in 0..indent {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        match arg {
            Arg::Atom(s) => {
                let _ = writeln!(out, "ATOM {s}");
            }
            Arg::Number(n) => {
                let _ = writeln!(out, "NUMBER {n}");
            }
            Arg::String(bytes) => {
                let _ = writeln!(out, "STRING {}", String::from_utf8_lossy(bytes));
            }
            Arg::ResponseText(s) => {
                let _ = writeln!(out, "RESPONSE {s}");
            }
            Arg::List(children) => {
                out.push_str("LIST\n");
                render_into(children, indent + 2, out);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_is_nil() {
        assert!(Arg::Atom("NIL".to_string()).is_nil());
        assert!(!Arg::Atom("nil".to_string()).is_nil());
        assert!(!Arg::String(b"NIL".to_vec()).is_nil());
    }

    #[test]
    fn test_text_payload() {
        assert_eq!(Arg::Atom("A".to_string()).text(), Some("A"));
        assert_eq!(Arg::String(b"b".to_vec()).text(), Some("b"));
        assert_eq!(Arg::String(vec![0x80]).text(), None);
        assert_eq!(Arg::Number(3).text(), None);
        assert_eq!(Arg::List(Vec::new()).text(), None);
    }

    #[test]
    fn test_render_indents_nested_lists() {
        let args = vec![
            Arg::Atom("FLAGS".to_string()),
            Arg::List(vec![
                Arg::Atom("\\Seen".to_string()),
                Arg::Number(7),
            ]),
            Arg::String(b"done".to_vec()),
        ];

        let rendered = render_args(&args);
        assert_eq!(
            rendered,
            "ATOM FLAGS\nLIST\n  ATOM \\Seen\n  NUMBER 7\nSTRING done\n"
        );
    }

    #[test]
    fn test_render_empty_tree() {
        let parsed = ParsedArgs {
            args: Vec::new(),
            raw_tail: Vec::new(),
        };
        assert_eq!(parsed.render(), "");
    }
}
