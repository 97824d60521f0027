//! # imap-args
//!
//! Parser for the argument strings of IMAP server responses.
//!
//! Given the text that follows a response tag and command word, the parser
//! produces a tree of typed arguments: atoms, numbers, quoted and literal
//! strings, bracketed status text, and nested parenthesized lists. It
//! performs no I/O and interprets no command semantics; it only tokenizes.
//!
//! ## Partial input
//!
//! IMAP literal strings carry a length prefix, so a streaming reader can
//! hand the parser a line that is known to be truncated. In that case
//! [`parse_args`] returns [`Error::Incomplete`] with the minimum number of
//! additional bytes required; the caller refills its buffer and parses the
//! same line again from the start. Already-parsed sibling arguments cost
//! nothing to re-parse because the parser is a pure function of the text.
//!
//! ```
//! use imap_args::{parse_args, Arg};
//!
//! let parsed = parse_args(br#"(\HasNoChildren) "." "INBOX""#).unwrap();
//! assert_eq!(parsed.args.len(), 3);
//! assert_eq!(parsed.args[2], Arg::String(b"INBOX".to_vec()));
//!
//! // A literal declared as 10 bytes with only 7 in the buffer:
//! let err = parse_args(b"{10}\r\nhello").unwrap_err();
//! assert_eq!(err.bytes_needed(), Some(3));
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: the argument parser
//! - [`args`]: the argument tree and its debug rendering
//! - [`encode`]: wire re-encoding and command-line formatting

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod args;
pub mod encode;
mod error;
pub mod parser;

pub use args::{Arg, ParsedArgs, render_args};
pub use error::{Error, Result};
pub use parser::parse_args;
