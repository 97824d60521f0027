//! Byte cursor over a response line.

/// Cursor state over the input buffer.
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the input.
    pub(crate) const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Returns the current byte position.
    pub(crate) const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining input.
    pub(crate) fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Peeks at the current byte without consuming it.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Advances by one byte and returns it.
    pub(crate) fn advance(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    /// Consumes exactly `n` bytes, which the caller has checked are
    /// available, and returns them.
    pub(crate) fn take(&mut self, n: usize) -> &'a [u8] {
        let slice = &self.input[self.pos..self.pos + n];
        self.pos += n;
        slice
    }

    /// Offset of the next occurrence of `byte`, relative to the cursor.
    pub(crate) fn find(&self, byte: u8) -> Option<usize> {
        self.remaining().iter().position(|&b| b == byte)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_and_advance() {
        let mut cursor = Cursor::new(b"ab");

        assert_eq!(cursor.peek(), Some(b'a'));
        assert_eq!(cursor.advance(), Some(b'a'));
        assert_eq!(cursor.advance(), Some(b'b'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_take_and_remaining() {
        let mut cursor = Cursor::new(b"hello world");

        assert_eq!(cursor.take(5), b"hello");
        assert_eq!(cursor.remaining(), b" world");
    }

    #[test]
    fn test_find_is_relative() {
        let mut cursor = Cursor::new(b"ab]cd]");
        cursor.take(3);

        assert_eq!(cursor.find(b']'), Some(2));
        assert_eq!(cursor.find(b'x'), None);
    }
}
