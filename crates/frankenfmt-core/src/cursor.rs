//! Byte-offset cursor over a format string.

use crate::args::MAX_POSITIONAL_ARGUMENTS;
use crate::directive::Span;
use crate::error::{FormatError, FormatResult};

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(crate) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Like [`bump`](Self::bump), but running out of input is an error.
    pub(crate) fn expect_char(&mut self) -> FormatResult<char> {
        self.bump().ok_or(FormatError::UnexpectedEndOfString)
    }

    pub(crate) fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume a run of ASCII digits and return its span (possibly empty).
    pub(crate) fn eat_digits(&mut self) -> Span {
        let start = self.pos;
        let n = self
            .rest()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        self.pos += n;
        Span::new(start, self.pos)
    }

    /// Consume an `N$` prefix if one starts here and return the 0-based slot.
    ///
    /// Digits not followed by `$` are left in place; they belong to a flag or
    /// a literal width.
    pub(crate) fn positional_prefix(&mut self) -> FormatResult<Option<usize>> {
        let rest = self.rest().as_bytes();
        let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || rest.get(digits) != Some(&b'$') {
            return Ok(None);
        }

        let n = rest[..digits].iter().fold(0usize, |n, b| {
            n.saturating_mul(10).saturating_add(usize::from(b - b'0'))
        });
        if n == 0 {
            return Err(FormatError::ZeroPositionalArgument);
        }
        if n > MAX_POSITIONAL_ARGUMENTS {
            return Err(FormatError::PositionalArgumentOutOfRange(n));
        }

        self.pos += digits + 1;
        Ok(Some(n - 1))
    }
}
