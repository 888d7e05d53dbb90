//! Module with a host cursor over an in-memory string.
//!
//! The [`StrLexer`] reproduces the cursor semantics of the host parsing engine, so the scanner can
//! be used and tested without the engine: skipped characters move the token start, `mark_end`
//! snapshots the end boundary and the token span reaches from the token start to the last marked
//! end, or to the current position if no end was marked.

use crate::{Lexer, Position, PositionProvider, Result, Span, WxmlError, WxmlErrorKind};

/// A [`Lexer`] over a string slice.
///
/// * `'h` represents the lifetime of the haystack being scanned.
#[derive(Debug, Clone)]
pub struct StrLexer<'h> {
    input: &'h str,
    // Byte offset of the lookahead character.
    offset: usize,
    // Byte offset of the first significant character of the current token.
    token_start: usize,
    // Byte offset recorded by the last call to `mark_end`.
    marked_end: Option<usize>,
}

impl<'h> StrLexer<'h> {
    /// Creates a lexer positioned at the start of `input`.
    pub fn new(input: &'h str) -> Self {
        Self {
            input,
            offset: 0,
            token_start: 0,
            marked_end: None,
        }
    }

    /// Moves the lexer to the given byte offset and starts a new token there.
    ///
    /// Fails if the offset is beyond the input or not on a character boundary.
    pub fn with_offset(mut self, offset: usize) -> Result<Self> {
        self.reset_to(offset)?;
        Ok(self)
    }

    /// Moves the lexer to the given byte offset and starts a new token there.
    ///
    /// A host calls this to rewind after a failed scan, or to continue after a token.
    pub fn reset_to(&mut self, offset: usize) -> Result<()> {
        if offset > self.input.len() {
            return Err(WxmlError::new(WxmlErrorKind::OffsetOutOfBounds {
                offset,
                len: self.input.len(),
            }));
        }
        if !self.input.is_char_boundary(offset) {
            return Err(WxmlError::new(WxmlErrorKind::NotCharBoundary(offset)));
        }
        self.offset = offset;
        self.token_start = offset;
        self.marked_end = None;
        Ok(())
    }

    /// Returns the input of the lexer.
    #[inline]
    pub fn input(&self) -> &'h str {
        self.input
    }

    /// Returns the byte offset of the lookahead character.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the span of the current token.
    pub fn token_span(&self) -> Span {
        Span::new(self.token_start, self.marked_end.unwrap_or(self.offset))
    }

    /// Returns the text of the current token.
    pub fn token_text(&self) -> &'h str {
        &self.input[self.token_span().range()]
    }
}

impl Lexer for StrLexer<'_> {
    #[inline]
    fn lookahead(&self) -> Option<char> {
        self.input[self.offset..].chars().next()
    }

    fn advance(&mut self, skip: bool) {
        if let Some(c) = self.lookahead() {
            self.offset += c.len_utf8();
        }
        if skip {
            self.token_start = self.offset;
        }
    }

    fn mark_end(&mut self) {
        self.marked_end = Some(self.offset);
    }
}

impl PositionProvider for StrLexer<'_> {
    /// Returns the line and column numbers of the given offset.
    /// The line number is the number of newlines before the offset plus one.
    /// The column number is the number of characters between the line start and the offset plus
    /// one.
    fn position(&self, offset: usize) -> Position {
        let mut offset = offset.min(self.input.len());
        while !self.input.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &self.input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Position::new(line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_moves_token_start() {
        let mut lexer = StrLexer::new("  ab");
        lexer.advance(true);
        lexer.advance(true);
        lexer.advance(false);
        assert_eq!(Span::new(2, 3), lexer.token_span());
        assert_eq!("a", lexer.token_text());
        assert_eq!(Some('b'), lexer.lookahead());
    }

    #[test]
    fn test_mark_end_bounds_the_token() {
        let mut lexer = StrLexer::new("abc</wxs>");
        for _ in 0..3 {
            lexer.advance(false);
        }
        lexer.mark_end();
        lexer.advance(false);
        lexer.advance(false);
        assert_eq!("abc", lexer.token_text());
        assert_eq!(5, lexer.offset());
    }

    #[test]
    fn test_advance_at_eof_is_a_no_op() {
        let mut lexer = StrLexer::new("é");
        lexer.advance(false);
        assert!(lexer.is_eof());
        lexer.advance(false);
        assert_eq!(2, lexer.offset());
        assert_eq!("é", lexer.token_text());
    }

    #[test]
    fn test_with_offset_errors() {
        let error = StrLexer::new("héllo").with_offset(2).unwrap_err();
        assert_eq!(&WxmlErrorKind::NotCharBoundary(2), error.kind());

        let error = StrLexer::new("abc").with_offset(4).unwrap_err();
        assert_eq!(
            &WxmlErrorKind::OffsetOutOfBounds { offset: 4, len: 3 },
            error.kind()
        );

        let lexer = StrLexer::new("abc").with_offset(3).unwrap();
        assert!(lexer.is_eof());
        assert!(lexer.token_span().is_empty());
    }

    #[test]
    fn test_positions() {
        let lexer = StrLexer::new("<view>\n  中文\n</view>");
        assert_eq!(Position::new(1, 1), lexer.position(0));
        assert_eq!(Position::new(1, 7), lexer.position(6));
        assert_eq!(Position::new(2, 1), lexer.position(7));
        // Each of the two CJK characters takes three bytes.
        assert_eq!(Position::new(2, 4), lexer.position(12));
        assert_eq!(Position::new(2, 5), lexer.position(15));
        assert_eq!(Position::new(3, 8), lexer.position(100));
    }
}
