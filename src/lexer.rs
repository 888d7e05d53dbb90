/// The read cursor supplied by the host parsing engine.
///
/// The scanner never owns the input. It reads the current character, asks the host to advance,
/// and marks where the token ends. The reported token always starts at the first character that
/// was advanced over with `skip == false` and ends at the last call to [`Lexer::mark_end`], or at
/// the current position if `mark_end` was never called.
///
/// A failed scan leaves the cursor in an arbitrary position. The host is expected to restore it
/// before it tries its own terminals.
pub trait Lexer {
    /// Returns the current character, or `None` at the end of the input.
    fn lookahead(&self) -> Option<char>;

    /// Advances the cursor by one character.
    ///
    /// With `skip` set the consumed character is trivia: it counts for source positions but the
    /// token start moves past it.
    fn advance(&mut self, skip: bool);

    /// Marks the current position as the end of the token without stopping the scan.
    fn mark_end(&mut self);

    /// Checks whether the cursor is at the end of the input.
    fn is_eof(&self) -> bool {
        self.lookahead().is_none()
    }
}

impl<L: Lexer + ?Sized> Lexer for &mut L {
    fn lookahead(&self) -> Option<char> {
        (**self).lookahead()
    }

    fn advance(&mut self, skip: bool) {
        (**self).advance(skip)
    }

    fn mark_end(&mut self) {
        (**self).mark_end()
    }

    fn is_eof(&self) -> bool {
        (**self).is_eof()
    }
}
