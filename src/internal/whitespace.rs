use crate::Lexer;

/// Skips a maximal run of whitespace, marking it as trivia.
pub(crate) fn skip_whitespace<L: Lexer + ?Sized>(lexer: &mut L) {
    while lexer.lookahead().is_some_and(char::is_whitespace) {
        lexer.advance(true);
    }
}
