use crate::Lexer;

use super::Outcome;

/// The opening delimiter of a comment.
pub(crate) const COMMENT_OPEN: [char; 4] = ['<', '!', '-', '-'];

/// Recognizes a complete `<!-- ... -->` comment.
///
/// Declines if the cursor is not on `<`. Once the `<` is consumed the scan is committed: a
/// mismatch in the rest of the opening delimiter fails, and so does reaching the end of the input
/// before the closing `-->`.
pub(crate) fn scan_comment<L: Lexer + ?Sized>(lexer: &mut L) -> Outcome {
    match open_comment(lexer) {
        0 => Outcome::Declined,
        opened if opened < COMMENT_OPEN.len() => Outcome::Failed,
        _ => scan_comment_body(lexer),
    }
}

/// Consumes the longest prefix of [`COMMENT_OPEN`] at the cursor and returns its length.
pub(crate) fn open_comment<L: Lexer + ?Sized>(lexer: &mut L) -> usize {
    let mut opened = 0;
    for expected in COMMENT_OPEN {
        if lexer.lookahead() != Some(expected) {
            break;
        }
        lexer.advance(false);
        opened += 1;
    }
    opened
}

/// Consumes the rest of a comment after its opening delimiter, up to and including `-->`.
pub(crate) fn scan_comment_body<L: Lexer + ?Sized>(lexer: &mut L) -> Outcome {
    // Consecutive dashes seen right before the current character.
    let mut dashes = 0usize;
    while let Some(c) = lexer.lookahead() {
        lexer.advance(false);
        match c {
            '-' => dashes += 1,
            '>' if dashes >= 2 => return Outcome::Accepted,
            _ => dashes = 0,
        }
    }
    Outcome::Failed
}
