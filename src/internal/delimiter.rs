use crate::Lexer;

use super::Outcome;

/// The `{{` that opens an interpolation.
pub(crate) const INTERPOLATION_START: [char; 2] = ['{', '{'];
/// The `}}` that closes an interpolation.
pub(crate) const INTERPOLATION_END: [char; 2] = ['}', '}'];
/// The `/>` that ends a self-closing tag.
pub(crate) const SELF_CLOSING_TAG_DELIMITER: [char; 2] = ['/', '>'];

/// Recognizes a fixed two-character delimiter at the cursor.
///
/// A mismatch on the first character consumes nothing. A mismatch on the second character has
/// already consumed the first one and fails the scan.
pub(crate) fn scan_delimiter<L: Lexer + ?Sized>(lexer: &mut L, delimiter: [char; 2]) -> Outcome {
    let [first, second] = delimiter;
    if lexer.lookahead() != Some(first) {
        return Outcome::Declined;
    }
    lexer.advance(false);
    if lexer.lookahead() != Some(second) {
        return Outcome::Failed;
    }
    lexer.advance(false);
    Outcome::Accepted
}
