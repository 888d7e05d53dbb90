use crate::Lexer;

use super::Outcome;

/// The name of the only element whose body is raw text.
pub const RAW_TEXT_ELEMENT: &str = "wxs";

/// Recognizes the body of a `<wxs>` element, up to but excluding its closing tag.
///
/// On every `<` the position is marked as a provisional token end and the closing tag is matched
/// speculatively. If it does not match, the consumed characters, the `<` included, are content
/// and the scan continues at the first mismatching character. An empty body fails, so the grammar
/// matches the closing tag directly. At the end of the input a non-empty body is accepted.
pub(crate) fn scan_raw_text<L: Lexer + ?Sized>(lexer: &mut L) -> Outcome {
    scan_body(lexer, false)
}

/// Continues a body whose first `consumed` characters are already behind the cursor, without an
/// end mark. They are the part of `<!--` that a broken off comment attempt left behind.
pub(crate) fn resume_raw_text<L: Lexer + ?Sized>(lexer: &mut L, consumed: usize) -> Outcome {
    match consumed {
        0 => scan_raw_text(lexer),
        // Only the `<` is consumed, it may still open the closing tag of an empty body.
        1 => {
            if after_open_angle_is_closing_tag(lexer) {
                Outcome::Failed
            } else {
                scan_body(lexer, true)
            }
        }
        _ => scan_body(lexer, true),
    }
}

fn scan_body<L: Lexer + ?Sized>(lexer: &mut L, mut has_content: bool) -> Outcome {
    while let Some(c) = lexer.lookahead() {
        if c == '<' {
            lexer.mark_end();
            if at_closing_tag(lexer) {
                return if has_content {
                    Outcome::Accepted
                } else {
                    Outcome::Failed
                };
            }
        } else {
            lexer.advance(false);
        }
        has_content = true;
    }

    if has_content {
        // Any earlier mark belongs to a `<` that turned out to be content.
        lexer.mark_end();
        Outcome::Accepted
    } else {
        Outcome::Declined
    }
}

/// Advances over `<`, `/` and the element name, compared case-insensitively, and checks that `>`
/// follows. Stops on the first character that does not match.
fn at_closing_tag<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    lexer.advance(false);
    after_open_angle_is_closing_tag(lexer)
}

fn after_open_angle_is_closing_tag<L: Lexer + ?Sized>(lexer: &mut L) -> bool {
    if lexer.lookahead() != Some('/') {
        return false;
    }
    lexer.advance(false);
    for expected in RAW_TEXT_ELEMENT.chars() {
        match lexer.lookahead() {
            Some(c) if c.eq_ignore_ascii_case(&expected) => lexer.advance(false),
            _ => return false,
        }
    }
    lexer.lookahead() == Some('>')
}
