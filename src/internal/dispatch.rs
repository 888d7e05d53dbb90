use log::trace;

use crate::{Lexer, TokenKind, ValidSymbols};

use super::{
    comment::{open_comment, scan_comment, scan_comment_body, COMMENT_OPEN},
    delimiter::{
        scan_delimiter, INTERPOLATION_END, INTERPOLATION_START, SELF_CLOSING_TAG_DELIMITER,
    },
    raw_text::{resume_raw_text, scan_raw_text},
    tag_name::scan_tag_name,
    whitespace::skip_whitespace,
    Outcome,
};

/// A recognizer the dispatch can try.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Candidate {
    InterpolationStart,
    InterpolationEnd,
    Comment,
    RawText,
    TagName,
    SelfClosingTagDelimiter,
}

/// The order in which candidates are tried. It only matters when the grammar admits several token
/// kinds at once.
pub(crate) const DISPATCH_ORDER: [Candidate; 6] = [
    Candidate::InterpolationStart,
    Candidate::InterpolationEnd,
    Candidate::Comment,
    Candidate::RawText,
    Candidate::TagName,
    Candidate::SelfClosingTagDelimiter,
];

impl Candidate {
    /// Returns the kind this candidate reports, or `None` if the grammar does not admit it.
    ///
    /// Start and end tag names share one recognizer. The start tag name wins if both are
    /// admissible.
    pub(crate) fn admitted_kind(self, valid: &ValidSymbols) -> Option<TokenKind> {
        let kinds: &[TokenKind] = match self {
            Candidate::InterpolationStart => &[TokenKind::InterpolationStart],
            Candidate::InterpolationEnd => &[TokenKind::InterpolationEnd],
            Candidate::Comment => &[TokenKind::Comment],
            Candidate::RawText => &[TokenKind::RawText],
            Candidate::TagName => &[TokenKind::StartTagName, TokenKind::EndTagName],
            Candidate::SelfClosingTagDelimiter => &[TokenKind::SelfClosingTagDelimiter],
        };
        kinds.iter().copied().find(|kind| valid.contains(*kind))
    }

    /// Runs the recognizer of this candidate.
    fn recognize<L: Lexer + ?Sized>(self, lexer: &mut L) -> Outcome {
        match self {
            Candidate::InterpolationStart => scan_delimiter(lexer, INTERPOLATION_START),
            Candidate::InterpolationEnd => scan_delimiter(lexer, INTERPOLATION_END),
            Candidate::Comment => scan_comment(lexer),
            Candidate::RawText => scan_raw_text(lexer),
            Candidate::TagName => scan_tag_name(lexer),
            Candidate::SelfClosingTagDelimiter => scan_delimiter(lexer, SELF_CLOSING_TAG_DELIMITER),
        }
    }

    /// Where raw text is admissible no other token can start, so its outcome ends the dispatch.
    fn is_decisive(self) -> bool {
        matches!(self, Candidate::RawText)
    }
}

/// Recognizes a comment where raw text is admissible as well.
///
/// A `<` that does not open a comment is content of the `<wxs>` body, so an attempt that breaks
/// off within `<!--` hands the consumed characters over to raw text. Returns the candidate that
/// decided together with its outcome.
fn scan_comment_in_raw_text<L: Lexer + ?Sized>(lexer: &mut L) -> (Candidate, Outcome) {
    match open_comment(lexer) {
        0 => (Candidate::Comment, Outcome::Declined),
        opened if opened < COMMENT_OPEN.len() => (Candidate::RawText, resume_raw_text(lexer, opened)),
        _ => (Candidate::Comment, scan_comment_body(lexer)),
    }
}

/// Skips leading whitespace and tries the admissible candidates in [`DISPATCH_ORDER`].
///
/// Returns the kind of the first accepted token. A candidate that fails after consuming input
/// ends the dispatch with no match, the remaining candidates would start at a shifted cursor.
pub(crate) fn dispatch<L: Lexer + ?Sized>(
    lexer: &mut L,
    valid: &ValidSymbols,
) -> Option<TokenKind> {
    skip_whitespace(lexer);

    for candidate in DISPATCH_ORDER {
        if candidate.admitted_kind(valid).is_none() {
            continue;
        }
        let (decided_by, outcome) = match candidate {
            Candidate::Comment if valid.contains(TokenKind::RawText) => {
                scan_comment_in_raw_text(lexer)
            }
            _ => (candidate, candidate.recognize(lexer)),
        };
        trace!("Candidate {:?}: {:?}", decided_by, outcome);
        match outcome {
            Outcome::Accepted => return decided_by.admitted_kind(valid),
            Outcome::Failed => return None,
            Outcome::Declined if decided_by.is_decisive() => return None,
            Outcome::Declined => {}
        }
    }
    None
}
