/// Module that provides the comment recognizer.
mod comment;

/// Module that provides the fixed two-character delimiter recognizers.
mod delimiter;

/// Module that provides the dispatch policy over all recognizers.
mod dispatch;
pub(crate) use dispatch::dispatch;

/// Module that provides the raw text recognizer for the body of `<wxs>` elements.
mod raw_text;
pub use raw_text::RAW_TEXT_ELEMENT;

/// Module that provides the tag name recognizer and the reserved word check.
mod tag_name;
pub use tag_name::{NAME_CAPACITY, RESERVED_WORDS};

/// Module that provides the whitespace skipper.
mod whitespace;

/// The outcome of a single recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The token was recognized and consumed.
    Accepted,
    /// The token does not start here. Nothing was consumed.
    Declined,
    /// Input was consumed before the token turned out not to match.
    Failed,
}
