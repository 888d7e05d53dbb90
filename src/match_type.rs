#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Position, PositionProvider, Span, TokenKind};

/// A token recognized by the scanner.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// The kind of the recognized token.
    kind: TokenKind,
    /// The underlying match span. Trivia skipped before the token is not part of it.
    span: Span,
}

impl Match {
    /// Create a new match.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Get the start of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Get the end of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the span as range
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.span.range()
    }

    /// Get the length of the match.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if the match is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Get the token kind of the match.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Attaches line and column positions to the match.
    pub fn with_positions<P: PositionProvider + ?Sized>(&self, provider: &P) -> MatchExt {
        MatchExt {
            kind: self.kind,
            span: self.span,
            start_location: provider.position(self.start()),
            end_location: provider.position(self.end()),
        }
    }
}

/// A match with start and end positions.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchExt {
    /// The kind of the recognized token.
    kind: TokenKind,
    /// The underlying match span.
    span: Span,
    /// The position of the start of the match.
    start_location: Position,
    /// The position of the end of the match.
    /// The end position is exclusive.
    end_location: Position,
}

impl MatchExt {
    /// Get the token kind of the match.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Get the span of the match.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the position of the first character of the match.
    #[inline]
    pub fn start_location(&self) -> Position {
        self.start_location
    }

    /// Get the position after the last character of the match.
    #[inline]
    pub fn end_location(&self) -> Position {
        self.end_location
    }
}
