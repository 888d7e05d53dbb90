//! Module with the closed set of token kinds the scanner can report.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, WxmlError, WxmlErrorKind};

/// The kinds of tokens recognized by the external scanner.
///
/// The discriminants follow the order in which the grammar declares its external tokens. The host
/// engine indexes both the admissibility flags and the reported result symbol by this order, so
/// it must never be changed independently of the grammar.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[repr(u16)]
pub enum TokenKind {
    /// The name of an opening tag, e.g. `view` in `<view>`.
    StartTagName = 0,
    /// The name of a closing tag, e.g. `view` in `</view>`.
    EndTagName = 1,
    /// The `/>` that ends a self-closing tag.
    SelfClosingTagDelimiter = 2,
    /// The verbatim body of a `<wxs>` element.
    RawText = 3,
    /// A complete `<!-- ... -->` comment.
    Comment = 4,
    /// The `{{` that opens an interpolation.
    InterpolationStart = 5,
    /// The `}}` that closes an interpolation.
    InterpolationEnd = 6,
}

impl TokenKind {
    /// The number of token kinds.
    pub const COUNT: usize = 7;

    /// All token kinds in symbol order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::StartTagName,
        TokenKind::EndTagName,
        TokenKind::SelfClosingTagDelimiter,
        TokenKind::RawText,
        TokenKind::Comment,
        TokenKind::InterpolationStart,
        TokenKind::InterpolationEnd,
    ];

    /// Returns the symbol index of the token kind.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the name of the token kind as used in the grammar.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::StartTagName => "start_tag_name",
            TokenKind::EndTagName => "end_tag_name",
            TokenKind::SelfClosingTagDelimiter => "self_closing_tag_delimiter",
            TokenKind::RawText => "raw_text",
            TokenKind::Comment => "comment",
            TokenKind::InterpolationStart => "interpolation_start",
            TokenKind::InterpolationEnd => "interpolation_end",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<usize> for TokenKind {
    type Error = WxmlError;

    fn try_from(index: usize) -> Result<Self> {
        TokenKind::ALL
            .get(index)
            .copied()
            .ok_or_else(|| WxmlError::new(WxmlErrorKind::UnknownTokenKind(index)))
    }
}

impl From<TokenKind> for u16 {
    fn from(kind: TokenKind) -> Self {
        kind as u16
    }
}
