#![forbid(missing_docs)]
//! # `wxml_scanner`
//! The `wxml_scanner` crate is the external scanner of a grammar for the WeiXin Markup Language
//! (WXML), the XML-like template language of mini programs with `{{ }}` interpolation and an
//! embedded script element, `<wxs>`.
//!
//! A context-free grammar cannot tokenize everything in WXML on its own. Tag names must not
//! swallow the element names the grammar treats as keywords, comments need a scan for their
//! closing delimiter, and the body of a `<wxs>` element is raw text up to its closing tag. The
//! host parsing engine hands these cases to the [`Scanner`]: on every call it passes its cursor,
//! a [`Lexer`], together with the set of token kinds the grammar admits at this position, a
//! [`ValidSymbols`] value. The scanner reports which [`TokenKind`], if any, starts there.
//!
//! The scanner is stateless. Nothing is carried from one call to the next.
//!
//! # Example
//! ```rust
//! use wxml_scanner::{Scanner, TokenKind, ValidSymbols};
//!
//! const INPUT: &str = "<wxs module=\"m\">var a = 1 < 2;</wxs>";
//!
//! let scanner = Scanner::new();
//! let valid = ValidSymbols::none()
//!     .with(TokenKind::RawText)
//!     .with(TokenKind::Comment);
//! let raw_text = scanner
//!     .scan_str(INPUT, 16, &valid)
//!     .expect("offset is valid")
//!     .expect("raw text is recognized");
//! assert_eq!(TokenKind::RawText, raw_text.kind());
//! assert_eq!("var a = 1 < 2;", &INPUT[raw_text.range()]);
//!
//! // Reserved element names are left to the grammar.
//! let name = scanner
//!     .scan_str(INPUT, 1, &TokenKind::StartTagName.into())
//!     .expect("offset is valid");
//! assert_eq!(None, name);
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Derives `Serialize` and `Deserialize` for the token kinds,
//!   admissibility sets, spans, positions and matches.
//! - `tree_sitter`: Enabled by default. Exports the `tree_sitter_wxml_external_scanner_*`
//!   functions a tree-sitter parser links against, see the `ffi` module.

/// Module with error definitions
mod errors;
pub use errors::{Result, WxmlError, WxmlErrorKind};

/// Module with the C ABI for tree-sitter parsers
#[cfg(feature = "tree_sitter")]
pub mod ffi;

/// The module with internal implementation details.
mod internal;
pub use internal::{NAME_CAPACITY, RAW_TEXT_ELEMENT, RESERVED_WORDS};

/// Module that provides the cursor interface of the host engine
mod lexer;
pub use lexer::Lexer;

/// Module that provides a Match type
mod match_type;
pub use match_type::{Match, MatchExt};

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner.
mod scanner;
pub use scanner::Scanner;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides a lexer over string slices
mod str_lexer;
pub use str_lexer::StrLexer;

/// Module that provides the token kinds
mod token_kind;
pub use token_kind::TokenKind;

/// Module that provides the admissibility set
mod valid_symbols;
pub use valid_symbols::ValidSymbols;
