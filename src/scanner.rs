use log::{debug, trace};

use crate::{internal::dispatch, Lexer, Match, Result, StrLexer, TokenKind, ValidSymbols};

/// The external scanner of the WXML grammar.
///
/// The host parsing engine calls [`Scanner::scan`] whenever the grammar admits one of the
/// external [`TokenKind`]s. The scanner skips leading whitespace, tries its recognizers in a fixed
/// priority order and reports the first token that matches. If none does, the grammar falls back
/// to its own terminals.
///
/// The scanner is stateless. Nothing survives between two scans, so the session hooks the host
/// expects ([`Scanner::reset`], [`Scanner::serialize`] and [`Scanner::deserialize`]) have nothing
/// to do, and independent parse sessions can share one instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scanner;

impl Scanner {
    /// Creates a new scanner.
    pub fn new() -> Self {
        Scanner
    }

    /// Scans for one admissible token at the cursor of `lexer`.
    ///
    /// Returns the kind of the recognized token, whose span is defined by the cursor: it starts
    /// after the skipped whitespace and ends at the last marked end or the current position.
    /// Returns `None` if no admissible token starts here. The cursor may have moved in that case
    /// and the host has to restore it.
    pub fn scan<L: Lexer + ?Sized>(
        &self,
        lexer: &mut L,
        valid: &ValidSymbols,
    ) -> Option<TokenKind> {
        let result = dispatch(lexer, valid);
        trace!("Scan result: {:?}", result);
        result
    }

    /// Runs a single scan over `input`, starting at the byte `offset`.
    ///
    /// Fails if the offset does not point to a character boundary within `input`.
    pub fn scan_str(
        &self,
        input: &str,
        offset: usize,
        valid: &ValidSymbols,
    ) -> Result<Option<Match>> {
        let mut lexer = StrLexer::new(input).with_offset(offset)?;
        Ok(self
            .scan(&mut lexer, valid)
            .map(|kind| Match::new(kind, lexer.token_span())))
    }

    /// Resets the scanner to its initial state.
    pub fn reset(&mut self) {}

    /// Writes the state of the scanner to `buffer` and returns the number of bytes written.
    ///
    /// The scanner has no state, so nothing is written and the result is always zero.
    pub fn serialize(&self, _buffer: &mut [u8]) -> usize {
        0
    }

    /// Restores the state of the scanner from `data`.
    ///
    /// Any input is accepted and ignored.
    pub fn deserialize(&mut self, data: &[u8]) {
        if !data.is_empty() {
            debug!("Ignoring {} bytes of serialized scanner state", data.len());
        }
    }
}
