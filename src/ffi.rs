//! The C ABI through which a tree-sitter parser drives the scanner.
//!
//! A tree-sitter grammar with external tokens links against the six
//! `tree_sitter_wxml_external_scanner_*` functions and passes its lexer as a [`TSLexer`]. The
//! scanner is stateless, so the payload is a null pointer and the serialized state is empty.

use std::{
    ffi::{c_char, c_uint, c_void},
    ptr, slice,
};

use log::trace;

use crate::{Lexer, Scanner, TokenKind, ValidSymbols};

/// The size of the buffer tree-sitter passes to the serialize hook.
pub const SERIALIZATION_BUFFER_SIZE: usize = 1024;

/// The lexer struct of the tree-sitter runtime, as declared in `tree_sitter/parser.h`.
#[repr(C)]
pub struct TSLexer {
    /// The current character as a code point, `0` at the end of the input.
    pub lookahead: i32,
    /// The symbol of the recognized token, written by the scanner on success.
    pub result_symbol: u16,
    /// Advances by one character. With the flag set the character is skipped as whitespace.
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    /// Marks the current position as the end of the token.
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    /// Returns the column of the current position.
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    /// Checks whether the lexer is at the start of an included range.
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    /// Checks whether the lexer is at the end of the input.
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
    /// Writes a message to the debug log of the parser, if the runtime provides one.
    pub log: Option<unsafe extern "C" fn(*const TSLexer, *const c_char, ...)>,
}

impl Lexer for TSLexer {
    fn lookahead(&self) -> Option<char> {
        // SAFETY: The runtime hands out the lexer together with valid callbacks for the duration
        // of the scan call.
        if unsafe { (self.eof)(self) } {
            return None;
        }
        Some(
            u32::try_from(self.lookahead)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        )
    }

    fn advance(&mut self, skip: bool) {
        // SAFETY: See `lookahead`.
        unsafe { (self.advance)(self, skip) }
    }

    fn mark_end(&mut self) {
        // SAFETY: See `lookahead`.
        unsafe { (self.mark_end)(self) }
    }
}

/// Creates the scanner payload. The scanner is stateless, so this is a null pointer.
#[no_mangle]
pub extern "C" fn tree_sitter_wxml_external_scanner_create() -> *mut c_void {
    ptr::null_mut()
}

/// Destroys the scanner payload.
#[no_mangle]
pub extern "C" fn tree_sitter_wxml_external_scanner_destroy(_payload: *mut c_void) {}

/// Resets the scanner payload.
#[no_mangle]
pub extern "C" fn tree_sitter_wxml_external_scanner_reset(_payload: *mut c_void) {
    Scanner::new().reset();
}

/// Serializes the scanner state into `buffer` and returns the number of bytes written, which is
/// always zero.
///
/// # Safety
/// `buffer` must be null or point to [`SERIALIZATION_BUFFER_SIZE`] writable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_wxml_external_scanner_serialize(
    _payload: *mut c_void,
    buffer: *mut c_char,
) -> c_uint {
    let buffer: &mut [u8] = if buffer.is_null() {
        &mut []
    } else {
        slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE)
    };
    Scanner::new().serialize(buffer) as c_uint
}

/// Restores the scanner state from `buffer`. The content is ignored.
///
/// # Safety
/// `buffer` must be null or point to `length` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_wxml_external_scanner_deserialize(
    _payload: *mut c_void,
    buffer: *const c_char,
    length: c_uint,
) {
    let data: &[u8] = if buffer.is_null() {
        &[]
    } else {
        slice::from_raw_parts(buffer.cast::<u8>(), length as usize)
    };
    Scanner::new().deserialize(data);
}

/// Scans for one admissible external token. On success the kind is stored in
/// [`TSLexer::result_symbol`] and `true` is returned.
///
/// # Safety
/// `lexer` must be null or point to a valid lexer of the runtime, and `valid_symbols` must be
/// null or point to at least [`TokenKind::COUNT`] flags.
#[no_mangle]
pub unsafe extern "C" fn tree_sitter_wxml_external_scanner_scan(
    _payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    let Some(lexer) = lexer.as_mut() else {
        return false;
    };
    if valid_symbols.is_null() {
        return false;
    }
    let flags = slice::from_raw_parts(valid_symbols, TokenKind::COUNT);
    let valid = match ValidSymbols::from_slice(flags) {
        Ok(valid) => valid,
        Err(err) => {
            trace!("{}", err);
            return false;
        }
    };
    match Scanner::new().scan(lexer, &valid) {
        Some(kind) => {
            lexer.result_symbol = kind.into();
            true
        }
        None => false,
    }
}
