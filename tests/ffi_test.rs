// Drives the C ABI the way the tree-sitter runtime does.
// Run with `cargo test --test ffi_test`

use std::ptr;

use wxml_scanner::{
    ffi::{
        tree_sitter_wxml_external_scanner_create, tree_sitter_wxml_external_scanner_deserialize,
        tree_sitter_wxml_external_scanner_destroy, tree_sitter_wxml_external_scanner_reset,
        tree_sitter_wxml_external_scanner_scan, tree_sitter_wxml_external_scanner_serialize,
        TSLexer, SERIALIZATION_BUFFER_SIZE,
    },
    TokenKind,
};

/// A minimal stand-in for the lexer of the tree-sitter runtime. The `TSLexer` must be the first
/// field, the callbacks cast the lexer pointer back to the host.
#[repr(C)]
struct Host {
    lexer: TSLexer,
    input: Vec<char>,
    position: usize,
    token_start: usize,
    marked_end: Option<usize>,
}

unsafe extern "C" fn advance(lexer: *mut TSLexer, skip: bool) {
    let host = &mut *(lexer as *mut Host);
    if host.position < host.input.len() {
        host.position += 1;
    }
    if skip {
        host.token_start = host.position;
    }
    host.update_lookahead();
}

unsafe extern "C" fn mark_end(lexer: *mut TSLexer) {
    let host = &mut *(lexer as *mut Host);
    host.marked_end = Some(host.position);
}

unsafe extern "C" fn get_column(lexer: *mut TSLexer) -> u32 {
    let host = &*(lexer as *const Host);
    host.position as u32
}

unsafe extern "C" fn is_at_included_range_start(_lexer: *const TSLexer) -> bool {
    false
}

unsafe extern "C" fn eof(lexer: *const TSLexer) -> bool {
    let host = &*(lexer as *const Host);
    host.position >= host.input.len()
}

impl Host {
    fn new(input: &str) -> Self {
        let mut host = Host {
            lexer: TSLexer {
                lookahead: 0,
                result_symbol: u16::MAX,
                advance,
                mark_end,
                get_column,
                is_at_included_range_start,
                eof,
                log: None,
            },
            input: input.chars().collect(),
            position: 0,
            token_start: 0,
            marked_end: None,
        };
        host.update_lookahead();
        host
    }

    fn update_lookahead(&mut self) {
        self.lexer.lookahead = self
            .input
            .get(self.position)
            .map_or(0, |c| *c as u32 as i32);
    }

    /// Runs one scan and returns the reported kind and the token text.
    fn scan(&mut self, valid: &[TokenKind]) -> Option<(TokenKind, String)> {
        let mut flags = [false; TokenKind::COUNT];
        for kind in valid {
            flags[kind.index()] = true;
        }
        let lexer = self as *mut Host as *mut TSLexer;
        let found = unsafe {
            tree_sitter_wxml_external_scanner_scan(ptr::null_mut(), lexer, flags.as_ptr())
        };
        if !found {
            return None;
        }
        let kind = TokenKind::try_from(self.lexer.result_symbol as usize).unwrap();
        let end = self.marked_end.unwrap_or(self.position);
        Some((kind, self.input[self.token_start..end].iter().collect()))
    }
}

#[test]
fn scan_through_c_abi() {
    let mut host = Host::new("  wx-item class");
    assert_eq!(
        Some((TokenKind::StartTagName, "wx-item".to_string())),
        host.scan(&[TokenKind::StartTagName])
    );

    let mut host = Host::new("var a = b <c;\n</WXS>");
    assert_eq!(
        Some((TokenKind::RawText, "var a = b <c;\n".to_string())),
        host.scan(&[TokenKind::RawText, TokenKind::Comment])
    );

    let mut host = Host::new("<!-- 注释 -->");
    assert_eq!(
        Some((TokenKind::Comment, "<!-- 注释 -->".to_string())),
        host.scan(&[TokenKind::Comment])
    );
}

#[test]
fn failed_scan_leaves_result_symbol_untouched() {
    let mut host = Host::new("slot");
    assert_eq!(None, host.scan(&[TokenKind::StartTagName, TokenKind::EndTagName]));
    assert_eq!(u16::MAX, host.lexer.result_symbol);

    let mut host = Host::new("");
    assert_eq!(None, host.scan(&[TokenKind::RawText]));
}

#[test]
fn null_arguments_are_rejected() {
    let mut host = Host::new("view");
    let lexer = &mut host as *mut Host as *mut TSLexer;
    unsafe {
        assert!(!tree_sitter_wxml_external_scanner_scan(
            ptr::null_mut(),
            ptr::null_mut(),
            [true; TokenKind::COUNT].as_ptr()
        ));
        assert!(!tree_sitter_wxml_external_scanner_scan(
            ptr::null_mut(),
            lexer,
            ptr::null()
        ));
    }
}

#[test]
fn lifecycle_hooks_carry_no_state() {
    let payload = tree_sitter_wxml_external_scanner_create();
    assert!(payload.is_null());

    let mut buffer = [0x55 as std::ffi::c_char; SERIALIZATION_BUFFER_SIZE];
    let written =
        unsafe { tree_sitter_wxml_external_scanner_serialize(payload, buffer.as_mut_ptr()) };
    assert_eq!(0, written);
    assert!(buffer.iter().all(|b| *b == 0x55));

    let garbage = [1 as std::ffi::c_char, 2, 3];
    unsafe {
        tree_sitter_wxml_external_scanner_deserialize(payload, garbage.as_ptr(), 3);
        tree_sitter_wxml_external_scanner_deserialize(payload, ptr::null(), 0);
    }
    tree_sitter_wxml_external_scanner_reset(payload);
    tree_sitter_wxml_external_scanner_destroy(payload);
}
