use log::trace;

use crate::Lexer;

use super::Outcome;

/// Element names the grammar matches as its own terminals. The scanner never claims them.
pub const RESERVED_WORDS: [&str; 6] = [
    "template", "slot", "block", "import", "include", "wxs",
];

/// The number of characters of a tag name kept for the reserved word check.
pub const NAME_CAPACITY: usize = 63;

/// Fixed-capacity, stack allocated capture of a tag name.
///
/// Characters beyond the capacity are dropped. The cursor still moves over them, only the reserved
/// word check sees the truncated prefix. No reserved word comes close to the capacity, so a
/// truncated name is never mistaken for one.
#[derive(Debug, Clone)]
pub(crate) struct NameBuffer {
    chars: [char; NAME_CAPACITY],
    len: usize,
}

impl NameBuffer {
    pub(crate) fn new() -> Self {
        Self {
            chars: ['\0'; NAME_CAPACITY],
            len: 0,
        }
    }

    /// Appends a character. Returns `false` if the buffer is full and the character was dropped.
    pub(crate) fn push(&mut self, c: char) -> bool {
        if self.len == NAME_CAPACITY {
            return false;
        }
        self.chars[self.len] = c;
        self.len += 1;
        true
    }

    pub(crate) fn as_slice(&self) -> &[char] {
        &self.chars[..self.len]
    }

    /// Case-sensitive comparison against `word`.
    pub(crate) fn matches(&self, word: &str) -> bool {
        word.chars().eq(self.as_slice().iter().copied())
    }

    pub(crate) fn is_reserved_word(&self) -> bool {
        RESERVED_WORDS.iter().any(|word| self.matches(word))
    }
}

#[inline]
fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | ':')
}

/// Recognizes a tag name, e.g. `view`, `my-component` or `wx:for-item`.
///
/// Declines if the cursor is not on a letter or underscore. Fails on a reserved word, after the
/// name was consumed.
pub(crate) fn scan_tag_name<L: Lexer + ?Sized>(lexer: &mut L) -> Outcome {
    if !lexer.lookahead().is_some_and(is_name_start) {
        return Outcome::Declined;
    }

    let mut name = NameBuffer::new();
    while let Some(c) = lexer.lookahead().filter(|c| is_name_char(*c)) {
        name.push(c);
        lexer.advance(false);
    }

    if name.is_reserved_word() {
        trace!(
            "Reserved word '{}' left to the grammar",
            name.as_slice().iter().collect::<String>()
        );
        return Outcome::Failed;
    }
    Outcome::Accepted
}
