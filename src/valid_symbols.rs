//! Module with the admissibility set handed over by the host engine on every scan call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Result, TokenKind, WxmlError, WxmlErrorKind};

/// The set of token kinds the grammar accepts at the current parse position.
///
/// The scanner only reads the set. It must not assume that exactly one kind is admissible, any
/// number of flags (including none) may be set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidSymbols {
    flags: [bool; TokenKind::COUNT],
}

impl ValidSymbols {
    /// Creates a set in which no token kind is admissible.
    pub const fn none() -> Self {
        Self {
            flags: [false; TokenKind::COUNT],
        }
    }

    /// Creates a set in which every token kind is admissible.
    ///
    /// Hosts use this during error recovery.
    pub const fn all() -> Self {
        Self {
            flags: [true; TokenKind::COUNT],
        }
    }

    /// Returns a copy of the set with the given kind made admissible.
    #[must_use]
    pub fn with(mut self, kind: TokenKind) -> Self {
        self.flags[kind.index()] = true;
        self
    }

    /// Creates the set from the flag vector of the host, indexed by symbol order.
    ///
    /// Hosts may append flags for their own internal symbols, so entries beyond the known token
    /// kinds are ignored. A shorter vector is rejected.
    pub fn from_slice(flags: &[bool]) -> Result<Self> {
        if flags.len() < TokenKind::COUNT {
            return Err(WxmlError::new(WxmlErrorKind::AdmissibilityLength {
                expected: TokenKind::COUNT,
                actual: flags.len(),
            }));
        }
        let mut set = Self::none();
        set.flags.copy_from_slice(&flags[..TokenKind::COUNT]);
        Ok(set)
    }

    /// Checks whether the given kind is admissible.
    #[inline]
    pub fn contains(&self, kind: TokenKind) -> bool {
        self.flags[kind.index()]
    }

    /// Checks whether no kind is admissible.
    pub fn is_empty(&self) -> bool {
        !self.flags.iter().any(|flag| *flag)
    }

    /// Returns an iterator over the admissible kinds in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = TokenKind> + '_ {
        TokenKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.contains(*kind))
    }
}

impl FromIterator<TokenKind> for ValidSymbols {
    fn from_iter<I: IntoIterator<Item = TokenKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), ValidSymbols::with)
    }
}

impl From<TokenKind> for ValidSymbols {
    fn from(kind: TokenKind) -> Self {
        Self::none().with(kind)
    }
}
