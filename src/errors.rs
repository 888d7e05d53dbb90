use thiserror::Error;

/// The result type for the `wxml_scanner` crate.
pub type Result<T> = std::result::Result<T, WxmlError>;

/// The error type for the `wxml_scanner` crate.
///
/// Scanning itself never fails with an error, a failed scan is reported as no match. Errors only
/// arise where the host hands over data that cannot be interpreted, e.g. an unknown symbol index
/// or an offset that does not point into the input.
#[derive(Error, Debug)]
pub struct WxmlError {
    /// The source of the error.
    pub source: Box<WxmlErrorKind>,
}

impl WxmlError {
    /// Create a new `WxmlError`.
    pub fn new(kind: WxmlErrorKind) -> Self {
        WxmlError {
            source: Box::new(kind),
        }
    }

    /// Returns the kind of the error.
    pub fn kind(&self) -> &WxmlErrorKind {
        &self.source
    }
}

impl std::fmt::Display for WxmlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl From<WxmlErrorKind> for WxmlError {
    fn from(kind: WxmlErrorKind) -> Self {
        WxmlError::new(kind)
    }
}

/// The error kind type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WxmlErrorKind {
    /// A symbol index does not denote one of the external token kinds.
    #[error("Unknown token kind index {0}")]
    UnknownTokenKind(usize),

    /// The host supplied fewer admissibility flags than there are token kinds.
    #[error("Admissibility set has {actual} entries, expected at least {expected}")]
    AdmissibilityLength {
        /// The number of token kinds.
        expected: usize,
        /// The number of flags supplied.
        actual: usize,
    },

    /// A scan offset lies beyond the end of the input.
    #[error("Offset {offset} is out of bounds for input of length {len}")]
    OffsetOutOfBounds {
        /// The requested offset.
        offset: usize,
        /// The length of the input in bytes.
        len: usize,
    },

    /// A scan offset lies inside a multi-byte character.
    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
}
