use thiserror::Error;

/// Failures surfaced by [`HashValue`](crate::HashValue) construction and
/// formatting.
///
/// All string rejections (wrong length, misplaced separator, non-hex
/// character) collapse into [`HashValueError::InvalidFormat`]; callers only
/// learn that the candidate was not a valid representation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashValueError {
    /// A value was required but none was supplied.
    #[error("required hash input is missing")]
    NullInput,
    /// The candidate string or byte buffer is not a valid representation of
    /// a hash of the expected size.
    #[error("not a valid representation of a {expected}-byte hash")]
    InvalidFormat {
        /// Expected size in bytes.
        expected: usize,
    },
    /// `format` was called with an unknown or multi-character specifier.
    #[error("invalid format specifier {0:?}")]
    InvalidFormatSpecifier(String),
}
