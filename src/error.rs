use thiserror::Error;

/// Errors surfaced by the preprocessing filters.
///
/// Everything here is a caller error detected before any pixel is touched;
/// there are no transient or retryable failure modes in pure computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrepError {
    #[error("buffer length {actual} does not match {width}x{height}x4 = {expected}")]
    ShapeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
