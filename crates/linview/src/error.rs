/// Errors reported by the fallible entry points of this crate.
///
/// Illegal writes through statically read-only handles never get this far: they do not compile.
/// Arithmetic on degenerate input (zero-length normalization, singular matrices) is not an error
/// either; it propagates `NaN`/infinity like the underlying float operations do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A write was attempted through a handle whose runtime access mode is read-only.
    #[error("attempted to {operation} through a read-only view")]
    IllegalMutation { operation: &'static str },

    /// A slice or flat buffer did not have the number of elements the operation needs.
    #[error("dimension mismatch: expected {expected} elements, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A binary buffer ended before a value could be encoded or decoded.
    #[error("buffer too short: need {needed} bytes, {available} available")]
    BufferTooShort { needed: usize, available: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
