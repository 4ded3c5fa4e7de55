use thiserror::Error;

/// Top-level error type for the geokern kernel.
#[derive(Debug, Error)]
pub enum GeokernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when a value cannot be constructed from its inputs.
///
/// Geometric queries that simply have no answer (a plane missing a circle,
/// parallel planes) are not errors; they return `None`.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Input points or vectors do not determine a unique shape.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// An argument violates a structural invariant of the value being built.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`GeokernError`].
pub type Result<T> = std::result::Result<T, GeokernError>;
