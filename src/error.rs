use std::{error::Error, fmt, io};

/// The crate's result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Discriminant of a `DecodeError`, for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    OutOfBounds,
    DimensionOverflow,
    ShapeMismatch,
    Io,
}

/// Failures while decoding or encoding a net-bin buffer.
///
/// Every decode failure is fatal: the partially built report is dropped and
/// only the error reaches the caller.
#[derive(Debug)]
pub enum DecodeError {
    /// A read asked for more bytes than remain in the buffer.
    OutOfBounds {
        offset: usize,
        requested: usize,
        remaining: usize,
    },
    /// `rows * cols` (or its byte length) does not fit the size type.
    DimensionOverflow { offset: usize, rows: u64, cols: u64 },
    /// A vector or matrix does not have the length the next layer expects.
    ShapeMismatch { expected: usize, got: usize },
    Io(io::Error),
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::OutOfBounds { .. } => DecodeErrorKind::OutOfBounds,
            DecodeError::DimensionOverflow { .. } => DecodeErrorKind::DimensionOverflow,
            DecodeError::ShapeMismatch { .. } => DecodeErrorKind::ShapeMismatch,
            DecodeError::Io(_) => DecodeErrorKind::Io,
        }
    }

    /// Byte offset in the buffer where the failure was detected.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DecodeError::OutOfBounds { offset, .. } => Some(*offset),
            DecodeError::DimensionOverflow { offset, .. } => Some(*offset),
            DecodeError::ShapeMismatch { .. } | DecodeError::Io(_) => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::OutOfBounds {
                offset,
                requested,
                remaining,
            } => write!(
                f,
                "out of bounds at offset {offset}: requested {requested} bytes, {remaining} remaining"
            ),
            DecodeError::DimensionOverflow { offset, rows, cols } => write!(
                f,
                "dimension overflow at offset {offset}: {rows} rows x {cols} cols"
            ),
            DecodeError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected} values, got {got}")
            }
            DecodeError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Boundary conversion for binaries / I/O APIs.
impl From<DecodeError> for io::Error {
    fn from(value: DecodeError) -> Self {
        match value {
            DecodeError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
