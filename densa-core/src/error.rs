//! Matrix errors
//!
//! Every error collapses to [`ErrorCode::Failure`]. The variant only says
//! why, for logging and for callers that want to report it.

use crate::ErrorCode;
use serde::Serialize;
use thiserror::Error;

/// Machine-readable reason codes
pub mod codes {
    pub const ABSENT: &str = "ABSENT";
    pub const ALLOCATION: &str = "ALLOCATION";
    pub const CAPACITY: &str = "CAPACITY";
    pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
    pub const BUFFER_LENGTH: &str = "BUFFER_LENGTH";
    pub const OUT_OF_BOUNDS: &str = "OUT_OF_BOUNDS";
}

/// Why a matrix operation could not complete
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum MatrixError {
    #[error("{op}: matrix handle is absent")]
    Absent { op: &'static str },

    #[error("could not allocate storage for {entries} entries")]
    Allocation { entries: usize },

    #[error("{height}x{width} exceeds the limit of {limit} entries")]
    CapacityExceeded { height: usize, width: usize, limit: usize },

    #[error("{op}: incompatible shapes {}x{} and {}x{}", .lhs.0, .lhs.1, .rhs.0, .rhs.1)]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("{height}x{width} matrix cannot be built from {len} values")]
    BufferLength { height: usize, width: usize, len: usize },

    #[error("index ({row}, {col}) out of bounds for {height}x{width} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

impl MatrixError {
    /// Always [`ErrorCode::Failure`]
    pub fn code(&self) -> ErrorCode {
        ErrorCode::Failure
    }

    pub fn reason_code(&self) -> &'static str {
        match self {
            MatrixError::Absent { .. } => codes::ABSENT,
            MatrixError::Allocation { .. } => codes::ALLOCATION,
            MatrixError::CapacityExceeded { .. } => codes::CAPACITY,
            MatrixError::ShapeMismatch { .. } => codes::SHAPE_MISMATCH,
            MatrixError::BufferLength { .. } => codes::BUFFER_LENGTH,
            MatrixError::OutOfBounds { .. } => codes::OUT_OF_BOUNDS,
        }
    }

    /// Same text as [`ErrorCode::describe`] for `Failure`
    pub fn describe(&self) -> &'static str {
        self.code().describe()
    }
}

pub type MatrixResult<T> = Result<T, MatrixError>;

/// Collapse a result into its [`ErrorCode`]
pub trait Outcome {
    fn code(&self) -> ErrorCode;

    fn is_success(&self) -> bool {
        self.code().is_success()
    }
}

impl<T> Outcome for MatrixResult<T> {
    fn code(&self) -> ErrorCode {
        match self {
            Ok(_) => ErrorCode::Success,
            Err(e) => e.code(),
        }
    }
}
