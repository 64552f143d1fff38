//! Densa Core - Outcome and error types
//!
//! This crate provides the types every Densa operation reports through:
//! - `ErrorCode`: the two-valued Success/Failure outcome
//! - `MatrixError`: the failure reason behind a `Failure`
//! - `Limits`: allocation policy for new matrices

mod outcome;
mod error;
mod limits;

pub use outcome::{ErrorCode, is_success, describe};
pub use error::{MatrixError, MatrixResult, Outcome, codes};
pub use limits::{Limits, DEFAULT_MAX_ENTRIES};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ErrorCode, MatrixError, MatrixResult, Outcome, Limits};
}
