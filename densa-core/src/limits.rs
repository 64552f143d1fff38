//! Allocation limits for new matrices

use crate::{MatrixError, MatrixResult};
use serde::{Deserialize, Serialize};

/// Default cap on entries per matrix (2 GiB of `f64`)
pub const DEFAULT_MAX_ENTRIES: usize = 1 << 28;

/// Allocation policy applied when a matrix is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest `height * width` accepted
    pub max_entries: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { max_entries: DEFAULT_MAX_ENTRIES }
    }
}

impl Limits {
    /// No cap beyond what `usize` can count
    pub fn unbounded() -> Self {
        Limits { max_entries: usize::MAX }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Entry count for a `height x width` matrix, if it fits the policy
    pub fn check(&self, height: usize, width: usize) -> MatrixResult<usize> {
        match height.checked_mul(width) {
            Some(entries) if entries <= self.max_entries => Ok(entries),
            _ => Err(MatrixError::CapacityExceeded {
                height,
                width,
                limit: self.max_entries,
            }),
        }
    }
}
