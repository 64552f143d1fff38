//! Two-valued outcome of every fallible matrix operation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of an operation: it either completed or it did not.
///
/// There is deliberately no taxonomy here. Reasons for diagnostics live on
/// [`MatrixError`](crate::MatrixError), which always collapses to `Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCode {
    Success,
    Failure,
}

impl ErrorCode {
    pub fn is_success(self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Fixed human-readable text for the code
    pub fn describe(self) -> &'static str {
        if self.is_success() {
            return "No error In the code";
        }
        "Error in the code"
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// True iff `code` is [`ErrorCode::Success`]
pub fn is_success(code: ErrorCode) -> bool {
    code.is_success()
}

/// Textual message for `code`
pub fn describe(code: ErrorCode) -> &'static str {
    code.describe()
}

impl<T, E> From<&Result<T, E>> for ErrorCode {
    fn from(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => ErrorCode::Success,
            Err(_) => ErrorCode::Failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(is_success(ErrorCode::Success));
        assert!(!is_success(ErrorCode::Failure));
    }

    #[test]
    fn test_describe_distinguishes_codes() {
        assert_eq!(describe(ErrorCode::Success), "No error In the code");
        assert_eq!(describe(ErrorCode::Failure), "Error in the code");
        assert_ne!(describe(ErrorCode::Success), describe(ErrorCode::Failure));
    }

    #[test]
    fn test_display_matches_describe() {
        assert_eq!(ErrorCode::Failure.to_string(), ErrorCode::Failure.describe());
    }

    #[test]
    fn test_from_result() {
        let ok: Result<u8, ()> = Ok(1);
        let err: Result<u8, ()> = Err(());
        assert_eq!(ErrorCode::from(&ok), ErrorCode::Success);
        assert_eq!(ErrorCode::from(&err), ErrorCode::Failure);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ErrorCode::Failure).unwrap();
        assert_eq!(json, "\"failure\"");
        let back: ErrorCode = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(back, ErrorCode::Success);
    }
}
