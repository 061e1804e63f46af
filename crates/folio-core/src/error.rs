//! Error types for window requests.

use thiserror::Error;

/// Reasons a window request is rejected under [`crate::WindowPolicy::Strict`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    /// Not enough slots to hold both edges, one ellipsis and a page on each side.
    #[error("max length {max_length} is below the minimum of {minimum}")]
    MaxLengthTooSmall {
        /// Requested slot budget.
        max_length: usize,
        /// Smallest budget the windowing arithmetic supports.
        minimum: usize,
    },
    /// Current page does not address a page of the collection.
    #[error("current page {current_page} is outside the range of {last_page} pages")]
    CurrentPageOutOfRange {
        /// Requested current page.
        current_page: usize,
        /// Total page count supplied with the request.
        last_page: usize,
    },
}

/// Convenience alias for window computation results.
pub type WindowResult<T> = Result<T, WindowError>;

/// Raised when a policy name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown window policy '{value}' (expected permissive, strict or clamp)")]
pub struct ParsePolicyError {
    /// Text that failed to parse.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_errors_render_their_fields() {
        let small = WindowError::MaxLengthTooSmall {
            max_length: 3,
            minimum: 5,
        };
        assert_eq!(small.to_string(), "max length 3 is below the minimum of 5");

        let range = WindowError::CurrentPageOutOfRange {
            current_page: 9,
            last_page: 4,
        };
        assert_eq!(
            range.to_string(),
            "current page 9 is outside the range of 4 pages"
        );
    }

    #[test]
    fn policy_parse_error_names_the_value() {
        let err = ParsePolicyError {
            value: "lenient".to_string(),
        };
        assert!(err.to_string().contains("'lenient'"));
    }
}
