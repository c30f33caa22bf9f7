//! seqscript-error - structural errors for the seqscript language
//!
//! This crate provides the error shape shared by the scanner, the
//! parser, and the CLI: a [`ParseError`] that always carries the
//! literal actually found and a description of what was acceptable,
//! plus a rustc-style [`Diagnostic`] renderer for presentation.
//!
//! # Example
//!
//! ```rust
//! use seqscript_error::{ParseError, ErrorCode};
//! use seqscript_error::span::{Position, Span};
//!
//! let span = Span::point(Position::new(1, 1, 0));
//! let err = ParseError::new("*", "one of ACTOR, PARTICIPANT, DATABASE", span);
//!
//! assert_eq!(
//!     err.to_string(),
//!     "found \"*\", expected one of ACTOR, PARTICIPANT, DATABASE"
//! );
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceFile};
pub use span::{Position, Span};

use thiserror::Error;

/// Default Result type for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// A structural error: a grammar violation at a required position.
///
/// Fatal to the parse session. The message always follows the shape
/// `found "<literal>", expected <description of the expected set>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("found {found:?}, expected {expected}")]
pub struct ParseError {
    /// The literal text actually found
    pub found: String,
    /// Description of the token kinds/keywords that were acceptable
    pub expected: String,
    /// Location of the offending token
    pub span: Span,
    /// Error code for diagnostic rendering
    pub code: ErrorCode,
}

impl ParseError {
    pub fn new(found: impl Into<String>, expected: impl Into<String>, span: Span) -> Self {
        Self {
            found: found.into(),
            expected: expected.into(),
            span,
            code: ErrorCode::UNEXPECTED_TOKEN,
        }
    }

    /// Sets a more specific error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = code;
        self
    }

    /// Converts the error into a renderable diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let message = match self.code {
            ErrorCode::ILLEGAL_CHAR => "unrecognized character",
            ErrorCode::EXPECTED_NAME => "expected a participant name",
            ErrorCode::EXPECTED_ALIAS => "expected an alias name",
            ErrorCode::MISSING_TERMINATOR => "statement not terminated",
            _ => "unexpected token",
        };

        Diagnostic::error(message)
            .with_code(self.code)
            .with_label(self.span, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_shape() {
        let span = Span::point(Position::new(3, 9, 20));
        let err = ParseError::new("xxx", "newline or end of input", span)
            .with_code(ErrorCode::MISSING_TERMINATOR);

        assert_eq!(err.to_string(), "found \"xxx\", expected newline or end of input");
        assert_eq!(err.span.start.line, 3);
    }

    #[test]
    fn test_to_diagnostic() {
        let span = Span::point(Position::new(1, 7, 6));
        let diag = ParseError::new("ACTOR", "name", span)
            .with_code(ErrorCode::EXPECTED_NAME)
            .to_diagnostic();

        assert_eq!(diag.code, Some(ErrorCode::EXPECTED_NAME));
        assert_eq!(diag.message, "expected a participant name");
        assert_eq!(diag.labels.len(), 1);
        assert!(diag.labels[0].message.contains("found \"ACTOR\""));
    }
}
