//! Diagnostic - rustc-style error presentation
//!
//! Renders a structural error with:
//! - Error code (EL001, EP001, etc.)
//! - Precise location
//! - Input snippet with an underline
//! - Optional help text

use crate::span::Span;
use std::fmt;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Fatal error - the parse session cannot continue
    Error,
    /// Warning - informational only
    Warning,
    /// Help - fix suggestion
    Help,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Help => "help",
        }
    }

    /// Returns the ANSI code for coloring (if the terminal supports it)
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold Red
            Level::Warning => "\x1b[1;33m", // Bold Yellow
            Level::Help => "\x1b[1;32m",    // Bold Green
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label pointing at a region of the input
#[derive(Debug, Clone)]
pub struct Label {
    /// Span of the region
    pub span: Span,
    /// Label message
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// Structured error code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Category (L = Scanner, P = Parser)
    pub category: char,
    /// Error number
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(category: char, number: u16) -> Self {
        Self { category, number }
    }

    // Scanner errors
    pub const ILLEGAL_CHAR: Self = Self::new('L', 1);

    // Parser errors
    pub const UNEXPECTED_TOKEN: Self = Self::new('P', 1);
    pub const EXPECTED_NAME: Self = Self::new('P', 2);
    pub const EXPECTED_ALIAS: Self = Self::new('P', 3);
    pub const MISSING_TERMINATOR: Self = Self::new('P', 4);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.category, self.number)
    }
}

/// A complete diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level
    pub level: Level,
    /// Error code (optional)
    pub code: Option<ErrorCode>,
    /// Main message
    pub message: String,
    /// Labels pointing at the input
    pub labels: Vec<Label>,
    /// Fix suggestions
    pub help: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Creates a new warning
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: Vec::new(),
        }
    }

    /// Sets the error code
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Adds a label
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Adds a help line
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }
}

/// The input text plus its name, kept for rendering diagnostics
#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Offset of each line start (for fast lookup)
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Returns one line of the input (line is 1-indexed)
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.source.len());

        Some(&self.source[start..end])
    }
}

/// Renders a diagnostic for display
pub struct DiagnosticRenderer<'a> {
    file: &'a SourceFile,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let reset = if self.use_colors { "\x1b[0m" } else { "" };
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };
        let bold = if self.use_colors { "\x1b[1m" } else { "" };
        let blue = if self.use_colors { "\x1b[1;34m" } else { "" };

        // Line 1: error[EP001]: message
        output.push_str(color);
        output.push_str(diagnostic.level.as_str());

        if let Some(code) = &diagnostic.code {
            output.push('[');
            output.push_str(&code.to_string());
            output.push(']');
        }

        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        // Labels with input snippets
        for label in &diagnostic.labels {
            // --> file:line:column
            output.push_str(&format!(
                " {}-->{} {}:{}:{}\n",
                blue,
                reset,
                self.file.name,
                label.span.start.line,
                label.span.start.column
            ));

            let Some(line_content) = self.file.get_line(label.span.start.line) else {
                continue;
            };

            let line_num = label.span.start.line;
            let line_num_width = line_num.to_string().len();
            let padding = " ".repeat(line_num_width);

            // Empty gutter line
            output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));

            // Line with the offending input
            output.push_str(&format!(
                " {}{}{} |{} {}\n",
                blue, line_num, reset, reset, line_content
            ));

            // Underline
            let col_start = label.span.start.column as usize;
            let underline_len = if label.span.start.line == label.span.end.line {
                (label.span.end.column.saturating_sub(label.span.start.column)).max(1) as usize
            } else {
                line_content.len().saturating_sub(col_start - 1).max(1)
            };

            let spaces = " ".repeat(col_start.saturating_sub(1));
            let underline = "^".repeat(underline_len);

            output.push_str(&format!(
                " {} {}|{} {}{}{} {}\n",
                padding, blue, reset, spaces, color, underline, label.message
            ));
            output.push_str(reset);
        }

        // Help lines
        for help in &diagnostic.help {
            let green = if self.use_colors { "\x1b[1;32m" } else { "" };
            output.push_str(&format!("   = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{Position, Span};

    #[test]
    fn test_diagnostic_rendering() {
        let file = SourceFile::new("demo.seq", "ACTOR me\nme => w : hello");

        let span = Span::new(Position::new(2, 4, 12), Position::new(2, 5, 13));

        let diagnostic = Diagnostic::error("unexpected token")
            .with_code(ErrorCode::UNEXPECTED_TOKEN)
            .with_label(span, "found \"=\", expected an arrow (->, -->, <-, <--)")
            .with_help("write the exchange as `me -> w : hello`");

        let renderer = DiagnosticRenderer::new(&file).without_colors();
        let output = renderer.render(&diagnostic);

        assert!(output.contains("error[EP001]"));
        assert!(output.contains("unexpected token"));
        assert!(output.contains("demo.seq:2:4"));
        assert!(output.contains("me => w : hello"));
        assert!(output.contains("help:"));
    }

    #[test]
    fn test_get_line() {
        let file = SourceFile::new("demo.seq", "first\nsecond\nthird");
        assert_eq!(file.get_line(1), Some("first"));
        assert_eq!(file.get_line(2), Some("second"));
        assert_eq!(file.get_line(3), Some("third"));
        assert_eq!(file.get_line(4), None);
    }
}
