//! Integration tests for the seqscript language
//!
//! This crate drives the whole pipeline end to end:
//! Source → Scanner → Parser → Statement stream + participant table

use seqscript_error::ParseError;
use seqscript_parser::{Definition, Parser, Statement};

/// Result of parsing a seqscript source end to end
#[derive(Debug)]
pub struct ParseResult {
    /// Statements in input order, up to the first error
    pub statements: Vec<Statement>,
    /// Participant table accumulated by the session
    pub definitions: Vec<Definition>,
    /// The structural error that stopped the session, if any
    pub error: Option<ParseError>,
}

impl ParseResult {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Parses source code through the full pipeline
pub fn parse_source(source: &str) -> ParseResult {
    let mut parser = Parser::new(source);
    let mut statements = Vec::new();
    let mut error = None;

    loop {
        match parser.parse_next() {
            Ok(Some(statement)) => statements.push(statement),
            Ok(None) => break,
            Err(err) => {
                error = Some(err);
                break;
            }
        }
    }

    ParseResult {
        statements,
        definitions: parser.definitions().to_vec(),
        error,
    }
}

/// Asserts that source parses without errors
pub fn assert_parses(source: &str) -> ParseResult {
    let result = parse_source(source);
    if let Some(err) = &result.error {
        panic!("Expected source to parse, but got: {}", err);
    }
    result
}

/// Asserts that source fails to parse, returning the error message
pub fn assert_parse_fails(source: &str) -> String {
    let result = parse_source(source);
    match result.error {
        Some(err) => err.to_string(),
        None => panic!("Expected source to fail parsing, but it succeeded"),
    }
}
