//! seqscript-parser - Parser for the seqscript language
//!
//! Converts sequence-diagram text into a stream of statements:
//! participant definitions, message exchanges, and blank lines.
//! Tokens are pulled from the scanner on demand with one token of
//! pushback; each [`Parser::parse_next`] call yields one statement.
//!
//! # Example
//!
//! ```rust
//! use seqscript_parser::{Parser, Statement};
//!
//! let source = "ACTOR me\nPARTICIPANT world as w\nme -> w : hello\n";
//! let mut parser = Parser::new(source);
//!
//! while let Some(statement) = parser.parse_next().unwrap() {
//!     println!("{:?}", statement);
//! }
//!
//! // Declaration order, available to a downstream renderer
//! assert_eq!(parser.definitions().len(), 2);
//! ```

pub mod ast;
pub mod parser;

pub use ast::{Arrow, Definition, Message, ParticipantKind, Statement};
pub use parser::{parse, Parser};
