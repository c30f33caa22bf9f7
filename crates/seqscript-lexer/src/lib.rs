//! seqscript-lexer - Scanner/Tokenizer for the seqscript language
//!
//! This crate converts sequence-diagram text into a stream of tokens.
//!
//! # Features
//!
//! - Uppercase participant keywords (`ACTOR`, `PARTICIPANT`, `DATABASE`)
//! - The four message arrows (`->`, `-->`, `<-`, `<--`)
//! - Coalesced whitespace runs and explicit newline tokens
//!   (the grammar is line-delimited)
//! - Never fails: unrecognized characters become `Illegal` tokens
//!
//! # Example
//!
//! ```rust
//! use seqscript_lexer::Scanner;
//!
//! let mut scanner = Scanner::new("me -> w : hello\n");
//!
//! loop {
//!     let token = scanner.scan();
//!     if token.is_eof() {
//!         break;
//!     }
//!     println!("{:?}", token.kind);
//! }
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{Token, TokenKind};
