//! Parser for the seqscript language
//!
//! Pulls tokens from the scanner on demand and assembles them into
//! statements using recursive descent with one token of pushback.

use crate::ast::{Arrow, Definition, Message, ParticipantKind, Statement};
use seqscript_error::{ErrorCode, ParseError, Result};
use seqscript_lexer::{Scanner, Token, TokenKind};

/// The participant-kind keyword set; error messages derive their
/// expected-set text from here so the set stays single-sourced
const PARTICIPANT_KEYWORDS: [TokenKind; 3] = [
    TokenKind::Actor,
    TokenKind::Participant,
    TokenKind::Database,
];

/// The four arrow spellings
const ARROWS: [TokenKind; 4] = [
    TokenKind::RightArrow,
    TokenKind::RightDashedArrow,
    TokenKind::LeftArrow,
    TokenKind::LeftDashedArrow,
];

fn literal_list(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|k| k.literal())
        .collect::<Vec<_>>()
        .join(", ")
}

fn expected_keywords() -> String {
    format!("one of {}", literal_list(&PARTICIPANT_KEYWORDS))
}

fn expected_arrows() -> String {
    format!("an arrow ({})", literal_list(&ARROWS))
}

/// Parser for the seqscript language
pub struct Parser {
    /// Token source
    scanner: Scanner,
    /// One-token pushback buffer
    buffered: Option<Token>,
    /// Every definition parsed this session, in declaration order
    definitions: Vec<Definition>,
}

impl Parser {
    /// Creates a new parser over the given input
    pub fn new(source: &str) -> Self {
        Self {
            scanner: Scanner::new(source),
            buffered: None,
            definitions: Vec::new(),
        }
    }

    /// All definitions parsed so far, in declaration order.
    ///
    /// Duplicates by name are kept; the sequence grows monotonically
    /// over one parse session and is what a downstream renderer
    /// consumes together with the message statements.
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    // =========================================
    // Token cursor
    // =========================================

    /// Returns the next token: the pushed-back token if there is
    /// one, otherwise a fresh token from the scanner
    fn scan(&mut self) -> Token {
        if let Some(token) = self.buffered.take() {
            return token;
        }
        self.scanner.scan()
    }

    /// Pushes a token back to be re-read by the next `scan`
    fn unscan(&mut self, token: Token) {
        debug_assert!(
            self.buffered.is_none(),
            "pushback buffer already holds a token"
        );
        self.buffered = Some(token);
    }

    /// Scans the next token, discarding a single leading whitespace
    /// token (the scanner already coalesces runs)
    fn scan_skip_whitespace(&mut self) -> Token {
        let token = self.scan();
        if matches!(token.kind, TokenKind::Whitespace(_)) {
            return self.scan();
        }
        token
    }

    // =========================================
    // Error construction
    // =========================================

    /// Builds a structural error citing the found literal and the
    /// expected set; illegal characters keep their scanner code
    fn unexpected(token: &Token, expected: impl Into<String>) -> ParseError {
        let err = ParseError::new(token.kind.literal(), expected, token.span);
        if matches!(token.kind, TokenKind::Illegal(_)) {
            err.with_code(ErrorCode::ILLEGAL_CHAR)
        } else {
            err
        }
    }

    /// Requires the statement to end here (newline or end of input)
    fn expect_terminator(&mut self) -> Result<()> {
        let token = self.scan_skip_whitespace();
        if token.kind.is_terminator() {
            Ok(())
        } else {
            Err(Self::unexpected(&token, "newline or end of input")
                .with_code(ErrorCode::MISSING_TERMINATOR))
        }
    }

    // =========================================
    // Productions
    // =========================================

    /// Parses the next statement.
    ///
    /// Returns `Ok(Some(statement))` for each parsed line,
    /// `Ok(None)` once the input is exhausted (terminal), or a
    /// structural error. After an error the stream position is
    /// unspecified; the session should stop.
    pub fn parse_next(&mut self) -> Result<Option<Statement>> {
        let token = self.scan_skip_whitespace();

        if token.kind.is_participant_keyword() {
            self.unscan(token);
            return self.parse_definition().map(Some);
        }

        match token.kind {
            TokenKind::Eof => Ok(None),
            TokenKind::Newline => Ok(Some(Statement::Blank)),
            TokenKind::Ident(_) => {
                self.unscan(token);
                self.parse_message().map(Some)
            }
            _ => Err(Self::unexpected(
                &token,
                format!(
                    "{}, a name, or a blank line",
                    literal_list(&PARTICIPANT_KEYWORDS)
                ),
            )),
        }
    }

    /// Definition: `KEYWORD name [as alias] (newline | eof)`
    fn parse_definition(&mut self) -> Result<Statement> {
        let token = self.scan_skip_whitespace();
        let kind = match token.kind {
            TokenKind::Actor => ParticipantKind::Actor,
            TokenKind::Participant => ParticipantKind::Participant,
            TokenKind::Database => ParticipantKind::Database,
            _ => return Err(Self::unexpected(&token, expected_keywords())),
        };

        // The name must be an identifier; this also guards against
        // `ACTOR ACTOR` and a keyword with nothing after it
        let token = self.scan_skip_whitespace();
        let name = match token.kind {
            TokenKind::Ident(name) => name,
            _ => {
                return Err(Self::unexpected(&token, "name")
                    .with_code(ErrorCode::EXPECTED_NAME))
            }
        };

        let mut definition = Definition {
            name,
            kind,
            alias: None,
        };

        let token = self.scan_skip_whitespace();
        match token.kind {
            TokenKind::As => {
                let token = self.scan_skip_whitespace();
                match token.kind {
                    TokenKind::Ident(alias) => definition.alias = Some(alias),
                    _ => {
                        return Err(Self::unexpected(&token, "alias name")
                            .with_code(ErrorCode::EXPECTED_ALIAS))
                    }
                }
                self.expect_terminator()?;
            }
            TokenKind::Newline | TokenKind::Eof => {}
            _ => {
                return Err(Self::unexpected(
                    &token,
                    "as, newline, or end of input",
                ))
            }
        }

        // Recorded only once the whole statement parsed, so a failed
        // alias clause never leaves a phantom entry behind
        self.definitions.push(definition.clone());

        Ok(Statement::Definition(definition))
    }

    /// Message: `name arrow name [: description] (newline | eof)`
    fn parse_message(&mut self) -> Result<Statement> {
        let token = self.scan_skip_whitespace();
        let from = match token.kind {
            TokenKind::Ident(name) => name,
            _ => {
                return Err(Self::unexpected(&token, "name")
                    .with_code(ErrorCode::EXPECTED_NAME))
            }
        };

        let token = self.scan_skip_whitespace();
        let arrow = match token.kind {
            TokenKind::RightArrow => Arrow::Right,
            TokenKind::RightDashedArrow => Arrow::RightDashed,
            TokenKind::LeftArrow => Arrow::Left,
            TokenKind::LeftDashedArrow => Arrow::LeftDashed,
            _ => return Err(Self::unexpected(&token, expected_arrows())),
        };

        let token = self.scan_skip_whitespace();
        let to = match token.kind {
            TokenKind::Ident(name) => name,
            _ => {
                return Err(Self::unexpected(&token, "name")
                    .with_code(ErrorCode::EXPECTED_NAME))
            }
        };

        let token = self.scan_skip_whitespace();
        let description = match token.kind {
            TokenKind::Colon => {
                let text = self.read_description();
                self.expect_terminator()?;
                text
            }
            TokenKind::Newline | TokenKind::Eof => String::new(),
            _ => {
                return Err(Self::unexpected(
                    &token,
                    "\":\", newline, or end of input",
                ))
            }
        };

        Ok(Statement::Message(Message {
            from,
            to,
            arrow,
            description,
        }))
    }

    /// Accumulates the literal text of identifier and whitespace
    /// tokens, read one at a time without whitespace skipping, until
    /// some other token stops the run; the stopping token is pushed
    /// back for the terminator check
    fn read_description(&mut self) -> String {
        let mut text = String::new();

        loop {
            let token = self.scan();
            if matches!(token.kind, TokenKind::Ident(_) | TokenKind::Whitespace(_)) {
                text.push_str(&token.kind.literal());
            } else {
                self.unscan(token);
                break;
            }
        }

        text.trim().to_string()
    }
}

/// Parses an entire input into its statement sequence
pub fn parse(source: &str) -> Result<Vec<Statement>> {
    let mut parser = Parser::new(source);
    let mut statements = Vec::new();

    while let Some(statement) = parser.parse_next()? {
        statements.push(statement);
    }

    Ok(statements)
}
