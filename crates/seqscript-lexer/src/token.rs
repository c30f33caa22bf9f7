//! Tokens for the seqscript language
//!
//! Defines all token kinds the scanner can produce.

use seqscript_error::Span;
use std::fmt;

/// All token kinds for the seqscript language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    // =========================================
    // Sentinels
    // =========================================
    /// Unrecognized character; carries the offending character
    Illegal(char),
    /// End of input
    Eof,
    /// A coalesced run of spaces/tabs; carries the run
    Whitespace(String),
    /// Line break (statements are line-delimited)
    Newline,

    // =========================================
    // Literals
    // =========================================
    /// Identifier: `me`, `world`, `w`
    Ident(String),

    // =========================================
    // Punctuation
    // =========================================
    /// `*`
    Star,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    // =========================================
    // Arrows
    // =========================================
    /// `->`
    RightArrow,
    /// `-->`
    RightDashedArrow,
    /// `<-`
    LeftArrow,
    /// `<--`
    LeftDashedArrow,

    // =========================================
    // Keywords
    // =========================================
    /// `as` - alias clause in a definition
    As,
    /// `ACTOR`
    Actor,
    /// `PARTICIPANT`
    Participant,
    /// `DATABASE`
    Database,
}

impl TokenKind {
    /// Converts a string to a keyword, if it is one (case-sensitive)
    pub fn keyword_from_str(s: &str) -> Option<TokenKind> {
        match s {
            "as" => Some(TokenKind::As),
            "ACTOR" => Some(TokenKind::Actor),
            "PARTICIPANT" => Some(TokenKind::Participant),
            "DATABASE" => Some(TokenKind::Database),
            _ => None,
        }
    }

    /// Returns true if the token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::As | TokenKind::Actor | TokenKind::Participant | TokenKind::Database
        )
    }

    /// Returns true if the token is a participant-kind keyword
    pub fn is_participant_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Actor | TokenKind::Participant | TokenKind::Database
        )
    }

    /// Returns true if the token is one of the four arrows
    pub fn is_arrow(&self) -> bool {
        matches!(
            self,
            TokenKind::RightArrow
                | TokenKind::RightDashedArrow
                | TokenKind::LeftArrow
                | TokenKind::LeftDashedArrow
        )
    }

    /// Returns true if the token terminates a statement
    pub fn is_terminator(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }

    /// Returns the exact source text of the token
    pub fn literal(&self) -> String {
        match self {
            TokenKind::Illegal(ch) => ch.to_string(),
            TokenKind::Eof => String::new(),
            TokenKind::Whitespace(run) => run.clone(),
            TokenKind::Newline => "\n".to_string(),
            TokenKind::Ident(name) => name.clone(),
            TokenKind::Star => "*".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Colon => ":".to_string(),
            TokenKind::RightArrow => "->".to_string(),
            TokenKind::RightDashedArrow => "-->".to_string(),
            TokenKind::LeftArrow => "<-".to_string(),
            TokenKind::LeftDashedArrow => "<--".to_string(),
            TokenKind::As => "as".to_string(),
            TokenKind::Actor => "ACTOR".to_string(),
            TokenKind::Participant => "PARTICIPANT".to_string(),
            TokenKind::Database => "DATABASE".to_string(),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Illegal(ch) => write!(f, "ILLEGAL({})", ch),
            TokenKind::Eof => write!(f, "EOF"),
            TokenKind::Whitespace(_) => write!(f, "WHITESPACE"),
            TokenKind::Newline => write!(f, "NEWLINE"),
            TokenKind::Ident(name) => write!(f, "{}", name),
            _ => write!(f, "{}", self.literal()),
        }
    }
}

/// A token with its location in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token kind (with its literal payload, if any)
    pub kind: TokenKind,
    /// Location in the input
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Checks if it is end of input
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.kind, self.span.start.line, self.span.start.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenKind::keyword_from_str("ACTOR"), Some(TokenKind::Actor));
        assert_eq!(
            TokenKind::keyword_from_str("PARTICIPANT"),
            Some(TokenKind::Participant)
        );
        assert_eq!(
            TokenKind::keyword_from_str("DATABASE"),
            Some(TokenKind::Database)
        );
        assert_eq!(TokenKind::keyword_from_str("as"), Some(TokenKind::As));

        // Keywords are case-sensitive
        assert_eq!(TokenKind::keyword_from_str("actor"), None);
        assert_eq!(TokenKind::keyword_from_str("AS"), None);
        assert_eq!(TokenKind::keyword_from_str("me"), None);
    }

    #[test]
    fn test_token_sets() {
        assert!(TokenKind::Actor.is_participant_keyword());
        assert!(TokenKind::Database.is_participant_keyword());
        assert!(!TokenKind::As.is_participant_keyword());

        assert!(TokenKind::RightDashedArrow.is_arrow());
        assert!(TokenKind::LeftArrow.is_arrow());
        assert!(!TokenKind::Colon.is_arrow());

        assert!(TokenKind::Newline.is_terminator());
        assert!(TokenKind::Eof.is_terminator());
        assert!(!TokenKind::Semicolon.is_terminator());
    }

    #[test]
    fn test_literals() {
        assert_eq!(TokenKind::RightDashedArrow.literal(), "-->");
        assert_eq!(TokenKind::Ident("world".into()).literal(), "world");
        assert_eq!(TokenKind::Illegal('?').literal(), "?");
        assert_eq!(TokenKind::Eof.literal(), "");
    }
}
