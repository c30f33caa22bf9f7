//! Scanner for the seqscript language
//!
//! Converts input text into a sequence of tokens, one `scan()` call
//! at a time. Scanning never fails: unrecognized characters surface
//! as [`TokenKind::Illegal`] tokens for the parser to reject.

use crate::token::{Token, TokenKind};
use seqscript_error::{Position, Span};

/// The seqscript scanner
pub struct Scanner {
    /// Input characters
    chars: Vec<char>,
    /// Current position (index in chars vector)
    pos: usize,
    /// Current line (1-indexed)
    line: u32,
    /// Current column (1-indexed)
    column: u32,
    /// Byte offset
    offset: usize,
}

impl Scanner {
    /// Creates a new scanner for the given input
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Returns the current character without advancing
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns the next character without advancing
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Advances to the next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Creates a position at the current location
    fn current_position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// Creates a span from a position to the current location
    fn make_span(&self, start: Position) -> Span {
        Span::new(start, self.current_position())
    }

    /// Inline whitespace: spaces and tabs (and `\r`, so CRLF input
    /// leaves a clean `\n` for the newline token)
    fn is_inline_space(ch: char) -> bool {
        ch == ' ' || ch == '\t' || ch == '\r'
    }

    /// Characters that can never be part of an identifier
    fn is_special(ch: char) -> bool {
        Self::is_inline_space(ch)
            || ch == '\n'
            || ch == '*'
            || ch == ','
            || ch == ';'
            || ch == ':'
            || ch == '-'
            || ch == '<'
    }

    /// Reads a run of spaces/tabs into one whitespace token
    fn read_whitespace(&mut self) -> Token {
        let start = self.current_position();
        let mut run = String::new();

        while let Some(ch) = self.peek() {
            if Self::is_inline_space(ch) {
                run.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::Whitespace(run), self.make_span(start))
    }

    /// Reads an arrow starting at `-` or `<`; longer spellings win,
    /// so `-->` is never scanned as `-` followed by `->`
    fn read_arrow(&mut self) -> Token {
        let start = self.current_position();
        let ch = self.advance().unwrap();

        let kind = match ch {
            '-' => {
                if self.peek() == Some('>') {
                    self.advance();
                    TokenKind::RightArrow
                } else if self.peek() == Some('-') && self.peek_next() == Some('>') {
                    self.advance();
                    self.advance();
                    TokenKind::RightDashedArrow
                } else {
                    TokenKind::Illegal('-')
                }
            }
            _ => {
                // '<'
                if self.peek() == Some('-') {
                    self.advance();
                    if self.peek() == Some('-') {
                        self.advance();
                        TokenKind::LeftDashedArrow
                    } else {
                        TokenKind::LeftArrow
                    }
                } else {
                    TokenKind::Illegal('<')
                }
            }
        };

        Token::new(kind, self.make_span(start))
    }

    /// Reads an identifier or keyword: a maximal run of characters
    /// that are not whitespace, punctuation, or arrow-introducing
    fn read_identifier(&mut self) -> Token {
        let start = self.current_position();
        let mut ident = String::new();

        while let Some(ch) = self.peek() {
            if Self::is_special(ch) {
                break;
            }
            ident.push(ch);
            self.advance();
        }

        let span = self.make_span(start);
        let kind = TokenKind::keyword_from_str(&ident).unwrap_or(TokenKind::Ident(ident));

        Token::new(kind, span)
    }

    /// Reads the next token
    pub fn scan(&mut self) -> Token {
        let start = self.current_position();

        let ch = match self.peek() {
            Some(ch) => ch,
            None => return Token::new(TokenKind::Eof, Span::point(start)),
        };

        if Self::is_inline_space(ch) {
            return self.read_whitespace();
        }

        if ch == '\n' {
            self.advance();
            return Token::new(TokenKind::Newline, self.make_span(start));
        }

        if ch == '-' || ch == '<' {
            return self.read_arrow();
        }

        let punct = match ch {
            '*' => Some(TokenKind::Star),
            ',' => Some(TokenKind::Comma),
            ';' => Some(TokenKind::Semicolon),
            ':' => Some(TokenKind::Colon),
            _ => None,
        };
        if let Some(kind) = punct {
            self.advance();
            return Token::new(kind, self.make_span(start));
        }

        self.read_identifier()
    }

    /// Scans the entire input (for the CLI token listing)
    pub fn scan_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.scan();
            let is_eof = token.is_eof();
            tokens.push(token);

            if is_eof {
                break;
            }
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> Vec<TokenKind> {
        let mut scanner = Scanner::new(source);
        let mut kinds = Vec::new();
        loop {
            let token = scanner.scan();
            if token.is_eof() {
                break;
            }
            kinds.push(token.kind);
        }
        kinds
    }

    #[test]
    fn test_definition_line() {
        let tokens = scan("ACTOR me");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Actor,
                TokenKind::Whitespace(" ".into()),
                TokenKind::Ident("me".into()),
            ]
        );
    }

    #[test]
    fn test_keywords_and_casing() {
        assert_eq!(
            scan("PARTICIPANT DATABASE as"),
            vec![
                TokenKind::Participant,
                TokenKind::Whitespace(" ".into()),
                TokenKind::Database,
                TokenKind::Whitespace(" ".into()),
                TokenKind::As,
            ]
        );

        // Lowercase participant keywords are ordinary identifiers
        assert_eq!(scan("actor"), vec![TokenKind::Ident("actor".into())]);
    }

    #[test]
    fn test_arrows() {
        assert_eq!(
            scan("-> --> <- <--"),
            vec![
                TokenKind::RightArrow,
                TokenKind::Whitespace(" ".into()),
                TokenKind::RightDashedArrow,
                TokenKind::Whitespace(" ".into()),
                TokenKind::LeftArrow,
                TokenKind::Whitespace(" ".into()),
                TokenKind::LeftDashedArrow,
            ]
        );
    }

    #[test]
    fn test_dashed_arrow_is_greedy() {
        // `-->` must not scan as `-` followed by `->`
        assert_eq!(scan("-->"), vec![TokenKind::RightDashedArrow]);
        assert_eq!(scan("<--"), vec![TokenKind::LeftDashedArrow]);
    }

    #[test]
    fn test_incomplete_arrows_are_illegal() {
        assert_eq!(
            scan("- <"),
            vec![
                TokenKind::Illegal('-'),
                TokenKind::Whitespace(" ".into()),
                TokenKind::Illegal('<'),
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            scan("*,;:"),
            vec![
                TokenKind::Star,
                TokenKind::Comma,
                TokenKind::Semicolon,
                TokenKind::Colon,
            ]
        );
    }

    #[test]
    fn test_whitespace_runs_coalesce() {
        assert_eq!(
            scan("a \t  b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Whitespace(" \t  ".into()),
                TokenKind::Ident("b".into()),
            ]
        );
    }

    #[test]
    fn test_newlines() {
        assert_eq!(
            scan("a\n\nb"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Newline,
                TokenKind::Newline,
                TokenKind::Ident("b".into()),
            ]
        );
    }

    #[test]
    fn test_message_line() {
        assert_eq!(
            scan("me -> w : hello"),
            vec![
                TokenKind::Ident("me".into()),
                TokenKind::Whitespace(" ".into()),
                TokenKind::RightArrow,
                TokenKind::Whitespace(" ".into()),
                TokenKind::Ident("w".into()),
                TokenKind::Whitespace(" ".into()),
                TokenKind::Colon,
                TokenKind::Whitespace(" ".into()),
                TokenKind::Ident("hello".into()),
            ]
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut scanner = Scanner::new("a");
        assert_eq!(scanner.scan().kind, TokenKind::Ident("a".into()));
        assert_eq!(scanner.scan().kind, TokenKind::Eof);
        assert_eq!(scanner.scan().kind, TokenKind::Eof);
    }

    #[test]
    fn test_spans_track_lines_and_columns() {
        let mut scanner = Scanner::new("ACTOR me\nme -> w");
        let actor = scanner.scan();
        assert_eq!((actor.span.start.line, actor.span.start.column), (1, 1));

        scanner.scan(); // whitespace
        let me = scanner.scan();
        assert_eq!((me.span.start.line, me.span.start.column), (1, 7));

        scanner.scan(); // newline
        let me2 = scanner.scan();
        assert_eq!((me2.span.start.line, me2.span.start.column), (2, 1));
    }

    #[test]
    fn test_crlf_folds_into_whitespace() {
        assert_eq!(
            scan("a\r\nb"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Whitespace("\r".into()),
                TokenKind::Newline,
                TokenKind::Ident("b".into()),
            ]
        );
    }
}
