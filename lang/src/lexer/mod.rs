pub mod token;

pub use token::{Literal, Token, TokenKind};

use crate::error::ErrorReporter;
use thiserror::Error;
use tracing::{debug, trace};


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character.")]
    UnexpectedCharacter { ch: char, line: usize },
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
            LexError::UnterminatedString { line } => *line,
        }
    }
}

pub type LexResult = Result<Vec<Token>, Vec<LexError>>;

/// Scan `source`, sending every lexical error to `reporter`.
///
/// Always returns the full token sequence (ending in `Eof`) together with a flag
/// that is true when `reporter` was called at least once.
pub fn scan(source: &str, reporter: &mut dyn ErrorReporter) -> (Vec<Token>, bool) {
    let output = Scanner::new(source, reporter).scan_tokens();
    let had_error = output.had_error();
    (output.tokens, had_error)
}

/// Scan `source` and fail with every collected error if there were any.
pub fn lex(source: &str) -> LexResult {
    let mut ignore = |_: usize, _: &str, _: &str| {};
    Scanner::new(source, &mut ignore).scan_tokens().into_result()
}

/// Everything a finished scan produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_result(self) -> LexResult {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Outcome of recognizing one lexeme.
enum Step {
    Emit(TokenKind, Option<Literal>),
    Skip,
    Error(LexError),
}

impl Step {
    fn token(kind: TokenKind) -> Self {
        Step::Emit(kind, None)
    }
}

/// Single-pass scanner over one source text.
///
/// `scan_tokens` consumes the scanner, so a scan can never be resumed or run twice.
pub struct Scanner<'r> {
    source: Vec<char>,
    // Index of the first character of the lexeme being recognized
    start: usize,
    // Index of the next unread character
    current: usize,
    line: usize,
    // Line of `start`; a multi-line string reports where it opened
    start_line: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'r> Scanner<'r> {
    pub fn new(source: &str, reporter: &'r mut dyn ErrorReporter) -> Self {
        Self {
            source: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
            reporter,
        }
    }

    pub fn scan_tokens(mut self) -> ScanOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;

            match self.scan_token() {
                Step::Emit(kind, literal) => self.add_token(kind, literal),
                Step::Skip => {}
                Step::Error(err) => self.error(err),
            }

            debug_assert!(self.start <= self.current && self.current <= self.source.len());
        }

        self.tokens.push(Token::eof(self.line));

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            lines = self.line,
            "scan complete"
        );

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) -> Step {
        let ch = self.advance();

        match ch {
            // Single-character tokens
            '(' => Step::token(TokenKind::LeftParen),
            ')' => Step::token(TokenKind::RightParen),
            '{' => Step::token(TokenKind::LeftBrace),
            '}' => Step::token(TokenKind::RightBrace),
            ',' => Step::token(TokenKind::Comma),
            '.' => Step::token(TokenKind::Dot),
            '-' => Step::token(TokenKind::Minus),
            '+' => Step::token(TokenKind::Plus),
            ';' => Step::token(TokenKind::Semicolon),
            '*' => Step::token(TokenKind::Star),
            // One or two character operators
            '!' => Step::token(if self.match_next('=') {
                TokenKind::BangEqual
            } else {
                TokenKind::Bang
            }),
            '=' => Step::token(if self.match_next('=') {
                TokenKind::EqualEqual
            } else {
                TokenKind::Equal
            }),
            '<' => Step::token(if self.match_next('=') {
                TokenKind::LessEqual
            } else {
                TokenKind::Less
            }),
            '>' => Step::token(if self.match_next('=') {
                TokenKind::GreaterEqual
            } else {
                TokenKind::Greater
            }),
            '/' => {
                if self.match_next('/') {
                    self.skip_comment();
                    Step::Skip
                } else {
                    Step::token(TokenKind::Slash)
                }
            }
            ' ' | '\r' | '\t' => Step::Skip,
            '\n' => {
                self.line += 1;
                Step::Skip
            }
            '"' => self.string(),
            '0'..='9' => self.number(),
            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),
            _ => Step::Error(LexError::UnexpectedCharacter { ch, line: self.line }),
        }
    }

    /// Skips to the end of the line; the newline itself is left for the main loop.
    fn skip_comment(&mut self) {
        while matches!(self.peek(), Some(ch) if ch != '\n') {
            self.advance();
        }
    }

    fn string(&mut self) -> Step {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            return Step::Error(LexError::UnterminatedString { line: self.line });
        }

        // Closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        Step::Emit(TokenKind::String, Some(Literal::String(value)))
    }

    fn number(&mut self) -> Step {
        self.consume_digits();

        // A '.' only belongs to the number when a digit follows it
        if self.peek() == Some('.') && matches!(self.peek_next(), Some('0'..='9')) {
            self.advance();
            self.consume_digits();
        }

        let text = self.lexeme();
        let value = text
            .parse::<f64>()
            .expect("a run of ASCII digits with an optional fraction always parses");

        Step::Emit(TokenKind::Number, Some(Literal::Number(value)))
    }

    fn identifier(&mut self) -> Step {
        while matches!(self.peek(), Some('a'..='z' | 'A'..='Z' | '0'..='9' | '_')) {
            self.advance();
        }

        let text = self.lexeme();
        Step::token(TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier))
    }

    fn consume_digits(&mut self) {
        while matches!(self.peek(), Some('0'..='9')) {
            self.advance();
        }
    }

    fn add_token(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let token = Token::new(kind, self.lexeme(), literal, self.start_line);
        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.line, "token");
        self.tokens.push(token);
    }

    fn error(&mut self, err: LexError) {
        debug!(line = err.line(), error = %err, "lexical error");
        self.reporter.report(err.line(), "", &err.to_string());
        self.errors.push(err);
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consumes `expected` if it is the next character.
    fn match_next(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn advance(&mut self) -> char {
        let Some(ch) = self.peek() else {
            panic!("scanner advanced past end of input at index {}", self.current);
        };
        self.current += 1;
        ch
    }
}
