use tracing::{debug, debug_span, trace};

use super::ScanOutput;
use super::cursor::Cursor;
use super::number_ident_scanner::is_ident_start;
use super::token::{Span, Token, TokenKind};
use crate::errors::LexError;

/// Scans source code into a sequence of tokens.
///
/// A scanner is built for one source string and consumed by [`Scanner::scan`].
pub struct Scanner<'src> {
    pub(super) cursor: Cursor<'src>,
    /// Offset of the first byte of the lexeme being scanned.
    pub(super) start: usize,
    pub(super) line: usize,
    pub(super) tokens: Vec<Token>,
    diagnostics: Vec<LexError>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: Cursor::new(source),
            start: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scan the whole source. Never fails; malformed input is reported in
    /// [`ScanOutput::diagnostics`] and the scan carries on past it.
    pub fn scan(mut self) -> ScanOutput {
        let _span = debug_span!("scan", bytes = self.cursor.source().len()).entered();

        while !self.cursor.is_at_end() {
            self.start = self.cursor.pos();
            self.scan_token();
        }

        let eof_pos = self.cursor.pos();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            self.line,
            "",
            Span::new(eof_pos, eof_pos),
        ));

        trace!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );

        ScanOutput {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.cursor.advance() else {
            return;
        };

        let kind = match ch {
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semicolon,
            b'*' => TokenKind::Star,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'|' => TokenKind::Pipe,
            b'<' => {
                if self.cursor.match_char(b'=') {
                    TokenKind::LessEq
                } else {
                    TokenKind::Less
                }
            }
            b'>' => {
                if self.cursor.match_char(b'=') {
                    TokenKind::GreaterEq
                } else {
                    TokenKind::Greater
                }
            }
            b'=' => {
                if self.cursor.match_char(b'=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Assign
                }
            }
            b'!' => {
                if self.cursor.match_char(b'=') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Bang
                }
            }
            b'/' => {
                if self.cursor.match_char(b'/') {
                    // Line comment: the newline is left for the next token.
                    self.cursor.eat_while(|c| c != b'\n');
                    return;
                }
                TokenKind::Slash
            }
            b' ' | b'\t' | b'\r' | b'\0' => return,
            b'\n' => {
                self.line += 1;
                TokenKind::Newline
            }
            b'"' => {
                self.scan_string();
                return;
            }
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_ident_start(c) => self.scan_identifier(),
            _ => {
                self.unexpected_character(ch);
                return;
            }
        };

        self.add_token(kind);
    }

    fn unexpected_character(&mut self, byte: u8) {
        // Skip the rest of a multi-byte character so it is reported once.
        let ch = match self.cursor.char_at(self.start) {
            Some(c) => {
                self.cursor.advance_by(c.len_utf8() - 1);
                c
            }
            None => char::from(byte),
        };
        let span = Span::new(self.start, self.cursor.pos());
        self.error(LexError::unexpected_character(ch, self.line, span));
    }

    /// Push a token whose text is the current lexeme.
    pub(super) fn add_token(&mut self, kind: TokenKind) {
        let text = self.cursor.slice_from(self.start);
        let span = Span::new(self.start, self.cursor.pos());
        self.tokens.push(Token::new(kind, self.line, text, span));
    }

    pub(super) fn error(&mut self, err: LexError) {
        debug!(line = err.line(), "{err}");
        self.diagnostics.push(err);
    }
}
