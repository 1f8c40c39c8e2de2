use super::scanner::Scanner;
use super::token::{Span, Token, TokenKind};
use crate::errors::LexError;

impl Scanner<'_> {
    /// Scan a string literal; the opening quote is already consumed.
    ///
    /// There are no escape sequences. A raw newline inside the literal is
    /// reported but kept as part of the body, and the scan keeps looking for
    /// the closing quote.
    pub(super) fn scan_string(&mut self) {
        let line = self.line;

        while let Some(c) = self.cursor.peek() {
            if c == b'"' {
                break;
            }
            if c == b'\n' {
                let span = Span::new(self.start, self.cursor.pos());
                self.error(LexError::unterminated_string(self.line, span));
                self.line += 1;
            }
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let span = Span::new(self.start, self.cursor.pos());
            self.error(LexError::unterminated_string(self.line, span));
            return;
        }

        self.cursor.advance(); // closing '"'

        let end = self.cursor.pos();
        let text = self.cursor.slice(self.start + 1, end - 1);
        self.tokens.push(Token::new(
            TokenKind::String,
            line,
            text,
            Span::new(self.start, end),
        ));
    }
}
