use super::scanner::Scanner;
use super::token::TokenKind;

impl Scanner<'_> {
    /// Digits, optionally followed by `.` and more digits. A `.` with no
    /// digit after it is not part of the number.
    pub(super) fn scan_number(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.peek() == Some(b'.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
        }

        TokenKind::Number
    }

    pub(super) fn scan_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.start);
        TokenKind::keyword(text).unwrap_or(TokenKind::Ident)
    }
}

pub(super) fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_ident_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}
