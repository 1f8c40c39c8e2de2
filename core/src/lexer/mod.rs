pub mod cursor;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod token;

use miette::NamedSource;

use crate::errors::{LexError, LolError};
use token::Token;

/// Tokens and diagnostics produced by one scan.
///
/// `tokens` always ends with a single [`token::TokenKind::Eof`]. When
/// `diagnostics` is non-empty the tokens are best-effort only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<LexError>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// The diagnostics as plain messages, in the order they were found.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Keep the tokens only if the scan was clean.
    pub fn into_result(self, name: &str, source: &str) -> Result<Vec<Token>, LolError> {
        if self.diagnostics.is_empty() {
            return Ok(self.tokens);
        }
        Err(LolError::Lex {
            src: NamedSource::new(name, source.to_owned()),
            diagnostics: self.diagnostics,
        })
    }
}

/// Tokenize source code.
pub fn scan(source: &str) -> ScanOutput {
    scanner::Scanner::new(source).scan()
}
