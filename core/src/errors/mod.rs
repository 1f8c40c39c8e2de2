mod lex_error;

pub use lex_error::LexError;

use miette::{Diagnostic, NamedSource};
use thiserror::Error;

/// Unified error type for drivers built on the lexer.
#[derive(Debug, Error, Diagnostic)]
pub enum LolError {
    #[error("could not read '{path}'")]
    #[diagnostic(code(lol::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{} lexical error(s) in {}", .diagnostics.len(), .src.name())]
    #[diagnostic(code(lol::lex))]
    Lex {
        #[source_code]
        src: NamedSource<String>,
        #[related]
        diagnostics: Vec<LexError>,
    },
}

impl LolError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
