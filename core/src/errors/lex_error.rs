use miette::Diagnostic;
use thiserror::Error;

/// A recoverable lexical error. Scanning continues after each one, so a
/// single scan can report many of these.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexError {
    #[error("Unexpected character '{ch}' on line {line}")]
    #[diagnostic(
        code(lol::lex::unexpected_character),
        help("this character does not start any token and was skipped")
    )]
    UnexpectedCharacter {
        ch: char,
        line: usize,
        #[label("not valid here")]
        span: miette::SourceSpan,
    },

    #[error("unterminated string on line {line}")]
    #[diagnostic(
        code(lol::lex::unterminated_string),
        help("string literals must close with '\"' on the line they start")
    )]
    UnterminatedString {
        line: usize,
        #[label("string starts here")]
        span: miette::SourceSpan,
    },
}

impl LexError {
    pub fn unexpected_character(
        ch: char,
        line: usize,
        span: impl Into<miette::SourceSpan>,
    ) -> Self {
        Self::UnexpectedCharacter {
            ch,
            line,
            span: span.into(),
        }
    }

    pub fn unterminated_string(line: usize, span: impl Into<miette::SourceSpan>) -> Self {
        Self::UnterminatedString {
            line,
            span: span.into(),
        }
    }

    /// Line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. } | Self::UnterminatedString { line, .. } => {
                *line
            }
        }
    }

    pub fn span(&self) -> miette::SourceSpan {
        match self {
            Self::UnexpectedCharacter { span, .. } | Self::UnterminatedString { span, .. } => {
                *span
            }
        }
    }
}
