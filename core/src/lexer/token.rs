use std::fmt;

use serde::Serialize;

/// A single token with its kind, source line, lexeme and span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line the token was produced on.
    pub line: usize,
    /// The lexeme as written. String literals hold only the bytes between
    /// their quotes.
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            line,
            text: text.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind.name(), self.text)
    }
}

/// Byte offset span in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Special
    Eof,
    Newline,

    // Punctuation
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Less,
    Greater,
    Assign,
    Comma,
    Dot,
    Colon,
    Semicolon,
    Bang,
    Slash,
    Star,
    Plus,
    Minus,
    Pipe,

    // Operators
    EqEq,
    NotEq,
    GreaterEq,
    LessEq,

    // Literals
    Ident,
    String,
    Number,
    True,
    False,

    // Keywords
    Struct,
    Return,
    Int,
    Double,
    Float,
    Bool,
    For,
    In,
    Let,
    If,
    Else,
}

/// Every reserved word, in declaration order.
pub const KEYWORDS: [&str; 13] = [
    "struct", "return", "int", "double", "float", "bool", "for", "in", "let", "if", "else",
    "true", "false",
];

impl TokenKind {
    /// Look up a word in the keyword table. `true` and `false` count as
    /// keywords. Matching is case-sensitive.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "struct" => TokenKind::Struct,
            "return" => TokenKind::Return,
            "int" => TokenKind::Int,
            "double" => TokenKind::Double,
            "float" => TokenKind::Float,
            "bool" => TokenKind::Bool,
            "for" => TokenKind::For,
            "in" => TokenKind::In,
            "let" => TokenKind::Let,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            _ => return None,
        })
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Struct
                | TokenKind::Return
                | TokenKind::Int
                | TokenKind::Double
                | TokenKind::Float
                | TokenKind::Bool
                | TokenKind::For
                | TokenKind::In
                | TokenKind::Let
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::True
                | TokenKind::False
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::Number | TokenKind::True | TokenKind::False
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "Eof",
            TokenKind::Newline => "Newline",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBracket => "LeftBracket",
            TokenKind::RightBracket => "RightBracket",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Less => "Less",
            TokenKind::Greater => "Greater",
            TokenKind::Assign => "Assign",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Colon => "Colon",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Bang => "Bang",
            TokenKind::Slash => "Slash",
            TokenKind::Star => "Star",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Pipe => "Pipe",
            TokenKind::EqEq => "EqEq",
            TokenKind::NotEq => "NotEq",
            TokenKind::GreaterEq => "GreaterEq",
            TokenKind::LessEq => "LessEq",
            TokenKind::Ident => "Ident",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::True => "True",
            TokenKind::False => "False",
            TokenKind::Struct => "Struct",
            TokenKind::Return => "Return",
            TokenKind::Int => "Int",
            TokenKind::Double => "Double",
            TokenKind::Float => "Float",
            TokenKind::Bool => "Bool",
            TokenKind::For => "For",
            TokenKind::In => "In",
            TokenKind::Let => "Let",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
