pub mod diagnostics;
pub mod errors;
pub mod lexer;

pub use errors::{LexError, LolError};
pub use lexer::token::{Span, Token, TokenKind};
pub use lexer::{ScanOutput, scan};
