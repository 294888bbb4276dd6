pub mod error;
pub mod lexer;

pub use error::{Diagnostic, Diagnostics, ErrorReporter};
pub use lexer::{lex, scan, LexError, Literal, Token, TokenKind};
