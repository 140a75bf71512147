//! Rule-table lexers for halcmd and RS274 G-code.
//!
//! Each language is a static table of regex rules grouped into modes
//! ([`rules`]). A table is compiled once into a [`Lexer`], which scans text
//! into [`Token`]s using a mode stack: the first rule of the active mode that
//! matches at the cursor wins, and may push or pop a mode.

mod error;
mod lexer;
mod scanner;
mod token;

pub mod halcmd;
pub mod registry;
pub mod rs274;
pub mod rules;

pub use error::TableError;
pub use lexer::Lexer;
pub use scanner::Tokens;
pub use token::{Span, Token, TokenKind};

#[cfg(test)]
mod testing;
