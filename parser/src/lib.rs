//! CFDG Parser
//!
//! This crate compiles design-grammar source text into a
//! [`cfdg_grammar::Grammar`]:
//! - Tokenizing (keywords, names, signed decimals, three comment forms)
//! - Recursive-descent parsing of startshape/background/rule statements
//! - Geometric and color adjustment lists, loops, both bracket forms
//! - Error reporting with source locations
//!
//! Compilation is all-or-nothing: any syntax problem yields a [`ParseError`]
//! and no partial grammar.

mod error;
mod lexer;
mod parser;

pub use error::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{compile, Parser};
