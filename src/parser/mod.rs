//! Source tokenizer.
//!
//! The interpreter drives [`lexer::Lexer`] directly; there is no separate
//! AST stage. Each call to [`lexer::Lexer::next_token`] yields one token,
//! which the evaluator in [`crate::interp::evaluator`] resolves and folds
//! into the current command's argument vector.

pub mod lexer;

pub use lexer::{Lexer, Token, TokenType};
