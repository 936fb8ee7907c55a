//! Infix notation for single-variable recurrences.
//!
//! `"(54 + x) / (3 * x) - 8"` → tokens → postfix → [`Expr`] tree.
//! Operators `+ - * / ^`, all left-associative, usual precedence.
//! Literals are non-negative decimals; there is no unary minus.
//! Any alphabetic identifier names the running value, but one
//! expression may only use one name.

pub mod ast;
pub mod postfix;
pub mod token;

pub use ast::{Expr, Node};
pub use postfix::to_postfix;
pub use token::{BinOp, Token, tokenize};
