//! Infix to postfix.

use crate::error::{ParseError, ParseResult};
use crate::expr::token::Token;

/// Infix → postfix (shunting-yard).
///
/// Operands go straight to the output. An incoming operator first pops every
/// stacked operator of equal or higher precedence (left-associative), stopping
/// at `(`. `)` pops back to its `(`.
pub fn to_postfix(tokens: Vec<Token>) -> ParseResult<Vec<Token>> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Token> = Vec::new();

    for tok in tokens {
        match tok {
            Token::Num(_) | Token::Ident(_) => out.push(tok),
            Token::LParen => ops.push(tok),
            Token::RParen => loop {
                match ops.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => out.push(op),
                    None => return Err(ParseError::MismatchedParen),
                }
            },
            Token::Op(op) => {
                while let Some(Token::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Token::Op(*top));
                    ops.pop();
                }
                ops.push(Token::Op(op));
            }
        }
    }

    while let Some(op) = ops.pop() {
        if op == Token::LParen {
            return Err(ParseError::MismatchedParen);
        }
        out.push(op);
    }
    Ok(out)
}
