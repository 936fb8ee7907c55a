//! Lexer for the notation.

use std::fmt;

use crate::error::{ParseError, ParseResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }

    /// 0 binds loosest.
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => 0,
            BinOp::Mul | BinOp::Div => 1,
            BinOp::Pow => 2,
        }
    }

    #[inline]
    pub fn compute(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Sub => lhs - rhs,
            BinOp::Mul => lhs * rhs,
            BinOp::Div => lhs / rhs,
            BinOp::Pow => lhs.powf(rhs),
        }
    }

    fn from_char(c: char) -> Option<BinOp> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            '^' => Some(BinOp::Pow),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LParen,
    RParen,
    Op(BinOp),
    Num(f64),
    Ident(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Op(op) => write!(f, "{op}"),
            Token::Num(n) => write!(f, "{n}"),
            Token::Ident(name) => write!(f, "{name}"),
        }
    }
}

/// Splits `src` into tokens, skipping whitespace.
pub fn tokenize(src: &str) -> ParseResult<Vec<Token>> {
    let mut out = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if let Some(op) = BinOp::from_char(c) {
            chars.next();
            out.push(Token::Op(op));
            continue;
        }
        match c {
            '(' => {
                chars.next();
                out.push(Token::LParen);
            }
            ')' => {
                chars.next();
                out.push(Token::RParen);
            }
            d if d.is_ascii_digit() || d == '.' => {
                let end = take_while(&mut chars, |c| c.is_ascii_digit() || c == '.', src.len());
                let lit = &src[start..end];
                let n = lit
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber(lit.to_string()))?;
                out.push(Token::Num(n));
            }
            a if a.is_alphabetic() => {
                let end = take_while(&mut chars, char::is_alphabetic, src.len());
                out.push(Token::Ident(src[start..end].to_string()));
            }
            other => return Err(ParseError::InvalidCharacter(other)),
        }
    }
    Ok(out)
}

/// Advances past a run of `pred` chars; returns the byte offset just after it.
fn take_while<I>(
    chars: &mut std::iter::Peekable<I>,
    pred: impl Fn(char) -> bool,
    len: usize,
) -> usize
where
    I: Iterator<Item = (usize, char)>,
{
    while let Some(&(i, c)) = chars.peek() {
        if !pred(c) {
            return i;
        }
        chars.next();
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_mixed_input() {
        let toks = tokenize("(54 + 3) / n^2.5").unwrap();
        assert_eq!(
            toks,
            vec![
                Token::LParen,
                Token::Num(54.0),
                Token::Op(BinOp::Add),
                Token::Num(3.0),
                Token::RParen,
                Token::Op(BinOp::Div),
                Token::Ident("n".into()),
                Token::Op(BinOp::Pow),
                Token::Num(2.5),
            ]
        );
    }

    #[test]
    fn rejects_unknown_symbols_and_bad_numbers() {
        assert_eq!(tokenize("x % 2"), Err(ParseError::InvalidCharacter('%')));
        assert_eq!(tokenize("1.2.3 + x"), Err(ParseError::InvalidNumber("1.2.3".into())));
    }
}
