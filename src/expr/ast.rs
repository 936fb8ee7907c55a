//! Expression tree: built from postfix, folded, rendered, and evaluated as a
//! [`Recurrence`] with or without divisor checks.

use std::fmt;

use crate::error::{ParseError, ParseResult};
use crate::expr::postfix::to_postfix;
use crate::expr::token::{BinOp, Token, tokenize};
use crate::rational::Recurrence;

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Const(f64),
    Var,
    Binary(Box<Node>, BinOp, Box<Node>),
}

impl Node {
    fn reduce(self) -> Node {
        match self {
            Node::Binary(lhs, op, rhs) => match (lhs.reduce(), rhs.reduce()) {
                (Node::Const(a), Node::Const(b)) => Node::Const(op.compute(a, b)),
                (l, r) => Node::Binary(Box::new(l), op, Box::new(r)),
            },
            leaf => leaf,
        }
    }

    fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Const(c) => *c,
            Node::Var => x,
            Node::Binary(lhs, op, rhs) => op.compute(lhs.eval(x), rhs.eval(x)),
        }
    }

    fn eval_checked(&self, x: f64) -> Option<f64> {
        match self {
            Node::Const(c) => Some(*c),
            Node::Var => Some(x),
            Node::Binary(lhs, op, rhs) => {
                let l = lhs.eval_checked(x)?;
                let r = rhs.eval_checked(x)?;
                if *op == BinOp::Div && r == 0.0 {
                    return None;
                }
                Some(op.compute(l, r))
            }
        }
    }

    fn render(&self, var: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Const(c) => write!(f, "{c}"),
            Node::Var => write!(f, "{var}"),
            Node::Binary(lhs, op, rhs) => {
                write!(f, "(")?;
                lhs.render(var, f)?;
                write!(f, " {op} ")?;
                rhs.render(var, f)?;
                write!(f, ")")
            }
        }
    }
}

/// A parsed single-variable recurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    root: Node,
    var: String,
}

impl Expr {
    pub fn parse(src: &str) -> ParseResult<Expr> {
        Expr::from_postfix(&to_postfix(tokenize(src)?)?)
    }

    /// Builds the tree from a postfix sequence.
    pub fn from_postfix(postfix: &[Token]) -> ParseResult<Expr> {
        let mut stack: Vec<Node> = Vec::new();
        let mut var: Option<&str> = None;

        for tok in postfix {
            match tok {
                Token::Num(n) => stack.push(Node::Const(*n)),
                Token::Ident(name) => {
                    match var {
                        Some(seen) if seen != name.as_str() => {
                            let first = seen.to_string();
                            return Err(ParseError::MultipleVariables(first, name.clone()));
                        }
                        _ => var = Some(name.as_str()),
                    }
                    stack.push(Node::Var);
                }
                Token::Op(op) => {
                    let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                        return Err(ParseError::MissingOperand(op.symbol()));
                    };
                    stack.push(Node::Binary(Box::new(lhs), *op, Box::new(rhs)));
                }
                Token::LParen | Token::RParen => return Err(ParseError::MismatchedParen),
            }
        }

        let root = match stack.len() {
            0 => return Err(ParseError::Empty),
            1 => stack.pop().ok_or(ParseError::Empty)?,
            n => return Err(ParseError::TrailingOperand(n - 1)),
        };
        Ok(Expr { root, var: var.unwrap_or("x").to_string() })
    }

    /// Folds every constant subtree, e.g. `(54 + 3)` → `57`.
    pub fn reduce(self) -> Expr {
        Expr { root: self.root.reduce(), var: self.var }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn variable(&self) -> &str {
        &self.var
    }

    /// True when the expression never reads its variable.
    pub fn is_constant(&self) -> bool {
        fn walk(n: &Node) -> bool {
            match n {
                Node::Const(_) => true,
                Node::Var => false,
                Node::Binary(l, _, r) => walk(l) && walk(r),
            }
        }
        walk(&self.root)
    }
}

impl Recurrence for Expr {
    #[inline]
    fn apply(&self, x: f64) -> f64 {
        self.root.eval(x)
    }

    /// `None` on any zero divisor. `^` follows `powf` even for `0 ^ -n`.
    fn checked_apply(&self, x: f64) -> Option<f64> {
        self.root.eval_checked(x)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.render(&self.var, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_constant_subtrees() {
        let e = Expr::parse("(((54 + 3) / n) - (4 * 2)) + n").unwrap();
        assert_eq!(e.to_string(), "((((54 + 3) / n) - (4 * 2)) + n)");
        let e = e.reduce();
        assert_eq!(e.to_string(), "(((57 / n) - 8) + n)");
        assert_eq!(e.variable(), "n");
    }

    #[test]
    fn fully_constant_expression_folds_to_leaf() {
        let e = Expr::parse("2 ^ 3 * (1 + 1)").unwrap().reduce();
        assert!(e.is_constant());
        assert_eq!(e.root(), &Node::Const(16.0));
    }

    #[test]
    fn structural_errors() {
        assert_eq!(Expr::parse(""), Err(ParseError::Empty));
        assert_eq!(Expr::parse("x +"), Err(ParseError::MissingOperand('+')));
        assert_eq!(Expr::parse("x 2"), Err(ParseError::TrailingOperand(1)));
        assert_eq!(
            Expr::parse("x + n"),
            Err(ParseError::MultipleVariables("x".into(), "n".into()))
        );
    }

    #[test]
    fn checked_apply_stops_on_zero_divisor() {
        let e = Expr::parse("1 / (x - 1)").unwrap();
        assert_eq!(e.checked_apply(1.0), None);
        assert_eq!(e.checked_apply(2.0), Some(1.0));
        assert_eq!(e.apply(1.0), f64::INFINITY);
    }
}
