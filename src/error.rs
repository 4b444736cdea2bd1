use crate::rpn::Operator;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("open parenthesis can't be after {}", After(*.after))]
    OpenParenMisplaced { after: Option<char> },
    #[error("close parenthesis can't be after {}", After(*.after))]
    CloseParenMisplaced { after: Option<char> },
    #[error("operator '{operator}' can't be after {}", After(*.after))]
    OperatorMisplaced {
        operator: Operator,
        after: Option<char>,
    },
    #[error("decimal point can't be after ')'")]
    PointMisplaced,
    #[error("too many decimal points")]
    TooManyPoints,
    #[error("number can't be after ')'")]
    DigitAfterCloseParen,
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(char),
    #[error("missing open parenthesis")]
    MissingOpenParen,
    #[error("missing close parenthesis")]
    MissingCloseParen,
    #[error("expression too complex")]
    TooComplex,
}

/// Renders the token preceding a misplaced one.
struct After(Option<char>);

impl fmt::Display for After {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "'{c}'"),
            None => f.write_str("start of expression"),
        }
    }
}

/// A conversion failure together with the byte offset of the offending input character.
///
/// For failures only detectable at the end of input (`MissingCloseParen`) the
/// position equals the length of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at position {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Formats the expression with a caret under the failing column, followed by the message.
    ///
    /// ```
    /// let err = rpn_calc::convert("3++4").unwrap_err();
    /// assert_eq!(
    ///     err.render("3++4"),
    ///     "3++4\n  ^\noperator '+' can't be after '+'"
    /// );
    /// ```
    pub fn render(&self, expression: &str) -> String {
        let column = expression
            .char_indices()
            .take_while(|(offset, _)| *offset < self.position)
            .count();
        format!("{expression}\n{:>width$}\n{}", "^", self.kind, width = column + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression too complex")]
    TooComplex,
    #[error("can't do '{0}', too few operands")]
    TooFewOperands(Operator),
    #[error("missing operator(s), {operands} operands left")]
    MissingOperators { operands: usize },
    #[error("nothing to evaluate")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Offset into the input expression, known only for conversion failures.
    pub fn position(&self) -> Option<usize> {
        match self {
            CalcError::Parse(err) => Some(err.position),
            CalcError::Eval(_) => None,
        }
    }
}
