//! Infix arithmetic via Reverse Polish Notation.
//!
//! An expression such as `(3+4)*2^.5` is validated and converted to RPN by a
//! shunting-yard pass, then reduced on a bounded operand stack.
//!
//! ```
//! assert_eq!(rpn_calc::convert("3+4*2").unwrap(), "3 4 2*+");
//! assert_eq!(rpn_calc::calculate("2^3^2").unwrap(), 512.0);
//! ```

pub mod calculator;
pub mod error;
pub mod rpn;

pub use calculator::{Calculator, Limits};
pub use error::{CalcError, EvalError, ParseError, ParseErrorKind};
pub use rpn::Operator;

/// Converts an infix expression to RPN text using the default [`Limits`].
pub fn convert(expression: &str) -> Result<String, ParseError> {
    Calculator::default().convert(expression)
}

/// Evaluates RPN text produced by [`convert`].
pub fn evaluate(rpn: &str) -> Result<f64, EvalError> {
    Calculator::default().evaluate(rpn)
}

/// Converts and evaluates an infix expression.
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    Calculator::default().calculate(expression)
}

/// Converts and evaluates an infix expression, reporting `0.0` when evaluation fails.
pub fn calculate_lenient(expression: &str) -> Result<f64, ParseError> {
    Calculator::default().calculate_lenient(expression)
}
