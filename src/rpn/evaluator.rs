use crate::error::EvalError;
use crate::rpn::scanner::is_number_char;
use crate::rpn::{scan_number, BoundedStack, Operator, OPERAND_STACK_SIZE};
use log::{debug, trace};

/// Reduces RPN text, as produced by [`Converter`](crate::rpn::Converter), to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    capacity: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(OPERAND_STACK_SIZE)
    }
}

impl Evaluator {
    /// Creates an evaluator whose operand stack holds at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Evaluates RPN text.
    ///
    /// Every maximal run of digits and `.` is one operand, each operator symbol
    /// applies to the two most recent operands, and anything else is skipped.
    pub fn evaluate(&self, rpn: &str) -> Result<f64, EvalError> {
        let mut stack = BoundedStack::new(self.capacity);
        let mut cursor = rpn.chars().peekable();

        while let Some(&c) = cursor.peek() {
            if is_number_char(c) {
                let value = scan_number(&mut cursor);
                trace!("push {value}");
                stack.push(value).map_err(|_| EvalError::TooComplex)?;
                continue;
            }

            cursor.next();
            let Some(op) = Operator::from_symbol(c) else {
                continue;
            };
            let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                return Err(EvalError::TooFewOperands(op));
            };

            let result = op.apply(lhs, rhs);
            trace!("{lhs} {op} {rhs} = {result}");
            stack.push(result).map_err(|_| EvalError::TooComplex)?;
        }

        if stack.is_empty() {
            return Err(EvalError::Empty);
        }
        match stack.len() {
            1 => {
                let result = stack.pop().ok_or(EvalError::Empty)?;
                debug!("evaluated {rpn:?} to {result}");
                Ok(result)
            }
            operands => Err(EvalError::MissingOperators { operands }),
        }
    }
}
