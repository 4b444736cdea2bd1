use crate::error::{CalcError, EvalError, ParseError};
use crate::rpn::{Converter, Evaluator, OPERAND_STACK_SIZE, OPERATOR_STACK_SIZE};
use log::debug;

/// Stack capacities for one [`Calculator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub operator_capacity: usize,
    pub operand_capacity: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            operator_capacity: OPERATOR_STACK_SIZE,
            operand_capacity: OPERAND_STACK_SIZE,
        }
    }
}

/// Converts an infix expression to RPN and evaluates it.
///
/// Holds only its limits; every call allocates its own stacks, so one
/// calculator can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    converter: Converter,
    evaluator: Evaluator,
}

impl Calculator {
    pub fn new(limits: Limits) -> Self {
        Self {
            converter: Converter::new(limits.operator_capacity),
            evaluator: Evaluator::new(limits.operand_capacity),
        }
    }

    pub fn convert(&self, expression: &str) -> Result<String, ParseError> {
        self.converter.convert(expression)
    }

    pub fn evaluate(&self, rpn: &str) -> Result<f64, EvalError> {
        self.evaluator.evaluate(rpn)
    }

    /// Evaluates an infix expression.
    ///
    /// # Errors
    ///
    /// [`CalcError::Parse`] carries the offending input position;
    /// [`CalcError::Eval`] reports an operand/operator mismatch or an operand
    /// stack overflow found while reducing the RPN.
    pub fn calculate(&self, expression: &str) -> Result<f64, CalcError> {
        let rpn = self.convert(expression)?;
        Ok(self.evaluate(&rpn)?)
    }

    /// Like [`calculate`](Self::calculate), but an evaluation failure yields `Ok(0.0)`.
    ///
    /// Kept for callers that depend on syntax errors being the only failures reported.
    pub fn calculate_lenient(&self, expression: &str) -> Result<f64, ParseError> {
        let rpn = self.convert(expression)?;
        Ok(self.evaluate(&rpn).unwrap_or_else(|err| {
            debug!("ignoring evaluation error for {expression:?}: {err}");
            0.0
        }))
    }
}
