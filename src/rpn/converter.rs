use crate::error::{ParseError, ParseErrorKind};
use crate::rpn::{BoundedStack, Operator, Pending, OPERATOR_STACK_SIZE, SEPARATOR};
use log::{debug, trace};

/// Infix to RPN converter (shunting-yard) that validates the expression as it goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    capacity: usize,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(OPERATOR_STACK_SIZE)
    }
}

impl Converter {
    /// Creates a converter whose operator stack holds at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Converts an infix expression to RPN text.
    ///
    /// Numbers are copied as-is; a single space precedes every operator of the
    /// input, so adjacent numbers in the output are always separated.
    ///
    /// # Errors
    ///
    /// Returns the first grammar violation together with the byte offset of the
    /// character that caused it.
    pub fn convert(&self, expression: &str) -> Result<String, ParseError> {
        let mut state = Conversion::new(self.capacity, expression.len());

        for (position, c) in expression.char_indices() {
            state
                .feed(c)
                .map_err(|kind| ParseError::new(kind, position))?;
        }

        let rpn = state
            .finish()
            .map_err(|kind| ParseError::new(kind, expression.len()))?;
        debug!("converted {expression:?} to {rpn:?}");
        Ok(rpn)
    }
}

/// Scan state for one call of [`Converter::convert`].
struct Conversion {
    stack: BoundedStack<Pending>,
    rpn: String,
    prev: Option<char>,
    points: usize,
    open_parens: usize,
}

impl Conversion {
    fn new(capacity: usize, input_len: usize) -> Self {
        Self {
            stack: BoundedStack::new(capacity),
            rpn: String::with_capacity(input_len * 2),
            prev: None,
            points: 0,
            open_parens: 0,
        }
    }

    /// True if the previous token closes an operand: a digit or `)`.
    fn after_operand(&self) -> bool {
        matches!(self.prev, Some(c) if c == ')' || c.is_ascii_digit())
    }

    fn feed(&mut self, c: char) -> Result<(), ParseErrorKind> {
        match c {
            '(' => self.open_paren()?,
            ')' => self.close_paren()?,
            '.' => {
                if self.prev == Some(')') {
                    return Err(ParseErrorKind::PointMisplaced);
                }
                if self.points > 0 {
                    return Err(ParseErrorKind::TooManyPoints);
                }
                self.rpn.push(c);
                self.points += 1;
            }
            '0'..='9' => {
                if self.prev == Some(')') {
                    return Err(ParseErrorKind::DigitAfterCloseParen);
                }
                self.rpn.push(c);
            }
            _ => match Operator::from_symbol(c) {
                Some(op) => self.operator(op)?,
                None => return Err(ParseErrorKind::UnknownSymbol(c)),
            },
        }
        self.prev = Some(c);
        Ok(())
    }

    fn open_paren(&mut self) -> Result<(), ParseErrorKind> {
        let allowed = match self.prev {
            None | Some('(') => true,
            Some(c) => Operator::from_symbol(c).is_some(),
        };
        if !allowed {
            return Err(ParseErrorKind::OpenParenMisplaced { after: self.prev });
        }
        self.push(Pending::OpenParen)?;
        self.open_parens += 1;
        self.points = 0;
        Ok(())
    }

    fn close_paren(&mut self) -> Result<(), ParseErrorKind> {
        if !self.after_operand() {
            return Err(ParseErrorKind::CloseParenMisplaced { after: self.prev });
        }
        if self.open_parens == 0 {
            return Err(ParseErrorKind::MissingOpenParen);
        }
        // pops through the matching '(' and discards it
        while let Some(Pending::Operator(op)) = self.stack.pop() {
            self.emit(op);
        }
        self.open_parens -= 1;
        self.points = 0;
        Ok(())
    }

    fn operator(&mut self, op: Operator) -> Result<(), ParseErrorKind> {
        if !self.after_operand() {
            return Err(ParseErrorKind::OperatorMisplaced {
                operator: op,
                after: self.prev,
            });
        }

        self.rpn.push(SEPARATOR);
        while let Some(&Pending::Operator(top)) = self.stack.peek() {
            if !op.yields_to(top) {
                break;
            }
            self.stack.pop();
            self.emit(top);
        }
        self.push(Pending::Operator(op))?;
        self.points = 0;
        Ok(())
    }

    fn push(&mut self, pending: Pending) -> Result<(), ParseErrorKind> {
        self.stack.push(pending).map_err(|full| {
            debug!("operator stack full at {} entries", full.capacity);
            ParseErrorKind::TooComplex
        })
    }

    fn emit(&mut self, op: Operator) {
        trace!("emit {op}");
        self.rpn.push(op.symbol());
    }

    fn finish(mut self) -> Result<String, ParseErrorKind> {
        if self.open_parens > 0 {
            return Err(ParseErrorKind::MissingCloseParen);
        }
        while let Some(pending) = self.stack.pop() {
            if let Pending::Operator(op) = pending {
                self.emit(op);
            }
        }
        Ok(self.rpn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(expression: &str) -> Result<String, ParseError> {
        Converter::default().convert(expression)
    }

    fn fail(expression: &str) -> (ParseErrorKind, usize) {
        let err = convert(expression).unwrap_err();
        (err.kind, err.position)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(convert("3+4*2").unwrap(), "3 4 2*+");
        assert_eq!(convert("3*4+2").unwrap(), "3 4 *2+");
        assert_eq!(convert("1-2/4%5").unwrap(), "1 2 4 5%/-");
    }

    #[test]
    fn test_associativity() {
        assert_eq!(convert("8-3-2").unwrap(), "8 3 -2-");
        assert_eq!(convert("2^3^2").unwrap(), "2 3 2^^");
        assert_eq!(convert("2%5%3").unwrap(), "2 5 3%%");
        // the scanned operator's associativity decides
        assert_eq!(convert("2^3+1").unwrap(), "2 3 ^1+");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(convert("(3+4)*(5+6)").unwrap(), "3 4+ 5 6+*");
        assert_eq!(convert("((7))").unwrap(), "7");
        assert_eq!(convert("2*(3-(4+5))").unwrap(), "2 3 4 5+-*");
    }

    #[test]
    fn test_numbers_copied_verbatim() {
        assert_eq!(convert("1.5+.5").unwrap(), "1.5 .5+");
        assert_eq!(convert("10.").unwrap(), "10.");
        assert_eq!(convert("007").unwrap(), "007");
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(convert("").unwrap(), "");
    }

    #[test]
    fn test_operator_misplaced() {
        assert_eq!(
            fail("3++4"),
            (
                ParseErrorKind::OperatorMisplaced {
                    operator: Operator::Add,
                    after: Some('+')
                },
                2
            )
        );
        assert_eq!(
            fail("-3"),
            (
                ParseErrorKind::OperatorMisplaced {
                    operator: Operator::Sub,
                    after: None
                },
                0
            )
        );
        assert_eq!(
            fail("(*2)"),
            (
                ParseErrorKind::OperatorMisplaced {
                    operator: Operator::Mul,
                    after: Some('(')
                },
                1
            )
        );
        assert_eq!(
            fail("1.+2"),
            (
                ParseErrorKind::OperatorMisplaced {
                    operator: Operator::Add,
                    after: Some('.')
                },
                2
            )
        );
    }

    #[test]
    fn test_paren_misplaced() {
        assert_eq!(
            fail("2(3)"),
            (ParseErrorKind::OpenParenMisplaced { after: Some('2') }, 1)
        );
        assert_eq!(
            fail("(1)(2)"),
            (ParseErrorKind::OpenParenMisplaced { after: Some(')') }, 3)
        );
        assert_eq!(
            fail("()"),
            (ParseErrorKind::CloseParenMisplaced { after: Some('(') }, 1)
        );
        assert_eq!(
            fail("(1+)"),
            (ParseErrorKind::CloseParenMisplaced { after: Some('+') }, 3)
        );
        assert_eq!(
            fail(")"),
            (ParseErrorKind::CloseParenMisplaced { after: None }, 0)
        );
    }

    #[test]
    fn test_number_after_close_paren() {
        assert_eq!(fail("(1)2"), (ParseErrorKind::DigitAfterCloseParen, 3));
        assert_eq!(fail("(1).5"), (ParseErrorKind::PointMisplaced, 3));
    }

    #[test]
    fn test_decimal_points() {
        assert_eq!(fail("1.2.3"), (ParseErrorKind::TooManyPoints, 3));
        assert_eq!(fail("1..2"), (ParseErrorKind::TooManyPoints, 2));
        // each operator starts a fresh number
        assert_eq!(convert("1.2+3.4").unwrap(), "1.2 3.4+");
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(fail("1 + 2"), (ParseErrorKind::UnknownSymbol(' '), 1));
        assert_eq!(fail("2x"), (ParseErrorKind::UnknownSymbol('x'), 1));
        assert_eq!(fail("1+é"), (ParseErrorKind::UnknownSymbol('é'), 2));
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(fail("(3+4"), (ParseErrorKind::MissingCloseParen, 4));
        assert_eq!(fail("((1)"), (ParseErrorKind::MissingCloseParen, 4));
        assert_eq!(fail("3+4)"), (ParseErrorKind::MissingOpenParen, 3));
        assert_eq!(fail("2*(3+4))"), (ParseErrorKind::MissingOpenParen, 7));
    }

    #[test]
    fn test_operator_stack_overflow() {
        let depth = OPERATOR_STACK_SIZE + 1;
        let expression = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(
            fail(&expression),
            (ParseErrorKind::TooComplex, OPERATOR_STACK_SIZE)
        );

        let depth = OPERATOR_STACK_SIZE;
        let expression = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(convert(&expression).unwrap(), "1");
    }

    #[test]
    fn test_custom_capacity() {
        let converter = Converter::new(2);
        assert_eq!(converter.convert("1^2^3").unwrap(), "1 2 3^^");
        let err = converter.convert("1^2^3^4").unwrap_err();
        assert_eq!(err, ParseError::new(ParseErrorKind::TooComplex, 5));

        let err = converter.convert("(((1)))").unwrap_err();
        assert_eq!(err, ParseError::new(ParseErrorKind::TooComplex, 2));
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        for expression in ["", "(", ")", "1+", "((", "1.1.", "2^", "9)("] {
            if let Err(err) = convert(expression) {
                assert!(err.position <= expression.len(), "{expression:?}: {err:?}");
            }
        }
    }
}
