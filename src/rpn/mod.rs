use std::fmt;

mod converter;
mod evaluator;
mod scanner;
mod stack;

pub use converter::Converter;
pub use evaluator::Evaluator;
pub use scanner::scan_number;
pub use stack::{BoundedStack, StackFull};

/// Default capacity of the operator stack used while converting.
pub const OPERATOR_STACK_SIZE: usize = 256;
/// Default capacity of the operand stack used while evaluating.
pub const OPERAND_STACK_SIZE: usize = 32;

/// Separator written to the RPN text ahead of every scanned operator.
pub const SEPARATOR: char = ' ';

/// Grouping of a chain of operators with equal priority.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Mod),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Mod => '%',
            Operator::Pow => '^',
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
            Operator::Mod | Operator::Pow => 3,
        }
    }

    /// `%` groups with `^` as right-associative: `2%5%3` is `2%(5%3)`.
    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => Associativity::Left,
            Operator::Mod | Operator::Pow => Associativity::Right,
        }
    }

    /// Whether `top`, already on the operator stack, must be emitted before `self` is pushed.
    pub fn yields_to(&self, top: Operator) -> bool {
        match self.associativity() {
            Associativity::Left => top.priority() >= self.priority(),
            Associativity::Right => top.priority() > self.priority(),
        }
    }

    /// Applies the operator with IEEE-754 semantics; division by zero gives an infinity or NaN.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::Mod => left % right,
            Operator::Pow => left.powf(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Operator::from_symbol(value).ok_or(value)
    }
}

/// An entry of the operator stack: an operator waiting for its right operand, or an unmatched `(`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Pending {
    OpenParen,
    Operator(Operator),
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Pow,
    ];

    #[test]
    fn test_symbol_lookup() {
        for op in ALL {
            assert_eq!(Operator::from_symbol(op.symbol()), Some(op));
            assert_eq!(Operator::try_from(op.symbol()), Ok(op));
        }
        assert_eq!(Operator::from_symbol('('), None);
        assert_eq!(Operator::try_from('x'), Err('x'));
    }

    #[test]
    fn test_priorities() {
        assert!(Operator::Add.priority() < Operator::Mul.priority());
        assert!(Operator::Div.priority() < Operator::Pow.priority());
        assert_eq!(Operator::Mod.priority(), Operator::Pow.priority());
        assert_eq!(Operator::Add.priority(), Operator::Sub.priority());
    }

    #[test]
    fn test_yields_to() {
        // left-associative: equal priority pops
        assert!(Operator::Sub.yields_to(Operator::Add));
        assert!(Operator::Add.yields_to(Operator::Pow));
        assert!(!Operator::Mul.yields_to(Operator::Add));
        // right-associative: equal priority stays
        assert!(!Operator::Pow.yields_to(Operator::Pow));
        assert!(!Operator::Pow.yields_to(Operator::Mod));
        assert!(!Operator::Mod.yields_to(Operator::Mul));
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(Operator::Mul.apply(6.0, 7.0), 42.0);
        assert_eq!(Operator::Div.apply(9.0, 3.0), 3.0);
        assert_eq!(Operator::Mod.apply(10.0, 3.0), 1.0);
        assert_eq!(Operator::Mod.apply(5.5, 2.0), 1.5);
        assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    }

    #[test]
    fn test_apply_by_zero() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
        assert!(Operator::Div.apply(0.0, 0.0).is_nan());
        assert!(Operator::Mod.apply(1.0, 0.0).is_nan());
    }
}
