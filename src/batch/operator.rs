//! The closed set of batch operators.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::gf::FieldArithmetic;

/// A binary field operator, parsed from its symbol.
///
/// ```
/// use galoisfield::Operator;
///
/// let op: Operator = "^".parse().unwrap();
/// assert_eq!(op, Operator::Pow);
/// assert!(op.takes_exponent());
/// assert!("%".parse::<Operator>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, fails on a zero divisor.
    Div,
    /// `^`, the right operand is an integer exponent.
    Pow,
}

/// The right-hand side of an operator application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument<E> {
    /// A field element, for `+ - * /`.
    Element(E),
    /// An integer exponent, for `^`.
    Exponent(i64),
}

impl Operator {
    /// All operators, in symbol order `+ - * / ^`.
    pub const ALL: [Self; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow];

    /// The symbol this operator is parsed from.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Whether the right operand is an exponent rather than an element.
    #[must_use]
    pub fn takes_exponent(self) -> bool {
        matches!(self, Self::Pow)
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// # Errors
    ///
    /// Propagates the arithmetic error, or returns [`Error::InvalidOperand`]
    /// when `rhs` is the wrong kind of argument for this operator.
    pub fn apply<E: FieldArithmetic>(self, lhs: &E, rhs: &Argument<E>) -> Result<E> {
        match (self, rhs) {
            (Self::Add, Argument::Element(rhs)) => lhs.add(rhs),
            (Self::Sub, Argument::Element(rhs)) => lhs.sub(rhs),
            (Self::Mul, Argument::Element(rhs)) => lhs.mul(rhs),
            (Self::Div, Argument::Element(rhs)) => lhs.div(rhs),
            (Self::Pow, Argument::Exponent(exp)) => lhs.pow(*exp),
            (Self::Pow, Argument::Element(_)) => {
                Err(Error::invalid_operand("`^` expects an integer exponent"))
            }
            (op, Argument::Exponent(_)) => Err(Error::invalid_operand(format!(
                "`{op}` expects a field element, not an exponent"
            ))),
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| Error::UnsupportedOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
