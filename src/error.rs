//! Error types for the galoisfield library.
//!
//! Every failure in the crate is a variant of [`Error`], built with the
//! `thiserror` crate. Variants are grouped by where they arise: field
//! construction, element arithmetic, and batch request handling.

use std::fmt;

use thiserror::Error;

/// The main error type for the galoisfield library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Field Construction Errors ============
    /// Field parameters violate an invariant (non-prime `p`, `n < 1`,
    /// reduction polynomial of the wrong degree).
    #[error("invalid field: {reason}")]
    InvalidField {
        /// Description of which parameter is invalid.
        reason: String,
    },

    // ============ Arithmetic Errors ============
    /// Operands belong to different fields.
    #[error("field mismatch: {left} and {right}")]
    FieldMismatch {
        /// The field of the left operand.
        left: String,
        /// The field of the right operand.
        right: String,
    },

    /// Division by the additive identity (or by the zero polynomial).
    #[error("division by zero in {field}")]
    DivisionByZero {
        /// The field or ring where division by zero occurred.
        field: String,
    },

    /// The extended Euclidean algorithm found no inverse.
    #[error("{value} has no multiplicative inverse modulo {modulus}")]
    InverseNotFound {
        /// The element that could not be inverted.
        value: String,
        /// The modulus (prime or reduction polynomial).
        modulus: String,
    },

    // ============ Request Errors ============
    /// Operator symbol outside `+ - * / ^`.
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),

    /// A request omitted a parameter needed to resolve its field.
    #[error("missing parameter `{name}`")]
    MissingParameter {
        /// Name of the absent parameter.
        name: &'static str,
    },

    /// An operand cannot be used with the requested field or operator.
    #[error("invalid operand: {reason}")]
    InvalidOperand {
        /// Description of what is wrong with the operand.
        reason: String,
    },
}

/// A specialized `Result` type for galoisfield operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidField` error.
    #[must_use]
    pub fn invalid_field(reason: impl Into<String>) -> Self {
        Self::InvalidField {
            reason: reason.into(),
        }
    }

    /// Create a new `InvalidOperand` error.
    #[must_use]
    pub fn invalid_operand(reason: impl Into<String>) -> Self {
        Self::InvalidOperand {
            reason: reason.into(),
        }
    }

    /// Create a new `FieldMismatch` error from the two operands' fields.
    ///
    /// Fields are rendered with `Debug` so that extension fields differing
    /// only in their reduction polynomial stay distinguishable.
    #[must_use]
    pub fn field_mismatch(left: &impl fmt::Debug, right: &impl fmt::Debug) -> Self {
        Self::FieldMismatch {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }

    /// Stable name of the error category.
    ///
    /// Batch results prefix their error message with this name so callers can
    /// classify failures without parsing the message.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField { .. } => "InvalidFieldError",
            Self::FieldMismatch { .. } => "FieldMismatchError",
            Self::DivisionByZero { .. } => "DivisionByZeroError",
            Self::InverseNotFound { .. } => "InverseNotFoundError",
            Self::UnsupportedOperator(_) => "UnsupportedOperatorError",
            Self::MissingParameter { .. } => "MissingParameterError",
            Self::InvalidOperand { .. } => "InvalidOperandError",
        }
    }
}
