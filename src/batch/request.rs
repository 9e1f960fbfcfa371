//! Request and result records exchanged with the batch processor.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A raw operand value.
///
/// With the `serde` feature this decodes untagged: a JSON number is an
/// [`Integer`](Self::Integer), an array a [`Coefficients`](Self::Coefficients)
/// list (lowest degree first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Operand {
    /// An integer, reduced into the field (base-p digits for extensions).
    Integer(i64),
    /// Polynomial coefficients, lowest degree first.
    Coefficients(Vec<i64>),
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<i64>> for Operand {
    fn from(coefficients: Vec<i64>) -> Self {
        Self::Coefficients(coefficients)
    }
}

impl From<&[i64]> for Operand {
    fn from(coefficients: &[i64]) -> Self {
        Self::Coefficients(coefficients.to_vec())
    }
}

/// One operation to evaluate: `operand1 <operator> operand2` in the field
/// described by `p`, `n` and `reduction_polynomial`.
///
/// `n` absent means GF(p). The operator is kept as the raw symbol so that an
/// unsupported one is reported for this request alone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationRequest {
    /// Operator symbol, one of `+ - * / ^`.
    pub operator: String,
    /// Left operand.
    pub operand1: Operand,
    /// Right operand, an integer exponent for `^`.
    pub operand2: Operand,
    /// Field characteristic.
    #[cfg_attr(feature = "serde", serde(default))]
    pub p: Option<u64>,
    /// Extension degree.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub n: Option<u32>,
    /// Reduction polynomial coefficients, lowest degree first.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub reduction_polynomial: Option<Vec<i64>>,
}

impl OperationRequest {
    /// A request over the prime field GF(p).
    ///
    /// ```
    /// use galoisfield::{BatchProcessor, OperationRequest};
    ///
    /// let request = OperationRequest::prime("+", 3, 5, 7);
    /// assert_eq!(BatchProcessor::new().evaluate(&request).unwrap(), "1");
    /// ```
    pub fn prime(
        operator: impl Into<String>,
        operand1: impl Into<Operand>,
        operand2: impl Into<Operand>,
        p: u64,
    ) -> Self {
        Self {
            operator: operator.into(),
            operand1: operand1.into(),
            operand2: operand2.into(),
            p: Some(p),
            n: None,
            reduction_polynomial: None,
        }
    }

    /// A request over GF(p^n) with the given reduction polynomial.
    pub fn extension(
        operator: impl Into<String>,
        operand1: impl Into<Operand>,
        operand2: impl Into<Operand>,
        p: u64,
        n: u32,
        reduction_polynomial: impl Into<Vec<i64>>,
    ) -> Self {
        Self {
            operator: operator.into(),
            operand1: operand1.into(),
            operand2: operand2.into(),
            p: Some(p),
            n: Some(n),
            reduction_polynomial: Some(reduction_polynomial.into()),
        }
    }
}

/// Result of one request: a rendered value or an error description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationOutcome {
    /// Whether the request succeeded.
    pub ok: bool,
    /// The rendered result, on success.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub value: Option<String>,
    /// `"<kind>: <message>"`, on failure.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl OperationOutcome {
    /// A successful outcome.
    #[must_use]
    pub fn success(value: impl Into<String>) -> Self {
        Self {
            ok: true,
            value: Some(value.into()),
            error: None,
        }
    }

    /// A failed outcome, recording the error kind and message.
    ///
    /// ```
    /// use galoisfield::{Error, OperationOutcome};
    ///
    /// let outcome = OperationOutcome::failure(&Error::UnsupportedOperator("%".into()));
    /// assert!(!outcome.ok);
    /// assert_eq!(
    ///     outcome.error.as_deref(),
    ///     Some("UnsupportedOperatorError: unsupported operator `%`")
    /// );
    /// ```
    #[must_use]
    pub fn failure(err: &Error) -> Self {
        Self {
            ok: false,
            value: None,
            error: Some(format!("{}: {err}", err.kind())),
        }
    }

    /// The error kind prefix of a failed outcome, e.g. `"DivisionByZeroError"`.
    #[must_use]
    pub fn error_kind(&self) -> Option<&str> {
        self.error
            .as_deref()
            .map(|e| e.split_once(':').map_or(e, |(kind, _)| kind))
    }
}

impl From<crate::error::Result<String>> for OperationOutcome {
    fn from(result: crate::error::Result<String>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(err) => Self::failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let req = OperationRequest::prime("*", 3, 5, 7);
        assert_eq!(req.operand1, Operand::Integer(3));
        assert_eq!(req.p, Some(7));
        assert_eq!(req.n, None);

        let req = OperationRequest::extension("+", vec![1, 1], 2, 3, 2, vec![1, 0, 1]);
        assert_eq!(req.operand1, Operand::Coefficients(vec![1, 1]));
        assert_eq!(req.n, Some(2));
        assert_eq!(req.reduction_polynomial, Some(vec![1, 0, 1]));
    }

    #[test]
    fn test_outcome() {
        let ok = OperationOutcome::success("4");
        assert!(ok.ok);
        assert_eq!(ok.error_kind(), None);

        let err = OperationOutcome::from(Err(Error::MissingParameter { name: "p" }));
        assert!(!err.ok);
        assert_eq!(err.value, None);
        assert_eq!(err.error_kind(), Some("MissingParameterError"));
    }
}
