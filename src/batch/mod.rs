//! Batch evaluation of field operations.
//!
//! A [`BatchProcessor`] takes a slice of [`OperationRequest`]s and returns one
//! [`OperationOutcome`] per request, in input order. Every request is
//! evaluated independently: its field is constructed, its operands are
//! converted into elements, and its operator is applied. A failure at any of
//! those steps is recorded in that request's outcome and the batch continues.
//!
//! ## Example
//!
//! ```
//! use galoisfield::{process_batch, OperationRequest};
//!
//! let outcomes = process_batch(&[
//!     OperationRequest::prime("+", 3, 5, 7),
//!     OperationRequest::prime("%", 3, 5, 7),
//!     OperationRequest::extension("*", 0x53, 0xCA, 2, 8, vec![1, 1, 0, 1, 1, 0, 0, 0, 1]),
//! ]);
//!
//! assert_eq!(outcomes[0].value.as_deref(), Some("1"));
//! assert_eq!(outcomes[1].error_kind(), Some("UnsupportedOperatorError"));
//! assert_eq!(outcomes[2].value.as_deref(), Some("1"));
//! ```

mod operator;
mod request;

pub use operator::{Argument, Operator};
pub use request::{Operand, OperationOutcome, OperationRequest};

use tracing::{debug, instrument, warn};

use crate::builder::BatchProcessorBuilder;
use crate::error::{Error, Result};
use crate::gf::{ExtensionElement, ExtensionField, FieldArithmetic, FieldElement, PrimeField};

/// Batch size from which the `parallel` feature switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// How successful extension-field results are rendered.
///
/// Prime-field results are always the canonical residue, e.g. `"4"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueFormat {
    /// Polynomial notation, e.g. `"x^2 + 1"`.
    #[default]
    Polynomial,
    /// Coefficient list, lowest degree first, e.g. `"[1, 0, 1]"`.
    Coefficients,
}

/// Runtime settings of a [`BatchProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
    /// Batches with at least this many requests are processed in parallel
    /// when the `parallel` feature is enabled.
    pub parallel_threshold: usize,
    /// Rendering of extension-field results.
    pub value_format: ValueFormat,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            value_format: ValueFormat::default(),
        }
    }
}

/// Evaluates [`OperationRequest`]s with per-request error isolation.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    /// A processor with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a processor.
    ///
    /// ```
    /// use galoisfield::{BatchProcessor, OperationRequest, ValueFormat};
    ///
    /// let processor = BatchProcessor::builder()
    ///     .value_format(ValueFormat::Coefficients)
    ///     .build();
    ///
    /// let request = OperationRequest::extension("*", 3, 3, 3, 2, vec![1, 0, 1]);
    /// assert_eq!(processor.evaluate(&request).unwrap(), "[2, 0]"); // x * x = -1
    /// ```
    #[must_use]
    pub fn builder() -> BatchProcessorBuilder {
        BatchProcessorBuilder::new()
    }

    pub(crate) fn with_config(config: BatchConfig) -> Self {
        Self { config }
    }

    /// The processor's configuration.
    #[must_use]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Evaluate every request, returning one outcome per request in order.
    #[instrument(skip_all, fields(requests = requests.len()))]
    pub fn process(&self, requests: &[OperationRequest]) -> Vec<OperationOutcome> {
        #[cfg(feature = "parallel")]
        {
            if requests.len() >= self.config.parallel_threshold {
                return self.process_parallel(requests);
            }
        }

        let outcomes: Vec<_> = requests
            .iter()
            .enumerate()
            .map(|(index, request)| self.process_one(index, request))
            .collect();

        debug!(
            failed = outcomes.iter().filter(|o| !o.ok).count(),
            "batch processed"
        );
        outcomes
    }

    pub(crate) fn process_one(&self, index: usize, request: &OperationRequest) -> OperationOutcome {
        match self.evaluate(request) {
            Ok(value) => {
                debug!(index, operator = %request.operator, %value, "request evaluated");
                OperationOutcome::success(value)
            }
            Err(err) => {
                warn!(index, operator = %request.operator, error = %err, "request failed");
                OperationOutcome::failure(&err)
            }
        }
    }

    /// Evaluate a single request.
    ///
    /// Steps run in order: resolve the field, convert the left operand, parse
    /// the operator, convert the right operand, apply.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn evaluate(&self, request: &OperationRequest) -> Result<String> {
        match resolve_field(request)? {
            TargetField::Prime(field) => self.evaluate_in(&field, request),
            TargetField::Extension(field) => self.evaluate_in(&field, request),
        }
    }

    fn evaluate_in<F: OperandField>(
        &self,
        field: &F,
        request: &OperationRequest,
    ) -> Result<String> {
        let lhs = field.convert(&request.operand1)?;
        let operator: Operator = request.operator.parse()?;

        let rhs = if operator.takes_exponent() {
            Argument::Exponent(exponent(&request.operand2)?)
        } else {
            Argument::Element(field.convert(&request.operand2)?)
        };

        let result = operator.apply(&lhs, &rhs)?;
        Ok(field.render(&result, self.config.value_format))
    }
}

/// Evaluate a batch with the default [`BatchProcessor`].
#[must_use]
pub fn process_batch(requests: &[OperationRequest]) -> Vec<OperationOutcome> {
    BatchProcessor::new().process(requests)
}

enum TargetField {
    Prime(PrimeField),
    Extension(ExtensionField),
}

fn resolve_field(request: &OperationRequest) -> Result<TargetField> {
    let p = request.p.ok_or(Error::MissingParameter { name: "p" })?;

    match (request.n, request.reduction_polynomial.as_deref()) {
        (None, None) | (Some(1), None) => Ok(TargetField::Prime(PrimeField::new(p)?)),
        (None, Some(_)) => Err(Error::invalid_field(
            "reduction polynomial given without extension degree `n`",
        )),
        (Some(n), None) if n > 1 => Err(Error::MissingParameter {
            name: "reduction_polynomial",
        }),
        (Some(n), poly) => Ok(TargetField::Extension(ExtensionField::new(
            p,
            n,
            poly.unwrap_or_default(),
        )?)),
    }
}

fn exponent(operand: &Operand) -> Result<i64> {
    match operand {
        Operand::Integer(exp) => Ok(*exp),
        Operand::Coefficients(_) => Err(Error::invalid_operand(
            "exponent must be an integer, not a coefficient list",
        )),
    }
}

/// A field that batch operands can be converted into.
trait OperandField {
    type Element: FieldArithmetic;

    fn convert(&self, operand: &Operand) -> Result<Self::Element>;

    fn render(&self, element: &Self::Element, format: ValueFormat) -> String;
}

impl OperandField for PrimeField {
    type Element = FieldElement;

    fn convert(&self, operand: &Operand) -> Result<FieldElement> {
        match operand {
            Operand::Integer(v) => Ok(self.element(*v)),
            Operand::Coefficients(c) if c.len() <= 1 => {
                Ok(self.element(c.first().copied().unwrap_or(0)))
            }
            Operand::Coefficients(c) => Err(Error::invalid_operand(format!(
                "{} coefficients given for prime field {self}",
                c.len()
            ))),
        }
    }

    fn render(&self, element: &FieldElement, _format: ValueFormat) -> String {
        element.value().to_string()
    }
}

impl OperandField for ExtensionField {
    type Element = ExtensionElement;

    fn convert(&self, operand: &Operand) -> Result<ExtensionElement> {
        Ok(match operand {
            Operand::Integer(v) => self.element(*v),
            Operand::Coefficients(c) => self.element_from_coefficients(c),
        })
    }

    fn render(&self, element: &ExtensionElement, format: ValueFormat) -> String {
        match format {
            ValueFormat::Polynomial => element.to_string(),
            ValueFormat::Coefficients => format!("{:?}", element.coefficients()),
        }
    }
}
