//! # galoisfield
//!
//! Exact arithmetic over finite fields: prime fields GF(p), extension fields
//! GF(p^n), and polynomials over GF(2), plus a batch processor that evaluates
//! operation records with per-record error isolation.
//!
//! ## Overview
//!
//! - **Prime fields**: [`PrimeField`] validates `p`; its [`FieldElement`]s are
//!   canonical residues in `[0, p)`
//! - **Extension fields**: [`ExtensionField`] holds GF(p) polynomials of degree
//!   `< n`, reduced modulo a caller-supplied irreducible polynomial
//! - **GF(2) polynomials**: [`BinaryPolynomial`] with long division, also used
//!   to reduce products when `p = 2`
//! - **Batches**: [`BatchProcessor`] turns [`OperationRequest`]s into
//!   [`OperationOutcome`]s, one per request, in order
//!
//! All values are immutable. Every operation returns a new element and every
//! failure is an explicit [`Error`].
//!
//! ## Quick Start
//!
//! ```rust
//! use galoisfield::prelude::*;
//!
//! let gf7 = PrimeField::new(7)?;
//! let (a, b) = (gf7.element(3), gf7.element(5));
//! assert_eq!(a.div(&b)?.value(), 2); // 3 * 5^-1 = 3 * 3 = 9 ≡ 2
//!
//! // GF(2^8) as used by AES
//! let gf256 = ExtensionField::new(2, 8, &[1, 1, 0, 1, 1, 0, 0, 0, 1])?;
//! assert!(gf256.element(0x53).mul(&gf256.element(0xCA))?.is_one());
//!
//! // Elements of different fields never mix
//! assert!(a.add(&PrimeField::new(5)?.element(3)).is_err());
//! # Ok::<(), galoisfield::Error>(())
//! ```
//!
//! Or evaluate records in a batch:
//!
//! ```rust
//! use galoisfield::{process_batch, OperationRequest};
//!
//! let outcomes = process_batch(&[
//!     OperationRequest::prime("/", 3, 5, 7),
//!     OperationRequest::prime("/", 3, 0, 7),
//! ]);
//!
//! assert_eq!(outcomes[0].value.as_deref(), Some("2"));
//! assert_eq!(outcomes[1].error_kind(), Some("DivisionByZeroError"));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (a span per batch, an event per request)
//! and installs no subscriber.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of request and outcome
//!   records and of [`BinaryPolynomial`]
//! - `parallel`: Evaluate large batches in parallel using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod builder;
pub mod error;
pub mod gf;
pub mod utils;

#[cfg(feature = "parallel")]
mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{
        process_batch, BatchConfig, BatchProcessor, Operand, OperationOutcome, OperationRequest,
        Operator, ValueFormat,
    };
    pub use crate::builder::BatchProcessorBuilder;
    pub use crate::error::{Error, Result};
    pub use crate::gf::{
        BinaryPolynomial, ExtensionElement, ExtensionField, FieldArithmetic, FieldElement,
        PrimeField,
    };
    pub use crate::utils::{factor_prime_power, is_prime, is_prime_power};
}

// Re-export commonly used items at crate root
pub use batch::{
    process_batch, BatchConfig, BatchProcessor, Operand, OperationOutcome, OperationRequest,
    Operator, ValueFormat,
};
pub use builder::BatchProcessorBuilder;
pub use error::{Error, Result};
pub use gf::{
    BinaryPolynomial, ExtensionElement, ExtensionField, FieldArithmetic, FieldElement, PrimeField,
};
pub use utils::{is_prime, is_prime_power};
