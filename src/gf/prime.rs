//! Prime fields GF(p) and their elements.
//!
//! The modulus is chosen at runtime and validated once in
//! [`PrimeField::new`]. A field is a small `Copy` value, so every element
//! carries its own copy and no element can observe a changed modulus.

use std::fmt;

use tracing::trace;

use super::FieldArithmetic;
use crate::error::{Error, Result};
use crate::utils::{is_prime, mod_inverse, mod_pow, mul_mod, reduce_signed};

/// The prime field GF(p).
///
/// # Example
///
/// ```
/// use galoisfield::gf::{FieldArithmetic, PrimeField};
///
/// let gf7 = PrimeField::new(7).unwrap();
/// let a = gf7.element(3);
/// let b = gf7.element(5);
///
/// assert_eq!(a.add(&b).unwrap().value(), 1); // 3 + 5 = 8 ≡ 1 (mod 7)
/// assert_eq!(a.div(&b).unwrap().value(), 2); // 3 * 5^-1 = 3 * 3 ≡ 2 (mod 7)
///
/// assert!(PrimeField::new(6).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Create the field GF(p).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if `p` is not prime.
    pub fn new(p: u64) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::invalid_field(format!("{p} is not prime")));
        }
        trace!(p, "prime field constructed");
        Ok(Self { p })
    }

    /// The prime modulus.
    #[must_use]
    pub fn p(&self) -> u64 {
        self.p
    }

    /// The field order (number of elements), equal to `p`.
    #[must_use]
    pub fn order(&self) -> u64 {
        self.p
    }

    /// The field characteristic, equal to `p`.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.p
    }

    /// The extension degree, always 1.
    #[must_use]
    pub fn degree(&self) -> u32 {
        1
    }

    /// Create an element from a signed integer.
    ///
    /// The value is reduced with floor modulo, so the result is always in
    /// `[0, p)`: `element(-1)` is `p - 1`.
    #[must_use]
    pub fn element(&self, value: i64) -> FieldElement {
        FieldElement {
            value: reduce_signed(value, self.p),
            field: *self,
        }
    }

    /// Create an element from an unsigned integer, reduced mod p.
    #[must_use]
    pub fn element_from_u64(&self, value: u64) -> FieldElement {
        FieldElement {
            value: value % self.p,
            field: *self,
        }
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> FieldElement {
        self.element_from_u64(0)
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> FieldElement {
        self.element_from_u64(1)
    }

    /// Iterate over all elements of the field.
    pub fn elements(&self) -> impl Iterator<Item = FieldElement> + '_ {
        (0..self.p).map(move |v| self.element_from_u64(v))
    }

    /// Iterate over all non-zero elements of the field.
    pub fn units(&self) -> impl Iterator<Item = FieldElement> + '_ {
        (1..self.p).map(move |v| self.element_from_u64(v))
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.p)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.p)
    }
}

/// An element of a prime field: a canonical residue in `[0, p)`.
///
/// Equality compares both value and field, so elements of different fields
/// are never equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldElement {
    value: u64,
    field: PrimeField,
}

impl FieldElement {
    /// Get the canonical residue.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.value == 1
    }

    fn with_value(&self, value: u64) -> Self {
        Self {
            value,
            field: self.field,
        }
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.field == rhs.field {
            Ok(())
        } else {
            Err(Error::field_mismatch(&self.field, &rhs.field))
        }
    }
}

impl FieldArithmetic for FieldElement {
    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn neg(&self) -> Self {
        if self.value == 0 {
            *self
        } else {
            self.with_value(self.field.p - self.value)
        }
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let sum = (u128::from(self.value) + u128::from(rhs.value)) % u128::from(self.field.p);
        Ok(self.with_value(sum as u64))
    }

    fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.add(&rhs.neg())
    }

    fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.with_value(mul_mod(self.value, rhs.value, self.field.p)))
    }

    fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        if rhs.is_zero() {
            return Err(Error::DivisionByZero {
                field: self.field.to_string(),
            });
        }
        self.mul(&rhs.inverse()?)
    }

    fn inverse(&self) -> Result<Self> {
        mod_inverse(self.value, self.field.p)
            .map(|inv| self.with_value(inv))
            .ok_or_else(|| Error::InverseNotFound {
                value: self.value.to_string(),
                modulus: self.field.p.to_string(),
            })
    }

    fn pow(&self, exp: i64) -> Result<Self> {
        let base = if exp < 0 { self.inverse()? } else { *self };
        Ok(self.with_value(mod_pow(base.value, exp.unsigned_abs(), self.field.p)))
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<FieldElement> for u64 {
    fn from(elem: FieldElement) -> Self {
        elem.value
    }
}

impl std::ops::Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldArithmetic::neg(&self)
    }
}
