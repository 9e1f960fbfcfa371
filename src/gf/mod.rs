//! Galois field (finite field) arithmetic.
//!
//! This module provides prime fields GF(p), extension fields GF(p^n), and the
//! polynomial ring GF(2)[x].
//!
//! ## Overview
//!
//! - [`FieldArithmetic`]: Element operations shared by every field type
//! - [`PrimeField`] / [`FieldElement`]: GF(p), canonical residues in `[0, p)`
//! - [`ExtensionField`] / [`ExtensionElement`]: GF(p^n) in polynomial basis,
//!   reduced modulo a caller-supplied polynomial
//! - [`BinaryPolynomial`]: Polynomials over GF(2) with long division
//!
//! ## Example
//!
//! ```
//! use galoisfield::gf::{ExtensionField, FieldArithmetic, PrimeField};
//!
//! // Create GF(7) - a prime field
//! let gf7 = PrimeField::new(7).unwrap();
//! let a = gf7.element(3);
//! let b = gf7.element(5);
//! assert_eq!(a.add(&b).unwrap().value(), 1); // 3 + 5 = 8 ≡ 1 (mod 7)
//! assert_eq!(b.pow(-1).unwrap().value(), 3); // 5 * 3 = 15 ≡ 1 (mod 7)
//!
//! // Create GF(2^3) with x^3 + x + 1
//! let gf8 = ExtensionField::new(2, 3, &[1, 1, 0, 1]).unwrap();
//! let x = gf8.element(0b010);
//! assert_eq!(x.pow(3).unwrap().to_string(), "x + 1"); // x^3 ≡ x + 1
//! ```

mod binary;
mod extension;
mod poly;
mod prime;

pub use binary::BinaryPolynomial;
pub use extension::{ExtensionElement, ExtensionField};
pub use poly::{
    available_field_orders, get_irreducible_poly, has_irreducible_poly, IRREDUCIBLE_POLYS,
};
pub use prime::{FieldElement, PrimeField};

use std::fmt::{Debug, Display};

use crate::error::Result;

/// Core trait for finite field element arithmetic.
///
/// Elements are immutable values; every operation returns a new element.
/// Binary operations fail with [`Error::FieldMismatch`](crate::Error::FieldMismatch)
/// when the operands belong to different fields, before any arithmetic runs.
///
/// # Field Axioms
///
/// Implementations must satisfy these axioms:
/// - **Closure**: add, mul produce field elements
/// - **Associativity**: (a + b) + c = a + (b + c), (a * b) * c = a * (b * c)
/// - **Commutativity**: a + b = b + a, a * b = b * a
/// - **Identity**: a + 0 = a, a * 1 = a
/// - **Inverse**: a + (-a) = 0, a * a^(-1) = 1 (for a ≠ 0)
/// - **Distributivity**: a * (b + c) = a * b + a * c
pub trait FieldArithmetic: Clone + PartialEq + Debug + Display + Send + Sync {
    /// The additive identity of this element's field.
    fn zero_like(&self) -> Self;

    /// The multiplicative identity of this element's field.
    fn one_like(&self) -> Self;

    /// Check if this element is zero.
    fn is_zero(&self) -> bool;

    /// Additive inverse (-a).
    fn neg(&self) -> Self;

    /// Field addition.
    ///
    /// # Errors
    ///
    /// Returns `FieldMismatch` if `rhs` belongs to another field.
    fn add(&self, rhs: &Self) -> Result<Self>;

    /// Field subtraction.
    ///
    /// # Errors
    ///
    /// Returns `FieldMismatch` if `rhs` belongs to another field.
    fn sub(&self, rhs: &Self) -> Result<Self>;

    /// Field multiplication.
    ///
    /// # Errors
    ///
    /// Returns `FieldMismatch` if `rhs` belongs to another field.
    fn mul(&self, rhs: &Self) -> Result<Self>;

    /// Field division, `self * rhs^(-1)`.
    ///
    /// # Errors
    ///
    /// Returns `FieldMismatch` if `rhs` belongs to another field and
    /// `DivisionByZero` if `rhs` is zero.
    fn div(&self, rhs: &Self) -> Result<Self>;

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// # Errors
    ///
    /// Returns `InverseNotFound` if the element is zero (or the modulus is
    /// not irreducible).
    fn inverse(&self) -> Result<Self>;

    /// Exponentiation by squaring.
    ///
    /// A negative exponent raises the inverse to `-exp`; `exp == 0` yields
    /// one, including for zero.
    ///
    /// # Errors
    ///
    /// Returns `InverseNotFound` for a negative exponent on zero.
    fn pow(&self, exp: i64) -> Result<Self> {
        let mut base = if exp < 0 {
            self.inverse()?
        } else {
            self.clone()
        };
        let mut exp = exp.unsigned_abs();
        let mut result = self.one_like();

        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul(&base)?;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_axioms<E: FieldArithmetic>(elements: &[E]) {
        for a in elements {
            let zero = a.zero_like();
            let one = a.one_like();

            // Identity
            assert_eq!(a.add(&zero).unwrap(), *a);
            assert_eq!(a.mul(&one).unwrap(), *a);

            // Additive inverse
            assert!(a.add(&a.neg()).unwrap().is_zero());

            // Multiplicative inverse (for non-zero)
            if !a.is_zero() {
                assert_eq!(a.mul(&a.inverse().unwrap()).unwrap(), one);
                assert_eq!(a.pow(-1).unwrap(), a.inverse().unwrap());
            }

            for b in elements {
                // Commutativity
                assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
                assert_eq!(a.mul(b).unwrap(), b.mul(a).unwrap());

                // Round trips
                assert_eq!(a.add(b).unwrap().sub(b).unwrap(), *a);
                if !b.is_zero() {
                    assert_eq!(a.mul(b).unwrap().div(b).unwrap(), *a);
                }

                for c in elements {
                    // Distributivity
                    let lhs = a.mul(&b.add(c).unwrap()).unwrap();
                    let rhs = a.mul(b).unwrap().add(&a.mul(c).unwrap()).unwrap();
                    assert_eq!(lhs, rhs);
                }
            }
        }
    }

    #[test]
    fn test_prime_field_axioms() {
        let gf5 = PrimeField::new(5).unwrap();
        let elements: Vec<_> = gf5.elements().collect();
        check_axioms(&elements);
    }

    #[test]
    fn test_extension_field_axioms() {
        // GF(9) = GF(3)[x] / (x^2 + 1)
        let gf9 = ExtensionField::new(3, 2, &[1, 0, 1]).unwrap();
        let elements: Vec<_> = (0..9).map(|v| gf9.element(v)).collect();
        check_axioms(&elements);

        // GF(8) = GF(2)[x] / (x^3 + x + 1)
        let gf8 = ExtensionField::new(2, 3, &[1, 1, 0, 1]).unwrap();
        let elements: Vec<_> = (0..8).map(|v| gf8.element(v)).collect();
        check_axioms(&elements);
    }

    #[test]
    fn test_pow_matches_repeated_multiplication() {
        let gf9 = ExtensionField::new(3, 2, &[1, 0, 1]).unwrap();
        let a = gf9.element(5); // 2 + x

        let mut expected = a.one_like();
        for exp in 0..20 {
            assert_eq!(a.pow(exp).unwrap(), expected, "exp={exp}");
            expected = expected.mul(&a).unwrap();
        }
    }

    #[test]
    fn test_pow_extreme_exponents() {
        let gf7 = PrimeField::new(7).unwrap();
        let a = gf7.element(3);

        // Order of the multiplicative group divides 6
        let big = a.pow(i64::MAX).unwrap();
        assert_eq!(big, a.pow(i64::MAX % 6).unwrap());
        let small = a.pow(i64::MIN).unwrap();
        assert_eq!(small.mul(&a.pow(i64::MAX).unwrap()).unwrap(), a.inverse().unwrap());
    }
}
