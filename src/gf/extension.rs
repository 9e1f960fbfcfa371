//! Extension fields GF(p^n) in polynomial basis.
//!
//! An element is a polynomial of degree < n over GF(p), stored as exactly `n`
//! coefficients (index = power of x). Products are reduced modulo the field's
//! reduction polynomial, which the caller supplies and which must be
//! irreducible for the result to be a field. Irreducibility is not checked;
//! a reducible modulus shows up as [`Error::InverseNotFound`] for the zero
//! divisors it creates.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::poly::{self, PolyDisplay};
use super::{BinaryPolynomial, FieldArithmetic, PrimeField};
use crate::error::{Error, Result};
use crate::utils::{factor_prime_power, mod_inverse, mul_mod, reduce_signed};

/// The extension field GF(p^n) = GF(p)[x] / (m(x)).
///
/// The descriptor is reference-counted internally, so cloning is cheap and
/// all elements share one read-only copy of the reduction polynomial.
///
/// # Example
///
/// ```
/// use galoisfield::gf::{ExtensionField, FieldArithmetic};
///
/// // GF(9) with x^2 + 1
/// let gf9 = ExtensionField::new(3, 2, &[1, 0, 1]).unwrap();
/// assert_eq!(gf9.order(), Some(9));
///
/// let x = gf9.element(3); // 3 = 0 + 1*3  ->  x
/// assert_eq!(x.mul(&x).unwrap().to_string(), "2"); // x^2 = -1
///
/// // Degree of the reduction polynomial must match n
/// assert!(ExtensionField::new(3, 3, &[1, 0, 1]).is_err());
/// ```
#[derive(Clone)]
pub struct ExtensionField {
    inner: Arc<ExtensionInner>,
}

#[derive(PartialEq, Eq, Hash)]
struct ExtensionInner {
    base: PrimeField,
    degree: u32,
    /// Monic, `degree + 1` coefficients.
    modulus: Vec<u64>,
    /// Same modulus as a GF(2) polynomial when p = 2.
    binary_modulus: Option<BinaryPolynomial>,
}

impl ExtensionField {
    /// Create GF(p^n) with the given reduction polynomial.
    ///
    /// `reduction_polynomial` lists coefficients lowest degree first. They
    /// are reduced mod p, trailing zeros are ignored, and a non-monic
    /// polynomial is scaled by the inverse of its leading coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if `p` is not prime, `n < 1`, or the
    /// polynomial does not have degree exactly `n`.
    pub fn new(p: u64, n: u32, reduction_polynomial: &[i64]) -> Result<Self> {
        let base = PrimeField::new(p)?;
        if n < 1 {
            return Err(Error::invalid_field(format!(
                "extension degree must be at least 1, got {n}"
            )));
        }

        let mut modulus: Vec<u64> = reduction_polynomial
            .iter()
            .map(|&c| reduce_signed(c, p))
            .collect();
        poly::trim(&mut modulus);

        let deg = poly::degree(&modulus);
        if deg != Some(n as usize) {
            return Err(Error::invalid_field(format!(
                "reduction polynomial {} has degree {}, expected {n}",
                PolyDisplay(&modulus),
                deg.map_or_else(|| "-inf".to_string(), |d| d.to_string()),
            )));
        }

        let lead = modulus[n as usize];
        if lead != 1 {
            let lead_inv = mod_inverse(lead, p).ok_or_else(|| {
                Error::invalid_field(format!(
                    "leading coefficient {lead} is not invertible mod {p}"
                ))
            })?;
            modulus.iter_mut().for_each(|c| *c = mul_mod(*c, lead_inv, p));
        }

        Ok(Self::from_monic(base, n, modulus))
    }

    /// The degree-1 extension GF(p)[x] / (x), equivalent to GF(p).
    #[must_use]
    pub fn from_prime(base: PrimeField) -> Self {
        Self::from_monic(base, 1, vec![0, 1])
    }

    /// Create GF(p^n) using the tabulated irreducible polynomial.
    ///
    /// `n = 1` gives [`from_prime`](Self::from_prime).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if `p` is not prime, `n < 1`, or no
    /// polynomial is tabulated in [`IRREDUCIBLE_POLYS`](super::IRREDUCIBLE_POLYS).
    ///
    /// ```
    /// use galoisfield::gf::ExtensionField;
    ///
    /// let gf256 = ExtensionField::standard(2, 8).unwrap();
    /// assert_eq!(gf256.order(), Some(256));
    /// assert!(ExtensionField::standard(17, 5).is_err());
    /// ```
    pub fn standard(p: u64, n: u32) -> Result<Self> {
        let base = PrimeField::new(p)?;
        match n {
            0 => Err(Error::invalid_field("extension degree must be at least 1, got 0")),
            1 => Ok(Self::from_prime(base)),
            _ => {
                let modulus = poly::get_irreducible_poly(p, n).ok_or_else(|| {
                    Error::invalid_field(format!(
                        "no tabulated irreducible polynomial for GF({p}^{n})"
                    ))
                })?;
                Ok(Self::from_monic(base, n, modulus))
            }
        }
    }

    /// Create the field of order `q = p^n` using the tabulated polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidField`] if `q` is not a prime power or no
    /// polynomial is tabulated for it.
    ///
    /// ```
    /// use galoisfield::gf::ExtensionField;
    ///
    /// let gf9 = ExtensionField::from_order(9).unwrap();
    /// assert_eq!((gf9.characteristic(), gf9.degree()), (3, 2));
    /// assert!(ExtensionField::from_order(6).is_err());
    /// ```
    pub fn from_order(q: u64) -> Result<Self> {
        let factorization = factor_prime_power(q)
            .ok_or_else(|| Error::invalid_field(format!("{q} is not a prime power")))?;
        Self::standard(factorization.prime, factorization.exponent)
    }

    fn from_monic(base: PrimeField, degree: u32, modulus: Vec<u64>) -> Self {
        let binary_modulus = (base.p() == 2).then(|| {
            BinaryPolynomial::new(modulus.iter().map(|&c| c as u8).collect::<Vec<_>>())
        });
        trace!(
            p = base.p(),
            n = degree,
            modulus = %PolyDisplay(&modulus),
            "extension field constructed"
        );
        Self {
            inner: Arc::new(ExtensionInner {
                base,
                degree,
                modulus,
                binary_modulus,
            }),
        }
    }

    /// The field characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.inner.base.p()
    }

    /// The extension degree n.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.inner.degree
    }

    /// The field order p^n, or `None` if it does not fit in a `u128`.
    #[must_use]
    pub fn order(&self) -> Option<u128> {
        u128::from(self.characteristic()).checked_pow(self.inner.degree)
    }

    /// The prime subfield GF(p).
    #[must_use]
    pub fn base_field(&self) -> PrimeField {
        self.inner.base
    }

    /// The monic reduction polynomial, lowest degree first (`n + 1` entries).
    #[must_use]
    pub fn reduction_polynomial(&self) -> &[u64] {
        &self.inner.modulus
    }

    /// Create an element from an integer.
    ///
    /// The base-p digits of `|value|` become the coefficients, least
    /// significant digit first; digits beyond the n-th are dropped. A negative
    /// value gives the additive inverse of the element built from `|value|`.
    ///
    /// ```
    /// use galoisfield::gf::ExtensionField;
    ///
    /// let gf8 = ExtensionField::new(2, 3, &[1, 1, 0, 1]).unwrap();
    /// assert_eq!(gf8.element(0b110).coefficients(), &[0, 1, 1]);
    /// assert_eq!(gf8.element(0b110).to_string(), "x^2 + x");
    /// ```
    #[must_use]
    pub fn element(&self, value: i64) -> ExtensionElement {
        let p = self.characteristic();
        let mut rest = value.unsigned_abs();
        let coeffs = (0..self.inner.degree)
            .map(|_| {
                let digit = rest % p;
                rest /= p;
                digit
            })
            .collect();

        let elem = self.wrap(coeffs);
        if value < 0 {
            elem.neg()
        } else {
            elem
        }
    }

    /// Create an element from polynomial coefficients, lowest degree first.
    ///
    /// Coefficients are reduced mod p with floor modulo, and a polynomial of
    /// degree ≥ n is reduced modulo the reduction polynomial.
    ///
    /// ```
    /// use galoisfield::gf::ExtensionField;
    ///
    /// let gf8 = ExtensionField::new(2, 3, &[1, 1, 0, 1]).unwrap();
    /// // x^3 ≡ x + 1
    /// assert_eq!(gf8.element_from_coefficients(&[0, 0, 0, 1]).coefficients(), &[1, 1, 0]);
    /// ```
    #[must_use]
    pub fn element_from_coefficients(&self, coefficients: &[i64]) -> ExtensionElement {
        let p = self.characteristic();
        let mut coeffs: Vec<u64> = coefficients.iter().map(|&c| reduce_signed(c, p)).collect();
        poly::trim(&mut coeffs);
        self.wrap(self.reduce(&coeffs))
    }

    /// Get the zero element (additive identity).
    #[must_use]
    pub fn zero(&self) -> ExtensionElement {
        self.wrap(Vec::new())
    }

    /// Get the one element (multiplicative identity).
    #[must_use]
    pub fn one(&self) -> ExtensionElement {
        self.wrap(vec![1])
    }

    /// Wrap a reduced polynomial, zero-padding to exactly n coefficients.
    fn wrap(&self, mut coeffs: Vec<u64>) -> ExtensionElement {
        coeffs.resize(self.inner.degree as usize, 0);
        ExtensionElement {
            coeffs,
            field: self.clone(),
        }
    }

    /// Reduce a trimmed polynomial modulo the reduction polynomial.
    fn reduce(&self, coeffs: &[u64]) -> Vec<u64> {
        poly::rem(coeffs, &self.inner.modulus, self.characteristic())
    }
}

impl PartialEq for ExtensionField {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl Eq for ExtensionField {}

impl std::hash::Hash for ExtensionField {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl fmt::Debug for ExtensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mod ({})", self, PolyDisplay(&self.inner.modulus))
    }
}

impl fmt::Display for ExtensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}^{})", self.characteristic(), self.degree())
    }
}

/// An element of an extension field: a polynomial of degree < n over GF(p).
///
/// Equality compares coefficients and field; elements of different fields
/// are never equal.
#[derive(Clone)]
pub struct ExtensionElement {
    coeffs: Vec<u64>,
    field: ExtensionField,
}

impl ExtensionElement {
    /// The `n` coefficients, lowest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Get the field this element belongs to.
    #[must_use]
    pub fn field(&self) -> &ExtensionField {
        &self.field
    }

    /// Integer encoding Σ cᵢ·pⁱ, the inverse of [`ExtensionField::element`]
    /// for non-negative inputs. `None` if it overflows a `u128`.
    #[must_use]
    pub fn value(&self) -> Option<u128> {
        let p = u128::from(self.field.characteristic());
        self.coeffs.iter().rev().try_fold(0u128, |acc, &c| {
            acc.checked_mul(p)?.checked_add(u128::from(c))
        })
    }

    /// Check if this element is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coeffs.first() == Some(&1) && self.coeffs[1..].iter().all(|&c| c == 0)
    }

    fn trimmed(&self) -> Vec<u64> {
        let mut coeffs = self.coeffs.clone();
        poly::trim(&mut coeffs);
        coeffs
    }

    fn check_field(&self, rhs: &Self) -> Result<()> {
        if self.field == rhs.field {
            Ok(())
        } else {
            Err(Error::field_mismatch(&self.field, &rhs.field))
        }
    }

    fn zip_with(&self, rhs: &Self, op: impl Fn(u64, u64) -> u64) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .zip(&rhs.coeffs)
            .map(|(&a, &b)| op(a, b))
            .collect();
        Self {
            coeffs,
            field: self.field.clone(),
        }
    }

    fn mul_binary(&self, rhs: &Self, modulus: &BinaryPolynomial) -> Result<Vec<u64>> {
        let to_bits = |coeffs: &[u64]| {
            BinaryPolynomial::new(coeffs.iter().map(|&c| c as u8).collect::<Vec<_>>())
        };
        let product = to_bits(&self.coeffs).mul(&to_bits(&rhs.coeffs));
        let (_, remainder) = product.divmod(modulus)?;
        Ok(remainder
            .normalize()
            .coefficients()
            .iter()
            .map(|&c| u64::from(c))
            .collect())
    }
}

impl FieldArithmetic for ExtensionElement {
    fn zero_like(&self) -> Self {
        self.field.zero()
    }

    fn one_like(&self) -> Self {
        self.field.one()
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    fn neg(&self) -> Self {
        let p = self.field.characteristic();
        Self {
            coeffs: poly::neg(&self.coeffs, p),
            field: self.field.clone(),
        }
    }

    fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let p = u128::from(self.field.characteristic());
        Ok(self.zip_with(rhs, |a, b| ((u128::from(a) + u128::from(b)) % p) as u64))
    }

    fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        self.add(&rhs.neg())
    }

    fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        let inner = &self.field.inner;

        let coeffs = match &inner.binary_modulus {
            Some(modulus) => self.mul_binary(rhs, modulus)?,
            None => {
                let p = inner.base.p();
                let product = poly::mul(&self.trimmed(), &rhs.trimmed(), p);
                self.field.reduce(&product)
            }
        };

        Ok(self.field.wrap(coeffs))
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
        let inner = &self.field.inner;
        poly::inverse_mod(&self.trimmed(), &inner.modulus, inner.base.p())
            .map(|inv| self.field.wrap(inv))
            .ok_or_else(|| Error::InverseNotFound {
                value: self.to_string(),
                modulus: PolyDisplay(&inner.modulus).to_string(),
            })
    }
}

impl PartialEq for ExtensionElement {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs == other.coeffs && self.field == other.field
    }
}

impl Eq for ExtensionElement {}

impl std::hash::Hash for ExtensionElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.coeffs.hash(state);
        self.field.hash(state);
    }
}

impl fmt::Debug for ExtensionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self)
    }
}

impl fmt::Display for ExtensionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        poly::fmt_terms(&self.coeffs, f)
    }
}

impl std::ops::Neg for ExtensionElement {
    type Output = Self;

    fn neg(self) -> Self::Output {
        FieldArithmetic::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf8() -> ExtensionField {
        ExtensionField::new(2, 3, &[1, 1, 0, 1]).unwrap()
    }

    fn gf9() -> ExtensionField {
        ExtensionField::new(3, 2, &[1, 0, 1]).unwrap()
    }

    #[test]
    fn test_gf9_creation() {
        let gf9 = gf9();
        assert_eq!(gf9.characteristic(), 3);
        assert_eq!(gf9.degree(), 2);
        assert_eq!(gf9.order(), Some(9));
        assert_eq!(gf9.reduction_polynomial(), &[1, 0, 1]);
        assert_eq!(gf9.base_field(), PrimeField::new(3).unwrap());
    }

    #[test]
    fn test_invalid_parameters() {
        let cases: [(u64, u32, &[i64]); 5] = [
            (4, 2, &[1, 1, 1]),   // 4 is not prime
            (3, 0, &[1]),         // n < 1
            (3, 2, &[1, 1]),      // degree 1 != 2
            (3, 2, &[1, 0, 3]),   // leading coefficient vanishes mod 3
            (2, 3, &[]),          // zero polynomial
        ];
        for (p, n, poly) in cases {
            let err = ExtensionField::new(p, n, poly).unwrap_err();
            assert!(matches!(err, Error::InvalidField { .. }), "p={p}, n={n}, poly={poly:?}");
        }
    }

    #[test]
    fn test_non_monic_modulus_is_normalized() {
        // 2x^2 + 2 = 2(x^2 + 1) over GF(3)
        let field = ExtensionField::new(3, 2, &[2, 0, 2]).unwrap();
        assert_eq!(field.reduction_polynomial(), &[1, 0, 1]);
        assert_eq!(field, gf9());

        // Negative coefficients use floor modulo: -2x^2 - 2 over GF(3)
        let field = ExtensionField::new(3, 2, &[-2, 0, -2]).unwrap();
        assert_eq!(field, gf9());
    }

    #[test]
    fn test_trailing_zeros_in_modulus_are_ignored() {
        let field = ExtensionField::new(2, 3, &[1, 1, 0, 1, 0, 0]).unwrap();
        assert_eq!(field, gf8());
    }

    #[test]
    fn test_element_from_integer() {
        let gf9 = gf9();
        assert_eq!(gf9.element(0).coefficients(), &[0, 0]);
        assert_eq!(gf9.element(5).coefficients(), &[2, 1]); // 5 = 2 + 1*3
        assert_eq!(gf9.element(9).coefficients(), &[0, 0]); // truncated to n digits
        assert_eq!(gf9.element(5).value(), Some(5));

        // Negative values give the additive inverse
        let minus = gf9.element(-5);
        assert_eq!(minus.coefficients(), &[1, 2]);
        assert!(minus.add(&gf9.element(5)).unwrap().is_zero());

        let gf8 = gf8();
        assert_eq!(gf8.element(0b101).coefficients(), &[1, 0, 1]);
        assert_eq!(gf8.element(0b1101).coefficients(), &[1, 0, 1]);
    }

    #[test]
    fn test_element_from_coefficients() {
        let gf9 = gf9();
        // x^2 ≡ -1 ≡ 2
        assert_eq!(gf9.element_from_coefficients(&[0, 0, 1]).coefficients(), &[2, 0]);
        assert_eq!(gf9.element_from_coefficients(&[-1, 4]).coefficients(), &[2, 1]);
        assert_eq!(gf9.element_from_coefficients(&[]).coefficients(), &[0, 0]);
        assert_eq!(gf9.element_from_coefficients(&[1]), gf9.one());
    }

    #[test]
    fn test_add_sub() {
        let gf9 = gf9();
        let a = gf9.element(5); // x + 2
        let b = gf9.element(7); // 2x + 1

        assert!(a.add(&b).unwrap().is_zero()); // 3x + 3 = 0
        assert_eq!(a.sub(&b).unwrap().coefficients(), &[1, 2]); // -x + 1

        let gf8 = gf8();
        let c = gf8.element(0b011);
        let d = gf8.element(0b101);
        assert_eq!(c.add(&d).unwrap(), gf8.element(0b110)); // XOR
        assert_eq!(c.sub(&d).unwrap(), c.add(&d).unwrap());
    }

    #[test]
    fn test_gf8_multiplication() {
        let gf8 = gf8();
        let x = gf8.element(0b010);

        // x^3 ≡ x + 1
        assert_eq!(x.pow(3).unwrap(), gf8.element(0b011));
        // (x^2 + 1) * x = x^3 + x ≡ 1
        let a = gf8.element(0b101);
        assert_eq!(a.mul(&x).unwrap(), gf8.one());
        // (x^2 + 1)(x^2 + x) = x^4 + x^3 + x^2 + x ≡ x + 1
        assert_eq!(a.mul(&gf8.element(0b110)).unwrap(), gf8.element(0b011));
        // x generates the multiplicative group of order 7
        assert!(x.pow(7).unwrap().is_one());
    }

    #[test]
    fn test_gf256_aes() {
        let gf256 = ExtensionField::standard(2, 8).unwrap();
        let a = gf256.element(0x53);
        let b = gf256.element(0xCA);

        assert!(a.mul(&b).unwrap().is_one());
        assert_eq!(a.inverse().unwrap(), b);
        // {57} * {83} = {c1} (FIPS-197 example)
        let product = gf256.element(0x57).mul(&gf256.element(0x83)).unwrap();
        assert_eq!(product.value(), Some(0xC1));
    }

    #[test]
    fn test_gf9_multiplication() {
        let gf9 = gf9();
        let x = gf9.element(3);

        assert_eq!(x.mul(&x).unwrap(), gf9.element(2)); // x^2 = -1 = 2
        assert!(x.pow(4).unwrap().is_one());
        // (x + 1)^2 = x^2 + 2x + 1 = 2x
        let y = gf9.element(4);
        assert_eq!(y.mul(&y).unwrap(), gf9.element(6));
    }

    #[test]
    fn test_inverse_all() {
        for field in [gf8(), gf9(), ExtensionField::standard(5, 3).unwrap()] {
            let order = field.order().unwrap() as i64;
            for v in 1..order {
                let a = field.element(v);
                let inv = a.inverse().unwrap();
                assert!(a.mul(&inv).unwrap().is_one(), "{a:?} * {inv:?} != 1");
            }
        }
    }

    #[test]
    fn test_inverse_of_zero() {
        let err = gf9().zero().inverse().unwrap_err();
        assert!(matches!(err, Error::InverseNotFound { .. }));
    }

    #[test]
    fn test_reducible_modulus_has_zero_divisors() {
        // x^2 - 1 = (x - 1)(x + 1) over GF(5) is not irreducible
        let ring = ExtensionField::new(5, 2, &[4, 0, 1]).unwrap();
        let a = ring.element_from_coefficients(&[1, 1]);
        assert!(matches!(a.inverse().unwrap_err(), Error::InverseNotFound { .. }));
        assert!(matches!(
            ring.one().div(&a).unwrap_err(),
            Error::InverseNotFound { .. }
        ));
    }

    #[test]
    fn test_division() {
        let gf9 = gf9();
        let a = gf9.element(5);
        let b = gf9.element(7);

        let q = a.div(&b).unwrap();
        assert_eq!(q.mul(&b).unwrap(), a);
        assert!(matches!(
            a.div(&gf9.zero()).unwrap_err(),
            Error::DivisionByZero { .. }
        ));
    }

    #[test]
    fn test_negative_power() {
        let gf8 = gf8();
        let a = gf8.element(0b110);
        assert_eq!(a.pow(-1).unwrap(), a.inverse().unwrap());
        assert_eq!(a.pow(-3).unwrap(), a.pow(3).unwrap().inverse().unwrap());
    }

    #[test]
    fn test_degree_one_matches_prime_field() {
        let gf7 = PrimeField::new(7).unwrap();
        let ext = ExtensionField::from_prime(gf7);
        assert_eq!(ext.order(), Some(7));

        for a in 0..7 {
            for b in 1..7 {
                let expected = gf7.element(a).div(&gf7.element(b)).unwrap().value();
                let actual = ext.element(a).div(&ext.element(b)).unwrap();
                assert_eq!(actual.value(), Some(u128::from(expected)));
            }
        }

        // Any degree-1 modulus works for n = 1
        let shifted = ExtensionField::new(7, 1, &[3, 1]).unwrap();
        assert_eq!(shifted.element(3).mul(&shifted.element(5)).unwrap().value(), Some(1));
    }

    #[test]
    fn test_field_mismatch() {
        let a = gf9().element(1);
        let b = ExtensionField::new(3, 2, &[2, 2, 1]).unwrap().element(1);

        assert!(matches!(a.add(&b).unwrap_err(), Error::FieldMismatch { .. }));
        assert!(matches!(a.mul(&b).unwrap_err(), Error::FieldMismatch { .. }));
        assert!(matches!(a.div(&b).unwrap_err(), Error::FieldMismatch { .. }));
        assert_ne!(a, b);

        // Separately constructed but identical fields are compatible
        let c = gf9().element(1);
        assert_eq!(a, c);
        assert!(a.add(&c).is_ok());
    }

    #[test]
    fn test_standard_and_from_order() {
        assert_eq!(ExtensionField::from_order(8).unwrap(), gf8());
        assert_eq!(ExtensionField::from_order(7).unwrap().degree(), 1);
        assert!(ExtensionField::from_order(12).is_err());
        assert!(ExtensionField::standard(2, 0).is_err());
        assert!(ExtensionField::standard(4, 2).is_err());
    }

    #[test]
    fn test_order_overflow() {
        let big = ExtensionField::standard(13, 2).unwrap();
        assert_eq!(big.order(), Some(169));

        // 1_000_003^7 exceeds u128
        let huge = ExtensionField::new(1_000_003, 7, &[1; 8]).unwrap();
        assert_eq!(huge.order(), None);
        assert_eq!(huge.one().value(), Some(1));
    }

    #[test]
    fn test_display() {
        let gf8 = gf8();
        assert_eq!(gf8.to_string(), "GF(2^3)");
        assert_eq!(format!("{gf8:?}"), "GF(2^3) mod (x^3 + x + 1)");
        assert_eq!(gf8.element(0b111).to_string(), "x^2 + x + 1");
        assert_eq!(gf8.zero().to_string(), "0");
        assert_eq!(gf9().element(8).to_string(), "2x + 2");
        assert_eq!(format!("{:?}", gf9().element(3)), "GF(3^2)[x]");
    }
}
