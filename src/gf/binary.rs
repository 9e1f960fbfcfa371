//! Polynomials over GF(2).
//!
//! [`BinaryPolynomial`] is a dense vector of bits where index `i` is the
//! coefficient of `x^i`. Addition is XOR, so subtraction is the same
//! operation. Long division backs GF(2^n) element multiplication.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::poly::fmt_terms;
use crate::error::{Error, Result};

const RING: &str = "GF(2)[x]";

/// A polynomial with coefficients in GF(2).
///
/// Values are immutable; every operation returns a new polynomial. Equality
/// and hashing ignore trailing zero coefficients, so `[1, 0]` equals `[1]`.
///
/// # Example
///
/// ```
/// use galoisfield::gf::BinaryPolynomial;
///
/// let num = BinaryPolynomial::new(vec![1, 1, 0, 1]); // x^3 + x + 1
/// let den = BinaryPolynomial::new(vec![1, 0, 1, 1]); // x^3 + x^2 + 1
///
/// let (q, r) = num.divmod(&den).unwrap();
/// assert_eq!(q.to_string(), "1");
/// assert_eq!(r.to_string(), "x^2 + x");
/// assert_eq!(&(&q * &den) + &r, num);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct BinaryPolynomial {
    coefficients: Vec<u8>,
}

impl BinaryPolynomial {
    /// Create a polynomial from coefficients, lowest degree first.
    ///
    /// Each coefficient is reduced mod 2. Trailing zeros are kept until
    /// [`normalize`](Self::normalize) is called; an empty input is the zero
    /// polynomial `[0]`.
    #[must_use]
    pub fn new(coefficients: impl Into<Vec<u8>>) -> Self {
        let mut coefficients: Vec<u8> = coefficients.into();
        coefficients.iter_mut().for_each(|c| *c &= 1);
        if coefficients.is_empty() {
            coefficients.push(0);
        }
        Self { coefficients }
    }

    /// Create a polynomial from the bits of an integer; bit `i` is the
    /// coefficient of `x^i`.
    ///
    /// ```
    /// use galoisfield::gf::BinaryPolynomial;
    ///
    /// assert_eq!(BinaryPolynomial::from_bits(0b1011).to_string(), "x^3 + x + 1");
    /// ```
    #[must_use]
    pub fn from_bits(bits: u64) -> Self {
        let len = (64 - bits.leading_zeros()) as usize;
        Self::new((0..len).map(|i| ((bits >> i) & 1) as u8).collect::<Vec<_>>())
    }

    /// The zero polynomial `[0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0],
        }
    }

    /// The constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coefficients: vec![1],
        }
    }

    /// Coefficients, lowest degree first, as stored.
    #[must_use]
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|&c| c != 0)
    }

    /// Check if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.degree().is_none()
    }

    /// Coefficients without trailing zeros (empty for zero).
    fn significant(&self) -> &[u8] {
        match self.degree() {
            Some(d) => &self.coefficients[..=d],
            None => &[],
        }
    }

    /// Strip highest-degree zero coefficients.
    ///
    /// The zero polynomial collapses to `[0]`. Idempotent.
    ///
    /// ```
    /// use galoisfield::gf::BinaryPolynomial;
    ///
    /// let p = BinaryPolynomial::new(vec![1, 1, 0, 0]);
    /// assert_eq!(p.normalize().coefficients(), &[1, 1]);
    /// assert_eq!(BinaryPolynomial::new(vec![0, 0]).normalize().coefficients(), &[0]);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self::new(self.significant().to_vec())
    }

    /// Polynomial addition (coefficient-wise XOR).
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        let len = self.coefficients.len().max(rhs.coefficients.len());
        let sum: Vec<u8> = (0..len)
            .map(|i| {
                let a = self.coefficients.get(i).copied().unwrap_or(0);
                let b = rhs.coefficients.get(i).copied().unwrap_or(0);
                a ^ b
            })
            .collect();
        Self::new(sum).normalize()
    }

    /// Polynomial subtraction, identical to addition in characteristic 2.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.add(rhs)
    }

    /// Polynomial multiplication (convolution mod 2).
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let (a, b) = (self.significant(), rhs.significant());
        if a.is_empty() || b.is_empty() {
            return Self::zero();
        }

        let mut product = vec![0u8; a.len() + b.len() - 1];
        for (i, &x) in a.iter().enumerate() {
            if x == 0 {
                continue;
            }
            for (j, &y) in b.iter().enumerate() {
                product[i + j] ^= y;
            }
        }
        Self::new(product).normalize()
    }

    /// Polynomial long division over GF(2).
    ///
    /// Returns `(quotient, remainder)` with `self = quotient * den + remainder`
    /// and `deg(remainder) < deg(den)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `den` is the zero polynomial.
    pub fn divmod(&self, den: &Self) -> Result<(Self, Self)> {
        let den_deg = den.degree().ok_or_else(|| Error::DivisionByZero {
            field: RING.to_string(),
        })?;
        let den = den.significant();

        let mut rem = self.significant().to_vec();
        let mut quot = vec![0u8; rem.len().saturating_sub(den_deg)];

        while rem.len() > den_deg {
            let shift = rem.len() - 1 - den_deg;
            quot[shift] = 1;
            for (i, &d) in den.iter().enumerate() {
                rem[shift + i] ^= d;
            }
            while rem.last() == Some(&0) {
                rem.pop();
            }
        }

        Ok((Self::new(quot).normalize(), Self::new(rem).normalize()))
    }

    /// Quotient of long division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `den` is the zero polynomial.
    pub fn div(&self, den: &Self) -> Result<Self> {
        self.divmod(den).map(|(q, _)| q)
    }

    /// Remainder of long division.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `den` is the zero polynomial.
    pub fn rem(&self, den: &Self) -> Result<Self> {
        self.divmod(den).map(|(_, r)| r)
    }
}

impl Default for BinaryPolynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BinaryPolynomial {
    fn eq(&self, other: &Self) -> bool {
        self.significant() == other.significant()
    }
}

impl Eq for BinaryPolynomial {}

impl Hash for BinaryPolynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for BinaryPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_terms(&self.coefficients, f)
    }
}

impl From<Vec<u8>> for BinaryPolynomial {
    fn from(coefficients: Vec<u8>) -> Self {
        Self::new(coefficients)
    }
}

impl From<BinaryPolynomial> for Vec<u8> {
    fn from(poly: BinaryPolynomial) -> Self {
        poly.coefficients
    }
}

// Implement standard operators
impl std::ops::Add for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn add(self, rhs: Self) -> Self::Output {
        BinaryPolynomial::add(self, rhs)
    }
}

impl std::ops::Sub for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        BinaryPolynomial::sub(self, rhs)
    }
}

impl std::ops::Mul for &BinaryPolynomial {
    type Output = BinaryPolynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        BinaryPolynomial::mul(self, rhs)
    }
}
