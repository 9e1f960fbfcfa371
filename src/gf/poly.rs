//! Polynomial arithmetic over GF(p) and a table of irreducible polynomials.
//!
//! Polynomials are dense coefficient vectors where index `i` holds the
//! coefficient of `x^i`. Inside this module the zero polynomial is the empty
//! vector; every function returns trimmed vectors (no trailing zeros).
//!
//! These helpers back [`ExtensionElement`](super::ExtensionElement) reduction
//! and inversion. They assume `p` is prime and every coefficient is already in
//! `[0, p)`.

use std::fmt;

use crate::utils::{mod_inverse, mul_mod};

/// Irreducible polynomials for small extension fields.
///
/// Each entry is `(p, n, [c_0, ..., c_{n-1}])` describing the monic polynomial
/// `x^n + c_{n-1}*x^{n-1} + ... + c_1*x + c_0` over GF(p). The leading
/// coefficient is implicit. Primitive polynomials are used where known.
pub static IRREDUCIBLE_POLYS: &[(u64, u32, &[u64])] = &[
    // GF(2^n) - Binary extension fields
    // x^2 + x + 1
    (2, 2, &[1, 1]),
    // x^3 + x + 1
    (2, 3, &[1, 1, 0]),
    // x^4 + x + 1
    (2, 4, &[1, 1, 0, 0]),
    // x^5 + x^2 + 1
    (2, 5, &[1, 0, 1, 0, 0]),
    // x^6 + x + 1
    (2, 6, &[1, 1, 0, 0, 0, 0]),
    // x^7 + x^3 + 1
    (2, 7, &[1, 0, 0, 1, 0, 0, 0]),
    // x^8 + x^4 + x^3 + x + 1 (AES polynomial)
    (2, 8, &[1, 1, 0, 1, 1, 0, 0, 0]),
    // GF(3^n)
    // x^2 + 1
    (3, 2, &[1, 0]),
    // x^3 + 2x + 1
    (3, 3, &[1, 2, 0]),
    // x^4 + 2x^3 + 2
    (3, 4, &[2, 0, 0, 2]),
    // GF(5^n)
    // x^2 + 2
    (5, 2, &[2, 0]),
    // x^3 + 3x + 2
    (5, 3, &[2, 3, 0]),
    // GF(7^2): x^2 + 1
    (7, 2, &[1, 0]),
    // GF(11^2): x^2 + 1
    (11, 2, &[1, 0]),
    // GF(13^2): x^2 + 2
    (13, 2, &[2, 0]),
];

/// Get the monic irreducible polynomial for GF(p^n) from [`IRREDUCIBLE_POLYS`].
///
/// The returned vector has `n + 1` entries, lowest degree first, ending in
/// the leading `1`. Returns `None` if no polynomial is tabulated.
///
/// ```
/// use galoisfield::gf::get_irreducible_poly;
///
/// assert_eq!(get_irreducible_poly(2, 3), Some(vec![1, 1, 0, 1])); // x^3 + x + 1
/// assert_eq!(get_irreducible_poly(17, 5), None);
/// ```
#[must_use]
pub fn get_irreducible_poly(p: u64, n: u32) -> Option<Vec<u64>> {
    IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(poly_p, poly_n, _)| poly_p == p && poly_n == n)
        .map(|&(_, _, coeffs)| {
            let mut full = coeffs.to_vec();
            full.push(1);
            full
        })
}

/// Check if an irreducible polynomial is tabulated for GF(p^n).
#[must_use]
pub fn has_irreducible_poly(p: u64, n: u32) -> bool {
    get_irreducible_poly(p, n).is_some()
}

/// Orders p^n of all tabulated extension fields.
#[must_use]
pub fn available_field_orders() -> Vec<u64> {
    IRREDUCIBLE_POLYS
        .iter()
        .map(|&(p, n, _)| p.pow(n))
        .collect()
}

/// Strip trailing zero coefficients in place.
pub(crate) fn trim(poly: &mut Vec<u64>) {
    while poly.last() == Some(&0) {
        poly.pop();
    }
}

/// Degree of a trimmed polynomial, `None` for zero.
pub(crate) fn degree(poly: &[u64]) -> Option<usize> {
    poly.iter().rposition(|&c| c != 0)
}

pub(crate) fn add(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    let len = a.len().max(b.len());
    let mut sum: Vec<u64> = (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            ((u128::from(x) + u128::from(y)) % u128::from(p)) as u64
        })
        .collect();
    trim(&mut sum);
    sum
}

pub(crate) fn neg(a: &[u64], p: u64) -> Vec<u64> {
    a.iter().map(|&c| if c == 0 { 0 } else { p - c }).collect()
}

pub(crate) fn sub(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    add(a, &neg(b, p), p)
}

/// Schoolbook convolution, coefficients reduced mod p.
pub(crate) fn mul(a: &[u64], b: &[u64], p: u64) -> Vec<u64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut product = vec![0u64; a.len() + b.len() - 1];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        for (j, &y) in b.iter().enumerate() {
            let term = mul_mod(x, y, p);
            let sum = u128::from(product[i + j]) + u128::from(term);
            product[i + j] = (sum % u128::from(p)) as u64;
        }
    }
    trim(&mut product);
    product
}

/// Polynomial long division over GF(p).
///
/// Returns `None` if `den` is the zero polynomial.
pub(crate) fn divmod(num: &[u64], den: &[u64], p: u64) -> Option<(Vec<u64>, Vec<u64>)> {
    let den_deg = degree(den)?;
    let lead_inv = mod_inverse(den[den_deg], p)?;

    let mut rem = num.to_vec();
    trim(&mut rem);

    let mut quot = vec![0u64; rem.len().saturating_sub(den_deg)];
    while let Some(rem_deg) = degree(&rem) {
        if rem_deg < den_deg {
            break;
        }
        let shift = rem_deg - den_deg;
        let coef = mul_mod(rem[rem_deg], lead_inv, p);
        quot[shift] = coef;

        // rem -= coef * x^shift * den
        for (i, &d) in den[..=den_deg].iter().enumerate() {
            let sub = mul_mod(coef, d, p);
            let slot = &mut rem[shift + i];
            *slot = if *slot >= sub { *slot - sub } else { p - (sub - *slot) };
        }
        trim(&mut rem);
    }

    trim(&mut quot);
    Some((quot, rem))
}

/// Remainder of `num` modulo a non-zero `modulus`.
pub(crate) fn rem(num: &[u64], modulus: &[u64], p: u64) -> Vec<u64> {
    divmod(num, modulus, p).map(|(_, r)| r).unwrap_or_default()
}

/// Inverse of `a` modulo `modulus` via the extended Euclidean algorithm.
///
/// Returns `None` unless `gcd(a, modulus)` is a non-zero constant.
pub(crate) fn inverse_mod(a: &[u64], modulus: &[u64], p: u64) -> Option<Vec<u64>> {
    let (mut old_r, mut r) = (modulus.to_vec(), rem(a, modulus, p));
    let (mut old_s, mut s) = (Vec::new(), vec![1u64]);

    while degree(&r).is_some() {
        let (q, next_r) = divmod(&old_r, &r, p)?;
        let next_s = sub(&old_s, &mul(&q, &s, p), p);
        old_r = std::mem::replace(&mut r, next_r);
        old_s = std::mem::replace(&mut s, next_s);
    }

    // old_r is the gcd; it must be a non-zero constant c, then a^-1 = old_s / c
    if degree(&old_r) != Some(0) {
        return None;
    }
    let c_inv = mod_inverse(old_r[0], p)?;
    let scaled: Vec<u64> = old_s.iter().map(|&x| mul_mod(x, c_inv, p)).collect();
    Some(rem(&scaled, modulus, p))
}

/// `Display` adapter for a coefficient slice, using [`fmt_terms`].
pub(crate) struct PolyDisplay<'a, T>(pub(crate) &'a [T]);

impl<T: Copy + Into<u64>> fmt::Display for PolyDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_terms(self.0, f)
    }
}

/// Render coefficients from highest to lowest degree.
///
/// Terms are `c`, `cx`, `cx^k`; a coefficient of 1 is elided on non-constant
/// terms, zero terms are omitted, and the zero polynomial renders as `0`.
pub(crate) fn fmt_terms<T>(coeffs: &[T], f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: Copy + Into<u64>,
{
    let mut first = true;
    for (power, &coef) in coeffs.iter().enumerate().rev() {
        let coef: u64 = coef.into();
        if coef == 0 {
            continue;
        }
        if !first {
            f.write_str(" + ")?;
        }
        first = false;

        match (power, coef) {
            (0, c) => write!(f, "{c}")?,
            (1, 1) => f.write_str("x")?,
            (1, c) => write!(f, "{c}x")?,
            (k, 1) => write!(f, "x^{k}")?,
            (k, c) => write!(f, "{c}x^{k}")?,
        }
    }

    if first {
        f.write_str("0")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_irreducible_poly() {
        assert_eq!(get_irreducible_poly(2, 2), Some(vec![1, 1, 1]));
        assert_eq!(get_irreducible_poly(3, 2), Some(vec![1, 0, 1]));
        assert_eq!(get_irreducible_poly(2, 8), Some(vec![1, 1, 0, 1, 1, 0, 0, 0, 1]));
        assert!(get_irreducible_poly(17, 5).is_none());
    }

    #[test]
    fn test_has_irreducible_poly() {
        assert!(has_irreducible_poly(2, 2));
        assert!(has_irreducible_poly(5, 3));
        assert!(!has_irreducible_poly(17, 5));
    }

    #[test]
    fn test_available_orders() {
        let orders = available_field_orders();
        assert!(orders.contains(&4));
        assert!(orders.contains(&9));
        assert!(orders.contains(&125));
        assert!(orders.contains(&256));
    }

    #[test]
    fn test_tabulated_polys_have_no_roots() {
        // A reducible polynomial of degree 2 or 3 would have a linear factor
        for &(p, n, _) in IRREDUCIBLE_POLYS {
            if n > 3 {
                continue;
            }
            let poly = get_irreducible_poly(p, n).unwrap();
            for x in 0..p {
                let linear = vec![neg(&[x], p)[0], 1];
                assert!(
                    !rem(&poly, &linear, p).is_empty(),
                    "{} has root {x} mod {p}",
                    PolyDisplay(&poly)
                );
            }
        }
    }

    #[test]
    fn test_add_sub() {
        // (2x + 3) + (4x + 5) over GF(7) = 6x + 1
        assert_eq!(add(&[3, 2], &[5, 4], 7), vec![1, 6]);
        // (x + 1) - (x + 1) = 0
        assert_eq!(sub(&[1, 1], &[1, 1], 5), Vec::<u64>::new());
        assert_eq!(sub(&[0, 1], &[1], 3), vec![2, 1]);
    }

    #[test]
    fn test_mul() {
        // (x + 1)(x + 2) = x^2 + 3x + 2 over GF(5)
        assert_eq!(mul(&[1, 1], &[2, 1], 5), vec![2, 3, 1]);
        // (x + 1)^2 = x^2 + 1 over GF(2)
        assert_eq!(mul(&[1, 1], &[1, 1], 2), vec![1, 0, 1]);
        assert!(mul(&[], &[1, 1], 2).is_empty());
    }

    #[test]
    fn test_divmod() {
        // x^2 + 3x + 2 = (x + 1)(x + 2) over GF(5)
        let (q, r) = divmod(&[2, 3, 1], &[1, 1], 5).unwrap();
        assert_eq!(q, vec![2, 1]);
        assert!(r.is_empty());

        // Non-monic divisor: (x^2 + 1) / (2x) over GF(3)
        let (q, r) = divmod(&[1, 0, 1], &[0, 2], 3).unwrap();
        assert_eq!(add(&mul(&q, &[0, 2], 3), &r, 3), vec![1, 0, 1]);
        assert_eq!(r, vec![1]);

        // Numerator of smaller degree
        let (q, r) = divmod(&[1, 1], &[1, 0, 1], 3).unwrap();
        assert!(q.is_empty());
        assert_eq!(r, vec![1, 1]);

        assert!(divmod(&[1], &[], 3).is_none());
        assert!(divmod(&[1], &[0, 0], 3).is_none());
    }

    #[test]
    fn test_inverse_mod() {
        // In GF(9) = GF(3)[x]/(x^2 + 1): x * 2x = 2x^2 = -2 = 1
        let modulus = [1, 0, 1];
        assert_eq!(inverse_mod(&[0, 1], &modulus, 3), Some(vec![0, 2]));

        for a0 in 0..3 {
            for a1 in 0..3 {
                let mut a = vec![a0, a1];
                trim(&mut a);
                if a.is_empty() {
                    assert!(inverse_mod(&a, &modulus, 3).is_none());
                    continue;
                }
                let inv = inverse_mod(&a, &modulus, 3).unwrap();
                assert_eq!(rem(&mul(&a, &inv, 3), &modulus, 3), vec![1]);
            }
        }
    }

    #[test]
    fn test_inverse_mod_reducible_modulus() {
        // x^2 - 1 = (x - 1)(x + 1) over GF(5); x + 1 shares a factor
        assert!(inverse_mod(&[1, 1], &[4, 0, 1], 5).is_none());
    }

    #[test]
    fn test_fmt_terms() {
        assert_eq!(PolyDisplay::<u64>(&vec![1, 1, 0, 1]).to_string(), "x^3 + x + 1");
        assert_eq!(PolyDisplay::<u64>(&vec![2, 0, 3]).to_string(), "3x^2 + 2");
        assert_eq!(PolyDisplay::<u64>(&vec![0, 2]).to_string(), "2x");
        assert_eq!(PolyDisplay::<u64>(&vec![0, 0, 0]).to_string(), "0");
        assert_eq!(PolyDisplay::<u64>(&Vec::new()).to_string(), "0");
    }
}
