//! Number-theoretic helpers: primality, modular exponentiation, and the
//! extended Euclidean algorithm.

mod primality;

pub use primality::{
    factor_prime_power, is_prime, is_prime_power, smallest_prime_factor, PrimePowerFactorization,
};

/// Compute `base^exp mod modulus` using binary exponentiation.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use galoisfield::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 1024 mod 1000
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 243 mod 7
/// ```
#[must_use]
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    let mut base = base % modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, modulus);
        }
        exp >>= 1;
        base = mul_mod(base, base, modulus);
    }

    result
}

/// Multiply two residues modulo `modulus` without overflow.
#[must_use]
pub(crate) fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(modulus)) as u64
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `g = gcd(a, b)` and `a*x + b*y = g`.
///
/// # Examples
///
/// ```
/// use galoisfield::utils::extended_gcd;
///
/// let (g, x, y) = extended_gcd(5, 7);
/// assert_eq!(g, 1);
/// assert_eq!(5 * x + 7 * y, 1);
/// ```
#[must_use]
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (1i128, 0i128);
    let (mut old_y, mut y) = (0i128, 1i128);

    while r != 0 {
        let q = old_r.div_euclid(r);
        (old_r, r) = (r, old_r - q * r);
        (old_x, x) = (x, old_x - q * x);
        (old_y, y) = (y, old_y - q * y);
    }

    (old_r, old_x, old_y)
}

/// Multiplicative inverse of `a` modulo `modulus`.
///
/// Returns `None` when `gcd(a, modulus) != 1`.
///
/// # Examples
///
/// ```
/// use galoisfield::utils::mod_inverse;
///
/// assert_eq!(mod_inverse(5, 7), Some(3));
/// assert_eq!(mod_inverse(0, 7), None);
/// ```
#[must_use]
pub fn mod_inverse(a: u64, modulus: u64) -> Option<u64> {
    let (g, x, _) = extended_gcd(i128::from(a), i128::from(modulus));
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(i128::from(modulus)) as u64)
}

/// Reduce a signed integer to its canonical residue in `[0, modulus)`.
#[must_use]
pub(crate) fn reduce_signed(value: i64, modulus: u64) -> u64 {
    i128::from(value).rem_euclid(i128::from(modulus)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow() {
        assert_eq!(mod_pow(2, 10, 1000), 24);
        assert_eq!(mod_pow(2, 0, 7), 1);
        assert_eq!(mod_pow(0, 5, 7), 0);
        assert_eq!(mod_pow(3, 4, 5), 1);
        assert_eq!(mod_pow(7, 3, 11), 2);
        assert_eq!(mod_pow(5, 3, 1), 0);
    }

    #[test]
    fn test_mod_pow_large_modulus() {
        // Fermat: a^(p-1) = 1 mod p
        let p = 18_446_744_073_709_551_557; // largest prime below 2^64
        assert_eq!(mod_pow(123_456_789, p - 1, p), 1);
    }

    #[test]
    fn test_extended_gcd() {
        for (a, b) in [(240, 46), (5, 7), (0, 9), (9, 0), (17, 17)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g, "a={a}, b={b}");
        }
        assert_eq!(extended_gcd(240, 46).0, 2);
        assert_eq!(extended_gcd(0, 9).0, 9);
    }

    #[test]
    fn test_mod_inverse() {
        for a in 1..7u64 {
            let inv = mod_inverse(a, 7).unwrap();
            assert_eq!(a * inv % 7, 1, "a={a}, inv={inv}");
        }
        assert_eq!(mod_inverse(0, 7), None);
        assert_eq!(mod_inverse(4, 8), None);
    }

    #[test]
    fn test_reduce_signed() {
        assert_eq!(reduce_signed(8, 7), 1);
        assert_eq!(reduce_signed(-1, 7), 6);
        assert_eq!(reduce_signed(-14, 7), 0);
        assert_eq!(reduce_signed(i64::MIN, 2), 0);
    }
}
