//! Primality testing and prime power factorization.
//!
//! Both routines use trial division: every candidate divisor up to ⌊√n⌋ is
//! tried. This is exact for the whole `u64` range.

/// Result of factoring a prime power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimePowerFactorization {
    /// The prime base.
    pub prime: u64,
    /// The exponent (power).
    pub exponent: u32,
}

impl PrimePowerFactorization {
    /// Compute the value p^k, or `None` if it overflows `u128`.
    #[must_use]
    pub fn value(&self) -> Option<u128> {
        u128::from(self.prime).checked_pow(self.exponent)
    }
}

/// Test if a number is prime by trial division up to ⌊√n⌋.
///
/// Numbers below 2 are not prime.
///
/// # Examples
///
/// ```
/// use galoisfield::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(3));
/// assert!(!is_prime(4));
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(is_prime(97));
/// assert!(!is_prime(100));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    smallest_prime_factor(n) == Some(n)
}

/// Test if a number is a prime power (p^k for some prime p and k >= 1).
///
/// # Examples
///
/// ```
/// use galoisfield::utils::is_prime_power;
///
/// assert!(is_prime_power(8));   // 2^3
/// assert!(is_prime_power(9));   // 3^2
/// assert!(!is_prime_power(6));  // 2 * 3
/// assert!(!is_prime_power(1));
/// ```
#[must_use]
pub fn is_prime_power(n: u64) -> bool {
    factor_prime_power(n).is_some()
}

/// Factor a number as a prime power if possible.
///
/// Returns `Some` if `n = p^k` for some prime p and k >= 1,
/// otherwise returns `None`.
///
/// # Examples
///
/// ```
/// use galoisfield::utils::{factor_prime_power, PrimePowerFactorization};
///
/// assert_eq!(factor_prime_power(8), Some(PrimePowerFactorization { prime: 2, exponent: 3 }));
/// assert_eq!(factor_prime_power(7), Some(PrimePowerFactorization { prime: 7, exponent: 1 }));
/// assert_eq!(factor_prime_power(6), None);
/// assert_eq!(factor_prime_power(0), None);
/// ```
#[must_use]
pub fn factor_prime_power(n: u64) -> Option<PrimePowerFactorization> {
    let prime = smallest_prime_factor(n)?;

    let mut rest = n;
    let mut exponent = 0;
    while rest % prime == 0 {
        rest /= prime;
        exponent += 1;
    }

    (rest == 1).then_some(PrimePowerFactorization { prime, exponent })
}

/// Get the smallest prime factor of n.
///
/// Returns `None` if n < 2.
#[must_use]
pub fn smallest_prime_factor(n: u64) -> Option<u64> {
    if n < 2 {
        return None;
    }
    if n % 2 == 0 {
        return Some(2);
    }

    // `i <= n / i` is ⌊√n⌋ without floating point or overflow
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return Some(i);
        }
        i += 2;
    }

    Some(n)
}
