// Number Theory Primitives
// gcd, primality testing and modular arithmetic over native integers

use rand::Rng;
use thiserror::Error;

/// Attempt bound for random prime selection. Primes are dense at demo
/// scale, so hitting this bound means the range itself is bad.
const RANDOM_PRIME_ATTEMPTS: u32 = 10_000;

/// Errors from the arithmetic primitives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("modulus must be non-zero")]
    ZeroModulus,
    #[error("no prime found in [{lo}, {hi})")]
    NoPrimeInRange { lo: u64, hi: u64 },
}

/// Greatest common divisor via the Euclidean algorithm.
/// Operates on absolute values; the result is always >= 0.
pub fn gcd(x: i64, y: i64) -> u64 {
    gcd_u64(x.unsigned_abs(), y.unsigned_abs())
}

pub(crate) fn gcd_u64(mut x: u64, mut y: u64) -> u64 {
    while y != 0 {
        let t = y;
        y = x % y;
        x = t;
    }
    x
}

/// Trial-division primality test
/// Divides by every integer from 2 up to sqrt(n); O(sqrt n), fine for
/// demo-sized numbers and nothing larger. Returns false for n <= 1.
pub fn is_prime(n: u64) -> bool {
    let mut i: u64 = 2;
    while (i as u128) * (i as u128) <= n as u128 {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    n > 1
}

/// Modular exponentiation: base^exponent mod modulus
/// Uses iterative square-and-multiply: square the base each round,
/// multiplying it into the accumulator whenever the low bit of the
/// exponent is set.
///
/// A modulus of 1 yields 0 (degenerate case, defined explicitly so no
/// caller divides by zero); a modulus of 0 is invalid input. Products are
/// widened to u128 so base*base cannot overflow for any u64 modulus.
pub fn mod_pow(base: u64, exponent: u64, modulus: u64) -> Result<u64, MathError> {
    if modulus == 0 {
        return Err(MathError::ZeroModulus);
    }
    if modulus == 1 {
        return Ok(0);
    }

    let m = modulus as u128;
    let mut result: u128 = 1;
    let mut base = base as u128 % m;
    let mut exponent = exponent;

    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result * base % m;
        }
        exponent >>= 1;
        base = base * base % m;
    }

    Ok(result as u64)
}

/// Extended Euclidean Algorithm
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b)
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        return (a, 1, 0);
    }

    let (g, x1, y1) = extended_gcd(b, a % b);
    (g, y1, x1 - (a / b) * y1)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if the inverse doesn't exist (gcd(a, m) != 1 or m < 2)
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m < 2 {
        return None;
    }

    let (g, x, _) = extended_gcd(a as i128, m as i128);
    if g != 1 {
        return None;
    }

    Some(x.rem_euclid(m as i128) as u64)
}

/// Draw uniform candidates in [lo, hi) until one passes the primality
/// test. Bounded attempts, so a primeless or empty range reports an error
/// instead of spinning.
pub fn random_prime(lo: u64, hi: u64) -> Result<u64, MathError> {
    if lo >= hi {
        return Err(MathError::NoPrimeInRange { lo, hi });
    }

    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_PRIME_ATTEMPTS {
        let candidate = rng.gen_range(lo..hi);
        if is_prime(candidate) {
            return Ok(candidate);
        }
    }

    Err(MathError::NoPrimeInRange { lo, hi })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
    }

    #[test]
    fn test_gcd_is_symmetric() {
        for (a, b) in [(48, 36), (0, 7), (-9, 24), (101, 13)] {
            assert_eq!(gcd(a, b), gcd(b, a));
        }
    }

    #[test]
    fn test_gcd_with_zero() {
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-7, 0), 7);
        // |i64::MIN| does not fit in i64; unsigned_abs keeps this total
        assert_eq!(gcd(i64::MIN, 0), 1u64 << 63);
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(97));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(!is_prime(91)); // 91 = 7 * 13
        assert!(!is_prime(8051)); // 8051 = 83 * 97
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(mod_pow(3, 5, 7), Ok(5));
        // 10^5 mod 8051 = 100000 mod 8051 = 3388
        assert_eq!(mod_pow(10, 5, 8051), Ok(3388));
    }

    #[test]
    fn test_mod_pow_zero_exponent() {
        assert_eq!(mod_pow(3, 0, 7), Ok(1));
        assert_eq!(mod_pow(0, 0, 7), Ok(1));
    }

    #[test]
    fn test_mod_pow_degenerate_modulus() {
        assert_eq!(mod_pow(3, 5, 1), Ok(0));
        assert_eq!(mod_pow(3, 5, 0), Err(MathError::ZeroModulus));
    }

    #[test]
    fn test_mod_pow_large_operands() {
        // base*base overflows u64 here; only the u128 widening keeps the
        // result correct. (2^32-1)^2 mod (2^63-1) computed independently.
        let base = u32::MAX as u64;
        let modulus = (1u64 << 63) - 1;
        assert_eq!(mod_pow(base, 2, modulus), Ok(18446744065119617025 % modulus));
    }

    #[test]
    fn test_extended_gcd() {
        let (g, x, y) = extended_gcd(240, 46);
        assert_eq!(g, 2);
        assert_eq!(240 * x + 46 * y, g);
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 = 1 mod 7, so inverse of 3 mod 7 is 5
        assert_eq!(mod_inverse(3, 7), Some(5));
        // 5 * 3149 = 15745 = 2 * 7872 + 1
        assert_eq!(mod_inverse(5, 7872), Some(3149));
        // 4 shares a factor with 8
        assert_eq!(mod_inverse(4, 8), None);
        assert_eq!(mod_inverse(3, 1), None);
        assert_eq!(mod_inverse(3, 0), None);
    }

    #[test]
    fn test_mod_inverse_matches_linear_scan() {
        let phi = 7872u64;
        for e in [5u64, 7, 11, 13] {
            let inv = mod_inverse(e, phi).unwrap();
            let scanned = (e + 1..=phi)
                .find(|d| (d * e) % phi == 1)
                .unwrap();
            assert_eq!(inv, scanned);
        }
    }

    #[test]
    fn test_random_prime_in_range() {
        let p = random_prime(100, 1000).unwrap();
        assert!((100..1000).contains(&p));
        assert!(is_prime(p));
    }

    #[test]
    fn test_random_prime_empty_range() {
        assert_eq!(
            random_prime(100, 100),
            Err(MathError::NoPrimeInRange { lo: 100, hi: 100 })
        );
        // 24..29 contains no prime candidates... 24,25,26,27,28
        assert_eq!(
            random_prime(24, 29),
            Err(MathError::NoPrimeInRange { lo: 24, hi: 29 })
        );
    }
}
