// RSA Key Generation
// Derives a keypair (modulus, public and private exponents) from two primes

use std::fmt;

use log::debug;
use thiserror::Error;

use super::numtheory::{gcd_u64, is_prime, mod_inverse, random_prime, MathError};

/// Prime range for randomly generated demo keypairs. Big enough that the
/// modulus clears any single-byte plaintext, nowhere near secure.
const DEMO_PRIME_LO: u64 = 100;
const DEMO_PRIME_HI: u64 = 1000;

/// Errors that can occur while deriving a keypair.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyGenError {
    #[error("p and q must be distinct primes")]
    PrimesEqual,
    #[error("{0} is not prime")]
    NotPrime(u64),
    #[error("modulus p*q does not fit in 64 bits")]
    ModulusTooLarge,
    #[error("no public exponent exists for totient {0}")]
    NoPublicExponent(u64),
    #[error("no modular inverse of e={e} modulo totient {phi}")]
    NoPrivateExponent { e: u64, phi: u64 },
    #[error(transparent)]
    Math(#[from] MathError),
}

/// RSA Public Key
/// Shared freely with any counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: u64, // Public exponent
    pub n: u64, // Modulus
}

/// RSA Private Key
/// The exponent is not publicly readable; only the cipher path in this
/// crate touches it, so the key cannot leak through a counterpart.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub(crate) d: u64, // Private exponent
    pub n: u64,        // Modulus (same as public)
}

// Keeps d out of log output and error chains.
impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("d", &"<redacted>")
            .field("n", &self.n)
            .finish()
    }
}

/// RSA Key Pair (both public and private keys)
/// Generated together, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encrypt a plaintext integer under this key.
    pub fn encrypt(&self, m: u64) -> Result<u64, MathError> {
        super::cipher::encrypt(m, self)
    }
}

impl RsaPrivateKey {
    /// Decrypt a ciphertext integer with this key.
    pub fn decrypt(&self, c: u64) -> Result<u64, MathError> {
        super::cipher::decrypt(c, self)
    }
}

/// Find the public exponent: the smallest e in (1, phi) coprime with phi.
/// None only when phi <= 2, which no useful prime pair produces.
fn find_e(phi: u64) -> Option<u64> {
    (2..phi).find(|&e| gcd_u64(e, phi) == 1)
}

/// Generate an RSA key pair from two distinct primes
///
/// Steps: n = p*q, phi = (p-1)(q-1), e = smallest integer coprime with
/// phi, d = e^(-1) mod phi via the extended Euclidean algorithm.
///
/// Returns RsaKeyPair on success; any failure here is fatal to whoever
/// needed the keys.
pub fn generate_keypair(p: u64, q: u64) -> Result<RsaKeyPair, KeyGenError> {
    if p == q {
        return Err(KeyGenError::PrimesEqual);
    }
    // Bound the modulus before trial division; is_prime on an oversized
    // input would grind through billions of candidate divisors.
    let n = p.checked_mul(q).ok_or(KeyGenError::ModulusTooLarge)?;
    for prime in [p, q] {
        if !is_prime(prime) {
            return Err(KeyGenError::NotPrime(prime));
        }
    }
    // phi < n, so once n fits this cannot overflow
    let phi = (p - 1) * (q - 1);

    let e = find_e(phi).ok_or(KeyGenError::NoPublicExponent(phi))?;
    let d = mod_inverse(e, phi).ok_or(KeyGenError::NoPrivateExponent { e, phi })?;

    debug!("derived keypair: n={}, phi={}, e={}", n, phi, e);

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n },
        private_key: RsaPrivateKey { d, n },
    })
}

/// Generate a key pair from two random demo-range primes
/// Redraws q until it differs from p, then delegates to generate_keypair.
pub fn generate_random_keypair() -> Result<RsaKeyPair, KeyGenError> {
    let p = random_prime(DEMO_PRIME_LO, DEMO_PRIME_HI)?;
    let mut q = random_prime(DEMO_PRIME_LO, DEMO_PRIME_HI)?;
    while q == p {
        q = random_prime(DEMO_PRIME_LO, DEMO_PRIME_HI)?;
    }

    generate_keypair(p, q)
}
