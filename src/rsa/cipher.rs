// RSA Encryption and Decryption
// Both operations are thin wrappers over modular exponentiation

use super::keygen::{RsaPrivateKey, RsaPublicKey};
use super::numtheory::{mod_pow, MathError};

/// Encrypt a plaintext integer with a public key: c = m^e mod n
///
/// The caller keeps m in [0, n); a larger m silently wraps modulo n and
/// will not round-trip. Known limitation of the scheme, not enforced here.
pub fn encrypt(m: u64, public_key: &RsaPublicKey) -> Result<u64, MathError> {
    mod_pow(m, public_key.e, public_key.n)
}

/// Decrypt a ciphertext integer with the matching private key: m = c^d mod n
///
/// For any m in [0, n) and any valid keypair,
/// decrypt(encrypt(m, public), private) == m.
pub fn decrypt(c: u64, private_key: &RsaPrivateKey) -> Result<u64, MathError> {
    mod_pow(c, private_key.d, private_key.n)
}
