// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod numtheory;
pub mod keygen;
pub mod cipher;

pub use numtheory::{gcd, is_prime, mod_inverse, mod_pow, random_prime, MathError};
pub use keygen::{
    generate_keypair, generate_random_keypair, KeyGenError, RsaKeyPair, RsaPrivateKey,
    RsaPublicKey,
};
pub use cipher::{decrypt, encrypt};
