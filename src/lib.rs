// RSA Exchange Library
// Arithmetic core (number theory, key generation, cipher) plus the party
// and transfer-logging glue around it

pub mod logging;
pub mod party;
pub mod rsa;

pub use party::{Party, TransferError};
pub use rsa::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
