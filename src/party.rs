// Party - a named participant owning a keypair and a mailbox
// Delegates the arithmetic to the rsa module and logs every transfer

use std::io;

use thiserror::Error;

use crate::logging::TransferLog;
use crate::rsa::{
    generate_keypair, generate_random_keypair, KeyGenError, MathError, RsaKeyPair, RsaPublicKey,
};

/// Errors raised while transferring a message between parties.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("cipher failure: {0}")]
    Cipher(#[from] MathError),
    #[error("transfer log failure: {0}")]
    Log(#[from] io::Error),
}

/// A participant in the exchange.
///
/// The keypair is created at construction and owned exclusively; only the
/// public half ever leaves this struct. The mailbox collects decrypted
/// messages in arrival order and is never cleared.
pub struct Party {
    name: String,
    keypair: RsaKeyPair,
    mailbox: Vec<u64>,
    log: Box<dyn TransferLog>,
}

impl Party {
    /// Construct a party whose keypair is derived from the given primes.
    /// A key-generation failure is fatal to construction.
    pub fn new(
        name: impl Into<String>,
        p: u64,
        q: u64,
        log: Box<dyn TransferLog>,
    ) -> Result<Self, KeyGenError> {
        Ok(Self {
            name: name.into(),
            keypair: generate_keypair(p, q)?,
            mailbox: Vec::new(),
            log,
        })
    }

    /// Construct a party with a randomly drawn demo keypair.
    pub fn with_random_keys(
        name: impl Into<String>,
        log: Box<dyn TransferLog>,
    ) -> Result<Self, KeyGenError> {
        Ok(Self {
            name: name.into(),
            keypair: generate_random_keypair()?,
            mailbox: Vec::new(),
            log,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Copy of the public key, for counterparts to encrypt against.
    pub fn public_key(&self) -> RsaPublicKey {
        self.keypair.public_key
    }

    /// Encrypt `message` for `recipient`, log the transfer, deliver.
    ///
    /// The logged line carries the ciphertext and the recipient's public
    /// key; the plaintext and both private exponents stay out of it.
    pub fn send_to(&mut self, message: u64, recipient: &mut Party) -> Result<(), TransferError> {
        let public_key = recipient.public_key();
        let ciphertext = public_key.encrypt(message)?;

        self.log.record(&format!(
            "{} sent encrypted message {} to {}, public_key:{{e:{}, n:{}}}",
            self.name, ciphertext, recipient.name, public_key.e, public_key.n
        ))?;

        recipient.receive(ciphertext)?;
        Ok(())
    }

    /// Decrypt an incoming ciphertext and append it to the mailbox.
    fn receive(&mut self, ciphertext: u64) -> Result<(), MathError> {
        let message = self.keypair.private_key.decrypt(ciphertext)?;
        self.mailbox.push(message);
        Ok(())
    }

    /// Decrypted messages, in arrival order.
    pub fn messages(&self) -> &[u64] {
        &self.mailbox
    }
}
