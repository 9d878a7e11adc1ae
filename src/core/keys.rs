//! Account keys and message signatures.
//!
//! An account's Ed25519 keypair is derived from its passphrase: the signing
//! key seed is the SHA-256 of the passphrase. The address is the first eight
//! bytes of SHA-256(public key), read little-endian, followed by `L`.

use ed25519_consensus::{Signature, SigningKey, VerificationKey};
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{Result, ValidationError};

/// Keypair derived from a passphrase.
pub struct Account {
    signing_key: SigningKey,
}

impl Account {
    pub fn from_passphrase(passphrase: &str) -> Self {
        let seed: Zeroizing<[u8; 32]> = Zeroizing::new(Sha256::digest(passphrase.as_bytes()).into());
        Self {
            signing_key: SigningKey::from(*seed),
        }
    }

    pub fn public_key(&self) -> [u8; 32] {
        self.signing_key.verification_key().to_bytes()
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key())
    }

    pub fn address(&self) -> String {
        address(&self.public_key())
    }

    /// Sign `message` (hashed with the signed-message prefix).
    pub fn sign_message(&self, message: &str) -> String {
        let signature = self.signing_key.sign(&message_digest(message));
        hex::encode(signature.to_bytes())
    }
}

/// Address for a raw public key.
pub fn address(public_key: &[u8; 32]) -> String {
    let hash = Sha256::digest(public_key);
    let mut first = [0u8; 8];
    first.copy_from_slice(&hash[..8]);
    format!("{}L", u64::from_le_bytes(first))
}

/// SHA-256(SHA-256(prefix || message)).
pub fn message_digest(message: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::SIGNED_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.as_bytes());
    Sha256::digest(hasher.finalize()).into()
}

/// Parse a hex-encoded Ed25519 public key.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPublicKey` unless `key` is 64 hex
/// characters naming a valid curve point.
pub fn parse_public_key(key: &str) -> Result<VerificationKey> {
    let invalid = |reason: &str| ValidationError::InvalidPublicKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let bytes = hex::decode(key).map_err(|_| invalid("not hex"))?;
    let bytes: [u8; 32] = bytes
        .try_into()
        .map_err(|_| invalid("expected 32 bytes (64 hex characters)"))?;
    VerificationKey::try_from(bytes).map_err(|_| invalid("not a valid ed25519 key").into())
}

/// Check a hex signature over `message` against a hex public key.
///
/// Returns `Ok(false)` for a well-formed signature that does not match.
pub fn verify_message(public_key: &str, signature: &str, message: &str) -> Result<bool> {
    let key = parse_public_key(public_key)?;
    let bytes = hex::decode(signature)
        .map_err(|_| ValidationError::InvalidSignature("not hex".to_string()))?;
    let bytes: [u8; 64] = bytes.try_into().map_err(|_| {
        ValidationError::InvalidSignature("expected 64 bytes (128 hex characters)".to_string())
    })?;

    Ok(key
        .verify(&Signature::from(bytes), &message_digest(message))
        .is_ok())
}
