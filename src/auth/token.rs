// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

pub const TOKEN_BYTES: usize = 32;

/// A random, URL-safe secret handed to the browser (session cookie, draft id).
/// Only its SHA-256 digest is ever stored for sessions.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(String);

impl SecretToken {
    /// Fresh token from the OS RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut OsRng, TOKEN_BYTES)
    }

    /// Base64 URL-safe, no padding: 32 bytes -> 43 chars.
    pub fn generate_with<R: RngCore>(rng: &mut R, nbytes: usize) -> Self {
        let mut buf = vec![0u8; nbytes];
        rng.fill_bytes(&mut buf);
        Self(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf))
    }

    /// Wraps a token received from a client. Blank input is not a token.
    pub fn from_raw(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digest(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&Sha256::digest(self.0.as_bytes()));
        out
    }
}

// Keep secrets out of logs.
impl std::fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretToken(..)")
    }
}
