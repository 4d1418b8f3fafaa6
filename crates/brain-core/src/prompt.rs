//! Prompt fingerprinting, so logs show which prompt version is live.

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint (lowercase hex) for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    format!("{:x}", Sha256::digest(prompt.as_bytes()))
}
