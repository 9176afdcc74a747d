//! Type identifiers — short SHA-256 fingerprints of representative words
//!
//! The identifier is the first 12 lowercase hex digits (48 bits) of
//! SHA-256 over the word's UTF-8 bytes. It is a namespace key for
//! deduplicating product types, not an authenticator: collisions among
//! N words occur with probability about N²/2^49.

use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Length of a type identifier in hex characters
pub const TYPE_ID_LEN: usize = 12;

/// Derive the type identifier for a representative word
///
/// # Errors
/// Returns `InvalidInput` if the word is empty or whitespace-only.
pub fn generate_id(word: &str) -> Result<String> {
    if word.trim().is_empty() {
        return Err(Error::InvalidInput(
            "representative word is empty".to_string(),
        ));
    }

    let mut hasher = Sha256::new();
    hasher.update(word.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let id = digest[..TYPE_ID_LEN].to_string();

    tracing::debug!(word, type_id = %id, "generated type id");
    Ok(id)
}
