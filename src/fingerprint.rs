use sha2::{Digest, Sha256};

use crate::error::CompilerError;
use crate::intent::IntentConfiguration;

/// Hex SHA-256 over the canonical JSON of a language's configurations.
/// Identical inputs always give identical fingerprints.
pub fn fingerprint(configurations: &[IntentConfiguration]) -> Result<String, CompilerError> {
    let data = serde_json::to_vec(configurations)?;
    Ok(compute_hash(&data))
}

pub fn compute_hash(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
