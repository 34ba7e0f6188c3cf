//! Canonical hashing of configuration payloads.

use fsim_core::errors::{ConfError, ErrorInfo};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::process::Process;

/// Serializes the payload to canonical JSON: object keys sorted, no
/// insignificant whitespace. Round-tripping through `serde_json::Value`
/// normalizes key order, since its map is ordered by key.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, ConfError> {
    let normalized = serde_json::to_value(value)
        .map_err(|err| ConfError::Serde(ErrorInfo::new("canonical-json", err.to_string())))?;
    serde_json::to_vec(&normalized)
        .map_err(|err| ConfError::Serde(ErrorInfo::new("canonical-json", err.to_string())))
}

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, ConfError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

/// Canonical hash of an assembled process. Equal processes hash equal
/// regardless of how their trees were built up.
pub fn process_hash(process: &Process) -> Result<String, ConfError> {
    stable_hash_string(process)
}
