//! Versioned serialization of assembled processes.

use fsim_core::errors::{ConfError, ErrorInfo};
use fsim_core::SchemaVersion;
use serde::{Deserialize, Serialize};

use crate::process::Process;

/// Envelope written to disk: the schema version plus the process tree.
///
/// Readers reject dumps written under a different major version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessDump {
    /// Schema version the dump was written under.
    pub schema_version: SchemaVersion,
    /// The assembled process.
    pub process: Process,
}

impl ProcessDump {
    /// Wraps a process under the current schema version.
    pub fn new(process: Process) -> Self {
        Self {
            schema_version: SchemaVersion::CURRENT,
            process,
        }
    }

    fn check_version(self) -> Result<Process, ConfError> {
        if !SchemaVersion::CURRENT.accepts(&self.schema_version) {
            return Err(ConfError::Serde(
                ErrorInfo::new("schema-version", "incompatible dump schema version")
                    .with_context("found", self.schema_version.to_string())
                    .with_context("supported", SchemaVersion::CURRENT.to_string()),
            ));
        }
        Ok(self.process)
    }
}

/// Serializes the process to a pretty-printed JSON dump.
pub fn process_to_json(process: &Process) -> Result<String, ConfError> {
    serde_json::to_string_pretty(&ProcessDump::new(process.clone()))
        .map_err(|err| ConfError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a process from a JSON dump.
pub fn process_from_json(json: &str) -> Result<Process, ConfError> {
    let dump: ProcessDump = serde_json::from_str(json)
        .map_err(|err| ConfError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    dump.check_version()
}

/// Serializes the process to a YAML dump.
pub fn process_to_yaml(process: &Process) -> Result<String, ConfError> {
    serde_yaml::to_string(&ProcessDump::new(process.clone()))
        .map_err(|err| ConfError::Serde(ErrorInfo::new("serialize-yaml", err.to_string())))
}

/// Restores a process from a YAML dump.
pub fn process_from_yaml(yaml: &str) -> Result<Process, ConfError> {
    let dump: ProcessDump = serde_yaml::from_str(yaml)
        .map_err(|err| ConfError::Serde(ErrorInfo::new("deserialize-yaml", err.to_string())))?;
    dump.check_version()
}

/// Serializes the process to a compact binary dump using `bincode`.
pub fn process_to_bytes(process: &Process) -> Result<Vec<u8>, ConfError> {
    bincode::serialize(&ProcessDump::new(process.clone()))
        .map_err(|err| ConfError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a process from its binary dump.
pub fn process_from_bytes(bytes: &[u8]) -> Result<Process, ConfError> {
    let dump: ProcessDump = bincode::deserialize(bytes)
        .map_err(|err| ConfError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    dump.check_version()
}
