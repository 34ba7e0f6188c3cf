//! Product references of the form `label[:instance[:process]]`.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfError, ErrorInfo};

/// Reference to a data product: producer label, optional instance label,
/// optional process name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputTag {
    /// Label of the module that produced the product.
    pub label: String,
    /// Product instance label, empty for the default instance.
    #[serde(default)]
    pub instance: String,
    /// Process name, empty to accept any process.
    #[serde(default)]
    pub process: String,
}

impl InputTag {
    /// Creates a tag referring to the default product instance of `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instance: String::new(),
            process: String::new(),
        }
    }

    /// Creates a tag referring to a named product instance.
    pub fn with_instance(label: impl Into<String>, instance: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            instance: instance.into(),
            process: String::new(),
        }
    }

    /// Creates a fully qualified tag.
    pub fn full(
        label: impl Into<String>,
        instance: impl Into<String>,
        process: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            instance: instance.into(),
            process: process.into(),
        }
    }
}

impl FromStr for InputTag {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let label = parts.next().unwrap_or_default().trim();
        let instance = parts.next().unwrap_or_default().trim();
        let process = parts.next().unwrap_or_default().trim();
        if parts.next().is_some() {
            return Err(ConfError::Tag(
                ErrorInfo::new("tag-parse", "input tag has more than three fields")
                    .with_context("input", s),
            ));
        }
        if label.is_empty() {
            return Err(ConfError::Tag(
                ErrorInfo::new("tag-empty-label", "input tag requires a module label")
                    .with_context("input", s),
            ));
        }
        Ok(Self {
            label: label.to_string(),
            instance: instance.to_string(),
            process: process.to_string(),
        })
    }
}

impl Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.instance.is_empty() || !self.process.is_empty() {
            write!(f, ":{}", self.instance)?;
        }
        if !self.process.is_empty() {
            write!(f, ":{}", self.process)?;
        }
        Ok(())
    }
}
