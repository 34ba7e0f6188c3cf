//! Ordered path and schedule declarations.

use serde::{Deserialize, Serialize};

/// Whether a path runs in the trigger stage or the end stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathKind {
    /// Regular path.
    Path,
    /// End path (output and harvesting modules).
    EndPath,
}

/// Ordered list of module labels executed under one path name.
///
/// Order is significant and preserved verbatim; execution itself belongs to
/// the external framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Path or end path.
    pub kind: PathKind,
    /// Module labels, in execution order.
    pub modules: Vec<String>,
}

impl PathSpec {
    /// Creates a regular path over the given module labels.
    pub fn path(modules: Vec<&str>) -> Self {
        Self {
            kind: PathKind::Path,
            modules: modules.into_iter().map(str::to_string).collect(),
        }
    }

    /// Creates an end path over the given module labels.
    pub fn end_path(modules: Vec<&str>) -> Self {
        Self {
            kind: PathKind::EndPath,
            modules: modules.into_iter().map(str::to_string).collect(),
        }
    }
}
