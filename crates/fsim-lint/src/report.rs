//! Check outcomes and the aggregated report.

use serde::{Deserialize, Serialize};

/// Outcome of one consistency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintCheck {
    /// Stable check name.
    pub name: String,
    /// Whether the check passed.
    pub ok: bool,
    /// Human-readable finding, also carrying advisory notes for passing
    /// checks.
    pub detail: String,
}

impl LintCheck {
    /// Creates a passing check.
    pub fn pass(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            ok: true,
            detail: detail.into(),
        }
    }

    /// Creates a failing check.
    pub fn fail(name: &str, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            ok: false,
            detail: detail.into(),
        }
    }
}

/// Full report over one process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// `ok` when every check passed, `needs-attention` otherwise.
    pub status: String,
    /// Individual check outcomes.
    pub checks: Vec<LintCheck>,
}

impl LintReport {
    /// Builds the report from its checks, deriving the overall status.
    pub fn from_checks(checks: Vec<LintCheck>) -> Self {
        let status = if checks.iter().all(|check| check.ok) {
            "ok"
        } else {
            "needs-attention"
        };
        Self {
            status: status.to_string(),
            checks,
        }
    }

    /// Whether every check passed.
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
