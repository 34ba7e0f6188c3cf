#![deny(missing_docs)]
#![doc = "Structural consistency checks for assembled fastsim configurations."]

pub mod checks;
mod report;

pub use checks::lint_process;
pub use report::{LintCheck, LintReport};
