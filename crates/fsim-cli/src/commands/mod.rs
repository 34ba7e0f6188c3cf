pub mod demo;
pub mod dump;
pub mod layers;
pub mod validate;

use std::error::Error;
use std::path::Path;

use fsim_process::{process_from_json, process_from_yaml, Process};

/// Loads a process dump, picking the format from the file extension
/// (`.yaml`/`.yml` for YAML, JSON otherwise).
pub fn load_process(path: &Path) -> Result<Process, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)?;
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);
    let process = if by_extension {
        process_from_yaml(&contents)?
    } else {
        process_from_json(&contents)?
    };
    Ok(process)
}
