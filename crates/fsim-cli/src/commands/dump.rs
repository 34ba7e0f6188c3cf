use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use fsim_process::{process_hash, process_to_bytes, process_to_json, process_to_yaml};

use super::load_process;

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Process dump to normalize (JSON, or YAML by extension).
    #[arg(long)]
    pub config: PathBuf,
    /// Output format: `json`, `yaml`, or `bytes`.
    #[arg(long, default_value = "json")]
    pub format: String,
    /// Destination file; stdout when omitted (`bytes` requires `--out`).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &DumpArgs) -> Result<(), Box<dyn Error>> {
    let process = load_process(&args.config)?;
    match args.format.as_str() {
        "json" => write_text(args, process_to_json(&process)?)?,
        "yaml" => write_text(args, process_to_yaml(&process)?)?,
        "bytes" => {
            let Some(path) = &args.out else {
                return Err("--out is required for the bytes format".into());
            };
            fs::write(path, process_to_bytes(&process)?)?;
        }
        other => return Err(format!("unsupported format {other:?}").into()),
    }
    println!("canonical hash: {}", process_hash(&process)?);
    Ok(())
}

fn write_text(args: &DumpArgs, rendered: String) -> Result<(), Box<dyn Error>> {
    match &args.out {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}
