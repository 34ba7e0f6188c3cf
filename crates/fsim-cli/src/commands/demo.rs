use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use fsim_process::{
    demo_process, process_hash, process_to_json, process_to_yaml, tracker_hit_process,
    validation_process, Process,
};

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Preset to emit: `demo`, `tracker-hits`, or `validation`.
    #[arg(long, default_value = "demo")]
    pub preset: String,
    /// Destination file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Dump format: `json` or `yaml`.
    #[arg(long, default_value = "json")]
    pub format: String,
}

pub fn run(args: &DemoArgs) -> Result<(), Box<dyn Error>> {
    let process = build_preset(&args.preset)?;
    let rendered = match args.format.as_str() {
        "json" => process_to_json(&process)?,
        "yaml" => process_to_yaml(&process)?,
        other => return Err(format!("unsupported format {other:?}").into()),
    };
    match &args.out {
        Some(path) => {
            fs::write(path, rendered)?;
            println!("wrote {} preset to {}", args.preset, path.display());
        }
        None => println!("{rendered}"),
    }
    eprintln!("process hash: {}", process_hash(&process)?);
    Ok(())
}

fn build_preset(name: &str) -> Result<Process, Box<dyn Error>> {
    match name {
        "demo" => Ok(demo_process()),
        "tracker-hits" => Ok(tracker_hit_process()),
        "validation" => Ok(validation_process()?),
        other => Err(format!(
            "unknown preset {other:?}; expected demo, tracker-hits, or validation"
        )
        .into()),
    }
}
