use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use fsim_lint::lint_process;
use fsim_process::to_canonical_json_bytes;

use super::load_process;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Process dump to lint (JSON, or YAML by extension).
    #[arg(long)]
    pub config: PathBuf,
    /// Emit only JSON without additional context.
    #[arg(long)]
    pub quiet: bool,
}

pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn Error>> {
    let process = load_process(&args.config)?;
    let report = lint_process(&process);
    let json = to_canonical_json_bytes(&report).map_err(|err| Box::new(err) as Box<dyn Error>)?;
    let rendered = String::from_utf8(json)?;
    if args.quiet {
        println!("{rendered}");
    } else {
        println!("fsim validate status: {}", report.status);
        println!("{rendered}");
    }
    if !report.is_ok() {
        return Err("one or more checks failed".into());
    }
    Ok(())
}
