use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    demo::{self, DemoArgs},
    dump::{self, DumpArgs},
    layers::{self, LayersArgs},
    validate::{self, ValidateArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "fsim", about = "fastsim configuration model CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one of the built-in process presets.
    Demo(DemoArgs),
    /// Lint a process dump and report the findings.
    Validate(ValidateArgs),
    /// Normalize a process dump and print its canonical hash.
    Dump(DumpArgs),
    /// Summarize a built-in tracker material table.
    Layers(LayersArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Demo(args) => demo::run(&args),
        Command::Validate(args) => validate::run(&args),
        Command::Dump(args) => dump::run(&args),
        Command::Layers(args) => layers::run(&args),
    }
}
