#![deny(missing_docs)]
#![doc = "Process assembly, random-seed service, and serialization for the fastsim configuration model."]

pub mod hash;
pub mod io;
pub mod modules;
pub mod presets;
pub mod process;
pub mod schedule;
pub mod seeds;

pub use hash::{process_hash, stable_hash_string, to_canonical_json_bytes};
pub use io::{
    process_from_bytes, process_from_json, process_from_yaml, process_to_bytes, process_to_json,
    process_to_yaml, ProcessDump,
};
pub use modules::{EdProducer, OutputModule, Service, Source};
pub use presets::{demo_process, tracker_hit_process, validation_process};
pub use process::Process;
pub use schedule::{PathKind, PathSpec};
pub use seeds::{validation_seed_table, RandomSeedService};
