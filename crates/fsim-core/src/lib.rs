#![deny(missing_docs)]
#![doc = "Core parameter-set and seeding types for the fastsim configuration model."]

pub mod errors;
pub mod pset;
pub mod rng;
pub mod schema;
pub mod tag;

pub use errors::{ConfError, ErrorInfo};
pub use pset::{Parameter, Pset, Value};
pub use rng::{derive_stream_seed, EngineHandle, EngineKind, SeedEntry};
pub use schema::SchemaVersion;
pub use tag::InputTag;
