//! Seed-table entries and deterministic engine handles.

use std::fmt::{self, Display};
use std::hash::Hasher;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use siphasher::sip::SipHasher13;

use crate::errors::{ConfError, ErrorInfo};
use crate::pset::{Parameter, Pset};

/// Random-engine families selectable by name in the seed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineKind {
    /// Mersenne-twister style engine, spelled `TRandom3` in the tables.
    TRandom3,
    /// James random engine, spelled `HepJamesRandom` in the tables.
    HepJamesRandom,
}

impl EngineKind {
    /// Domain separator mixed into the stream derivation so the two engine
    /// families never collide on equal seeds.
    fn domain(self) -> u64 {
        match self {
            EngineKind::TRandom3 => 0x54_52_41_4e,
            EngineKind::HepJamesRandom => 0x48_45_50_4a,
        }
    }
}

impl FromStr for EngineKind {
    type Err = ConfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRandom3" => Ok(EngineKind::TRandom3),
            "HepJamesRandom" => Ok(EngineKind::HepJamesRandom),
            other => Err(ConfError::Rng(
                ErrorInfo::new("rng-engine", "unknown random engine name")
                    .with_context("name", other)
                    .with_hint("supported engines are TRandom3 and HepJamesRandom"),
            )),
        }
    }
}

impl Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::TRandom3 => write!(f, "TRandom3"),
            EngineKind::HepJamesRandom => write!(f, "HepJamesRandom"),
        }
    }
}

/// One row of the seed table: an initial seed and the engine it feeds.
///
/// Seed uniqueness is deliberately not enforced anywhere; the source tables
/// share seeds between related labels on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// Initial seed for the engine, a 32-bit unsigned value.
    pub initial_seed: u32,
    /// Engine family the seed is fed into.
    pub engine: EngineKind,
}

impl SeedEntry {
    /// Creates an entry from a seed and an engine.
    pub fn new(initial_seed: u32, engine: EngineKind) -> Self {
        Self {
            initial_seed,
            engine,
        }
    }

    /// Reads an entry from its parameter-set shape
    /// (`initialSeed` + `engineName`).
    pub fn from_pset(pset: &Pset) -> Result<Self, ConfError> {
        let seed = *pset.get_uint32("initialSeed")?;
        let engine = pset.get_string("engineName")?.parse()?;
        Ok(Self::new(seed, engine))
    }

    /// Writes the entry back into its parameter-set shape. Both leaves are
    /// untracked, as in the source tables.
    pub fn to_pset(&self) -> Pset {
        let mut pset = Pset::new();
        pset.insert("initialSeed", Parameter::untracked(self.initial_seed));
        pset.insert("engineName", Parameter::untracked(self.engine.to_string()));
        pset
    }
}

/// Derives the deterministic stream seed for a module label.
///
/// The stream seed is SipHash-1-3 with fixed zero keys over
/// `(engine domain, initial seed, label)`. This rule is stable across
/// platforms and is the only seeding policy used in the workspace.
pub fn derive_stream_seed(entry: &SeedEntry, label: &str) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(entry.engine.domain());
    hasher.write_u32(entry.initial_seed);
    hasher.write(label.as_bytes());
    hasher.finish()
}

/// Deterministic RNG handle for one module label.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    rng: StdRng,
}

impl EngineHandle {
    /// Creates the handle for `label` from its seed-table entry.
    pub fn for_module(entry: &SeedEntry, label: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(derive_stream_seed(entry, label)),
        }
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RngCore for EngineHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
