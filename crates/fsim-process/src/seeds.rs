//! The random-number service: a labelled table of seed entries.

use fsim_core::errors::{ConfError, ErrorInfo};
use fsim_core::pset::{Parameter, Pset, Value};
use fsim_core::rng::{EngineHandle, EngineKind, SeedEntry};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from module label to seed entry, in declaration order.
///
/// Seed values are not required to be unique; the source table shares seeds
/// between related labels on purpose.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RandomSeedService {
    /// Seed entries per module label.
    #[serde(default)]
    pub entries: IndexMap<String, SeedEntry>,
    /// File the engine states are saved to; empty disables saving.
    #[serde(default)]
    pub save_file_name: String,
}

impl RandomSeedService {
    /// Creates an empty service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the entry for `label`.
    pub fn set(&mut self, label: impl Into<String>, entry: SeedEntry) -> &mut Self {
        self.entries.insert(label.into(), entry);
        self
    }

    /// Returns the entry for `label`.
    pub fn entry(&self, label: &str) -> Option<&SeedEntry> {
        self.entries.get(label)
    }

    /// Builds the deterministic engine handle for `label`.
    pub fn engine_for(&self, label: &str) -> Result<EngineHandle, ConfError> {
        let entry = self.entries.get(label).ok_or_else(|| {
            ConfError::Rng(
                ErrorInfo::new("rng-unseeded", "no seed entry for module")
                    .with_context("label", label),
            )
        })?;
        Ok(EngineHandle::for_module(entry, label))
    }

    /// Labels that share their seed value with at least one other label.
    pub fn shared_seeds(&self) -> Vec<(u32, Vec<String>)> {
        let mut by_seed: IndexMap<u32, Vec<String>> = IndexMap::new();
        for (label, entry) in &self.entries {
            by_seed
                .entry(entry.initial_seed)
                .or_default()
                .push(label.clone());
        }
        by_seed
            .into_iter()
            .filter(|(_, labels)| labels.len() > 1)
            .collect()
    }

    /// Reads the service from its parameter-set shape: one nested set per
    /// label plus an optional `saveFileName`.
    pub fn from_pset(pset: &Pset) -> Result<Self, ConfError> {
        let mut service = Self::new();
        for (name, param) in pset.iter() {
            match &param.value {
                Value::Pset(inner) => {
                    service.set(name, SeedEntry::from_pset(inner)?);
                }
                Value::Str(file) if name == "saveFileName" => {
                    service.save_file_name = file.clone();
                }
                other => {
                    return Err(ConfError::Rng(
                        ErrorInfo::new("rng-table-shape", "unexpected entry in seed table")
                            .with_context("name", name)
                            .with_context("found", other.type_name()),
                    ))
                }
            }
        }
        Ok(service)
    }

    /// Writes the service back into its parameter-set shape.
    pub fn to_pset(&self) -> Pset {
        let mut pset = Pset::new();
        for (label, entry) in &self.entries {
            pset.set(label.clone(), entry.to_pset());
        }
        pset.insert(
            "saveFileName",
            Parameter::untracked(self.save_file_name.clone()),
        );
        pset
    }
}

/// The full seed table of the validation driver, in source order.
///
/// The four pile-up related labels intentionally share seed 918273; several
/// other values repeat as well.
pub fn validation_seed_table() -> RandomSeedService {
    use EngineKind::{HepJamesRandom, TRandom3};

    let mut service = RandomSeedService::new();
    service
        .set("fastSimProducer", SeedEntry::new(234567, TRandom3))
        .set("externalLHEProducer", SeedEntry::new(234567, HepJamesRandom))
        .set("generator", SeedEntry::new(123456789, HepJamesRandom))
        .set("VtxSmeared", SeedEntry::new(98765432, HepJamesRandom))
        .set("LHCTransport", SeedEntry::new(87654321, TRandom3))
        .set("hiSignalLHCTransport", SeedEntry::new(88776655, TRandom3))
        .set("g4SimHits", SeedEntry::new(11, HepJamesRandom))
        .set("mix", SeedEntry::new(12345, HepJamesRandom))
        .set("mixData", SeedEntry::new(12345, HepJamesRandom))
        .set("simSiStripDigiSimLink", SeedEntry::new(1234567, HepJamesRandom))
        .set("simMuonDTDigis", SeedEntry::new(1234567, HepJamesRandom))
        .set("simMuonCSCDigis", SeedEntry::new(11223344, HepJamesRandom))
        .set("simMuonRPCDigis", SeedEntry::new(1234567, HepJamesRandom))
        .set("hiSignal", SeedEntry::new(123456789, HepJamesRandom))
        .set("hiSignalG4SimHits", SeedEntry::new(11, HepJamesRandom))
        .set("famosPileUp", SeedEntry::new(918273, TRandom3))
        // intentionally the same as famosPileUp
        .set("mixGenPU", SeedEntry::new(918273, TRandom3))
        .set("mixSimCaloHits", SeedEntry::new(918273, TRandom3))
        .set("mixRecoTracks", SeedEntry::new(918273, TRandom3))
        .set("famosSimHits", SeedEntry::new(13579, TRandom3))
        .set(
            "siTrackerGaussianSmearingRecHits",
            SeedEntry::new(24680, TRandom3),
        )
        .set("ecalRecHit", SeedEntry::new(654321, TRandom3))
        .set("ecalPreshowerRecHit", SeedEntry::new(6541321, TRandom3))
        .set("hbhereco", SeedEntry::new(541321, TRandom3))
        .set("horeco", SeedEntry::new(541321, TRandom3))
        .set("hfreco", SeedEntry::new(541321, TRandom3))
        .set("paramMuons", SeedEntry::new(54525, TRandom3))
        .set("l1ParamMuons", SeedEntry::new(6453209, TRandom3))
        .set("MuonSimHits", SeedEntry::new(987346, TRandom3))
        .set("simBeamSpotFilter", SeedEntry::new(87654321, HepJamesRandom));
    service
}
