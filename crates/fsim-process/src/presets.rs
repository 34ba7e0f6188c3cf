//! Built-in process definitions mirroring the shipped driver configurations.

use fsim_core::errors::ConfError;
use fsim_core::pset::{Parameter, Pset, Value};
use fsim_core::rng::{EngineKind, SeedEntry};
use fsim_core::InputTag;
use fsim_geom::tables::{tracker_material, tracker_material_test};

use crate::modules::{EdProducer, OutputModule, Service, Source};
use crate::process::Process;
use crate::schedule::PathSpec;
use crate::seeds::validation_seed_table;

/// The standard particle filter block: which generator particles enter the
/// detector simulation.
pub fn particle_filter() -> Pset {
    let mut filter = Pset::new();
    filter.set("EProton", 5000.0);
    filter.set("etaMax", 5.3);
    filter.set("pTMin", 0.0);
    filter.set("EMin", 0.0);
    filter
}

/// The `fastSimProducer` declaration: full detector simulation over the test
/// material table, with layer-hit and bremsstrahlung interaction models.
pub fn fast_sim_producer() -> EdProducer {
    let mut producer = EdProducer::new("FastSimProducer");
    producer.params.set("src", InputTag::new("generatorSmeared"));
    producer.params.set("particleFilter", particle_filter());
    producer
        .params
        .set("detectorDefinition", tracker_material_test());
    producer.params.set("beamPipeRadius", 0.0);

    let mut simple = Pset::new();
    simple.set("className", "fastsim::SimpleLayerHitProducer");
    let mut brem = Pset::new();
    brem.set("className", "fastsim::Bremsstrahlung");
    brem.set("minPhotonEnergy", 0.1);
    brem.set("minPhotonEnergyFraction", 0.005);
    let mut models = Pset::new();
    models.set("simpleLayerHits", simple);
    models.set("bremsstrahlung", brem);
    producer.params.set("interactionModels", models);
    producer
}

/// The `trackerSimHits` declaration: tracker-only simhit production against
/// misaligned geometry, with hit creation switched off by default.
pub fn tracker_sim_hits() -> EdProducer {
    let mut producer = EdProducer::new("TrackerSimHitProducer");
    producer.params.set("alignmentLabel", "MisAligned");
    producer.params.set("src", InputTag::new("generatorSmeared"));
    producer.params.set("particleFilter", particle_filter());
    producer.params.set("detectorLayers", tracker_material_test());
    producer.params.set_untracked("makeSimHits", false);
    producer.params.set("magneticFieldZ", 0.0);
    producer
}

/// The demo driver: run `fastSimProducer` over a generator file with debug
/// logging.
pub fn demo_process() -> Process {
    let mut process = Process::new("DEMO");
    process
        .add_era("Run2_2016")
        .add_era("fastSim")
        .set_source(Source::pool_source(vec!["file:gen.root"]))
        .set_producer("fastSimProducer", fast_sim_producer())
        .set_service(
            "MessageLogger",
            Service::message_logger("DEBUG", vec!["fastSimProducer"]),
        )
        .set_path("demo", PathSpec::path(vec!["fastSimProducer"]));
    process.max_events = Some(-1);
    process
        .random_seeds
        .set("fastSimProducer", SeedEntry::new(234567, EngineKind::TRandom3));
    process
}

/// The tracker-hit demo driver: same shape as [`demo_process`] around the
/// `trackerSimHits` producer.
pub fn tracker_hit_process() -> Process {
    let mut process = Process::new("DEMO");
    process
        .add_era("Run2_2016")
        .add_era("fastSim")
        .set_source(Source::pool_source(vec!["file:gen.root"]))
        .set_producer("trackerSimHits", tracker_sim_hits())
        .set_path("demo", PathSpec::path(vec!["trackerSimHits"]));
    process
        .random_seeds
        .set("trackerSimHits", SeedEntry::new(234567, EngineKind::TRandom3));
    process
}

const GEN_DROP_COMMANDS: [&str; 16] = [
    "drop *_genParticles_*_*",
    "drop *_genParticlesForJets_*_*",
    "drop *_kt4GenJets_*_*",
    "drop *_kt6GenJets_*_*",
    "drop *_iterativeCone5GenJets_*_*",
    "drop *_ak4GenJets_*_*",
    "drop *_ak7GenJets_*_*",
    "drop *_ak8GenJets_*_*",
    "drop *_ak4GenJetsNoNu_*_*",
    "drop *_ak8GenJetsNoNu_*_*",
    "drop *_genCandidatesForMET_*_*",
    "drop *_genParticlesForMETAllVisible_*_*",
    "drop *_genMetCalo_*_*",
    "drop *_genMetCaloAndNonPrompt_*_*",
    "drop *_genMetTrue_*_*",
    "drop *_genMetIC5GenJs_*_*",
];

fn validation_source() -> Source {
    let mut source = Source::pool_source(vec!["file:gen_muGun.root"]);
    source
        .params
        .insert("dropDescendantsOfDroppedBranches", Parameter::untracked(false));
    let mut commands = vec!["keep *".to_string()];
    commands.extend(GEN_DROP_COMMANDS.iter().map(|cmd| cmd.to_string()));
    source
        .params
        .insert("inputCommands", Parameter::untracked(commands));
    source
        .params
        .insert("secondaryFileNames", Parameter::untracked(Vec::<String>::new()));
    source
}

fn tag(label: &str) -> Value {
    Value::Tag(InputTag::new(label))
}

fn product(instance: &str) -> Value {
    Value::Tag(InputTag::with_instance("fastSimProducer", instance))
}

fn vtags(instances: &[&str]) -> Value {
    Value::VTag(
        instances
            .iter()
            .map(|instance| InputTag::with_instance("fastSimProducer", *instance))
            .collect(),
    )
}

/// The validation driver: full chain from generator file through
/// reconstruction and validation, rewired to take its hits from
/// `fastSimProducer`.
///
/// Modules brought in by the standard sequences (mixing, digitization,
/// reconstruction) are declared as externals; the retargeting assignments
/// below accumulate in their overlays.
pub fn validation_process() -> Result<Process, ConfError> {
    let mut process = Process::new("DEMO");
    process.add_era("Run2_2016").add_era("fastSim");
    process.max_events = Some(10);
    process.set_source(validation_source());
    process.random_seeds = validation_seed_table();

    process.set_producer("fastSimProducer", fast_sim_producer());

    // Standard-sequence modules the retargeting below touches.
    for label in [
        "siTrackerGaussianSmearingRecHits",
        "fastMatchedTrackerRecHits",
        "fastMatchedTrackerRecHitCombinations",
        "simMuonCSCDigis",
        "simMuonDTDigis",
        "simMuonRPCDigis",
        "theMixObjects",
        "theDigitizersValid",
        "mix",
        "mixSimHits",
        "trackingParticles",
        "simHitTPAssocProducer",
        "FEVTDEBUGHLTEventContent",
        "DQMEventContent",
        // Sequence labels referenced from paths.
        "reconstruction_befmix",
        "pdigi_valid",
        "SimL1Emulator",
        "DigiToRaw",
        "L1Reco",
        "reconstruction",
        "tracksValidationTrackingOnly",
    ] {
        process.declare_external(label);
    }

    // Modules defined by the standard generator/simulation sequences; the
    // seed table addresses them even though nothing here configures them.
    for label in [
        "externalLHEProducer",
        "generator",
        "VtxSmeared",
        "LHCTransport",
        "hiSignalLHCTransport",
        "g4SimHits",
        "mixData",
        "simSiStripDigiSimLink",
        "hiSignal",
        "hiSignalG4SimHits",
        "famosPileUp",
        "mixGenPU",
        "mixSimCaloHits",
        "mixRecoTracks",
        "famosSimHits",
        "ecalRecHit",
        "ecalPreshowerRecHit",
        "hbhereco",
        "horeco",
        "hfreco",
        "paramMuons",
        "l1ParamMuons",
        "MuonSimHits",
        "simBeamSpotFilter",
    ] {
        process.declare_external(label);
    }

    // Rewire rec-hit smearing and matching to the new producer.
    process.assign(
        "siTrackerGaussianSmearingRecHits.InputSimHits",
        Parameter::tracked(product("TrackerHits")),
    )?;
    process.assign(
        "fastMatchedTrackerRecHits.simHits",
        Parameter::tracked(product("TrackerHits")),
    )?;
    process.assign(
        "fastMatchedTrackerRecHitCombinations.simHits",
        Parameter::tracked(product("TrackerHits")),
    )?;
    process.assign(
        "simMuonCSCDigis.InputCollection",
        Parameter::tracked("fastSimProducerMuonCSCHits"),
    )?;
    process.assign(
        "simMuonDTDigis.InputCollection",
        Parameter::tracked("fastSimProducerMuonDTHits"),
    )?;
    process.assign(
        "simMuonRPCDigis.InputCollection",
        Parameter::tracked("fastSimProducerMuonRPCHits"),
    )?;

    // Mixing inputs.
    process.assign(
        "theMixObjects.mixCH.input",
        Parameter::tracked(vtags(&["EcalHitsEB", "EcalHitsEE", "EcalHitsES", "HcalHits"])),
    )?;
    process.assign(
        "theMixObjects.mixSH.input",
        Parameter::tracked(vtags(&[
            "MuonCSCHits",
            "MuonDTHits",
            "MuonRPCHits",
            "TrackerHits",
        ])),
    )?;
    process.assign(
        "theMixObjects.mixTracks.input",
        Parameter::tracked(vtags(&[""])),
    )?;
    process.assign(
        "theMixObjects.mixVertices.input",
        Parameter::tracked(vtags(&[""])),
    )?;
    process.assign(
        "mixSimHits.input",
        Parameter::tracked(vtags(&[
            "MuonCSCHits",
            "MuonDTHits",
            "MuonRPCHits",
            "TrackerHits",
        ])),
    )?;

    // Truth matching in the digitizers.
    let mut sim_hit_collections = Pset::new();
    sim_hit_collections.set(
        "muon",
        Value::VTag(
            ["MuonDTHits", "MuonCSCHits", "MuonRPCHits"]
                .iter()
                .map(|instance| InputTag::with_instance("fastSimProducer", *instance))
                .collect(),
        ),
    );
    sim_hit_collections.set("trackerAndPixel", vtags(&["TrackerHits"]));
    process.assign(
        "theDigitizersValid.mergedtruth.simHitCollections",
        Parameter::tracked(sim_hit_collections.clone()),
    )?;
    process.assign(
        "theDigitizersValid.mergedtruth.simTrackCollection",
        Parameter::tracked(tag("fastSimProducer")),
    )?;
    process.assign(
        "theDigitizersValid.mergedtruth.simVertexCollection",
        Parameter::tracked(tag("fastSimProducer")),
    )?;
    process.assign(
        "theDigitizersValid.ecal.hitsProducer",
        Parameter::tracked("fastSimProducer"),
    )?;
    process.assign(
        "theDigitizersValid.hcal.hitsProducer",
        Parameter::tracked("fastSimProducer"),
    )?;
    process.assign("mix.hitsProducer", Parameter::tracked("fastSimProducer"))?;
    process.assign(
        "trackingParticles.simHitCollections",
        Parameter::tracked(sim_hit_collections),
    )?;
    process.assign(
        "simHitTPAssocProducer.simHitSrc",
        Parameter::tracked(vtags(&[
            "TrackerHits",
            "MuonCSCHits",
            "MuonDTHits",
            "MuonRPCHits",
        ])),
    )?;

    // Output definitions. The event-content overlays stand in for the
    // standard-sequence content lists; only the fastsim keep matters here.
    process.assign(
        "FEVTDEBUGHLTEventContent.outputCommands",
        Parameter::tracked(vec!["drop *"]),
    )?;
    process.append(
        "FEVTDEBUGHLTEventContent.outputCommands",
        Value::from("keep *_fastSimProducer_*_*"),
    )?;
    process.assign(
        "DQMEventContent.outputCommands",
        Parameter::tracked(vec!["drop *", "keep DQM*_*_*_*"]),
    )?;

    let mut fevt = OutputModule::with_dataset(
        "PoolOutputModule",
        "dqm_fastsim.root",
        "GEN-SIM-DIGI-RECO",
        "",
    );
    fevt.params.insert(
        "eventAutoFlushCompressedSize",
        Parameter::untracked(10485760),
    );
    fevt.params.insert(
        "outputCommands",
        Parameter::untracked(vec!["drop *", "keep *_fastSimProducer_*_*"]),
    );
    fevt.params.insert("splitLevel", Parameter::untracked(0));
    process.set_output_module("FEVTDEBUGHLToutput", fevt);

    let mut dqm =
        OutputModule::with_dataset("DQMRootOutputModule", "dqm_fastsim_inDQM.root", "DQMIO", "");
    dqm.params.insert(
        "outputCommands",
        Parameter::untracked(vec!["drop *", "keep DQM*_*_*_*"]),
    );
    dqm.params.insert("splitLevel", Parameter::untracked(0));
    process.set_output_module("DQMoutput", dqm);

    // Path and end-path definitions.
    process
        .set_path("simulation_step", PathSpec::path(vec!["fastSimProducer"]))
        .set_path(
            "reconstruction_befmix_step",
            PathSpec::path(vec!["reconstruction_befmix"]),
        )
        .set_path("digitisation_step", PathSpec::path(vec!["pdigi_valid"]))
        .set_path("L1simulation_step", PathSpec::path(vec!["SimL1Emulator"]))
        .set_path("digi2raw_step", PathSpec::path(vec!["DigiToRaw"]))
        .set_path("L1Reco_step", PathSpec::path(vec!["L1Reco"]))
        .set_path("reconstruction_step", PathSpec::path(vec!["reconstruction"]))
        .set_path(
            "validation_step",
            PathSpec::end_path(vec!["tracksValidationTrackingOnly"]),
        )
        .set_path(
            "FEVTDEBUGHLToutput_step",
            PathSpec::end_path(vec!["FEVTDEBUGHLToutput"]),
        )
        .set_path("DQMoutput_step", PathSpec::end_path(vec!["DQMoutput"]));

    process.set_schedule(vec![
        "simulation_step",
        "reconstruction_befmix_step",
        "digitisation_step",
        "L1simulation_step",
        "digi2raw_step",
        "L1Reco_step",
        "reconstruction_step",
        "validation_step",
        "FEVTDEBUGHLToutput_step",
        "DQMoutput_step",
    ]);

    Ok(process)
}

/// Full material table variant of [`fast_sim_producer`], for drivers that
/// want the production geometry instead of the test slice.
pub fn fast_sim_producer_full_geometry() -> EdProducer {
    let mut producer = fast_sim_producer();
    producer.params.set("detectorDefinition", tracker_material());
    producer
}
