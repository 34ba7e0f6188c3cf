use fsim_core::rng::EngineKind;
use fsim_core::InputTag;
use fsim_process::presets::fast_sim_producer_full_geometry;
use fsim_process::{demo_process, tracker_hit_process, validation_process};

#[test]
fn demo_process_wires_the_fast_sim_producer() {
    let process = demo_process();
    assert_eq!(process.name, "DEMO");
    assert_eq!(process.eras, vec!["Run2_2016", "fastSim"]);
    assert_eq!(process.max_events, Some(-1));

    let source = process.source.as_ref().unwrap();
    assert_eq!(source.type_name, "PoolSource");
    assert_eq!(
        source.params.get_vstring("fileNames").unwrap(),
        &vec!["file:gen.root".to_string()]
    );

    let producer = &process.producers["fastSimProducer"];
    assert_eq!(producer.type_name, "FastSimProducer");
    assert_eq!(
        producer.params.get_tag("src").unwrap(),
        &InputTag::new("generatorSmeared")
    );
    assert_eq!(producer.params.get_double("beamPipeRadius").unwrap(), &0.0);
    let filter = producer.params.get_pset("particleFilter").unwrap();
    assert_eq!(filter.get_double("etaMax").unwrap(), &5.3);
    assert_eq!(filter.get_double("EProton").unwrap(), &5000.0);

    let models = producer.params.get_pset("interactionModels").unwrap();
    let brem = models.get_pset("bremsstrahlung").unwrap();
    assert_eq!(
        brem.get_string("className").unwrap(),
        "fastsim::Bremsstrahlung"
    );
    assert_eq!(brem.get_double("minPhotonEnergy").unwrap(), &0.1);
    assert_eq!(brem.get_double("minPhotonEnergyFraction").unwrap(), &0.005);

    let entry = process.random_seeds.entry("fastSimProducer").unwrap();
    assert_eq!(entry.initial_seed, 234567);
    assert_eq!(entry.engine, EngineKind::TRandom3);

    assert_eq!(
        process.resolve_schedule().unwrap(),
        vec!["fastSimProducer".to_string()]
    );
}

#[test]
fn demo_process_logs_debug_for_the_producer() {
    let process = demo_process();
    let logger = &process.services["MessageLogger"];
    assert_eq!(logger.type_name, "MessageLogger");
    assert_eq!(
        logger.params.get_vstring("debugModules").unwrap(),
        &vec!["fastSimProducer".to_string()]
    );
    let cout = logger.params.get_pset("cout").unwrap();
    assert_eq!(cout.get_string("threshold").unwrap(), "DEBUG");
}

#[test]
fn tracker_hit_process_keeps_hit_creation_off() {
    let process = tracker_hit_process();
    let producer = &process.producers["trackerSimHits"];
    assert_eq!(producer.type_name, "TrackerSimHitProducer");
    assert_eq!(
        producer.params.get_string("alignmentLabel").unwrap(),
        "MisAligned"
    );
    let make = producer.params.get("makeSimHits").unwrap();
    assert!(!make.tracked);
    assert_eq!(producer.params.get_bool("makeSimHits").unwrap(), &false);
    assert_eq!(producer.params.get_double("magneticFieldZ").unwrap(), &0.0);
    assert!(producer.params.exists("detectorLayers"));
    assert!(process.random_seeds.entry("trackerSimHits").is_some());
}

#[test]
fn validation_process_retargets_hits_to_the_producer() {
    let process = validation_process().unwrap();
    assert_eq!(process.max_events, Some(10));

    let source = process.source.as_ref().unwrap();
    let commands = source.params.get_vstring("inputCommands").unwrap();
    assert_eq!(commands.len(), 17);
    assert_eq!(commands[0], "keep *");
    assert!(commands[1..].iter().all(|cmd| cmd.starts_with("drop ")));

    let smearing = process
        .module_params("siTrackerGaussianSmearingRecHits")
        .unwrap();
    assert_eq!(
        smearing.get_tag("InputSimHits").unwrap(),
        &InputTag::with_instance("fastSimProducer", "TrackerHits")
    );

    let mix_objects = process.module_params("theMixObjects").unwrap();
    let calo = mix_objects
        .get_pset("mixCH")
        .unwrap()
        .get_vtag("input")
        .unwrap();
    assert_eq!(calo.len(), 4);
    assert!(calo.iter().all(|tag| tag.label == "fastSimProducer"));
    let instances: Vec<&str> = calo.iter().map(|tag| tag.instance.as_str()).collect();
    assert_eq!(
        instances,
        vec!["EcalHitsEB", "EcalHitsEE", "EcalHitsES", "HcalHits"]
    );

    assert_eq!(process.random_seeds.entries.len(), 30);
}

#[test]
fn validation_process_schedule_resolves_in_source_order() {
    let process = validation_process().unwrap();
    let schedule = process.schedule.as_ref().unwrap();
    assert_eq!(schedule.len(), 10);
    assert_eq!(schedule[0], "simulation_step");
    assert_eq!(schedule[9], "DQMoutput_step");

    let modules = process.resolve_schedule().unwrap();
    assert_eq!(modules.first().map(String::as_str), Some("fastSimProducer"));
    assert_eq!(modules.last().map(String::as_str), Some("DQMoutput"));
}

#[test]
fn full_geometry_variant_swaps_only_the_detector() {
    let producer = fast_sim_producer_full_geometry();
    let detector = producer.params.get_pset("detectorDefinition").unwrap();
    assert_eq!(detector.get_vpset("BarrelLayers").unwrap().len(), 17);
    assert_eq!(
        producer.params.get_tag("src").unwrap(),
        &InputTag::new("generatorSmeared")
    );
}

#[test]
fn validation_output_keeps_producer_branches() {
    let process = validation_process().unwrap();
    let fevt = &process.output_modules["FEVTDEBUGHLToutput"];
    assert_eq!(fevt.type_name, "PoolOutputModule");
    assert_eq!(
        fevt.params.get_string("fileName").unwrap(),
        "dqm_fastsim.root"
    );
    assert_eq!(
        fevt.params
            .get_int32("eventAutoFlushCompressedSize")
            .unwrap(),
        &10485760
    );
    let dataset = fevt.params.get_pset("dataset").unwrap();
    assert_eq!(
        dataset.get_string("dataTier").unwrap(),
        "GEN-SIM-DIGI-RECO"
    );
    let commands = fevt.params.get_vstring("outputCommands").unwrap();
    assert!(commands.contains(&"keep *_fastSimProducer_*_*".to_string()));

    let content = process.module_params("FEVTDEBUGHLTEventContent").unwrap();
    let overlay = content.get_vstring("outputCommands").unwrap();
    assert_eq!(
        overlay.last().map(String::as_str),
        Some("keep *_fastSimProducer_*_*")
    );

    let dqm = &process.output_modules["DQMoutput"];
    assert_eq!(dqm.type_name, "DQMRootOutputModule");
    assert_eq!(
        dqm.params.get_string("fileName").unwrap(),
        "dqm_fastsim_inDQM.root"
    );
}
