use fsim_core::pset::Pset;
use fsim_geom::{interaction_models_from_pset, InteractionModelConfig};

fn model_pset(class_name: &str) -> Pset {
    let mut pset = Pset::new();
    pset.set("className", class_name);
    pset
}

#[test]
fn simple_layer_hit_producer_needs_no_parameters() {
    let config = InteractionModelConfig::from_pset(&model_pset("fastsim::SimpleLayerHitProducer"))
        .unwrap();
    assert_eq!(config, InteractionModelConfig::SimpleLayerHitProducer);
    assert_eq!(config.class_name(), "fastsim::SimpleLayerHitProducer");
}

#[test]
fn bremsstrahlung_reads_photon_cuts() {
    let mut pset = model_pset("fastsim::Bremsstrahlung");
    pset.set("minPhotonEnergy", 0.1);
    pset.set("minPhotonEnergyFraction", 0.005);

    let config = InteractionModelConfig::from_pset(&pset).unwrap();
    assert_eq!(
        config,
        InteractionModelConfig::Bremsstrahlung {
            min_photon_energy: 0.1,
            min_photon_energy_fraction: 0.005,
        }
    );
}

#[test]
fn bremsstrahlung_requires_its_cuts() {
    let err = InteractionModelConfig::from_pset(&model_pset("fastsim::Bremsstrahlung"))
        .unwrap_err();
    assert_eq!(err.info().code, "pset-missing");
}

#[test]
fn unknown_class_name_is_rejected() {
    let err = InteractionModelConfig::from_pset(&model_pset("fastsim::PairProduction"))
        .unwrap_err();
    assert_eq!(err.info().code, "geom-interaction-class");
    assert_eq!(
        err.info().context.get("className").unwrap(),
        "fastsim::PairProduction"
    );
}

#[test]
fn labelled_block_preserves_declaration_order() {
    let mut brem = model_pset("fastsim::Bremsstrahlung");
    brem.set("minPhotonEnergy", 0.1);
    brem.set("minPhotonEnergyFraction", 0.005);

    let mut block = Pset::new();
    block.set("simpleLayerHits", model_pset("fastsim::SimpleLayerHitProducer"));
    block.set("bremsstrahlung", brem);

    let models = interaction_models_from_pset(&block).unwrap();
    let labels: Vec<&str> = models.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["simpleLayerHits", "bremsstrahlung"]);
}

#[test]
fn non_pset_entry_is_rejected() {
    let mut block = Pset::new();
    block.set("simpleLayerHits", "fastsim::SimpleLayerHitProducer");
    let err = interaction_models_from_pset(&block).unwrap_err();
    assert_eq!(err.info().code, "geom-interaction-shape");
}
