//! Interaction-model descriptors attached to a simulation producer.

use fsim_core::errors::{ConfError, ErrorInfo};
use fsim_core::pset::Pset;
use serde::{Deserialize, Serialize};

/// Configuration of one interaction model, selected by class name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionModelConfig {
    /// Records a hit on every traversed sensitive layer; no parameters.
    SimpleLayerHitProducer,
    /// Photon radiation off charged tracks.
    Bremsstrahlung {
        /// Lowest photon energy worth generating, in GeV.
        min_photon_energy: f64,
        /// Lowest photon energy as a fraction of the parent energy.
        min_photon_energy_fraction: f64,
    },
    /// Discards the particle at the layer; no parameters.
    Killer,
}

impl InteractionModelConfig {
    /// Reads a model configuration from its parameter-set shape
    /// (`className` plus model-specific parameters).
    ///
    /// Unknown class names are rejected, matching the factory behaviour of
    /// the consuming framework.
    pub fn from_pset(pset: &Pset) -> Result<Self, ConfError> {
        let class_name = pset.get_string("className")?;
        match class_name.as_str() {
            "fastsim::SimpleLayerHitProducer" => Ok(Self::SimpleLayerHitProducer),
            "fastsim::Bremsstrahlung" => Ok(Self::Bremsstrahlung {
                min_photon_energy: *pset.get_double("minPhotonEnergy")?,
                min_photon_energy_fraction: *pset.get_double("minPhotonEnergyFraction")?,
            }),
            "fastsim::Killer" => Ok(Self::Killer),
            other => Err(ConfError::Geometry(
                ErrorInfo::new("geom-interaction-class", "unknown interaction model class")
                    .with_context("className", other),
            )),
        }
    }

    /// Class name under which the model is selected.
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::SimpleLayerHitProducer => "fastsim::SimpleLayerHitProducer",
            Self::Bremsstrahlung { .. } => "fastsim::Bremsstrahlung",
            Self::Killer => "fastsim::Killer",
        }
    }
}

/// Reads the labelled `interactionModels` block of a producer.
///
/// Returns `(label, config)` pairs in declaration order.
pub fn interaction_models_from_pset(
    models: &Pset,
) -> Result<Vec<(String, InteractionModelConfig)>, ConfError> {
    let mut out = Vec::with_capacity(models.len());
    for (label, param) in models.iter() {
        match &param.value {
            fsim_core::Value::Pset(inner) => {
                out.push((label.to_string(), InteractionModelConfig::from_pset(inner)?));
            }
            other => {
                return Err(ConfError::Geometry(
                    ErrorInfo::new(
                        "geom-interaction-shape",
                        "interaction model entry must be a pset",
                    )
                    .with_context("label", label)
                    .with_context("found", other.type_name()),
                ))
            }
        }
    }
    Ok(out)
}
