//! Barrel and forward layer descriptors.

use fsim_core::pset::Pset;
use fsim_core::ConfError;
use serde::{Deserialize, Serialize};

use crate::profile::MaterialProfile;

fn optional_double(pset: &Pset, name: &str) -> Option<f64> {
    if pset.exists_as(name, "double") {
        pset.get_double(name).ok().copied()
    } else {
        None
    }
}

fn optional_string(pset: &Pset, name: &str) -> Option<String> {
    if pset.exists_as(name, "string") {
        pset.get_string(name).ok().cloned()
    } else {
        None
    }
}

fn optional_vstring(pset: &Pset, name: &str) -> Vec<String> {
    if pset.exists_as(name, "vstring") {
        pset.get_vstring(name).cloned().unwrap_or_default()
    } else {
        Vec::new()
    }
}

/// Cylindrical layer at a fixed radius, material profiled along |z|.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarrelLayer {
    /// Layer radius in cm.
    pub radius: f64,
    /// Material profile binned in |z|.
    pub profile: MaterialProfile,
    /// Label of the active detector layer backing this record, if any.
    pub active_layer: Option<String>,
    /// Labels of interaction models attached to this layer.
    pub interaction_models: Vec<String>,
    /// 0-based index within the barrel family, assigned at assembly.
    pub index: usize,
}

impl BarrelLayer {
    /// Reads a barrel record (`radius`, `limits`, `thickness`, optional
    /// `activeLayer` and `interactionModels`).
    pub fn from_pset(pset: &Pset) -> Result<Self, ConfError> {
        let profile = MaterialProfile::new(
            pset.get_vdouble("limits")?.clone(),
            pset.get_vdouble("thickness")?.clone(),
        )?;
        Ok(Self {
            radius: *pset.get_double("radius")?,
            profile,
            active_layer: optional_string(pset, "activeLayer"),
            interaction_models: optional_vstring(pset, "interactionModels"),
            index: 0,
        })
    }

    /// Thickness seen at longitudinal position `z`.
    pub fn thickness_at(&self, z: f64) -> f64 {
        self.profile.thickness_at(z.abs())
    }
}

/// Disk layer at a fixed |z|, material profiled along the radius.
///
/// `z` may be absent when an `activeLayer` label is supposed to supply the
/// position from the live detector description; such records are data-only
/// here and are skipped by ordering checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForwardLayer {
    /// Layer position |z| in cm, when explicit.
    pub z: Option<f64>,
    /// Material profile binned in radius.
    pub profile: MaterialProfile,
    /// Label of the active detector layer backing this record, if any.
    pub active_layer: Option<String>,
    /// Scale factor applied to nuclear-interaction thickness, if any.
    pub nuclear_interaction_thickness_factor: Option<f64>,
    /// Labels of interaction models attached to this layer.
    pub interaction_models: Vec<String>,
    /// 0-based index within the forward family, assigned at assembly.
    pub index: usize,
}

impl ForwardLayer {
    /// Reads a forward record (`limits`, `thickness`, optional `z`,
    /// `activeLayer`, `nuclearInteractionThicknessFactor`,
    /// `interactionModels`).
    pub fn from_pset(pset: &Pset) -> Result<Self, ConfError> {
        let profile = MaterialProfile::new(
            pset.get_vdouble("limits")?.clone(),
            pset.get_vdouble("thickness")?.clone(),
        )?;
        Ok(Self {
            z: optional_double(pset, "z"),
            profile,
            active_layer: optional_string(pset, "activeLayer"),
            nuclear_interaction_thickness_factor: optional_double(
                pset,
                "nuclearInteractionThicknessFactor",
            ),
            interaction_models: optional_vstring(pset, "interactionModels"),
            index: 0,
        })
    }

    /// Thickness seen at radial position `r`.
    pub fn thickness_at(&self, r: f64) -> f64 {
        self.profile.thickness_at(r.abs())
    }
}
