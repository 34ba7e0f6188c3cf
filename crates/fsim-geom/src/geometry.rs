//! Assembly of a full detector description from its parameter-set shape.

use fsim_core::errors::{ConfError, ErrorInfo};
use fsim_core::pset::Pset;
use serde::{Deserialize, Serialize};

use crate::layer::{BarrelLayer, ForwardLayer};

/// Ordered barrel and forward layer families read from a detector
/// definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    barrel_layers: Vec<BarrelLayer>,
    forward_layers: Vec<ForwardLayer>,
}

impl Geometry {
    /// Builds the geometry from a detector-definition set holding
    /// `BarrelLayers` and `ForwardLayers` VPSets.
    ///
    /// Layers must be listed inside-out: each barrel radius must not fall
    /// below its predecessor, each explicit forward |z| must not fall below
    /// the previous explicit one.
    pub fn from_pset(detector: &Pset) -> Result<Self, ConfError> {
        let mut barrel_layers = Vec::new();
        for (idx, record) in detector.get_vpset("BarrelLayers")?.iter().enumerate() {
            let mut layer = BarrelLayer::from_pset(record)?;
            layer.index = idx;
            if let Some(prev) = barrel_layers.last() {
                let prev: &BarrelLayer = prev;
                if layer.radius < prev.radius {
                    return Err(ConfError::Geometry(
                        ErrorInfo::new(
                            "geom-barrel-order",
                            "barrel layer has radius smaller than previous layer",
                        )
                        .with_context("layer", idx.to_string())
                        .with_context("radius", layer.radius.to_string())
                        .with_context("previous", prev.radius.to_string()),
                    ));
                }
            }
            barrel_layers.push(layer);
        }

        let mut forward_layers: Vec<ForwardLayer> = Vec::new();
        for (idx, record) in detector.get_vpset("ForwardLayers")?.iter().enumerate() {
            let mut layer = ForwardLayer::from_pset(record)?;
            layer.index = idx;
            if let (Some(z), Some(prev_z)) = (
                layer.z,
                forward_layers.iter().rev().find_map(|prev| prev.z),
            ) {
                if z < prev_z {
                    return Err(ConfError::Geometry(
                        ErrorInfo::new(
                            "geom-forward-order",
                            "forward layer has z smaller than previous layer",
                        )
                        .with_context("layer", idx.to_string())
                        .with_context("z", z.to_string())
                        .with_context("previous", prev_z.to_string()),
                    ));
                }
            }
            forward_layers.push(layer);
        }

        Ok(Self {
            barrel_layers,
            forward_layers,
        })
    }

    /// Barrel layers, inside-out.
    pub fn barrel_layers(&self) -> &[BarrelLayer] {
        &self.barrel_layers
    }

    /// Forward layers, inside-out.
    pub fn forward_layers(&self) -> &[ForwardLayer] {
        &self.forward_layers
    }

    /// Radius of the outermost barrel layer.
    pub fn max_radius(&self) -> Option<f64> {
        self.barrel_layers.last().map(|layer| layer.radius)
    }

    /// |z| of the outermost forward layer with an explicit position.
    pub fn max_z(&self) -> Option<f64> {
        self.forward_layers.iter().rev().find_map(|layer| layer.z)
    }
}
