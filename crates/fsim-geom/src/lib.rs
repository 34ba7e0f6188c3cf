#![deny(missing_docs)]
#![doc = "Detector layer descriptors and material tables for the fastsim configuration model."]

pub mod geometry;
pub mod interaction;
pub mod layer;
pub mod profile;
pub mod tables;

pub use geometry::Geometry;
pub use interaction::{interaction_models_from_pset, InteractionModelConfig};
pub use layer::{BarrelLayer, ForwardLayer};
pub use profile::MaterialProfile;
pub use tables::{tracker_material, tracker_material_no_active, tracker_material_test};
