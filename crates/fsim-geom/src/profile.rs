//! Step-function material profiles along a layer.

use fsim_core::errors::{ConfError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Threshold below which accumulated material counts as absent.
const NEGLIGIBLE_MATERIAL: f64 = 1e-10;

/// Piecewise-constant thickness profile over a coordinate axis.
///
/// For barrel layers the coordinate is |z|, for forward layers it is the
/// radius. `limits` holds the `N` bin edges, `thickness` the `N - 1` bin
/// contents, expressed in radiation lengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    limits: Vec<f64>,
    thickness: Vec<f64>,
}

impl MaterialProfile {
    /// Builds a profile, enforcing the bin-count and ordering invariants.
    pub fn new(limits: Vec<f64>, thickness: Vec<f64>) -> Result<Self, ConfError> {
        if limits.len() < 2 || thickness.len() != limits.len() - 1 {
            return Err(ConfError::Geometry(
                ErrorInfo::new(
                    "geom-profile-length",
                    "layer thickness not defined properly",
                )
                .with_context("limits", limits.len().to_string())
                .with_context("thickness", thickness.len().to_string())
                .with_hint("expected N limits (N >= 2) and N-1 thicknesses"),
            ));
        }
        for pair in limits.windows(2) {
            if pair[0] > pair[1] {
                return Err(ConfError::Geometry(
                    ErrorInfo::new("geom-profile-order", "limits must be in increasing order")
                        .with_context("previous", pair[0].to_string())
                        .with_context("next", pair[1].to_string()),
                ));
            }
        }
        Ok(Self { limits, thickness })
    }

    /// Bin edges of the profile.
    pub fn limits(&self) -> &[f64] {
        &self.limits
    }

    /// Bin contents of the profile.
    pub fn thickness(&self) -> &[f64] {
        &self.thickness
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.thickness.len()
    }

    /// Thickness of the bin containing `coord`, zero outside the profile.
    pub fn thickness_at(&self, coord: f64) -> f64 {
        if coord < self.limits[0] || coord >= *self.limits.last().unwrap_or(&f64::NEG_INFINITY) {
            return 0.0;
        }
        // partition_point returns the first edge strictly above coord
        let bin = self.limits.partition_point(|edge| *edge <= coord);
        self.thickness[bin - 1]
    }

    /// Lowest coordinate below which the accumulated material is negligible.
    pub fn min_material(&self) -> f64 {
        let mut acc = 0.0;
        let mut min = self.limits[0];
        for (idx, th) in self.thickness.iter().enumerate() {
            acc += th.abs();
            if acc < NEGLIGIBLE_MATERIAL {
                min = self.limits[idx + 1];
            }
        }
        min
    }

    /// Highest coordinate above which the remaining material is negligible.
    pub fn max_material(&self) -> f64 {
        let mut acc = 0.0;
        let mut max = *self.limits.last().unwrap();
        for (idx, th) in self.thickness.iter().enumerate().rev() {
            acc += th.abs();
            if acc < NEGLIGIBLE_MATERIAL {
                max = self.limits[idx];
            }
        }
        max
    }
}
