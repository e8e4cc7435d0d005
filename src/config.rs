//! Run configuration.
//!
//! `KnotConfig` deserializes with serde; missing fields take the defaults
//! below, so a host can store only the options it changes.

use serde::{Deserialize, Serialize};

use crate::knot_error::KnotError;

/// Highest accepted bevel resolution.
pub const MAX_BEVEL_RESOLUTION: u8 = 4;

/// Options for one knot run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnotConfig {
    /// Offset along averaged vertex normals; when false, use the +Z axis
    /// (for flat meshes on the XY plane).
    pub use_vertex_normals: bool,
    /// Distance samples are lifted above (right) or sunk below (left) the
    /// edge midpoint.
    pub offset_distance: f64,
    /// Bezier handle length as a multiple of the unit tangent.
    pub handle_scale: f64,
    /// Tube radius for the rendered curve; `0` renders a bare line.
    pub bevel_depth: f64,
    /// Bevel subdivisions, `0..=4`.
    pub bevel_resolution: u8,
}

impl Default for KnotConfig {
    fn default() -> Self {
        Self {
            use_vertex_normals: true,
            offset_distance: 0.5,
            handle_scale: 0.5,
            bevel_depth: 0.08,
            bevel_resolution: 2,
        }
    }
}

impl KnotConfig {
    pub fn with_vertex_normals(mut self, on: bool) -> Self {
        self.use_vertex_normals = on;
        self
    }

    pub fn with_offset_distance(mut self, d: f64) -> Self {
        self.offset_distance = d;
        self
    }

    pub fn with_handle_scale(mut self, s: f64) -> Self {
        self.handle_scale = s;
        self
    }

    pub fn with_bevel(mut self, depth: f64, resolution: u8) -> Self {
        self.bevel_depth = depth;
        self.bevel_resolution = resolution;
        self
    }

    /// Check every option against its accepted range.
    pub fn validate(&self) -> Result<(), KnotError> {
        if !self.offset_distance.is_finite() {
            return Err(KnotError::InvalidConfig {
                field: "offset_distance",
                reason: "must be finite",
            });
        }
        if !self.handle_scale.is_finite() {
            return Err(KnotError::InvalidConfig {
                field: "handle_scale",
                reason: "must be finite",
            });
        }
        if !self.bevel_depth.is_finite() || self.bevel_depth < 0.0 {
            return Err(KnotError::InvalidConfig {
                field: "bevel_depth",
                reason: "must be finite and >= 0",
            });
        }
        if self.bevel_resolution > MAX_BEVEL_RESOLUTION {
            return Err(KnotError::InvalidConfig {
                field: "bevel_resolution",
                reason: "must be in 0..=4",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = KnotConfig::default();
        assert!(c.use_vertex_normals);
        assert_eq!(c.bevel_resolution, 2);
        c.validate().unwrap();
    }

    #[test]
    fn negative_offset_is_allowed() {
        KnotConfig::default()
            .with_offset_distance(-1.0)
            .validate()
            .unwrap();
    }

    #[test]
    fn resolution_bound_is_inclusive() {
        assert!(KnotConfig::default().with_bevel(0.0, 4).validate().is_ok());
        assert!(KnotConfig::default().with_bevel(0.0, 5).validate().is_err());
    }
}
