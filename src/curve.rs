//! Closed bezier curves built from strands.
//!
//! Each strand sample becomes one control point with handles placed along
//! its tangent: `left = p + t * scale`, `right = p - t * scale`. The curve is
//! always cyclic, so segment `i` runs from point `i` to point `i + 1`,
//! wrapping from the last point back to the first.

use serde::{Deserialize, Serialize};

use crate::algs::walker::Strand;
use crate::config::KnotConfig;
use crate::geometry::vector::{add, scale, sub};

/// One bezier control point with its two handles.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierPoint {
    pub position: [f64; 3],
    pub handle_left: [f64; 3],
    pub handle_right: [f64; 3],
}

/// A renderable closed curve plus its bevel settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveDescriptor {
    pub points: Vec<BezierPoint>,
    pub cyclic: bool,
    pub bevel_depth: f64,
    pub bevel_resolution: u8,
}

impl CurveDescriptor {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[BezierPoint] {
        &self.points
    }

    /// Cubic segments between consecutive points, including the closing one.
    pub fn segments(&self) -> impl Iterator<Item = CubicSegment> + '_ {
        let n = self.points.len();
        let count = if self.cyclic { n } else { n.saturating_sub(1) };
        (0..count).map(move |i| {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            CubicSegment {
                p0: a.position,
                p1: a.handle_right,
                p2: b.handle_left,
                p3: b.position,
            }
        })
    }
}

/// A cubic bezier piece `B(t) = (1-t)³P₀ + 3(1-t)²tP₁ + 3(1-t)t²P₂ + t³P₃`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CubicSegment {
    pub p0: [f64; 3],
    pub p1: [f64; 3],
    pub p2: [f64; 3],
    pub p3: [f64; 3],
}

impl CubicSegment {
    /// Evaluate at `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> [f64; 3] {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        add(
            add(scale(self.p0, b0), scale(self.p1, b1)),
            add(scale(self.p2, b2), scale(self.p3, b3)),
        )
    }

    /// Derivative at `t ∈ [0, 1]`.
    pub fn tangent_at(&self, t: f64) -> [f64; 3] {
        let u = 1.0 - t;
        add(
            add(
                scale(sub(self.p1, self.p0), 3.0 * u * u),
                scale(sub(self.p2, self.p1), 6.0 * u * t),
            ),
            scale(sub(self.p3, self.p2), 3.0 * t * t),
        )
    }
}

/// Turns strands into [`CurveDescriptor`]s with fixed handle and bevel settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurveBuilder {
    pub handle_scale: f64,
    pub bevel_depth: f64,
    pub bevel_resolution: u8,
}

impl CurveBuilder {
    pub fn new(handle_scale: f64, bevel_depth: f64, bevel_resolution: u8) -> Self {
        Self {
            handle_scale,
            bevel_depth,
            bevel_resolution,
        }
    }

    pub fn from_config(config: &KnotConfig) -> Self {
        Self::new(
            config.handle_scale,
            config.bevel_depth,
            config.bevel_resolution,
        )
    }

    pub fn build(&self, strand: &Strand) -> CurveDescriptor {
        build_curve(
            strand,
            self.handle_scale,
            self.bevel_depth,
            self.bevel_resolution,
        )
    }
}

/// Package `strand` as a cyclic bezier curve.
pub fn build_curve(
    strand: &Strand,
    handle_scale: f64,
    bevel_depth: f64,
    bevel_resolution: u8,
) -> CurveDescriptor {
    let points = strand
        .iter()
        .map(|s| {
            let h = scale(s.tangent, handle_scale);
            BezierPoint {
                position: s.point,
                handle_left: add(s.point, h),
                handle_right: sub(s.point, h),
            }
        })
        .collect();
    CurveDescriptor {
        points,
        cyclic: true,
        bevel_depth,
        bevel_resolution,
    }
}
