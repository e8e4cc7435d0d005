//! Rotation and angle helpers for strand construction.
//!
//! All directions are `[f64; 3]`. The sweep angle is measured
//! counter-clockwise about an axis, i.e. looking down the axis from its tip.

use std::f64::consts::{FRAC_1_SQRT_2, TAU};

use super::vector::{add, cross, dot, normalize, scale, sub};

/// Rotates `v` by ±45° about the unit `axis` and normalizes the result.
///
/// Uses the reduced Rodrigues form
/// `v * cos45 + sign * sin45 * (v × axis)` (no `axis * (axis · v)` term).
/// `sign` is `+1.0` for the right pass and `-1.0` for the left pass.
///
/// Returns `None` if the rotated vector has no length.
pub fn rotate_45(v: [f64; 3], axis: [f64; 3], sign: f64) -> Option<[f64; 3]> {
    let along = scale(v, FRAC_1_SQRT_2);
    let across = scale(cross(v, axis), sign * FRAC_1_SQRT_2);
    normalize(add(along, across))
}

/// Removes the component of `v` along `n`. `n` need not be unit length.
pub fn project_onto_plane(v: [f64; 3], n: [f64; 3]) -> [f64; 3] {
    let nn = dot(n, n);
    if nn == 0.0 {
        return v;
    }
    sub(v, scale(n, dot(v, n) / nn))
}

/// Counter-clockwise angle in `[0, 2π)` from `from` to `to` about `axis`.
///
/// With `project` set, both directions are first flattened onto the plane
/// perpendicular to `axis`. Skipping the projection is only meaningful when
/// all geometry already lies in that plane.
pub fn sweep_angle(axis: [f64; 3], from: [f64; 3], to: [f64; 3], project: bool) -> f64 {
    let (a, b) = if project {
        (project_onto_plane(from, axis), project_onto_plane(to, axis))
    } else {
        (from, to)
    };
    let angle = dot(axis, cross(a, b)).atan2(dot(a, b));
    if angle < 0.0 { angle + TAU } else { angle }
}
