//! Geometry utilities for celtic-knot.
//!
//! Vectors are plain `[f64; 3]` arrays; [`vector`] holds the arithmetic and
//! [`angle`] the rotation, projection and sweep-angle math the walker uses.

pub mod angle;
pub mod vector;

/// Fixed up axis used when vertex normals are disabled.
pub const UP_AXIS: [f64; 3] = [0.0, 0.0, 1.0];
