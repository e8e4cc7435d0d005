//! Top-level module for mesh topology identifiers.
//!
//! Vertices and edges are addressed by stable integer indices wrapped in
//! [`VertexId`] and [`EdgeId`]; the graph itself lives in
//! [`crate::mesh_graph`].

pub mod ids;

pub use ids::{EdgeId, VertexId};
