//! Mesh input for the knot walker.
//!
//! Readers turn a byte stream into a [`MeshGraph`]. The crate defines no
//! output format: finished curves go to a
//! [`KnotSink`](crate::algs::weave::KnotSink) and are serde-serializable.

pub mod vtk;

use crate::knot_error::KnotError;
use crate::mesh_graph::MeshGraph;
use std::io::Read;

/// Trait for mesh readers that produce a mesh graph.
pub trait MeshGraphReader {
    /// Parse a mesh graph from a reader.
    fn read<R: Read>(&self, reader: R) -> Result<MeshGraph, KnotError>;
}
