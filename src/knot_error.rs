//! KnotError: Unified error type for celtic-knot public APIs
//!
//! Every fallible operation in the crate (graph construction, mesh reading,
//! configuration checks, strand traversal) reports through this one enum.

use std::fmt;
use thiserror::Error;

use crate::topology::ids::{EdgeId, VertexId};

/// The mesh element a geometry failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Edge(EdgeId),
    Vertex(VertexId),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Edge(e) => write!(f, "edge {e}"),
            Element::Vertex(v) => write!(f, "vertex {v}"),
        }
    }
}

/// Unified error type for celtic-knot operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KnotError {
    /// A normalization hit a zero-length (or non-finite) vector.
    #[error("degenerate geometry at {element}: {reason}")]
    GeometryDegenerate {
        element: Element,
        reason: &'static str,
    },
    /// A strand ran past its sample cap without closing.
    #[error("traversal starting at edge {start_edge} did not close within {limit} samples")]
    TraversalOverrun { start_edge: EdgeId, limit: usize },
    /// A resumed crossing tracker does not match the graph's edge count.
    #[error("crossing tracker has {found} slots, graph has {expected} edges")]
    TrackerSizeMismatch { expected: usize, found: usize },
    /// A configuration value is out of its accepted range.
    #[error("invalid configuration: {field} ({reason})")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// An edge or face references a vertex that does not exist.
    #[error("edge {edge} references vertex {vertex}, but the mesh has {vertex_count} vertices")]
    VertexOutOfRange {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    /// Both endpoints of an edge are the same vertex.
    #[error("edge {edge} is a self-loop on vertex {vertex}")]
    SelfLoopEdge { edge: usize, vertex: usize },
    /// Normals were supplied, but not one per vertex.
    #[error("expected {expected} vertex normals, found {found}")]
    NormalCountMismatch { expected: usize, found: usize },
    /// A position or normal component is NaN or infinite.
    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate { vertex: usize },
    /// Malformed mesh input.
    #[error("mesh parse error: {0}")]
    MeshIoParse(String),
    /// Underlying reader failure.
    #[error("I/O error: {0}")]
    Io(String),
    /// A structural invariant check failed.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

impl From<std::io::Error> for KnotError {
    fn from(e: std::io::Error) -> Self {
        KnotError::Io(e.to_string())
    }
}
