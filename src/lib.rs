#![cfg_attr(docsrs, feature(doc_cfg))]
//! # celtic-knot
//!
//! celtic-knot turns the wireframe of a 3-D mesh into Celtic knot strands:
//! closed, interlacing curves that pass over and under each other at every
//! edge of the mesh.
//!
//! ## How it works
//! - A [`GraphWalker`](algs::walker::GraphWalker) walks the edge graph,
//!   crossing every edge exactly twice: once lifted above the surface (the
//!   right pass) and once sunk below it (the left pass). At each vertex it
//!   turns onto the neighbouring edge reached first by an angular sweep
//!   about the vertex normal.
//! - Each closed walk is a [`Strand`](algs::walker::Strand) of
//!   `(point, tangent)` samples.
//! - A [`CurveBuilder`](curve::CurveBuilder) turns a strand into a cyclic
//!   bezier [`CurveDescriptor`](curve::CurveDescriptor) with handles along
//!   the tangents.
//! - [`weave`](algs::weave::weave) drives a whole run and hands each curve
//!   to a [`KnotSink`](algs::weave::KnotSink).
//!
//! ## Determinism
//!
//! Strands start at the lowest-index uncrossed edge and candidate edges are
//! visited in ascending edge index, so the same mesh and configuration
//! always give the same curves in the same order.
//!
//! ## Concurrency
//! A [`MeshGraph`](mesh_graph::MeshGraph) is read-only and `Send + Sync`;
//! each run owns its own crossing state. With the `rayon` feature,
//! [`weave_many`](algs::weave::weave_many) processes independent meshes in
//! parallel.
//!
//! ## Usage
//! ```rust
//! use celtic_knot::prelude::*;
//!
//! let triangle = MeshGraph::from_faces(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!     None,
//!     [[0usize, 1, 2]],
//! )?;
//! let curves = weave_collect(&triangle, &KnotConfig::default())?;
//! assert_eq!(curves.len(), 1);
//! assert!(curves[0].cyclic);
//! # Ok::<(), KnotError>(())
//! ```

pub mod algs;
pub mod config;
pub mod curve;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod knot_error;
pub mod mesh_graph;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    #[cfg(feature = "rayon")]
    pub use crate::algs::weave::weave_many;
    pub use crate::algs::{
        CollectSink, CrossingTracker, Cursor, GraphWalker, KnotSink, Side, Strand, StrandSample,
        WeaveSummary, weave, weave_collect,
    };
    pub use crate::config::KnotConfig;
    pub use crate::curve::{BezierPoint, CubicSegment, CurveBuilder, CurveDescriptor, build_curve};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::io::MeshGraphReader;
    pub use crate::io::vtk::VtkReader;
    pub use crate::knot_error::{Element, KnotError};
    pub use crate::mesh_graph::{KnotGraph, MeshGraph, MeshGraphBuilder};
    pub use crate::topology::ids::{EdgeId, VertexId};
}
