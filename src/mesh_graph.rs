//! Read-only mesh graph used by the strand walker.
//!
//! [`KnotGraph`] is the minimal view the walker needs: vertex positions and
//! normals, edge endpoints, and the edges incident to a vertex. [`MeshGraph`]
//! is the in-crate implementation, storing vertex→edge incidence in CSR form
//! with each vertex's edges in ascending edge index order, so the walker's
//! candidate order (and therefore its tie-breaking) is reproducible.

use hashbrown::HashSet;
use itertools::Itertools;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::geometry::{UP_AXIS, vector::is_finite};
use crate::knot_error::KnotError;
use crate::topology::ids::{EdgeId, VertexId};

/// Read-only graph abstraction consumed by [`crate::algs::walker::GraphWalker`].
///
/// Implementations must return incident edges in a fixed order across calls;
/// ascending edge index is the convention.
pub trait KnotGraph {
    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Position of `v`.
    fn position(&self, v: VertexId) -> [f64; 3];

    /// Unit normal of `v`, precomputed by the mesh provider.
    fn normal(&self, v: VertexId) -> [f64; 3];

    /// The ordered vertex pair of `e`; slot 0 is where a strand starting on
    /// `e` places its first hub.
    fn endpoints(&self, e: EdgeId) -> [VertexId; 2];

    /// Edges incident to `v`.
    fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_;

    /// Edges incident to `v` other than `e`.
    fn other_edges(&self, v: VertexId, e: EdgeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident_edges(v).filter(move |&x| x != e)
    }

    /// All edge ids in ascending order.
    fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edge_count() as u32).map(EdgeId::new)
    }

    /// The endpoint of `e` that is not `v`.
    fn opposite(&self, e: EdgeId, v: VertexId) -> VertexId {
        let [a, b] = self.endpoints(e);
        if a == v { b } else { a }
    }
}

/// Vertex/edge graph with CSR vertex→edge incidence.
#[derive(Debug, Clone)]
pub struct MeshGraph {
    positions: Vec<[f64; 3]>,
    normals: Vec<[f64; 3]>,
    edges: Vec<[VertexId; 2]>,
    /// CSR offsets into `adjncy` for each vertex.
    xadj: Vec<usize>,
    /// Incident edges, grouped per vertex.
    adjncy: Vec<EdgeId>,
}

static_assertions::assert_impl_all!(MeshGraph: Send, Sync);

impl MeshGraph {
    /// Build a graph from positions, optional per-vertex normals and an
    /// explicit edge list.
    ///
    /// Missing normals default to the up axis.
    pub fn from_edges(
        positions: Vec<[f64; 3]>,
        normals: Option<Vec<[f64; 3]>>,
        edges: &[[usize; 2]],
    ) -> Result<Self, KnotError> {
        let mut builder = MeshGraphBuilder::new(positions);
        if let Some(normals) = normals {
            builder = builder.normals(normals);
        }
        builder.edges(edges.iter().copied()).build()
    }

    /// Build a graph whose edges are the boundaries of `faces`.
    pub fn from_faces<F>(
        positions: Vec<[f64; 3]>,
        normals: Option<Vec<[f64; 3]>>,
        faces: impl IntoIterator<Item = F>,
    ) -> Result<Self, KnotError>
    where
        F: AsRef<[usize]>,
    {
        let mut builder = MeshGraphBuilder::new(positions);
        if let Some(normals) = normals {
            builder = builder.normals(normals);
        }
        for face in faces {
            builder = builder.face(face.as_ref());
        }
        builder.build()
    }

    /// Return the incident edge slice for vertex `v`.
    #[inline]
    pub fn incident(&self, v: VertexId) -> &[EdgeId] {
        &self.adjncy[self.xadj[v.index()]..self.xadj[v.index() + 1]]
    }

    /// Number of edges incident to `v`.
    #[inline]
    pub fn degree(&self, v: VertexId) -> usize {
        self.xadj[v.index() + 1] - self.xadj[v.index()]
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f64; 3]] {
        &self.normals
    }

    pub fn edge_list(&self) -> &[[VertexId; 2]] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl KnotGraph for MeshGraph {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    fn position(&self, v: VertexId) -> [f64; 3] {
        self.positions[v.index()]
    }

    #[inline]
    fn normal(&self, v: VertexId) -> [f64; 3] {
        self.normals[v.index()]
    }

    #[inline]
    fn endpoints(&self, e: EdgeId) -> [VertexId; 2] {
        self.edges[e.index()]
    }

    fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident(v).iter().copied()
    }
}

impl DebugInvariants for MeshGraph {
    fn validate_invariants(&self) -> Result<(), KnotError> {
        let n = self.positions.len();
        ensure(self.normals.len() == n, || {
            format!("{} normals for {n} vertices", self.normals.len())
        })?;
        ensure(self.xadj.len() == n + 1, || {
            format!("xadj has {} entries, expected {}", self.xadj.len(), n + 1)
        })?;
        ensure(self.xadj.first() == Some(&0), || "xadj must start at 0".into())?;
        ensure(self.xadj.iter().tuple_windows().all(|(a, b)| a <= b), || {
            "xadj is not monotone".into()
        })?;
        ensure(self.xadj[n] == self.adjncy.len(), || {
            "xadj does not cover adjncy".into()
        })?;
        ensure(self.adjncy.len() == 2 * self.edges.len(), || {
            format!(
                "{} incidences for {} edges",
                self.adjncy.len(),
                self.edges.len()
            )
        })?;
        for v in (0..n as u32).map(VertexId::new) {
            let list = self.incident(v);
            ensure(list.iter().tuple_windows().all(|(a, b)| a < b), || {
                format!("incident edges of vertex {v} are not strictly ascending")
            })?;
            for &e in list {
                ensure(e.index() < self.edges.len(), || {
                    format!("vertex {v} lists missing edge {e}")
                })?;
                ensure(self.edges[e.index()].contains(&v), || {
                    format!("vertex {v} lists edge {e} that does not touch it")
                })?;
            }
        }
        for (i, &[a, b]) in self.edges.iter().enumerate() {
            let e = EdgeId::new(i as u32);
            ensure(a != b, || format!("edge {e} is a self-loop"))?;
            ensure(
                self.incident(a).contains(&e) && self.incident(b).contains(&e),
                || format!("edge {e} is missing from an endpoint's incidence list"),
            )?;
        }
        Ok(())
    }
}

/// Incremental constructor for [`MeshGraph`].
///
/// Explicit edges and face boundaries share one numbering: edges are
/// numbered in the order first seen, and a vertex pair seen again (in either
/// orientation) is skipped.
#[derive(Debug, Clone, Default)]
pub struct MeshGraphBuilder {
    positions: Vec<[f64; 3]>,
    normals: Option<Vec<[f64; 3]>>,
    edges: Vec<[usize; 2]>,
}

impl MeshGraphBuilder {
    pub fn new(positions: Vec<[f64; 3]>) -> Self {
        Self {
            positions,
            normals: None,
            edges: Vec::new(),
        }
    }

    /// Per-vertex unit normals; must match the position count.
    pub fn normals(mut self, normals: Vec<[f64; 3]>) -> Self {
        self.normals = Some(normals);
        self
    }

    pub fn edge(mut self, a: usize, b: usize) -> Self {
        self.edges.push([a, b]);
        self
    }

    pub fn edges(mut self, edges: impl IntoIterator<Item = [usize; 2]>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Adds the boundary edges of a polygon, closing it back to its first vertex.
    pub fn face(mut self, face: &[usize]) -> Self {
        match face.len() {
            0 | 1 => {}
            2 => self.edges.push([face[0], face[1]]),
            _ => self
                .edges
                .extend(face.iter().copied().circular_tuple_windows().map(|(a, b)| [a, b])),
        }
        self
    }

    pub fn build(self) -> Result<MeshGraph, KnotError> {
        let n = self.positions.len();
        check_index_space(n, "vertices")?;
        let normals = match self.normals {
            Some(normals) if normals.len() != n => {
                return Err(KnotError::NormalCountMismatch {
                    expected: n,
                    found: normals.len(),
                });
            }
            Some(normals) => normals,
            None => vec![UP_AXIS; n],
        };
        for (i, (p, nrm)) in self.positions.iter().zip(&normals).enumerate() {
            if !is_finite(*p) || !is_finite(*nrm) {
                return Err(KnotError::NonFiniteCoordinate { vertex: i });
            }
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(self.edges.len());
        let mut edges: Vec<[VertexId; 2]> = Vec::with_capacity(self.edges.len());
        for (i, &[a, b]) in self.edges.iter().enumerate() {
            for v in [a, b] {
                if v >= n {
                    return Err(KnotError::VertexOutOfRange {
                        edge: i,
                        vertex: v,
                        vertex_count: n,
                    });
                }
            }
            if a == b {
                return Err(KnotError::SelfLoopEdge { edge: i, vertex: a });
            }
            if !seen.insert((a.min(b), a.max(b))) {
                log::trace!("skipping duplicate edge ({a}, {b})");
                continue;
            }
            edges.push([VertexId::new(a as u32), VertexId::new(b as u32)]);
        }
        check_index_space(edges.len(), "edges")?;

        let mut xadj = vec![0usize; n + 1];
        for &[a, b] in &edges {
            xadj[a.index() + 1] += 1;
            xadj[b.index() + 1] += 1;
        }
        for i in 0..n {
            xadj[i + 1] += xadj[i];
        }
        let mut fill = xadj.clone();
        let mut adjncy = vec![EdgeId::new(0); 2 * edges.len()];
        for (i, &[a, b]) in edges.iter().enumerate() {
            for v in [a, b] {
                adjncy[fill[v.index()]] = EdgeId::new(i as u32);
                fill[v.index()] += 1;
            }
        }

        let graph = MeshGraph {
            positions: self.positions,
            normals,
            edges,
            xadj,
            adjncy,
        };
        crate::debug_invariants!(graph.validate_invariants(), "MeshGraphBuilder::build");
        log::debug!(
            "built mesh graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

/// Ids are `u32`; reject element counts that would truncate.
fn check_index_space(count: usize, what: &str) -> Result<(), KnotError> {
    if u32::try_from(count).is_err() {
        return Err(KnotError::InvariantViolation(format!(
            "{count} {what} exceed the u32 index space"
        )));
    }
    Ok(())
}
