//! Strand generation over a [`KnotGraph`].
//!
//! The walker keeps a cursor `(edge, hub, side)`. Every step it emits one
//! sample above (right) or below (left) the edge midpoint, records right
//! passes in its [`CrossingTracker`], and moves on with
//! [`select::next_edge`](crate::algs::select::next_edge). A strand is finished
//! when the cursor lands, on its right side, on an edge that is already
//! crossed; the next strand starts at the lowest-index uncrossed edge.
//!
//! # Example
//! ```rust
//! use celtic_knot::algs::walker::GraphWalker;
//! use celtic_knot::config::KnotConfig;
//! use celtic_knot::mesh_graph::MeshGraph;
//!
//! let triangle = MeshGraph::from_edges(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
//!     None,
//!     &[[0, 1], [1, 2], [2, 0]],
//! )?;
//! let mut walker = GraphWalker::new(&triangle, &KnotConfig::default());
//! let strand = walker.next_strand()?.expect("one strand");
//! assert_eq!(strand.len(), 6);
//! assert!(walker.next_strand()?.is_none());
//! # Ok::<(), celtic_knot::knot_error::KnotError>(())
//! ```

use std::iter::FusedIterator;

use crate::algs::crossing::{CrossingTracker, Side};
use crate::algs::select::next_edge;
use crate::config::KnotConfig;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::UP_AXIS;
use crate::geometry::angle::rotate_45;
use crate::geometry::vector::{add, midpoint, normalize, scale, sub};
use crate::knot_error::{Element, KnotError};
use crate::mesh_graph::KnotGraph;
use crate::topology::ids::{EdgeId, VertexId};

/// Traversal position: the edge being crossed, the vertex anchoring the
/// crossing, and the side of the edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub edge: EdgeId,
    pub hub: VertexId,
    pub side: Side,
}

/// One emitted strand point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrandSample {
    /// Edge midpoint displaced along the local normal.
    pub point: [f64; 3],
    /// Unit tangent: the hub→end edge vector turned 45° about the normal.
    pub tangent: [f64; 3],
    /// Edge this sample crosses.
    pub edge: EdgeId,
    pub side: Side,
}

/// A closed sequence of samples; the last sample connects back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Strand {
    samples: Vec<StrandSample>,
    start: Cursor,
    end: Cursor,
}

impl Strand {
    pub fn samples(&self) -> &[StrandSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Cursor the strand started from.
    pub fn start(&self) -> Cursor {
        self.start
    }

    /// Cursor that stopped the traversal.
    pub fn end(&self) -> Cursor {
        self.end
    }

    /// True when the traversal stopped on its own starting state.
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StrandSample> {
        self.samples.iter()
    }

    pub fn into_samples(self) -> Vec<StrandSample> {
        self.samples
    }
}

impl<'a> IntoIterator for &'a Strand {
    type Item = &'a StrandSample;
    type IntoIter = std::slice::Iter<'a, StrandSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Compute the sample emitted at `cursor`.
///
/// The local normal is the renormalized mean of both endpoint normals, or
/// the up axis with `use_normals` off. Fails if that mean vanishes or the
/// edge has zero length.
pub fn strand_sample<G: KnotGraph>(
    graph: &G,
    cursor: Cursor,
    use_normals: bool,
    offset_distance: f64,
) -> Result<StrandSample, KnotError> {
    let end = graph.opposite(cursor.edge, cursor.hub);
    let hub_pos = graph.position(cursor.hub);
    let end_pos = graph.position(end);

    let normal = if use_normals {
        normalize(midpoint(graph.normal(cursor.hub), graph.normal(end))).ok_or(
            KnotError::GeometryDegenerate {
                element: Element::Edge(cursor.edge),
                reason: "endpoint normals average to zero",
            },
        )?
    } else {
        UP_AXIS
    };

    let sign = cursor.side.sign();
    let tangent = rotate_45(sub(end_pos, hub_pos), normal, sign).ok_or(
        KnotError::GeometryDegenerate {
            element: Element::Edge(cursor.edge),
            reason: "edge has zero length",
        },
    )?;
    let point = add(
        midpoint(hub_pos, end_pos),
        scale(normal, offset_distance * sign),
    );
    Ok(StrandSample {
        point,
        tangent,
        edge: cursor.edge,
        side: cursor.side,
    })
}

/// Lazily produces the strands of one run over a graph.
///
/// The walker owns the run's crossing state; independent runs over the same
/// graph each need their own walker. After an error the walker yields no
/// further strands.
#[derive(Debug)]
pub struct GraphWalker<'g, G: KnotGraph> {
    graph: &'g G,
    tracker: CrossingTracker,
    use_normals: bool,
    offset_distance: f64,
    sample_cap: usize,
    scratch: Vec<EdgeId>,
    failed: bool,
}

impl<'g, G: KnotGraph> GraphWalker<'g, G> {
    /// A walker with a fresh tracker.
    pub fn new(graph: &'g G, config: &KnotConfig) -> Self {
        Self::from_parts(graph, config, CrossingTracker::new(graph.edge_count()))
    }

    /// A walker continuing from existing crossing state.
    ///
    /// Fails with [`KnotError::TrackerSizeMismatch`] unless `tracker` has
    /// exactly one slot per edge of `graph`.
    pub fn with_tracker(
        graph: &'g G,
        config: &KnotConfig,
        tracker: CrossingTracker,
    ) -> Result<Self, KnotError> {
        if tracker.len() != graph.edge_count() {
            return Err(KnotError::TrackerSizeMismatch {
                expected: graph.edge_count(),
                found: tracker.len(),
            });
        }
        Ok(Self::from_parts(graph, config, tracker))
    }

    fn from_parts(graph: &'g G, config: &KnotConfig, tracker: CrossingTracker) -> Self {
        Self {
            graph,
            tracker,
            use_normals: config.use_vertex_normals,
            offset_distance: config.offset_distance,
            sample_cap: 2 * graph.edge_count() + 2,
            scratch: Vec::new(),
            failed: false,
        }
    }

    /// Override the per-strand sample limit.
    ///
    /// A closed strand never needs more than two samples per edge, which is
    /// the default limit.
    pub fn with_sample_cap(mut self, cap: usize) -> Self {
        self.sample_cap = cap;
        self
    }

    pub fn tracker(&self) -> &CrossingTracker {
        &self.tracker
    }

    pub fn into_tracker(self) -> CrossingTracker {
        self.tracker
    }

    /// True once every edge has had its right pass.
    pub fn is_finished(&self) -> bool {
        self.failed || self.tracker.is_complete()
    }

    /// Trace the next strand, or `Ok(None)` once every edge is crossed.
    pub fn next_strand(&mut self) -> Result<Option<Strand>, KnotError> {
        if self.failed {
            return Ok(None);
        }
        let Some(start_edge) = self.tracker.first_uncrossed() else {
            return Ok(None);
        };
        match self.trace(start_edge) {
            Ok(strand) => Ok(Some(strand)),
            Err(e) => {
                log::warn!("strand from edge {start_edge} aborted: {e}");
                self.failed = true;
                Err(e)
            }
        }
    }

    fn trace(&mut self, start_edge: EdgeId) -> Result<Strand, KnotError> {
        let graph = self.graph;
        let [hub, _] = graph.endpoints(start_edge);
        let start = Cursor {
            edge: start_edge,
            hub,
            side: Side::Right,
        };
        log::debug!("starting strand at edge {start_edge}, hub {hub}");

        let mut samples = Vec::new();
        let mut cursor = start;
        loop {
            if samples.len() >= self.sample_cap {
                return Err(KnotError::TraversalOverrun {
                    start_edge,
                    limit: self.sample_cap,
                });
            }
            samples.push(strand_sample(
                graph,
                cursor,
                self.use_normals,
                self.offset_distance,
            )?);
            if cursor.side == Side::Right {
                self.tracker.mark(cursor.edge);
            }
            let (edge, hub) = next_edge(
                graph,
                cursor.edge,
                cursor.hub,
                cursor.side,
                self.use_normals,
                &mut self.scratch,
            )?;
            cursor = Cursor {
                edge,
                hub,
                side: cursor.side.flip(),
            };
            log::trace!("cursor -> edge {edge}, hub {hub}, {:?}", cursor.side);
            if cursor.side == Side::Right && self.tracker.is_crossed(cursor.edge) {
                break;
            }
        }

        crate::debug_invariants!(self.tracker.validate_invariants(), "GraphWalker::trace");
        if cursor != start {
            log::warn!(
                "strand from edge {start_edge} stopped at edge {} instead of its start",
                cursor.edge
            );
        }
        log::debug!(
            "finished strand at edge {start_edge} with {} samples",
            samples.len()
        );
        Ok(Strand {
            samples,
            start,
            end: cursor,
        })
    }
}

impl<G: KnotGraph> Iterator for GraphWalker<'_, G> {
    type Item = Result<Strand, KnotError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_strand().transpose()
    }
}

impl<G: KnotGraph> FusedIterator for GraphWalker<'_, G> {}
