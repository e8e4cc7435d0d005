//! Per-run edge crossing state.
//!
//! Each edge is passed twice, once on each [`Side`]. Only right passes are
//! counted; a run is complete once every edge has a count of one.

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::knot_error::KnotError;
use crate::topology::ids::EdgeId;

/// Which side of an edge a strand sample sits on.
///
/// The right pass is the primary one: it lifts the sample above the surface
/// and marks the edge as crossed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Right,
    Left,
}

impl Side {
    /// `+1.0` on the right, `-1.0` on the left.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Side::Right => 1.0,
            Side::Left => -1.0,
        }
    }

    #[inline]
    pub fn flip(self) -> Side {
        match self {
            Side::Right => Side::Left,
            Side::Left => Side::Right,
        }
    }
}

/// Right-pass counts indexed by edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossingTracker {
    counts: Vec<u8>,
}

impl CrossingTracker {
    /// A tracker with every edge uncrossed.
    pub fn new(edge_count: usize) -> Self {
        Self {
            counts: vec![0; edge_count],
        }
    }

    #[inline]
    pub fn count(&self, e: EdgeId) -> u8 {
        self.counts[e.index()]
    }

    #[inline]
    pub fn is_crossed(&self, e: EdgeId) -> bool {
        self.count(e) >= 1
    }

    /// Records a right pass over `e`.
    #[inline]
    pub fn mark(&mut self, e: EdgeId) {
        let c = &mut self.counts[e.index()];
        *c = c.saturating_add(1);
    }

    /// Lowest-index edge with no right pass yet.
    pub fn first_uncrossed(&self) -> Option<EdgeId> {
        self.counts
            .iter()
            .position(|&c| c < 1)
            .map(|i| EdgeId::new(i as u32))
    }

    /// True once every edge has been crossed on its right side.
    pub fn is_complete(&self) -> bool {
        self.counts.iter().all(|&c| c >= 1)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Raw counts, indexed by edge.
    pub fn counts(&self) -> &[u8] {
        &self.counts
    }
}

impl DebugInvariants for CrossingTracker {
    fn validate_invariants(&self) -> Result<(), KnotError> {
        for (i, &c) in self.counts.iter().enumerate() {
            ensure(c <= 1, || format!("edge {i} crossed on its right side {c} times"))?;
        }
        Ok(())
    }
}
