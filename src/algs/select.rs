//! Next-edge rules for the strand walker.
//!
//! After emitting a sample on `edge` with hub vertex `hub`, the walker moves
//! on by one of three rules depending on how many other edges meet at the
//! hub:
//!
//! | other edges at hub | rule |
//! |---|---|
//! | 0 | [`dead_end`]: stay on `edge`, hub moves to its far end |
//! | 1 | [`advance`] onto that edge |
//! | ≥2 | [`select_by_angle`], then [`advance`] |
//!
//! Each rule is a free function over explicit arguments so it can be tested
//! without running a whole traversal.

use crate::algs::crossing::Side;
use crate::geometry::UP_AXIS;
use crate::geometry::angle::sweep_angle;
use crate::geometry::vector::{neg, normalize, sub};
use crate::knot_error::{Element, KnotError};
use crate::mesh_graph::KnotGraph;
use crate::topology::ids::{EdgeId, VertexId};

/// Loop back on the same edge: the hub moves to the other endpoint.
#[inline]
pub fn dead_end<G: KnotGraph>(graph: &G, edge: EdgeId, hub: VertexId) -> (EdgeId, VertexId) {
    (edge, graph.opposite(edge, hub))
}

/// Step onto `next`, which shares `hub`; the new hub is its far endpoint.
#[inline]
pub fn advance<G: KnotGraph>(graph: &G, next: EdgeId, hub: VertexId) -> (EdgeId, VertexId) {
    (next, graph.opposite(next, hub))
}

/// Axis the turn at `hub` is measured about.
///
/// The hub normal (or the up axis when normals are off), negated on the
/// left pass so the two passes wind in opposite directions.
pub fn turn_axis<G: KnotGraph>(
    graph: &G,
    hub: VertexId,
    side: Side,
    use_normals: bool,
) -> Result<[f64; 3], KnotError> {
    let axis = if use_normals {
        normalize(graph.normal(hub)).ok_or(KnotError::GeometryDegenerate {
            element: Element::Vertex(hub),
            reason: "vertex normal has zero length",
        })?
    } else {
        UP_AXIS
    };
    Ok(match side {
        Side::Right => axis,
        Side::Left => neg(axis),
    })
}

/// Pick the candidate reached first when sweeping counter-clockwise about
/// `axis` from the incoming direction `end - hub`.
///
/// Ties keep the earliest candidate. `candidates` must be non-empty.
pub fn select_by_angle<G: KnotGraph>(
    graph: &G,
    hub: VertexId,
    end: VertexId,
    candidates: &[EdgeId],
    axis: [f64; 3],
    project: bool,
) -> EdgeId {
    let origin = graph.position(hub);
    let incoming = sub(graph.position(end), origin);
    let mut best = candidates[0];
    let mut best_angle = f64::INFINITY;
    for &c in candidates {
        let far = graph.opposite(c, hub);
        let angle = sweep_angle(axis, incoming, sub(graph.position(far), origin), project);
        log::trace!("candidate edge {c} at hub {hub}: sweep {angle:.6}");
        if angle < best_angle {
            best_angle = angle;
            best = c;
        }
    }
    best
}

/// Apply whichever rule fits the hub's degree and return the next
/// `(edge, hub)` pair.
///
/// `scratch` is reused across calls to hold the candidate list.
pub fn next_edge<G: KnotGraph>(
    graph: &G,
    edge: EdgeId,
    hub: VertexId,
    side: Side,
    use_normals: bool,
    scratch: &mut Vec<EdgeId>,
) -> Result<(EdgeId, VertexId), KnotError> {
    scratch.clear();
    scratch.extend(graph.other_edges(hub, edge));
    match scratch.as_slice() {
        [] => Ok(dead_end(graph, edge, hub)),
        [only] => Ok(advance(graph, *only, hub)),
        many => {
            let axis = turn_axis(graph, hub, side, use_normals)?;
            let end = graph.opposite(edge, hub);
            let pick = select_by_angle(graph, hub, end, many, axis, use_normals);
            Ok(advance(graph, pick, hub))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh_graph::MeshGraph;

    fn v(i: u32) -> VertexId {
        VertexId::new(i)
    }

    fn e(i: u32) -> EdgeId {
        EdgeId::new(i)
    }

    /// Centre vertex 0 with arms east (1), north (2), west (3), south (4).
    fn plus() -> MeshGraph {
        MeshGraph::from_edges(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, -1.0, 0.0],
            ],
            None,
            &[[0, 1], [0, 2], [0, 3], [0, 4]],
        )
        .unwrap()
    }

    #[test]
    fn dead_end_flips_hub_and_keeps_edge() {
        let g = plus();
        assert_eq!(dead_end(&g, e(1), v(2)), (e(1), v(0)));
        assert_eq!(dead_end(&g, e(1), v(0)), (e(1), v(2)));
    }

    #[test]
    fn single_candidate_advances_to_far_end() {
        let g = MeshGraph::from_edges(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
            None,
            &[[0, 1], [1, 2]],
        )
        .unwrap();
        let mut scratch = Vec::new();
        let next = next_edge(&g, e(0), v(1), Side::Right, true, &mut scratch).unwrap();
        assert_eq!(next, (e(1), v(2)));
    }

    #[test]
    fn angular_pick_depends_on_side() {
        let g = plus();
        let candidates = [e(1), e(2), e(3)];
        // Incoming direction east; right pass sweeps counter-clockwise about +z.
        let right = select_by_angle(&g, v(0), v(1), &candidates, UP_AXIS, true);
        assert_eq!(right, e(1));
        // Left pass sweeps about -z, i.e. clockwise seen from above.
        let left = select_by_angle(&g, v(0), v(1), &candidates, neg(UP_AXIS), true);
        assert_eq!(left, e(3));
    }

    #[test]
    fn next_edge_at_degree_four_hub() {
        let g = plus();
        let mut scratch = Vec::new();
        let (edge, hub) = next_edge(&g, e(0), v(0), Side::Right, true, &mut scratch).unwrap();
        assert_eq!((edge, hub), (e(1), v(2)));
        let (edge, hub) = next_edge(&g, e(0), v(0), Side::Left, false, &mut scratch).unwrap();
        assert_eq!((edge, hub), (e(3), v(4)));
    }

    #[test]
    fn exact_tie_keeps_first_candidate() {
        // Two arms pointing the same way from the hub.
        let g = MeshGraph::from_edges(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 2.0, 0.0]],
            None,
            &[[0, 1], [0, 3], [0, 2]],
        )
        .unwrap();
        let pick = select_by_angle(&g, v(0), v(1), &[e(1), e(2)], UP_AXIS, true);
        assert_eq!(pick, e(1));
    }

    #[test]
    fn zero_hub_normal_is_degenerate() {
        let g = MeshGraph::from_edges(
            vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]],
            Some(vec![[0.0; 3], UP_AXIS, UP_AXIS, UP_AXIS]),
            &[[0, 1], [0, 2], [0, 3]],
        )
        .unwrap();
        let mut scratch = Vec::new();
        let err = next_edge(&g, e(0), v(0), Side::Right, true, &mut scratch).unwrap_err();
        assert_eq!(
            err,
            KnotError::GeometryDegenerate {
                element: Element::Vertex(v(0)),
                reason: "vertex normal has zero length",
            }
        );
        // With normals disabled the up axis is used and the turn succeeds.
        assert!(next_edge(&g, e(0), v(0), Side::Right, false, &mut scratch).is_ok());
    }
}
