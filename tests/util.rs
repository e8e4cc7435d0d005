#![allow(dead_code)]
use celtic_knot::prelude::*;

pub fn e(i: u32) -> EdgeId {
    EdgeId::new(i)
}

pub fn v(i: u32) -> VertexId {
    VertexId::new(i)
}

/// Unit square corners 0..3, counter-clockwise from the origin.
pub fn square_points() -> Vec<[f64; 3]> {
    vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]
}

pub fn single_edge() -> MeshGraph {
    MeshGraph::from_edges(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]], None, &[[0, 1]]).unwrap()
}

pub fn triangle() -> MeshGraph {
    MeshGraph::from_edges(
        vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        None,
        &[[0, 1], [1, 2], [2, 0]],
    )
    .unwrap()
}

pub fn square() -> MeshGraph {
    MeshGraph::from_edges(square_points(), None, &[[0, 1], [1, 2], [2, 3], [3, 0]]).unwrap()
}

/// Square split by the 0–2 diagonal; vertices 0 and 2 have degree three.
pub fn split_square() -> MeshGraph {
    MeshGraph::from_edges(
        square_points(),
        None,
        &[[0, 1], [1, 2], [2, 3], [3, 0], [0, 2]],
    )
    .unwrap()
}

/// Centre vertex 0 with arms east (1), north (2), west (3), south (4).
pub fn plus() -> MeshGraph {
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

/// Axis-aligned cube centred on the origin with outward corner normals.
pub fn cube() -> MeshGraph {
    let mut positions = Vec::new();
    for i in 0..8u32 {
        positions.push([
            if i & 1 == 0 { -1.0 } else { 1.0 },
            if i & 2 == 0 { -1.0 } else { 1.0 },
            if i & 4 == 0 { -1.0 } else { 1.0 },
        ]);
    }
    let s = 1.0 / 3f64.sqrt();
    let normals = positions
        .iter()
        .map(|p: &[f64; 3]| [p[0] * s, p[1] * s, p[2] * s])
        .collect();
    let mut edges = Vec::new();
    for a in 0..8usize {
        for bit in [1usize, 2, 4] {
            if a & bit == 0 {
                edges.push([a, a | bit]);
            }
        }
    }
    MeshGraph::from_edges(positions, Some(normals), &edges).unwrap()
}

/// `w × h` vertex lattice; `keep[i]` selects lattice edge `i` (horizontal
/// edges first, then vertical). `jitter` displaces vertices in-plane.
pub fn lattice(w: usize, h: usize, keep: &[bool], jitter: &[(f64, f64)]) -> MeshGraph {
    let mut positions = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let (dx, dy) = jitter.get(i).copied().unwrap_or((0.0, 0.0));
            positions.push([x as f64 + dx, y as f64 + dy, 0.0]);
        }
    }
    let mut all = Vec::new();
    for y in 0..h {
        for x in 0..w - 1 {
            all.push([y * w + x, y * w + x + 1]);
        }
    }
    for y in 0..h - 1 {
        for x in 0..w {
            all.push([y * w + x, (y + 1) * w + x]);
        }
    }
    let edges: Vec<[usize; 2]> = all
        .into_iter()
        .enumerate()
        .filter(|(i, _)| keep.get(*i).copied().unwrap_or(true))
        .map(|(_, e)| e)
        .collect();
    MeshGraph::from_edges(positions, None, &edges).unwrap()
}

pub fn strands(graph: &MeshGraph, config: &KnotConfig) -> Vec<Strand> {
    GraphWalker::new(graph, config)
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

/// `(edge, side)` visiting order of a strand.
pub fn visits(strand: &Strand) -> Vec<(u32, Side)> {
    strand.iter().map(|s| (s.edge.get(), s.side)).collect()
}

pub fn length(a: [f64; 3]) -> f64 {
    (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt()
}

pub fn assert_close3(got: [f64; 3], want: [f64; 3]) {
    for k in 0..3 {
        assert!(
            (got[k] - want[k]).abs() < 1e-9,
            "vectors differ\n got={:?}\nwant={:?}",
            got,
            want
        );
    }
}
