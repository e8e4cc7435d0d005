//! Run driver: walk every strand of a graph and hand each finished curve to
//! a sink.
//!
//! ```rust
//! use celtic_knot::algs::weave::{CollectSink, weave};
//! use celtic_knot::config::KnotConfig;
//! use celtic_knot::mesh_graph::MeshGraph;
//!
//! let square = MeshGraph::from_edges(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
//!     None,
//!     &[[0, 1], [1, 2], [2, 3], [3, 0]],
//! )?;
//! let mut sink = CollectSink::default();
//! let summary = weave(&square, &KnotConfig::default(), &mut sink)?;
//! assert_eq!(summary.strands, 2);
//! assert_eq!(sink.curves.len(), 2);
//! # Ok::<(), celtic_knot::knot_error::KnotError>(())
//! ```

use crate::algs::walker::GraphWalker;
use crate::config::KnotConfig;
use crate::curve::{CurveBuilder, CurveDescriptor};
use crate::knot_error::KnotError;
use crate::mesh_graph::KnotGraph;

/// Receiver for finished curves.
pub trait KnotSink {
    fn accept(&mut self, curve: CurveDescriptor) -> Result<(), KnotError>;
}

impl<F> KnotSink for F
where
    F: FnMut(CurveDescriptor),
{
    fn accept(&mut self, curve: CurveDescriptor) -> Result<(), KnotError> {
        self(curve);
        Ok(())
    }
}

/// Sink that keeps every curve in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectSink {
    pub curves: Vec<CurveDescriptor>,
}

impl KnotSink for CollectSink {
    fn accept(&mut self, curve: CurveDescriptor) -> Result<(), KnotError> {
        self.curves.push(curve);
        Ok(())
    }
}

/// Totals for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeaveSummary {
    pub strands: usize,
    pub samples: usize,
}

/// Validate `config`, then trace every strand of `graph` into `sink`.
///
/// Stops at the first error; curves already accepted stay with the sink,
/// the failing strand is never emitted.
pub fn weave<G, S>(graph: &G, config: &KnotConfig, sink: &mut S) -> Result<WeaveSummary, KnotError>
where
    G: KnotGraph,
    S: KnotSink + ?Sized,
{
    config.validate()?;
    let builder = CurveBuilder::from_config(config);
    let mut summary = WeaveSummary::default();
    for strand in GraphWalker::new(graph, config) {
        let strand = strand?;
        summary.strands += 1;
        summary.samples += strand.len();
        sink.accept(builder.build(&strand))?;
    }
    log::info!(
        "wove {} strands ({} samples) over {} edges",
        summary.strands,
        summary.samples,
        graph.edge_count()
    );
    Ok(summary)
}

/// [`weave`] into a fresh vector.
pub fn weave_collect<G: KnotGraph>(
    graph: &G,
    config: &KnotConfig,
) -> Result<Vec<CurveDescriptor>, KnotError> {
    let mut sink = CollectSink::default();
    weave(graph, config, &mut sink)?;
    Ok(sink.curves)
}

/// Weave several independent graphs in parallel; results keep input order.
#[cfg(feature = "rayon")]
pub fn weave_many<G>(graphs: &[G], config: &KnotConfig) -> Vec<Result<Vec<CurveDescriptor>, KnotError>>
where
    G: KnotGraph + Sync,
{
    use rayon::prelude::*;
    graphs
        .par_iter()
        .map(|g| weave_collect(g, config))
        .collect()
}
