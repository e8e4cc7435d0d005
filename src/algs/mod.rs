//! Strand traversal and the run driver.

pub mod crossing;
pub mod select;
pub mod walker;
pub mod weave;

pub use crossing::{CrossingTracker, Side};
pub use walker::{Cursor, GraphWalker, Strand, StrandSample};
pub use weave::{CollectSink, KnotSink, WeaveSummary, weave, weave_collect};
