//! Windowing of the mix and assembly of the track listing

/// Ordering of per-window matches
pub mod listing;
/// Fixed-length windowing
pub mod segment;

pub use listing::assemble;
pub use segment::{DEFAULT_WINDOW_SECONDS, Segment, Segmenter, segment};
