//! Mock biomechanics analysis.
//!
//! Everything here is static content assembled from the requested phase names
//! and a probed duration; a real pose-estimation core would replace this
//! crate wholesale.

pub mod generator;
pub mod phase;

pub use generator::generate;
pub use phase::Phase;
