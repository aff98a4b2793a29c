//! Command implementations for split-intervals.

pub mod split;

pub use split::{SplitCommand, SplitStats};
