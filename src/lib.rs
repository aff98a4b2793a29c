//! split-intervals: tile genomic intervals into fixed-size overlapping windows.
//!
//! Intervals are closed and 1-based (`[start, end]`, both ends included).
//! Every interval is covered exactly: windows start `window_size - overlap`
//! apart and a final right-anchored window reaches the interval end.
//!
//! # Example
//!
//! ```rust
//! use split_intervals::{split_interval, Interval};
//!
//! let windows = split_interval(Interval::new(1, 200), 100, 20);
//! assert_eq!(
//!     windows,
//!     vec![Interval::new(1, 100), Interval::new(81, 180), Interval::new(101, 200)]
//! );
//! ```

pub mod bed;
pub mod commands;
pub mod config;
pub mod interval;
pub mod output;
pub mod parsing;
pub mod split;

// Re-export commonly used types
pub use bed::{parse_records, BedError, BedReader};
pub use commands::{SplitCommand, SplitStats};
pub use config::WindowParams;
pub use interval::{Interval, IntervalRecord};
pub use split::{split_interval, Windows};
