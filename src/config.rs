//! Window parameters for a splitting run.
//!
//! Window size and overlap are the only knobs the tool has. They are
//! validated once at startup; everything downstream assumes a valid
//! [`WindowParams`] and does not re-check it.

use thiserror::Error;

/// Default window size used by the CLI.
pub const DEFAULT_WINDOW_SIZE: u64 = 100;

/// Default overlap between consecutive windows used by the CLI.
pub const DEFAULT_OVERLAP: u64 = 50;

/// Errors raised while validating window parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Size of sliding windows should be at least 1 (got {0})")]
    WindowTooSmall(i64),

    #[error(
        "Size of overlap between sliding windows should be >= 0 and < window_size \
         (got overlap {overlap}, window {window})"
    )]
    OverlapOutOfRange { overlap: i64, window: i64 },
}

/// Validated window size and overlap.
///
/// Invariant: `window_size >= 1` and `overlap < window_size`, so
/// [`step`](Self::step) is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    window_size: u64,
    overlap: u64,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

impl WindowParams {
    /// Validate raw (possibly negative) values as given on the command line.
    ///
    /// # Example
    ///
    /// ```
    /// use split_intervals::config::WindowParams;
    ///
    /// let params = WindowParams::new(100, 20).unwrap();
    /// assert_eq!(params.step(), 80);
    ///
    /// assert!(WindowParams::new(0, 0).is_err());
    /// assert!(WindowParams::new(100, 100).is_err());
    /// ```
    pub fn new(window_size: i64, overlap: i64) -> Result<Self, ConfigError> {
        if window_size < 1 {
            return Err(ConfigError::WindowTooSmall(window_size));
        }
        if overlap < 0 || overlap >= window_size {
            return Err(ConfigError::OverlapOutOfRange {
                overlap,
                window: window_size,
            });
        }
        Ok(Self {
            window_size: window_size as u64,
            overlap: overlap as u64,
        })
    }

    /// Window size in positions.
    #[inline]
    pub fn window_size(&self) -> u64 {
        self.window_size
    }

    /// Positions shared by consecutive windows.
    #[inline]
    pub fn overlap(&self) -> u64 {
        self.overlap
    }

    /// Distance between the starts of consecutive windows.
    #[inline]
    pub fn step(&self) -> u64 {
        self.window_size - self.overlap
    }
}
