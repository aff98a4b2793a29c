//! Core interval types for genomic region representation.

/// A closed genomic interval `[start, end]`.
/// Uses 1-based, inclusive coordinates on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Create a new interval.
    #[inline]
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }
}

/// One input line: chromosome, interval and whatever columns followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalRecord {
    pub chrom: String,
    pub interval: Interval,
    /// Columns after the stop coordinate, kept verbatim
    pub extra_fields: Vec<String>,
}

impl IntervalRecord {
    /// Create a record with no extra columns.
    pub fn new(chrom: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            chrom: chrom.into(),
            interval: Interval::new(start, end),
            extra_fields: Vec::new(),
        }
    }

    /// Attach extra columns.
    pub fn with_extra_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Get the start position.
    #[inline]
    pub fn start(&self) -> i64 {
        self.interval.start
    }

    /// Get the end position.
    #[inline]
    pub fn end(&self) -> i64 {
        self.interval.end
    }
}
