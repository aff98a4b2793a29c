//! Split command implementation.
//!
//! Reads interval records one at a time, tiles each into overlapping
//! windows and writes one output line per window, carrying the record's
//! chromosome and extra columns along unchanged.
//!
//! Memory stays constant per record: windows are produced lazily and
//! written as they are generated.

use crate::bed::{BedReader, Result};
use crate::config::WindowParams;
use crate::interval::{Interval, IntervalRecord};
use crate::output::WindowWriter;
use crate::split::{split_interval, Windows};
use std::fmt;
use std::io::{self, Read, Write};
use std::path::Path;

/// Split command configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitCommand {
    pub params: WindowParams,
}

impl SplitCommand {
    pub fn new(params: WindowParams) -> Self {
        Self { params }
    }

    /// Windows for a single record.
    pub fn split_record(&self, record: &IntervalRecord) -> Vec<Interval> {
        split_interval(
            record.interval,
            self.params.window_size(),
            self.params.overlap(),
        )
    }

    /// Run on a file, or on stdin when `input` is `-`.
    pub fn run<P: AsRef<Path>, W: Write>(&self, input: P, output: &mut W) -> Result<SplitStats> {
        let input = input.as_ref();
        if input.to_string_lossy() == "-" {
            log::debug!("reading intervals from stdin");
            let stdin = io::stdin();
            self.split_streaming(BedReader::new(stdin.lock()), output)
        } else {
            log::debug!("reading intervals from {}", input.display());
            self.split_streaming(BedReader::from_path(input)?, output)
        }
    }

    /// Streaming split processing.
    pub fn split_streaming<R: Read, W: Write>(
        &self,
        reader: BedReader<R>,
        output: &mut W,
    ) -> Result<SplitStats> {
        let mut writer = WindowWriter::new(output);
        let mut stats = SplitStats::default();

        log::debug!(
            "window size {}, overlap {}, step {}",
            self.params.window_size(),
            self.params.overlap(),
            self.params.step()
        );

        for result in reader.records() {
            let record = result?;

            let mut produced = 0;
            for window in Windows::with_params(record.interval, &self.params) {
                writer.write_window(&record.chrom, &window, &record.extra_fields)?;
                produced += 1;
            }

            log::trace!(
                "{}:{}-{} -> {} windows",
                record.chrom,
                record.start(),
                record.end(),
                produced
            );

            stats.records += 1;
            stats.windows += produced;
            stats.max_windows_per_record = stats.max_windows_per_record.max(produced);
        }

        writer.flush()?;
        log::info!("{}", stats);
        Ok(stats)
    }
}

/// Counters collected during a split run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    pub records: usize,
    pub windows: usize,
    pub max_windows_per_record: usize,
}

impl fmt::Display for SplitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Records: {}, Windows: {}, Max windows/record: {}",
            self.records, self.windows, self.max_windows_per_record
        )
    }
}
