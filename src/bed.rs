//! Streaming reader for whitespace-delimited interval lists.
//!
//! Each data line holds `chrom start stop [extra ...]`, separated by tabs or
//! spaces. Coordinates are closed and inclusive.

use crate::config::ConfigError;
use crate::interval::IntervalRecord;
use crate::parsing::{parse_i64, should_skip_line, trim_line_end};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading intervals or running a command.
#[derive(Error, Debug)]
pub enum BedError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, BedError>;

impl BedError {
    /// True when output went to a reader that has closed, e.g. `| head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, BedError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// A streaming interval reader.
pub struct BedReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: String,
}

impl BedReader<File> {
    /// Open an interval file from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(file))
    }
}

impl<R: Read> BedReader<R> {
    /// Create a new reader from any readable source.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next record, skipping blank, comment and header lines.
    pub fn read_record(&mut self) -> Result<Option<IntervalRecord>> {
        loop {
            self.buffer.clear();
            let bytes_read = self.reader.read_line(&mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = trim_line_end(self.buffer.as_bytes());
            if should_skip_line(line) {
                log::trace!("skipping line {}", self.line_number);
                continue;
            }

            return parse_record(&self.buffer, self.line_number).map(Some);
        }
    }

    /// Get an iterator over all records.
    pub fn records(self) -> BedRecordIter<R> {
        BedRecordIter { reader: self }
    }
}

/// Parse one data line into a record.
fn parse_record(line: &str, line_number: usize) -> Result<IntervalRecord> {
    let mut fields = line.split_ascii_whitespace();

    let (chrom, start, stop) = match (fields.next(), fields.next(), fields.next()) {
        (Some(chrom), Some(start), Some(stop)) => (chrom, start, stop),
        (chrom, start, _) => {
            let found = [chrom, start].iter().filter(|f| f.is_some()).count();
            return Err(BedError::Parse {
                line: line_number,
                message: format!("Expected at least 3 fields, got {}", found),
            });
        }
    };

    let start = parse_position(start, "start", line_number)?;
    let stop = parse_position(stop, "stop", line_number)?;

    if start > stop {
        return Err(BedError::Parse {
            line: line_number,
            message: format!("Start ({}) > stop ({})", start, stop),
        });
    }

    Ok(IntervalRecord::new(chrom, start, stop).with_extra_fields(fields))
}

fn parse_position(s: &str, field_name: &str, line_number: usize) -> Result<i64> {
    parse_i64(s.as_bytes()).ok_or_else(|| BedError::Parse {
        line: line_number,
        message: format!("Invalid {} position: '{}'", field_name, s),
    })
}

/// Iterator over interval records.
pub struct BedRecordIter<R: Read> {
    reader: BedReader<R>,
}

impl<R: Read> Iterator for BedRecordIter<R> {
    type Item = Result<IntervalRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.read_record().transpose()
    }
}

/// Parse records from a string (useful for testing).
pub fn parse_records(content: &str) -> Result<Vec<IntervalRecord>> {
    let reader = BedReader::new(content.as_bytes());
    reader.records().collect()
}
