//! Buffered output of windows.
//!
//! Uses itoa for coordinate formatting to avoid allocation per line.

use crate::bed::BedError;
use crate::interval::Interval;
use std::io::{BufWriter, Write};

/// Output buffer size (2 MB).
pub const DEFAULT_OUTPUT_BUFFER: usize = 2 * 1024 * 1024;

/// Writes one tab-separated line per window.
pub struct WindowWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> WindowWriter<W> {
    /// Create a new writer with the default buffer.
    pub fn new(output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(DEFAULT_OUTPUT_BUFFER, output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write `chrom\tstart\tend[\textra...]\n`.
    #[inline]
    pub fn write_window<S: AsRef<str>>(
        &mut self,
        chrom: &str,
        window: &Interval,
        extra_fields: &[S],
    ) -> Result<(), BedError> {
        self.writer.write_all(chrom.as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(window.start).as_bytes())?;
        self.writer.write_all(b"\t")?;
        self.writer
            .write_all(self.itoa_buf.format(window.end).as_bytes())?;
        for field in extra_fields {
            self.writer.write_all(b"\t")?;
            self.writer.write_all(field.as_ref().as_bytes())?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), BedError> {
        self.writer.flush()?;
        Ok(())
    }
}
