//! CSV row sink.

use crate::errors::BatchError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Writes output rows as CSV.
pub struct RowSink<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl RowSink<File> {
    /// Creates (or truncates) an output file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, BatchError> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file))
    }
}

impl<W: Write> RowSink<W> {
    /// Wraps any writer.
    pub fn from_writer(output: W) -> Self {
        let writer = csv::WriterBuilder::new().flexible(true).from_writer(output);
        Self { writer, rows: 0 }
    }

    /// Writes one row.
    pub fn write_row<I, T>(&mut self, row: I) -> Result<(), BatchError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        self.writer.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far, header included.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flushes buffered rows and returns the underlying writer.
    pub fn finish(self) -> Result<W, BatchError> {
        let mut writer = self.writer;
        writer.flush()?;
        writer
            .into_inner()
            .map_err(|err| BatchError::Io(io::Error::new(err.error().kind(), err.error().to_string())))
    }
}
