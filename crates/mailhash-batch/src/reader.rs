//! CSV row source.

use crate::errors::BatchError;
use crate::record::RowRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads rows from CSV input.
///
/// Rows may have differing widths. When a header row is expected it is
/// consumed up front and exposed through [`RowSource::header`].
///
/// # Example
///
/// ```no_run
/// use mailhash_batch::RowSource;
///
/// let mut source = RowSource::open("emails.csv", true)?;
/// while let Some(row) = source.read_row()? {
///     println!("{:?}", row.get(0));
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct RowSource<R> {
    reader: csv::Reader<R>,
    header: Option<RowRecord>,
    record: csv::StringRecord,
    position: u64,
}

impl RowSource<File> {
    /// Opens a CSV file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError`] if the file cannot be opened, or if
    /// `has_header_row` is set and the file has no rows at all.
    pub fn open<P: AsRef<Path>>(path: P, has_header_row: bool) -> Result<Self, BatchError> {
        let file = File::open(path)?;
        Self::from_reader(file, has_header_row)
    }
}

impl<R: Read> RowSource<R> {
    /// Wraps any reader.
    pub fn from_reader(input: R, has_header_row: bool) -> Result<Self, BatchError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(input);

        let mut source = Self {
            reader,
            header: None,
            record: csv::StringRecord::new(),
            position: 0,
        };

        if has_header_row {
            let header = source.next_record()?.ok_or(BatchError::EmptyInput)?;
            source.header = Some(header);
        }

        Ok(source)
    }

    /// Header row, if one was expected.
    pub fn header(&self) -> Option<&RowRecord> {
        self.header.as_ref()
    }

    /// Number of data rows read so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Reads the next data row; `Ok(None)` at end of input.
    pub fn read_row(&mut self) -> Result<Option<RowRecord>, BatchError> {
        let row = self.next_record()?;
        if row.is_some() {
            self.position += 1;
        }
        Ok(row)
    }

    fn next_record(&mut self) -> Result<Option<RowRecord>, BatchError> {
        if self.reader.read_record(&mut self.record)? {
            Ok(Some(RowRecord::from(&self.record)))
        } else {
            Ok(None)
        }
    }
}
