//! Per-row canonicalization and hashing of CSV input.

use crate::errors::BatchError;
use crate::options::BatchOptions;
use crate::reader::RowSource;
use crate::record::{RowLayout, RowRecord};
use crate::writer::RowSink;
use mailhash_canonical::{EmailCanonicalizer, EmailDigest};
use serde::Serialize;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Cell value written when a row has no digest or canonical address.
pub const NOT_AVAILABLE: &str = "n/a";

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Data rows processed (header excluded).
    pub rows: u64,
    /// Rows that produced a digest.
    pub hashed: u64,
    /// Rows written as `n/a`.
    pub not_email: u64,
    /// File the rows were written to, when writing to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
}

/// Hashes the email column of a CSV file into a new CSV file.
///
/// The input is opened before the output is created, so a missing input
/// leaves no empty output file behind.
///
/// # Example
///
/// ```no_run
/// use mailhash_batch::{hash_csv_file, BatchOptions};
/// use mailhash_canonical::EmailCanonicalizer;
///
/// let canonicalizer = EmailCanonicalizer::embedded()?;
/// let summary = hash_csv_file("emails.csv", &BatchOptions::default(), &canonicalizer)?;
/// println!("Hashed {} rows", summary.rows);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Returns [`BatchError`] on I/O or CSV failures and on an unresolvable
/// email column. Rows that are not email addresses never cause an error.
pub fn hash_csv_file<P: AsRef<Path>>(
    input: P,
    options: &BatchOptions,
    canonicalizer: &EmailCanonicalizer,
) -> Result<BatchSummary, BatchError> {
    let input = input.as_ref();
    let output_path = options.resolve_output_path(input);
    tracing::info!(input = %input.display(), output = %output_path.display(), "hashing csv file");

    let source = RowSource::open(input, options.has_header_row)?;
    let sink = RowSink::create(&output_path)?;
    let mut summary = run(source, sink, options, canonicalizer)?;
    summary.output_path = Some(output_path);
    Ok(summary)
}

/// Hashes CSV rows from any reader into any writer.
pub fn hash_rows<R: Read, W: Write>(
    input: R,
    output: W,
    options: &BatchOptions,
    canonicalizer: &EmailCanonicalizer,
) -> Result<BatchSummary, BatchError> {
    let source = RowSource::from_reader(input, options.has_header_row)?;
    let sink = RowSink::from_writer(output);
    run(source, sink, options, canonicalizer)
}

fn run<R: Read, W: Write>(
    mut source: RowSource<R>,
    mut sink: RowSink<W>,
    options: &BatchOptions,
    canonicalizer: &EmailCanonicalizer,
) -> Result<BatchSummary, BatchError> {
    let layout = RowLayout::resolve(source.header(), &options.email_column)?;
    if let Some(header) = source.header() {
        sink.write_row(layout.output_header(header, options))?;
    }

    let mut summary = BatchSummary::default();
    while let Some(row) = source.read_row()? {
        let hashed = hash_row(&layout, &row, canonicalizer, source.position());
        if hashed.is_some() {
            summary.hashed += 1;
        } else {
            summary.not_email += 1;
        }
        summary.rows += 1;
        sink.write_row(output_row(&layout, &row, options, hashed))?;
    }

    let written = sink.rows();
    sink.finish()?;
    tracing::info!(
        rows = summary.rows,
        written,
        hashed = summary.hashed,
        not_email = summary.not_email,
        "batch complete"
    );
    Ok(summary)
}

fn hash_row(
    layout: &RowLayout,
    row: &RowRecord,
    canonicalizer: &EmailCanonicalizer,
    position: u64,
) -> Option<(EmailDigest, String)> {
    match canonicalizer.try_canonicalize(layout.email(row)) {
        Ok(email) => Some((EmailDigest::compute(canonicalizer.alg(), &email), email.address)),
        Err(err) => {
            tracing::debug!(row = position, reason = %err, "row is not an email address");
            None
        }
    }
}

fn output_row(
    layout: &RowLayout,
    row: &RowRecord,
    options: &BatchOptions,
    hashed: Option<(EmailDigest, String)>,
) -> Vec<String> {
    let (digest, clean) = match hashed {
        Some((digest, clean)) => (digest.hex, clean),
        None => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
    };

    let mut columns = vec![digest];
    if options.include_original_and_clean_email {
        columns.push(clean);
        columns.push(layout.email(row).unwrap_or_default().to_string());
    }
    if options.include_passthrough_columns {
        columns.extend(layout.passthrough(row));
    }
    columns
}
