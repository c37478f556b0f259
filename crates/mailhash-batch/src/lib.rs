//! CSV batch driver for email canonicalization and hashing.
//!
//! This crate provides:
//! - A flexible-width CSV row source and row sink
//! - Column layout resolution (email column, passthrough columns)
//! - [`hash_csv_file`] and [`hash_rows`], which hash one address per row and
//!   keep output rows in input order
//!
//! ## Quick Start
//!
//! ```rust
//! use mailhash_batch::{hash_rows, BatchOptions};
//! use mailhash_canonical::EmailCanonicalizer;
//!
//! let canonicalizer = EmailCanonicalizer::embedded()?;
//! let input = "email,name\nUser+x@Gmail.com,Ann\nnot-an-email,Bob\n";
//! let mut output = Vec::new();
//! let summary = hash_rows(input.as_bytes(), &mut output, &BatchOptions::default(), &canonicalizer)?;
//! assert_eq!(summary.rows, 2);
//! assert_eq!(summary.not_email, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Batch driver entry points.
pub mod driver;
/// Error types for batch runs.
pub mod errors;
/// Batch configuration.
pub mod options;
/// CSV row source.
pub mod reader;
/// Rows and column layout.
pub mod record;
/// CSV row sink.
pub mod writer;

pub use driver::{hash_csv_file, hash_rows, BatchSummary, NOT_AVAILABLE};
pub use errors::BatchError;
pub use options::{default_output_path, BatchOptions, EmailColumn};
pub use reader::RowSource;
pub use record::{RowLayout, RowRecord};
pub use writer::RowSink;
