//! File command implementation.

use mailhash_batch::{hash_csv_file, BatchOptions, EmailColumn};
use mailhash_canonical::EmailCanonicalizer;
use std::path::PathBuf;

/// Batch arguments as given on the command line.
pub struct FileArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub no_header: bool,
    pub passthrough: bool,
    pub include_emails: bool,
    pub column: Option<String>,
}

impl FileArgs {
    fn options(&self) -> BatchOptions {
        BatchOptions {
            has_header_row: !self.no_header,
            include_passthrough_columns: self.passthrough,
            include_original_and_clean_email: self.include_emails,
            output_path: self.output.clone(),
            email_column: self
                .column
                .as_deref()
                .map(EmailColumn::parse)
                .unwrap_or_default(),
        }
    }
}

pub fn run(
    canonicalizer: &EmailCanonicalizer,
    args: FileArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let summary = hash_csv_file(&args.input, &args.options(), canonicalizer)
        .map_err(|e| format!("Failed to hash {}: {}", args.input.display(), e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let output_path = summary
            .output_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        println!("Hashed {} rows to output file: {}", summary.rows, output_path);
    }
    Ok(())
}
