use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Suffix appended to the input file name when no output path is given.
pub const OUTPUT_SUFFIX: &str = "_hashed.csv";

/// Which input column holds the raw address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmailColumn {
    /// The first column (default).
    #[default]
    First,
    /// Zero-based column index.
    Index(usize),
    /// Column with this header name; requires a header row.
    Name(String),
}

impl EmailColumn {
    /// Parses a column selector: a plain number is an index, anything else a name.
    pub fn parse(selector: &str) -> Self {
        match selector.parse::<usize>() {
            Ok(0) => EmailColumn::First,
            Ok(index) => EmailColumn::Index(index),
            Err(_) => EmailColumn::Name(selector.to_string()),
        }
    }
}

impl fmt::Display for EmailColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailColumn::First => write!(f, "#0"),
            EmailColumn::Index(index) => write!(f, "#{}", index),
            EmailColumn::Name(name) => write!(f, "'{}'", name),
        }
    }
}

/// Options for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOptions {
    /// Whether the first input row is a header (default: true).
    pub has_header_row: bool,
    /// Whether to copy the non-email input columns to the output (default: false).
    pub include_passthrough_columns: bool,
    /// Whether to add `clean_email` and `original_email` columns (default: false).
    pub include_original_and_clean_email: bool,
    /// Output file; derived from the input path when `None`.
    pub output_path: Option<PathBuf>,
    /// Column holding the address (default: the first).
    pub email_column: EmailColumn,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            has_header_row: true,
            include_passthrough_columns: false,
            include_original_and_clean_email: false,
            output_path: None,
            email_column: EmailColumn::First,
        }
    }
}

impl BatchOptions {
    /// Output path for a given input, honoring an explicit `output_path`.
    pub fn resolve_output_path(&self, input: &Path) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| default_output_path(input))
    }
}

/// Derives `name_hashed.csv` from `name.csv`; other names get the suffix appended.
pub fn default_output_path(input: &Path) -> PathBuf {
    let input = input.to_string_lossy();
    let stem = input.strip_suffix(".csv").unwrap_or(&input);
    PathBuf::from(format!("{}{}", stem, OUTPUT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_csv_extension() {
        assert_eq!(
            default_output_path(Path::new("data/emails.csv")),
            PathBuf::from("data/emails_hashed.csv")
        );
    }

    #[test]
    fn output_path_appends_for_other_extensions() {
        assert_eq!(
            default_output_path(Path::new("list.txt")),
            PathBuf::from("list.txt_hashed.csv")
        );
    }

    #[test]
    fn explicit_output_path_wins() {
        let options = BatchOptions {
            output_path: Some(PathBuf::from("out.csv")),
            ..BatchOptions::default()
        };
        assert_eq!(
            options.resolve_output_path(Path::new("in.csv")),
            PathBuf::from("out.csv")
        );
    }

    #[test]
    fn column_selector_parsing() {
        assert_eq!(EmailColumn::parse("0"), EmailColumn::First);
        assert_eq!(EmailColumn::parse("2"), EmailColumn::Index(2));
        assert_eq!(EmailColumn::parse("email"), EmailColumn::Name("email".into()));
    }
}
