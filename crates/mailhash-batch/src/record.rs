use crate::errors::BatchError;
use crate::options::{BatchOptions, EmailColumn};

/// Header of the digest column.
pub const HASHED_EMAIL_COLUMN: &str = "hashed_email";
/// Header of the canonical address column.
pub const CLEAN_EMAIL_COLUMN: &str = "clean_email";
/// Header of the raw address column.
pub const ORIGINAL_EMAIL_COLUMN: &str = "original_email";

/// One input row: column values in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<String>,
}

impl RowRecord {
    /// Wraps column values.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Value of a column, if the row is long enough.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All column values.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl From<&csv::StringRecord> for RowRecord {
    fn from(record: &csv::StringRecord) -> Self {
        Self::new(record.iter().map(str::to_string).collect())
    }
}

/// Which columns pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Passthrough {
    /// Header mode: the header fixes the column set.
    Columns(Vec<usize>),
    /// Headerless mode: every column of each row except the email column.
    AllButEmail,
}

/// Input-to-output column mapping for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    email_index: usize,
    passthrough: Passthrough,
}

impl RowLayout {
    /// Resolves the email column against the header (if any).
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::MissingColumn`] if a named column is absent from
    /// the header or there is no header to look it up in.
    pub fn resolve(header: Option<&RowRecord>, column: &EmailColumn) -> Result<Self, BatchError> {
        let email_index = match column {
            EmailColumn::First => 0,
            EmailColumn::Index(index) => *index,
            EmailColumn::Name(name) => header
                .and_then(|h| h.fields().iter().position(|field| field == name))
                .ok_or_else(|| BatchError::MissingColumn(column.to_string()))?,
        };

        let passthrough = match header {
            Some(header) => {
                if email_index >= header.len() {
                    return Err(BatchError::MissingColumn(column.to_string()));
                }
                Passthrough::Columns((0..header.len()).filter(|&i| i != email_index).collect())
            }
            None => Passthrough::AllButEmail,
        };

        Ok(Self {
            email_index,
            passthrough,
        })
    }

    /// Raw address of a row; `None` if the row is too short.
    pub fn email<'a>(&self, row: &'a RowRecord) -> Option<&'a str> {
        row.get(self.email_index)
    }

    /// Non-email values of a row, in input order.
    ///
    /// In header mode, columns missing from a short row come back empty.
    pub fn passthrough(&self, row: &RowRecord) -> Vec<String> {
        match &self.passthrough {
            Passthrough::Columns(indexes) => indexes
                .iter()
                .map(|&i| row.get(i).unwrap_or_default().to_string())
                .collect(),
            Passthrough::AllButEmail => row
                .fields()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != self.email_index)
                .map(|(_, value)| value.clone())
                .collect(),
        }
    }

    /// Output header row for a given input header.
    pub fn output_header(&self, header: &RowRecord, options: &BatchOptions) -> Vec<String> {
        let mut columns = vec![HASHED_EMAIL_COLUMN.to_string()];
        if options.include_original_and_clean_email {
            columns.push(CLEAN_EMAIL_COLUMN.to_string());
            columns.push(ORIGINAL_EMAIL_COLUMN.to_string());
        }
        if options.include_passthrough_columns {
            columns.extend(self.passthrough(header));
        }
        columns
    }
}
