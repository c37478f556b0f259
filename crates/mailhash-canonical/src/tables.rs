//! Lookup tables consulted by the normalizers.
//!
//! The tables are data, not code: the default set is compiled in from
//! `data/reference_tables.json`, and deployments that version the data
//! independently can load a file of the same shape with [`LookupTables::from_path`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

const EMBEDDED_TABLES: &str = include_str!("../data/reference_tables.json");

/// Errors raised while loading lookup tables.
#[derive(thiserror::Error, Debug)]
pub enum TablesError {
    /// The tables file could not be read.
    #[error("failed to read tables file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The tables document is not valid JSON of the expected shape.
    #[error("invalid tables document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The five static collections used during canonicalization.
///
/// All keys are exact lowercase strings. A `LookupTables` value is never
/// mutated by normalization, so one instance can be shared across threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupTables {
    /// Free-form data version label.
    #[serde(default)]
    pub version: String,
    /// Full-domain typo corrections (`gmial.com` -> `gmail.com`).
    #[serde(default)]
    pub typo_domains: HashMap<String, String>,
    /// Top-level label typo corrections (`con` -> `com`).
    #[serde(default)]
    pub typo_tlds: HashMap<String, String>,
    /// Operationally identical domains collapsed to one representative.
    #[serde(default)]
    pub equivalent_domains: HashMap<String, String>,
    /// Domains whose alias divider is `-` instead of `+`.
    #[serde(default)]
    pub yahoo_domains: HashSet<String>,
    /// Domains that accept `anything@user.domain` as an alias of `user@domain`.
    #[serde(default)]
    pub fastmail_domains: HashSet<String>,
}

impl LookupTables {
    /// Returns the tables shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`TablesError::Parse`] only if the embedded document is corrupt,
    /// which the crate's own tests rule out.
    pub fn embedded() -> Result<Self, TablesError> {
        Self::from_json(EMBEDDED_TABLES)
    }

    /// Parses tables from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, TablesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a tables file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TablesError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TablesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Corrected form of a mistyped top-level label, if known.
    pub fn tld_correction(&self, tld: &str) -> Option<&str> {
        self.typo_tlds.get(tld).map(String::as_str)
    }

    /// Corrected form of a mistyped domain, if known.
    pub fn domain_correction(&self, domain: &str) -> Option<&str> {
        self.typo_domains.get(domain).map(String::as_str)
    }

    /// Canonical representative of an equivalent domain, if any.
    pub fn equivalent_domain(&self, domain: &str) -> Option<&str> {
        self.equivalent_domains.get(domain).map(String::as_str)
    }

    /// Whether `domain` uses `-` as its alias divider.
    pub fn is_yahoo_domain(&self, domain: &str) -> bool {
        self.yahoo_domains.contains(domain)
    }

    /// Whether `domain` supports subdomain aliasing.
    pub fn is_fastmail_domain(&self, domain: &str) -> bool {
        self.fastmail_domains.contains(domain)
    }
}
