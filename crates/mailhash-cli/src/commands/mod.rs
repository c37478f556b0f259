pub mod email;
pub mod file;

use mailhash_canonical::{DigestAlg, EmailCanonicalizer, LookupTables};
use std::path::Path;

/// Builds a canonicalizer from an external tables file or the built-in tables.
pub fn build_canonicalizer(
    tables: Option<&Path>,
    alg: DigestAlg,
) -> Result<EmailCanonicalizer, Box<dyn std::error::Error>> {
    let tables = match tables {
        Some(path) => {
            let tables = LookupTables::from_path(path)?;
            tracing::debug!(path = %path.display(), version = %tables.version, "loaded lookup tables");
            tables
        }
        None => LookupTables::embedded()?,
    };
    Ok(EmailCanonicalizer::new(tables).with_alg(alg))
}
