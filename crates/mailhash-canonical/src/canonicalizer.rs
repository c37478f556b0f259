use crate::digest::{DigestAlg, EmailDigest};
use crate::domain::normalize_domain;
use crate::local_part::normalize_local_part;
use crate::report::CorrectionReport;
use crate::tables::{LookupTables, TablesError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Error returned when an input cannot be canonicalized.
///
/// Every variant is local to one address; callers processing many addresses
/// should record the failure and continue.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonicalizationError {
    /// No input, or only whitespace.
    #[error("no address provided")]
    InputAbsent,
    /// The input has no `@`.
    #[error("no '@' separator in address")]
    NoAddressSeparator,
    /// The domain could not be IDNA-encoded.
    #[error("domain '{domain}' cannot be encoded: {reason}")]
    Encoding {
        /// Domain as it was before encoding.
        domain: String,
        /// What the encoder rejected.
        reason: String,
    },
}

/// A canonical `local@domain` address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalEmail {
    /// Full canonical address.
    pub address: String,
    /// Canonical domain (the part after the last `@`).
    pub domain: String,
}

impl CanonicalEmail {
    /// Local part of the canonical address.
    pub fn local(&self) -> &str {
        self.address
            .rsplit_once('@')
            .map_or(self.address.as_str(), |(local, _)| local)
    }
}

impl fmt::Display for CanonicalEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl AsRef<str> for CanonicalEmail {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

/// Digest of a canonical address together with the address itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedEmail {
    /// Digest of the canonical address bytes.
    pub digest: EmailDigest,
    /// Canonical address that was hashed.
    pub email: CanonicalEmail,
}

/// Result of canonicalization with diagnostics.
#[derive(Debug, Clone)]
pub struct CanonicalizationResult {
    /// Canonical address.
    pub email: CanonicalEmail,
    /// Rules that changed the input.
    pub report: CorrectionReport,
}

/// Canonicalizer that turns raw address strings into deterministic keys.
///
/// The lookup tables are injected at construction and shared read-only, so a
/// canonicalizer can be cloned cheaply and used from several threads.
#[derive(Debug, Clone)]
pub struct EmailCanonicalizer {
    tables: Arc<LookupTables>,
    alg: DigestAlg,
}

impl EmailCanonicalizer {
    /// Creates a canonicalizer over the given tables, hashing with MD5.
    pub fn new(tables: impl Into<Arc<LookupTables>>) -> Self {
        Self {
            tables: tables.into(),
            alg: DigestAlg::default(),
        }
    }

    /// Creates a canonicalizer over the tables embedded in this crate.
    pub fn embedded() -> Result<Self, TablesError> {
        Ok(Self::new(LookupTables::embedded()?))
    }

    /// Selects the digest algorithm.
    pub fn with_alg(mut self, alg: DigestAlg) -> Self {
        self.alg = alg;
        self
    }

    /// Digest algorithm in use.
    pub fn alg(&self) -> DigestAlg {
        self.alg
    }

    /// Canonicalizes an address, returning `None` for anything that is not one.
    pub fn canonicalize(&self, raw: Option<&str>) -> Option<CanonicalEmail> {
        self.try_canonicalize(raw).ok()
    }

    /// Canonicalizes an address and hashes the result.
    ///
    /// Absent or invalid input yields `None`; an empty string is never hashed.
    pub fn digest_and_canonicalize(&self, raw: Option<&str>) -> Option<HashedEmail> {
        let email = self.canonicalize(raw)?;
        Some(HashedEmail {
            digest: EmailDigest::compute(self.alg, &email),
            email,
        })
    }

    /// Canonicalizes an address, reporting why it was rejected.
    pub fn try_canonicalize(&self, raw: Option<&str>) -> Result<CanonicalEmail, CanonicalizationError> {
        let mut report = CorrectionReport::default();
        self.run(raw, &mut report)
    }

    /// Produces the canonical address + correction report, returning the report even on error.
    pub fn canonicalize_with_report(
        &self,
        raw: Option<&str>,
    ) -> Result<CanonicalizationResult, (CanonicalizationError, CorrectionReport)> {
        let mut report = CorrectionReport::default();
        match self.run(raw, &mut report) {
            Ok(email) => Ok(CanonicalizationResult { email, report }),
            Err(err) => Err((err, report)),
        }
    }

    fn run(
        &self,
        raw: Option<&str>,
        report: &mut CorrectionReport,
    ) -> Result<CanonicalEmail, CanonicalizationError> {
        let lowered = raw.ok_or(CanonicalizationError::InputAbsent)?.to_lowercase();
        let address = lowered.trim();
        if address.is_empty() {
            return Err(CanonicalizationError::InputAbsent);
        }

        let at_idx = address
            .rfind('@')
            .ok_or(CanonicalizationError::NoAddressSeparator)?;

        // The local-part rules depend on the corrected domain, so the domain goes first.
        let mut domain = normalize_domain(&address[at_idx + 1..], &self.tables, report)?;
        let local_part = normalize_local_part(&address[..at_idx], &domain, &self.tables, report);
        if let Some(override_domain) = local_part.domain_override {
            domain = override_domain;
        }

        Ok(CanonicalEmail {
            address: format!("{}@{}", local_part.local, domain),
            domain,
        })
    }
}
