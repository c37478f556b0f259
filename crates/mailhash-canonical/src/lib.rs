//! Email address canonicalization and digest primitives.
//!
//! Raw addresses are folded into a canonical `local@domain` form (provider
//! alias rules, typo and equivalent-domain tables, IDNA, NFC) and hashed, so
//! that differently written addresses of the same mailbox share one key.
//!
#![deny(missing_docs)]

/// Address canonicalization entry points.
pub mod canonicalizer;
/// Digest algorithms and hex digests.
pub mod digest;
/// Domain normalization.
pub mod domain;
/// Local-part normalization.
pub mod local_part;
/// Correction reports emitted during canonicalization.
pub mod report;
/// Lookup tables consulted by the normalizers.
pub mod tables;
/// Validation helpers used by digest types.
pub mod validation;

pub use canonicalizer::{
    CanonicalEmail, CanonicalizationError, CanonicalizationResult, EmailCanonicalizer, HashedEmail,
};
pub use digest::{DigestAlg, EmailDigest};
pub use domain::normalize_domain;
pub use local_part::{normalize_local_part, LocalPart};
pub use report::{Correction, CorrectionReport};
pub use tables::{LookupTables, TablesError};
pub use validation::ValidationError;
