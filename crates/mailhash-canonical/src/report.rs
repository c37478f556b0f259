use serde::{Deserialize, Serialize};

/// Stable code for a normalization rule that changed the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Correction {
    /// Surrounding whitespace or trailing dots were removed from the domain.
    DomainTrimmed,
    /// The domain was IDNA-encoded to a different ASCII form.
    IdnaEncoded,
    /// A repeated `.com.com` suffix was collapsed.
    RepeatedComCollapsed,
    /// A digit-prefixed gmail domain was rewritten to `gmail.com`.
    NumericGmailPrefix,
    /// A mistyped top-level label was replaced.
    TypoTld,
    /// A mistyped domain was replaced.
    TypoDomain,
    /// The domain was replaced by its equivalent representative.
    EquivalentDomain,
    /// The local part changed under NFC normalization.
    UnicodeComposed,
    /// An alias suffix was removed from the local part.
    AliasStripped,
    /// Dots were removed from a gmail local part.
    GmailDotsRemoved,
    /// A Fastmail-style subdomain alias was folded into the local part.
    FastmailSubdomain,
}

/// Record of the rules applied while canonicalizing one address.
///
/// The report is diagnostic only; it never influences the canonical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// Corrections in the order they were applied.
    pub corrections: Vec<Correction>,
}

impl CorrectionReport {
    /// Appends a correction code.
    pub fn push(&mut self, correction: Correction) {
        self.corrections.push(correction);
    }

    /// Whether the input was already canonical.
    pub fn is_clean(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Whether a given rule fired.
    pub fn contains(&self, correction: Correction) -> bool {
        self.corrections.contains(&correction)
    }
}
