//! Local-part cleanup driven by the already-normalized domain.

use crate::report::{Correction, CorrectionReport};
use crate::tables::LookupTables;
use unicode_normalization::UnicodeNormalization;

const GMAIL_DOMAIN: &str = "gmail.com";

/// Result of local-part normalization.
///
/// Fastmail-style subdomain aliasing rewrites the domain as well as the
/// local part, so the override is returned explicitly for the caller to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPart {
    /// Normalized local part.
    pub local: String,
    /// Replacement for the normalized domain, if one applies.
    pub domain_override: Option<String>,
}

/// Normalizes the part of an address before the last `@`.
///
/// `domain` must already have been through [`normalize_domain`](crate::domain::normalize_domain).
pub fn normalize_local_part(
    raw: &str,
    domain: &str,
    tables: &LookupTables,
    report: &mut CorrectionReport,
) -> LocalPart {
    let mut local: String = raw.nfc().collect();
    if local != raw {
        report.push(Correction::UnicodeComposed);
    }

    let divider = if tables.is_yahoo_domain(domain) {
        '-'
    } else {
        '+'
    };
    // A divider in first position would leave nothing behind, so it is not an alias.
    if let Some(idx) = local.find(divider) {
        if idx > 0 {
            local.truncate(idx);
            report.push(Correction::AliasStripped);
        }
    }

    if domain == GMAIL_DOMAIN && local.contains('.') {
        local.retain(|c| c != '.');
        report.push(Correction::GmailDotsRemoved);
    }

    let mut domain_override = None;
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() > 2 {
        let parent = labels[1..].join(".");
        if tables.is_fastmail_domain(&parent) {
            if !local.is_empty() {
                local = labels[0].to_string();
            }
            domain_override = Some(parent);
            report.push(Correction::FastmailSubdomain);
        }
    }

    LocalPart {
        local,
        domain_override,
    }
}
