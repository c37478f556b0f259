//! Domain cleanup: trimming, IDNA encoding, pattern fixes and table lookups.

use crate::canonicalizer::CanonicalizationError;
use crate::report::{Correction, CorrectionReport};
use crate::tables::LookupTables;
use idna::AsciiDenyList;
use once_cell::sync::Lazy;
use regex::Regex;

static REPEATED_COM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\.com){2,}$").expect("invalid regex"));
static NUMERIC_GMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(?:gmail?\.com)$").expect("invalid regex"));

/// Maximum length of a DNS label in bytes.
const MAX_LABEL_LEN: usize = 63;

/// Normalizes the part of an address after the last `@`.
///
/// Steps run in a fixed order; each later step sees the output of the
/// previous one:
///
/// 1. trim whitespace and trailing dots
/// 2. IDNA-encode to ASCII
/// 3. collapse `.com.com...` to `.com`
/// 4. rewrite `<digits>gmail.com` to `gmail.com`
/// 5. correct a mistyped top-level label
/// 6. correct a mistyped domain
/// 7. replace an equivalent domain with its representative
///
/// # Errors
///
/// Returns [`CanonicalizationError::Encoding`] if the domain cannot be
/// IDNA-encoded or contains an empty or oversized label.
pub fn normalize_domain(
    raw: &str,
    tables: &LookupTables,
    report: &mut CorrectionReport,
) -> Result<String, CanonicalizationError> {
    let trimmed = raw.trim().trim_end_matches('.');
    if trimmed != raw {
        report.push(Correction::DomainTrimmed);
    }

    let encoded = encode_ascii(trimmed)?;
    if encoded != trimmed {
        report.push(Correction::IdnaEncoded);
    }
    let mut domain = encoded;

    if REPEATED_COM.is_match(&domain) {
        domain = REPEATED_COM.replace(&domain, ".com").into_owned();
        report.push(Correction::RepeatedComCollapsed);
    }

    if NUMERIC_GMAIL.is_match(&domain) {
        domain = "gmail.com".to_string();
        report.push(Correction::NumericGmailPrefix);
    }

    if let Some(idx) = domain.rfind('.') {
        if let Some(tld) = tables.tld_correction(&domain[idx + 1..]) {
            domain = format!("{}.{}", &domain[..idx], tld);
            report.push(Correction::TypoTld);
        }
    }

    if let Some(corrected) = tables.domain_correction(&domain) {
        domain = corrected.to_string();
        report.push(Correction::TypoDomain);
    }

    if let Some(equivalent) = tables.equivalent_domain(&domain) {
        domain = equivalent.to_string();
        report.push(Correction::EquivalentDomain);
    }

    Ok(domain)
}

/// IDNA-encodes a domain and enforces DNS label lengths.
///
/// ASCII domains are only length-checked; `xn--` labels are not decoded.
fn encode_ascii(domain: &str) -> Result<String, CanonicalizationError> {
    let encoded = if domain.is_ascii() {
        domain.to_string()
    } else {
        let mapped = map_deviations(domain);
        idna::domain_to_ascii_cow(mapped.as_bytes(), AsciiDenyList::EMPTY)
            .map_err(|_| CanonicalizationError::Encoding {
                domain: domain.to_string(),
                reason: "rejected by IDNA conversion".to_string(),
            })?
            .into_owned()
    };

    let label_count = encoded.split('.').count();
    for (idx, label) in encoded.split('.').enumerate() {
        let interior = idx + 1 < label_count;
        if (interior && label.is_empty()) || label.len() > MAX_LABEL_LEN {
            return Err(CanonicalizationError::Encoding {
                domain: domain.to_string(),
                reason: "label empty or too long".to_string(),
            });
        }
    }

    Ok(encoded)
}

/// Applies the IDNA 2003 mappings for characters UTS #46 keeps as-is.
fn map_deviations(domain: &str) -> String {
    let mut mapped = String::with_capacity(domain.len());
    for ch in domain.chars() {
        match ch {
            '\u{00DF}' => mapped.push_str("ss"),
            '\u{03C2}' => mapped.push('\u{03C3}'),
            '\u{200C}' | '\u{200D}' => {}
            _ => mapped.push(ch),
        }
    }
    mapped
}
