//! Output formatting utilities.

use mailhash_batch::NOT_AVAILABLE;
use mailhash_canonical::{CanonicalizationError, CorrectionReport, EmailDigest};
use serde_json::{json, Value};

/// Outcome of hashing one address, as printed by the `email` command.
pub struct EmailOutcome<'a> {
    pub raw: &'a str,
    pub digest: Option<EmailDigest>,
    pub clean: Option<String>,
    pub report: CorrectionReport,
    pub rejection: Option<CanonicalizationError>,
}

/// Formats an outcome as `hash: ..., clean: ...`.
pub fn format_text(outcome: &EmailOutcome<'_>) -> String {
    format!(
        "hash: {}, clean: {}",
        outcome
            .digest
            .as_ref()
            .map(|d| d.hex.as_str())
            .unwrap_or(NOT_AVAILABLE),
        outcome.clean.as_deref().unwrap_or(NOT_AVAILABLE)
    )
}

/// Formats the applied rules (or the rejection reason) on one line.
pub fn format_explanation(outcome: &EmailOutcome<'_>) -> String {
    if let Some(err) = &outcome.rejection {
        return format!("  rejected: {}", err);
    }
    if outcome.report.is_clean() {
        return "  rules: none".to_string();
    }
    let rules: Vec<String> = outcome
        .report
        .corrections
        .iter()
        .map(|c| format!("{:?}", c))
        .collect();
    format!("  rules: {}", rules.join(", "))
}

/// Formats an outcome as a JSON object.
pub fn format_json(outcome: &EmailOutcome<'_>, explain: bool) -> Value {
    let mut value = json!({
        "input": outcome.raw,
        "hash": outcome.digest.as_ref().map(|d| d.hex.clone()),
        "alg": outcome.digest.as_ref().map(|d| d.alg.name()),
        "clean": outcome.clean,
    });
    if explain {
        value["corrections"] = json!(outcome.report.corrections);
        value["rejected"] = json!(outcome.rejection.as_ref().map(|e| e.to_string()));
    }
    value
}
