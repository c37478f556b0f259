//! Email command implementation.

use crate::output::{self, EmailOutcome};
use mailhash_canonical::{EmailCanonicalizer, EmailDigest};
use std::io::{self, BufRead};

pub fn run(
    canonicalizer: &EmailCanonicalizer,
    address: Option<String>,
    explain: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match address {
        Some(address) => print_outcome(&hash_one(canonicalizer, &address), explain, json)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                print_outcome(&hash_one(canonicalizer, &line), explain, json)?;
            }
        }
    }
    Ok(())
}

fn hash_one<'a>(canonicalizer: &EmailCanonicalizer, raw: &'a str) -> EmailOutcome<'a> {
    match canonicalizer.canonicalize_with_report(Some(raw)) {
        Ok(result) => EmailOutcome {
            raw,
            digest: Some(EmailDigest::compute(canonicalizer.alg(), &result.email)),
            clean: Some(result.email.address),
            report: result.report,
            rejection: None,
        },
        Err((err, report)) => EmailOutcome {
            raw,
            digest: None,
            clean: None,
            report,
            rejection: Some(err),
        },
    }
}

fn print_outcome(
    outcome: &EmailOutcome<'_>,
    explain: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string(&output::format_json(outcome, explain))?);
    } else {
        println!("{}", output::format_text(outcome));
        if explain {
            println!("{}", output::format_explanation(outcome));
        }
    }
    Ok(())
}
