use md5::Md5;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::canonicalizer::CanonicalEmail;
use crate::validation::ValidationError;

static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-f]+$").expect("invalid regex"));

/// Supported digest algorithms for canonical addresses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// MD5 (the default, shared with existing hashed lists).
    #[default]
    Md5,
    /// SHA-256.
    #[serde(rename = "sha-256")]
    Sha256,
}

impl DigestAlg {
    /// Length of the hex encoding produced by this algorithm.
    pub fn hex_len(self) -> usize {
        match self {
            DigestAlg::Md5 => 32,
            DigestAlg::Sha256 => 64,
        }
    }

    /// Stable name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            DigestAlg::Md5 => "md5",
            DigestAlg::Sha256 => "sha-256",
        }
    }
}

impl fmt::Display for DigestAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlg {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(DigestAlg::Md5),
            "sha256" | "sha-256" => Ok(DigestAlg::Sha256),
            _ => Err(ValidationError::PatternMismatch {
                field: "digest_alg",
                value: s.to_string(),
            }),
        }
    }
}

/// Algorithm + digest bytes, encoded as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailDigest {
    /// Digest algorithm.
    pub alg: DigestAlg,
    /// Lowercase hex digest.
    pub hex: String,
}

impl EmailDigest {
    /// Constructs a validated digest.
    pub fn new(alg: DigestAlg, hex: impl Into<String>) -> Result<Self, ValidationError> {
        let hex = hex.into();
        if hex.len() != alg.hex_len() || !HEX.is_match(&hex) {
            return Err(ValidationError::PatternMismatch {
                field: "digest",
                value: hex,
            });
        }
        Ok(EmailDigest { alg, hex })
    }

    /// Hashes the UTF-8 bytes of a canonical address.
    pub fn compute(alg: DigestAlg, email: &CanonicalEmail) -> Self {
        Self::of_bytes(alg, email.address.as_bytes())
    }

    pub(crate) fn of_bytes(alg: DigestAlg, bytes: &[u8]) -> Self {
        let hex = match alg {
            DigestAlg::Md5 => hex::encode(Md5::digest(bytes)),
            DigestAlg::Sha256 => hex::encode(Sha256::digest(bytes)),
        };
        EmailDigest { alg, hex }
    }
}

impl fmt::Display for EmailDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}
