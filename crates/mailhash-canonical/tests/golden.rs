use mailhash_canonical::{
    CanonicalEmail, Correction, DigestAlg, EmailCanonicalizer, EmailDigest, HashedEmail,
    LookupTables,
};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn canonicalizer() -> EmailCanonicalizer {
    EmailCanonicalizer::embedded().unwrap()
}

fn clean(raw: &str) -> Option<String> {
    canonicalizer().canonicalize(Some(raw)).map(|email| email.address)
}

const SAMPLES: &[&str] = &[
    " USER+Promo@GMAIL.com ",
    "u.s.e.r@gmail.com",
    "foo@gmial.con",
    "Someone@GoogleMail.com",
    "first.last-news@Yahoo.com",
    "first.last+news@yahoo.co.uk",
    "x@alice.fastmail.com",
    "@alice.fastmail.com",
    "bob@123gmail.com",
    "jane@example.com.com.com",
    "user@Bücher.example.",
    "+leading@example.com",
    "jose\u{0301}@example.org",
    "\"odd@local\"@example.net",
    "nobody@localhost",
];

#[test]
fn worked_example_hashes_canonical_form() {
    let hashed = canonicalizer()
        .digest_and_canonicalize(Some(" USER+Promo@GMAIL.com "))
        .unwrap();
    assert_eq!(hashed.email.address, "user@gmail.com");
    assert_eq!(hashed.email.domain, "gmail.com");
    assert_eq!(hashed.digest.alg, DigestAlg::Md5);
    assert_eq!(hashed.digest.hex, "cba1f2d695a5ca39ee6f343297a761a4");
}

#[test]
fn canonicalization_is_idempotent() {
    let c = canonicalizer();
    for raw in SAMPLES {
        let first = c.canonicalize(Some(raw)).unwrap();
        let second = c.canonicalize(Some(&first.address)).unwrap();
        assert_eq!(first, second, "not idempotent for {:?}", raw);
    }
}

#[test]
fn digests_are_deterministic() {
    for raw in SAMPLES {
        let a = canonicalizer().digest_and_canonicalize(Some(raw));
        let b = canonicalizer().digest_and_canonicalize(Some(raw));
        assert_eq!(a, b);
    }
}

#[test]
fn aliases_collapse() {
    assert_eq!(clean("user+tag@gmail.com"), clean("user@gmail.com"));
    assert_eq!(clean("u.s.e.r@gmail.com"), clean("user@gmail.com"));
    assert_eq!(clean("U.Ser+x@googlemail.com"), Some("user@gmail.com".into()));
}

#[test]
fn yahoo_domains_strip_at_hyphen() {
    assert_eq!(clean("user-tag@yahoo.com"), Some("user@yahoo.com".into()));
    assert_eq!(clean("user+tag@yahoo.com"), Some("user+tag@yahoo.com".into()));
    // Dots are only insignificant at gmail.
    assert_eq!(clean("first.last@yahoo.com"), Some("first.last@yahoo.com".into()));
}

#[test]
fn typos_converge_on_correct_domain() {
    let expected = clean("foo@gmail.com");
    for typo in ["foo@gmial.con", "foo@gmial.com", "foo@gmail.con", "foo@gamil.com", "foo@42gmail.com"] {
        assert_eq!(clean(typo), expected, "{}", typo);
    }
    assert_eq!(clean("foo@gmail.com.com"), expected);
}

#[test]
fn fastmail_subdomains_fold_into_local_part() {
    assert_eq!(clean("x@alice.fastmail.com"), Some("alice@fastmail.com".into()));
    assert_eq!(clean("x+y@alice.sent.com"), Some("alice@sent.com".into()));
    assert_eq!(clean("@alice.fastmail.com"), Some("@fastmail.com".into()));
    assert_eq!(clean("x@alice.example.com"), Some("x@alice.example.com".into()));
}

#[test]
fn unicode_is_normalized() {
    assert_eq!(
        clean("user@Bücher.example."),
        Some("user@xn--bcher-kva.example".into())
    );
    assert_eq!(clean("jose\u{0301}@example.org"), clean("jos\u{00e9}@example.org"));
}

#[test]
fn non_addresses_are_absent() {
    let c = canonicalizer();
    assert!(c.canonicalize(Some("not-an-email")).is_none());
    assert!(c.canonicalize(None).is_none());
    assert!(c.digest_and_canonicalize(Some("not-an-email")).is_none());
    assert!(c.digest_and_canonicalize(Some("")).is_none());
    assert!(c.digest_and_canonicalize(Some("user@bad..example")).is_none());
}

#[test]
fn sha256_digests_are_supported() {
    let hashed = canonicalizer()
        .with_alg(DigestAlg::Sha256)
        .digest_and_canonicalize(Some("User@Gmail.com"))
        .unwrap();
    assert_eq!(
        hashed.digest.hex,
        "02ee7bdc4ccf5c94808a0118eb531822f13e7e38e3810ab29ebefb2c2feb8e58"
    );
}

#[test]
fn hashed_email_serializes_to_golden_json() {
    let hashed = HashedEmail {
        digest: EmailDigest::new(DigestAlg::Md5, "abaeaa037c3592302b11ba95fa014beb").unwrap(),
        email: CanonicalEmail {
            address: "alice@fastmail.com".into(),
            domain: "fastmail.com".into(),
        },
    };

    assert_eq!(
        serde_json::to_value(&hashed).unwrap(),
        json!({
            "digest": { "alg": "md5", "hex": "abaeaa037c3592302b11ba95fa014beb" },
            "email": { "address": "alice@fastmail.com", "domain": "fastmail.com" }
        })
    );
    assert_eq!(
        canonicalizer().digest_and_canonicalize(Some("me@alice.fastmail.com")),
        Some(hashed)
    );
}

#[test]
fn report_lists_rules_in_order() {
    let result = canonicalizer()
        .canonicalize_with_report(Some("U.S.E.R+tag@gmial.con"))
        .unwrap();
    assert_eq!(result.email.address, "user@gmail.com");
    assert_eq!(
        result.report.corrections,
        vec![
            Correction::TypoTld,
            Correction::TypoDomain,
            Correction::AliasStripped,
            Correction::GmailDotsRemoved,
        ]
    );

    let clean = canonicalizer()
        .canonicalize_with_report(Some("plain@example.com"))
        .unwrap();
    assert!(clean.report.is_clean());
}

#[test]
fn tables_can_be_loaded_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tables.json");
    fs::write(
        &path,
        json!({
            "version": "test",
            "typo_domains": { "exmaple.org": "example.org" },
            "yahoo_domains": ["example.org"]
        })
        .to_string(),
    )
    .unwrap();

    let tables = LookupTables::from_path(&path).unwrap();
    assert_eq!(tables.version, "test");
    let c = EmailCanonicalizer::new(tables);
    assert_eq!(
        c.canonicalize(Some("me-news@exmaple.org")).map(|e| e.address),
        Some("me@example.org".into())
    );
    // Nothing from the embedded tables leaks in.
    assert_eq!(
        c.canonicalize(Some("me@googlemail.com")).map(|e| e.address),
        Some("me@googlemail.com".into())
    );
}

#[test]
fn missing_tables_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(LookupTables::from_path(temp_dir.path().join("absent.json")).is_err());
}
