use mailhash_batch::{
    hash_csv_file, hash_rows, BatchError, BatchOptions, EmailColumn, NOT_AVAILABLE,
};
use mailhash_canonical::{DigestAlg, EmailCanonicalizer};
use std::fs;
use tempfile::TempDir;

const USER_AT_GMAIL_MD5: &str = "cba1f2d695a5ca39ee6f343297a761a4";

fn canonicalizer() -> EmailCanonicalizer {
    EmailCanonicalizer::embedded().unwrap()
}

fn run(input: &str, options: &BatchOptions) -> (Vec<Vec<String>>, mailhash_batch::BatchSummary) {
    let mut output = Vec::new();
    let summary = hash_rows(input.as_bytes(), &mut output, options, &canonicalizer()).unwrap();
    let text = String::from_utf8(output).unwrap();
    let rows = text
        .lines()
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect();
    (rows, summary)
}

#[test]
fn test_default_options_write_digest_only() {
    let (rows, summary) = run(
        "email,name\n USER+Promo@GMAIL.com ,Ann\nnot-an-email,Bob\n",
        &BatchOptions::default(),
    );

    assert_eq!(rows[0], vec!["hashed_email"]);
    assert_eq!(rows[1], vec![USER_AT_GMAIL_MD5]);
    assert_eq!(rows[2], vec![NOT_AVAILABLE]);
    assert_eq!(summary.rows, 2);
    assert_eq!(summary.hashed, 1);
    assert_eq!(summary.not_email, 1);
    assert!(summary.output_path.is_none());
}

#[test]
fn test_all_columns_in_header_mode() {
    let options = BatchOptions {
        include_passthrough_columns: true,
        include_original_and_clean_email: true,
        ..BatchOptions::default()
    };
    let (rows, summary) = run(
        "email,name,city\nu.s.e.r@gmail.com,Ann,Oslo\nnope,Bob,Rome\nuser@bad..example,Cy,Lima\nuser+x@gmail.com,Di,Kyiv\n",
        &options,
    );

    assert_eq!(
        rows[0],
        vec!["hashed_email", "clean_email", "original_email", "name", "city"]
    );
    assert_eq!(
        rows[1],
        vec![USER_AT_GMAIL_MD5, "user@gmail.com", "u.s.e.r@gmail.com", "Ann", "Oslo"]
    );
    assert_eq!(rows[2], vec!["n/a", "n/a", "nope", "Bob", "Rome"]);
    assert_eq!(rows[3], vec!["n/a", "n/a", "user@bad..example", "Cy", "Lima"]);
    assert_eq!(
        rows[4],
        vec![USER_AT_GMAIL_MD5, "user@gmail.com", "user+x@gmail.com", "Di", "Kyiv"]
    );
    assert_eq!(summary.rows, 4);
    assert_eq!(summary.not_email, 2);
}

#[test]
fn test_headerless_mode() {
    let options = BatchOptions {
        has_header_row: false,
        include_passthrough_columns: true,
        ..BatchOptions::default()
    };
    let (rows, summary) = run("user@gmail.com,1\nuser+x@gmail.com,2,extra\n", &options);

    assert_eq!(summary.rows, 2);
    assert_eq!(rows[0], vec![USER_AT_GMAIL_MD5, "1"]);
    assert_eq!(rows[1], vec![USER_AT_GMAIL_MD5, "2", "extra"]);
}

#[test]
fn test_row_order_is_preserved() {
    let mut input = String::from("email\n");
    let mut expected = Vec::new();
    for i in 0..200 {
        if i % 3 == 0 {
            input.push_str(&format!("row{}\n", i));
            expected.push("n/a".to_string());
        } else {
            input.push_str(&format!("user{}@example.com\n", i));
            expected.push(format!("user{}@example.com", i));
        }
    }
    let options = BatchOptions {
        include_original_and_clean_email: true,
        ..BatchOptions::default()
    };

    let (rows, summary) = run(&input, &options);
    assert_eq!(summary.rows, 200);
    let clean: Vec<String> = rows[1..].iter().map(|row| row[1].clone()).collect();
    assert_eq!(clean, expected);
}

#[test]
fn test_named_email_column() {
    let options = BatchOptions {
        email_column: EmailColumn::Name("mail".into()),
        include_passthrough_columns: true,
        ..BatchOptions::default()
    };
    let (rows, _) = run("id,mail\n7,user@gmail.com\n", &options);

    assert_eq!(rows[0], vec!["hashed_email", "id"]);
    assert_eq!(rows[1], vec![USER_AT_GMAIL_MD5, "7"]);
}

#[test]
fn test_unknown_column_is_fatal() {
    let options = BatchOptions {
        email_column: EmailColumn::Name("mail".into()),
        ..BatchOptions::default()
    };
    let mut output = Vec::new();
    let err = hash_rows("email\na@b.com\n".as_bytes(), &mut output, &options, &canonicalizer())
        .unwrap_err();
    assert!(matches!(err, BatchError::MissingColumn(_)));
}

#[test]
fn test_empty_input_in_header_mode() {
    let mut output = Vec::new();
    let err = hash_rows("".as_bytes(), &mut output, &BatchOptions::default(), &canonicalizer())
        .unwrap_err();
    assert!(matches!(err, BatchError::EmptyInput));
}

#[test]
fn test_short_row_is_not_an_email() {
    let options = BatchOptions {
        has_header_row: false,
        email_column: EmailColumn::Index(1),
        include_original_and_clean_email: true,
        ..BatchOptions::default()
    };
    let (rows, summary) = run("only-one-field\n", &options);
    assert_eq!(summary.not_email, 1);
    assert_eq!(rows[0], vec!["n/a", "n/a", ""]);
}

#[test]
fn test_sha256_digests() {
    let mut output = Vec::new();
    hash_rows(
        "user@gmail.com\n".as_bytes(),
        &mut output,
        &BatchOptions {
            has_header_row: false,
            ..BatchOptions::default()
        },
        &canonicalizer().with_alg(DigestAlg::Sha256),
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(output).unwrap().trim(),
        "02ee7bdc4ccf5c94808a0118eb531822f13e7e38e3810ab29ebefb2c2feb8e58"
    );
}

#[test]
fn test_file_round_trip_with_default_output_path() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("emails.csv");
    fs::write(&input_path, "email,name\nuser@gmail.com,Ann\n").unwrap();

    let summary = hash_csv_file(&input_path, &BatchOptions::default(), &canonicalizer()).unwrap();

    let expected_path = temp_dir.path().join("emails_hashed.csv");
    assert_eq!(summary.output_path.as_deref(), Some(expected_path.as_path()));
    assert_eq!(
        fs::read_to_string(&expected_path).unwrap(),
        format!("hashed_email\n{}\n", USER_AT_GMAIL_MD5)
    );
}

#[test]
fn test_missing_input_file_creates_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("absent.csv");

    let err = hash_csv_file(&input_path, &BatchOptions::default(), &canonicalizer()).unwrap_err();
    assert!(matches!(err, BatchError::Io(_)));
    assert!(!temp_dir.path().join("absent_hashed.csv").exists());
}
