use mailhash_canonical::EmailCanonicalizer;

fn main() {
    let canonicalizer = EmailCanonicalizer::embedded().expect("embedded tables");
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| " USER+Promo@GMAIL.com ".to_string());

    match canonicalizer.digest_and_canonicalize(Some(&raw)) {
        Some(hashed) => println!("{} {}", hashed.digest, hashed.email),
        None => {
            eprintln!("not an email address: {:?}", raw);
            std::process::exit(1);
        }
    }
}
