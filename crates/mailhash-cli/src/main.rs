//! mailhash CLI - canonicalize and hash email addresses, one at a time or per CSV row.

use clap::{Parser, Subcommand};
use mailhash_canonical::DigestAlg;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{email, file};

#[derive(Parser)]
#[command(name = "mailhash")]
#[command(about = "Clean up and hash email addresses")]
#[command(after_help = "Example: mailhash email example@gmail.com\n\
    or mailhash file emails.csv -o emails_hashed.csv")]
struct Cli {
    /// Lookup tables JSON file (default: built-in tables)
    #[arg(long, global = true, env = "MAILHASH_TABLES")]
    tables: Option<PathBuf>,
    /// Digest algorithm: md5 or sha256
    #[arg(long, global = true, default_value = "md5")]
    alg: DigestAlg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean and hash one address (or each line of stdin if not provided)
    Email {
        /// Email address to clean and hash
        address: Option<String>,
        /// Show which normalization rules were applied
        #[arg(long)]
        explain: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clean and hash the email column of a CSV file
    File {
        /// Input CSV file; the first column holds the address unless --column is given
        input: PathBuf,
        /// Output file (default: <input>_hashed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Expect no input/output CSV header row
        #[arg(long)]
        no_header: bool,
        /// Copy the non-email columns to the output untouched
        #[arg(long)]
        passthrough: bool,
        /// Also output the email before and after cleaning (sensitive data)
        #[arg(long)]
        include_emails: bool,
        /// Email column, by header name or zero-based index
        #[arg(long)]
        column: Option<String>,
        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = commands::build_canonicalizer(cli.tables.as_deref(), cli.alg).and_then(
        |canonicalizer| match cli.command {
            Commands::Email {
                address,
                explain,
                json,
            } => email::run(&canonicalizer, address, explain, json),
            Commands::File {
                input,
                output,
                no_header,
                passthrough,
                include_emails,
                column,
                json,
            } => file::run(
                &canonicalizer,
                file::FileArgs {
                    input,
                    output,
                    no_header,
                    passthrough,
                    include_emails,
                    column,
                },
                json,
            ),
        },
    );

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
