use std::path::PathBuf;

use checksum_digest::{Algorithm, DEFAULT_CHUNK_SIZE};
use clap::{ArgAction, Parser};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "checksum",
    version = env!("CARGO_PKG_VERSION"),
    long_version = long_version(),
    about = "File checksum",
    long_about = None
)]
pub struct App {
    #[arg(help = "File to checksum")]
    pub file: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = default_algs(),
        help = r#"List of used hash algorithm (e.g. --algs="md5,sha1" --algs="sha256")"#
    )]
    pub algs: Vec<String>,

    #[arg(long = "append-to", value_name = "PATH", help = "File to append checksums to")]
    pub append_to: Option<PathBuf>,

    #[arg(long, value_name = "DIGEST", help = "Verify checksum of the file")]
    pub verify: Option<String>,

    #[arg(
        long,
        requires = "append_to",
        help = "Rewrite the ledger in place instead of through a temporary file"
    )]
    pub in_place: bool,

    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::value_parser!(usize),
        help = "Read size used while hashing"
    )]
    pub chunk_size: usize,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl App {
    /// Requested algorithm names with blanks dropped, so `--algs=` asks for
    /// nothing.
    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algs.iter().map(String::as_str).filter(|name| !name.is_empty()).collect()
    }

    /// Verification candidate, if one was given and is not blank.
    pub fn verify_candidate(&self) -> Option<&str> {
        self.verify.as_deref().filter(|candidate| !candidate.is_empty())
    }
}

fn default_algs() -> Vec<String> {
    Algorithm::ALL.iter().map(|alg| alg.as_str().to_string()).collect()
}

/// `<version> - build <revision> @ <date>`, with the revision shortened to
/// seven characters.
pub fn long_version() -> String {
    let revision = option_env!("CHECKSUM_BUILD_REVISION").unwrap_or("none");
    let date = option_env!("CHECKSUM_BUILD_DATE").unwrap_or("unknown");
    let short: String = revision.chars().take(7).collect();
    format!("{} - build {short} @ {date}", env!("CARGO_PKG_VERSION"))
}
