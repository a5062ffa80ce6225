use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use checksum_digest::{DigestSet, StreamOptions, digest_file_named, verify_file};
use checksum_ledger::{LedgerOptions, WriteMode};
use tracing::{info, warn};

use super::App;

const LABEL_WIDTH: usize = 12;

/// Run one invocation, writing user-facing output to `out`.
pub fn run(app: &App, out: &mut impl Write) -> Result<()> {
    let file = app.file.trim();
    let options = StreamOptions::new().chunk_size(app.chunk_size);

    if let Some(candidate) = app.verify_candidate() {
        if let Some(ledger) = &app.append_to {
            warn!(ledger = %ledger.display(), "--verify given, ledger left untouched");
        }
        let verified = verify_file(file, candidate, &options).context("verify")?;
        writeln!(out, "Validated with {}", verified.algorithm)?;
        return Ok(());
    }

    let digests = digest_file_named(file, &app.algorithm_names(), &options).context("compute")?;

    match &app.append_to {
        Some(ledger) => append(ledger, file, &digests, app.in_place).context("append"),
        None => write_checksums(out, &digests),
    }
}

fn append(ledger: &Path, file: &str, digests: &DigestSet, in_place: bool) -> Result<()> {
    let mode = if in_place { WriteMode::InPlace } else { WriteMode::Atomic };
    let added = checksum_ledger::append(ledger, file, digests, &LedgerOptions::new().mode(mode))?;
    info!(ledger = %ledger.display(), added, "checksums recorded");
    Ok(())
}

/// `Checksums:` followed by one right-aligned `label: hex` line per digest.
pub fn write_checksums(out: &mut impl Write, digests: &DigestSet) -> Result<()> {
    writeln!(out, "Checksums:")?;
    for (algorithm, digest) in digests {
        writeln!(out, "{:>width$}: {}", algorithm, digest, width = LABEL_WIDTH)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const EMPTY_MD5: &str = "d41d8cd98f00b204e9800998ecf8427e";
    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn app(args: &[&str]) -> App {
        let mut argv = vec!["checksum"];
        argv.extend_from_slice(args);
        App::try_parse_from(argv).unwrap()
    }

    fn invoke(args: &[&str]) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run(&app(args), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn fixture(dir: &TempDir, name: &str, content: &[u8]) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_prints_requested_digests() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");

        let (result, out) = invoke(&["--algs", "sha256,md5", &file]);

        result.unwrap();
        assert_eq!(
            out,
            format!("Checksums:\n         md5: {EMPTY_MD5}\n      sha256: {EMPTY_SHA256}\n")
        );
    }

    #[test]
    fn test_default_prints_every_algorithm() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "abc", b"abc");

        let (result, out) = invoke(&[&file]);

        result.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[1], "       crc32: 352441c2");
        assert!(lines[7].starts_with("  blake2b512: ba80a53f"));
    }

    #[test]
    fn test_empty_algs_prints_header_only() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "abc", b"abc");

        let (result, out) = invoke(&["--algs=", &file]);

        result.unwrap();
        assert_eq!(out, "Checksums:\n");
    }

    #[test]
    fn test_file_argument_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");

        let (result, out) = invoke(&["--algs", "md5", &format!("  {file}\t")]);

        result.unwrap();
        assert!(out.contains(EMPTY_MD5));
    }

    #[test]
    fn test_append_twice_duplicates_entries() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "abc", b"abc");
        let ledger = dir.path().join("SUMS");
        let ledger_arg = ledger.to_string_lossy().into_owned();

        for _ in 0..2 {
            let (result, out) = invoke(&["--algs=md5,sha1", "--append-to", &ledger_arg, &file]);
            result.unwrap();
            assert!(out.is_empty());
        }

        let content = fs::read_to_string(&ledger).unwrap();
        let expected = format!(
            "900150983cd24fb0d6963f7d28e17f72  {file}\na9993e364706816aba3e25717850c26c9cd0d89d  {file}\n"
        );
        assert_eq!(content, expected.repeat(2));
    }

    #[test]
    fn test_in_place_append() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");
        let ledger = dir.path().join("SUMS");
        fs::write(&ledger, "ffff  other").unwrap();
        let ledger_arg = ledger.to_string_lossy().into_owned();

        let (result, _) =
            invoke(&["--algs", "md5", "--append-to", &ledger_arg, "--in-place", &file]);

        result.unwrap();
        assert_eq!(
            fs::read_to_string(&ledger).unwrap(),
            format!("ffff  other\n{EMPTY_MD5}  {file}\n")
        );
    }

    #[test]
    fn test_verify_reports_algorithm() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");

        let (result, out) = invoke(&["--verify", EMPTY_SHA256, &file]);
        result.unwrap();
        assert_eq!(out, "Validated with sha256\n");

        let (result, out) = invoke(&["--verify", &format!(" {EMPTY_MD5}\n"), &file]);
        result.unwrap();
        assert_eq!(out, "Validated with md5\n");
    }

    #[test]
    fn test_verify_mismatch_fails_in_verify_stage() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");

        let (result, out) = invoke(&["--verify", "deadbeef", &file]);

        let err = result.unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:#}").starts_with("verify: invalid checksum"));
    }

    #[test]
    fn test_verify_leaves_ledger_untouched() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");
        let ledger = dir.path().join("SUMS");
        let ledger_arg = ledger.to_string_lossy().into_owned();

        let (result, out) = invoke(&["--verify", EMPTY_MD5, "--append-to", &ledger_arg, &file]);

        result.unwrap();
        assert_eq!(out, "Validated with md5\n");
        assert!(!ledger.exists());
    }

    #[test]
    fn test_unsupported_algorithm_reported_before_file() {
        let (result, _) = invoke(&["--algs", "md4", "/definitely/not/here"]);

        let err = result.unwrap_err();
        assert_eq!(format!("{err:#}"), "compute: unsupported algorithm: md4");
    }

    #[test]
    fn test_missing_file_names_stage_and_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let missing_arg = missing.to_string_lossy().into_owned();

        let (result, _) = invoke(&[&missing_arg]);

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with(&format!("compute: file: {missing_arg}: ")));
    }

    #[test]
    fn test_unwritable_ledger_fails_in_append_stage() {
        let dir = TempDir::new().unwrap();
        let file = fixture(&dir, "empty", b"");
        let ledger = dir.path().join("no-such-dir").join("SUMS");
        let ledger_arg = ledger.to_string_lossy().into_owned();

        let (result, _) = invoke(&["--algs", "md5", "--append-to", &ledger_arg, &file]);

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.starts_with("append: ledger: failed to write"));
    }

    #[test]
    fn test_write_checksums_empty_set() {
        let mut out = Vec::new();
        write_checksums(&mut out, &DigestSet::new()).unwrap();
        assert_eq!(out, b"Checksums:\n");
    }
}
