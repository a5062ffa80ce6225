use std::fmt;

use checksum_digest::Digest;

/// Separator between digest and filename: exactly two ASCII spaces.
pub const SEPARATOR: &str = "  ";

/// One ledger line: `<lowercase-hex-digest>  <filename>`.
///
/// Lines carry no algorithm label; which algorithm produced a line is only
/// known from the order the entries were written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    pub digest:   String,
    pub filename: String,
}

impl LedgerEntry {
    pub fn new(digest: &Digest, filename: impl Into<String>) -> Self {
        Self {
            digest:   digest.to_hex(),
            filename: filename.into(),
        }
    }

    /// Parse a single line, with or without its line terminator.
    ///
    /// Returns `None` for lines that are not `<hex>  <name>`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (digest, filename) = line.split_once(SEPARATOR)?;

        if digest.is_empty() || !digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        Some(Self {
            digest:   digest.to_string(),
            filename: filename.to_string(),
        })
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.digest, SEPARATOR, self.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checksum_digest::Algorithm;

    #[test]
    fn test_entry_format() {
        let entry = LedgerEntry::new(&Algorithm::Md5.digest(b"abc"), "abc.txt");
        assert_eq!(entry.to_string(), "900150983cd24fb0d6963f7d28e17f72  abc.txt");
    }

    #[test]
    fn test_parse_line() {
        let entry = LedgerEntry::parse("352441c2  dir/a file.txt\n").unwrap();
        assert_eq!(entry.digest, "352441c2");
        assert_eq!(entry.filename, "dir/a file.txt");

        let crlf = LedgerEntry::parse("352441c2  a.txt\r\n").unwrap();
        assert_eq!(crlf.filename, "a.txt");
    }

    #[test]
    fn test_parse_keeps_extra_spaces_in_filename() {
        let entry = LedgerEntry::parse("00000000   leading-space").unwrap();
        assert_eq!(entry.filename, " leading-space");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(LedgerEntry::parse(""), None);
        assert_eq!(LedgerEntry::parse("352441c2 a.txt"), None);
        assert_eq!(LedgerEntry::parse("  a.txt"), None);
        assert_eq!(LedgerEntry::parse("not-hex  a.txt"), None);
    }
}
