// src/target.rs
// =============================================================================
// This module deals with the sites the user wants checked ("targets").
//
// Two jobs:
// - Decide whether a string looks like a bare domain (www.example.com)
// - Read a batch file with one domain per line
//
// The checker services want a bare domain, not a URL: "http://..." or
// ".../path" would be glued onto their own query strings and produce garbage,
// so both are rejected up front.
// =============================================================================

use regex::Regex;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

// One run of allowed host characters, a dot, then a 2-6 letter lowercase TLD.
// Anchored on both ends so nothing may follow the TLD.
static DOMAIN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}$").expect("domain pattern is valid")
});

/// Returns true when `candidate` looks like `www.example.com`.
///
/// Examples:
///   "www.google.com"        -> true
///   "http://www.google.com" -> false (scheme)
///   "www.google.com/maps"   -> false (path)
///   "not_a_url"             -> false (no TLD)
pub fn is_valid_url(candidate: &str) -> bool {
    !candidate.is_empty() && DOMAIN_SHAPE.is_match(candidate)
}

/// Reads targets from a file, one per line.
pub fn read_targets(path: &Path) -> io::Result<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(parse_targets(&contents))
}

// Splits file contents into targets: whitespace around each line is dropped
// and blank lines are skipped. No validation happens here.
fn parse_targets(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_accepts_plain_domains() {
        assert!(is_valid_url("www.google.com"));
        assert!(is_valid_url("apple.com"));
        assert!(is_valid_url("my-site.example.museum"));
        assert!(is_valid_url("bbc.co.uk"));
    }

    #[test]
    fn test_rejects_scheme_and_path() {
        assert!(!is_valid_url("http://www.google.com"));
        assert!(!is_valid_url("https://apple.com"));
        assert!(!is_valid_url("www.google.com/maps"));
        assert!(!is_valid_url("www.google.com?q=rust"));
    }

    #[test]
    fn test_rejects_bad_tld() {
        assert!(!is_valid_url("not_a_url"));
        assert!(!is_valid_url("example.c"));
        assert!(!is_valid_url("example.abcdefg"));
        assert!(!is_valid_url("example.COM"));
        assert!(!is_valid_url("example.c0m"));
    }

    #[test]
    fn test_rejects_short_or_empty() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("a.com"));
        assert!(!is_valid_url(" www.google.com"));
    }

    #[test]
    fn test_parse_targets_skips_blanks() {
        let contents = "www.google.com\n\n   apple.com  \n\t\nbbc.co.uk";
        assert_eq!(
            parse_targets(contents),
            vec!["www.google.com", "apple.com", "bbc.co.uk"]
        );
    }

    #[test]
    fn test_read_targets_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"www.google.com\r\napple.com\r\n").unwrap();

        let targets = read_targets(file.path()).unwrap();
        assert_eq!(targets, vec!["www.google.com", "apple.com"]);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let error = read_targets(Path::new("/definitely/not/here/sites.txt")).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }
}
