//! Classification of apt stderr output into benign warnings and real errors.
//!
//! apt writes a fair amount of noise to stderr even on success: idempotent
//! "already installed" notices, locale warnings, debconf grumbling about a
//! missing stdin. The classifier scans stderr line by line against a fixed
//! allow-list of known-benign substrings; only text with at least one
//! unexplained line counts as a real failure.

/// Substrings of apt stderr lines that do not indicate a real failure.
///
/// Immutable, defined at compile time. Matching is per line: a line is
/// benign if it contains any of these substrings.
const BENIGN_PATTERNS: &[&str] = &[
    // idempotent installs
    "is already the newest version",
    // debconf has no terminal under a piped shell
    "dpkg-preconfigure: unable to re-open stdin",
    "debconf: delaying package configuration",
    "Extracting templates from packages",
    // scripted apt use
    "apt does not have a stable CLI interface",
    // locale noise on fresh systems
    "perl: warning:",
    "Setting locale failed",
    "Falling back to",
    "are supported and installed on your system",
    "LANGUAGE =",
    "LC_ALL =",
    "LC_CTYPE =",
    "LANG =",
];

/// Return `true` if a single stderr line matches the benign allow-list.
fn is_benign_line(line: &str) -> bool {
    BENIGN_PATTERNS.iter().any(|pattern| line.contains(pattern))
}

/// Classify apt stderr text.
///
/// Returns `None` when every non-blank line matches a benign pattern (the
/// invocation did not really fail), or `Some` with the original text
/// unchanged when at least one line is unexplained.
#[must_use]
pub fn filter_benign(stderr: &str) -> Option<&str> {
    let all_benign = stderr
        .lines()
        .filter(|line| !line.trim().is_empty())
        .all(is_benign_line);
    if all_benign { None } else { Some(stderr) }
}
