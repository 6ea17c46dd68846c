//! Upload filename sanitization.

use unicode_normalization::UnicodeNormalization;

/// Reduce an uploaded filename to a safe single path segment.
///
/// Letters are folded to ASCII through NFKD decomposition (`ü` becomes `u`),
/// path separators become spaces, whitespace runs become `_`, everything
/// outside ASCII alphanumerics and `._-` is dropped, and leading or trailing
/// `.`/`_` are stripped. May return an empty string.
pub fn secure_filename(filename: &str) -> String {
    let spaced: String = filename
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    let filtered: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    filtered.trim_matches(|c| c == '.' || c == '_').to_string()
}
