//! Pure filename-identity derivation.

/// Derives the identity: last `/`-separated segment, query stripped, and it
/// must contain a dot to count as a file.
///
/// Deliberately no case folding, percent-decoding, or trailing-slash
/// handling; the input is used as-is so the same string always maps to the
/// same identity.
pub fn identity_from_url(url: &str) -> String {
    let last = url.rsplit('/').next().unwrap_or(url);
    let name = last.split('?').next().unwrap_or(last);
    if name.contains('.') {
        name.to_string()
    } else {
        String::new()
    }
}
