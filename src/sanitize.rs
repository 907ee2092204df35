//! Path-segment sanitization for output directory naming.

/// Characters removed outright before whitespace collapsing.
const ILLEGAL_CHARS: [char; 10] = ['/', '\\', '?', '%', '*', ':', '|', '"', '<', '>'];

/// Sanitizes arbitrary text into a string safe for a filesystem path segment.
///
/// Applied in fixed order: illegal characters are deleted (not replaced),
/// the result is trimmed, every run of whitespace collapses to a single
/// `-`, and the output is lowercased. Pure and idempotent; empty input
/// (or all-illegal input) yields an empty string - callers must tolerate
/// an empty segment. No length limit is imposed.
#[must_use]
pub fn sanitize(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|ch| !ILLEGAL_CHARS.contains(ch))
        .collect();

    let mut out = String::with_capacity(stripped.len());
    let mut prev_ws = false;
    for ch in stripped.trim().chars() {
        if ch.is_whitespace() {
            if !prev_ws {
                out.push('-');
                prev_ws = true;
            }
        } else {
            out.extend(ch.to_lowercase());
            prev_ws = false;
        }
    }
    out
}
