//! Where the script goes, and the splice that puts it there.
//!
//! This is a text heuristic, not an HTML parser: markers inside comments or
//! string literals are matched like any other, and injecting twice yields two
//! tags.

#[cfg(feature = "debug-dumps")]
pub(crate) mod debug;

const IE_CONDITIONAL: &[u8] = b"<!--[if";
const SCRIPT_OPEN: &[u8] = b"<script";
const HEAD_CLOSE: &[u8] = b"</head";

/// ASCII case-insensitive `find`. Returns a byte offset into `haystack`.
fn find_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

/// Byte offset at which the script tag should be inserted, if any.
///
/// The earlier of the first IE conditional comment (`<!--[if`) and the first
/// `<script` wins; failing both, the first `</head`. Matching ignores ASCII case.
/// The offset always sits on a char boundary since every marker starts with `<`.
pub fn injection_point(html: &str) -> Option<usize> {
    let bytes = html.as_bytes();
    let ie = find_ignore_case(bytes, IE_CONDITIONAL);
    let script = find_ignore_case(bytes, SCRIPT_OPEN);

    match (ie, script) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(i), None) | (None, Some(i)) => Some(i),
        (None, None) => find_ignore_case(bytes, HEAD_CLOSE),
    }
}

/// Splices `tag` into `html` at its [`injection_point`].
///
/// Returns `html` unchanged when it is empty or has no injection point.
pub fn inject_script(html: &str, tag: &str) -> String {
    let Some(pos) = injection_point(html) else {
        return html.to_string();
    };

    let mut result = String::with_capacity(html.len() + tag.len());
    result.push_str(&html[..pos]);
    result.push_str(tag);
    result.push_str(&html[pos..]);
    result
}
