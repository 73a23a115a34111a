//! Debug dump helpers for development / troubleshooting.

use std::io::Write;

/// Writes the page before and after injection to the temp dir.
pub(crate) fn debug_dump_injection(name: &str, original: &str, injected: &str) -> std::io::Result<()> {
    let dir = std::env::temp_dir();
    for (suffix, body) in [("original", original), ("injected", injected)] {
        let path = dir.join(format!("jsinject_rs-{name}-{suffix}.html"));
        let mut f = std::fs::File::create(&path)?;
        f.write_all(body.as_bytes())?;
        eprintln!("JSINJECT_DEBUG: wrote {suffix} page to {}", path.display());
    }

    match super::injection_point(original) {
        Some(pos) => eprintln!("JSINJECT_DEBUG: injected at byte {pos} of {}", original.len()),
        None => eprintln!("JSINJECT_DEBUG: no injection point in {name}, page left unchanged"),
    }
    Ok(())
}

/// Flattens a URL into something usable as a file stem (`example.com_docs_index`).
pub(crate) fn dump_name(url: &url::Url) -> String {
    let raw = format!("{}{}", url.host_str().unwrap_or("local"), url.path());
    let mut name: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect();
    while name.ends_with('_') {
        name.pop();
    }
    name
}
