//! Removing block markers while keeping the markup they wrap.

/// Remove every block marker comment from `document` and trim the result.
///
/// A marker comment is `<!--`, optional whitespace, `wp:` or `/wp:`, then
/// anything up to the first `-->`. This is a textual substitution independent
/// of [`crate::parse`]: inner markup of paired blocks stays in place, only the
/// comments go. Comments that only form once another marker is removed are
/// removed as well, so the output contains no marker comment.
///
/// Runs in one pass over the input. The output never contains a complete
/// marker comment, so a `-->` can only close the earliest opening still
/// pending in it, and removing that opening truncates the output.
pub fn strip_markers(document: &str) -> String {
    let mut out = String::with_capacity(document.len());
    // Offset in `out` of the earliest `<!-- wp:` waiting for its `-->`.
    let mut pending: Option<usize> = None;

    for ch in document.chars() {
        out.push(ch);
        match ch {
            ':' if pending.is_none() => pending = opening_before_end(&out),
            '>' if out.ends_with("-->") => {
                if let Some(start) = pending.take() {
                    out.truncate(start);
                }
            }
            _ => {}
        }
    }

    out.trim().to_string()
}

/// Start of a `<!--\s*/?wp:` opening that ends exactly at the end of `out`.
fn opening_before_end(out: &str) -> Option<usize> {
    let rest = out.strip_suffix("wp:")?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    let rest = rest.trim_end().strip_suffix("<!--")?;
    Some(rest.len())
}
