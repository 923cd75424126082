//! Site URL canonicalization.
//!
//! Users paste whatever their browser shows: `example.com`,
//! `https://example.com/`, `https://example.com/wp-admin/`. All of them
//! must end up as the same base URL so that `{base}/wp-json/...` is valid.

/// Normalize a raw site URL to `scheme://host[/path]` with no `/wp-admin`
/// suffix and no trailing slash.
///
/// Idempotent: `normalize_site_url(&normalize_site_url(x)) == normalize_site_url(x)`.
/// No validation happens here; garbage in surfaces later as a network or
/// parse error.
pub fn normalize_site_url(raw: &str) -> String {
    let input = raw.trim();

    let (scheme, rest) = match split_scheme(input) {
        Some(parts) => parts,
        None => ("https://", input),
    };

    // Strip to a fixed point so that `/wp-admin/wp-admin/` or `//` cannot
    // leave a suffix behind for a second pass to find.
    let mut rest = rest;
    loop {
        let stripped = strip_suffix_once(rest);
        if stripped.len() == rest.len() {
            break;
        }
        rest = stripped;
    }

    format!("{}{}", scheme, rest)
}

/// Split off an `http://` or `https://` prefix (case-insensitive).
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    ["https://", "http://"].iter().find_map(|scheme| {
        let prefix = input.get(..scheme.len())?;
        if prefix.eq_ignore_ascii_case(scheme) {
            Some(input.split_at(scheme.len()))
        } else {
            None
        }
    })
}

fn strip_suffix_once(rest: &str) -> &str {
    let rest = rest.trim_end();
    if let Some(stripped) = rest
        .strip_suffix("/wp-admin/")
        .or_else(|| rest.strip_suffix("/wp-admin"))
    {
        return stripped;
    }
    rest.strip_suffix('/').unwrap_or(rest)
}
