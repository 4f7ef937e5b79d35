// src/core/links.rs
//! Link handling shared by all extractors: resolving hrefs against the
//! configured origin and reading account ids out of avatar URLs.

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;
use url::Url;

/// Resolve an attribute value against `base`.
///
/// `None` means the attribute was missing and resolves to `None` without
/// parsing anything. A value that does not parse as a URL reference is also
/// `None`; that is a field-level miss, not an error.
pub fn resolve(base: &Url, candidate: Option<&str>) -> Option<Url> {
    let raw = candidate?;
    match base.join(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            trace!("unresolvable link {raw:?}: {e}");
            None
        }
    }
}

fn avatar_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"u/([0-9]+)").expect("avatar id pattern"))
}

/// "https://avatars.githubusercontent.com/u/94096?s=96&v=4" → 94096.
/// No avatar, no `u/<digits>` in the path, or an overflowing id → 0.
pub fn user_id(avatar: Option<&Url>) -> u64 {
    let Some(avatar) = avatar else { return 0 };
    avatar_id_re()
        .captures(avatar.path())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Drop every `key=...` pair from the query. An emptied query is removed
/// entirely so the URL does not end in a bare '?'.
pub fn strip_query_param(mut url: Url, key: &str) -> Url {
    if url.query().is_none() {
        return url;
    }
    // Raw pairs, so the kept ones keep their original encoding
    let kept = url
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some(key))
        .collect::<Vec<_>>()
        .join("&");

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&kept));
    }
    url
}
