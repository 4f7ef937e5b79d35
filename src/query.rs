// src/query.rs
use url::Url;

use crate::config::consts::{DEVELOPERS_PATH, PARAM_LANGUAGE, PARAM_SINCE, TRENDING_PATH};
use crate::config::{Mode, Since};
use crate::error::Result;

/// Build the page to fetch for `mode`.
///
/// Filters are opt-in: `since` is only sent when given, and `language` only
/// when non-empty. No default time window is substituted, so `None` means
/// "whatever the site itself defaults to". Language menus are read from the
/// unfiltered repositories page, so `Mode::Languages` ignores both filters.
pub fn build_target(
    base: &Url,
    mode: Mode,
    since: Option<Since>,
    language: Option<&str>,
) -> Result<Url> {
    let path = match mode {
        Mode::Repositories | Mode::Languages => s!(TRENDING_PATH),
        Mode::Developers => join!(TRENDING_PATH, "/", DEVELOPERS_PATH),
    };
    let mut url = base.join(&path)?;

    if mode == Mode::Languages {
        return Ok(url);
    }

    let mut params: Vec<(&str, &str)> = Vec::with_capacity(2);
    if let Some(since) = since {
        params.push((PARAM_SINCE, since.as_str()));
    }
    if let Some(lang) = language.map(str::trim).filter(|l| !l.is_empty()) {
        params.push((PARAM_LANGUAGE, lang));
    }

    // Only touch the query when there is something to put in it; an empty
    // serializer would still leave a trailing '?'.
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}
