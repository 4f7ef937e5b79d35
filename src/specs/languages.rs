// src/specs/languages.rs
//! Extraction rules for the language filter menus on `/trending`.
//!
//! The page carries two menus with identical anchor markup: the full
//! dropdown of every known language and a short list of languages trending
//! right now. Only the entry selector differs. Menu order is significant and
//! kept as-is.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::core::links::resolve;
use crate::core::{Document, Node};
use crate::types::Language;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageSelectors {
    /// One anchor per language facet.
    pub entry: &'static str,
}

/// Full dropdown. Excludes the date-range menu that shares the same markup.
pub const ALL: LanguageSelectors = LanguageSelectors {
    entry: "#languages-menuitems a.select-menu-item",
};

pub const TRENDING: LanguageSelectors = LanguageSelectors {
    entry: "#trending-languages-menuitems a.select-menu-item",
};

fn url_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"trending/([^/?#]+)").expect("language token pattern"))
}

pub fn parse_doc(html_doc: &str, base: &Url, sel: &LanguageSelectors) -> Vec<Language> {
    let doc = Document::parse(html_doc);
    extract(&doc.root(), base, sel)
}

pub fn extract<N: Node>(root: &N, base: &Url, sel: &LanguageSelectors) -> Vec<Language> {
    let out: Vec<Language> = root
        .find_all(sel.entry)
        .iter()
        .map(|a| extract_entry(a, base))
        .collect();
    debug!("Languages: {} entries for {:?}", out.len(), sel.entry);
    out
}

fn extract_entry<N: Node>(anchor: &N, base: &Url) -> Language {
    let href = anchor.attribute("href");
    Language {
        name: s!(anchor.inner_text().trim()),
        url_name: url_name(href.as_deref().unwrap_or("")),
        // Always absolute, whatever form the page uses
        url: resolve(base, href.as_deref()),
    }
}

/// "/trending/web-ontology-language?since=daily" → "web-ontology-language".
/// No `trending/<token>` segment (e.g. "All languages") → "".
pub fn url_name(href: &str) -> String {
    url_name_re()
        .captures(href)
        .and_then(|caps| caps.get(1))
        .map(|m| s!(m.as_str()))
        .unwrap_or_default()
}
