// src/types.rs
//! Records produced by the extractors. Plain values: built once per list item,
//! never mutated afterwards, compared field by field.

use serde::Serialize;
use url::Url;

/// A single trending repository as listed on the trending page.
///
/// `stars` is what the repository gained in the requested time window, not
/// its all-time total. `contributors` is the avatar sample shown on the
/// listing, not the full contributor set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    /// "owner/repository", whitespace-normalized.
    pub name: String,
    pub owner: String,
    pub repository_name: String,
    pub description: String,
    /// Empty when the site could not determine a language.
    pub language: String,
    pub stars: u64,
    pub url: Option<Url>,
    pub contributor_url: Option<Url>,
    pub contributors: Vec<Developer>,
}

/// A trending developer or organisation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Developer {
    /// Numeric account id taken from the avatar URL; 0 if unknown.
    pub id: u64,
    /// Login handle, e.g. "torvalds".
    pub display_name: String,
    /// Real name without the surrounding parentheses; may be empty.
    pub full_name: String,
    pub url: Option<Url>,
    /// Avatar without the `s` size parameter.
    pub avatar: Option<Url>,
}

/// One entry of a language filter menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Language {
    /// Human readable label, e.g. "Web Ontology Language".
    pub name: String,
    /// Filter token, e.g. "web-ontology-language". Empty for "All languages".
    pub url_name: String,
    pub url: Option<Url>,
}
