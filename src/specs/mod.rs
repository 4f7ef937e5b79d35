// src/specs/mod.rs
//! # Page extraction rules
//!
//! Page-specific extraction rules for the trending pages. Each page module encodes
//! *where the ground truth lives in the HTML* and *how to read it tolerantly*.
//!
//! ## What lives here
//! - **Selector tables**: one static struct per page mapping field → CSS
//!   selector. When the site layout drifts, these tables are what changes.
//! - **Extraction** over any [`Node`](crate::core::Node), producing typed
//!   records (`Project`, `Developer`, `Language`).
//! - **Light normalization** via `core::sanitize` and `core::links`.
//!
//! ## What does **not** live here
//! - **Fetching**: the `Trending` client calls `core::net` and hands us a tree.
//! - **Output formatting**: see `csv` and the CLI.
//!
//! ## Conventions & invariants
//! - A missing field degrades to its default (empty string, `None`, 0).
//! - A structurally broken list item is skipped; the rest of the page is kept.
//! - No matching items is an empty `Vec`, never an error.
//! - Document order is preserved.
//!
//! ## Layouts
//! - `CURRENT`: `article.Box-row` listings, language and stars in their own
//!   elements.
//! - `LEGACY`: `repo-list-item` / `user-leaderboard-list-item` listings with a
//!   bullet-separated meta line.
//!
//! Specs are testable **offline** against captured fixtures (`tests/fixtures`).
pub mod developers;
pub mod languages;
pub mod projects;

pub use developers::DeveloperSelectors;
pub use languages::LanguageSelectors;
pub use projects::{ProjectSelectors, Stats};

/// Every selector the client needs, for one generation of the site layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorTable {
    pub projects: ProjectSelectors,
    pub developers: DeveloperSelectors,
    /// Full language dropdown.
    pub languages: LanguageSelectors,
    /// Short list of currently trending languages.
    pub trending_languages: LanguageSelectors,
}

impl SelectorTable {
    pub const CURRENT: SelectorTable = SelectorTable {
        projects: projects::CURRENT,
        developers: developers::CURRENT,
        languages: languages::ALL,
        trending_languages: languages::TRENDING,
    };

    pub const LEGACY: SelectorTable = SelectorTable {
        projects: projects::LEGACY,
        developers: developers::LEGACY,
        languages: languages::ALL,
        trending_languages: languages::TRENDING,
    };
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::CURRENT
    }
}
