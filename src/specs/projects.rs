// src/specs/projects.rs
//! Extraction rules for trending repositories (`/trending`).
//!
//! One `Project` per list item:
//! - name from the heading anchor, possibly split over several lines
//!   ("owner /\n  repo"), normalized to "owner/repo";
//! - description, language and stars accrued in the requested window;
//! - the contributors link plus the small "Built by" avatar strip.
//!
//! Items whose name does not split into owner and repository are skipped.

use std::time::Instant;

use tracing::debug;
use url::Url;

use crate::core::links::{resolve, user_id};
use crate::core::sanitize::{collapse_multiline, parse_locale_int, split_meta_line};
use crate::core::{Document, Node};
use crate::types::{Developer, Project};

/// Where language and star count come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stats {
    /// Each in its own element.
    Separate {
        language: &'static str,
        stars: &'static str,
    },
    /// One "Go • 105 stars today • Built by" line.
    MetaLine(&'static str),
}

/// Field → selector table. Every selector except `item` is relative to an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectSelectors {
    pub item: &'static str,
    /// Anchor holding "owner / repo"; its href is the project URL.
    pub name: &'static str,
    pub description: &'static str,
    pub stats: Stats,
    /// Anchor of the contributor strip; its href is the contributors page.
    pub contributors: &'static str,
    /// Avatar images inside the contributor strip.
    pub avatars: &'static str,
}

pub const CURRENT: ProjectSelectors = ProjectSelectors {
    item: "article.Box-row",
    name: "h2 a",
    description: "p.col-9",
    stats: Stats::Separate {
        language: r#"span[itemprop="programmingLanguage"]"#,
        stars: "span.float-sm-right",
    },
    contributors: "span.built-by a",
    avatars: "span.built-by img.avatar",
};

pub const LEGACY: ProjectSelectors = ProjectSelectors {
    item: "li.repo-list-item",
    name: ".repo-list-name a",
    description: ".repo-list-description",
    stats: Stats::MetaLine(".repo-list-meta"),
    contributors: ".repo-list-meta a",
    avatars: ".repo-list-meta img.avatar",
};

/// Split out for tests and offline use.
pub fn parse_doc(html_doc: &str, base: &Url, sel: &ProjectSelectors) -> Vec<Project> {
    let doc = Document::parse(html_doc);
    extract(&doc.root(), base, sel)
}

pub fn extract<N: Node>(root: &N, base: &Url, sel: &ProjectSelectors) -> Vec<Project> {
    let t = Instant::now();
    let items = root.find_all(sel.item);

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match extract_item(item, base, sel) {
            Some(p) => out.push(p),
            None => debug!("Projects: item {i} has no owner/repo name, skipped"),
        }
    }

    debug!("Projects: {} of {} items in {:?}", out.len(), items.len(), t.elapsed());
    out
}

fn extract_item<N: Node>(item: &N, base: &Url, sel: &ProjectSelectors) -> Option<Project> {
    let raw_name = collapse_multiline(&item.text_of(sel.name));
    let (owner, repository_name) = split_name(&raw_name)?;

    let url = resolve(base, item.attribute_of(sel.name, "href").as_deref());
    let description = s!(item.text_of(sel.description).trim());

    let (language, stars_text) = match sel.stats {
        Stats::Separate { language, stars } => (first_text(item, language), first_text(item, stars)),
        Stats::MetaLine(meta) => split_meta_line(&item.text_of(meta)),
    };
    let stars = parse_locale_int(&stars_text);

    let contributor_url = resolve(base, item.attribute_of(sel.contributors, "href").as_deref());
    let contributors = item
        .find_all(sel.avatars)
        .iter()
        .map(|img| contributor(img, base))
        .collect();

    Some(Project {
        name: join!(&owner, "/", &repository_name),
        owner,
        repository_name,
        description,
        language,
        stars,
        url,
        contributor_url,
        contributors,
    })
}

/* ---------- helpers ---------- */

/// "campoy /go-tooling-workshop" → ("campoy", "go-tooling-workshop").
/// Only the first '/' splits; both halves must be non-empty.
fn split_name(name: &str) -> Option<(String, String)> {
    let (owner, repo) = name.split_once('/')?;
    let (owner, repo) = (owner.trim(), repo.trim());
    if owner.is_empty() || repo.is_empty() {
        return None;
    }
    Some((s!(owner), s!(repo)))
}

fn first_text<N: Node>(item: &N, selector: &str) -> String {
    item.find_first(selector)
        .map(|n| s!(n.inner_text().trim()))
        .unwrap_or_default()
}

/// Partial developer from one avatar of the "Built by" strip.
/// The login doubles as the profile path, so it goes through the resolver too.
fn contributor<N: Node>(img: &N, base: &Url) -> Developer {
    let login = img
        .attribute("alt")
        .or_else(|| img.attribute("title"))
        .map(|a| s!(a.trim().trim_start_matches('@')))
        .filter(|a| !a.is_empty());

    let url = resolve(base, login.as_deref());
    let avatar = resolve(base, img.attribute("src").as_deref());

    Developer {
        id: user_id(avatar.as_ref()),
        display_name: login.unwrap_or_default(),
        full_name: s!(),
        url,
        avatar,
    }
}
