// src/specs/developers.rs
//! Extraction rules for trending developers (`/trending/developers`).

use std::time::Instant;

use tracing::debug;
use url::Url;

use crate::core::links::{resolve, strip_query_param, user_id};
use crate::core::sanitize::{first_token, trim_enclosing_parens};
use crate::core::{Document, Node};
use crate::types::Developer;

/// Query parameter GitHub uses to scale avatars.
const AVATAR_SIZE_PARAM: &str = "s";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeveloperSelectors {
    pub item: &'static str,
    /// Anchor whose first word is the login; its href is the profile.
    pub name: &'static str,
    pub full_name: &'static str,
    pub avatar: &'static str,
}

pub const CURRENT: DeveloperSelectors = DeveloperSelectors {
    item: "article.Box-row",
    name: "p.f4 a",
    full_name: "h1.h3 a",
    avatar: "img.avatar-user",
};

pub const LEGACY: DeveloperSelectors = DeveloperSelectors {
    item: "li.user-leaderboard-list-item",
    name: ".user-leaderboard-list-name a",
    full_name: ".user-leaderboard-list-name .full-name",
    avatar: "img.leaderboard-gravatar",
};

pub fn parse_doc(html_doc: &str, base: &Url, sel: &DeveloperSelectors) -> Vec<Developer> {
    let doc = Document::parse(html_doc);
    extract(&doc.root(), base, sel)
}

pub fn extract<N: Node>(root: &N, base: &Url, sel: &DeveloperSelectors) -> Vec<Developer> {
    let t = Instant::now();
    let out: Vec<Developer> = root
        .find_all(sel.item)
        .iter()
        .map(|item| extract_item(item, base, sel))
        .collect();
    debug!("Developers: {} items in {:?}", out.len(), t.elapsed());
    out
}

fn extract_item<N: Node>(item: &N, base: &Url, sel: &DeveloperSelectors) -> Developer {
    // Accounts without a display name only render the heading anchor,
    // which then carries the login and the profile link.
    let (name_sel, full_name) = match item.find_first(sel.name) {
        Some(_) => (sel.name, trim_enclosing_parens(&item.text_of(sel.full_name))),
        None => (sel.full_name, s!()),
    };
    let display_name = first_token(&item.text_of(name_sel));
    let url = resolve(base, item.attribute_of(name_sel, "href").as_deref());
    let avatar = resolve(base, item.attribute_of(sel.avatar, "src").as_deref())
        .map(|u| strip_query_param(u, AVATAR_SIZE_PARAM));

    Developer {
        id: user_id(avatar.as_ref()),
        display_name,
        full_name,
        url,
        avatar,
    }
}
