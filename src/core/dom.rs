// src/core/dom.rs
//! Narrow, library-agnostic view over a parsed HTML tree.
//!
//! Extractors only ever need four things from a DOM: find all matches of a CSS
//! selector, find the first one, read an attribute and read the text. `Node`
//! captures exactly that; `scraper::ElementRef` is the concrete backend.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::error::Result;

pub trait Node: Sized {
    /// Every descendant matching `selector`, in document order.
    fn find_all(&self, selector: &str) -> Vec<Self>;

    fn find_first(&self, selector: &str) -> Option<Self> {
        self.find_all(selector).into_iter().next()
    }

    /// `None` when the attribute is not present (an empty value is `Some("")`).
    fn attribute(&self, name: &str) -> Option<String>;

    /// All descendant text, unmodified.
    fn inner_text(&self) -> String;

    /// Concatenated text of every match, like reading a whole selection.
    fn text_of(&self, selector: &str) -> String {
        self.find_all(selector).iter().map(Self::inner_text).collect()
    }

    /// Attribute of the first match.
    fn attribute_of(&self, selector: &str, name: &str) -> Option<String> {
        self.find_first(selector).and_then(|n| n.attribute(name))
    }
}

impl<'a> Node for ElementRef<'a> {
    fn find_all(&self, selector: &str) -> Vec<Self> {
        match Selector::parse(selector) {
            Ok(sel) => {
                let found: Vec<Self> = ElementRef::select(self, &sel).collect();
                found
            }
            Err(e) => {
                // A bad selector is a typo in a selector table, not page drift
                warn!("invalid selector {selector:?}: {e}");
                Vec::new()
            }
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(String::from)
    }

    fn inner_text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

/// A parsed page. Owns the tree; extractors borrow `root()`.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    /// Raw body bytes. Undecodable input is a document-level failure.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::parse(std::str::from_utf8(bytes)?))
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}
