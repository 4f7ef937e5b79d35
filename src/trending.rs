// src/trending.rs
//! Client façade: build target → fetch → parse → extract.
//!
//! Fetch failures are the only errors a caller sees. Everything that goes
//! wrong inside the page degrades to defaults inside `specs`.
//!
//! ```no_run
//! use gh_trending::{Since, Trending};
//!
//! let trend = Trending::new()?;
//! let projects = trend.projects(Some(Since::Daily), Some("go"))?;
//! for p in projects {
//!     println!("{} ({} stars)", p.name, p.stars);
//! }
//! # Ok::<(), gh_trending::TrendingError>(())
//! ```

use tracing::info;
use url::Url;

use crate::config::{ClientOptions, Mode, Since};
use crate::core::{Document, Fetcher, HttpFetcher};
use crate::error::Result;
use crate::query::build_target;
use crate::specs::{self, LanguageSelectors, SelectorTable};
use crate::types::{Developer, Language, Project};

pub struct Trending<F: Fetcher = HttpFetcher> {
    options: ClientOptions,
    selectors: SelectorTable,
    fetcher: F,
}

impl Trending<HttpFetcher> {
    /// Client for https://github.com with default timeout and user agent.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options)?;
        Ok(Self::with_fetcher(options, fetcher))
    }
}

impl<F: Fetcher> Trending<F> {
    pub fn with_fetcher(options: ClientOptions, fetcher: F) -> Self {
        Self {
            options,
            selectors: SelectorTable::default(),
            fetcher,
        }
    }

    /// Swap the selector table, e.g. `SelectorTable::LEGACY` for old snapshots.
    pub fn selectors(mut self, selectors: SelectorTable) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn base_url(&self) -> &Url {
        &self.options.base_url
    }

    /// Trending repositories. `since: None` leaves the window to the site;
    /// `language` is a `Language::url_name` token, empty or `None` for all.
    pub fn projects(&self, since: Option<Since>, language: Option<&str>) -> Result<Vec<Project>> {
        let doc = self.load(Mode::Repositories, since, language)?;
        let out = specs::projects::extract(&doc.root(), self.base_url(), &self.selectors.projects);
        info!("Projects: {} extracted", out.len());
        Ok(out)
    }

    /// Trending developers, filtered the same way as `projects`.
    pub fn developers(&self, since: Option<Since>, language: Option<&str>) -> Result<Vec<Developer>> {
        let doc = self.load(Mode::Developers, since, language)?;
        let out = specs::developers::extract(&doc.root(), self.base_url(), &self.selectors.developers);
        info!("Developers: {} extracted", out.len());
        Ok(out)
    }

    /// Every language the site offers as a filter.
    pub fn languages(&self) -> Result<Vec<Language>> {
        self.language_menu(&self.selectors.languages)
    }

    /// Languages the site currently lists as trending.
    pub fn trending_languages(&self) -> Result<Vec<Language>> {
        self.language_menu(&self.selectors.trending_languages)
    }

    fn language_menu(&self, sel: &LanguageSelectors) -> Result<Vec<Language>> {
        let doc = self.load(Mode::Languages, None, None)?;
        let out = specs::languages::extract(&doc.root(), self.base_url(), sel);
        info!("Languages: {} extracted", out.len());
        Ok(out)
    }

    fn load(&self, mode: Mode, since: Option<Since>, language: Option<&str>) -> Result<Document> {
        let target = build_target(self.base_url(), mode, since, language)?;
        let body = self.fetcher.fetch(&target)?;
        Ok(Document::parse(&body))
    }
}
