// src/fixtures.rs
//! Refresh the offline test pages from the live site.
//!
//! If the remote markup changed, the fixture-driven tests will most likely
//! fail afterwards; that is the point. Adjust the selector tables in `specs`
//! until they pass again.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;
use url::Url;

use crate::config::Mode;
use crate::config::consts::{FIXTURE_DEVELOPERS, FIXTURE_REPOSITORIES};
use crate::core::Fetcher;
use crate::error::Result;
use crate::query::build_target;

/// Download the repositories and developers pages into `dir`.
/// Returns each written file with its size in bytes.
pub fn refresh<F: Fetcher>(fetcher: &F, base: &Url, dir: &Path) -> Result<Vec<(PathBuf, usize)>> {
    fs::create_dir_all(dir)?;

    let pages = [
        (Mode::Repositories, FIXTURE_REPOSITORIES),
        (Mode::Developers, FIXTURE_DEVELOPERS),
    ];

    let mut written = Vec::with_capacity(pages.len());
    for (mode, file_name) in pages {
        let url = build_target(base, mode, None, None)?;
        info!("Fixtures: fetching {url}");
        let body = fetcher.fetch(&url)?;

        let path = dir.join(file_name);
        fs::write(&path, body.as_bytes())?;
        info!("Fixtures: wrote {} bytes to {}", body.len(), path.display());
        written.push((path, body.len()));
    }
    Ok(written)
}
