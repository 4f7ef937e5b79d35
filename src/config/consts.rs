// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://github.com";
pub const USER_AGENT: &str = concat!("gh_trending/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Page paths, relative to the base origin
pub const TRENDING_PATH: &str = "trending";
pub const DEVELOPERS_PATH: &str = "developers";

// Query parameters understood by the trending pages
pub const PARAM_SINCE: &str = "since";
pub const PARAM_LANGUAGE: &str = "l";

// Fixtures (refresh-fixtures)
pub const DEFAULT_FIXTURE_DIR: &str = "tests/fixtures";
pub const FIXTURE_REPOSITORIES: &str = "github.com_trending.html";
pub const FIXTURE_DEVELOPERS: &str = "github.com_trending_developers.html";
