// src/config/options.rs
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use super::consts::*;
use crate::error::Result;

/// What the caller is asking the site for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Repositories,
    Developers,
    /// Language menus live on the repositories page.
    Languages,
}

/// Time window tokens accepted by `?since=`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Since {
    Daily,
    Weekly,
    Monthly,
}

impl Since {
    pub fn as_str(&self) -> &'static str {
        match self {
            Since::Daily => "daily",
            Since::Weekly => "weekly",
            Since::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Since {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Since {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" | "today" => Ok(Since::Daily),
            "weekly" | "week" => Ok(Since::Weekly),
            "monthly" | "month" => Ok(Since::Monthly),
            other => Err(format!("Unknown time window: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOptions {
    /// Origin used to resolve relative links and to build fetch targets.
    /// Always ends with '/', so a path prefix survives joining.
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            // BASE_URL is a constant; a parse failure here is a typo in consts.rs
            base_url: normalize_base(Url::parse(BASE_URL).expect("BASE_URL is a valid URL")),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientOptions {
    /// Point the client at another deployment of the same page templates
    /// (e.g. a GitHub Enterprise host).
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.base_url = normalize_base(Url::parse(base)?);
        Ok(self)
    }

    pub fn with_user_agent(mut self, ua: &str) -> Self {
        self.user_agent = s!(ua);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn normalize_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = join!(url.path(), "/");
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_github_root() {
        let opts = ClientOptions::default();
        assert_eq!(opts.base_url.as_str(), "https://github.com/");
        assert_eq!(opts.timeout, Duration::from_secs(15));
        assert!(opts.user_agent.starts_with("gh_trending/"));
    }

    #[test]
    fn base_prefix_gets_trailing_slash() {
        let opts = ClientOptions::default()
            .with_base_url("https://ghe.example.test/github?x=1#top")
            .unwrap();
        assert_eq!(opts.base_url.as_str(), "https://ghe.example.test/github/");
    }

    #[test]
    fn bad_base_is_an_error() {
        assert!(ClientOptions::default().with_base_url("not a url").is_err());
    }

    #[test]
    fn since_round_trips_through_str() {
        for s in [Since::Daily, Since::Weekly, Since::Monthly] {
            assert_eq!(s.as_str().parse::<Since>().unwrap(), s);
        }
        assert_eq!("Today".parse::<Since>().unwrap(), Since::Daily);
        assert!("yearly".parse::<Since>().is_err());
    }
}
