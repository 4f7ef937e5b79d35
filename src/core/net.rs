// src/core/net.rs
// Document retrieval. The only place that does I/O on behalf of the client.

use std::time::Instant;

use reqwest::blocking::Client;
use tracing::{debug, info};
use url::Url;

use crate::config::ClientOptions;
use crate::error::{Result, TrendingError};

/// Anything that can hand back the body of a page.
/// Tests plug in a fixture-backed implementation.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Blocking HTTP GET with the configured user agent and timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ClientOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(opts.timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        let t = Instant::now();
        info!("GET {url}");

        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TrendingError::Status {
                url: s!(url.as_str()),
                status: status.as_u16(),
            });
        }

        let body = resp.text()?;
        debug!("GET {url}: {} bytes in {:?}", body.len(), t.elapsed());
        Ok(body)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<String> {
        (**self).fetch(url)
    }
}
