//! Remote resource fetching.
//!
//! Only one remote resource is ever needed: `get-pip.py`, when the
//! interpreter has no pip module and the system package manager cannot
//! provide one.

pub mod http;

pub use http::HttpFetcher;

use anyhow::{anyhow, Result};
use std::cell::RefCell;

/// Capability for downloading a resource.
pub trait Fetcher {
    /// Download `url` and return the body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetcher with a canned body, for testing.
#[derive(Debug, Default)]
pub struct MockFetcher {
    body: Option<Vec<u8>>,
    requests: RefCell<Vec<String>>,
}

impl MockFetcher {
    /// Every fetch returns `body`.
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Some(body.as_bytes().to_vec()),
            requests: RefCell::new(Vec::new()),
        }
    }

    /// Every fetch fails.
    pub fn failing() -> Self {
        Self::default()
    }

    /// URLs requested so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(url.to_string());
        self.body
            .clone()
            .ok_or_else(|| anyhow!("network unreachable: {}", url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_fetcher_records_requests() {
        let fetcher = MockFetcher::with_body("pass");
        assert_eq!(fetcher.fetch("https://x/get-pip.py").unwrap(), b"pass");
        assert_eq!(fetcher.requests(), vec!["https://x/get-pip.py"]);
    }

    #[test]
    fn failing_fetcher_errors() {
        let fetcher = MockFetcher::failing();
        assert!(fetcher.fetch("https://x").is_err());
    }
}
