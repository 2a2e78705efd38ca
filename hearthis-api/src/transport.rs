//! HTTP transport.
//!
//! The client only needs two verbs, so it talks to the network through the
//! [`Transport`] trait. [`HttpTransport`] is the blocking `reqwest`
//! implementation; tests plug in their own.

use crate::error::Result;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("hearthis-api/", env!("CARGO_PKG_VERSION"));

/// Performs HTTP calls on behalf of [`HearthisClient`](crate::HearthisClient).
///
/// Implementations return the raw response body; the client decides
/// whether it is JSON.
pub trait Transport {
    /// `GET url` (query string already attached).
    fn get(&self, url: &str) -> Result<String>;

    /// `POST url` with an `application/x-www-form-urlencoded` body.
    fn post_form(&self, url: &str, body: &str) -> Result<String>;
}

/// Blocking HTTP transport backed by [`reqwest::blocking::Client`].
///
/// No retries: a failed call surfaces as [`HearthisError::Http`](crate::HearthisError::Http).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(user_agent: Option<&str>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(user_agent.unwrap_or(USER_AGENT))
            .timeout(timeout)
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self.http.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    fn post_form(&self, url: &str, body: &str) -> Result<String> {
        let resp = self
            .http
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body.to_owned())
            .send()?
            .error_for_status()?;
        Ok(resp.text()?)
    }
}
