//! Client for the hearthis.at v2 API.
//!
//! Every call follows the same path:
//!
//! 1. Validate pagination (list endpoints only)
//! 2. Build a request description and encode it as query string or form body
//! 3. Hand the URL to the [`Transport`]
//! 4. Parse the body as JSON, reject error envelopes, marshal into records
//!
//! # Response format
//!
//! Successful list endpoints answer with a bare JSON array, single-record
//! endpoints with a JSON object. Failures come back as an envelope:
//!
//! ```json
//! { "success": false, "message": "..." }
//! ```
//!
//! which is mapped to [`HearthisError::Api`](crate::HearthisError::Api).

use crate::error::{HearthisError, Result};
use crate::marshal::{Record, marshal, marshal_list};
use crate::query::{encode, with_query};
use crate::transport::{HttpTransport, Transport};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Production API root.
pub const BASE_URL: &str = "https://api-v2.hearthis.at";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for [`HearthisClient::with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without trailing slash.
    pub base_url: String,
    /// Overrides the default `hearthis-api/<version>` user agent.
    pub user_agent: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_owned(),
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// hearthis.at API client.
///
/// Stateless apart from its configuration: credentials travel with each
/// call through the [`AuthenticatedUser`](crate::types::AuthenticatedUser)
/// passed in. Endpoint methods live in the `user`, `track`, `search` and
/// `playlist` modules as `impl HearthisClient` blocks.
#[derive(Debug, Clone)]
pub struct HearthisClient<T = HttpTransport> {
    transport: T,
    base_url: String,
}

impl HearthisClient<HttpTransport> {
    /// Create a client for the production API.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.user_agent.as_deref(), config.timeout)?;
        Ok(Self::with_transport(transport, &config.base_url))
    }
}

impl<T: Transport> HearthisClient<T> {
    /// Create a client over an explicit transport (useful for testing).
    pub fn with_transport(transport: T, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Return a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET` an absolute URL and return the body verbatim.
    pub(crate) fn get_text(&self, url: &str) -> Result<String> {
        // The query carries the secret; log the path only.
        debug!(url = url.split('?').next().unwrap_or(url), "GET");
        self.transport.get(url)
    }

    /// `GET path?query` and parse the body as JSON.
    ///
    /// An empty body reads as `null`.
    pub(crate) fn get_json<Q: Serialize>(&self, path: &str, query: &Q) -> Result<Value> {
        let body = self.get_text(&with_query(&self.url(path), query)?)?;
        parse_body(&body)
    }

    /// `GET` a single record.
    pub(crate) fn get_record<R: Record, Q: Serialize>(&self, path: &str, query: &Q) -> Result<R> {
        let json = self.get_json(path, query)?;
        check_envelope(&json)?;
        marshal(&json)
    }

    /// `GET` a list of records. An empty body is an empty list.
    pub(crate) fn get_list<R: Record, Q: Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Vec<R>> {
        let json = self.get_json(path, query)?;
        if json.is_null() {
            return Ok(Vec::new());
        }
        check_envelope(&json)?;
        marshal_list(&json)
    }

    /// `POST` a form and return the body verbatim.
    pub(crate) fn post_text<F: Serialize>(&self, path: &str, form: &F) -> Result<String> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        self.transport.post_form(&url, &encode(form)?)
    }

    /// `POST` a form and marshal the answer as a single record.
    pub(crate) fn post_record<R: Record, F: Serialize>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<R> {
        let json = parse_body(&self.post_text(path, form)?)?;
        check_envelope(&json)?;
        marshal(&json)
    }
}

fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

/// Reject `{"success": false, ...}` envelopes.
pub(crate) fn check_envelope(json: &Value) -> Result<()> {
    let Some(success) = json.get("success") else {
        return Ok(());
    };
    let failed = match success {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_u64() == Some(0),
        Value::String(s) => s == "0" || s.eq_ignore_ascii_case("false"),
        _ => false,
    };
    if !failed {
        return Ok(());
    }
    let message = ["message", "msg", "error"]
        .iter()
        .find_map(|key| json.get(key).and_then(Value::as_str))
        .unwrap_or("unknown error")
        .to_owned();
    warn!(reason = %message, "API returned an error envelope");
    Err(HearthisError::Api { message })
}
