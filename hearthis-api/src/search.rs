//! Search API.
//!
//! Endpoint: `GET /search/?key&secret&t&type&duration&page&count`
//!
//! - `t` — search text
//! - `type` — optional result type (`tracks`, `user`, `playlists`)
//! - `duration` — optional duration filter in minutes
//!
//! Response: JSON array of tracks. When the search quota is used up the
//! service answers with a JSON object instead of an array; that sentinel
//! is reported as an empty result, not as an error.

use crate::client::HearthisClient;
use crate::error::Result;
use crate::marshal::marshal_list;
use crate::paging::validate_page;
use crate::request::{SearchFilter, SearchRequest};
use crate::transport::Transport;
use crate::types::{AuthenticatedUser, Track};
use serde_json::Value;
use tracing::{instrument, warn};

impl<T: Transport> HearthisClient<T> {
    /// Search tracks.
    ///
    /// Results keep the service's relevance order. An exhausted search
    /// limit yields an empty list.
    ///
    /// # Errors
    ///
    /// - [`HearthisError::PageCountExceeded`](crate::HearthisError::PageCountExceeded) —
    ///   `count` above 20, raised before any request
    /// - [`HearthisError::Http`](crate::HearthisError::Http) — network failure
    #[instrument(skip(self, user), fields(user = %user.permalink))]
    pub fn search(
        &self,
        user: &AuthenticatedUser,
        query: &str,
        filter: &SearchFilter,
        page: u32,
        count: u32,
    ) -> Result<Vec<Track>> {
        validate_page(page, count)?;
        let request = SearchRequest::new(user.credentials(), query, filter, page, count);
        let json = self.get_json("/search/", &request)?;
        match json {
            Value::Null => Ok(Vec::new()),
            Value::Object(ref sentinel) => {
                let reason = sentinel
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                warn!(reason, "search limit reached, returning no results");
                Ok(Vec::new())
            }
            _ => marshal_list(&json),
        }
    }
}
