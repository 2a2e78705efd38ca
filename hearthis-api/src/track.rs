//! Feed, category and waveform APIs.
//!
//! # Endpoints
//!
//! ## `feeds` — `GET /feed/?key&secret&type&category&duration&page&count`
//!
//! `type`, `category` and `duration` are optional filters and are left out
//! of the query when unset. Response: JSON array of tracks.
//!
//! ## `categories` — `GET /categories/`
//!
//! ```json
//! [ { "id": "acoustic", "name": "Acoustic",
//!     "url": "https://hearthis.at/categories/acoustic/",
//!     "api_url": "https://api-v2.hearthis.at/categories/acoustic/" } ]
//! ```
//!
//! ## `category_tracks` — `GET /categories/{id}?key&secret&page&count`
//!
//! Response: JSON array of tracks.
//!
//! ## `waveform_data` — `GET {track.waveform_data}`
//!
//! The body (a JSON array of amplitudes) is returned untouched.

use crate::client::{HearthisClient, check_envelope};
use crate::error::{HearthisError, Result};
use crate::paging::validate_page;
use crate::request::{FeedFilter, FeedRequest, ListingRequest};
use crate::transport::Transport;
use crate::types::{AuthenticatedUser, Category, Track};
use serde_json::Value;
use tracing::instrument;

impl<T: Transport> HearthisClient<T> {
    /// List the feed, optionally filtered by type, category and duration.
    #[instrument(skip(self, user), fields(user = %user.permalink))]
    pub fn feeds(
        &self,
        user: &AuthenticatedUser,
        filter: &FeedFilter,
        page: u32,
        count: u32,
    ) -> Result<Vec<Track>> {
        validate_page(page, count)?;
        let query = FeedRequest::new(user.credentials(), filter, page, count);
        self.get_list("/feed/", &query)
    }

    /// List all genre categories.
    ///
    /// Categories are flat records taken as sent; they do not go through
    /// the coercion table.
    #[instrument(skip(self))]
    pub fn categories(&self) -> Result<Vec<Category>> {
        let json = self.get_json("/categories/", &())?;
        check_envelope(&json)?;
        let items = match json {
            Value::Null => return Ok(Vec::new()),
            Value::Array(items) => items,
            other => return Err(HearthisError::shape("Category", "array", &other)),
        };
        items
            .into_iter()
            .map(|item| -> Result<Category> {
                match item {
                    Value::Object(_) => Ok(serde_json::from_value(item)?),
                    other => Err(HearthisError::shape("Category", "object", &other)),
                }
            })
            .collect()
    }

    /// List the tracks of one category.
    #[instrument(skip(self, user, category), fields(category = %category.id))]
    pub fn category_tracks(
        &self,
        user: &AuthenticatedUser,
        category: &Category,
        page: u32,
        count: u32,
    ) -> Result<Vec<Track>> {
        validate_page(page, count)?;
        let path = format!("/categories/{}", urlencoding::encode(&category.id));
        let query = ListingRequest::new(user.credentials(), page, count);
        self.get_list(&path, &query)
    }

    /// Download the waveform samples of a track.
    ///
    /// Returns the raw body; an empty string when the track has no
    /// waveform URL.
    #[instrument(skip(self, track), fields(track = track.id))]
    pub fn waveform_data(&self, track: &Track) -> Result<String> {
        if track.waveform_data.trim().is_empty() {
            return Ok(String::new());
        }
        self.get_text(&track.waveform_data)
    }
}
