//! Login and artist APIs.
//!
//! # Endpoints
//!
//! ## `login` — `GET /login?email=…&password=…`
//!
//! Response: the account object including the `key`/`secret` pair used by
//! every authenticated call.
//!
//! ```json
//! { "id": "12345678", "username": "mymail", "720p_url": "https://…",
//!   "track_count": "3", "premium": false, "key": "…", "secret": "…" }
//! ```
//!
//! ## `single_artist` — `GET /{permalink}`
//!
//! Public profile, no credentials.
//!
//! ## `artist_tracks` — `GET /{permalink}/?key&secret&type&page&count`
//!
//! `type` is `tracks` or `likes`. Response: JSON array of tracks.

use crate::client::HearthisClient;
use crate::error::Result;
use crate::paging::validate_page;
use crate::request::{ArtistTracksKind, ArtistTracksRequest, LoginRequest};
use crate::transport::Transport;
use crate::types::{Artist, AuthenticatedUser, Track};
use tracing::instrument;

impl<T: Transport> HearthisClient<T> {
    /// Log in with email and password.
    ///
    /// # Errors
    ///
    /// - [`HearthisError::Api`](crate::HearthisError::Api) — wrong credentials
    /// - [`HearthisError::ShapeMismatch`](crate::HearthisError::ShapeMismatch) —
    ///   the service answered with something other than an account object
    #[instrument(skip(self, password))]
    pub fn login(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.get_record("/login", &LoginRequest::new(email, password))
    }

    /// Fetch an artist profile by permalink.
    #[instrument(skip(self))]
    pub fn single_artist(&self, permalink: &str) -> Result<Artist> {
        let path = format!("/{}", urlencoding::encode(permalink));
        self.get_record(&path, &())
    }

    /// List an artist's uploads or likes.
    #[instrument(skip(self, user), fields(user = %user.permalink))]
    pub fn artist_tracks(
        &self,
        user: &AuthenticatedUser,
        permalink: &str,
        kind: ArtistTracksKind,
        page: u32,
        count: u32,
    ) -> Result<Vec<Track>> {
        validate_page(page, count)?;
        let path = format!("/{}/", urlencoding::encode(permalink));
        let query = ArtistTracksRequest::new(user.credentials(), kind, page, count);
        self.get_list(&path, &query)
    }
}
