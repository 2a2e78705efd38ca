//! Playlist (set) APIs.
//!
//! # Endpoints
//!
//! ## `playlists` — `GET /{user.permalink}?key&secret&page&count&type=playlists`
//!
//! Response: JSON array of sets, each with an embedded `user` object.
//!
//! ## `playlist_tracks` — `GET /set/{playlist.permalink}/?key&secret`
//!
//! Response: JSON array of tracks.
//!
//! ## Mutations — `POST /set_ajax_add.php`, `POST /set_ajax_edit.php`
//!
//! Form-encoded bodies selected by `action`:
//!
//! | action        | endpoint            | fields                         | response      |
//! |---------------|---------------------|--------------------------------|---------------|
//! | `createnew`   | `set_ajax_add.php`  | `new_set`, `privat`, `sort_config` | ignored   |
//! | `add`         | `set_ajax_add.php`  | `track_id`, `set`              | set object    |
//! | `add`         | `set_ajax_add.php`  | `track_id`, `new_set`          | set object    |
//! | `deleteentry` | `set_ajax_add.php`  | `id`, `set_id`                 | set object    |
//! | `delete`      | `set_ajax_edit.php` | `set`                          | `DELETED`     |
//!
//! All forms carry `key` and `secret`.

use crate::client::HearthisClient;
use crate::error::Result;
use crate::paging::validate_page;
use crate::request::{
    AddTrackForm, AddTrackToNewPlaylistForm, AuthRequest, CreatePlaylistForm, DeleteEntryForm,
    DeletePlaylistForm, PlaylistsRequest,
};
use crate::transport::Transport;
use crate::types::{AuthenticatedUser, Playlist, Track};
use tracing::{debug, instrument};

const SET_ADD: &str = "/set_ajax_add.php";
const SET_EDIT: &str = "/set_ajax_edit.php";

impl<T: Transport> HearthisClient<T> {
    /// List the logged-in user's sets.
    #[instrument(skip(self, user), fields(user = %user.permalink))]
    pub fn playlists(
        &self,
        user: &AuthenticatedUser,
        page: u32,
        count: u32,
    ) -> Result<Vec<Playlist>> {
        validate_page(page, count)?;
        let path = format!("/{}", urlencoding::encode(&user.permalink));
        let query = PlaylistsRequest::new(user.credentials(), page, count);
        self.get_list(&path, &query)
    }

    /// List the tracks of a set.
    #[instrument(skip(self, user, playlist), fields(set = playlist.id))]
    pub fn playlist_tracks(
        &self,
        user: &AuthenticatedUser,
        playlist: &Playlist,
    ) -> Result<Vec<Track>> {
        let path = format!("/set/{}/", urlencoding::encode(&playlist.permalink));
        self.get_list(&path, &AuthRequest::new(user.credentials()))
    }

    /// Create an empty private set named `name`.
    #[instrument(skip(self, user))]
    pub fn create_playlist(&self, user: &AuthenticatedUser, name: &str) -> Result<()> {
        let form = CreatePlaylistForm::new(user.credentials(), name);
        let body = self.post_text(SET_ADD, &form)?;
        debug!(response = %body, "set created");
        Ok(())
    }

    /// Add `track` to an existing set. Returns the updated set.
    #[instrument(skip(self, user, track, playlist), fields(track = track.id, set = playlist.id))]
    pub fn add_track_to_playlist(
        &self,
        user: &AuthenticatedUser,
        track: &Track,
        playlist: &Playlist,
    ) -> Result<Playlist> {
        let form = AddTrackForm::new(user.credentials(), track.id, playlist.id);
        self.post_record(SET_ADD, &form)
    }

    /// Add `track` to a new set named `name`. Returns the new set.
    #[instrument(skip(self, user, track), fields(track = track.id))]
    pub fn add_track_to_new_playlist(
        &self,
        user: &AuthenticatedUser,
        track: &Track,
        name: &str,
    ) -> Result<Playlist> {
        let form = AddTrackToNewPlaylistForm::new(user.credentials(), track.id, name);
        self.post_record(SET_ADD, &form)
    }

    /// Remove `track` from a set. Returns the updated set.
    #[instrument(skip(self, user, track, playlist), fields(track = track.id, set = playlist.id))]
    pub fn delete_track_from_playlist(
        &self,
        user: &AuthenticatedUser,
        track: &Track,
        playlist: &Playlist,
    ) -> Result<Playlist> {
        let form = DeleteEntryForm::new(user.credentials(), track.id, playlist.id);
        self.post_record(SET_ADD, &form)
    }

    /// Delete a set.
    #[instrument(skip(self, user, playlist), fields(set = playlist.id))]
    pub fn delete_playlist(&self, user: &AuthenticatedUser, playlist: &Playlist) -> Result<()> {
        let form = DeletePlaylistForm::new(user.credentials(), playlist.id);
        let body = self.post_text(SET_EDIT, &form)?;
        debug!(response = %body.trim(), "set deleted");
        Ok(())
    }
}
