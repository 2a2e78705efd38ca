//! Request descriptions.
//!
//! One struct per outbound parameter set. Field order is wire order: the
//! query encoder walks fields as declared, so reordering a struct changes
//! the generated query string. `Option` fields left as `None` (and blank
//! strings) are dropped by the encoder rather than sent empty.

use serde::Serialize;

/// Credentials for `/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> LoginRequest<'a> {
    pub fn new(email: &'a str, password: &'a str) -> Self {
        Self { email, password }
    }
}

/// Optional filters for the feed listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilter {
    /// Feed type, e.g. `popular` or `new`.
    pub kind: Option<String>,
    /// Category slug, e.g. `drumandbass`.
    pub category: Option<String>,
    /// Duration filter in minutes.
    pub duration: Option<u32>,
}

/// Optional filters for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Result type, e.g. `tracks`, `user` or `playlists`.
    pub kind: Option<String>,
    /// Duration filter in minutes.
    pub duration: Option<u32>,
}

/// Query for `/feed/`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedRequest<'a> {
    key: &'a str,
    secret: &'a str,
    #[serde(rename = "type")]
    kind: Option<&'a str>,
    category: Option<&'a str>,
    duration: Option<u32>,
    page: u32,
    count: u32,
}

impl<'a> FeedRequest<'a> {
    pub fn new(
        (key, secret): (&'a str, &'a str),
        filter: &'a FeedFilter,
        page: u32,
        count: u32,
    ) -> Self {
        Self {
            key,
            secret,
            kind: filter.kind.as_deref(),
            category: filter.category.as_deref(),
            duration: filter.duration,
            page,
            count,
        }
    }
}

/// Query for `/search/`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    key: &'a str,
    secret: &'a str,
    t: &'a str,
    #[serde(rename = "type")]
    kind: Option<&'a str>,
    duration: Option<u32>,
    page: u32,
    count: u32,
}

impl<'a> SearchRequest<'a> {
    pub fn new(
        (key, secret): (&'a str, &'a str),
        query: &'a str,
        filter: &'a SearchFilter,
        page: u32,
        count: u32,
    ) -> Self {
        Self {
            key,
            secret,
            t: query,
            kind: filter.kind.as_deref(),
            duration: filter.duration,
            page,
            count,
        }
    }
}

/// Authenticated, paginated query without filters (category tracks).
#[derive(Debug, Clone, Serialize)]
pub struct ListingRequest<'a> {
    key: &'a str,
    secret: &'a str,
    page: u32,
    count: u32,
}

impl<'a> ListingRequest<'a> {
    pub fn new((key, secret): (&'a str, &'a str), page: u32, count: u32) -> Self {
        Self {
            key,
            secret,
            page,
            count,
        }
    }
}

/// Query for the logged-in user's sets: `/{permalink}?…&type=playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistsRequest<'a> {
    key: &'a str,
    secret: &'a str,
    page: u32,
    count: u32,
    #[serde(rename = "type")]
    kind: &'static str,
}

impl<'a> PlaylistsRequest<'a> {
    pub fn new((key, secret): (&'a str, &'a str), page: u32, count: u32) -> Self {
        Self {
            key,
            secret,
            page,
            count,
            kind: "playlists",
        }
    }
}

/// Which listing of an artist to fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistTracksKind {
    /// Tracks uploaded by the artist.
    #[default]
    Tracks,
    /// Tracks the artist liked.
    Likes,
}

/// Query for `/{permalink}/`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistTracksRequest<'a> {
    key: &'a str,
    secret: &'a str,
    #[serde(rename = "type")]
    kind: ArtistTracksKind,
    page: u32,
    count: u32,
}

impl<'a> ArtistTracksRequest<'a> {
    pub fn new(
        (key, secret): (&'a str, &'a str),
        kind: ArtistTracksKind,
        page: u32,
        count: u32,
    ) -> Self {
        Self {
            key,
            secret,
            kind,
            page,
            count,
        }
    }
}

/// Bare authentication query (set contents).
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest<'a> {
    key: &'a str,
    secret: &'a str,
}

impl<'a> AuthRequest<'a> {
    pub fn new((key, secret): (&'a str, &'a str)) -> Self {
        Self { key, secret }
    }
}

/// Form for `set_ajax_add.php` creating an empty private set.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistForm<'a> {
    action: &'static str,
    key: &'a str,
    secret: &'a str,
    new_set: &'a str,
    privat: u8,
    sort_config: u8,
}

impl<'a> CreatePlaylistForm<'a> {
    pub fn new((key, secret): (&'a str, &'a str), name: &'a str) -> Self {
        Self {
            action: "createnew",
            key,
            secret,
            new_set: name,
            privat: 1,
            sort_config: 1,
        }
    }
}

/// Form for `set_ajax_add.php` adding a track to an existing set.
#[derive(Debug, Clone, Serialize)]
pub struct AddTrackForm<'a> {
    action: &'static str,
    key: &'a str,
    secret: &'a str,
    track_id: u64,
    set: u64,
}

impl<'a> AddTrackForm<'a> {
    pub fn new((key, secret): (&'a str, &'a str), track_id: u64, set: u64) -> Self {
        Self {
            action: "add",
            key,
            secret,
            track_id,
            set,
        }
    }
}

/// Form for `set_ajax_add.php` adding a track to a set created on the fly.
#[derive(Debug, Clone, Serialize)]
pub struct AddTrackToNewPlaylistForm<'a> {
    action: &'static str,
    key: &'a str,
    secret: &'a str,
    track_id: u64,
    new_set: &'a str,
}

impl<'a> AddTrackToNewPlaylistForm<'a> {
    pub fn new((key, secret): (&'a str, &'a str), track_id: u64, name: &'a str) -> Self {
        Self {
            action: "add",
            key,
            secret,
            track_id,
            new_set: name,
        }
    }
}

/// Form for `set_ajax_add.php` removing a track from a set.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteEntryForm<'a> {
    action: &'static str,
    key: &'a str,
    secret: &'a str,
    id: u64,
    set_id: u64,
}

impl<'a> DeleteEntryForm<'a> {
    pub fn new((key, secret): (&'a str, &'a str), track_id: u64, set_id: u64) -> Self {
        Self {
            action: "deleteentry",
            key,
            secret,
            id: track_id,
            set_id,
        }
    }
}

/// Form for `set_ajax_edit.php` deleting a set.
#[derive(Debug, Clone, Serialize)]
pub struct DeletePlaylistForm<'a> {
    action: &'static str,
    key: &'a str,
    secret: &'a str,
    set: u64,
}

impl<'a> DeletePlaylistForm<'a> {
    pub fn new((key, secret): (&'a str, &'a str), set: u64) -> Self {
        Self {
            action: "delete",
            key,
            secret,
            set,
        }
    }
}
