//! Typed records returned by the hearthis.at API.
//!
//! Each record implements [`Record`] with a static [`Shape`] naming the raw
//! keys it is built from. Records are only ever produced by the marshaller
//! (or read back from their own serialized form), never patched afterwards.

use crate::de;
use crate::marshal::{Field, Record, Shape};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

static USER: Shape = Shape {
    name: "User",
    fields: &[
        Field::value("id"),
        Field::value("permalink"),
        Field::value("username"),
        Field::value("uri"),
        Field::value("permalink_url"),
        Field::value("avatar_url"),
        Field::value("caption"),
    ],
};

/// Uploader or owner embedded in [`Track`] and [`Playlist`].
///
/// API JSON: the `user` object of a track or set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    #[serde(deserialize_with = "de::text")]
    pub permalink: String,
    #[serde(deserialize_with = "de::text")]
    pub username: String,
    #[serde(deserialize_with = "de::text")]
    pub uri: String,
    #[serde(deserialize_with = "de::text")]
    pub permalink_url: String,
    #[serde(deserialize_with = "de::text")]
    pub avatar_url: String,
    #[serde(deserialize_with = "de::text")]
    pub caption: String,
}

impl Record for User {
    fn shape() -> &'static Shape {
        &USER
    }
}

static AUTHENTICATED_USER: Shape = Shape {
    name: "AuthenticatedUser",
    fields: &[
        Field::value("id"),
        Field::value("permalink"),
        Field::value("username"),
        Field::value("caption"),
        Field::value("uri"),
        Field::value("permalink_url"),
        Field::value("thumb_url"),
        Field::value("avatar_url"),
        Field::value("720p_url"),
        Field::value("background_url"),
        Field::value("description"),
        Field::value("geo"),
        Field::value("track_count"),
        Field::value("playlist_count"),
        Field::value("likes_count"),
        Field::value("followers_count"),
        Field::value("following_count"),
        Field::value("counts"),
        Field::value("following"),
        Field::value("premium"),
        Field::value("allow_push"),
        Field::value("is_fan"),
        Field::value("featured_sound"),
        Field::value("email"),
        Field::value("locale"),
        Field::value("secret"),
        Field::value("key"),
    ],
};

/// The account returned by [`HearthisClient::login`](crate::HearthisClient::login).
///
/// Carries the `key`/`secret` pair every authenticated call sends along.
/// A new login yields a new value; nothing mutates an existing one.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticatedUser {
    pub id: u64,
    #[serde(deserialize_with = "de::text")]
    pub permalink: String,
    #[serde(deserialize_with = "de::text")]
    pub username: String,
    #[serde(deserialize_with = "de::text")]
    pub caption: String,
    #[serde(deserialize_with = "de::text")]
    pub uri: String,
    #[serde(deserialize_with = "de::text")]
    pub permalink_url: String,
    #[serde(deserialize_with = "de::text")]
    pub thumb_url: String,
    #[serde(deserialize_with = "de::text")]
    pub avatar_url: String,
    /// 720p avatar, sent by the API as `720p_url`.
    #[serde(rename = "720p_url", deserialize_with = "de::text")]
    pub p_url: String,
    #[serde(deserialize_with = "de::text")]
    pub background_url: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::text")]
    pub geo: String,
    pub track_count: u64,
    pub playlist_count: u64,
    pub likes_count: u64,
    pub followers_count: u64,
    pub following_count: u64,
    /// Per-kind totals as sent by the API, e.g. `{"tracks": 0, "likes": 3}`.
    pub counts: Value,
    #[serde(deserialize_with = "de::flag")]
    pub following: bool,
    #[serde(deserialize_with = "de::flag")]
    pub premium: bool,
    #[serde(deserialize_with = "de::number")]
    pub allow_push: u64,
    #[serde(deserialize_with = "de::flag")]
    pub is_fan: bool,
    #[serde(deserialize_with = "de::text")]
    pub featured_sound: String,
    #[serde(deserialize_with = "de::text")]
    pub email: String,
    #[serde(deserialize_with = "de::text")]
    pub locale: String,
    #[serde(deserialize_with = "de::text")]
    pub secret: String,
    #[serde(deserialize_with = "de::text")]
    pub key: String,
}

impl AuthenticatedUser {
    /// The `(key, secret)` pair for authenticated requests.
    pub fn credentials(&self) -> (&str, &str) {
        (&self.key, &self.secret)
    }
}

impl fmt::Debug for AuthenticatedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedUser")
            .field("id", &self.id)
            .field("permalink", &self.permalink)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("premium", &self.premium)
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl Record for AuthenticatedUser {
    fn shape() -> &'static Shape {
        &AUTHENTICATED_USER
    }
}

/// A genre category, as listed by `/categories/`.
///
/// Categories are flat and deserialized as sent, without the coercion
/// table: their `id` is a slug such as `"drumandbass"`, not a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "de::text")]
    pub id: String,
    #[serde(deserialize_with = "de::text")]
    pub name: String,
    #[serde(deserialize_with = "de::text")]
    pub url: String,
    #[serde(deserialize_with = "de::text")]
    pub api_url: String,
}

static TRACK: Shape = Shape {
    name: "Track",
    fields: &[
        Field::value("id"),
        Field::value("private"),
        Field::value("created_at"),
        Field::value("release_date"),
        Field::value("release_timestamp"),
        Field::value("unix_created_at"),
        Field::value("update_timestamp"),
        Field::value("user_id"),
        Field::value("duration"),
        Field::value("permalink"),
        Field::value("description"),
        Field::value("geo"),
        Field::value("geopoint"),
        Field::value("tags"),
        Field::value("tags_arr"),
        Field::value("taged_artists"),
        Field::value("taged_artists_arr"),
        Field::value("subcategories_arr"),
        Field::value("bpm"),
        Field::value("key"),
        Field::value("license"),
        Field::value("version"),
        Field::value("type"),
        Field::value("downloadable"),
        Field::value("genre"),
        Field::value("genre_slush"),
        Field::value("genre_own"),
        Field::value("title"),
        Field::value("uri"),
        Field::value("permalink_url"),
        Field::value("thumb"),
        Field::value("thumb_hires"),
        Field::value("artwork_url"),
        Field::value("artwork_url_retina"),
        Field::value("background_url"),
        Field::value("waveform_data"),
        Field::value("waveform_data_json"),
        Field::value("waveform_url"),
        Field::record("user", &USER),
        Field::value("counts"),
        Field::value("stream_url"),
        Field::value("preview_url"),
        Field::value("download_url"),
        Field::value("download_filename"),
        Field::value("transcript"),
        Field::value("features"),
        Field::value("related"),
        Field::value("playback_count"),
        Field::value("download_count"),
        Field::value("favoritings_count"),
        Field::value("reshares_count"),
        Field::value("comment_count"),
        Field::value("played"),
        Field::value("favorited"),
        Field::value("liked"),
        Field::value("reshared"),
        Field::value("is_fan"),
        Field::value("fan_exclusive_play"),
        Field::value("fan_exclusive_download"),
        Field::value("is_live"),
        Field::value("is_live_video"),
        Field::value("video_stream"),
    ],
};

/// A track (mix, set or live stream).
///
/// Counters default to zero when the API omits them. The uploader is
/// `None` only when the payload carries no `user` object at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub id: u64,
    #[serde(deserialize_with = "de::flag")]
    pub private: bool,
    #[serde(deserialize_with = "de::text")]
    pub created_at: String,
    #[serde(deserialize_with = "de::text")]
    pub release_date: String,
    pub release_timestamp: u64,
    #[serde(deserialize_with = "de::number")]
    pub unix_created_at: u64,
    #[serde(deserialize_with = "de::number")]
    pub update_timestamp: u64,
    pub user_id: u64,
    /// Length in seconds.
    pub duration: u64,
    #[serde(deserialize_with = "de::text")]
    pub permalink: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    #[serde(deserialize_with = "de::text")]
    pub geo: String,
    /// Latitude and longitude, when the upload is geotagged.
    #[serde(deserialize_with = "de::float_list")]
    pub geopoint: Vec<f64>,
    #[serde(deserialize_with = "de::text")]
    pub tags: String,
    #[serde(deserialize_with = "de::string_list")]
    pub tags_arr: Vec<String>,
    #[serde(deserialize_with = "de::text")]
    pub taged_artists: String,
    #[serde(deserialize_with = "de::string_list")]
    pub taged_artists_arr: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub subcategories_arr: Vec<String>,
    pub bpm: Option<f64>,
    /// Musical key.
    #[serde(deserialize_with = "de::text")]
    pub key: String,
    #[serde(deserialize_with = "de::text")]
    pub license: String,
    #[serde(deserialize_with = "de::text")]
    pub version: String,
    #[serde(rename = "type", deserialize_with = "de::text")]
    pub kind: String,
    pub downloadable: bool,
    #[serde(deserialize_with = "de::text")]
    pub genre: String,
    #[serde(deserialize_with = "de::text")]
    pub genre_slush: String,
    #[serde(deserialize_with = "de::text")]
    pub genre_own: String,
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    #[serde(deserialize_with = "de::text")]
    pub uri: String,
    #[serde(deserialize_with = "de::text")]
    pub permalink_url: String,
    #[serde(deserialize_with = "de::text")]
    pub thumb: String,
    #[serde(deserialize_with = "de::text")]
    pub thumb_hires: String,
    #[serde(deserialize_with = "de::text")]
    pub artwork_url: String,
    #[serde(deserialize_with = "de::text")]
    pub artwork_url_retina: String,
    #[serde(deserialize_with = "de::text")]
    pub background_url: String,
    /// URL of the waveform samples, fetched by
    /// [`HearthisClient::waveform_data`](crate::HearthisClient::waveform_data).
    #[serde(deserialize_with = "de::text")]
    pub waveform_data: String,
    #[serde(deserialize_with = "de::text")]
    pub waveform_data_json: String,
    #[serde(deserialize_with = "de::text")]
    pub waveform_url: String,
    pub user: Option<User>,
    /// Per-kind totals as sent by the API.
    pub counts: Value,
    #[serde(deserialize_with = "de::text")]
    pub stream_url: String,
    #[serde(deserialize_with = "de::text")]
    pub preview_url: String,
    #[serde(deserialize_with = "de::text")]
    pub download_url: String,
    #[serde(deserialize_with = "de::text")]
    pub download_filename: String,
    #[serde(deserialize_with = "de::text")]
    pub transcript: String,
    pub features: Value,
    pub related: Value,
    pub playback_count: u64,
    pub download_count: u64,
    pub favoritings_count: u64,
    pub reshares_count: u64,
    pub comment_count: u64,
    #[serde(deserialize_with = "de::flag")]
    pub played: bool,
    #[serde(deserialize_with = "de::flag")]
    pub favorited: bool,
    #[serde(deserialize_with = "de::flag")]
    pub liked: bool,
    #[serde(deserialize_with = "de::flag")]
    pub reshared: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_fan: bool,
    #[serde(deserialize_with = "de::number")]
    pub fan_exclusive_play: u64,
    #[serde(deserialize_with = "de::number")]
    pub fan_exclusive_download: u64,
    #[serde(deserialize_with = "de::flag")]
    pub is_live: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_live_video: bool,
    #[serde(deserialize_with = "de::text")]
    pub video_stream: String,
}

impl Record for Track {
    fn shape() -> &'static Shape {
        &TRACK
    }
}

static PLAYLIST: Shape = Shape {
    name: "Playlist",
    fields: &[
        Field::value("id"),
        Field::value("user_id"),
        Field::value("permalink"),
        Field::value("title"),
        Field::value("description"),
        Field::value("privat"),
        Field::value("uri"),
        Field::value("permalink_url"),
        Field::value("thumb"),
        Field::value("artwork_url"),
        Field::value("track_count"),
        Field::record("user", &USER),
        Field::record_list("tracks", &TRACK),
    ],
};

/// A set (playlist).
///
/// `tracks` is only filled by endpoints that embed the set's tracks;
/// listings leave it empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    pub id: u64,
    pub user_id: u64,
    #[serde(deserialize_with = "de::text")]
    pub permalink: String,
    #[serde(deserialize_with = "de::text")]
    pub title: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    /// Whether the set is private.
    #[serde(deserialize_with = "de::flag")]
    pub privat: bool,
    #[serde(deserialize_with = "de::text")]
    pub uri: String,
    #[serde(deserialize_with = "de::text")]
    pub permalink_url: String,
    #[serde(deserialize_with = "de::text")]
    pub thumb: String,
    #[serde(deserialize_with = "de::text")]
    pub artwork_url: String,
    pub track_count: u64,
    pub user: Option<User>,
    pub tracks: Vec<Track>,
}

impl Record for Playlist {
    fn shape() -> &'static Shape {
        &PLAYLIST
    }
}

static ARTIST: Shape = Shape {
    name: "Artist",
    fields: &[
        Field::value("id"),
        Field::value("permalink"),
        Field::value("username"),
        Field::value("uri"),
        Field::value("permalink_url"),
        Field::value("avatar_url"),
        Field::value("background_url"),
        Field::value("description"),
        Field::value("track_count"),
        Field::value("playlist_count"),
        Field::value("likes_count"),
        Field::value("followers_count"),
        Field::value("following"),
        Field::value("following_count"),
        Field::value("premium"),
        Field::value("allow_push"),
        Field::value("geo"),
        Field::value("720p_url"),
        Field::value("thumb_url"),
        Field::value("caption"),
    ],
};

/// An artist profile, as returned by
/// [`HearthisClient::single_artist`](crate::HearthisClient::single_artist).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: u64,
    #[serde(deserialize_with = "de::text")]
    pub permalink: String,
    #[serde(deserialize_with = "de::text")]
    pub username: String,
    #[serde(deserialize_with = "de::text")]
    pub uri: String,
    #[serde(deserialize_with = "de::text")]
    pub permalink_url: String,
    #[serde(deserialize_with = "de::text")]
    pub avatar_url: String,
    #[serde(deserialize_with = "de::text")]
    pub background_url: String,
    #[serde(deserialize_with = "de::text")]
    pub description: String,
    pub track_count: u64,
    pub playlist_count: u64,
    pub likes_count: u64,
    pub followers_count: u64,
    #[serde(deserialize_with = "de::flag")]
    pub following: bool,
    pub following_count: u64,
    #[serde(deserialize_with = "de::flag")]
    pub premium: bool,
    #[serde(deserialize_with = "de::number")]
    pub allow_push: u64,
    #[serde(deserialize_with = "de::text")]
    pub geo: String,
    #[serde(rename = "720p_url", deserialize_with = "de::text")]
    pub p_url: String,
    #[serde(deserialize_with = "de::text")]
    pub thumb_url: String,
    #[serde(deserialize_with = "de::text")]
    pub caption: String,
}

impl Record for Artist {
    fn shape() -> &'static Shape {
        &ARTIST
    }
}
