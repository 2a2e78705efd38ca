//! hearthis.at API client library.
//!
//! Issues authenticated GET/POST requests against `api-v2.hearthis.at` and
//! turns its loosely typed JSON into immutable, strongly typed records.
//!
//! # Usage
//!
//! ```no_run
//! use hearthis_api::HearthisClient;
//! use hearthis_api::request::SearchFilter;
//!
//! let client = HearthisClient::new().unwrap();
//! let user = client.login("me@example.com", "password").unwrap();
//! let tracks = client.search(&user, "deep house", &SearchFilter::default(), 1, 20).unwrap();
//! for track in &tracks {
//!     println!("{} ({}s)", track.title, track.duration);
//! }
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                                          | Endpoint                    | Description             |
//! |-------------------------------------------------|-----------------------------|-------------------------|
//! | [`HearthisClient::login`]                       | `GET /login`                | Log in, get key/secret  |
//! | [`HearthisClient::feeds`]                       | `GET /feed/`                | Feed listing            |
//! | [`HearthisClient::categories`]                  | `GET /categories/`          | Genre categories        |
//! | [`HearthisClient::category_tracks`]             | `GET /categories/{id}`      | Tracks of a category    |
//! | [`HearthisClient::waveform_data`]               | `GET {track.waveform_data}` | Waveform samples        |
//! | [`HearthisClient::playlists`]                   | `GET /{permalink}`          | User's sets             |
//! | [`HearthisClient::playlist_tracks`]             | `GET /set/{permalink}/`     | Tracks of a set         |
//! | [`HearthisClient::create_playlist`]             | `POST /set_ajax_add.php`    | Create a set            |
//! | [`HearthisClient::add_track_to_playlist`]       | `POST /set_ajax_add.php`    | Add track to set        |
//! | [`HearthisClient::add_track_to_new_playlist`]   | `POST /set_ajax_add.php`    | Add track to new set    |
//! | [`HearthisClient::delete_track_from_playlist`]  | `POST /set_ajax_add.php`    | Remove track from set   |
//! | [`HearthisClient::delete_playlist`]             | `POST /set_ajax_edit.php`   | Delete a set            |
//! | [`HearthisClient::search`]                      | `GET /search/`              | Search tracks           |
//! | [`HearthisClient::artist_tracks`]               | `GET /{permalink}/`         | Artist uploads or likes |
//! | [`HearthisClient::single_artist`]               | `GET /{permalink}`          | Artist profile          |
//!
//! # Marshalling
//!
//! Raw payloads pass through [`marshal`], which coerces every scalar by
//! field name ([`coerce`]) and rebuilds nested records. Request descriptions
//! in [`request`] are encoded by [`query`], which skips blank parameters.
//! Page sizes above [`paging::MAX_PAGE_COUNT`] are rejected before any
//! request is made.

pub mod client;
pub mod coerce;
mod de;
pub mod error;
pub mod filter;
pub mod marshal;
pub mod paging;
mod playlist;
pub mod query;
pub mod request;
mod search;
mod track;
pub mod transport;
pub mod types;
mod user;

pub use client::{ClientConfig, HearthisClient};
pub use error::{HearthisError, Result};
