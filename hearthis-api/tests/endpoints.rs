//! Endpoint tests against a recording in-memory transport.

use hearthis_api::marshal::marshal;
use hearthis_api::request::{ArtistTracksKind, FeedFilter, SearchFilter};
use hearthis_api::transport::Transport;
use hearthis_api::types::{AuthenticatedUser, Category, Playlist, Track};
use hearthis_api::{HearthisClient, HearthisError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

const BASE: &str = "https://api-v2.hearthis.at";

/// Serves canned bodies by exact URL and records every POST.
#[derive(Default)]
struct FakeTransport {
    responses: HashMap<String, String>,
    gets: RefCell<Vec<String>>,
    posts: RefCell<Vec<(String, String)>>,
}

impl FakeTransport {
    fn respond(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_owned(), body.to_owned());
        self
    }

    fn last_post(&self) -> (String, String) {
        self.posts.borrow().last().cloned().expect("no POST recorded")
    }
}

impl Transport for FakeTransport {
    fn get(&self, url: &str) -> Result<String> {
        self.gets.borrow_mut().push(url.to_owned());
        match self.responses.get(url) {
            Some(body) => Ok(body.clone()),
            None => panic!("unexpected GET {url}"),
        }
    }

    fn post_form(&self, url: &str, body: &str) -> Result<String> {
        self.posts.borrow_mut().push((url.to_owned(), body.to_owned()));
        Ok(self.responses.get(url).cloned().unwrap_or_default())
    }
}

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path}: {e}"))
}

fn json_fixture(name: &str) -> Value {
    serde_json::from_str(&fixture(name)).unwrap()
}

fn client(transport: FakeTransport) -> HearthisClient<FakeTransport> {
    HearthisClient::with_transport(transport, BASE)
}

fn logged_in_user() -> AuthenticatedUser {
    marshal(&json_fixture("login_response.json")).unwrap()
}

fn single_track() -> Track {
    let tracks: Vec<Track> =
        hearthis_api::marshal::marshal_list(&json_fixture("get_feeds_response.json")).unwrap();
    tracks.into_iter().next().unwrap()
}

fn single_playlist() -> Playlist {
    marshal(&json_fixture("single_playlist.json")).unwrap()
}

#[test]
fn login_returns_authenticated_user() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/login?email=mymail%40test.de&password=mypassword"),
        &fixture("login_response.json"),
    );
    let user = client(transport).login("mymail@test.de", "mypassword").unwrap();

    assert_eq!(user.username, "mymail");
    assert_eq!(user.id, 12_345_678);
    assert_eq!(user.credentials(), ("mykey", "mysecret"));
    assert_eq!(user.followers_count, 0);
    assert!(!user.premium);
    assert_eq!(user.allow_push, 1);
    assert_eq!(user.counts, serde_json::json!({"tracks": 0, "likes": 3}));
}

#[test]
fn failed_login_is_an_api_error() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/login?email=a%40b.c&password=wrong"),
        r#"{"success": false, "message": "Wrong email or password"}"#,
    );
    let err = client(transport).login("a@b.c", "wrong").unwrap_err();
    assert!(matches!(err, HearthisError::Api { ref message } if message == "Wrong email or password"));
}

#[test]
fn feeds_returns_tracks_in_order() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/feed/?key=mykey&secret=mysecret&page=1&count=5"),
        &fixture("get_feeds_response.json"),
    );
    let tracks = client(transport)
        .feeds(&logged_in_user(), &FeedFilter::default(), 1, 5)
        .unwrap();

    assert_eq!(tracks.len(), 2);
    let first = &tracks[0];
    assert_eq!(first.id, 48250);
    assert_eq!(first.title, "Shawne @ Back To The Roots 2 (05.07.2014)");
    assert_eq!(first.user.as_ref().unwrap().username, "Shawne");
    assert_eq!(first.duration, 7219);
    assert_eq!(first.reshares_count, 0);
    assert!(!first.downloadable);
    assert_eq!(first.bpm, None);

    let second = &tracks[1];
    assert_eq!(second.id, 48251);
    assert_eq!(second.bpm, Some(174.0));
    assert!(second.downloadable);
    assert!(second.liked);
}

#[test]
fn feed_filters_are_sent_when_set() {
    let filter = FeedFilter {
        kind: Some("popular".into()),
        category: Some("drumandbass".into()),
        duration: None,
    };
    let transport = FakeTransport::default().respond(
        &format!(
            "{BASE}/feed/?key=mykey&secret=mysecret&type=popular&category=drumandbass&page=2&count=20"
        ),
        "[]",
    );
    let tracks = client(transport).feeds(&logged_in_user(), &filter, 2, 20).unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn categories_keep_their_slug_ids() {
    let transport =
        FakeTransport::default().respond(&format!("{BASE}/categories/"), &fixture("get_categories.json"));
    let categories = client(transport).categories().unwrap();

    assert_eq!(categories[0].id, "acoustic");
    assert_eq!(categories[0].name, "Acoustic");
    assert_eq!(categories[1].id, "drumandbass");
}

#[test]
fn category_list_with_a_non_object_entry_is_a_shape_mismatch() {
    let transport = FakeTransport::default()
        .respond(&format!("{BASE}/categories/"), r#"[{"id": "acoustic"}, "oops"]"#);
    let err = client(transport).categories().unwrap_err();
    assert!(matches!(
        err,
        HearthisError::ShapeMismatch {
            shape: "Category",
            expected: "object",
            found: "string"
        }
    ));
}

#[test]
fn category_tracks_use_the_category_id() {
    let category = Category {
        id: "drumandbass".into(),
        name: "Drum & Bass".into(),
        ..Category::default()
    };
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/categories/drumandbass?key=mykey&secret=mysecret&page=1&count=5"),
        &fixture("get_feeds_response.json"),
    );
    let tracks = client(transport)
        .category_tracks(&logged_in_user(), &category, 1, 5)
        .unwrap();

    assert_eq!(tracks[0].id, 48250);
    assert_eq!(tracks[0].title, "Shawne @ Back To The Roots 2 (05.07.2014)");
    assert!(!tracks[0].user.as_ref().unwrap().username.is_empty());
}

#[test]
fn waveform_data_is_returned_verbatim() {
    let body = fixture("waveform_response.txt");
    let transport = FakeTransport::default().respond("https://waveform.data", &body);
    let waveform = client(transport).waveform_data(&single_track()).unwrap();
    assert_eq!(waveform, body);
}

#[test]
fn waveform_without_url_skips_the_request() {
    let sut = client(FakeTransport::default());
    let waveform = sut.waveform_data(&Track::default()).unwrap();
    assert!(waveform.is_empty());
    assert!(sut.transport().gets.borrow().is_empty());
}

#[test]
fn create_playlist_posts_createnew() {
    let sut = client(FakeTransport::default());
    sut.create_playlist(&logged_in_user(), "MyNewPlaylist").unwrap();

    let (url, body) = sut.transport().last_post();
    assert_eq!(url, format!("{BASE}/set_ajax_add.php"));
    assert_eq!(
        body,
        "action=createnew&key=mykey&secret=mysecret&new_set=MyNewPlaylist&privat=1&sort_config=1"
    );
}

#[test]
fn playlists_embed_their_owner() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/mymail-oc?key=mykey&secret=mysecret&page=1&count=5&type=playlists"),
        &fixture("get_playlists_response.json"),
    );
    let playlists = client(transport).playlists(&logged_in_user(), 1, 5).unwrap();

    let first = &playlists[0];
    assert_eq!(first.id, 438);
    assert_eq!(first.title, "Back In Time");
    assert_eq!(first.track_count, 4);
    assert!(!first.privat);
    assert_eq!(first.user.as_ref().unwrap().username, "mymail");
    assert!(first.tracks.is_empty());

    assert_eq!(playlists[1].id, 439);
    assert!(playlists[1].privat);
    assert_eq!(playlists[1].track_count, 0);
}

#[test]
fn add_track_to_playlist_posts_ids() {
    let transport = FakeTransport::default()
        .respond(&format!("{BASE}/set_ajax_add.php"), &fixture("single_playlist.json"));
    let sut = client(transport);
    let playlist = sut
        .add_track_to_playlist(&logged_in_user(), &single_track(), &single_playlist())
        .unwrap();

    let (_, body) = sut.transport().last_post();
    assert_eq!(body, "action=add&key=mykey&secret=mysecret&track_id=48250&set=438");
    assert_eq!(playlist.id, 438);
}

#[test]
fn add_track_to_new_playlist_posts_name() {
    let transport = FakeTransport::default()
        .respond(&format!("{BASE}/set_ajax_add.php"), &fixture("single_playlist.json"));
    let sut = client(transport);
    sut.add_track_to_new_playlist(&logged_in_user(), &single_track(), "my_new_playlist")
        .unwrap();

    let (_, body) = sut.transport().last_post();
    assert_eq!(
        body,
        "action=add&key=mykey&secret=mysecret&track_id=48250&new_set=my_new_playlist"
    );
}

#[test]
fn playlist_tracks_are_listed() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/set/back-in-time/?key=mykey&secret=mysecret"),
        &fixture("get_playlist_tracks_response.json"),
    );
    let tracks = client(transport)
        .playlist_tracks(&logged_in_user(), &single_playlist())
        .unwrap();

    let first = &tracks[0];
    assert_eq!(first.id, 12345);
    assert_eq!(first.title, "The Souled Out Show August 27th");
    assert_eq!(first.user.as_ref().unwrap().username, "Souled Out Radio");
    assert_eq!(first.bpm, Some(98.5));
    assert!(first.downloadable);
    assert_eq!(first.favoritings_count, 0);
    assert_eq!(tracks[1].id, 12346);
}

#[test]
fn delete_track_from_playlist_posts_deleteentry() {
    let transport = FakeTransport::default()
        .respond(&format!("{BASE}/set_ajax_add.php"), &fixture("single_playlist.json"));
    let sut = client(transport);
    let track = single_track();
    let playlist = sut
        .delete_track_from_playlist(&logged_in_user(), &track, &single_playlist())
        .unwrap();

    let (_, body) = sut.transport().last_post();
    assert_eq!(
        body,
        format!("action=deleteentry&key=mykey&secret=mysecret&id={}&set_id=438", track.id)
    );
    assert_eq!(playlist.title, "Back In Time");
}

#[test]
fn delete_playlist_accepts_plain_text_answer() {
    let transport =
        FakeTransport::default().respond(&format!("{BASE}/set_ajax_edit.php"), "DELETED");
    let sut = client(transport);
    sut.delete_playlist(&logged_in_user(), &single_playlist()).unwrap();

    let (url, body) = sut.transport().last_post();
    assert_eq!(url, format!("{BASE}/set_ajax_edit.php"));
    assert_eq!(body, "action=delete&key=mykey&secret=mysecret&set=438");
}

#[test]
fn search_returns_ranked_tracks() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/search/?key=mykey&secret=mysecret&t=MySearchQuery&page=1&count=5"),
        &fixture("get_feeds_response.json"),
    );
    let tracks = client(transport)
        .search(&logged_in_user(), "MySearchQuery", &SearchFilter::default(), 1, 5)
        .unwrap();

    assert_eq!(tracks[0].id, 48250);
    assert_eq!(tracks[0].title, "Shawne @ Back To The Roots 2 (05.07.2014)");
    assert!(!tracks[0].user.as_ref().unwrap().username.is_empty());
}

#[test]
fn search_limit_sentinel_yields_no_results() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/search/?key=mykey&secret=mysecret&t=House&page=1&count=5"),
        &fixture("limit_reached_response.json"),
    );
    let tracks = client(transport)
        .search(&logged_in_user(), "House", &SearchFilter::default(), 1, 5)
        .unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn empty_search_body_yields_no_results() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/search/?key=mykey&secret=mysecret&t=House&page=1&count=5"),
        "",
    );
    let tracks = client(transport)
        .search(&logged_in_user(), "House", &SearchFilter::default(), 1, 5)
        .unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn empty_listing_body_is_an_empty_list() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/mymail-oc?key=mykey&secret=mysecret&page=1&count=5&type=playlists"),
        "  \n",
    );
    let playlists = client(transport).playlists(&logged_in_user(), 1, 5).unwrap();
    assert!(playlists.is_empty());
}

#[test]
fn non_list_answer_from_a_listing_is_a_shape_mismatch() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/feed/?key=mykey&secret=mysecret&page=1&count=5"),
        r#""maintenance""#,
    );
    let err = client(transport)
        .feeds(&logged_in_user(), &FeedFilter::default(), 1, 5)
        .unwrap_err();
    assert!(matches!(
        err,
        HearthisError::ShapeMismatch {
            shape: "Track",
            expected: "array",
            found: "string"
        }
    ));
}

#[test]
fn oversized_pages_fail_before_any_request() {
    let sut = client(FakeTransport::default());
    let user = logged_in_user();
    let category = Category::default();
    let message = "maximum allowed pagecount is 20";

    let errors = [
        sut.search(&user, "MySearchQuery", &SearchFilter::default(), 1, 21).unwrap_err(),
        sut.feeds(&user, &FeedFilter::default(), 1, 21).unwrap_err(),
        sut.category_tracks(&user, &category, 0, 21).unwrap_err(),
        sut.playlists(&user, 1, 21).unwrap_err(),
        sut.artist_tracks(&user, "permalink", ArtistTracksKind::Tracks, 1, 21)
            .unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, HearthisError::PageCountExceeded { count: 21, max: 20 }));
        assert!(err.to_string().contains(message));
    }
    assert!(sut.transport().gets.borrow().is_empty());
}

#[test]
fn artist_tracks_send_listing_type() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/myuserpermalink/?key=mykey&secret=mysecret&type=tracks&page=1&count=5"),
        &fixture("get_feeds_response.json"),
    );
    let tracks = client(transport)
        .artist_tracks(&logged_in_user(), "myuserpermalink", ArtistTracksKind::Tracks, 1, 5)
        .unwrap();

    assert_eq!(tracks[0].id, 48250);
    assert_eq!(tracks[0].title, "Shawne @ Back To The Roots 2 (05.07.2014)");
}

#[test]
fn single_artist_needs_no_credentials() {
    let transport = FakeTransport::default().respond(
        &format!("{BASE}/myuserpermalink"),
        &fixture("get_single_artist_response.json"),
    );
    let artist = client(transport).single_artist("myuserpermalink").unwrap();

    assert_eq!(artist.id, 100_000);
    assert_eq!(artist.followers_count, 1500);
    assert!(artist.premium);
    assert!(!artist.following);
    assert_eq!(artist.p_url, "https://img.hearthis.at/myuserpermalink/720.jpg");
}
