mod session;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hearthis_api::request::{ArtistTracksKind, FeedFilter, SearchFilter};
use hearthis_api::types::{Playlist, Track};
use hearthis_api::{ClientConfig, HearthisClient};
use session::Session;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hearthis", version, about = "hearthis.at command-line client")]
struct Cli {
    /// API root
    #[arg(long, env = "HEARTHIS_BASE_URL", default_value = hearthis_api::client::BASE_URL, global = true)]
    base_url: String,
    /// Log requests (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Clone, Copy)]
struct Page {
    /// Page number
    #[arg(short, long, default_value_t = hearthis_api::paging::DEFAULT_PAGE)]
    page: u32,
    /// Results per page (max 20)
    #[arg(short = 'n', long, default_value_t = hearthis_api::paging::DEFAULT_COUNT)]
    count: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and save the session
    Login {
        /// Account email
        #[arg(required_unless_present = "check")]
        email: Option<String>,
        /// Account password
        #[arg(required_unless_present = "check")]
        password: Option<String>,
        /// Show the saved session instead of logging in
        #[arg(long)]
        check: bool,
    },
    /// Clear saved session
    Logout,
    /// Show the feed
    Feed {
        /// Feed type (e.g. popular, new)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Category slug
        #[arg(short, long)]
        category: Option<String>,
        /// Duration filter in minutes
        #[arg(short, long)]
        duration: Option<u32>,
        #[command(flatten)]
        page: Page,
    },
    /// List genre categories
    Categories,
    /// Show tracks of a category
    Category {
        /// Category slug (see `categories`)
        id: String,
        #[command(flatten)]
        page: Page,
    },
    /// Search tracks
    Search {
        /// Search text
        query: String,
        /// Result type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Duration filter in minutes
        #[arg(short, long)]
        duration: Option<u32>,
        #[command(flatten)]
        page: Page,
    },
    /// Show an artist profile
    Artist {
        /// Artist permalink
        permalink: String,
    },
    /// List an artist's tracks
    ArtistTracks {
        /// Artist permalink
        permalink: String,
        /// List liked tracks instead of uploads
        #[arg(long)]
        likes: bool,
        #[command(flatten)]
        page: Page,
    },
    /// List your sets
    Playlists {
        #[command(flatten)]
        page: Page,
    },
    /// Show tracks of one of your sets
    Playlist {
        /// Set permalink
        permalink: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let client = HearthisClient::with_config(ClientConfig {
        base_url: cli.base_url,
        ..ClientConfig::default()
    })?;

    match cli.command {
        Command::Login {
            email,
            password,
            check,
        } => cmd_login(&client, email, password, check),
        Command::Logout => cmd_logout(),
        Command::Feed {
            kind,
            category,
            duration,
            page,
        } => {
            let filter = FeedFilter {
                kind,
                category,
                duration,
            };
            cmd_feed(&client, &filter, page)
        }
        Command::Categories => cmd_categories(&client),
        Command::Category { id, page } => cmd_category(&client, &id, page),
        Command::Search {
            query,
            kind,
            duration,
            page,
        } => cmd_search(&client, &query, &SearchFilter { kind, duration }, page),
        Command::Artist { permalink } => cmd_artist(&client, &permalink),
        Command::ArtistTracks {
            permalink,
            likes,
            page,
        } => cmd_artist_tracks(&client, &permalink, likes, page),
        Command::Playlists { page } => cmd_playlists(&client, page),
        Command::Playlist { permalink } => cmd_playlist(&client, &permalink),
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "hearthis_api=debug",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_tracks(tracks: &[Track]) {
    if tracks.is_empty() {
        println!("No tracks.");
        return;
    }
    for t in tracks {
        let uploader = t.user.as_ref().map_or("?", |u| u.username.as_str());
        println!(
            "  [{}] {} - {} ({}:{:02}, {} plays)",
            t.id,
            uploader,
            t.title,
            t.duration / 60,
            t.duration % 60,
            t.playback_count,
        );
    }
}

// ── login / logout ──

fn cmd_login(
    client: &HearthisClient,
    email: Option<String>,
    password: Option<String>,
    check: bool,
) -> Result<()> {
    if check {
        match Session::load()?.user {
            Some(user) => println!("Logged in as: {} (id={})", user.username, user.id),
            None => println!("Not logged in."),
        }
        return Ok(());
    }

    let email = email.context("email required")?;
    let password = password.context("password required")?;
    let user = client.login(&email, &password).context("login failed")?;
    println!("Logged in as: {} (id={})", user.username, user.id);
    Session { user: Some(user) }.save()?;
    println!("Session saved.");
    Ok(())
}

fn cmd_logout() -> Result<()> {
    Session::clear()?;
    println!("Session cleared.");
    Ok(())
}

// ── feed / categories / search ──

fn cmd_feed(client: &HearthisClient, filter: &FeedFilter, page: Page) -> Result<()> {
    let session = Session::load()?;
    let tracks = client.feeds(session.require_user()?, filter, page.page, page.count)?;
    print_tracks(&tracks);
    Ok(())
}

fn cmd_categories(client: &HearthisClient) -> Result<()> {
    for c in client.categories()? {
        println!("  {:<20} {}", c.id, c.name);
    }
    Ok(())
}

fn cmd_category(client: &HearthisClient, id: &str, page: Page) -> Result<()> {
    let session = Session::load()?;
    let category = client
        .categories()?
        .into_iter()
        .find(|c| c.id == id)
        .with_context(|| format!("unknown category: {id}"))?;
    let tracks =
        client.category_tracks(session.require_user()?, &category, page.page, page.count)?;
    print_tracks(&tracks);
    Ok(())
}

fn cmd_search(client: &HearthisClient, query: &str, filter: &SearchFilter, page: Page) -> Result<()> {
    let session = Session::load()?;
    let tracks = client.search(session.require_user()?, query, filter, page.page, page.count)?;
    print_tracks(&tracks);
    Ok(())
}

// ── artist ──

fn cmd_artist(client: &HearthisClient, permalink: &str) -> Result<()> {
    let a = client.single_artist(permalink)?;
    println!("Artist:    {} (id={})", a.username, a.id);
    println!("Profile:   {}", a.permalink_url);
    println!("Tracks:    {}", a.track_count);
    println!("Sets:      {}", a.playlist_count);
    println!("Followers: {}", a.followers_count);
    if !a.description.is_empty() {
        println!("Desc:      {}", a.description);
    }
    Ok(())
}

fn cmd_artist_tracks(client: &HearthisClient, permalink: &str, likes: bool, page: Page) -> Result<()> {
    let session = Session::load()?;
    let kind = if likes {
        ArtistTracksKind::Likes
    } else {
        ArtistTracksKind::Tracks
    };
    let tracks =
        client.artist_tracks(session.require_user()?, permalink, kind, page.page, page.count)?;
    print_tracks(&tracks);
    Ok(())
}

// ── playlists ──

fn print_playlist(p: &Playlist) {
    let visibility = if p.privat { "private" } else { "public" };
    println!(
        "  [{}] {} ({} tracks, {visibility}) /{}",
        p.id, p.title, p.track_count, p.permalink
    );
}

fn cmd_playlists(client: &HearthisClient, page: Page) -> Result<()> {
    let session = Session::load()?;
    let playlists = client.playlists(session.require_user()?, page.page, page.count)?;
    if playlists.is_empty() {
        println!("No sets.");
    }
    for p in &playlists {
        print_playlist(p);
    }
    Ok(())
}

fn cmd_playlist(client: &HearthisClient, permalink: &str) -> Result<()> {
    let session = Session::load()?;
    let user = session.require_user()?;
    let playlist = client
        .playlists(user, 1, hearthis_api::paging::MAX_PAGE_COUNT)?
        .into_iter()
        .find(|p| p.permalink == permalink)
        .with_context(|| format!("no set with permalink {permalink} on the first page"))?;
    print_playlist(&playlist);
    println!();
    print_tracks(&client.playlist_tracks(user, &playlist)?);
    Ok(())
}
