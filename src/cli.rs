use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use spotify_gateway::clients::{Category, ProxyClient, errors::{Error, Result}};
use spotify_gateway::config::ConfigBuilder;

#[derive(Parser)]
#[command(name = "spotify-gateway")]
#[command(version, about = "Query a Spotify catalog proxy and print typed records", long_about = None)]
struct Cli {
    /// Proxy address, overrides SPOTIFY_PROXY_BASE_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Profile of the signed in user
    Me,
    /// Search the catalog
    Search {
        #[arg(value_enum)]
        category: Category,
        query: String,
    },
    /// A single artist
    Artist { id: String },
    /// Artists related to an artist
    RelatedArtists { id: String },
    /// Top tracks of an artist
    TopTracks { id: String },
    /// Albums of an artist
    ArtistAlbums { id: String },
    /// A single album
    Album { id: String },
    /// Tracks of an album
    AlbumTracks { id: String },
    /// A single track
    Track { id: String },
    /// Audio features of a track
    AudioFeatures { id: String },
    /// Artist, related artists, top tracks and albums at once
    ArtistOverview { id: String },
    /// Album and its tracks at once
    AlbumOverview { id: String },
    /// Track and its audio features at once
    TrackOverview { id: String },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut builder = ConfigBuilder::new();
    if let Some(base_url) = cli.base_url {
        builder = builder.base_url(base_url);
    }
    let client = ProxyClient::new(builder.build()?);
    info!("Querying proxy at {}", client.base_url());

    match &cli.command {
        Commands::Me => print(&client.fetch_profile().await?),
        Commands::Search { category, query } => print(&client.search(*category, query).await?),
        Commands::Artist { id } => print(&client.fetch_artist(id).await?),
        Commands::RelatedArtists { id } => print(&client.fetch_related_artists(id).await?),
        Commands::TopTracks { id } => print(&client.fetch_top_tracks(id).await?),
        Commands::ArtistAlbums { id } => print(&client.fetch_albums_for_artist(id).await?),
        Commands::Album { id } => print(&client.fetch_album(id).await?),
        Commands::AlbumTracks { id } => print(&client.fetch_tracks_for_album(id).await?),
        Commands::Track { id } => print(&client.fetch_track(id).await?),
        Commands::AudioFeatures { id } => print(&client.fetch_audio_features(id).await?),
        Commands::ArtistOverview { id } => print(&client.artist_overview(id).await?),
        Commands::AlbumOverview { id } => print(&client.album_overview(id).await?),
        Commands::TrackOverview { id } => print(&client.track_overview(id).await?),
    }
}

fn print<T: Serialize>(records: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(records).map_err(Error::Render)?;
    println!("{rendered}");
    Ok(())
}
