use log::debug;
use serde::de::DeserializeOwned;

use crate::clients::{
    endpoints::{Category, Endpoint},
    entities::{
        Album, AlbumOverview, AlbumSearch, Artist, ArtistList, ArtistOverview, ArtistSearch,
        AudioFeatures, Page, Profile, Resource, Track, TrackFeature, TrackList, TrackOverview,
        TrackSearch,
    },
    errors::Result,
};
use crate::config::{Config, ConfigBuilder};

/// Gateway to the proxy server. Every method issues exactly one GET request
/// (overviews issue several concurrently) and maps the JSON body into records.
#[derive(Clone)]
pub struct ProxyClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProxyClient {
    /// Gateway over an already built [`Config`]
    pub fn new(config: Config) -> Self {
        ProxyClient {
            http: config.http,
            base_url: config.base_url,
        }
    }

    /// Create a `ProxyClient` from environment variables or fall back to the local proxy address
    pub fn try_default() -> Result<Self> {
        Ok(Self::new(ConfigBuilder::new().build()?))
    }

    /// Address every request path is appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<R: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<R> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        debug!("GET {url}");
        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Profile of the signed in user
    pub async fn fetch_profile(&self) -> Result<Profile> {
        self.get(Endpoint::Me).await
    }

    /// Search hits of one category. Results keep the order of the proxy response
    pub async fn search(&self, category: Category, query: &str) -> Result<Vec<Resource>> {
        let endpoint = Endpoint::Search { category, query };
        let resources: Vec<Resource> = match category {
            Category::Artist => {
                let found: ArtistSearch = self.get(endpoint).await?;
                found.artists.items.into_iter().map(Resource::Artist).collect()
            }
            Category::Album => {
                let found: AlbumSearch = self.get(endpoint).await?;
                found.albums.items.into_iter().map(Resource::Album).collect()
            }
            Category::Track => {
                let found: TrackSearch = self.get(endpoint).await?;
                found.tracks.items.into_iter().map(Resource::Track).collect()
            }
        };
        debug!("Search for {category} {query:?} returned {} items", resources.len());
        Ok(resources)
    }

    /// A single artist
    pub async fn fetch_artist(&self, artist_id: &str) -> Result<Artist> {
        self.get(Endpoint::Artist(artist_id)).await
    }

    /// Artists the catalog considers similar
    pub async fn fetch_related_artists(&self, artist_id: &str) -> Result<Vec<Artist>> {
        let list: ArtistList = self.get(Endpoint::RelatedArtists(artist_id)).await?;
        debug!("Fetched {} artists related to {artist_id}", list.artists.len());
        Ok(list.artists)
    }

    /// Most popular tracks of an artist
    pub async fn fetch_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>> {
        let list: TrackList = self.get(Endpoint::TopTracks(artist_id)).await?;
        debug!("Fetched {} top tracks of {artist_id}", list.tracks.len());
        Ok(list.tracks)
    }

    /// Albums released by an artist
    pub async fn fetch_albums_for_artist(&self, artist_id: &str) -> Result<Vec<Album>> {
        let page: Page<Album> = self.get(Endpoint::ArtistAlbums(artist_id)).await?;
        debug!("Fetched {} albums of {artist_id}", page.items.len());
        Ok(page.items)
    }

    /// A single album
    pub async fn fetch_album(&self, album_id: &str) -> Result<Album> {
        self.get(Endpoint::Album(album_id)).await
    }

    /// Track listing of an album
    pub async fn fetch_tracks_for_album(&self, album_id: &str) -> Result<Vec<Track>> {
        let page: Page<Track> = self.get(Endpoint::AlbumTracks(album_id)).await?;
        debug!("Fetched {} tracks of album {album_id}", page.items.len());
        Ok(page.items)
    }

    /// A single track
    pub async fn fetch_track(&self, track_id: &str) -> Result<Track> {
        self.get(Endpoint::Track(track_id)).await
    }

    /// Always seven pairs, in the order of [`Feature`](crate::clients::entities::Feature)
    pub async fn fetch_audio_features(&self, track_id: &str) -> Result<Vec<TrackFeature>> {
        let features: AudioFeatures = self.get(Endpoint::AudioFeatures(track_id)).await?;
        Ok(features.into())
    }

    /// Artist page data. The four requests run concurrently, the first failure aborts the overview
    pub async fn artist_overview(&self, artist_id: &str) -> Result<ArtistOverview> {
        let (artist, related, top_tracks, albums) = futures::try_join!(
            self.fetch_artist(artist_id),
            self.fetch_related_artists(artist_id),
            self.fetch_top_tracks(artist_id),
            self.fetch_albums_for_artist(artist_id),
        )?;
        Ok(ArtistOverview {
            artist,
            related,
            top_tracks,
            albums,
        })
    }

    /// Album with its track listing
    pub async fn album_overview(&self, album_id: &str) -> Result<AlbumOverview> {
        let (album, tracks) = futures::try_join!(
            self.fetch_album(album_id),
            self.fetch_tracks_for_album(album_id),
        )?;
        Ok(AlbumOverview { album, tracks })
    }

    /// Track with its audio features
    pub async fn track_overview(&self, track_id: &str) -> Result<TrackOverview> {
        let (track, features) = futures::try_join!(
            self.fetch_track(track_id),
            self.fetch_audio_features(track_id),
        )?;
        Ok(TrackOverview { track, features })
    }
}
