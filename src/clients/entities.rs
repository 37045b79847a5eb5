//! Records built from proxy responses.
//!
//! Each record decodes from one JSON object of the catalog API. `id` and
//! `name` (and a track's `duration_ms`) must be present, every other
//! attribute falls back to `None` or an empty list when the object omits it.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Image {
    url: String,
}

#[derive(Deserialize, Default)]
struct ExternalUrls {
    spotify: Option<String>,
}

#[derive(Deserialize)]
struct Followers {
    total: Option<u64>,
}

fn first_image(images: Option<Vec<Image>>) -> Option<String> {
    images.and_then(|images| images.into_iter().next()).map(|image| image.url)
}

fn spotify_url(urls: Option<ExternalUrls>) -> Option<String> {
    urls.unwrap_or_default().spotify
}

fn follower_count(followers: Option<Followers>) -> Option<u64> {
    followers.and_then(|f| f.total)
}

#[derive(Deserialize)]
struct UserObject {
    id: String,
    display_name: Option<String>,
    external_urls: Option<ExternalUrls>,
    images: Option<Vec<Image>>,
    followers: Option<Followers>,
}

/// The signed in user as reported by `/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserObject")]
pub struct Profile {
    /// Catalog id
    pub id: String,
    /// Name shown on the profile, if any
    pub display_name: Option<String>,
    /// Link to the profile on open.spotify.com
    pub profile_url: Option<String>,
    /// First and largest image
    pub image_url: Option<String>,
    /// Follower count
    pub followers: Option<u64>,
}

impl From<UserObject> for Profile {
    fn from(u: UserObject) -> Profile {
        Profile {
            id: u.id,
            display_name: u.display_name,
            profile_url: spotify_url(u.external_urls),
            image_url: first_image(u.images),
            followers: follower_count(u.followers),
        }
    }
}

#[derive(Deserialize)]
struct ArtistObject {
    id: String,
    name: String,
    genres: Option<Vec<String>>,
    popularity: Option<u32>,
    followers: Option<Followers>,
    images: Option<Vec<Image>>,
    external_urls: Option<ExternalUrls>,
}

/// Catalog artist. Simplified artist objects (inside albums and tracks)
/// carry no genres, popularity or images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArtistObject")]
pub struct Artist {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Genres, empty for simplified objects
    pub genres: Vec<String>,
    /// Popularity from 0 to 100
    pub popularity: Option<u32>,
    /// Follower count
    pub followers: Option<u64>,
    /// First and largest image
    pub image_url: Option<String>,
    /// Link on open.spotify.com
    pub url: Option<String>,
}

impl From<ArtistObject> for Artist {
    fn from(a: ArtistObject) -> Artist {
        Artist {
            id: a.id,
            name: a.name,
            genres: a.genres.unwrap_or_default(),
            popularity: a.popularity,
            followers: follower_count(a.followers),
            image_url: first_image(a.images),
            url: spotify_url(a.external_urls),
        }
    }
}

#[derive(Deserialize)]
struct AlbumObject {
    id: String,
    name: String,
    album_type: Option<String>,
    release_date: Option<String>,
    total_tracks: Option<u32>,
    images: Option<Vec<Image>>,
    external_urls: Option<ExternalUrls>,
    artists: Option<Vec<Artist>>,
}

/// Catalog album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AlbumObject")]
pub struct Album {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// `album`, `single` or `compilation`
    pub album_type: Option<String>,
    /// Release date as reported, precision varies
    pub release_date: Option<String>,
    /// Number of tracks on the album
    pub total_tracks: Option<u32>,
    /// First and largest image
    pub image_url: Option<String>,
    /// Link on open.spotify.com
    pub url: Option<String>,
    /// Credited artists
    pub artists: Vec<Artist>,
}

impl From<AlbumObject> for Album {
    fn from(a: AlbumObject) -> Album {
        Album {
            id: a.id,
            name: a.name,
            album_type: a.album_type,
            release_date: a.release_date,
            total_tracks: a.total_tracks,
            image_url: first_image(a.images),
            url: spotify_url(a.external_urls),
            artists: a.artists.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct TrackObject {
    id: String,
    name: String,
    duration_ms: u64,
    track_number: Option<u32>,
    popularity: Option<u32>,
    preview_url: Option<String>,
    explicit: Option<bool>,
    external_urls: Option<ExternalUrls>,
    artists: Option<Vec<Artist>>,
    album: Option<Album>,
}

/// Catalog track. `album` is missing for tracks listed under an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TrackObject")]
pub struct Track {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
    /// Length in milliseconds
    pub duration_ms: u64,
    /// Position on its album
    pub track_number: Option<u32>,
    /// Popularity from 0 to 100
    pub popularity: Option<u32>,
    /// 30 second preview, if offered
    pub preview_url: Option<String>,
    /// Explicit lyrics flag
    pub explicit: bool,
    /// Link on open.spotify.com
    pub url: Option<String>,
    /// Credited artists
    pub artists: Vec<Artist>,
    /// Album the track appears on
    pub album: Option<Album>,
}

impl From<TrackObject> for Track {
    fn from(t: TrackObject) -> Track {
        Track {
            id: t.id,
            name: t.name,
            duration_ms: t.duration_ms,
            track_number: t.track_number,
            popularity: t.popularity,
            preview_url: t.preview_url,
            explicit: t.explicit.unwrap_or_default(),
            url: spotify_url(t.external_urls),
            artists: t.artists.unwrap_or_default(),
            album: t.album,
        }
    }
}

/// A single search hit
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Resource {
    /// Result of an artist search
    Artist(Artist),
    /// Result of an album search
    Album(Album),
    /// Result of a track search
    Track(Track),
}

impl Resource {
    /// Catalog id of the hit
    pub fn id(&self) -> &str {
        match self {
            Resource::Artist(a) => &a.id,
            Resource::Album(a) => &a.id,
            Resource::Track(t) => &t.id,
        }
    }

    /// Display name of the hit
    pub fn name(&self) -> &str {
        match self {
            Resource::Artist(a) => &a.name,
            Resource::Album(a) => &a.name,
            Resource::Track(t) => &t.name,
        }
    }
}

/// Audio characteristics reported for every track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// How suitable the track is for dancing
    Danceability,
    /// Perceived intensity
    Energy,
    /// Presence of spoken words
    Speechiness,
    /// Confidence the track is acoustic
    Acousticness,
    /// Likelihood of no vocals
    Instrumentalness,
    /// Presence of an audience
    Liveness,
    /// Musical positiveness
    Valence,
}

impl Feature {
    /// Field name in the audio features body
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Danceability => "danceability",
            Feature::Energy => "energy",
            Feature::Speechiness => "speechiness",
            Feature::Acousticness => "acousticness",
            Feature::Instrumentalness => "instrumentalness",
            Feature::Liveness => "liveness",
            Feature::Valence => "valence",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named audio feature value of a track
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackFeature {
    /// Which feature
    #[serde(rename = "name")]
    pub feature: Feature,
    /// Feature value, mostly within 0.0 to 1.0
    pub value: f64,
}

impl TrackFeature {
    /// Pair a feature with its value
    pub fn new(feature: Feature, value: f64) -> Self {
        TrackFeature { feature, value }
    }

    /// Name of the feature
    pub fn name(&self) -> &'static str {
        self.feature.as_str()
    }
}

/// Everything shown on an artist page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistOverview {
    /// The artist itself
    pub artist: Artist,
    /// Related artists
    pub related: Vec<Artist>,
    /// Most popular tracks
    pub top_tracks: Vec<Track>,
    /// Albums of the artist
    pub albums: Vec<Album>,
}

/// An album together with its track listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlbumOverview {
    /// Album the track appears on
    pub album: Album,
    /// Track listing
    pub tracks: Vec<Track>,
}

/// A track together with its audio features
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackOverview {
    /// The track itself
    pub track: Track,
    /// The seven audio features
    pub features: Vec<TrackFeature>,
}

// Body of `/track-audio-features/{id}`. The remaining keys (key, mode, tempo, ...) are ignored.
#[derive(Deserialize)]
pub(crate) struct AudioFeatures {
    danceability: f64,
    energy: f64,
    speechiness: f64,
    acousticness: f64,
    instrumentalness: f64,
    liveness: f64,
    valence: f64,
}

impl From<AudioFeatures> for Vec<TrackFeature> {
    fn from(f: AudioFeatures) -> Vec<TrackFeature> {
        vec![
            TrackFeature::new(Feature::Danceability, f.danceability),
            TrackFeature::new(Feature::Energy, f.energy),
            TrackFeature::new(Feature::Speechiness, f.speechiness),
            TrackFeature::new(Feature::Acousticness, f.acousticness),
            TrackFeature::new(Feature::Instrumentalness, f.instrumentalness),
            TrackFeature::new(Feature::Liveness, f.liveness),
            TrackFeature::new(Feature::Valence, f.valence),
        ]
    }
}

#[derive(Deserialize)]
pub(crate) struct Page<T> {
    pub items: Vec<T>,
}

#[derive(Deserialize)]
pub(crate) struct ArtistSearch {
    pub artists: Page<Artist>,
}

#[derive(Deserialize)]
pub(crate) struct AlbumSearch {
    pub albums: Page<Album>,
}

#[derive(Deserialize)]
pub(crate) struct TrackSearch {
    pub tracks: Page<Track>,
}

#[derive(Deserialize)]
pub(crate) struct ArtistList {
    pub artists: Vec<Artist>,
}

#[derive(Deserialize)]
pub(crate) struct TrackList {
    pub tracks: Vec<Track>,
}
