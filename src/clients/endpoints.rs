use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::clients::errors::Error;

/// Kind of catalog object a search is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Search artists, results land in `artists.items`
    Artist,
    /// Search albums, results land in `albums.items`
    Album,
    /// Search tracks, results land in `tracks.items`
    Track,
}

impl Category {
    /// Path segment used by the proxy
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Artist => "artist",
            Category::Album => "album",
            Category::Track => "track",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "artist" => Ok(Category::Artist),
            "album" => Ok(Category::Album),
            "track" => Ok(Category::Track),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

/// Routes exposed by the proxy server. Every caller supplied segment is
/// percent-encoded when the path is rendered.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    /// `/me`
    Me,
    /// `/search/{category}/{query}`
    Search {
        /// Kind of object searched for
        category: Category,
        /// Free text, encoded as one segment
        query: &'a str,
    },
    /// `/artist/{id}`
    Artist(&'a str),
    /// `/artist-related-artists/{id}`
    RelatedArtists(&'a str),
    /// `/artist-top-tracks/{id}`
    TopTracks(&'a str),
    /// `/artist-albums/{id}`
    ArtistAlbums(&'a str),
    /// `/album/{id}`
    Album(&'a str),
    /// `/album-tracks/{id}`
    AlbumTracks(&'a str),
    /// `/track/{id}`
    Track(&'a str),
    /// `/track-audio-features/{id}`
    AudioFeatures(&'a str),
}

impl Endpoint<'_> {
    fn prefix(&self) -> &'static str {
        match self {
            Endpoint::Me => "/me",
            Endpoint::Search { .. } => "/search",
            Endpoint::Artist(_) => "/artist",
            Endpoint::RelatedArtists(_) => "/artist-related-artists",
            Endpoint::TopTracks(_) => "/artist-top-tracks",
            Endpoint::ArtistAlbums(_) => "/artist-albums",
            Endpoint::Album(_) => "/album",
            Endpoint::AlbumTracks(_) => "/album-tracks",
            Endpoint::Track(_) => "/track",
            Endpoint::AudioFeatures(_) => "/track-audio-features",
        }
    }

    /// Path relative to the proxy base url
    pub fn path(&self) -> String {
        let prefix = self.prefix();
        match self {
            Endpoint::Me => prefix.to_string(),
            Endpoint::Search { category, query } => {
                format!("{prefix}/{category}/{}", urlencoding::encode(query))
            }
            Endpoint::Artist(id)
            | Endpoint::RelatedArtists(id)
            | Endpoint::TopTracks(id)
            | Endpoint::ArtistAlbums(id)
            | Endpoint::Album(id)
            | Endpoint::AlbumTracks(id)
            | Endpoint::Track(id)
            | Endpoint::AudioFeatures(id) => format!("{prefix}/{}", urlencoding::encode(id)),
        }
    }
}
