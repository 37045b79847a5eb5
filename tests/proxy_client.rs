use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use spotify_gateway::clients::{
    Category, ProxyClient,
    entities::{Feature, Resource},
    errors::Error,
};
use spotify_gateway::config::ConfigBuilder;

// Stand-in for the proxy server. Answers by raw (still encoded) request path
// and remembers every path it was asked for.
#[derive(Clone, Default)]
struct MockProxy {
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    seen: Arc<Mutex<Vec<String>>>,
}

impl MockProxy {
    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

async fn answer(State(proxy): State<MockProxy>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    proxy.seen.lock().unwrap().push(path.clone());
    match proxy.routes.get(&path) {
        Some((status, body)) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn start_proxy(routes: Vec<(&str, StatusCode, Value)>) -> (ProxyClient, MockProxy) {
    let proxy = MockProxy {
        routes: Arc::new(
            routes
                .into_iter()
                .map(|(path, status, body)| (path.to_string(), (status, body.to_string())))
                .collect(),
        ),
        seen: Arc::default(),
    };
    let app = Router::new().fallback(answer).with_state(proxy.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let config = ConfigBuilder::new().base_url(format!("http://{addr}")).build().unwrap();
    (ProxyClient::new(config), proxy)
}

fn artist(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "genres": ["pop"],
        "popularity": 70,
        "images": [{ "url": format!("https://img.example/{id}") }],
        "external_urls": { "spotify": format!("https://open.spotify.com/artist/{id}") }
    })
}

fn album(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "album_type": "album",
        "release_date": "1982-11-30",
        "total_tracks": 9,
        "images": [{ "url": format!("https://img.example/{id}") }],
        "artists": [{ "id": "mj", "name": "Michael Jackson" }]
    })
}

fn track(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "duration_ms": 200_000,
        "track_number": 1,
        "explicit": false,
        "artists": [{ "id": "mj", "name": "Michael Jackson" }],
        "album": album("thriller", "Thriller")
    })
}

fn audio_features() -> Value {
    json!({
        "danceability": 0.8,
        "energy": 0.6,
        "speechiness": 0.1,
        "acousticness": 0.2,
        "instrumentalness": 0.0,
        "liveness": 0.3,
        "valence": 0.5,
        "tempo": 117.0,
        "id": "t1"
    })
}

#[tokio::test]
async fn test_fetch_profile() {
    let (client, proxy) = start_proxy(vec![(
        "/me",
        StatusCode::OK,
        json!({
            "id": "listener",
            "display_name": "Listener",
            "images": [{ "url": "https://img.example/me" }],
            "followers": { "total": 12 }
        }),
    )])
    .await;

    let profile = client.fetch_profile().await.unwrap();
    assert_eq!(profile.id, "listener");
    assert_eq!(profile.display_name.as_deref(), Some("Listener"));
    assert_eq!(profile.image_url.as_deref(), Some("https://img.example/me"));
    assert_eq!(profile.followers, Some(12));
    assert_eq!(proxy.seen(), ["/me"]);
}

#[tokio::test]
async fn test_search_artists_keeps_order() {
    let (client, proxy) = start_proxy(vec![(
        "/search/artist/the%20beatles",
        StatusCode::OK,
        json!({ "artists": { "items": [
            artist("a1", "The Beatles"),
            artist("a2", "The Beatles Revival"),
            artist("a3", "Beatles Tribute")
        ] } }),
    )])
    .await;

    let found = client.search(Category::Artist, "the beatles").await.unwrap();
    let ids: Vec<_> = found.iter().map(Resource::id).collect();
    assert_eq!(ids, ["a1", "a2", "a3"]);
    assert!(found.iter().all(|r| matches!(r, Resource::Artist(_))));
    assert_eq!(proxy.seen(), ["/search/artist/the%20beatles"]);
}

#[tokio::test]
async fn test_search_album() {
    let (client, _proxy) = start_proxy(vec![(
        "/search/album/Thriller",
        StatusCode::OK,
        json!({ "albums": { "items": [album("thriller", "Thriller")] } }),
    )])
    .await;

    let found = client.search(Category::Album, "Thriller").await.unwrap();
    assert_eq!(found.len(), 1);
    match &found[0] {
        Resource::Album(album) => {
            assert_eq!(album.id, "thriller");
            assert_eq!(album.name, "Thriller");
            assert_eq!(album.total_tracks, Some(9));
            assert_eq!(album.artists[0].name, "Michael Jackson");
        }
        other => panic!("expected an album, got {other:?}"),
    }
}

#[tokio::test]
async fn test_search_track_encodes_query() {
    let (client, proxy) = start_proxy(vec![(
        "/search/track/rock%20%26%20roll%2Fblues%3F",
        StatusCode::OK,
        json!({ "tracks": { "items": [track("t1", "Rock & Roll")] } }),
    )])
    .await;

    let found = client.search(Category::Track, "rock & roll/blues?").await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(matches!(&found[0], Resource::Track(t) if t.name == "Rock & Roll"));
    assert_eq!(proxy.seen(), ["/search/track/rock%20%26%20roll%2Fblues%3F"]);
}

#[tokio::test]
async fn test_search_with_no_hits() {
    let (client, _proxy) = start_proxy(vec![(
        "/search/album/zzz",
        StatusCode::OK,
        json!({ "albums": { "items": [] } }),
    )])
    .await;

    assert!(client.search(Category::Album, "zzz").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reserved_characters_in_ids_are_encoded() {
    let (client, proxy) = start_proxy(vec![
        ("/artist/a%2Fb%3Fc%23d", StatusCode::OK, artist("a/b?c#d", "Odd")),
        ("/track/x%20y%26z", StatusCode::OK, track("x y&z", "Odd track")),
    ])
    .await;

    let artist = client.fetch_artist("a/b?c#d").await.unwrap();
    assert_eq!(artist.id, "a/b?c#d");
    let track = client.fetch_track("x y&z").await.unwrap();
    assert_eq!(track.id, "x y&z");
    assert_eq!(proxy.seen(), ["/artist/a%2Fb%3Fc%23d", "/track/x%20y%26z"]);
}

#[tokio::test]
async fn test_artist_collections() {
    let (client, _proxy) = start_proxy(vec![
        (
            "/artist-related-artists/mj",
            StatusCode::OK,
            json!({ "artists": [artist("p", "Prince"), artist("jj", "Janet Jackson")] }),
        ),
        (
            "/artist-top-tracks/mj",
            StatusCode::OK,
            json!({ "tracks": [track("t1", "Billie Jean"), track("t2", "Beat It")] }),
        ),
        (
            "/artist-albums/mj",
            StatusCode::OK,
            json!({ "items": [album("thriller", "Thriller"), album("bad", "Bad")], "total": 2 }),
        ),
    ])
    .await;

    let related = client.fetch_related_artists("mj").await.unwrap();
    assert_eq!(related.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), ["Prince", "Janet Jackson"]);

    let top = client.fetch_top_tracks("mj").await.unwrap();
    assert_eq!(top.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(), ["Billie Jean", "Beat It"]);
    assert_eq!(top[0].album.as_ref().map(|a| a.name.as_str()), Some("Thriller"));

    let albums = client.fetch_albums_for_artist("mj").await.unwrap();
    assert_eq!(albums.iter().map(|a| a.id.as_str()).collect::<Vec<_>>(), ["thriller", "bad"]);
}

#[tokio::test]
async fn test_album_and_tracks() {
    let (client, _proxy) = start_proxy(vec![
        ("/album/thriller", StatusCode::OK, album("thriller", "Thriller")),
        (
            "/album-tracks/thriller",
            StatusCode::OK,
            json!({ "items": [
                { "id": "t1", "name": "Wanna Be Startin' Somethin'", "duration_ms": 363_000, "track_number": 1 },
                { "id": "t2", "name": "Baby Be Mine", "duration_ms": 260_000, "track_number": 2 }
            ] }),
        ),
    ])
    .await;

    let album = client.fetch_album("thriller").await.unwrap();
    assert_eq!(album.release_date.as_deref(), Some("1982-11-30"));

    let tracks = client.fetch_tracks_for_album("thriller").await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[1].track_number, Some(2));
    assert!(tracks.iter().all(|t| t.album.is_none()));
}

#[tokio::test]
async fn test_audio_features_are_seven_fixed_pairs() {
    let (client, _proxy) =
        start_proxy(vec![("/track-audio-features/t1", StatusCode::OK, audio_features())]).await;

    let features = client.fetch_audio_features("t1").await.unwrap();
    let pairs: Vec<_> = features.iter().map(|f| (f.feature, f.value)).collect();
    assert_eq!(
        pairs,
        [
            (Feature::Danceability, 0.8),
            (Feature::Energy, 0.6),
            (Feature::Speechiness, 0.1),
            (Feature::Acousticness, 0.2),
            (Feature::Instrumentalness, 0.0),
            (Feature::Liveness, 0.3),
            (Feature::Valence, 0.5),
        ]
    );
}

#[tokio::test]
async fn test_overviews() {
    let (client, proxy) = start_proxy(vec![
        ("/artist/mj", StatusCode::OK, artist("mj", "Michael Jackson")),
        ("/artist-related-artists/mj", StatusCode::OK, json!({ "artists": [artist("p", "Prince")] })),
        ("/artist-top-tracks/mj", StatusCode::OK, json!({ "tracks": [track("t1", "Billie Jean")] })),
        ("/artist-albums/mj", StatusCode::OK, json!({ "items": [album("thriller", "Thriller")] })),
        ("/track/t1", StatusCode::OK, track("t1", "Billie Jean")),
        ("/track-audio-features/t1", StatusCode::OK, audio_features()),
    ])
    .await;

    let overview = client.artist_overview("mj").await.unwrap();
    assert_eq!(overview.artist.name, "Michael Jackson");
    assert_eq!(overview.related.len(), 1);
    assert_eq!(overview.top_tracks.len(), 1);
    assert_eq!(overview.albums.len(), 1);

    let overview = client.track_overview("t1").await.unwrap();
    assert_eq!(overview.track.name, "Billie Jean");
    assert_eq!(overview.features.len(), 7);

    assert_eq!(proxy.seen().len(), 6);

    // one failing request rejects the whole overview
    match client.album_overview("missing").await {
        Err(Error::Http(e)) => assert_eq!(e.status(), Some(reqwest::StatusCode::NOT_FOUND)),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_status_is_rejected() {
    let (client, _proxy) = start_proxy(vec![(
        "/artist/broken",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "upstream failed" }),
    )])
    .await;

    match client.fetch_artist("broken").await {
        Err(Error::Http(e)) => assert_eq!(e.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_body_is_a_decode_error() {
    let (client, _proxy) = start_proxy(vec![
        ("/artist/no-name", StatusCode::OK, json!({ "id": "no-name" })),
        ("/track-audio-features/t1", StatusCode::OK, json!({ "danceability": 0.8 })),
        ("/search/artist/x", StatusCode::OK, json!({ "albums": { "items": [] } })),
    ])
    .await;

    assert!(matches!(client.fetch_artist("no-name").await, Err(Error::Decode(_))));
    assert!(matches!(client.fetch_audio_features("t1").await, Err(Error::Decode(_))));
    assert!(matches!(client.search(Category::Artist, "x").await, Err(Error::Decode(_))));
}

#[tokio::test]
async fn test_unreachable_proxy_is_rejected() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ConfigBuilder::new().base_url(format!("http://{addr}")).build().unwrap();
    let client = ProxyClient::new(config);

    match client.fetch_profile().await {
        Err(Error::Http(e)) => assert!(e.is_connect() || e.is_request()),
        other => panic!("unexpected result: {other:?}"),
    }
}
