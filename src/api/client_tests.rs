#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::retry::RetryPolicy;
    use crate::{CatalogClient, CatalogError, SearchType};

    /// Client pointed at the mock server, with fast retries so
    /// rate-limit tests don't sleep for real.
    fn test_client(server: &MockServer) -> CatalogClient {
        CatalogClient::builder()
            .base_url(format!("{}/v1", server.uri()))
            .retry_policy(RetryPolicy::new(3, Duration::from_millis(1)))
            .build()
            .unwrap()
    }

    fn artist_body(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "href": format!("https://api.example-catalog.com/v1/artists/{id}"),
            "type": "artist",
            "uri": format!("catalog:artist:{id}"),
            "popularity": 70,
            "external_urls": {},
            "genres": ["electronic"],
            "images": [{ "height": 640, "width": 640, "url": "https://img.example/a.jpg" }]
        })
    }

    fn album_body(id: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "release_date": "2013-05-17",
            "album_type": "album",
            "genres": [],
            "images": [],
            "artists": [artist_body("ar1", "Daft Punk")],
            "href": format!("https://api.example-catalog.com/v1/albums/{id}"),
            "popularity": 80,
            "external_urls": {}
        })
    }

    fn track_body(id: &str, name: &str, number: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "disc_number": 1,
            "track_number": number,
            "duration_ms": 200000,
            "popularity": 50,
            "artists": [artist_body("ar1", "Daft Punk")]
        })
    }

    #[tokio::test]
    async fn search_omits_limit_and_offset_when_unset() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", "abc"))
            .and(query_param("type", "artist,album"))
            .and(query_param_is_missing("limit"))
            .and(query_param_is_missing("offset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "artists": {
                    "limit": 20, "offset": 0, "total": 1,
                    "items": [artist_body("ar1", "Abc Artist")]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client
            .search("abc", &[SearchType::Artist, SearchType::Album], None, None)
            .await
            .unwrap();

        assert_eq!(result.artists.len(), 1);
        assert_eq!(result.artists.items[0].name, "Abc Artist");
        // Category not requested stays at its empty default.
        assert!(result.tracks.is_empty());
    }

    #[tokio::test]
    async fn search_sends_limit_and_offset_when_set() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search"))
            .and(query_param("q", "abc"))
            .and(query_param("type", "track"))
            .and(query_param("limit", "10"))
            .and(query_param("offset", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tracks": {
                    "limit": 10, "offset": 5, "total": 100,
                    "items": [track_body("t1", "Abc Track", 1)]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let result = client
            .search("abc", &[SearchType::Track], Some(10), Some(5))
            .await
            .unwrap();

        assert_eq!(result.tracks.len(), 1);
        assert_eq!(result.tracks.total, 100);
    }

    #[tokio::test]
    async fn get_artist_decodes_full_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_body("ar1", "Daft Punk")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let artist = client.get_artist("ar1").await.unwrap();

        assert_eq!(artist.id, "ar1");
        assert_eq!(artist.name, "Daft Punk");
        assert_eq!(artist.genres, vec!["electronic"]);
    }

    #[tokio::test]
    async fn get_artists_joins_ids_with_commas() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists"))
            .and(query_param("ids", "a,b,c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "artists": [
                    artist_body("a", "First"),
                    artist_body("b", "Second"),
                    artist_body("c", "Third")
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let artists = client.get_artists(&["a", "b", "c"]).await.unwrap();

        assert_eq!(artists.len(), 3);
        assert_eq!(artists[2].name, "Third");
    }

    #[tokio::test]
    async fn get_artists_accepts_short_response() {
        // The API may match fewer IDs than requested; no client-side
        // count validation.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists"))
            .and(query_param("ids", "a,missing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "artists": [artist_body("a", "First")]
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let artists = client.get_artists(&["a", "missing"]).await.unwrap();
        assert_eq!(artists.len(), 1);
    }

    #[tokio::test]
    async fn get_related_artists_unwraps_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1/related-artists"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "artists": [artist_body("ar2", "Justice")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let related = client.get_related_artists("ar1").await.unwrap();

        assert_eq!(related.len(), 1);
        assert_eq!(related[0].name, "Justice");
    }

    #[tokio::test]
    async fn get_artist_albums_passes_total_through() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1/albums"))
            .and(query_param("album_type", "album,single"))
            .and(query_param("limit", "2"))
            .and(query_param_is_missing("offset"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": 2, "offset": 0, "total": 57,
                "items": [album_body("al1", "Homework"), album_body("al2", "Discovery")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let (albums, total) = client
            .get_artist_albums(
                "ar1",
                &[SearchType::Album, SearchType::Single],
                Some(2),
                None,
            )
            .await
            .unwrap();

        // total reflects the whole query, not just the returned page
        assert_eq!(albums.len(), 2);
        assert_eq!(total, 57);
        assert_eq!(albums[0].name, "Homework");
    }

    #[tokio::test]
    async fn get_artist_top_tracks_sends_country() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1/top-tracks"))
            .and(query_param("country", "SE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tracks": [track_body("t1", "One More Time", 1)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tracks = client.get_artist_top_tracks("ar1", "SE").await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "One More Time");
    }

    #[tokio::test]
    async fn get_album_decodes_track_page() {
        let server = MockServer::start().await;

        let mut body = album_body("al1", "Discovery");
        body["tracks"] = serde_json::json!({
            "limit": 50, "offset": 0, "total": 2,
            "items": [track_body("t1", "One More Time", 1), track_body("t2", "Aerodynamic", 2)]
        });

        Mock::given(method("GET"))
            .and(path("/v1/albums/al1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let album = client.get_album("al1").await.unwrap();

        assert_eq!(album.name, "Discovery");
        assert_eq!(album.tracks.len(), 2);
        assert_eq!(album.tracks.items[1].track_number, 2);
    }

    #[tokio::test]
    async fn get_albums_joins_ids_with_commas() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/albums"))
            .and(query_param("ids", "al1,al2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "albums": [album_body("al1", "Homework"), album_body("al2", "Discovery")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let albums = client.get_albums(&["al1", "al2"]).await.unwrap();

        assert_eq!(albums.len(), 2);
    }

    #[tokio::test]
    async fn get_album_tracks_unwraps_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/albums/al1/tracks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "limit": 50, "offset": 0, "total": 1,
                "items": [track_body("t1", "One More Time", 1)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tracks = client.get_album_tracks("al1").await.unwrap();

        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].name, "One More Time");
    }

    #[tokio::test]
    async fn bad_request_carries_api_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/nope"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "status": "400", "message": "bad id" }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_artist("nope").await.unwrap_err();

        match err {
            CatalogError::BadRequest(msg) => assert_eq!(msg, "bad id"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unauthorized_carries_error_description() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/albums/al1"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "invalid_token",
                "error_description": "token expired"
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_album("al1").await.unwrap_err();

        match err {
            CatalogError::Unauthorized(msg) => assert_eq!(msg, "token expired"),
            other => panic!("expected Unauthorized, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn rate_limit_retries_then_succeeds() {
        let server = MockServer::start().await;

        // First request is limited; the retry sees the 200 mock.
        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(artist_body("ar1", "Daft Punk")))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let artist = client.get_artist("ar1").await.unwrap();

        // The caller never observes the intermediate 429.
        assert_eq!(artist.name, "Daft Punk");
    }

    #[tokio::test]
    async fn rate_limit_surfaces_after_budget_exhausted() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1"))
            .respond_with(ResponseTemplate::new(429))
            .expect(2)
            .mount(&server)
            .await;

        let client = CatalogClient::builder()
            .base_url(format!("{}/v1", server.uri()))
            .retry_policy(RetryPolicy::new(2, Duration::from_millis(1)))
            .build()
            .unwrap();

        let err = client.get_artist("ar1").await.unwrap_err();

        match err {
            CatalogError::RateLimited { attempts } => assert_eq!(attempts, 2),
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unexpected_status_is_decoded_as_success() {
        // Statuses other than 400/401/429 are not special-cased; the
        // body is handed to the decoder as if it were a success.
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1"))
            .respond_with(ResponseTemplate::new(502).set_body_json(artist_body("ar1", "Daft Punk")))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let artist = client.get_artist("ar1").await.unwrap();
        assert_eq!(artist.name, "Daft Punk");
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/artists/ar1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.get_artist("ar1").await.unwrap_err();

        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
