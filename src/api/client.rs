//! Catalog API client.
//!
//! One [`CatalogClient`] wraps a shared `reqwest` client handle and is
//! cheap to clone; all operations are stateless apart from that handle.

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, trace, warn};

use crate::api::retry::RetryPolicy;
use crate::error::{CatalogError, Result};
use crate::models::{Album, Artist, Page, SearchResult, SearchType, Track};

/// Host of the catalog API.
const API_BASE_URL: &str = "https://api.example-catalog.com";

/// API version segment, fixed.
const API_VERSION: &str = "v1";

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the music catalog API.
///
/// Provides typed search and artist/album/track lookups. Requests that
/// hit the API's rate limit are retried a bounded number of times with
/// exponential backoff before surfacing
/// [`CatalogError::RateLimited`](crate::CatalogError::RateLimited).
///
/// # Example
///
/// ```rust,no_run
/// use melodex::{CatalogClient, SearchType};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CatalogClient::new()?;
///     let result = client
///         .search("daft punk", &[SearchType::Artist], Some(5), None)
///         .await?;
///     for artist in &result.artists.items {
///         println!("{} ({})", artist.name, artist.id);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    retry: RetryPolicy,
}

/// Error body shape for HTTP 400 responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: String,
}

/// Error body shape for HTTP 401 responses. The API uses a different
/// JSON shape here than for 400; that asymmetry is its documented
/// contract.
#[derive(Debug, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    error_description: String,
}

/// Envelope for bulk artist responses (`{"artists": [...]}`).
#[derive(Debug, Deserialize)]
struct ArtistsEnvelope {
    #[serde(default)]
    artists: Vec<Artist>,
}

/// Envelope for bulk album responses (`{"albums": [...]}`).
#[derive(Debug, Deserialize)]
struct AlbumsEnvelope {
    #[serde(default)]
    albums: Vec<Album>,
}

/// Envelope for top-track responses (`{"tracks": [...]}`).
#[derive(Debug, Deserialize)]
struct TracksEnvelope {
    #[serde(default)]
    tracks: Vec<Track>,
}

impl CatalogClient {
    /// Create a new client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::default()
    }

    /// Perform one GET round trip and decode the body into `T`.
    ///
    /// Statuses 400 and 401 map to typed errors carrying the message
    /// from the API's error body; 429 is retried per the configured
    /// [`RetryPolicy`]; every other status is treated as a success
    /// payload and handed to the JSON decoder.
    async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt: u32 = 0;

        loop {
            debug!("GET {} (attempt {})", url, attempt + 1);
            let response = self.http.get(&url).query(params).send().await?;
            let status = response.status();

            match status {
                StatusCode::BAD_REQUEST => {
                    let body: ApiErrorBody = serde_json::from_str(&response.text().await?)?;
                    error!(
                        "catalog API error {}: {}",
                        body.error.status, body.error.message
                    );
                    return Err(CatalogError::BadRequest(body.error.message));
                }
                StatusCode::UNAUTHORIZED => {
                    let body: AuthErrorBody = serde_json::from_str(&response.text().await?)?;
                    error!("catalog auth error {}: {}", body.error, body.error_description);
                    return Err(CatalogError::Unauthorized(body.error_description));
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    attempt += 1;
                    if attempt >= self.retry.max_attempts {
                        return Err(CatalogError::RateLimited { attempts: attempt });
                    }
                    let hint = retry_after_hint(&response);
                    let delay = self.retry.delay_for(attempt - 1, hint);
                    warn!(
                        "rate limited, retrying in {:?} ({}/{} attempts used)",
                        delay, attempt, self.retry.max_attempts
                    );
                    sleep(delay).await;
                }
                _ => {
                    // The API does not special-case other statuses; any
                    // remaining response is decoded as the success shape.
                    let body = response.text().await?;
                    trace!("response body: {}", body);
                    return Ok(serde_json::from_str(&body)?);
                }
            }
        }
    }

    /// Search the catalog for artists, albums and/or tracks matching a
    /// keyword string.
    ///
    /// `limit` and `offset` are omitted from the query when `None`,
    /// letting the API defaults apply. Values are passed through
    /// without client-side bound checks; the API enforces its own.
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<SearchResult> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", query.to_string()),
            ("type", SearchType::join(types)),
        ];
        push_paging(&mut params, limit, offset);
        self.request("/search", &params).await
    }

    /// Fetch a single artist by ID.
    pub async fn get_artist(&self, id: &str) -> Result<Artist> {
        self.request(&format!("/artists/{}", id), &[]).await
    }

    /// Fetch several artists in one request (bulk-fetch by comma-joined
    /// IDs). Returns however many artists the API matched; counts are
    /// not validated client-side, and IDs beyond the API's own bulk
    /// limit are the caller's concern.
    pub async fn get_artists(&self, ids: &[&str]) -> Result<Vec<Artist>> {
        let params = [("ids", ids.join(","))];
        let envelope: ArtistsEnvelope = self.request("/artists", &params).await?;
        Ok(envelope.artists)
    }

    /// Fetch artists similar to the given artist.
    pub async fn get_related_artists(&self, id: &str) -> Result<Vec<Artist>> {
        let envelope: ArtistsEnvelope = self
            .request(&format!("/artists/{}/related-artists", id), &[])
            .await?;
        Ok(envelope.artists)
    }

    /// Fetch an artist's albums, filtered by album type.
    ///
    /// Returns the albums of the requested page together with the total
    /// number of albums the query matched, which may exceed the number
    /// of items returned.
    pub async fn get_artist_albums(
        &self,
        id: &str,
        types: &[SearchType],
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<(Vec<Album>, u32)> {
        let mut params: Vec<(&str, String)> = vec![("album_type", SearchType::join(types))];
        push_paging(&mut params, limit, offset);
        let page: Page<Album> = self
            .request(&format!("/artists/{}/albums", id), &params)
            .await?;
        Ok((page.items, page.total))
    }

    /// Fetch an artist's top tracks for a country.
    pub async fn get_artist_top_tracks(&self, id: &str, country: &str) -> Result<Vec<Track>> {
        let params = [("country", country.to_string())];
        let envelope: TracksEnvelope = self
            .request(&format!("/artists/{}/top-tracks", id), &params)
            .await?;
        Ok(envelope.tracks)
    }

    /// Fetch a single album by ID, including its track page.
    pub async fn get_album(&self, id: &str) -> Result<Album> {
        self.request(&format!("/albums/{}", id), &[]).await
    }

    /// Fetch several albums in one request (bulk-fetch by comma-joined
    /// IDs).
    pub async fn get_albums(&self, ids: &[&str]) -> Result<Vec<Album>> {
        let params = [("ids", ids.join(","))];
        let envelope: AlbumsEnvelope = self.request("/albums", &params).await?;
        Ok(envelope.albums)
    }

    /// Fetch the tracks of an album.
    pub async fn get_album_tracks(&self, id: &str) -> Result<Vec<Track>> {
        let page: Page<Track> = self
            .request(&format!("/albums/{}/tracks", id), &[])
            .await?;
        Ok(page.items)
    }
}

/// Append `limit`/`offset` when present; `None` leaves the parameter
/// out entirely so the API default applies.
fn push_paging(params: &mut Vec<(&str, String)>, limit: Option<u32>, offset: Option<u32>) {
    if let Some(limit) = limit {
        params.push(("limit", limit.to_string()));
    }
    if let Some(offset) = offset {
        params.push(("offset", offset.to_string()));
    }
}

/// Parse an integer-seconds `Retry-After` header, if present.
fn retry_after_hint(response: &reqwest::Response) -> Option<Duration> {
    response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// Builder for configuring a [`CatalogClient`].
#[derive(Debug)]
pub struct CatalogClientBuilder {
    base_url: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self {
            base_url: format!("{}/{}", API_BASE_URL, API_VERSION),
            timeout: DEFAULT_TIMEOUT,
            retry: RetryPolicy::default(),
        }
    }
}

impl CatalogClientBuilder {
    /// Set a custom base URL, version segment included (useful for
    /// testing against mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy applied to rate-limited responses.
    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Build the catalog client.
    pub fn build(self) -> Result<CatalogClient> {
        let http = Client::builder().timeout(self.timeout).build()?;
        Ok(CatalogClient {
            http,
            base_url: self.base_url,
            retry: self.retry,
        })
    }
}
