//! Civic-data client — the only place that talks to the Represent postcode API.
//!
//! One GET per lookup, no retries and no caching. The resolver depends on the
//! `RepresentativeSource` trait so handlers can be exercised with an
//! in-process fake.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::representative::{null_as_empty, RepresentativeCandidate};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("civic-data service returned status {0}")]
    Status(u16),

    #[error("invalid civic-data base URL: {0}")]
    InvalidUrl(String),
}

/// Body of `GET /postcodes/{code}/`. Either list may be absent or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostcodeResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub representatives_centroid: Vec<RepresentativeCandidate>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub representatives_concordance: Vec<RepresentativeCandidate>,
}

/// Anything that can answer a postcode lookup with candidate representatives.
///
/// Carried in `AppState` as `Arc<dyn RepresentativeSource>`.
#[async_trait]
pub trait RepresentativeSource: Send + Sync {
    async fn lookup(&self, postal_code: &str) -> Result<PostcodeResponse, LookupError>;
}

/// HTTP client for the Represent API (`https://represent.opennorth.ca`).
#[derive(Clone)]
pub struct RepresentClient {
    client: Client,
    base_url: Url,
}

impl RepresentClient {
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let base_url =
            Url::parse(base_url).map_err(|e| LookupError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            base_url,
        })
    }

    /// `{base}/postcodes/{code}/`, with the code percent-encoded as one segment.
    fn postcode_url(&self, postal_code: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push("postcodes")
                .push(postal_code)
                .push("");
        }
        url
    }
}

#[async_trait]
impl RepresentativeSource for RepresentClient {
    async fn lookup(&self, postal_code: &str) -> Result<PostcodeResponse, LookupError> {
        let url = self.postcode_url(postal_code);
        debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Civic-data lookup for {postal_code} returned {status}");
            return Err(LookupError::Status(status.as_u16()));
        }

        Ok(response.json::<PostcodeResponse>().await?)
    }
}
