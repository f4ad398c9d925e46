use std::time::Duration;

use reqwest::{redirect, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Desktop browser UA; the API throttles default client strings.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_LIMIT: u32 = 10;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed to issue a hot listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotListingConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Page size; only the first page is ever requested.
    pub limit: u32,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for HotListingConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            limit: DEFAULT_LIMIT,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

pub struct RedditListingResult {
    pub body: String,
    pub status: StatusCode,
}

/// Builds a client that never follows redirects.
pub fn build_client(config: &HotListingConfig) -> Result<Client, FetchHotListingError> {
    let mut builder = Client::builder()
        .redirect(redirect::Policy::none())
        .user_agent(config.user_agent.as_str());

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|source| FetchHotListingError::ClientBuild { source })
}

/// The subreddit name goes into the path as is, without escaping.
pub fn hot_listing_url(base_url: &str, subreddit: &str) -> String {
    format!("{}/r/{subreddit}/hot.json", base_url.trim_end_matches('/'))
}

pub async fn fetch_hot_listing(
    client: &Client,
    config: &HotListingConfig,
    subreddit: &str,
) -> Result<RedditListingResult, FetchHotListingError> {
    let url = hot_listing_url(&config.base_url, subreddit);

    let response = client
        .get(url)
        .query(&[("limit", config.limit)])
        .send()
        .await
        .map_err(|source| FetchHotListingError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchHotListingError::ResponseRead { source })?;

    Ok(RedditListingResult { body, status })
}

pub fn parse_listing(body: &str) -> Result<ListingResponse, serde_json::Error> {
    serde_json::from_str(body)
}

#[derive(Debug, Error)]
pub enum FetchHotListingError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

#[derive(Debug, Deserialize)]
pub struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    pub children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
pub struct ListingChild {
    pub data: PostData,
}

#[derive(Debug, Deserialize)]
pub struct PostData {
    pub title: String,
}

impl ListingResponse {
    /// Titles in the order the listing returned them.
    pub fn titles(self) -> Vec<String> {
        self.data
            .children
            .into_iter()
            .map(|child| child.data.title)
            .collect()
    }
}
