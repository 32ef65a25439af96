//! HTTP client for the museum catalog's read endpoints.
//!
//! Every request carries the static access key as the `apikey` query
//! parameter. Object-list URLs (searches, attribute links and the
//! server's own next/prev links) all go through [`CatalogClient::fetch_objects`].

use crate::error::catalog_client::CatalogClientError;

use common::{ErrorLocation, HttpStatusCode, RedactedApiKey};
use models::reference::ReferenceResponse;
use models::{Page, ReferenceEntry};

use std::panic::Location;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const API_KEY_PARAM: &str = "apikey";
const OBJECT_ENDPOINT: &str = "object";
const CENTURY_ENDPOINT: &str = "century";
const CLASSIFICATION_ENDPOINT: &str = "classification";
const REFERENCE_PAGE_SIZE: &str = "100";

/// Object attributes that detail-view links can filter by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAttribute {
    Culture,
    Technique,
    Medium,
    Person,
}

impl SearchAttribute {
    pub fn query_key(&self) -> &'static str {
        match self {
            SearchAttribute::Culture => "culture",
            SearchAttribute::Technique => "technique",
            SearchAttribute::Medium => "medium",
            SearchAttribute::Person => "person",
        }
    }
}

/// Filters of a free-form object search. Blank values mean "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub classification: Option<String>,
    pub century: Option<String>,
    pub keyword: Option<String>,
    pub size: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: Url,
    client: Client,
    api_key: RedactedApiKey,
}

impl CatalogClient {
    pub fn new(base_url_str: &str, api_key: RedactedApiKey) -> Result<Self, CatalogClientError> {
        let mut base_url = Url::parse(base_url_str)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self {
            base_url,
            client,
            api_key,
        })
    }

    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, CatalogClientError> {
        let mut url = self.base_url.join(endpoint)?;
        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, self.api_key.as_str());
        Ok(url)
    }

    /// Build `{base}/object?apikey=..` with every non-blank filter appended.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url, CatalogClientError> {
        let mut url = self.endpoint_url(OBJECT_ENDPOINT)?;
        {
            let mut pairs = url.query_pairs_mut();
            let filters = [
                ("classification", &query.classification),
                ("century", &query.century),
                ("keyword", &query.keyword),
            ];
            for (key, value) in filters {
                if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                    pairs.append_pair(key, value);
                }
            }
            if let Some(size) = query.size {
                pairs.append_pair("size", &size.to_string());
            }
        }
        Ok(url)
    }

    /// Build the object query for a single attribute value.
    pub fn attribute_url(
        &self,
        attribute: SearchAttribute,
        value: &str,
    ) -> Result<Url, CatalogClientError> {
        let mut url = self.endpoint_url(OBJECT_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair(attribute.query_key(), value);
        Ok(url)
    }

    /// Parse a server-supplied pagination link.
    pub fn parse_link(&self, link: &str) -> Result<Url, CatalogClientError> {
        Ok(Url::parse(link)?)
    }

    /// Fetch one page of objects from any object-list URL.
    pub async fn fetch_objects(&self, url: &Url) -> Result<Page, CatalogClientError> {
        debug!("Fetching objects: {}", self.api_key.scrub(url.as_str()));
        let page: Page = self.get_json(url.clone()).await?;
        debug!("Fetched {} object record(s)", page.records.len());
        Ok(page)
    }

    /// All centuries, in temporal order.
    pub async fn fetch_centuries(&self) -> Result<Vec<ReferenceEntry>, CatalogClientError> {
        self.fetch_reference(CENTURY_ENDPOINT, "temporalorder").await
    }

    /// All classifications, by name.
    pub async fn fetch_classifications(&self) -> Result<Vec<ReferenceEntry>, CatalogClientError> {
        self.fetch_reference(CLASSIFICATION_ENDPOINT, "name").await
    }

    async fn fetch_reference(
        &self,
        endpoint: &str,
        sort: &str,
    ) -> Result<Vec<ReferenceEntry>, CatalogClientError> {
        let mut url = self.endpoint_url(endpoint)?;
        url.query_pairs_mut()
            .append_pair("size", REFERENCE_PAGE_SIZE)
            .append_pair("sort", sort);

        debug!("Fetching reference list: {endpoint}");
        let response: ReferenceResponse = self.get_json(url).await?;
        Ok(response.records)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, CatalogClientError> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = HttpStatusCode::from(response.status().as_u16());
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!(
                        "Failed to read error body for status {status}: {}",
                        e.without_url()
                    );
                    String::new()
                }
            };
            return Err(CatalogClientError::Server {
                status,
                message: self.api_key.scrub(&body),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        let value: T = serde_json::from_str(&body)?;

        Ok(value)
    }
}
