//! Catalog API client
//!
//! Builds the request for each named collection and hands it to a
//! [`Paginated`] sequence. The endpoint map is fetched once, in
//! [`ApiClient::connect`].

use super::endpoints::{EndpointDescriptor, EndpointMap, DISCOVERY_PATH};
use super::models::{Category, Episode, ResourceId, Show};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::{HttpTransport, Transport};
use crate::pagination::Paginated;
use crate::types::{JsonValue, Ordering};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// The logical collections the catalog exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    /// Every category, server default order
    Categories,
    /// Shows in one category, by title
    ShowsByCategory(ResourceId),
    /// Episodes of one show, newest first
    EpisodesByShow(ResourceId),
    /// Editorially recommended episodes, newest first
    RecommendedEpisodes,
    /// All episodes, newest first
    LatestEpisodes,
}

impl Collection {
    /// Key of this collection in the endpoint map
    pub fn endpoint_key(&self) -> &'static str {
        match self {
            Self::Categories => "category",
            Self::ShowsByCategory(_) => "show",
            Self::EpisodesByShow(_) | Self::RecommendedEpisodes | Self::LatestEpisodes => {
                "episode"
            }
        }
    }

    /// Filter parameters, in request order
    pub fn filters(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Categories | Self::LatestEpisodes => Vec::new(),
            Self::ShowsByCategory(id) => vec![("category", id.to_string())],
            Self::EpisodesByShow(id) => vec![("show", id.to_string())],
            Self::RecommendedEpisodes => vec![("recommended", "true".to_string())],
        }
    }

    /// Server-side ordering, if any
    pub fn ordering(&self) -> Option<Ordering> {
        match self {
            Self::Categories => None,
            Self::ShowsByCategory(_) => Some(Ordering::ascending("title")),
            Self::EpisodesByShow(_) | Self::RecommendedEpisodes | Self::LatestEpisodes => {
                Some(Ordering::descending("date_broadcasted"))
            }
        }
    }
}

/// Read-only client for the catalog API
///
/// Cheap to clone; clones share the transport and endpoint map.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    endpoints: Arc<EndpointMap>,
}

impl ApiClient {
    /// Build an HTTP transport from `config` and connect
    pub async fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::with_config(config.transport())?;
        Self::connect(Arc::new(transport), &config.base_url).await
    }

    /// Fetch the endpoint map from `base_url` and create a client
    pub async fn connect(transport: Arc<dyn Transport>, base_url: &str) -> Result<Self> {
        let mut client = Self::with_endpoints(transport, base_url, EndpointMap::default())?;
        let discovery = client
            .url(Some(DISCOVERY_PATH))?
            .ok_or_else(|| Error::config("empty discovery path"))?;
        let body = client.get_json(&discovery).await?;
        let endpoints = EndpointMap::from_json(discovery.as_str(), body)?;

        info!(
            "Discovered {} endpoints at {}",
            endpoints.len(),
            client.base_url
        );
        client.endpoints = Arc::new(endpoints);
        Ok(client)
    }

    /// Create a client from an already known endpoint map
    pub fn with_endpoints(
        transport: Arc<dyn Transport>,
        base_url: &str,
        endpoints: EndpointMap,
    ) -> Result<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints: Arc::new(endpoints),
        })
    }

    /// API host this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The endpoint map fetched at construction
    pub fn endpoints(&self) -> &EndpointMap {
        &self.endpoints
    }

    /// Descriptor for one collection
    pub fn endpoint(&self, key: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.get(key)
    }

    /// Absolute request URL for `location`, always carrying `format=json`
    ///
    /// `location` may be a path relative to the API host or an absolute URL.
    /// `None` yields `None`, which is how the last page reports that there
    /// is nothing more to fetch.
    pub fn url(&self, location: Option<&str>) -> Result<Option<Url>> {
        let Some(location) = location else {
            return Ok(None);
        };

        let mut url = if location.starts_with("http://") || location.starts_with("https://") {
            Url::parse(location)?
        } else {
            let path = location.trim_start_matches('/');
            Url::parse(&format!("{}/{path}", self.base_url))?
        };

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "format")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .append_pair("format", "json")
            .extend_pairs(kept);

        Ok(Some(url))
    }

    /// Request URL for a collection's list endpoint, with filters and ordering
    pub fn collection_url(&self, collection: &Collection) -> Result<Url> {
        let path = self.endpoints.list_endpoint(collection.endpoint_key())?;
        let mut url = self
            .url(Some(path))?
            .ok_or_else(|| Error::unknown_endpoint(collection.endpoint_key()))?;

        {
            let mut query = url.query_pairs_mut();
            for (key, value) in collection.filters() {
                query.append_pair(key, &value);
            }
            if let Some(ordering) = collection.ordering() {
                query.append_pair("order_by", &ordering.to_param());
            }
        }

        debug!("Built request for {:?}: {}", collection, url);
        Ok(url)
    }

    /// Lazy sequence over any collection
    pub fn collection<T: DeserializeOwned + Clone>(
        &self,
        collection: Collection,
    ) -> Result<Paginated<T>> {
        let url = self.collection_url(&collection)?;
        Ok(Paginated::new(self.clone(), url))
    }

    pub fn categories(&self) -> Result<Paginated<Category>> {
        self.collection(Collection::Categories)
    }

    /// Shows in `category`, ordered by title
    pub fn shows(&self, category: &Category) -> Result<Paginated<Show>> {
        self.shows_by_category_id(category.id.clone())
    }

    pub fn shows_by_category_id(&self, id: impl Into<ResourceId>) -> Result<Paginated<Show>> {
        self.collection(Collection::ShowsByCategory(id.into()))
    }

    /// Episodes of `show`, newest first
    pub fn episodes(&self, show: &Show) -> Result<Paginated<Episode>> {
        self.episodes_by_show_id(show.id.clone())
    }

    pub fn episodes_by_show_id(&self, id: impl Into<ResourceId>) -> Result<Paginated<Episode>> {
        self.collection(Collection::EpisodesByShow(id.into()))
    }

    pub fn recommended_episodes(&self) -> Result<Paginated<Episode>> {
        self.collection(Collection::RecommendedEpisodes)
    }

    pub fn latest_episodes(&self) -> Result<Paginated<Episode>> {
        self.collection(Collection::LatestEpisodes)
    }

    /// Fetch one JSON document through the transport
    pub async fn get_json(&self, url: &Url) -> Result<JsonValue> {
        self.transport.fetch(url).await
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("endpoints", &self.endpoints.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
