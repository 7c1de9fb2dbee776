//! Endpoint discovery types

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Discovery path, relative to the API host
pub const DISCOVERY_PATH: &str = "/v1/";

/// Where a collection lives, as advertised by the discovery document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Path of the paginated list for this collection
    pub list_endpoint: String,

    /// Other advertised fields (e.g. `schema`)
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Collection name to endpoint descriptor, fetched once per client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointMap(BTreeMap<String, EndpointDescriptor>);

impl EndpointMap {
    /// Parse the discovery document
    pub fn from_json(source: &str, body: JsonValue) -> Result<Self> {
        serde_json::from_value(body).map_err(|e| Error::malformed(source, e.to_string()))
    }

    /// Look up a descriptor by collection name
    pub fn get(&self, key: &str) -> Option<&EndpointDescriptor> {
        self.0.get(key)
    }

    /// `list_endpoint` path for a collection
    pub fn list_endpoint(&self, key: &str) -> Result<&str> {
        self.get(key)
            .map(|d| d.list_endpoint.as_str())
            .ok_or_else(|| Error::unknown_endpoint(key))
    }

    /// Advertised collection names, sorted
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, P: Into<String>> FromIterator<(K, P)> for EndpointMap {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, path)| {
                    (
                        key.into(),
                        EndpointDescriptor {
                            list_endpoint: path.into(),
                            extra: JsonObject::new(),
                        },
                    )
                })
                .collect(),
        )
    }
}
