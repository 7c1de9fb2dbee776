//! In-memory transport and page builders shared by unit tests

use crate::api::{ApiClient, EndpointMap};
use crate::error::{Error, Result};
use crate::http::Transport;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use url::Url;

pub const BASE_URL: &str = "http://api.test";

/// Serves canned JSON by exact URL and counts every fetch
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<String, Value>>,
    hits: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(&self, url: impl ToString, body: Value) {
        self.routes.lock().unwrap().insert(url.to_string(), body);
    }

    /// Every URL fetched, in order
    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }

    pub fn fetches(&self) -> usize {
        self.hits.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, url: &Url) -> Result<Value> {
        self.hits.lock().unwrap().push(url.to_string());
        self.routes
            .lock()
            .unwrap()
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::http_status(404, format!("no route for {url}")))
    }
}

/// Client over `transport` with the usual three collections
pub fn client(transport: &Arc<ScriptedTransport>) -> ApiClient {
    let endpoints: EndpointMap = [
        ("category", "/v1/category/"),
        ("show", "/v1/show/"),
        ("episode", "/v1/episode/"),
    ]
    .into_iter()
    .collect();
    ApiClient::with_endpoints(transport.clone(), BASE_URL, endpoints).unwrap()
}

/// One page response body
pub fn page(
    offset: usize,
    limit: usize,
    total: usize,
    next: Option<&str>,
    objects: &[Value],
) -> Value {
    json!({
        "meta": {"offset": offset, "limit": limit, "total_count": total, "next": next},
        "objects": objects,
    })
}

/// Simple record with a numeric id
pub fn item(id: usize) -> Value {
    json!({"id": id, "title": format!("item {id}")})
}

/// Route a well-behaved collection of `total` items in pages of `limit`,
/// starting at `start`. Follow-up pages live at `/v1/item/?offset=N`.
pub fn route_collection(
    transport: &ScriptedTransport,
    client: &ApiClient,
    start: &Url,
    total: usize,
    limit: usize,
) {
    let mut offset = 0;
    let mut url = start.clone();
    loop {
        let end = (offset + limit).min(total);
        let objects: Vec<Value> = (offset..end).map(item).collect();
        let next = (offset + limit < total).then(|| format!("/v1/item/?offset={}", offset + limit));
        transport.route(&url, page(offset, limit, total, next.as_deref(), &objects));

        match next {
            Some(next) => {
                url = client.url(Some(&next)).unwrap().unwrap();
                offset += limit;
            }
            None => break,
        }
    }
}

/// Formatted log output of the current thread, for asserting on log lines
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route this thread's events here until the guard is dropped
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .without_time()
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Lines logged at `level`, e.g. `"ERROR"`
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| line.split_whitespace().next() == Some(level))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
