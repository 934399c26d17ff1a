//! In-memory image cache
//!
//! Images are kept as `data:<mime>;base64,<payload>` strings keyed by the
//! entity id. Entries live as long as the cache; there is no eviction.

use std::future::Future;

use base64::{Engine, engine::general_purpose::STANDARD};
use dashmap::DashMap;

use crate::ClientResult;
use crate::http::BinaryResponse;

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Default)]
pub struct ImageCache {
    entries: DashMap<String, String>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<String> {
        self.entries.get(id).map(|e| e.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached data URI, or fetch, encode and cache it
    ///
    /// An empty body yields `None` and is not cached. Errors from `fetch`
    /// propagate and leave the cache untouched, so the next call retries.
    pub async fn get_or_fetch<F, Fut>(&self, id: &str, fetch: F) -> ClientResult<Option<String>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<BinaryResponse>>,
    {
        if let Some(hit) = self.get(id) {
            return Ok(Some(hit));
        }

        let response = fetch().await?;
        if response.bytes.is_empty() {
            tracing::debug!(id, "Image body empty, not cached");
            return Ok(None);
        }

        let uri = to_data_uri(response.content_type.as_deref(), &response.bytes);
        self.entries.insert(id.to_string(), uri.clone());
        Ok(Some(uri))
    }
}

/// `image/png; charset=x` + bytes → `data:image/png;base64,...`
pub fn to_data_uri(content_type: Option<&str>, bytes: &[u8]) -> String {
    let mime = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_MIME);
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
