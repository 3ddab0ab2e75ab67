//! Engine client for index provisioning and tenant searches
//!
//! Wraps a pooled `reqwest` client plus the engine address and index name.
//! Constructed once at startup and passed explicitly to whatever needs it;
//! calls share no mutable state, so concurrent use is safe. Every request
//! reads the response body to completion, on error paths too, so the
//! connection can return to the pool.

use crate::config::{OutgoingSettings, Settings};
use crate::error::{Error, Result};
use crate::query::{Page, TenantQuery};
use crate::results::{Item, SearchResponse};
use crate::schema;
use anyhow::Context;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for one search engine / index pair.
#[derive(Clone)]
pub struct EngineClient {
    client: Client,
    base_url: Url,
    search_url: Url,
    index_url: Url,
    index: String,
    default_page_size: Option<u32>,
}

impl EngineClient {
    /// Create a client with default outgoing settings.
    pub fn new(url: &str, index: &str) -> anyhow::Result<Self> {
        Self::with_outgoing(url, index, &OutgoingSettings::default(), None)
    }

    /// Create a client from loaded settings.
    pub fn with_settings(settings: &Settings) -> anyhow::Result<Self> {
        Self::with_outgoing(
            &settings.engine.url,
            &settings.engine.index,
            &settings.outgoing,
            settings.engine.page_size,
        )
    }

    fn with_outgoing(
        url: &str,
        index: &str,
        outgoing: &OutgoingSettings,
        default_page_size: Option<u32>,
    ) -> anyhow::Result<Self> {
        let mut base_url = Url::parse(url).with_context(|| format!("invalid engine url {url:?}"))?;
        // A trailing slash keeps Url::join from replacing the last path
        // segment of a base address with its own path component.
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let index_url = base_url.join(index)?;
        let search_url = base_url.join(&format!("{index}/_search"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs_f64(outgoing.request_timeout))
            .pool_max_idle_per_host(outgoing.pool_maxsize)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url,
            search_url,
            index_url,
            index: index.to_string(),
            default_page_size,
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Liveness probe against the engine root.
    pub async fn ping(&self) -> Result<()> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await
            .map_err(Error::Connectivity)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Connectivity)?;
        if !success(status) {
            return Err(Error::query(status, body));
        }
        debug!("engine at {} is reachable", self.base_url);
        Ok(())
    }

    /// Create the items index with the edge-ngram schema.
    ///
    /// Creating an index that already exists fails with
    /// [`Error::IndexExists`]; any other rejection is [`Error::Schema`].
    /// Neither is resolved here, the caller decides.
    pub async fn create_index(&self) -> Result<()> {
        let response = self
            .client
            .put(self.index_url.clone())
            .json(&schema::index_schema())
            .send()
            .await
            .map_err(Error::Connectivity)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Connectivity)?;

        if success(status) {
            info!("created index {}", self.index);
            return Ok(());
        }
        if body.contains("resource_already_exists_exception") {
            return Err(Error::IndexExists {
                index: self.index.clone(),
            });
        }
        Err(Error::Schema {
            status,
            message: body,
        })
    }

    /// Search the tenant's items, returning them in engine relevance order.
    ///
    /// Uses the configured default page size when one is set; otherwise the
    /// engine's first-page default applies.
    pub async fn search(&self, tenant_id: &str, query_text: &str) -> Result<Vec<Item>> {
        let mut query = TenantQuery::new(tenant_id, query_text);
        if let Some(size) = self.default_page_size {
            query = query.with_page(Page::new(size, 0));
        }
        Ok(self.search_response(&query).await?.into_items())
    }

    /// Search with an explicit page window.
    pub async fn search_page(
        &self,
        tenant_id: &str,
        query_text: &str,
        page: Page,
    ) -> Result<Vec<Item>> {
        let query = TenantQuery::new(tenant_id, query_text).with_page(page);
        Ok(self.search_response(&query).await?.into_items())
    }

    /// Execute a search and return the full envelope, engine metadata
    /// included.
    pub async fn search_response(&self, query: &TenantQuery) -> Result<SearchResponse> {
        if query.tenant_id().trim().is_empty() {
            return Err(Error::query(400, "tenant_id must not be empty"));
        }

        debug!("searching index {} for tenant {}", self.index, query.tenant_id());

        let response = self
            .client
            .post(self.search_url.clone())
            .json(&query.body())
            .send()
            .await
            .map_err(Error::Connectivity)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::Connectivity)?;
        if !success(status) {
            return Err(Error::query(status, body));
        }

        SearchResponse::from_json(&body)
    }
}

fn success(status: u16) -> bool {
    (200..300).contains(&status)
}
