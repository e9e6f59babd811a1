//! OpenAlex API client.
//!
//! Provides an async HTTP client over the `/works`, `/authors`,
//! `/institutions`, `/concepts`, and `/sources` collections with:
//! - Connection pooling via reqwest
//! - Filter/sort query construction ([`WorksQuery`], [`ListQuery`])
//! - A minimum-interval pacer between outbound requests
//! - Polite-pool identification via the `mailto` parameter
//!
//! The client never retries: any transport failure or non-success status is
//! returned to the caller, whose policy is to fall back to static data.

mod query;

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{
    AuthorRecord, AutocompleteHit, ConceptRecord, GroupBucket, GroupPage, InstitutionRecord,
    Page, SourceRecord, Work,
};

pub use query::{EntityKind, FilterSet, ListQuery, WorksQuery, YearFilter};

/// Minimum-interval pacer: a leaky bucket of one, no burst allowance.
///
/// The lock is held across the sleep so concurrent callers queue behind the
/// interval instead of stampeding the upstream.
#[derive(Debug)]
struct Pacer {
    interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl Pacer {
    fn new(interval: Duration) -> Self {
        Self { interval, last_request: Mutex::new(None) }
    }

    /// Suspend until at least `interval` has elapsed since the previous call.
    async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                tokio::time::sleep(self.interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// Pooled HTTP client.
    client: Client,

    /// API base URL.
    base_url: String,

    /// Polite-pool contact, attached as `mailto` when configured.
    contact_email: Option<String>,

    /// Shared request pacer.
    pacer: Arc<Pacer>,
}

impl OpenAlexClient {
    /// Create a new client from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.search_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(crate::config::api::MAX_KEEPALIVE)
            .pool_idle_timeout(crate::config::api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: config.openalex_base_url.clone(),
            contact_email: config.contact_email.clone(),
            pacer: Arc::new(Pacer::new(config.request_interval)),
        })
    }

    /// Search the works collection.
    pub async fn search_works(&self, query: WorksQuery) -> ClientResult<Page<Work>> {
        self.get("/works", query.into_params()).await
    }

    /// Fetch a single work by id.
    pub async fn get_work(&self, work_id: &str) -> ClientResult<Work> {
        self.get(&format!("/works/{work_id}"), Vec::new()).await
    }

    /// Works attributed to one institution, optionally bounded by year.
    pub async fn works_by_institution(
        &self,
        institution_id: &str,
        years: Option<YearFilter>,
    ) -> ClientResult<Page<Work>> {
        let mut query = WorksQuery::new().institution(institution_id);
        if let Some(years) = years {
            query = query.publication_year(years);
        }
        self.search_works(query).await
    }

    /// Recently published works sorted by citation count.
    ///
    /// The window starts `days` ago and is open-ended at the present.
    pub async fn trending_works(&self, days: i64, per_page: u32) -> ClientResult<Page<Work>> {
        let from_date = Utc::now().date_naive() - chrono::Duration::days(days);
        let query = WorksQuery::new()
            .from_publication_date(from_date)
            .sort("cited_by_count:desc")
            .per_page(per_page);
        self.search_works(query).await
    }

    /// Search the authors collection.
    pub async fn search_authors(&self, query: ListQuery) -> ClientResult<Page<AuthorRecord>> {
        self.get("/authors", query.into_params()).await
    }

    /// Search the institutions collection.
    pub async fn search_institutions(
        &self,
        query: ListQuery,
    ) -> ClientResult<Page<InstitutionRecord>> {
        self.get("/institutions", query.into_params()).await
    }

    /// Search the concepts collection.
    pub async fn search_concepts(&self, query: ListQuery) -> ClientResult<Page<ConceptRecord>> {
        self.get("/concepts", query.into_params()).await
    }

    /// Search the sources collection.
    pub async fn search_sources(&self, query: ListQuery) -> ClientResult<Page<SourceRecord>> {
        self.get("/sources", query.into_params()).await
    }

    /// Aggregate work counts grouped by a field.
    pub async fn group_works_by(
        &self,
        group_by: &str,
        filters: &FilterSet,
    ) -> ClientResult<Vec<GroupBucket>> {
        let mut params = vec![
            ("group_by".to_string(), group_by.to_string()),
            ("per_page".to_string(), "200".to_string()),
        ];
        if !filters.is_empty() {
            params.push(("filter".to_string(), filters.to_param()));
        }
        let page: GroupPage = self.get("/works", params).await?;
        Ok(page.group_by)
    }

    /// Autocomplete suggestions for an entity collection.
    pub async fn autocomplete(
        &self,
        entity: EntityKind,
        query: &str,
    ) -> ClientResult<Page<AutocompleteHit>> {
        let params = vec![("q".to_string(), query.to_string())];
        self.get(&format!("/autocomplete/{}", entity.as_str()), params).await
    }

    /// Make a paced GET request against the API.
    async fn get<T>(&self, path: &str, mut params: Vec<(String, String)>) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(ref email) = self.contact_email {
            params.push(("mailto".to_string(), email.clone()));
        }

        self.pacer.wait().await;

        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::status(status.as_u16(), message));
        }

        let value: serde_json::Value = response.json().await?;
        serde_json::from_value(value).map_err(ClientError::from)
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("base_url", &self.base_url)
            .field("polite_pool", &self.contact_email.is_some())
            .finish()
    }
}
