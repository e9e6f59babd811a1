//! Data models for OpenAlex API entities.
//!
//! All upstream fields that may be absent use `#[serde(default)]` so a
//! partial record degrades to "no usable data" instead of a parse failure.

mod entities;
mod work;

use serde::{Deserialize, Serialize};

pub use entities::{
    AuthorRecord, AutocompleteHit, ConceptRecord, InstitutionRecord, KnownInstitution,
    SourceRecord,
};
pub use work::{AuthorRef, Authorship, ConceptTag, Institution, Work};

/// One page of results from a list endpoint.
///
/// A response without a `results` key deserializes as an empty page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page.
    #[serde(default)]
    pub results: Vec<T>,

    /// Paging metadata, when the upstream supplies it.
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { results: Vec::new(), meta: None }
    }
}

impl<T> Page<T> {
    /// Check whether the page carries any records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Paging metadata attached to list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total matching records.
    #[serde(default)]
    pub count: Option<u64>,

    /// Current page number.
    #[serde(default)]
    pub page: Option<u32>,

    /// Records per page.
    #[serde(default)]
    pub per_page: Option<u32>,
}

/// Response body for `group_by` aggregation queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupPage {
    /// Aggregated buckets.
    #[serde(default)]
    pub group_by: Vec<GroupBucket>,
}

/// One bucket of a `group_by` aggregation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupBucket {
    /// Bucket key (an id or literal value).
    #[serde(default)]
    pub key: Option<String>,

    /// Human-readable key.
    #[serde(default)]
    pub key_display_name: Option<String>,

    /// Records in the bucket.
    #[serde(default)]
    pub count: u64,
}
