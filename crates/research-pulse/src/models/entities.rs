//! Records for the non-work OpenAlex collections.

use serde::{Deserialize, Serialize};

use super::ConceptTag;

/// An author record from the `/authors` collection.
///
/// Unlike the author reference embedded in a work's authorships, this view
/// carries career totals and a last-known affiliation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// OpenAlex author id.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// ORCID URL, when registered.
    #[serde(default)]
    pub orcid: Option<String>,

    /// Career works count.
    #[serde(default)]
    pub works_count: Option<u64>,

    /// Career citation count.
    #[serde(default)]
    pub cited_by_count: Option<u64>,

    /// Most recent known affiliation.
    #[serde(default)]
    pub last_known_institution: Option<KnownInstitution>,

    /// Concepts the author publishes in, most relevant first.
    #[serde(default)]
    pub x_concepts: Vec<ConceptTag>,
}

/// Last-known affiliation attached to an author record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnownInstitution {
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Two-letter country code.
    #[serde(default)]
    pub country_code: Option<String>,
}

/// An institution record from the `/institutions` collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// OpenAlex institution id.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Two-letter country code.
    #[serde(default)]
    pub country_code: Option<String>,

    /// Works attributed to the institution.
    #[serde(default)]
    pub works_count: Option<u64>,

    /// Citations across those works.
    #[serde(default)]
    pub cited_by_count: Option<u64>,
}

/// A concept record from the `/concepts` collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// OpenAlex concept id.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Generality level, 0-5.
    #[serde(default)]
    pub level: u8,

    /// Works tagged with the concept.
    #[serde(default)]
    pub works_count: Option<u64>,
}

/// A source (journal, repository, conference) record from `/sources`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRecord {
    /// OpenAlex source id.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Source type ("journal", "repository", ...).
    #[serde(default, rename = "type")]
    pub source_type: Option<String>,

    /// Whether the source is open access.
    #[serde(default)]
    pub is_oa: Option<bool>,
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocompleteHit {
    /// Entity id.
    #[serde(default)]
    pub id: Option<String>,

    /// Suggested display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Disambiguation hint (an affiliation, a venue, ...).
    #[serde(default)]
    pub hint: Option<String>,
}
