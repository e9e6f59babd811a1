//! Researcher extraction and deduplication.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{AuthorRecord, Work};

/// Field label attached to directory entries.
const DEFAULT_FIELD: &str = "AI Research";

/// Topic tags carried per author-search entry.
const TOPICS_PER_AUTHOR: usize = 5;

/// A directory entry for one researcher.
///
/// `works_count` and `cited_by_count` are `None` when the source view cannot
/// supply them: work authorships carry no per-author totals. They serialize
/// as `null`, so callers can tell "unknown" from an actual zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearcherSummary {
    /// Display name.
    pub name: String,

    /// Author id, ORCID, or a constructed profile-search URL.
    pub link: String,

    /// Affiliation display name, or a sentinel when unresolved.
    pub affiliation: String,

    /// Two-letter country code, when known.
    pub country: Option<String>,

    /// Field label.
    pub field: String,

    /// Topic tags, most relevant first.
    pub topics: Vec<String>,

    /// Career works count, when the source view supplies it.
    pub works_count: Option<u64>,

    /// Career citation count, when the source view supplies it.
    pub cited_by_count: Option<u64>,
}

/// Collect up to `max_authors` unique researchers from a page of works.
///
/// Order is first-encountered: works in page order, authorships in listed
/// order. Authorships without an author or an author id are skipped, as are
/// authors already captured. Both walks stop as soon as the cap is reached.
#[must_use]
pub fn extract_researchers(works: &[Work], max_authors: usize) -> Vec<ResearcherSummary> {
    if max_authors == 0 {
        return Vec::new();
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut researchers = Vec::new();

    'works: for work in works {
        for authorship in &work.authorships {
            let Some(author) = authorship.author.as_ref() else {
                continue;
            };
            let Some(id) = author.id.as_deref() else {
                continue;
            };
            if !seen.insert(id) {
                continue;
            }

            let affiliation = authorship
                .institutions
                .first()
                .and_then(|institution| institution.display_name.clone())
                .unwrap_or_else(|| "N/A".to_string());

            researchers.push(ResearcherSummary {
                name: author.display_name.clone().unwrap_or_else(|| "Unknown".to_string()),
                link: id.to_string(),
                affiliation,
                country: None,
                field: DEFAULT_FIELD.to_string(),
                topics: Vec::new(),
                // Not available at authorship granularity.
                works_count: None,
                cited_by_count: None,
            });

            if researchers.len() >= max_authors {
                break 'works;
            }
        }
    }

    researchers
}

/// Shape an `/authors` search page into directory entries.
///
/// This view does carry career totals, so the counts are concrete; an
/// unregistered ORCID falls back to a constructed profile-search link.
#[must_use]
pub fn from_author_records(records: &[AuthorRecord]) -> Vec<ResearcherSummary> {
    records
        .iter()
        .map(|author| {
            let name = author.display_name.clone().unwrap_or_else(|| "Unknown".to_string());
            let institution = author.last_known_institution.as_ref();
            let link = author.orcid.clone().unwrap_or_else(|| scholar_link(&name));

            ResearcherSummary {
                link,
                affiliation: institution
                    .and_then(|known| known.display_name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
                country: institution.and_then(|known| known.country_code.clone()),
                field: DEFAULT_FIELD.to_string(),
                topics: author
                    .x_concepts
                    .iter()
                    .take(TOPICS_PER_AUTHOR)
                    .filter_map(|concept| concept.display_name.clone())
                    .collect(),
                works_count: Some(author.works_count.unwrap_or(0)),
                cited_by_count: Some(author.cited_by_count.unwrap_or(0)),
                name,
            }
        })
        .collect()
}

fn scholar_link(name: &str) -> String {
    format!("https://scholar.google.com/scholar?q={}", name.replace(' ', "+"))
}
