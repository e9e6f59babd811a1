//! Work (publication) records from the OpenAlex `/works` collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single publication record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// OpenAlex work id (a URL-shaped opaque identifier).
    pub id: String,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Citations received.
    #[serde(default)]
    pub cited_by_count: u64,

    /// Author/institution join records, in listed order.
    #[serde(default)]
    pub authorships: Vec<Authorship>,

    /// Subject tags, in listed order.
    #[serde(default)]
    pub concepts: Vec<ConceptTag>,

    /// Token -> positions map; see [`Work::abstract_text`].
    #[serde(default)]
    pub abstract_inverted_index: Option<BTreeMap<String, Vec<u32>>>,
}

impl Work {
    /// Get the title, falling back to "Unknown Title" if not available.
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("Unknown Title")
    }

    /// Reconstruct the abstract from OpenAlex's inverted index.
    ///
    /// The index maps each token to the positions it occupies; walking the
    /// positions in order recovers the original text. Position collisions
    /// keep the first token seen.
    #[must_use]
    pub fn abstract_text(&self) -> Option<String> {
        let index = self.abstract_inverted_index.as_ref()?;

        let mut positions: BTreeMap<u32, &str> = BTreeMap::new();
        for (token, occurrences) in index {
            for position in occurrences {
                positions.entry(*position).or_insert(token.as_str());
            }
        }

        if positions.is_empty() {
            return None;
        }
        Some(positions.values().copied().collect::<Vec<_>>().join(" "))
    }
}

/// The join record linking a work to an author and that author's
/// affiliated institutions for the work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// The author, when the upstream resolved one.
    #[serde(default)]
    pub author: Option<AuthorRef>,

    /// Affiliated institutions, in listed order.
    #[serde(default)]
    pub institutions: Vec<Institution>,
}

/// Author reference embedded in an authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    /// OpenAlex author id; the dedup key for extraction.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Institution embedded in an authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Institution {
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Hierarchical subject tag; level 0 is the most general.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptTag {
    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Generality level, 0-5.
    #[serde(default)]
    pub level: u8,
}
