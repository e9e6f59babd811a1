//! Paper suggestions attached to chat replies.

use serde::{Deserialize, Serialize};

use crate::models::Work;

/// A compact paper reference for the suggestion panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperSuggestion {
    /// Paper title.
    pub title: String,

    /// Publication year.
    pub year: Option<i32>,

    /// Citation count.
    pub citations: u64,

    /// Work id, used as the outbound link.
    pub link: String,
}

impl PaperSuggestion {
    /// Build a suggestion from a work.
    #[must_use]
    pub fn from_work(work: &Work) -> Self {
        Self {
            title: work.title_or_default().to_string(),
            year: work.publication_year,
            citations: work.cited_by_count,
            link: work.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_work() {
        let work = Work {
            id: "https://openalex.org/W5".to_string(),
            title: Some("A Study".to_string()),
            publication_year: Some(2024),
            cited_by_count: 42,
            ..Work::default()
        };
        let suggestion = PaperSuggestion::from_work(&work);
        assert_eq!(suggestion.title, "A Study");
        assert_eq!(suggestion.year, Some(2024));
        assert_eq!(suggestion.citations, 42);
        assert_eq!(suggestion.link, "https://openalex.org/W5");
    }
}
