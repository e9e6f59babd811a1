//! Trending-topic aggregation over a page of works.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Work;

/// One counted topic. Ordering is count-descending, first-seen on ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTopic {
    /// Concept display name.
    pub topic: String,

    /// Occurrences across the aggregated page.
    pub count: u64,
}

/// Word-cloud entry, shaped for the frontend cloud widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCloudEntry {
    /// Concept display name.
    pub text: String,

    /// Occurrences, used as the cloud weight.
    pub value: u64,
}

/// Parallel-array presentation of the same ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSeries {
    /// Topic names, count-descending.
    pub topics: Vec<String>,

    /// Counts aligned with `topics`.
    pub counts: Vec<u64>,
}

/// Result of one aggregation pass.
///
/// All presentation modes derive from the single counted ranking; the page
/// is never walked twice.
#[derive(Debug, Clone, Default)]
pub struct TopicAggregate {
    ranked: Vec<RankedTopic>,
}

impl TopicAggregate {
    /// Count concept tags across `works`, keeping tags at `min_level` or
    /// deeper, and rank the `top_n` most frequent.
    ///
    /// Tags without a display name are skipped. An empty page yields an
    /// empty aggregate.
    #[must_use]
    pub fn from_works(works: &[Work], min_level: u8, top_n: usize) -> Self {
        let mut ranked: Vec<RankedTopic> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for work in works {
            for concept in &work.concepts {
                let Some(name) = concept.display_name.as_deref() else {
                    continue;
                };
                if name.is_empty() || concept.level < min_level {
                    continue;
                }
                if let Some(&position) = index.get(name) {
                    ranked[position].count += 1;
                } else {
                    index.insert(name, ranked.len());
                    ranked.push(RankedTopic { topic: name.to_owned(), count: 1 });
                }
            }
        }

        // sort_by is stable, so equal counts keep first-seen order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(top_n);

        Self { ranked }
    }

    /// Wrap an already-ranked list. Used by the static fallback so both
    /// paths share the presentation modes.
    #[must_use]
    pub fn from_ranked(ranked: Vec<RankedTopic>) -> Self {
        Self { ranked }
    }

    /// The ranked topics, most frequent first.
    #[must_use]
    pub fn ranked(&self) -> &[RankedTopic] {
        &self.ranked
    }

    /// Check whether the aggregation produced anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Word-cloud presentation.
    #[must_use]
    pub fn word_cloud(&self) -> Vec<WordCloudEntry> {
        self.ranked
            .iter()
            .map(|entry| WordCloudEntry { text: entry.topic.clone(), value: entry.count })
            .collect()
    }

    /// Parallel-array presentation.
    #[must_use]
    pub fn series(&self) -> TopicSeries {
        TopicSeries {
            topics: self.ranked.iter().map(|entry| entry.topic.clone()).collect(),
            counts: self.ranked.iter().map(|entry| entry.count).collect(),
        }
    }

    /// Consume the aggregate into its ranked list.
    #[must_use]
    pub fn into_ranked(self) -> Vec<RankedTopic> {
        self.ranked
    }
}
