//! Derived dashboard views built from upstream pages.
//!
//! Everything here is rebuilt fresh per request from the current response;
//! nothing is cached or mutated after construction.

mod papers;
mod rarity;
mod researchers;
mod topics;

pub use papers::PaperSuggestion;
pub use rarity::{sample_capsules, Capsule, Rarity};
pub use researchers::{extract_researchers, from_author_records, ResearcherSummary};
pub use topics::{RankedTopic, TopicAggregate, TopicSeries, WordCloudEntry};
