//! Citation-count rarity tiers and lootbox capsule assembly.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Work;

/// Rarity tier, rarest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rarity {
    /// 5000+ citations.
    #[serde(rename = "SSR")]
    Ssr,
    /// 1000-4999 citations.
    #[serde(rename = "SR")]
    Sr,
    /// 200-999 citations.
    #[serde(rename = "R")]
    R,
    /// Below 200 citations.
    #[serde(rename = "N")]
    N,
}

/// Citation thresholds, highest first. Closed, exhaustive, and mutually
/// exclusive over all non-negative counts.
const TIERS: [(u64, Rarity); 4] =
    [(5000, Rarity::Ssr), (1000, Rarity::Sr), (200, Rarity::R), (0, Rarity::N)];

impl Rarity {
    /// Classify a citation count into its tier.
    #[must_use]
    pub fn classify(citations: u64) -> Self {
        TIERS
            .iter()
            .find(|(threshold, _)| citations >= *threshold)
            .map_or(Self::N, |(_, tier)| *tier)
    }

    /// Short tier code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ssr => "SSR",
            Self::Sr => "SR",
            Self::R => "R",
            Self::N => "N",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ssr => "Legendary",
            Self::Sr => "Epic",
            Self::R => "Rare",
            Self::N => "Common",
        }
    }
}

/// Names kept per capsule for authors and concepts.
const NAMES_PER_CAPSULE: usize = 3;

/// One revealed paper in a lootbox opening.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capsule {
    /// Paper title.
    pub title: String,

    /// Publication year.
    pub year: Option<i32>,

    /// Citation count.
    pub citations: u64,

    /// Work id, used as the outbound link.
    pub link: String,

    /// Rarity code.
    pub rarity: Rarity,

    /// Rarity display label.
    pub rarity_label: String,

    /// Up to three author names, in listed order.
    pub authors: Vec<String>,

    /// Up to three concept names, in listed order.
    pub concepts: Vec<String>,

    /// Reconstructed abstract, when the upstream supplies the index.
    pub r#abstract: Option<String>,
}

impl Capsule {
    /// Build a capsule from a work.
    ///
    /// Authors and concepts come from the first three entries of their
    /// lists, preserving source order; entries without a display name are
    /// dropped rather than replaced.
    #[must_use]
    pub fn from_work(work: &Work) -> Self {
        let rarity = Rarity::classify(work.cited_by_count);
        Self {
            title: work.title_or_default().to_string(),
            year: work.publication_year,
            citations: work.cited_by_count,
            link: work.id.clone(),
            rarity,
            rarity_label: rarity.label().to_string(),
            authors: work
                .authorships
                .iter()
                .take(NAMES_PER_CAPSULE)
                .filter_map(|authorship| authorship.author.as_ref()?.display_name.clone())
                .collect(),
            concepts: work
                .concepts
                .iter()
                .take(NAMES_PER_CAPSULE)
                .filter_map(|concept| concept.display_name.clone())
                .collect(),
            r#abstract: work.abstract_text(),
        }
    }
}

/// Uniformly sample `count` distinct works without replacement and reveal
/// them as capsules. Fewer than `count` works yields one capsule per work.
#[must_use]
pub fn sample_capsules<R: Rng + ?Sized>(
    works: &[Work],
    count: usize,
    rng: &mut R,
) -> Vec<Capsule> {
    works.choose_multiple(rng, count).map(Capsule::from_work).collect()
}
