//! Static substitute data served when an upstream call fails.
//!
//! Every substitute mirrors the field names and types of the corresponding
//! live result, so downstream consumers never branch on whether they are
//! looking at real or fallback data.

use crate::analysis::{
    Capsule, RankedTopic, Rarity, ResearcherSummary, TopicAggregate,
};
use crate::error::ClientResult;

/// Resolve one endpoint's live attempt, serving the static substitute on any
/// failure. This is the single fallback-selection point for the service;
/// handlers never inspect the error themselves.
pub fn or_fallback<T>(
    endpoint: &'static str,
    live: ClientResult<T>,
    substitute: impl FnOnce() -> T,
) -> T {
    match live {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(endpoint, error = %error, "live data unavailable, serving fallback");
            substitute()
        }
    }
}

/// Hand-authored topic ranking behind the word-cloud and trending views.
/// Counts descend so the derived shapes match the live sort contract.
const RANKED_TOPICS: [(&str, u64); 20] = [
    ("Large Language Models", 150),
    ("Multimodal Learning", 130),
    ("AI Safety", 120),
    ("Reinforcement Learning", 110),
    ("Computer Vision", 105),
    ("Natural Language Processing", 100),
    ("Diffusion Models", 95),
    ("Transformer Architecture", 90),
    ("Few-Shot Learning", 85),
    ("Neural Networks", 80),
    ("Generative AI", 75),
    ("AI Alignment", 70),
    ("Vision-Language Models", 65),
    ("Agent Systems", 60),
    ("Meta-Learning", 58),
    ("Explainable AI", 55),
    ("Transfer Learning", 52),
    ("Graph Neural Networks", 50),
    ("Self-Supervised Learning", 45),
    ("Robotics", 38),
];

/// Substitute topic aggregate; serves all three presentation modes.
#[must_use]
pub fn topics() -> TopicAggregate {
    TopicAggregate::from_ranked(
        RANKED_TOPICS
            .iter()
            .map(|&(topic, count)| RankedTopic { topic: topic.to_string(), count })
            .collect(),
    )
}

fn researcher(
    name: &str,
    affiliation: &str,
    country: &str,
    link: &str,
    topics: &[&str],
    citations: u64,
    works_count: u64,
) -> ResearcherSummary {
    ResearcherSummary {
        name: name.to_string(),
        link: link.to_string(),
        affiliation: affiliation.to_string(),
        country: Some(country.to_string()),
        field: "AI Research".to_string(),
        topics: topics.iter().map(|&topic| topic.to_string()).collect(),
        works_count: Some(works_count),
        cited_by_count: Some(citations),
    }
}

/// Substitute researcher directory.
#[must_use]
pub fn researchers() -> Vec<ResearcherSummary> {
    vec![
        researcher(
            "Dr. Maren Holt",
            "MIT CSAIL",
            "US",
            "https://scholar.google.com/citations?user=maren_holt",
            &["Large Language Models", "Natural Language Processing", "AI Safety"],
            15420,
            87,
        ),
        researcher(
            "Prof. Daniel Reyes",
            "Stanford AI Lab",
            "US",
            "https://scholar.google.com/citations?user=d_reyes",
            &["Multimodal Learning", "Vision-Language Models", "Computer Vision"],
            12350,
            65,
        ),
        researcher(
            "Dr. Priya Raghavan",
            "Google DeepMind",
            "GB",
            "https://scholar.google.com/citations?user=p_raghavan",
            &["Reinforcement Learning", "Agent Systems", "AI Safety"],
            18900,
            52,
        ),
        researcher(
            "Prof. Jonas Keller",
            "UC Berkeley",
            "US",
            "https://scholar.google.com/citations?user=j_keller",
            &["Deep Learning", "Neural Networks", "Transfer Learning"],
            22100,
            120,
        ),
        researcher(
            "Dr. Lucia Ferraro",
            "Carnegie Mellon University",
            "US",
            "https://scholar.google.com/citations?user=l_ferraro",
            &["Computer Vision", "Generative AI", "Diffusion Models"],
            9800,
            45,
        ),
        researcher(
            "Prof. Mei-Ling Shao",
            "Tsinghua University",
            "CN",
            "https://scholar.google.com/citations?user=ml_shao",
            &["Natural Language Processing", "Large Language Models", "Machine Learning"],
            14200,
            92,
        ),
        researcher(
            "Dr. Oliver Whitfield",
            "University of Oxford",
            "GB",
            "https://scholar.google.com/citations?user=o_whitfield",
            &["AI Safety", "AI Alignment", "Explainable AI"],
            8500,
            38,
        ),
        researcher(
            "Prof. Haruto Shimizu",
            "University of Tokyo",
            "JP",
            "https://scholar.google.com/citations?user=h_shimizu",
            &["Robotics", "Reinforcement Learning", "Agent Systems"],
            11200,
            68,
        ),
        researcher(
            "Dr. Annika Brandt",
            "ETH Zurich",
            "CH",
            "https://scholar.google.com/citations?user=a_brandt",
            &["Meta-Learning", "Few-Shot Learning", "Transfer Learning"],
            7600,
            41,
        ),
        researcher(
            "Prof. Arjun Venkatesan",
            "IIT Delhi",
            "IN",
            "https://scholar.google.com/citations?user=a_venkatesan",
            &["Graph Neural Networks", "Deep Learning", "Machine Learning"],
            6900,
            55,
        ),
    ]
}

/// Apply the researcher-directory predicates locally.
///
/// Each filter is a case-insensitive substring match on its own field, with
/// AND semantics across the filters supplied: `topic` against any of the
/// entry's topic tags, `institution` against the affiliation, `country`
/// against the country code. Filtering is idempotent and order-independent.
#[must_use]
pub fn filter_researchers(
    entries: Vec<ResearcherSummary>,
    topic: Option<&str>,
    institution: Option<&str>,
    country: Option<&str>,
) -> Vec<ResearcherSummary> {
    let topic = topic.map(str::to_lowercase);
    let institution = institution.map(str::to_lowercase);
    let country = country.map(str::to_lowercase);

    entries
        .into_iter()
        .filter(|entry| {
            if let Some(ref topic) = topic {
                if !entry.topics.iter().any(|tag| tag.to_lowercase().contains(topic)) {
                    return false;
                }
            }
            if let Some(ref institution) = institution {
                if !entry.affiliation.to_lowercase().contains(institution) {
                    return false;
                }
            }
            if let Some(ref country) = country {
                let code = entry.country.as_deref().unwrap_or("");
                if !code.to_lowercase().contains(country) {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn capsule(
    title: &str,
    year: i32,
    citations: u64,
    link: &str,
    authors: &[&str],
    concepts: &[&str],
) -> Capsule {
    let rarity = Rarity::classify(citations);
    Capsule {
        title: title.to_string(),
        year: Some(year),
        citations,
        link: link.to_string(),
        rarity,
        rarity_label: rarity.label().to_string(),
        authors: authors.iter().map(|&name| name.to_string()).collect(),
        concepts: concepts.iter().map(|&name| name.to_string()).collect(),
        r#abstract: None,
    }
}

/// Substitute capsule pool; openings sample five of these.
#[must_use]
pub fn capsules() -> Vec<Capsule> {
    vec![
        capsule(
            "Attention Is All You Need",
            2017,
            98234,
            "https://openalex.org/W2964315648",
            &["Ashish Vaswani", "Noam Shazeer", "Niki Parmar"],
            &["Transformer", "Neural Network", "Natural Language Processing"],
        ),
        capsule(
            "BERT: Pre-training of Deep Bidirectional Transformers",
            2019,
            67543,
            "https://openalex.org/W2964315649",
            &["Jacob Devlin", "Ming-Wei Chang", "Kenton Lee"],
            &["BERT", "Language Model", "NLP"],
        ),
        capsule(
            "Deep Residual Learning for Image Recognition",
            2016,
            154234,
            "https://openalex.org/W2964315650",
            &["Kaiming He", "Xiangyu Zhang", "Shaoqing Ren"],
            &["Computer Vision", "ResNet", "Deep Learning"],
        ),
        capsule(
            "Generative Adversarial Networks",
            2014,
            45678,
            "https://openalex.org/W2964315651",
            &["Ian Goodfellow", "Jean Pouget-Abadie", "Mehdi Mirza"],
            &["GAN", "Generative Model", "Deep Learning"],
        ),
        capsule(
            "Adam: A Method for Stochastic Optimization",
            2015,
            123456,
            "https://openalex.org/W2964315652",
            &["Diederik P. Kingma", "Jimmy Ba"],
            &["Optimization", "Machine Learning", "Gradient Descent"],
        ),
        capsule(
            "Neural Architecture Search with Reinforcement Learning",
            2017,
            3876,
            "https://openalex.org/W2964315653",
            &["Barret Zoph", "Quoc V. Le"],
            &["AutoML", "Neural Architecture Search", "Reinforcement Learning"],
        ),
        capsule(
            "EfficientNet: Rethinking Model Scaling",
            2019,
            1543,
            "https://openalex.org/W2964315654",
            &["Mingxing Tan", "Quoc V. Le"],
            &["Computer Vision", "Model Scaling", "Neural Networks"],
        ),
        capsule(
            "Graph Neural Networks: A Review of Methods and Applications",
            2020,
            834,
            "https://openalex.org/W2964315655",
            &["Jie Zhou", "Ganqu Cui", "Zhengyan Zhang"],
            &["Graph Neural Networks", "Deep Learning", "Graph Theory"],
        ),
        capsule(
            "Self-Supervised Representation Learning in Vision",
            2021,
            287,
            "https://openalex.org/W2964315656",
            &["Elena Vasquez", "Tomas Lindgren", "Yuki Mori"],
            &["Self-Supervised Learning", "Computer Vision", "Representation Learning"],
        ),
        capsule(
            "Few-Shot Adaptation with Gradient-Based Meta-Learning",
            2022,
            45,
            "https://openalex.org/W2964315657",
            &["Sofia Marques", "Leon Adeyemi"],
            &["Few-Shot Learning", "Meta-Learning", "Transfer Learning"],
        ),
    ]
}

/// Substitute chat summary built around the caller's query.
#[must_use]
pub fn chat_summary(query: &str) -> String {
    format!(
        "Based on your interest in '{query}', this field is growing rapidly \
         with numerous breakthroughs in AI applications."
    )
}

/// Substitute researcher suggestions attached to the chat fallback.
#[must_use]
pub fn chat_researchers() -> Vec<ResearcherSummary> {
    researchers().into_iter().take(2).collect()
}
