//! Prompt assembly for the narrative views.
//!
//! Every prompt follows the same recipe: the fixed persona preamble, the
//! caller's own fields, at most three pre-fetched bibliographic summaries,
//! and explicit tone/format instructions.

use serde::{Deserialize, Serialize};

use crate::analysis::{PaperSuggestion, ResearcherSummary};

/// Persona preamble shared by every narrative view.
pub const PERSONA: &str = "You are Atlas, an upbeat AI research guide. \
Your voice is curious, encouraging, and a little playful; you love pointing \
people toward the researchers and papers worth their time while staying \
academically accurate.";

/// Served when the chat completion fails; the bibliographic results still go out.
pub const CHAT_PLACEHOLDER: &str = "Atlas hit a snag reaching the writing \
desk just now. The trail is still warm, though - take a look at the \
researchers and papers on the right while I catch my breath.";

/// Served when an advisor completion fails mid-conversation.
pub const ADVISOR_PLACEHOLDER: &str = "Atlas lost the thread for a moment. \
Let's keep exploring research directions - tell me again where you'd like \
to go!";

/// Marker the advisor is instructed to open its final turn with.
pub const FINAL_MARKER: &str = "\u{1f3af}";

/// Context summaries embedded per prompt.
const MAX_CONTEXT_LINES: usize = 3;

/// Prompt for the research-recommendation chat.
#[must_use]
pub fn research_guide_prompt(
    query: &str,
    user_background: Option<&str>,
    researchers: &[ResearcherSummary],
    papers: &[PaperSuggestion],
) -> String {
    let mut context = String::new();
    for researcher in researchers.iter().take(MAX_CONTEXT_LINES) {
        context.push_str(&format!("- {} ({})\n", researcher.name, researcher.affiliation));
    }
    for paper in papers.iter().take(MAX_CONTEXT_LINES) {
        let year = paper.year.map_or_else(|| "n.d.".to_string(), |year| year.to_string());
        context.push_str(&format!("- {} ({})\n", paper.title, year));
    }

    let background = user_background
        .map(|text| format!("User's background: {text}\n"))
        .unwrap_or_default();

    format!(
        "{PERSONA}\n\n\
         User's interest: {query}\n\
         {background}\
         Suggested researchers and papers:\n\
         {context}\n\
         Compose 3-5 sentences that:\n\
         1. Identify the broader research trend or opportunity.\n\
         2. Highlight why the listed researchers or papers are exciting leads.\n\
         3. Close with one encouraging, action-oriented nudge.\n\
         Stay warm and keep the claims academically accurate."
    )
}

/// System prompt for the RSTI advisor conversation.
#[must_use]
pub fn advisor_system_prompt() -> String {
    format!(
        "{PERSONA} You are acting as an academic advisor helping a student \
         choose a PhD research direction through a maximum of 3 binary (1/2) \
         choices. Each round, ask a short question (at most 3 lines) with \
         exactly two numbered options. At the end, summarize the most \
         suitable PhD field in 3-5 sentences, explicitly combining the \
         student's academic background and their previous choices. When you \
         provide the final recommendation, start with \
         '{FINAL_MARKER} Final Recommendation:' and list exactly 3 specific \
         research topics."
    )
}

/// Opening user message for a fresh advisor conversation.
#[must_use]
pub fn advisor_opening(rsti_type: &str, major: Option<&str>) -> String {
    let major = major.unwrap_or("your field");
    format!("My academic background is {major} and my RSTI type is {rsti_type}. Let's begin.")
}

/// Profile fields for the life-path story.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LifePathProfile {
    /// School or university.
    pub school: String,

    /// Major or program.
    pub major: String,

    /// Degree pursued.
    pub degree: String,

    /// Preferred path after graduation (academia, industry, ...).
    #[serde(rename = "pathPreference")]
    pub path_preference: String,

    /// Self-described personality, when offered.
    #[serde(default)]
    pub personality: Option<String>,

    /// Stated goals, when offered.
    #[serde(default)]
    pub goals: Option<String>,

    /// Anything else the caller wants woven in.
    #[serde(default, rename = "specialNotes")]
    pub special_notes: Option<String>,
}

/// Prompt for the narrative life-path story.
#[must_use]
pub fn life_path_prompt(profile: &LifePathProfile) -> String {
    let mut details = format!(
        "School: {}\nMajor: {}\nDegree: {}\nPreferred path: {}\n",
        profile.school, profile.major, profile.degree, profile.path_preference
    );
    if let Some(ref personality) = profile.personality {
        details.push_str(&format!("Personality: {personality}\n"));
    }
    if let Some(ref goals) = profile.goals {
        details.push_str(&format!("Goals: {goals}\n"));
    }
    if let Some(ref notes) = profile.special_notes {
        details.push_str(&format!("Notes: {notes}\n"));
    }

    format!(
        "{PERSONA}\n\n\
         Write a second-person 'life path' story for this student:\n\
         {details}\n\
         Tell it in three short paragraphs: the first years after \
         graduation, a pivotal middle stretch, and where they land a decade \
         on. Around 250 words total. Ground the story in plausible steps \
         for their field and preferred path; no bullet points, no headings, \
         finish on a hopeful note."
    )
}
