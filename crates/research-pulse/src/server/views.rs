//! Request handlers for the dashboard views.
//!
//! Each handler makes one live-data attempt and resolves it through
//! [`or_fallback`]; the narrative life-path endpoint is the only one that
//! surfaces upstream failure to the caller (see DESIGN.md).

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{Datelike, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    extract_researchers, from_author_records, sample_capsules, Capsule, PaperSuggestion,
    RankedTopic, ResearcherSummary, TopicAggregate, TopicSeries, WordCloudEntry,
};
use crate::client::{ListQuery, OpenAlexClient, WorksQuery};
use crate::completion::prompts::{self, LifePathProfile};
use crate::completion::ChatMessage;
use crate::config::dashboard;
use crate::error::{ClientError, ClientResult};
use crate::fallback::{self, or_fallback};

use super::AppState;

/// Sampling temperature for the narrative views.
const CHAT_TEMPERATURE: f32 = 0.7;

/// Token budget for the narrative views.
const CHAT_MAX_TOKENS: u32 = 500;

// ---------------------------------------------------------------------------
// Word cloud & trending
// ---------------------------------------------------------------------------

/// Response body for `/api/wordcloud`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCloudResponse {
    /// Cloud entries, heaviest first.
    pub words: Vec<WordCloudEntry>,
}

/// Query parameters for `/api/trending`.
#[derive(Debug, Default, Deserialize)]
pub struct TrendingParams {
    /// `series` selects the parallel-array shape.
    #[serde(default)]
    pub shape: Option<String>,
}

/// Response body for `/api/trending`; shape depends on the `shape` parameter.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TrendingResponse {
    /// Default ranked-object list.
    Ranked(Vec<RankedTopic>),
    /// Parallel arrays, selected with `?shape=series`.
    Series(TopicSeries),
}

/// One aggregation pass over the trailing trending window.
async fn live_topics(client: &OpenAlexClient) -> ClientResult<TopicAggregate> {
    let from_date =
        Utc::now().date_naive() - chrono::Duration::days(dashboard::TRENDING_WINDOW_DAYS);
    let page = client
        .search_works(
            WorksQuery::new()
                .concept(dashboard::AI_CONCEPT_ID)
                .from_publication_date(from_date)
                .per_page(dashboard::TRENDING_PAGE_SIZE),
        )
        .await?;

    Ok(TopicAggregate::from_works(
        &page.results,
        dashboard::MIN_CONCEPT_LEVEL,
        dashboard::TOP_TOPICS,
    ))
}

/// GET /api/wordcloud
pub async fn wordcloud(State(state): State<Arc<AppState>>) -> Json<WordCloudResponse> {
    let live = live_topics(&state.openalex).await;
    let aggregate = or_fallback("wordcloud", live, fallback::topics);
    Json(WordCloudResponse { words: aggregate.word_cloud() })
}

/// GET /api/trending
pub async fn trending(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TrendingParams>,
) -> Json<TrendingResponse> {
    let live = live_topics(&state.openalex).await;
    let aggregate = or_fallback("trending", live, fallback::topics);

    let response = if params.shape.as_deref() == Some("series") {
        TrendingResponse::Series(aggregate.series())
    } else {
        TrendingResponse::Ranked(aggregate.into_ranked())
    };
    Json(response)
}

// ---------------------------------------------------------------------------
// Researcher directory
// ---------------------------------------------------------------------------

/// Query parameters for `/api/researchers`.
#[derive(Debug, Default, Deserialize)]
pub struct ResearcherFilters {
    /// Topic predicate.
    #[serde(default)]
    pub topic: Option<String>,

    /// Institution-name predicate.
    #[serde(default)]
    pub institution: Option<String>,

    /// Country-code predicate.
    #[serde(default)]
    pub country: Option<String>,
}

/// Response body for `/api/researchers`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResearchersResponse {
    /// Directory entries, most cited first on the live path.
    pub researchers: Vec<ResearcherSummary>,
}

/// Author search with the directory filters applied upstream.
///
/// The authors collection has no free-text topic search, so a topic filter
/// constrains to the AI concept; with no filters at all the directory
/// defaults to the same concept. An empty result page routes to fallback.
async fn live_researchers(
    client: &OpenAlexClient,
    filters: &ResearcherFilters,
) -> ClientResult<Vec<ResearcherSummary>> {
    let mut query = ListQuery::new()
        .per_page(dashboard::RESEARCHER_PAGE_SIZE)
        .sort("cited_by_count:desc");

    if filters.topic.is_some() || (filters.institution.is_none() && filters.country.is_none()) {
        query = query.filter("concepts.id", dashboard::AI_CONCEPT_ID);
    }
    if let Some(ref institution) = filters.institution {
        query = query.filter("last_known_institution.display_name.search", institution);
    }
    if let Some(ref country) = filters.country {
        query = query.filter("last_known_institution.country_code", country.to_uppercase());
    }

    let page = client.search_authors(query).await?;
    if page.is_empty() {
        return Err(ClientError::missing("authors"));
    }
    Ok(from_author_records(&page.results))
}

/// GET /api/researchers
pub async fn researchers(
    State(state): State<Arc<AppState>>,
    Query(filters): Query<ResearcherFilters>,
) -> Json<ResearchersResponse> {
    let live = live_researchers(&state.openalex, &filters).await;
    let researchers = or_fallback("researchers", live, || {
        fallback::filter_researchers(
            fallback::researchers(),
            filters.topic.as_deref(),
            filters.institution.as_deref(),
            filters.country.as_deref(),
        )
    });
    Json(ResearchersResponse { researchers })
}

// ---------------------------------------------------------------------------
// Chat recommendations
// ---------------------------------------------------------------------------

/// Request body for `/api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Free-text interest.
    pub query: String,

    /// Optional background ("data science student", ...).
    #[serde(default)]
    pub user_background: Option<String>,
}

/// Response body for `/api/chat`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Narrative summary.
    pub summary: String,

    /// Researchers worth contacting.
    pub suggested_researchers: Vec<ResearcherSummary>,

    /// Papers worth reading.
    pub suggested_papers: Vec<PaperSuggestion>,
}

/// Bibliographic lookup, prompt assembly, and completion for one chat turn.
///
/// A completion failure degrades to the persona placeholder without
/// discarding the bibliographic results; a bibliographic failure fails the
/// whole live path.
async fn live_chat(state: &AppState, request: &ChatRequest) -> ClientResult<ChatResponse> {
    let current_year = Utc::now().year();
    let works = state
        .openalex
        .search_works(
            WorksQuery::new()
                .search(&request.query)
                .publication_year(format!("{}-{}", current_year - 1, current_year))
                .sort("cited_by_count:desc")
                .per_page(dashboard::CHAT_SUGGESTIONS as u32),
        )
        .await?;

    let mut papers: Vec<PaperSuggestion> =
        works.results.iter().map(PaperSuggestion::from_work).collect();
    let researchers = extract_researchers(&works.results, dashboard::CHAT_SUGGESTIONS);

    let prompt = prompts::research_guide_prompt(
        &request.query,
        request.user_background.as_deref(),
        &researchers,
        &papers,
    );
    let messages = [
        ChatMessage::system("You are a helpful AI research assistant named Atlas."),
        ChatMessage::user(prompt),
    ];
    let summary = match state.completion.chat(&messages, CHAT_TEMPERATURE, CHAT_MAX_TOKENS).await
    {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(endpoint = "chat", error = %error, "completion failed, using placeholder");
            prompts::CHAT_PLACEHOLDER.to_string()
        }
    };

    // Nothing matched the query; backfill the panel from the recent window.
    if papers.is_empty() && researchers.is_empty() {
        let trending = state
            .openalex
            .trending_works(7, dashboard::CHAT_SUGGESTIONS as u32)
            .await?;
        papers = trending.results.iter().map(PaperSuggestion::from_work).collect();
    }

    Ok(ChatResponse { summary, suggested_researchers: researchers, suggested_papers: papers })
}

/// POST /api/chat
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let live = live_chat(&state, &request).await;
    let response = or_fallback("chat", live, || ChatResponse {
        summary: fallback::chat_summary(&request.query),
        suggested_researchers: fallback::chat_researchers(),
        suggested_papers: Vec::new(),
    });
    Json(response)
}

// ---------------------------------------------------------------------------
// RSTI advisor
// ---------------------------------------------------------------------------

/// Request body for `/api/rsti-advisor`.
#[derive(Debug, Deserialize)]
pub struct AdvisorRequest {
    /// The student's RSTI type.
    pub rsti_type: String,

    /// Academic background.
    #[serde(default)]
    pub major: Option<String>,

    /// Conversation so far; empty starts a fresh one.
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,

    /// "1" or "2" for the current binary choice.
    #[serde(default)]
    pub choice: Option<String>,
}

/// Response body for `/api/rsti-advisor`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisorResponse {
    /// The advisor's reply for this turn.
    pub reply: String,

    /// Full conversation including the reply, for the next turn.
    pub conversation_history: Vec<ChatMessage>,

    /// Whether the reply is the final recommendation.
    pub is_final: bool,

    /// Up to three recommended topics, populated on the final turn.
    pub recommended_topics: Vec<String>,
}

/// Check whether an advisor reply is the final recommendation.
fn is_final_reply(reply: &str) -> bool {
    reply.contains(prompts::FINAL_MARKER)
        || (reply.contains("Final") && reply.contains("Recommendation"))
}

/// Pull up to three topics out of the final recommendation's numbered or
/// bulleted lines.
fn extract_recommended_topics(reply: &str) -> Vec<String> {
    let mut topics = Vec::new();
    for line in reply.lines() {
        let line = line.trim();
        let Some(first) = line.chars().next() else {
            continue;
        };
        if !first.is_ascii_digit() && first != '-' && first != '\u{2022}' {
            continue;
        }
        let topic = line
            .trim_start_matches(|c: char| {
                c.is_ascii_digit() || matches!(c, '.' | '-' | '\u{2022}' | ')' | ' ')
            })
            .trim();
        if !topic.is_empty() && topics.len() < 3 {
            topics.push(topic.to_string());
        }
    }
    topics
}

/// POST /api/rsti-advisor
pub async fn rsti_advisor(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AdvisorRequest>,
) -> Json<AdvisorResponse> {
    let mut messages = if request.conversation_history.is_empty() {
        vec![
            ChatMessage::system(prompts::advisor_system_prompt()),
            ChatMessage::user(prompts::advisor_opening(
                &request.rsti_type,
                request.major.as_deref(),
            )),
        ]
    } else {
        let mut messages = request.conversation_history.clone();
        if let Some(ref choice) = request.choice {
            messages.push(ChatMessage::user(format!("I choose option {choice}.")));
        }
        messages
    };

    match state.completion.chat(&messages, CHAT_TEMPERATURE, CHAT_MAX_TOKENS).await {
        Ok(reply) => {
            messages.push(ChatMessage::assistant(reply.clone()));
            let is_final = is_final_reply(&reply);
            let recommended_topics =
                if is_final { extract_recommended_topics(&reply) } else { Vec::new() };
            Json(AdvisorResponse {
                reply,
                conversation_history: messages,
                is_final,
                recommended_topics,
            })
        }
        Err(error) => {
            tracing::warn!(endpoint = "rsti-advisor", error = %error, "completion failed, using placeholder");
            Json(AdvisorResponse {
                reply: prompts::ADVISOR_PLACEHOLDER.to_string(),
                conversation_history: request.conversation_history,
                is_final: false,
                recommended_topics: Vec::new(),
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Lootbox
// ---------------------------------------------------------------------------

/// Response body for `/api/lootbox`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LootboxResponse {
    /// Revealed capsules.
    pub capsules: Vec<Capsule>,
}

/// Oversample the recent high-citation pool and reveal five capsules.
///
/// An empty oversample is a hard failure for the live path.
async fn live_capsules(client: &OpenAlexClient) -> ClientResult<Vec<Capsule>> {
    let current_year = Utc::now().year();
    let page = client
        .search_works(
            WorksQuery::new()
                .search(dashboard::LOOTBOX_QUERY)
                .publication_year(format!(
                    "{}-{}",
                    current_year - dashboard::LOOTBOX_WINDOW_YEARS,
                    current_year
                ))
                .sort("cited_by_count:desc")
                .per_page(dashboard::LOOTBOX_OVERSAMPLE),
        )
        .await?;

    if page.is_empty() {
        return Err(ClientError::missing("works"));
    }

    let mut rng = rand::thread_rng();
    Ok(sample_capsules(&page.results, dashboard::LOOTBOX_CAPSULES, &mut rng))
}

/// GET /api/lootbox
pub async fn lootbox(State(state): State<Arc<AppState>>) -> Json<LootboxResponse> {
    let live = live_capsules(&state.openalex).await;
    let capsules = or_fallback("lootbox", live, || {
        let pool = fallback::capsules();
        let mut rng = rand::thread_rng();
        pool.choose_multiple(&mut rng, dashboard::LOOTBOX_CAPSULES).cloned().collect()
    });
    Json(LootboxResponse { capsules })
}

// ---------------------------------------------------------------------------
// Life path
// ---------------------------------------------------------------------------

/// Response body for `/api/lifepath`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LifePathResponse {
    /// The generated story.
    pub story: String,
}

/// Error body for surfaced failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

/// POST /api/lifepath
///
/// The one endpoint that surfaces upstream failure; this view has no static
/// substitute (see DESIGN.md).
pub async fn lifepath(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<LifePathProfile>,
) -> Response {
    let prompt = prompts::life_path_prompt(&profile);
    let messages = [ChatMessage::user(prompt)];

    match state.completion.chat(&messages, 0.8, 600).await {
        Ok(story) => Json(LifePathResponse { story }).into_response(),
        Err(error) => {
            tracing::error!(endpoint = "lifepath", error = %error, "narrative generation failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse { error: "narrative generation failed".to_string() }),
            )
                .into_response()
        }
    }
}
