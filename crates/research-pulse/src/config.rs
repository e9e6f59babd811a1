//! Configuration for the research-pulse service.

use std::time::Duration;

/// Upstream API constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const OPENALEX_BASE_URL: &str = "https://api.openalex.org";

    /// Base URL for the chat-completion API.
    pub const COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";

    /// Default completion model.
    pub const COMPLETION_MODEL: &str = "gpt-4o-mini";

    /// OpenAlex request timeout.
    pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);

    /// Completion request timeout (generation is slower than search).
    pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Minimum wall-clock interval between consecutive OpenAlex requests.
    pub const REQUEST_INTERVAL: Duration = Duration::from_millis(100);

    /// Maximum keepalive connections per host.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);

    /// OpenAlex accepts 1..=200 results per page.
    pub const MAX_PER_PAGE: u32 = 200;
}

/// Query constants shared by the dashboard views.
pub mod dashboard {
    /// OpenAlex concept id for "Artificial intelligence".
    pub const AI_CONCEPT_ID: &str = "C154945302";

    /// Free-text query behind the lootbox oversample.
    pub const LOOTBOX_QUERY: &str =
        "artificial intelligence OR machine learning OR deep learning";

    /// Trailing window for trending-topic aggregation, in days.
    pub const TRENDING_WINDOW_DAYS: i64 = 30;

    /// Works fetched per trending aggregation pass.
    pub const TRENDING_PAGE_SIZE: u32 = 200;

    /// Concept levels below this are too broad to chart.
    pub const MIN_CONCEPT_LEVEL: u8 = 2;

    /// Ranked topics kept per aggregation.
    pub const TOP_TOPICS: usize = 30;

    /// Researcher directory page size.
    pub const RESEARCHER_PAGE_SIZE: u32 = 50;

    /// Works oversampled for one lootbox opening.
    pub const LOOTBOX_OVERSAMPLE: u32 = 20;

    /// Capsules revealed per lootbox opening.
    pub const LOOTBOX_CAPSULES: usize = 5;

    /// Lootbox publication window, in years.
    pub const LOOTBOX_WINDOW_YEARS: i32 = 5;

    /// Researcher and paper suggestions attached to a chat reply.
    pub const CHAT_SUGGESTIONS: usize = 3;
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact e-mail for the OpenAlex polite pool (optional).
    pub contact_email: Option<String>,

    /// Completion API key (optional; chat views degrade without it).
    pub completion_api_key: Option<String>,

    /// OpenAlex base URL (overridable for mock servers).
    pub openalex_base_url: String,

    /// Completion API base URL (overridable for mock servers).
    pub completion_base_url: String,

    /// Completion model identifier.
    pub completion_model: String,

    /// OpenAlex request timeout.
    pub search_timeout: Duration,

    /// Completion request timeout.
    pub completion_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// Minimum interval between consecutive OpenAlex requests.
    pub request_interval: Duration,
}

impl Config {
    /// Create a configuration with the given upstream credentials.
    #[must_use]
    pub fn new(contact_email: Option<String>, completion_api_key: Option<String>) -> Self {
        Self {
            contact_email,
            completion_api_key,
            openalex_base_url: api::OPENALEX_BASE_URL.to_string(),
            completion_base_url: api::COMPLETION_BASE_URL.to_string(),
            completion_model: api::COMPLETION_MODEL.to_string(),
            search_timeout: api::SEARCH_TIMEOUT,
            completion_timeout: api::COMPLETION_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            request_interval: api::REQUEST_INTERVAL,
        }
    }

    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let contact_email = std::env::var("OPENALEX_MAILTO").ok();
        let completion_api_key = std::env::var("OPENAI_API_KEY").ok();
        Self::new(contact_email, completion_api_key)
    }

    /// Create a test configuration pointed at a mock server.
    ///
    /// Pacing and keys are disabled so tests run without delays.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            contact_email: None,
            completion_api_key: Some("test-key".to_string()),
            openalex_base_url: base_url.to_string(),
            completion_base_url: format!("{base_url}/v1"),
            completion_model: api::COMPLETION_MODEL.to_string(),
            search_timeout: Duration::from_secs(5),
            completion_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            request_interval: Duration::ZERO,
        }
    }

    /// Check if a completion API key is configured.
    #[must_use]
    pub const fn has_completion_key(&self) -> bool {
        self.completion_api_key.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, None)
    }
}
