//! Mock-based client tests using wiremock.
//!
//! These verify query construction, polite-pool identification, and error
//! conversion against a mocked OpenAlex API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use research_pulse::client::{EntityKind, FilterSet, ListQuery, OpenAlexClient, WorksQuery};
use research_pulse::{ClientError, Config};

fn client_for(mock_server: &MockServer) -> OpenAlexClient {
    OpenAlexClient::new(&Config::for_testing(&mock_server.uri())).unwrap()
}

/// Sample work JSON in the upstream shape.
fn sample_work(id: &str, title: &str, citations: u64) -> serde_json::Value {
    json!({
        "id": format!("https://openalex.org/{id}"),
        "title": title,
        "publication_year": 2024,
        "cited_by_count": citations,
        "authorships": [
            {
                "author": {"id": "https://openalex.org/A1", "display_name": "Test Author"},
                "institutions": [{"display_name": "Test University"}]
            }
        ],
        "concepts": [
            {"display_name": "Artificial intelligence", "level": 1},
            {"display_name": "Language model", "level": 3}
        ]
    })
}

fn page_of(results: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "meta": {"count": results.len(), "page": 1, "per_page": 25},
        "results": results
    })
}

#[tokio::test]
async fn test_search_works_sends_combined_filter_param() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("search", "machine learning"))
        .and(query_param("filter", "publication_year:2023,is_oa:true"))
        .and(query_param("sort", "cited_by_count:desc"))
        .and(query_param("per_page", "5"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_of(vec![sample_work("W1", "ML Paper", 10)])),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .search_works(
            WorksQuery::new()
                .search("machine learning")
                .publication_year(2023)
                .open_access(true)
                .sort("cited_by_count:desc")
                .per_page(5),
        )
        .await
        .unwrap();

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title.as_deref(), Some("ML Paper"));
    assert_eq!(page.results[0].cited_by_count, 10);
}

#[tokio::test]
async fn test_mailto_attached_when_configured() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("mailto", "team@example.edu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_of(vec![])))
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.contact_email = Some("team@example.edu".to_string());
    let client = OpenAlexClient::new(&config).unwrap();

    let page = client.search_works(WorksQuery::new()).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.search_works(WorksQuery::new()).await;

    match result {
        Err(ClientError::Status { status, message }) => {
            assert_eq!(status, 503);
            assert!(message.contains("overloaded"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_results_key_is_an_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"meta": {"count": 0}})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.search_works(WorksQuery::new()).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_get_work_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works/W42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(sample_work("W42", "Single Work", 7)),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let work = client.get_work("W42").await.unwrap();
    assert_eq!(work.title.as_deref(), Some("Single Work"));
}

#[tokio::test]
async fn test_trending_works_filters_by_from_date_and_sorts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("sort", "cited_by_count:desc"))
        .and(query_param("per_page", "50"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_of(vec![sample_work("W1", "Hot Paper", 900)])),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.trending_works(7, 50).await.unwrap();
    assert_eq!(page.results.len(), 1);

    // The filter must carry an open-ended from-date, no to-date bound.
    let requests = mock_server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default();
    assert!(query.contains("from_publication_date"));
    assert!(!query.contains("to_publication_date"));
}

#[tokio::test]
async fn test_works_by_institution_composes_shortcuts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("filter", "institutions.id:I136199984,publication_year:2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_of(vec![])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client.works_by_institution("I136199984", Some(2023.into())).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_search_authors_maps_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/authors"))
        .and(query_param("filter", "last_known_institution.country_code:US"))
        .and(query_param("sort", "cited_by_count:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"count": 1},
            "results": [{
                "id": "https://openalex.org/A9",
                "display_name": "Maya Chen",
                "works_count": 44,
                "cited_by_count": 5100,
                "last_known_institution": {
                    "display_name": "MIT",
                    "country_code": "US"
                },
                "x_concepts": [{"display_name": "Machine learning", "level": 1}]
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let page = client
        .search_authors(
            ListQuery::new()
                .filter("last_known_institution.country_code", "US")
                .sort("cited_by_count:desc"),
        )
        .await
        .unwrap();

    assert_eq!(page.results.len(), 1);
    let author = &page.results[0];
    assert_eq!(author.display_name.as_deref(), Some("Maya Chen"));
    assert_eq!(author.cited_by_count, Some(5100));
    assert_eq!(
        author.last_known_institution.as_ref().unwrap().country_code.as_deref(),
        Some("US")
    );
}

#[tokio::test]
async fn test_entity_searches_hit_their_collections() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/institutions"))
        .and(query_param("search", "Boston"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"display_name": "Boston University", "country_code": "US"}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/concepts"))
        .and(query_param("filter", "level:0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"display_name": "Computer science", "level": 0}]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/sources"))
        .and(query_param("search", "Nature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"display_name": "Nature", "type": "journal", "is_oa": false}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    let institutions =
        client.search_institutions(ListQuery::new().search("Boston")).await.unwrap();
    assert_eq!(institutions.results[0].display_name.as_deref(), Some("Boston University"));

    let concepts = client.search_concepts(ListQuery::new().filter("level", 0)).await.unwrap();
    assert_eq!(concepts.results[0].level, 0);

    let sources = client.search_sources(ListQuery::new().search("Nature")).await.unwrap();
    assert_eq!(sources.results[0].source_type.as_deref(), Some("journal"));
}

#[tokio::test]
async fn test_group_works_by_returns_buckets() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/works"))
        .and(query_param("group_by", "publication_year"))
        .and(query_param("filter", "concepts.id:C154945302"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "group_by": [
                {"key": "2024", "key_display_name": "2024", "count": 310},
                {"key": "2023", "key_display_name": "2023", "count": 250}
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let filters = FilterSet::new().with("concepts.id", "C154945302");
    let buckets = client.group_works_by("publication_year", &filters).await.unwrap();

    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].count, 310);
}

#[tokio::test]
async fn test_autocomplete_queries_entity_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/autocomplete/institutions"))
        .and(query_param("q", "boston"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"id": "I136199984", "display_name": "Boston University"}]
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let hits = client.autocomplete(EntityKind::Institutions, "boston").await.unwrap();
    assert_eq!(hits.results.len(), 1);
    assert_eq!(hits.results[0].display_name.as_deref(), Some("Boston University"));
}
