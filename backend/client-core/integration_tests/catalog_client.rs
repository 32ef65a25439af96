use crate::helpers::{TEST_API_KEY, client_for, object_page, reference_page};

use client_core::catalog_client::{SearchAttribute, SearchQuery};
use client_core::error::catalog_client::CatalogClientError;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: Verifies searches hit `/object` with the key and the chosen filters.
///
/// **BUG THIS CATCHES**: Would catch the key or a filter dropping off the request,
/// which the real catalog answers with 401 or unfiltered results.
#[tokio::test]
async fn given_filters_when_searching_then_request_carries_key_and_filters() {
    // GIVEN: A catalog that only answers the exact filtered query
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("apikey", TEST_API_KEY))
        .and(query_param("classification", "Vessels"))
        .and(query_param("century", "19th century"))
        .and(query_param("keyword", "blue"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(object_page(&["Vase"], None, None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // WHEN: Searching
    let query = SearchQuery {
        classification: Some("Vessels".to_string()),
        century: Some("19th century".to_string()),
        keyword: Some("blue".to_string()),
        size: None,
    };
    let page = client
        .fetch_objects(&client.search_url(&query).unwrap())
        .await
        .unwrap();

    // THEN: The matching page comes back
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].title.as_deref(), Some("Vase"));
}

/// **VALUE**: Verifies the reference endpoints use one 100-entry page and their sort orders.
///
/// **BUG THIS CATCHES**: Would catch centuries sorted by name ("1st", "10th", "11th"...).
#[tokio::test]
async fn given_reference_endpoints_when_fetched_then_size_100_and_sorted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/century"))
        .and(query_param("size", "100"))
        .and(query_param("sort", "temporalorder"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reference_page(&["1st century", "2nd century"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/classification"))
        .and(query_param("size", "100"))
        .and(query_param("sort", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reference_page(&["Prints"])))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let centuries = client.fetch_centuries().await.unwrap();
    let classifications = client.fetch_classifications().await.unwrap();

    assert_eq!(centuries[1].name, "2nd century");
    assert_eq!(classifications[0].name, "Prints");
}

/// **VALUE**: Server-supplied pagination links are fetched verbatim.
#[tokio::test]
async fn given_server_link_when_fetched_then_link_used_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(object_page(&["Page two"], None, None)),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    let link = format!("{}/object?apikey={TEST_API_KEY}&page=2", server.uri());
    let page = client
        .fetch_objects(&client.parse_link(&link).unwrap())
        .await
        .unwrap();

    assert_eq!(page.records[0].title.as_deref(), Some("Page two"));
}

/// **VALUE**: Attribute links query by that attribute alone.
#[tokio::test]
async fn given_attribute_link_when_fetched_then_filters_by_attribute() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("technique", "Etching"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(object_page(&["Print"], None, None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let url = client
        .attribute_url(SearchAttribute::Technique, "Etching")
        .unwrap();
    let page = client.fetch_objects(&url).await.unwrap();

    assert_eq!(page.records.len(), 1);
}

/// **VALUE**: Non-success statuses surface as `Server` errors with the status code.
///
/// **BUG THIS CATCHES**: Would catch an error body being decoded as an empty page.
#[tokio::test]
async fn given_unauthorized_response_when_fetched_then_server_error_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/century"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad key integration-key"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.fetch_centuries().await;

    match result {
        Err(CatalogClientError::Server { status, message, .. }) => {
            assert!(status.is_auth_rejection());
            assert!(!message.contains(TEST_API_KEY), "key must be scrubbed");
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: An error status without a readable body still yields a `Server` error
/// carrying the status, with an empty message.
#[tokio::test]
async fn given_error_status_without_body_when_fetched_then_server_error_with_empty_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/classification"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.fetch_classifications().await;

    match result {
        Err(CatalogClientError::Server { status, message, .. }) => {
            assert!(status.is_server_error());
            assert!(message.is_empty());
        }
        other => panic!("expected Server error, got {other:?}"),
    }
}

/// **VALUE**: An unparseable body is a `Json` error, distinct from transport failures.
#[tokio::test]
async fn given_malformed_body_when_fetched_then_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let url = client.search_url(&SearchQuery::default()).unwrap();
    let result = client.fetch_objects(&url).await;

    assert!(matches!(result, Err(CatalogClientError::Json { .. })));
}

/// **VALUE**: A refused connection is an `Http` error rather than a panic.
#[tokio::test]
async fn given_unreachable_catalog_when_fetched_then_http_error() {
    let client = client_core::catalog_client::CatalogClient::new(
        "http://127.0.0.1:9",
        common::RedactedApiKey::new(TEST_API_KEY),
    )
    .unwrap();

    let result = client.fetch_classifications().await;

    match result {
        Err(CatalogClientError::Http { message, .. }) => {
            assert!(!message.contains(TEST_API_KEY), "key must not leak via URL");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

/// **VALUE**: Records with null attributes decode without failing the page.
#[tokio::test]
async fn given_nulls_in_records_when_fetched_then_page_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": { "next": null },
            "records": [{ "title": "Bowl", "culture": null, "images": null }]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let url = client.search_url(&SearchQuery::default()).unwrap();
    let page = client.fetch_objects(&url).await.unwrap();

    assert!(page.records[0].culture.is_none());
    assert!(page.info.next.is_none());
}
