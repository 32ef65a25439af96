use crate::helpers::{browser_for, mount_objects, object_page, reference_page};

use client_core::browser::{Filters, Outcome, PageDirection, View};

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn keyword(value: &str) -> Filters {
    Filters {
        keyword: Some(value.to_string()),
        ..Default::default()
    }
}

fn shown_titles(view: &View) -> Vec<String> {
    view.list()
        .map(|list| list.previews.iter().map(|p| p.title.clone()).collect())
        .unwrap_or_default()
}

/// Search for "vase" returning one record that has a medium link.
async fn open_vase_detail(
    server: &MockServer,
) -> client_core::browser::Browser<client_core::reference_cache::MemoryStore> {
    mount_objects(
        server,
        "keyword",
        "vase",
        json!({
            "info": {},
            "records": [{ "title": "Vase", "medium": "Porcelain", "culture": "Chinese" }]
        }),
    )
    .await;
    let browser = browser_for(server);
    assert_eq!(browser.search(&keyword("vase")).await, Outcome::Rendered);
    assert_eq!(browser.select_preview(0).await, Outcome::Rendered);
    browser
}

// ----------------------------------------------------------------------------
// startup()
// ----------------------------------------------------------------------------

/// **VALUE**: Startup fills both filter controls with one option per entry and a count label.
#[tokio::test]
async fn given_reference_lists_when_startup_then_controls_populated_with_counts() {
    // GIVEN: Both reference endpoints
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/classification"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(reference_page(&["Prints", "Vessels"])),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/century"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reference_page(&[
            "1st century",
            "2nd century",
            "3rd century",
        ])))
        .mount(&server)
        .await;
    let browser = browser_for(&server);

    // WHEN: Starting up
    let options = browser.startup().await;

    // THEN: Options in server order, counts as "(N)"
    assert_eq!(options.classifications.options, ["Prints", "Vessels"]);
    assert_eq!(options.classifications.count_label, "(2)");
    assert_eq!(options.centuries.count_label, "(3)");
    assert!(options.centuries.contains("2nd century"));
    assert_eq!(browser.filter_options().await, options);
    assert!(!browser.is_busy());
}

/// **VALUE**: One failing list does not prevent the other from populating.
///
/// **BUG THIS CATCHES**: Would catch an all-or-nothing join that discards the good list.
#[tokio::test]
async fn given_one_list_failing_when_startup_then_other_still_populated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/classification"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/century"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reference_page(&["1st century"])))
        .mount(&server)
        .await;
    let browser = browser_for(&server);

    let options = browser.startup().await;

    assert!(options.classifications.options.is_empty());
    assert_eq!(options.classifications.count_label, "(0)");
    assert_eq!(options.centuries.options, ["1st century"]);
}

// ----------------------------------------------------------------------------
// search() / paginate()
// ----------------------------------------------------------------------------

/// **VALUE**: A search replaces the view with one preview per record, in order.
#[tokio::test]
async fn given_search_results_when_searching_then_list_view_rendered() {
    let server = MockServer::start().await;
    mount_objects(
        &server,
        "keyword",
        "bowl",
        object_page(&["Bowl 1", "Bowl 2"], Some("n"), None),
    )
    .await;
    let browser = browser_for(&server);

    let outcome = browser.search(&keyword("bowl")).await;

    assert_eq!(outcome, Outcome::Rendered);
    let view = browser.view().await;
    assert_eq!(shown_titles(&view), ["Bowl 1", "Bowl 2"]);
    let list = view.list().unwrap();
    assert!(list.next.is_enabled());
    assert!(!list.previous.is_enabled());
}

/// **VALUE**: Next follows the server's link and the new page replaces the old one.
///
/// **BUG THIS CATCHES**: Would catch pages being appended instead of replaced.
#[tokio::test]
async fn given_next_link_when_paginating_then_page_replaced() {
    // GIVEN: Page one links to page two
    let server = MockServer::start().await;
    let next = format!(
        "{}/object?apikey=integration-key&keyword=bowl&page=2",
        server.uri()
    );
    let prev = format!(
        "{}/object?apikey=integration-key&keyword=bowl&page=1",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(object_page(
            &["Bowl 3"],
            None,
            Some(prev.as_str()),
        )))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_objects(
        &server,
        "keyword",
        "bowl",
        object_page(&["Bowl 1", "Bowl 2"], Some(next.as_str()), None),
    )
    .await;
    let browser = browser_for(&server);
    browser.search(&keyword("bowl")).await;

    // WHEN: Following next
    let outcome = browser.paginate(PageDirection::Next).await;

    // THEN: Only page two shows; next is now disabled and previous enabled
    assert_eq!(outcome, Outcome::Rendered);
    let view = browser.view().await;
    assert_eq!(shown_titles(&view), ["Bowl 3"]);
    assert!(!view.list().unwrap().next.is_enabled());
    assert!(view.list().unwrap().previous.is_enabled());
}

/// **VALUE**: A disabled control does nothing.
#[tokio::test]
async fn given_no_previous_link_when_paginating_back_then_ignored() {
    let server = MockServer::start().await;
    mount_objects(
        &server,
        "keyword",
        "bowl",
        object_page(&["Bowl 1"], None, None),
    )
    .await;
    let browser = browser_for(&server);
    browser.search(&keyword("bowl")).await;

    assert_eq!(
        browser.paginate(PageDirection::Previous).await,
        Outcome::Ignored
    );
    assert_eq!(shown_titles(&browser.view().await), ["Bowl 1"]);
}

/// **VALUE**: Paginating before any search is a no-op, not a panic.
#[tokio::test]
async fn given_idle_browser_when_paginating_then_ignored() {
    let server = MockServer::start().await;
    let browser = browser_for(&server);

    assert_eq!(
        browser.paginate(PageDirection::Next).await,
        Outcome::Ignored
    );
    assert_eq!(browser.view().await, View::Idle);
}

/// **VALUE**: A failed search is logged and leaves the current page on screen.
#[tokio::test]
async fn given_failing_search_when_searching_then_failed_and_view_kept() {
    let server = MockServer::start().await;
    mount_objects(
        &server,
        "keyword",
        "bowl",
        object_page(&["Bowl 1"], None, None),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("keyword", "broken"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let browser = browser_for(&server);
    browser.search(&keyword("bowl")).await;

    let outcome = browser.search(&keyword("broken")).await;

    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(shown_titles(&browser.view().await), ["Bowl 1"]);
    assert!(!browser.is_busy());
}

/// **VALUE**: An ordinary search with no results shows an empty list (only drill-downs notify).
#[tokio::test]
async fn given_search_without_results_when_searching_then_empty_list_rendered() {
    let server = MockServer::start().await;
    mount_objects(&server, "keyword", "nothing", object_page(&[], None, None)).await;
    let browser = browser_for(&server);

    let outcome = browser.search(&keyword("nothing")).await;

    assert_eq!(outcome, Outcome::Rendered);
    assert!(browser.view().await.list().unwrap().is_empty());
}

// ----------------------------------------------------------------------------
// select_preview() / back() / follow_link()
// ----------------------------------------------------------------------------

/// **VALUE**: Selecting a preview shows that record's detail, and back restores the list.
#[tokio::test]
async fn given_list_when_preview_selected_then_detail_shown_and_back_restores() {
    let server = MockServer::start().await;
    let browser = open_vase_detail(&server).await;

    let view = browser.view().await;
    let detail = view.detail().unwrap();
    assert_eq!(detail.title, "Vase");
    assert_eq!(detail.links().len(), 2);

    assert_eq!(browser.back().await, Outcome::Rendered);
    assert_eq!(shown_titles(&browser.view().await), ["Vase"]);
    assert_eq!(browser.back().await, Outcome::Ignored);
}

/// **VALUE**: Selecting a preview index that does not exist is ignored.
#[tokio::test]
async fn given_list_when_missing_preview_selected_then_ignored() {
    let server = MockServer::start().await;
    mount_objects(
        &server,
        "keyword",
        "bowl",
        object_page(&["Bowl 1"], None, None),
    )
    .await;
    let browser = browser_for(&server);
    browser.search(&keyword("bowl")).await;

    assert_eq!(browser.select_preview(5).await, Outcome::Ignored);
    assert!(matches!(browser.view().await, View::List(_)));
}

/// **VALUE**: Following a fact link lists the objects sharing that attribute value.
#[tokio::test]
async fn given_detail_when_link_followed_then_filtered_list_shown() {
    let server = MockServer::start().await;
    mount_objects(
        &server,
        "culture",
        "Chinese",
        object_page(&["Jar", "Cup"], None, None),
    )
    .await;
    let browser = open_vase_detail(&server).await;

    // Culture comes before Medium in the detail view.
    let outcome = browser.follow_link(0).await;

    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(shown_titles(&browser.view().await), ["Jar", "Cup"]);
}

/// **VALUE**: A drill-down with zero records reports NothingFound and keeps the view.
///
/// **WHY THIS MATTERS**: Replacing the detail view with an empty list would lose the
/// object the user was looking at.
///
/// **BUG THIS CATCHES**: Would catch the emptiness check happening after the view swap.
#[tokio::test]
async fn given_drill_down_without_results_when_link_followed_then_nothing_found_and_view_kept() {
    // GIVEN: A medium nobody else shares
    let server = MockServer::start().await;
    mount_objects(&server, "medium", "Porcelain", object_page(&[], None, None)).await;
    let browser = open_vase_detail(&server).await;
    let before = browser.view().await;

    // WHEN: Following the Medium link
    let outcome = browser.follow_link(1).await;

    // THEN: Notified, nothing replaced
    assert_eq!(outcome, Outcome::NothingFound);
    assert_eq!(browser.view().await, before);
}

/// **VALUE**: Following a link outside the detail view is ignored.
#[tokio::test]
async fn given_list_view_when_link_followed_then_ignored() {
    let server = MockServer::start().await;
    mount_objects(
        &server,
        "keyword",
        "bowl",
        object_page(&["Bowl 1"], None, None),
    )
    .await;
    let browser = browser_for(&server);
    browser.search(&keyword("bowl")).await;

    assert_eq!(browser.follow_link(0).await, Outcome::Ignored);
}

// ----------------------------------------------------------------------------
// Overlapping operations
// ----------------------------------------------------------------------------

/// **VALUE**: When searches overlap, the most recently started one wins.
///
/// **WHY THIS MATTERS**: Otherwise a slow, older response overwrites the results of the
/// search the user actually asked for last.
///
/// **BUG THIS CATCHES**: Would catch the generation check being skipped or done before
/// the response arrives.
#[tokio::test]
async fn given_slow_then_fast_search_when_both_complete_then_newer_result_shown() {
    // GIVEN: "old" answers slowly, "new" answers immediately
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("keyword", "old"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(object_page(&["Old"], None, None))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    mount_objects(&server, "keyword", "new", object_page(&["New"], None, None)).await;
    let browser = browser_for(&server);

    // WHEN: Starting "old", then "new" shortly after
    let old_filters = keyword("old");
    let (old, new) = tokio::join!(browser.search(&old_filters), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        browser.search(&keyword("new")).await
    });

    // THEN: The older result is dropped
    assert_eq!(old, Outcome::Superseded);
    assert_eq!(new, Outcome::Rendered);
    assert_eq!(shown_titles(&browser.view().await), ["New"]);
}

/// **VALUE**: The busy indicator stays on while any request is in flight.
#[tokio::test]
async fn given_request_in_flight_when_checked_then_busy_until_done() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(object_page(&["Slow"], None, None))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    let browser = browser_for(&server);

    let filters = Filters::default();
    let (outcome, busy_during) = tokio::join!(browser.search(&filters), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        browser.is_busy()
    });

    assert_eq!(outcome, Outcome::Rendered);
    assert!(busy_during);
    assert!(!browser.is_busy());
}
