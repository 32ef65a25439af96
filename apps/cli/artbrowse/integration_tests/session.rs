use artbrowse::session::{
    FAILED_MESSAGE, LOADING_MESSAGE, NOTHING_FOUND_MESSAGE, PROMPT, run_session, show_loading,
};

use client_core::browser::Browser;
use client_core::catalog_client::CatalogClient;
use client_core::reference_cache::{MemoryStore, ReferenceCache};

use common::RedactedApiKey;

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn browser_for(server: &MockServer) -> Browser<MemoryStore> {
    let client = CatalogClient::new(&server.uri(), RedactedApiKey::new("session-key"))
        .unwrap();
    Browser::new(client, ReferenceCache::new(MemoryStore::new()))
}

/// `Write` sink that can be handed to a spawned task and read afterwards.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

async fn run_script(browser: &Browser<MemoryStore>, script: &str) -> String {
    let mut out = Vec::new();
    run_session(browser, script.as_bytes(), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

/// **VALUE**: Walks the whole search → detail → drill-down flow through typed commands.
///
/// **WHY THIS MATTERS**: This is the path a user takes; each step depends on the view
/// left by the previous one.
///
/// **BUG THIS CATCHES**: Would catch an empty drill-down replacing the detail view, or the
/// notice not being printed.
#[tokio::test]
async fn given_scripted_session_when_run_then_search_detail_and_drill_down_printed() {
    // GIVEN: A search result whose medium matches nothing else
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("keyword", "vase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "info": { "totalrecords": 1 },
            "records": [{ "title": "Vase", "medium": "Porcelain", "dated": "1700" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param("medium", "Porcelain"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "info": {}, "records": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;
    let browser = browser_for(&server).await;

    // WHEN: Searching, opening the result, following its only link, and going back
    let output = run_script(&browser, "search vase\nopen 1\nlink 1\nback\nquit\n").await;

    // THEN: Each step's result appears in order
    let search_at = output.find("  1. Vase").expect("list printed");
    let detail_at = output.find("Medium: Porcelain  [link 1]").expect("detail printed");
    let notice_at = output.find(NOTHING_FOUND_MESSAGE).expect("notice printed");
    assert!(search_at < detail_at && detail_at < notice_at);
    assert!(
        output.rfind("  1. Vase").unwrap() > notice_at,
        "back shows the list again"
    );
}

/// **VALUE**: Catalog failures and bad commands are reported and the session keeps going.
#[tokio::test]
async fn given_failures_when_session_runs_then_reported_and_session_continues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let browser = browser_for(&server).await;

    let output = run_script(&browser, "search bowl\ndance\nnext\nhelp\n").await;

    assert!(output.contains(FAILED_MESSAGE));
    assert!(output.contains("unknown command"));
    assert!(output.contains("Not available here."));
    assert!(output.contains("Commands:"));
    // One prompt per line plus the final prompt that sees end of input.
    assert_eq!(output.matches(PROMPT).count(), 5);
}

/// **VALUE**: A slow search shows the loading line while it runs and erases it afterwards.
///
/// **WHY THIS MATTERS**: Without it the terminal sits silent during every fetch and the
/// user cannot tell a slow catalog from a hung program.
///
/// **BUG THIS CATCHES**: Would catch the busy indicator being tracked but never shown,
/// or the line staying up after the request finished.
#[tokio::test]
async fn given_slow_search_when_session_runs_then_loading_shown_then_cleared() {
    // GIVEN: A catalog that answers after a noticeable delay
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/object"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "info": { "totalrecords": 1 },
                    "records": [{ "title": "Bowl" }],
                }))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;
    let browser = browser_for(&server).await;
    let status = SharedBuffer::default();
    let watcher = tokio::spawn(show_loading(browser.busy().subscribe(), status.clone()));

    // WHEN: Running a search, then shutting the browser down
    let output = run_script(&browser, "search bowl\nquit\n").await;
    drop(browser);
    watcher.await.unwrap();

    // THEN: Results printed; the status stream shows the line, then blanks it
    assert!(output.contains("  1. Bowl"));
    let status = status.contents();
    let shown_at = status.find(LOADING_MESSAGE).expect("loading line shown");
    let blank = " ".repeat(LOADING_MESSAGE.len());
    assert!(status[shown_at..].contains(&blank), "loading line erased");
    assert!(
        !output.contains(LOADING_MESSAGE),
        "indicator stays off the results stream"
    );
}
