use crate::helpers::{client_for, reference_page};

use client_core::error::cache::CacheError;
use client_core::error::catalog_client::CatalogClientError;
use client_core::reference_cache::{
    FileStore, KeyValueStore, MemoryStore, ReferenceCache, ReferenceList,
};

use common::ErrorLocation;
use models::ReferenceEntry;

use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: The second lookup of a list is served from storage without touching the network.
///
/// **WHY THIS MATTERS**: Reference lists rarely change; refetching them on every start
/// wastes requests against a rate-limited key.
///
/// **BUG THIS CATCHES**: Would catch the stored value being written but never read.
#[tokio::test]
async fn given_list_loaded_once_when_requested_again_then_no_second_fetch() {
    // GIVEN: A catalog that must be called exactly once
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/century"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reference_page(&["1st century", "2nd century"])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let cache = ReferenceCache::new(MemoryStore::new());

    // WHEN: Requesting the list twice
    let first = cache
        .reference_list(ReferenceList::Centuries, &client)
        .await
        .unwrap();
    let second = cache
        .reference_list(ReferenceList::Centuries, &client)
        .await
        .unwrap();

    // THEN: Identical content; wiremock verifies the single call on drop
    assert_eq!(first, second);
    assert_eq!(second.len(), 2);
}

/// **VALUE**: A list stored by a previous run is used without calling the loader at all.
#[tokio::test]
async fn given_list_in_file_store_when_requested_then_loader_not_called() {
    // GIVEN: A previous run's file
    let dir = TempDir::new().unwrap();
    FileStore::new(dir.path())
        .set(
            "classification",
            r#"[{"name":"Prints"},{"name":"Vessels"}]"#,
        )
        .unwrap();
    let cache = ReferenceCache::new(FileStore::new(dir.path()));
    let calls = AtomicUsize::new(0);
    let counter = &calls;

    // WHEN: Requesting the list
    let entries = cache
        .get_reference_list("classification", move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        })
        .await
        .unwrap();

    // THEN: Stored entries, loader untouched
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        entries,
        vec![ReferenceEntry::new("Prints"), ReferenceEntry::new("Vessels")]
    );
}

/// **VALUE**: Loaded lists are written to storage as JSON text under the list's key.
#[tokio::test]
async fn given_empty_store_when_list_loaded_then_serialized_under_key() {
    let store = MemoryStore::new();
    let cache = ReferenceCache::new(store);

    cache
        .get_reference_list("centuries", || async {
            Ok(vec![ReferenceEntry::new("1st century")])
        })
        .await
        .unwrap();

    let stored = cache.store().get("centuries").unwrap().unwrap();
    let decoded: Vec<ReferenceEntry> = serde_json::from_str(&stored).unwrap();
    assert_eq!(decoded, vec![ReferenceEntry::new("1st century")]);
}

/// **VALUE**: A corrupted stored value is replaced by a fresh load rather than failing forever.
///
/// **BUG THIS CATCHES**: Would catch a decode error propagating, which would leave the
/// filter controls empty until someone deletes the cache by hand.
#[tokio::test]
async fn given_corrupt_stored_value_when_requested_then_reloaded_and_overwritten() {
    let store = MemoryStore::new();
    store.set("centuries", "not json").unwrap();
    let cache = ReferenceCache::new(store);

    let entries = cache
        .get_reference_list("centuries", || async {
            Ok(vec![ReferenceEntry::new("20th century")])
        })
        .await
        .unwrap();

    assert_eq!(entries[0].name, "20th century");
    assert!(
        cache
            .store()
            .get("centuries")
            .unwrap()
            .unwrap()
            .contains("20th century")
    );
}

/// **VALUE**: Loader failures propagate as `Load` and store nothing.
#[tokio::test]
async fn given_failing_loader_when_requested_then_load_error_and_nothing_stored() {
    let cache = ReferenceCache::new(MemoryStore::new());

    let result = cache
        .get_reference_list("centuries", || async {
            Err(CatalogClientError::Http {
                message: "connection refused".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .await;

    assert!(matches!(result, Err(CacheError::Load { .. })));
    assert_eq!(cache.store().get("centuries").unwrap(), None);
}

/// **VALUE**: Two concurrent first-time requests for one list share a single fetch.
///
/// **WHY THIS MATTERS**: Without serialization both callers fetch and both write,
/// doubling the startup requests.
#[tokio::test]
async fn given_concurrent_first_requests_when_populating_then_single_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/classification"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reference_page(&["Prints"]))
                .set_delay(std::time::Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let cache = ReferenceCache::new(MemoryStore::new());

    let (first, second) = tokio::join!(
        cache.reference_list(ReferenceList::Classifications, &client),
        cache.reference_list(ReferenceList::Classifications, &client)
    );

    assert_eq!(first.unwrap(), second.unwrap());
}

/// **VALUE**: Clearing removes both lists so the next start refetches them.
#[tokio::test]
async fn given_populated_cache_when_cleared_then_store_empty() {
    let cache = ReferenceCache::new(MemoryStore::new());
    for list in ReferenceList::ALL {
        cache
            .get_reference_list(list.storage_key(), || async {
                Ok(vec![ReferenceEntry::new("x")])
            })
            .await
            .unwrap();
    }

    cache.clear().unwrap();

    assert_eq!(cache.store().get("centuries").unwrap(), None);
    assert_eq!(cache.store().get("classification").unwrap(), None);
}

/// **VALUE**: The stored text keeps every field the catalog sent for each entry.
///
/// **BUG THIS CATCHES**: Would catch the cache writing back only the fields the app
/// reads, so a stored list no longer matches what the server returned.
#[tokio::test]
async fn given_catalog_entry_with_extra_fields_when_cached_then_stored_text_keeps_them() {
    // GIVEN: A century record with fields beyond name/id
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/century"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "info": { "totalrecords": 1 },
            "records": [{
                "name": "1st century",
                "id": 1,
                "temporalorder": 3,
                "lastupdate": "2020",
            }],
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let cache = ReferenceCache::new(MemoryStore::new());

    // WHEN: Loading the list through the cache
    cache
        .reference_list(ReferenceList::Centuries, &client)
        .await
        .unwrap();

    // THEN: The stored records equal the server's records
    let stored = cache.store().get("centuries").unwrap().unwrap();
    let stored: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([{
            "name": "1st century",
            "id": 1,
            "temporalorder": 3,
            "lastupdate": "2020",
        }])
    );
}
