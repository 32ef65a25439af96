use client_core::browser::Browser;
use client_core::catalog_client::CatalogClient;
use client_core::reference_cache::{MemoryStore, ReferenceCache};

use common::RedactedApiKey;

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "integration-key";

pub fn client_for(server: &MockServer) -> CatalogClient {
    CatalogClient::new(&server.uri(), RedactedApiKey::new(TEST_API_KEY))
        .unwrap()
}

pub fn browser_for(server: &MockServer) -> Browser<MemoryStore> {
    Browser::new(client_for(server), ReferenceCache::new(MemoryStore::new()))
}

pub fn object_page(titles: &[&str], next: Option<&str>, prev: Option<&str>) -> Value {
    let records: Vec<Value> = titles.iter().map(|t| json!({ "title": t })).collect();
    json!({
        "info": { "totalrecords": titles.len(), "next": next, "prev": prev },
        "records": records,
    })
}

pub fn reference_page(names: &[&str]) -> Value {
    let records: Vec<Value> = names.iter().map(|n| json!({ "name": n })).collect();
    json!({ "info": { "totalrecords": names.len() }, "records": records })
}

/// Mount `/object` answering `body` for requests carrying `key=value`.
pub async fn mount_objects(server: &MockServer, key: &str, value: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/object"))
        .and(query_param(key, value))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
