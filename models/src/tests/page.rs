use crate::Page;
use crate::reference::ReferenceResponse;

use serde_json::json;

/// **VALUE**: Verifies a catalog object response decodes with pagination links.
///
/// **BUG THIS CATCHES**: Would catch a renamed field (e.g. `previous` instead of `prev`)
/// that silently disables the pagination controls.
#[test]
fn given_object_response_when_decoded_then_records_and_links_present() {
    // GIVEN: A response shaped like the catalog's `/object`
    let body = json!({
        "info": {"totalrecords": 2, "pages": 1, "page": 1, "next": "https://host/object?page=2"},
        "records": [{"title": "Vase", "primaryimageurl": "a.jpg"}, {"title": "Bowl"}]
    });

    // WHEN: Decoding
    let page: Page = serde_json::from_value(body).unwrap();

    // THEN: Records in order, next present, prev absent
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].title.as_deref(), Some("Vase"));
    assert_eq!(
        page.info.next.as_deref(),
        Some("https://host/object?page=2")
    );
    assert!(page.info.prev.is_none());
    assert_eq!(page.info.totalrecords, Some(2));
}

/// **VALUE**: A response without `info` must still decode to a usable page.
#[test]
fn given_response_without_info_when_decoded_then_defaults_apply() {
    let page: Page = serde_json::from_value(json!({"records": []})).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.info, Default::default());
}

/// **VALUE**: Verifies reference list envelopes decode and keep extra fields optional.
#[test]
fn given_reference_response_when_decoded_then_names_kept_in_order() {
    let body = json!({
        "info": {"totalrecords": 2},
        "records": [{"name": "Prints", "id": 23, "objectcount": 70000}, {"name": "Vessels"}]
    });

    let response: ReferenceResponse = serde_json::from_value(body).unwrap();

    let names: Vec<&str> = response.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Prints", "Vessels"]);
    assert_eq!(response.records[0].objectcount, Some(70000));
}

/// **VALUE**: Fields the app does not read survive a decode and re-encode of an entry.
///
/// **BUG THIS CATCHES**: Would catch stored reference lists losing the server's
/// extra fields (e.g. `temporalorder`) when written back as JSON text.
#[test]
fn given_reference_entry_with_extra_fields_when_reencoded_then_fields_kept() {
    // GIVEN: A century record carrying fields beyond name/id
    let record = json!({"name": "1st century", "id": 1, "temporalorder": 3, "lastupdate": "2020"});

    // WHEN: Decoding then encoding it again
    let response: ReferenceResponse =
        serde_json::from_value(json!({ "records": [record.clone()] }))
            .unwrap();
    let reencoded = serde_json::to_value(&response.records[0]).unwrap();

    // THEN: The encoded entry equals the original record
    assert_eq!(response.records[0].extra["temporalorder"], json!(3));
    assert_eq!(reencoded, record);
}
