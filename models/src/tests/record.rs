use crate::Record;

use serde_json::json;

/// **VALUE**: The catalog sends `null` for missing attributes; decoding must not fail.
///
/// **BUG THIS CATCHES**: Would catch a field typed as `String` instead of `Option<String>`.
#[test]
fn given_null_fields_when_decoded_then_fields_are_none() {
    let body = json!({
        "title": "Bowl",
        "culture": null,
        "people": null,
        "images": [],
        "objectnumber": "1923.1"
    });

    let record: Record = serde_json::from_value(body).unwrap();

    assert_eq!(record.title.as_deref(), Some("Bowl"));
    assert!(record.culture.is_none());
    assert!(record.people.is_none());
    assert_eq!(record.images, Some(vec![]));
}

/// **VALUE**: Verifies nested people and images decode in order.
#[test]
fn given_people_and_images_when_decoded_then_order_preserved() {
    let body = json!({
        "people": [{"displayname": "A", "role": "Artist"}, {"displayname": "B"}],
        "images": [{"baseimageurl": "1.jpg"}, {"baseimageurl": "2.jpg"}]
    });

    let record: Record = serde_json::from_value(body).unwrap();

    let people = record.people.unwrap();
    assert_eq!(people[1].displayname.as_deref(), Some("B"));
    let images = record.images.unwrap();
    assert_eq!(images[0].baseimageurl.as_deref(), Some("1.jpg"));
}

/// **VALUE**: Verifies the display title fallback chain.
#[test]
fn given_missing_title_when_display_title_then_falls_back() {
    let with_id = Record {
        id: Some(42),
        ..Default::default()
    };
    let empty_title = Record {
        title: Some(String::new()),
        ..Default::default()
    };

    assert_eq!(with_id.display_title(), "Untitled #42");
    assert_eq!(empty_title.display_title(), "Untitled");
}
