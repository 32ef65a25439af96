use crate::RedactedApiKey;

/// **VALUE**: Verifies the key never appears in Debug or Display output.
///
/// **WHY THIS MATTERS**: The client and config structs derive Debug and get logged.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the manual impls with derives.
#[test]
fn given_api_key_when_formatted_then_value_is_hidden() {
    // GIVEN: A key
    let key = RedactedApiKey::new("secret-123");

    // WHEN: Formatting both ways
    let debug = format!("{key:?}");
    let display = format!("{key}");

    // THEN: Neither leaks the value
    assert!(!debug.contains("secret-123"));
    assert!(!display.contains("secret-123"));
    assert_eq!(key.as_str(), "secret-123");
    assert_eq!(key.len(), 10);
}

/// **VALUE**: Verifies that request URLs are scrubbed before logging.
///
/// **BUG THIS CATCHES**: Would catch `scrub` missing repeated occurrences.
#[test]
fn given_url_with_key_when_scrubbed_then_every_occurrence_replaced() {
    let key = RedactedApiKey::new("k-1");
    let url = "https://host/object?apikey=k-1&next=https%3A%2F%2Fhost%2F%3Fapikey%3Dk-1";

    let scrubbed = key.scrub(url);

    assert!(!scrubbed.contains("k-1"));
    assert_eq!(scrubbed.matches("[REDACTED]").count(), 2);
}

/// **VALUE**: An empty key must not turn scrubbing into a text-mangling operation.
#[test]
fn given_empty_key_when_scrubbed_then_text_unchanged() {
    let key = RedactedApiKey::new("");

    assert!(key.is_empty());
    assert_eq!(key.scrub("https://host/object"), "https://host/object");
}

/// **VALUE**: Verifies serialization is refused so the key never lands in a written file.
#[test]
fn given_api_key_when_serialized_then_returns_error() {
    let key = RedactedApiKey::new("secret");

    let result = serde_json::to_string(&key);

    assert!(result.is_err());
}
