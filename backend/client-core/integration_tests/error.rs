use client_core::error::CoreError;
use client_core::error::cache::CacheError;
use client_core::error::catalog_client::CatalogClientError;
use client_core::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use std::error::Error;
use std::panic::Location;
use std::path::PathBuf;

/// **VALUE**: Verifies `CatalogClientError::Server` shows type, status, message and location.
///
/// **BUG THIS CATCHES**: Would catch the status or location disappearing from the
/// `#[error(...)]` format, which is all a log line has to go on.
#[test]
#[track_caller]
fn given_server_error_when_formatted_then_includes_status_and_location() {
    // GIVEN: A server error
    let err = CatalogClientError::Server {
        status: HttpStatusCode(503),
        message: "maintenance".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let text = err.to_string();

    // THEN: Everything is there
    assert!(text.contains("Server Error"));
    assert!(text.contains("HTTP 503"));
    assert!(text.contains("maintenance"));
    assert!(text.contains("error.rs"));
}

/// **VALUE**: `From<url::ParseError>` records where the conversion happened.
///
/// **BUG THIS CATCHES**: Would catch `#[track_caller]` being dropped from the `From` impl,
/// which makes every URL error point into the error module.
#[test]
fn given_url_parse_failure_when_converted_then_location_is_call_site() {
    let parse_error = url::Url::parse("::").unwrap_err();

    let err = CatalogClientError::from(parse_error);

    match err {
        CatalogClientError::UrlParse { location, .. } => {
            assert!(location.file.contains("error.rs"));
        }
        other => panic!("expected UrlParse, got {other:?}"),
    }
}

/// **VALUE**: A load failure keeps the underlying client error as its source.
#[test]
fn given_load_error_when_inspected_then_source_is_client_error() {
    let err = CacheError::Load {
        location: ErrorLocation::from(Location::caller()),
        list: "centuries".to_string(),
        source: CatalogClientError::Json {
            message: "expected value".to_string(),
            location: ErrorLocation::from(Location::caller()),
        },
    };

    assert!(err.to_string().contains("centuries"));
    let source = err.source().expect("load error should have a source");
    assert!(source.to_string().contains("JSON Error"));
}

/// **VALUE**: `CoreError` is transparent over the module errors.
#[test]
fn given_config_error_when_wrapped_in_core_error_then_message_unchanged() {
    let inner = ConfigError::MissingApiKey {
        location: ErrorLocation::from(Location::caller()),
        path: PathBuf::from("/tmp/artbrowse/config.json"),
        env_var: "ARTBROWSE_API_KEY",
    };
    let expected = inner.to_string();

    let core: CoreError = inner.into();

    assert_eq!(core.to_string(), expected);
    assert!(expected.contains("ARTBROWSE_API_KEY"));
}
