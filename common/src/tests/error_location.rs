use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures the caller's file and line.
///
/// **WHY THIS MATTERS**: Every client, cache and config error carries one of these.
/// If capture breaks, error messages stop pointing at the failing call site.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` propagation breaks or the
/// struct stops recording the line.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_and_line() {
    // GIVEN / WHEN: Capturing the current location
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: File and line point here
    assert!(location.file.contains("error_location.rs"));
    assert_eq!(location.line, expected_line);
    assert!(location.column > 0);
}

/// **VALUE**: Verifies the `[file:line:column]` display format.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops brackets or fields,
/// which every `#[error(...)]` string in the workspace relies on.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: A location
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting
    let formatted = location.to_string();

    // THEN: Bracketed with exactly two colons
    assert!(formatted.starts_with('['));
    assert!(formatted.ends_with(']'));
    assert_eq!(formatted.matches(':').count(), 2);
    assert!(formatted.contains(&location.line.to_string()));
}

/// **VALUE**: Verifies `#[track_caller]` helpers report their caller, not themselves.
///
/// **BUG THIS CATCHES**: Would catch a missing `#[track_caller]` on error constructors,
/// which would make every error report the same line.
#[test]
fn given_track_caller_helper_when_called_twice_then_lines_differ() {
    #[track_caller]
    fn capture() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let first = capture();
    let second = capture();

    assert_ne!(first.line, second.line);
}
