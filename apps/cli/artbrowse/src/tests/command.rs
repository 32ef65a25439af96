use crate::command::{Command, parse_command};

use client_core::browser::Filters;

/// **VALUE**: Verifies filters and free keywords are separated, with quoted values kept whole.
///
/// **BUG THIS CATCHES**: Would catch "19th century" being split into a century and a keyword.
#[test]
fn given_search_line_with_quotes_when_parsed_then_filters_and_keywords_split() {
    // GIVEN: A search with quoted filter values and two keywords
    let line = r#"search classification=Prints century="19th century" blue bird"#;

    // WHEN: Parsing
    let command = parse_command(line).unwrap();

    // THEN: Each filter in its slot, keywords joined
    assert_eq!(
        command,
        Command::Search(Filters {
            classification: Some("Prints".to_string()),
            century: Some("19th century".to_string()),
            keyword: Some("blue bird".to_string()),
        })
    );
}

/// **VALUE**: A bare `search` means "everything".
#[test]
fn given_bare_search_when_parsed_then_no_filters() {
    assert_eq!(
        parse_command("search").unwrap(),
        Command::Search(Filters::default())
    );
}

/// **VALUE**: Indices are typed 1-based and stored 0-based.
///
/// **BUG THIS CATCHES**: Would catch an off-by-one that opens the wrong record.
#[test]
fn given_open_and_link_when_parsed_then_indices_zero_based() {
    assert_eq!(parse_command("open 1").unwrap(), Command::Open(0));
    assert_eq!(parse_command("link 3").unwrap(), Command::Link(2));
    assert!(parse_command("open 0").is_err());
    assert!(parse_command("open x").is_err());
}

/// **VALUE**: Short aliases and case-insensitive names work.
#[test]
fn given_aliases_when_parsed_then_same_commands() {
    assert_eq!(parse_command("N").unwrap(), Command::Next);
    assert_eq!(parse_command("prev").unwrap(), Command::Prev);
    assert_eq!(parse_command("  back  ").unwrap(), Command::Back);
    assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    assert_eq!(parse_command("filters").unwrap(), Command::Filters);
}

/// **VALUE**: Bad input is a command error, never a panic.
#[test]
fn given_invalid_lines_when_parsed_then_errors() {
    assert!(parse_command("").is_err());
    assert!(parse_command("dance").is_err());
    assert!(parse_command("next 2").is_err());
    assert!(parse_command(r#"search century="19th"#).is_err());
}
