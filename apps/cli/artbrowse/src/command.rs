//! Parsing of the lines typed into the interactive session.

use crate::error::ArtbrowseError;

use client_core::browser::Filters;

pub const HELP_TEXT: &str = "\
Commands:
  filters                         list classifications and centuries
  search [classification=..] [century=..] [keywords..]
                                  run a search (quote values with spaces)
  next | prev                     follow the pagination links
  open N                          show result N in detail
  link N                          search by the detail view's link N
  back                            return from detail to the results
  help                            show this text
  quit                            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filters,
    Search(Filters),
    Next,
    Prev,
    /// Zero-based preview index.
    Open(usize),
    /// Zero-based link index.
    Link(usize),
    Back,
    Help,
    Quit,
}

/// Parse one input line. Numbers are 1-based on input.
pub fn parse_command(line: &str) -> Result<Command, ArtbrowseError> {
    let tokens = tokenize(line)?;
    let Some((name, args)) = tokens.split_first() else {
        return Err(command_error("empty command"));
    };

    match (name.to_ascii_lowercase().as_str(), args) {
        ("filters", []) => Ok(Command::Filters),
        ("search" | "s", args) => Ok(Command::Search(parse_filters(args))),
        ("next" | "n", []) => Ok(Command::Next),
        ("prev" | "previous" | "p", []) => Ok(Command::Prev),
        ("open" | "o", [index]) => Ok(Command::Open(parse_index(index)?)),
        ("link" | "l", [index]) => Ok(Command::Link(parse_index(index)?)),
        ("back" | "b", []) => Ok(Command::Back),
        ("help" | "?", []) => Ok(Command::Help),
        ("quit" | "exit" | "q", []) => Ok(Command::Quit),
        (other, _) => Err(command_error(&format!(
            "unknown command or wrong arguments: {other} (try `help`)"
        ))),
    }
}

fn parse_filters(args: &[String]) -> Filters {
    let mut filters = Filters::default();
    let mut keywords = Vec::new();

    for arg in args {
        match arg.split_once('=') {
            Some(("classification", value)) => filters.classification = Some(value.to_string()),
            Some(("century", value)) => filters.century = Some(value.to_string()),
            Some(("keyword", value)) => keywords.push(value.to_string()),
            _ => keywords.push(arg.clone()),
        }
    }

    if !keywords.is_empty() {
        filters.keyword = Some(keywords.join(" "));
    }
    filters
}

fn parse_index(text: &str) -> Result<usize, ArtbrowseError> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(command_error(&format!(
            "expected a number from 1, got {text:?}"
        ))),
    }
}

// Whitespace-separated words; double quotes group words, including after `key=`.
fn tokenize(line: &str) -> Result<Vec<String>, ArtbrowseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;

    for c in line.trim().chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }

    if in_quotes {
        return Err(command_error("unterminated quote"));
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

fn command_error(message: &str) -> ArtbrowseError {
    ArtbrowseError::Command {
        message: message.to_string(),
    }
}
