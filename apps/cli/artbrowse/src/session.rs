//! The interactive command loop.
//!
//! Each line is one user event: it is parsed, run against the
//! [`Browser`], and the resulting view or notice is printed. Catalog
//! failures never end the session; they are logged and reported inline.

use crate::command::{Command, HELP_TEXT, parse_command};
use crate::error::ArtbrowseError;
use crate::terminal::{render_filters, render_view};

use client_core::browser::{Browser, Outcome, PageDirection};
use client_core::reference_cache::KeyValueStore;

use std::io::Write;

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

pub const PROMPT: &str = "artbrowse> ";
pub const NOTHING_FOUND_MESSAGE: &str = "Nothing Found.";
pub const FAILED_MESSAGE: &str = "Request failed; details are in the log.";
pub const LOADING_MESSAGE: &str = "Loading...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Read commands from `input` until `quit` or end of input.
pub async fn run_session<S, R, W>(
    browser: &Browser<S>,
    input: R,
    out: &mut W,
) -> Result<(), ArtbrowseError>
where
    S: KeyValueStore,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        if execute(browser, command, out).await? == Flow::Quit {
            break;
        }
    }

    info!("Session ended");
    Ok(())
}

/// Run one command and print its result.
pub async fn execute<S, W>(
    browser: &Browser<S>,
    command: Command,
    out: &mut W,
) -> Result<Flow, ArtbrowseError>
where
    S: KeyValueStore,
    W: Write,
{
    debug!("Executing {command:?}");

    let outcome = match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => {
            writeln!(out, "{HELP_TEXT}")?;
            return Ok(Flow::Continue);
        }
        Command::Filters => {
            render_filters(out, &browser.filter_options().await)?;
            return Ok(Flow::Continue);
        }
        Command::Search(filters) => browser.search(&filters).await,
        Command::Next => browser.paginate(PageDirection::Next).await,
        Command::Prev => browser.paginate(PageDirection::Previous).await,
        Command::Open(index) => browser.select_preview(index).await,
        Command::Link(index) => browser.follow_link(index).await,
        Command::Back => browser.back().await,
    };

    match outcome {
        Outcome::Rendered => render_view(out, &browser.view().await)?,
        Outcome::NothingFound => writeln!(out, "{NOTHING_FOUND_MESSAGE}")?,
        Outcome::Failed => writeln!(out, "{FAILED_MESSAGE}")?,
        Outcome::Ignored => writeln!(out, "Not available here.")?,
        Outcome::Superseded => {}
    }

    Ok(Flow::Continue)
}

/// Print [`LOADING_MESSAGE`] whenever the busy count leaves zero and erase
/// it when the count returns to zero.
///
/// Runs until the indicator behind `in_flight` is dropped or `out` fails.
pub async fn show_loading<W: Write>(mut in_flight: watch::Receiver<usize>, mut out: W) {
    let blank = " ".repeat(LOADING_MESSAGE.len());

    loop {
        if in_flight.wait_for(|count| *count > 0).await.is_err() {
            break;
        }
        if let Err(e) = write!(out, "{LOADING_MESSAGE}\r").and_then(|()| out.flush()) {
            warn!("Failed to show loading indicator: {e}");
            break;
        }

        if in_flight.wait_for(|count| *count == 0).await.is_err() {
            break;
        }
        if let Err(e) = write!(out, "{blank}\r").and_then(|()| out.flush()) {
            warn!("Failed to clear loading indicator: {e}");
            break;
        }
    }

    debug!("Loading indicator stopped");
}
