//! UI events and their text form.
//!
//! The page has three controls: the sort selector, the search field and the
//! per-project toggle buttons. Each maps to one [`BrowserEvent`]. The
//! interactive `browse` command reads the same events one per line:
//!
//! ```text
//! sort date-newest
//! search alpha
//! toggle 2
//! show
//! quit
//! ```

use crate::error::{RepofolioError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserEvent {
    /// Sort selector changed to this value
    SortChanged(String),
    /// Search field now holds this value
    SearchInput(String),
    /// Toggle control of the project at this 1-based position was activated
    ToggleActivated(usize),
}

/// One parsed line of the `browse` event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLine {
    Event(BrowserEvent),
    /// Redraw without changing state
    Show,
    Quit,
}

pub const EVENT_USAGE: &str =
    "commands: sort <order> | search [text] | toggle <n> | show | quit";

/// Parse one line of the event stream.
///
/// The search text is everything after the first space, kept verbatim, so
/// `search` alone clears the query.
pub fn parse_event_line(line: &str) -> Result<EventLine> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, rest) = match line.trim_start().split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (line.trim(), ""),
    };

    match command {
        "sort" => Ok(EventLine::Event(BrowserEvent::SortChanged(
            rest.trim().to_string(),
        ))),
        "search" => Ok(EventLine::Event(BrowserEvent::SearchInput(
            rest.to_string(),
        ))),
        "toggle" => rest
            .trim()
            .parse::<usize>()
            .map(|n| EventLine::Event(BrowserEvent::ToggleActivated(n)))
            .map_err(|_| RepofolioError::InvalidEvent(line.to_string())),
        "show" | "" => Ok(EventLine::Show),
        "quit" | "exit" => Ok(EventLine::Quit),
        _ => Err(RepofolioError::InvalidEvent(line.to_string())),
    }
}
