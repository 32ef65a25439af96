use crate::render::{DetailView, ListView};

use models::ReferenceEntry;

/// What the results area currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum View {
    #[default]
    Idle,
    List(ListView),
    /// A single record, remembering the list it was opened from.
    Detail {
        list: Option<ListView>,
        detail: DetailView,
    },
}

impl View {
    /// The list whose pagination controls are live, if any.
    pub fn list(&self) -> Option<&ListView> {
        match self {
            View::Idle => None,
            View::List(list) => Some(list),
            View::Detail { list, .. } => list.as_ref(),
        }
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match self {
            View::Detail { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

/// Result of one user-triggered operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The view was replaced.
    Rendered,
    /// A drill-down query matched nothing; the view is unchanged.
    NothingFound,
    /// A newer operation started before this one finished; its result was dropped.
    Superseded,
    /// The fetch failed and was logged; the view is unchanged.
    Failed,
    /// The operation does not apply to the current view.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Next,
    Previous,
}

/// Free-text filters read at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub classification: Option<String>,
    pub century: Option<String>,
    pub keyword: Option<String>,
}

/// A populated selection control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    pub options: Vec<String>,
    pub count_label: String,
}

impl SelectControl {
    pub fn from_entries(entries: &[ReferenceEntry]) -> Self {
        Self {
            options: entries.iter().map(|entry| entry.name.clone()).collect(),
            count_label: format!("({})", entries.len()),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.options.iter().any(|option| option == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub classifications: SelectControl,
    pub centuries: SelectControl,
}
