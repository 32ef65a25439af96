//! View models for the two result views.
//!
//! Rendering is pure: a [`Page`](models::Page) becomes a [`ListView`], a
//! [`Record`](models::Record) becomes a [`DetailView`]. Whatever front end
//! draws them (the terminal app, a test) never touches the network.

pub mod detail;
pub mod list;

pub use detail::{DetailView, Fact, FactValue, render_detail};
pub use list::{ListView, PaginationControl, PreviewElement, render_list};

/// `Some` only for present, non-empty text.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
