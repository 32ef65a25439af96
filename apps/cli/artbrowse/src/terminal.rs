//! Plain-text drawing of the browser's view models.

use client_core::browser::{FilterOptions, SelectControl, View};
use client_core::render::{DetailView, FactValue, ListView};

use std::io::{self, Write};

pub fn render_view<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    match view {
        View::Idle => writeln!(out, "No results yet. Try `search`."),
        View::List(list) => render_list(out, list),
        View::Detail { detail, .. } => render_detail(out, detail),
    }
}

pub fn render_filters<W: Write>(out: &mut W, options: &FilterOptions) -> io::Result<()> {
    render_select(out, "Classifications", &options.classifications)?;
    render_select(out, "Centuries", &options.centuries)
}

fn render_select<W: Write>(out: &mut W, label: &str, control: &SelectControl) -> io::Result<()> {
    writeln!(out, "{label} {}", control.count_label)?;
    if control.options.is_empty() {
        return writeln!(out, "  (unavailable)");
    }
    writeln!(out, "  {}", control.options.join(", "))
}

pub fn render_list<W: Write>(out: &mut W, list: &ListView) -> io::Result<()> {
    match (list.total_records, list.page, list.pages) {
        (Some(total), Some(page), Some(pages)) => {
            writeln!(out, "{total} result(s), page {page} of {pages}")?
        }
        (Some(total), _, _) => writeln!(out, "{total} result(s)")?,
        _ => {}
    }

    if list.is_empty() {
        writeln!(out, "  (no results)")?;
    }

    for (number, preview) in (1..).zip(&list.previews) {
        writeln!(out, "{number:>3}. {}", preview.title)?;
        if let Some(description) = &preview.description {
            writeln!(out, "       {description}")?;
        }
        if let Some(image) = &preview.image {
            writeln!(out, "       image: {image}")?;
        }
    }

    writeln!(
        out,
        "[prev: {}] [next: {}]",
        on_off(list.previous.is_enabled()),
        on_off(list.next.is_enabled())
    )
}

pub fn render_detail<W: Write>(out: &mut W, detail: &DetailView) -> io::Result<()> {
    writeln!(out, "{}", detail.title)?;
    if let Some(dated) = &detail.dated {
        writeln!(out, "{dated}")?;
    }

    let mut link_number = 0;
    for fact in &detail.facts {
        match &fact.value {
            FactValue::Text(text) => writeln!(out, "  {}: {text}", fact.label)?,
            FactValue::SearchLink { value, .. } => {
                link_number += 1;
                writeln!(out, "  {}: {value}  [link {link_number}]", fact.label)?
            }
            FactValue::Mailto(address) => writeln!(out, "  {}: mailto:{address}", fact.label)?,
        }
    }

    for image in &detail.gallery {
        writeln!(out, "  image: {image}")?;
    }
    Ok(())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
