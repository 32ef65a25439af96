use crate::terminal::{render_filters, render_view};

use client_core::browser::{FilterOptions, SelectControl, View};
use client_core::render::{render_detail, render_list};

use models::{Page, PageInfo, Person, Record, ReferenceEntry};

fn draw(view: &View) -> String {
    let mut out = Vec::new();
    render_view(&mut out, view).unwrap();
    String::from_utf8(out).unwrap()
}

/// **VALUE**: The list shows numbered previews and the state of both pagination controls.
#[test]
fn given_list_view_when_drawn_then_numbered_with_pagination_state() {
    let page = Page {
        records: vec![
            Record {
                title: Some("Vase".to_string()),
                primaryimageurl: Some("a.jpg".to_string()),
                ..Default::default()
            },
            Record {
                title: Some("Bowl".to_string()),
                ..Default::default()
            },
        ],
        info: PageInfo {
            next: Some("url2".to_string()),
            totalrecords: Some(40),
            page: Some(1),
            pages: Some(20),
            ..Default::default()
        },
    };

    let text = draw(&View::List(render_list(&page)));

    assert!(text.contains("40 result(s), page 1 of 20"));
    assert!(text.contains("  1. Vase"));
    assert!(text.contains("image: a.jpg"));
    assert!(text.contains("  2. Bowl"));
    assert!(text.contains("[prev: off] [next: on]"));
}

/// **VALUE**: Detail links are numbered so `link N` can address them.
///
/// **BUG THIS CATCHES**: Would catch numbering that counts non-link facts, making
/// `link N` follow a different fact than the one displayed.
#[test]
fn given_detail_view_when_drawn_then_links_numbered_in_order() {
    let record = Record {
        title: Some("Wave".to_string()),
        dated: Some("1831".to_string()),
        description: Some("Print".to_string()),
        culture: Some("Japanese".to_string()),
        people: Some(vec![Person {
            displayname: Some("Hokusai".to_string()),
        }]),
        contact: Some("am@example.org".to_string()),
        ..Default::default()
    };

    let text = draw(&View::Detail {
        list: None,
        detail: render_detail(&record),
    });

    assert!(text.starts_with("Wave\n1831\n"));
    assert!(text.contains("Description: Print\n"));
    assert!(text.contains("Culture: Japanese  [link 1]"));
    assert!(text.contains("Person: Hokusai  [link 2]"));
    assert!(text.contains("Contact: mailto:am@example.org"));
}

/// **VALUE**: Filter controls show their count labels; an unavailable list says so.
#[test]
fn given_filter_options_when_drawn_then_counts_and_options_listed() {
    let options = FilterOptions {
        classifications: SelectControl::from_entries(&[
            ReferenceEntry::new("Prints"),
            ReferenceEntry::new("Vessels"),
        ]),
        centuries: SelectControl::default(),
    };
    let mut out = Vec::new();

    render_filters(&mut out, &options).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("Classifications (2)"));
    assert!(text.contains("Prints, Vessels"));
    assert!(text.contains("(unavailable)"));
}

/// **VALUE**: The idle view points the user at `search`.
#[test]
fn given_idle_view_when_drawn_then_hint_shown() {
    assert!(draw(&View::Idle).contains("search"));
}
