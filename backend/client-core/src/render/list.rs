use crate::render::non_empty;

use models::{Page, Record};

/// One entry of the results list.
///
/// Keeps its own copy of the source record so selecting it can switch to
/// the detail view without another fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewElement {
    pub image: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub record: Record,
}

impl PreviewElement {
    fn from_record(record: &Record) -> Self {
        Self {
            image: non_empty(&record.primaryimageurl).map(str::to_string),
            title: record.display_title(),
            description: non_empty(&record.description).map(str::to_string),
            record: record.clone(),
        }
    }
}

/// A next/previous control bound to a server-supplied URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationControl {
    url: Option<String>,
}

impl PaginationControl {
    fn bound_to(link: &Option<String>) -> Self {
        Self {
            url: non_empty(link).map(str::to_string),
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListView {
    pub previews: Vec<PreviewElement>,
    pub next: PaginationControl,
    pub previous: PaginationControl,
    pub total_records: Option<u64>,
    pub page: Option<u64>,
    pub pages: Option<u64>,
}

impl ListView {
    pub fn preview(&self, index: usize) -> Option<&PreviewElement> {
        self.previews.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }
}

/// One preview per record, in page order, with the page's links bound.
pub fn render_list(page: &Page) -> ListView {
    ListView {
        previews: page
            .records
            .iter()
            .map(PreviewElement::from_record)
            .collect(),
        next: PaginationControl::bound_to(&page.info.next),
        previous: PaginationControl::bound_to(&page.info.prev),
        total_records: page.info.totalrecords,
        page: page.info.page,
        pages: page.info.pages,
    }
}
