use crate::catalog_client::SearchAttribute;
use crate::render::non_empty;

use models::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactValue {
    Text(String),
    /// Follow-up search filtered by this attribute value.
    SearchLink {
        attribute: SearchAttribute,
        value: String,
    },
    Mailto(String),
}

/// One labelled attribute row of the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub label: &'static str,
    pub value: FactValue,
}

impl Fact {
    pub fn content(&self) -> &str {
        match &self.value {
            FactValue::Text(text) | FactValue::Mailto(text) => text,
            FactValue::SearchLink { value, .. } => value,
        }
    }

    pub fn search_link(&self) -> Option<(SearchAttribute, &str)> {
        match &self.value {
            FactValue::SearchLink { attribute, value } => Some((*attribute, value.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub dated: Option<String>,
    pub facts: Vec<Fact>,
    pub gallery: Vec<String>,
    pub record: Record,
}

impl DetailView {
    /// Search links in display order.
    pub fn links(&self) -> Vec<(SearchAttribute, &str)> {
        self.facts.iter().filter_map(Fact::search_link).collect()
    }

    pub fn link(&self, index: usize) -> Option<(SearchAttribute, &str)> {
        self.facts.iter().filter_map(Fact::search_link).nth(index)
    }
}

/// Full-attribute view of one record.
pub fn render_detail(record: &Record) -> DetailView {
    let mut facts = Vec::new();

    push_text(&mut facts, "Description", &record.description);
    push_link(
        &mut facts,
        "Culture",
        SearchAttribute::Culture,
        &record.culture,
    );
    push_text(&mut facts, "Style", &record.style);
    push_link(
        &mut facts,
        "Technique",
        SearchAttribute::Technique,
        &record.technique,
    );
    push_link(
        &mut facts,
        "Medium",
        SearchAttribute::Medium,
        &record.medium,
    );
    push_text(&mut facts, "Dimensions", &record.dimensions);

    for person in record.people.iter().flatten() {
        push_link(
            &mut facts,
            "Person",
            SearchAttribute::Person,
            &person.displayname,
        );
    }

    push_text(&mut facts, "Department", &record.department);
    push_text(&mut facts, "Division", &record.division);

    if let Some(contact) = non_empty(&record.contact) {
        facts.push(Fact {
            label: "Contact",
            value: FactValue::Mailto(contact.to_string()),
        });
    }

    push_text(&mut facts, "Credit", &record.creditline);

    DetailView {
        title: record.display_title(),
        dated: non_empty(&record.dated).map(str::to_string),
        facts,
        gallery: gallery(record),
        record: record.clone(),
    }
}

fn push_text(facts: &mut Vec<Fact>, label: &'static str, value: &Option<String>) {
    if let Some(value) = non_empty(value) {
        facts.push(Fact {
            label,
            value: FactValue::Text(value.to_string()),
        });
    }
}

fn push_link(
    facts: &mut Vec<Fact>,
    label: &'static str,
    attribute: SearchAttribute,
    value: &Option<String>,
) {
    if let Some(value) = non_empty(value) {
        facts.push(Fact {
            label,
            value: FactValue::SearchLink {
                attribute,
                value: value.to_string(),
            },
        });
    }
}

// All images, else the primary image, else nothing.
fn gallery(record: &Record) -> Vec<String> {
    let images: Vec<String> = record
        .images
        .iter()
        .flatten()
        .filter_map(|image| non_empty(&image.baseimageurl).map(str::to_string))
        .collect();

    if !images.is_empty() {
        return images;
    }

    non_empty(&record.primaryimageurl)
        .map(|url| vec![url.to_string()])
        .unwrap_or_default()
}
