use serde::{Deserialize, Serialize};

/// One museum object as returned by `GET /object`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dated: Option<String>,
    #[serde(default)]
    pub culture: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub people: Option<Vec<Person>>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub creditline: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Image>>,
    #[serde(default)]
    pub primaryimageurl: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub displayname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub baseimageurl: Option<String>,
}

impl Record {
    /// Title for display, falling back to the object id.
    pub fn display_title(&self) -> String {
        match (&self.title, self.id) {
            (Some(title), _) if !title.is_empty() => title.clone(),
            (_, Some(id)) => format!("Untitled #{id}"),
            _ => String::from("Untitled"),
        }
    }
}
