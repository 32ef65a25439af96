use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of a reference list (a century or a classification).
///
/// Fields other than the ones read by the app are kept in `extra`, so an
/// entry serializes back to the record the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objectcount: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ReferenceEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            objectcount: None,
            extra: Map::new(),
        }
    }
}

/// Envelope of `GET /century` and `GET /classification`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReferenceResponse {
    #[serde(default)]
    pub records: Vec<ReferenceEntry>,
}
