use crate::Record;

use serde::{Deserialize, Serialize};

/// One batch of object records plus the server's pagination links.
///
/// A page is never merged with another: rendering a new page replaces the
/// previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub info: PageInfo,
}

/// Pagination block of an object response.
///
/// `next` and `prev` are absolute URLs that already carry the access key
/// and every filter of the originating query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub totalrecords: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub pages: Option<u64>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
