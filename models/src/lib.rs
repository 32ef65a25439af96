//! Catalog data model.
//!
//! Plain deserialisable structs for the museum catalog API responses.
//! Records are read-only once fetched; nothing in the workspace mutates
//! them. Every consumed field is optional because the catalog omits or
//! nulls whatever an object does not have.

pub mod page;
pub mod record;
pub mod reference;

pub use page::{Page, PageInfo};
pub use record::{Image, Person, Record};
pub use reference::ReferenceEntry;

#[cfg(test)]
mod tests;
