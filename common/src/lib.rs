//! Shared building blocks for the artbrowse workspace.
//!
//! Everything here is domain-agnostic: error location tracking, a redacted
//! wrapper for the catalog access key, and HTTP status categorisation.
//! The catalog data model lives in `models`; the client logic in
//! `client-core`.

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;
