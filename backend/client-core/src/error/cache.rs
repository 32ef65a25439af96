use crate::error::catalog_client::CatalogClientError;

use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache Write Error: {path}: {source} {location}")]
    Write {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache Key Error: {key:?} is not a valid storage key {location}")]
    InvalidKey {
        location: ErrorLocation,
        key: String,
    },

    #[error("Reference List Load Error: {list}: {source} {location}")]
    Load {
        location: ErrorLocation,
        list: String,
        #[source]
        source: CatalogClientError,
    },
}
