use client_core::error::CoreError;
use client_core::error::cache::CacheError;
use client_core::error::catalog_client::CatalogClientError;
use client_core::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Errors that end the artbrowse process.
///
/// Once the session loop is running, catalog failures are logged and
/// reported inline instead; only startup problems and a broken terminal
/// reach `main`.
#[derive(Debug, Error)]
pub enum ArtbrowseError {
    /// Error from this App
    #[error("Artbrowse Error: {message} {location}")]
    Artbrowse {
        message: String,
        location: ErrorLocation,
    },

    /// Error from client-core (config, cache, catalog client)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// A command line typed into the session could not be parsed
    #[error("Command Error: {message}")]
    Command { message: String },

    /// Reading commands or writing output failed
    #[error("Terminal Error: {message} {location}")]
    Terminal {
        message: String,
        location: ErrorLocation,
    },
}

impl From<CoreError> for ArtbrowseError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        ArtbrowseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ConfigError> for ArtbrowseError {
    #[track_caller]
    fn from(error: ConfigError) -> Self {
        ArtbrowseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CacheError> for ArtbrowseError {
    #[track_caller]
    fn from(error: CacheError) -> Self {
        ArtbrowseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CatalogClientError> for ArtbrowseError {
    #[track_caller]
    fn from(error: CatalogClientError) -> Self {
        ArtbrowseError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ArtbrowseError {
    #[track_caller]
    fn from(error: std::io::Error) -> Self {
        ArtbrowseError::Terminal {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
