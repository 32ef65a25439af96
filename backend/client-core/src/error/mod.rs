pub mod cache;
pub mod catalog_client;
pub mod config;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    CatalogClient(#[from] catalog_client::CatalogClientError),

    #[error(transparent)]
    Cache(#[from] cache::CacheError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
