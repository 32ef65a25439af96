pub mod browser;
pub mod busy;
pub mod catalog_client;
pub mod config;
pub mod error;
pub mod reference_cache;
pub mod render;

#[cfg(test)]
mod tests;

pub const CATALOG_HOSTNAME: &str = "api.harvardartmuseums.org";
pub const CATALOG_BASE_URL: &str = const_format::concatcp!("https://", CATALOG_HOSTNAME);
pub const API_KEY_ENV_VAR: &str = "ARTBROWSE_API_KEY";
