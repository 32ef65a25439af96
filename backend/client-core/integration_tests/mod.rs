mod browser;
mod catalog_client;
mod error;
mod helpers;
mod reference_cache;
