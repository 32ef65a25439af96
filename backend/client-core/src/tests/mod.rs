mod busy;
mod config;
mod store;
