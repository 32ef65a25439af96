mod error_location;
mod redacted_key;
