use crate::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Key Serialization Error: the catalog API key is never serialized {location}")]
    KeySerialization { location: ErrorLocation },
}
