use thiserror::Error;

use crate::api::ApiError;
use crate::validation::ValidationError;

/// Errors surfaced by every library operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to parse response from {endpoint}: {source}")]
    Json {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {key} parameter: {source}")]
    Param {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} cannot be changed on this entity")]
    ReadOnly { field: &'static str },

    #[error("Request processor has shut down")]
    ProcessorShutDown,

    #[error("No application key configured")]
    MissingCredentials,
}

pub type Result<T> = std::result::Result<T, Error>;
