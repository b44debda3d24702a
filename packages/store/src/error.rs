//! Errors raised by the storage layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store refused the write (quota exceeded, storage disabled).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to encode `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown setting `{0}`")]
    UnknownSetting(String),

    #[error("invalid value `{value}` for setting `{key}`")]
    InvalidSetting { key: String, value: String },
}
