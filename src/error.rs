//! Error types for type generation

use thiserror::Error;

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, TypegenError>;

/// Type generation errors
#[derive(Error, Debug)]
pub enum TypegenError {
    #[error("Computed field `{field}` on {type_name} collides with the type discriminant field")]
    DiscriminantCollision { type_name: String, field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
