//! Error types for wpenv.

use crate::config::Field;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required configuration {field}: environment variable {} is not set, empty, or not valid UTF-8", .field.env_var())]
    MissingRequired { field: Field },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
