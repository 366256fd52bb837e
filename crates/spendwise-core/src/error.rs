//! Error types for Spendwise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{entity} '{name}' already exists")]
    Duplicate { entity: &'static str, name: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// True for errors caused by bad user input rather than the store.
    ///
    /// Duplicates count as validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
