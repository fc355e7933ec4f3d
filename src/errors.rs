/*!
 * Error types for the sigloss application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the render engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Error when the engine refuses or fails a play request
    #[error("Play request failed: {0}")]
    PlayFailed(String),

    /// Error when the engine rejects a sign identifier as unknown
    #[error("Invalid sign identifier: {0}")]
    InvalidSign(String),

    /// Error when the engine is not reachable or not initialized
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    /// Error when a stop request fails
    #[error("Stop request failed: {0}")]
    StopFailed(String),
}

/// Errors that can occur while loading the sign catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing the catalog dataset
    #[error("Failed to parse catalog dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error when a dataset entry maps a word to an empty sign identifier
    #[error("Catalog entry for word '{word}' has an empty sign identifier")]
    EmptySign {
        /// The offending word key
        word: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from the render engine
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Error from catalog loading
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
