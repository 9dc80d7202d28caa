//! Error types for catalogue loading and seeding start-up.
//!
//! Per-request failures live with the port in
//! [`crate::domain::ports::SeedApiError`]; the errors here are the ones that
//! stop a run before any request is sent.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating a fixture catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    /// The catalogue file could not be read.
    #[error("failed to read catalogue file at '{path}': {message}")]
    IoError {
        /// Path to the catalogue file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The catalogue JSON is malformed or missing required fields.
    #[error("invalid catalogue JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The catalogue defines no users.
    #[error("catalogue contains no users")]
    EmptyUsers,

    /// The catalogue defines no picture URLs to assign.
    #[error("catalogue contains no picture URLs")]
    EmptyPicturePool,

    /// A required text field is blank.
    #[error("{entity} at index {index} has a blank {field}")]
    BlankField {
        /// Kind of record holding the field.
        entity: &'static str,
        /// Index of the record within its list.
        index: usize,
        /// Name of the blank field.
        field: &'static str,
    },

    /// Two users share an email, which the service rejects as a duplicate.
    #[error("duplicate user email '{email}'")]
    DuplicateEmail {
        /// The repeated email address.
        email: String,
    },
}

/// Errors that stop a seeding run before it starts.
#[derive(Debug, Error)]
pub enum SeedRunError {
    /// The configured base URL is not a usable HTTP URL.
    #[error("invalid base URL '{value}': {message}")]
    InvalidBaseUrl {
        /// Raw configured value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The fixture catalogue could not be loaded.
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),
}
