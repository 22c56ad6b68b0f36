//! Unified error types for the template helpers.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while loading configuration or running helpers.
#[derive(Error, Debug)]
pub enum HelperError {
    // --- Configuration ---

    /// The helpers configuration file was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration could not be serialized to JSON.
    #[error("failed to serialize config for {path}")]
    ConfigSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A helper group name is not one of: `code`, `fs`.
    #[error("unknown helper group: {0} (supported: code, fs)")]
    UnknownGroup(String),

    // --- Helpers ---

    /// A file passed to `embed` could not be read as UTF-8 text.
    #[error("failed to read {path}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template, missing variable, helper error).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, HelperError>`.
pub type Result<T> = std::result::Result<T, HelperError>;
