//! Custom error types for translator operations

use thiserror::Error;

/// Translator-related errors
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Endpoint could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Header name or value rejected while assembling a request
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// Header name as supplied
        name: String,
        /// Why it was rejected
        message: String,
    },

    /// HTTP client could not be built from the connection settings
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Request could not be sent or no response arrived
    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// Response body is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Root element of the envelope has the wrong name
    #[error("Expected element <{expected}> but found <{found}>")]
    UnexpectedElement {
        /// Element name the envelope must use
        expected: String,
        /// Element name actually found
        found: String,
    },

    /// Body holds no root element at all
    #[error("Response contains no XML element")]
    EmptyEnvelope,

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    /// A spawned request task panicked or was cancelled
    #[error("Task failed: {message}")]
    TaskFailed {
        /// Why the task produced no result
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for translator operations
pub type Result<T> = std::result::Result<T, TranslatorError>;
