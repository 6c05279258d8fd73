//! Azure Translator - minimal async client for the Microsoft Translator text API
//!
//! A [`TranslatorClient`] exchanges a subscription key for a session token once,
//! then detects languages and translates text with one HTTP round trip per call.
//!
//! ```no_run
//! # async fn run() -> azure_translator::Result<()> {
//! let client = azure_translator::TranslatorClient::new("subscription-key").await?;
//! let lang = client.detect("je suis un chien").await?;
//! let text = client.translate("ciao amico", "en", None).await?;
//! println!("{} / {}", lang, text);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;

// Re-export key types for convenience
pub use core::{
    client::TranslatorClient,
    config::TranslatorConfig,
    errors::{Result, TranslatorError},
    models::{DetectResponse, SessionToken, TranslateResponse},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
