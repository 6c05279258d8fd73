//! Core data models for the translator API

use std::fmt;

use crate::core::envelope::parse_string_envelope;
use crate::core::errors::Result;

/// Opaque bearer token returned by the token endpoint.
///
/// The bytes are kept exactly as received; they are never decoded as a JWT.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(Vec<u8>);

impl SessionToken {
    /// Wrap a token body, or `None` when the body is empty
    pub fn from_body(body: Vec<u8>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self(body))
        }
    }

    /// Raw token bytes as received
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Token length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a token built by `from_body`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Tokens end up in logs through `{:?}` on the client; never print them.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({} bytes)", self.0.len())
    }
}

/// Detect operation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectResponse {
    /// Detected language code, e.g. `en`
    pub language: String,
}

impl DetectResponse {
    /// Parse a detect response envelope
    pub fn from_xml(body: &[u8]) -> Result<Self> {
        Ok(Self {
            language: parse_string_envelope(body)?,
        })
    }
}

/// Translate operation result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateResponse {
    /// Translated text
    pub translation: String,
}

impl TranslateResponse {
    /// Parse a translate response envelope
    pub fn from_xml(body: &[u8]) -> Result<Self> {
        Ok(Self {
            translation: parse_string_envelope(body)?,
        })
    }
}
