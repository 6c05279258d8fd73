//! Token-authenticated client for the translator API

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, info, warn};
use url::Url;

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslatorError};
use crate::core::models::{DetectResponse, SessionToken, TranslateResponse};

/// Header carrying the subscription key on the token request
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Translator client holding a session token and a pooled HTTP client.
///
/// The HTTP client is built once in the constructor and shared by clones, so
/// concurrent calls from many tasks reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct TranslatorClient {
    http: reqwest::Client,
    config: Arc<TranslatorConfig>,
    token: Option<Arc<SessionToken>>,
}

impl TranslatorClient {
    /// Create a client against the public endpoints, exchanging `api_key` for a session token
    pub async fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, TranslatorConfig::default()).await
    }

    /// Create a client with explicit endpoints and pool settings
    pub async fn with_config(api_key: &str, config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let http = build_http_client(&config)?;

        let mut client = Self {
            http,
            config: Arc::new(config),
            token: None,
        };

        let body = client.get_token(api_key).await?;
        client.token = SessionToken::from_body(body).map(Arc::new);

        match &client.token {
            Some(token) => info!("Acquired session token ({} bytes)", token.len()),
            None => warn!("Token endpoint returned an empty body, requests will carry no Authorization header"),
        }

        Ok(client)
    }

    /// Session token obtained at construction, if the endpoint returned one
    pub fn session_token(&self) -> Option<&SessionToken> {
        self.token.as_deref()
    }

    /// Get configuration
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Detect the language of `text`, returning its language code
    pub async fn detect(&self, text: &str) -> Result<String> {
        let url = detect_url(&self.config, text)?;
        let body = self.request(Method::GET, url, &[]).await?;
        let response = DetectResponse::from_xml(&body)?;
        Ok(response.language)
    }

    /// Translate `text` into `to`.
    ///
    /// When `from` is `None` or empty the API detects the source language itself.
    pub async fn translate(&self, text: &str, to: &str, from: Option<&str>) -> Result<String> {
        let url = translate_url(&self.config, text, to, from)?;
        let body = self.request(Method::GET, url, &[]).await?;
        let response = TranslateResponse::from_xml(&body)?;
        Ok(response.translation)
    }

    async fn get_token(&self, api_key: &str) -> Result<Vec<u8>> {
        let url = Url::parse(&self.config.token_url)?;
        self.request(Method::POST, url, &[(SUBSCRIPTION_KEY_HEADER, api_key)])
            .await
    }

    /// Send one request and return the whole body, whatever the status code
    async fn request(
        &self,
        method: Method,
        url: Url,
        override_headers: &[(&str, &str)],
    ) -> Result<Vec<u8>> {
        let headers = build_headers(override_headers, self.session_token())?;

        debug!("Sending {} request to {}", method, url);

        let response = self
            .http
            .request(method.clone(), url)
            .headers(headers)
            .send()
            .await
            .map_err(TranslatorError::Request)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} {} returned status {}", method, response.url(), status);
        }

        let body = response.bytes().await.map_err(TranslatorError::ReadBody)?;
        debug!("Received {} bytes with status {}", body.len(), status);

        Ok(body.to_vec())
    }
}

/// Pooled HTTP client shared by every request of one translator client
fn build_http_client(config: &TranslatorConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .pool_max_idle_per_host(config.max_idle_connections)
        .pool_idle_timeout(Some(config.idle_timeout()))
        .gzip(true)
        .no_proxy()
        .build()
        .map_err(TranslatorError::ClientBuild)
}

/// Assemble request headers: defaults, then overrides, then the bearer token
fn build_headers(
    override_headers: &[(&str, &str)],
    token: Option<&SessionToken>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(3 + override_headers.len());
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/jwt"));

    for (name, value) in override_headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| TranslatorError::InvalidHeader {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        let mut header_value =
            HeaderValue::from_str(value).map_err(|e| TranslatorError::InvalidHeader {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        if header_name.as_str() == SUBSCRIPTION_KEY_HEADER.to_ascii_lowercase() {
            header_value.set_sensitive(true);
        }
        headers.insert(header_name, header_value);
    }

    if let Some(token) = token {
        let mut raw = b"Bearer ".to_vec();
        raw.extend_from_slice(token.as_bytes());
        let mut value =
            HeaderValue::from_bytes(&raw).map_err(|e| TranslatorError::InvalidHeader {
                name: AUTHORIZATION.to_string(),
                message: e.to_string(),
            })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(headers)
}

fn detect_url(config: &TranslatorConfig, text: &str) -> Result<Url> {
    let mut url = config.detect_url()?;
    url.query_pairs_mut().append_pair("text", text);
    Ok(url)
}

fn translate_url(
    config: &TranslatorConfig,
    text: &str,
    to: &str,
    from: Option<&str>,
) -> Result<Url> {
    let mut url = config.translate_url()?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("text", text).append_pair("to", to);
        if let Some(from) = from.filter(|f| !f.is_empty()) {
            query.append_pair("from", from);
        }
    }
    Ok(url)
}
