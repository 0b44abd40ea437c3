// src/core/auth_client.rs
//! Appwrite auth client: fixed endpoint and project plus the headers the
//! résumé page always sends.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::config_manager::check_timeout;

pub const DEFAULT_ENDPOINT: &str = "https://nyc.cloud.appwrite.io/v1";
pub const DEFAULT_PROJECT_ID: &str = "6894d20300386b659e32";
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

pub const PROJECT_HEADER: &str = "x-appwrite-project";
pub const RESPONSE_FORMAT_HEADER: &str = "x-appwrite-response-format";
pub const FALLBACK_COOKIES_HEADER: &str = "x-fallback-cookies";

const RESPONSE_FORMAT: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthClientConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            project_id: default_project_id(),
            origin: default_origin(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_project_id() -> String {
    DEFAULT_PROJECT_ID.to_string()
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

pub struct AuthClient {
    client: reqwest::Client,
    config: AuthClientConfig,
}

impl AuthClient {
    pub fn new(config: AuthClientConfig, timeout_seconds: Option<u64>) -> Result<Self> {
        info!("Auth client origin: {}", config.origin);
        check_timeout(timeout_seconds)?;

        let mut builder =
            reqwest::Client::builder().default_headers(Self::default_headers(&config)?);
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .context("Failed to create auth HTTP client")?;

        Ok(Self { client, config })
    }

    /// Headers attached to every auth-service request
    pub fn default_headers(config: &AuthClientConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let pairs = [
            (PROJECT_HEADER, config.project_id.as_str()),
            (RESPONSE_FORMAT_HEADER, RESPONSE_FORMAT),
            (FALLBACK_COOKIES_HEADER, "true"),
            ("origin", config.origin.as_str()),
        ];

        for (name, value) in pairs {
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}: {:?}", name, value))?;
            headers.insert(HeaderName::from_static(name), value);
        }

        Ok(headers)
    }

    pub fn config(&self) -> &AuthClientConfig {
        &self.config
    }

    pub fn account(&self) -> Account<'_> {
        Account { client: self }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.endpoint.trim_end_matches('/'), path)
    }
}

/// Account API scoped to an [`AuthClient`]
pub struct Account<'a> {
    client: &'a AuthClient,
}

impl Account<'_> {
    /// `GET /account` for the current session
    pub async fn get(&self) -> Result<serde_json::Value> {
        let url = self.client.url("/account");
        debug!("Calling auth service: {}", url);

        let response = self
            .client
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .context("Failed to parse account response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Auth service returned {}: {}", status, error_text)
        }
    }
}
