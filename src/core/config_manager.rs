// src/core/config_manager.rs
//! Client configuration: optional config.yaml, then environment, then CLI flags

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::auth_client::AuthClientConfig;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigManager {
    pub environment: String,
    pub service: ServiceConfig,
    pub auth: AuthClientConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Per-request timeout; `None` lets a request run until the server answers
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EnvironmentSection {
    #[serde(default)]
    service: ServiceConfig,
    #[serde(default)]
    appwrite: AuthClientConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

impl ConfigManager {
    /// Load configuration for the current environment.
    ///
    /// An explicit `path` must exist. Without one, `config.yaml` in the
    /// working directory is used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading client configuration for environment: {}", environment);

        let mut config = match path {
            Some(path) => Self::load_from_file(path, &environment)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_from_file(&default_path, &environment)?
                } else {
                    info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::defaults(&environment)
                }
            }
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn defaults(environment: &str) -> Self {
        Self {
            environment: environment.to_string(),
            service: ServiceConfig::default(),
            auth: AuthClientConfig::default(),
        }
    }

    fn get_environment() -> String {
        std::env::var("PLACEMENT_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml_str(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse a config file body and pick the section for `environment`
    pub fn from_yaml_str(content: &str, environment: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        let section = match environment {
            "production" => file.production,
            _ => file.local,
        };

        check_timeout(section.service.timeout_seconds)?;

        Ok(Self {
            environment: environment.to_string(),
            service: section.service,
            auth: section.appwrite,
        })
    }

    /// Apply `PLACEMENT_*` / `APPWRITE_*` overrides from `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PLACEMENT_API_URL") {
            self.service.api_url = url;
        }
        if let Some(secs) = lookup("PLACEMENT_TIMEOUT_SECS") {
            let secs = secs
                .parse::<u64>()
                .context("PLACEMENT_TIMEOUT_SECS must be a whole number of seconds")?;
            self.service.timeout_seconds = Some(secs);
            check_timeout(self.service.timeout_seconds)?;
        }
        if let Some(endpoint) = lookup("APPWRITE_ENDPOINT") {
            self.auth.endpoint = endpoint;
        }
        if let Some(project_id) = lookup("APPWRITE_PROJECT_ID") {
            self.auth.project_id = project_id;
        }
        if let Some(origin) = lookup("APPWRITE_ORIGIN") {
            self.auth.origin = origin;
        }
        Ok(())
    }

    pub fn with_api_url(mut self, url: String) -> Self {
        self.service.api_url = url;
        self
    }
}

/// Timeouts are optional but never zero
pub fn check_timeout(timeout_seconds: Option<u64>) -> Result<()> {
    if timeout_seconds == Some(0) {
        anyhow::bail!("Timeout must be at least one second; omit it to wait indefinitely");
    }
    Ok(())
}
