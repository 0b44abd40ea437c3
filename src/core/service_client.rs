// src/core/service_client.rs
//! HTTP client for the placement API

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, trace};

use crate::core::config_manager::check_timeout;
use crate::types::{
    ApiResponse, DashboardData, ProfileExistence, RegisterProfileRequest, RegistrationData,
    UploadData,
};
use crate::upload_validator::{ResumeFile, MAX_RESUME_SIZE};

pub const USER_ID_HEADER: &str = "X-Appwrite-User-Id";
pub const USER_EMAIL_HEADER: &str = "X-Appwrite-User-Email";

const UPLOAD_RESUME_ENDPOINT: &str = "/api/v1/upload/resume";
const REGISTER_ENDPOINT: &str = "/api/v1/profile-simple/register";
const DASHBOARD_ENDPOINT: &str = "/api/v1/profile-simple/dashboard";
const EXISTS_ENDPOINT: &str = "/api/v1/profile-simple/exists";
const HEALTH_ENDPOINT: &str = "/api/v1/profile-simple/health";

/// The signed-in user as the placement API sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

impl Identity {
    pub fn new(user_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Without `timeout_seconds` a request waits as long as the server takes
    pub fn new(base_url: &str, timeout_seconds: Option<u64>) -> Result<Self> {
        check_timeout(timeout_seconds)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Upload a résumé; the server scores it and answers with the ATS result.
    /// Non-2xx statuses and `success: false` bodies are both errors.
    pub async fn upload_resume(&self, file: &ResumeFile, user_id: &str) -> Result<UploadData> {
        let url = self.url(UPLOAD_RESUME_ENDPOINT);

        let content = tokio::fs::read(&file.path)
            .await
            .with_context(|| format!("Failed to read file: {}", file.path.display()))?;

        // The file may have grown since it was validated
        if content.len() as u64 > MAX_RESUME_SIZE {
            anyhow::bail!(
                "File size exceeds 5MB limit: {} is {} bytes",
                file.name,
                content.len()
            );
        }

        let form = Form::new().part(
            "file",
            Part::bytes(content)
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .context("Failed to create multipart")?,
        );

        info!("Sending upload request to {}", url);
        debug!("Headers: {}: {}", USER_ID_HEADER, user_id);

        let response = self
            .client
            .post(&url)
            .header(USER_ID_HEADER, user_id)
            .multipart(form)
            .send()
            .await
            .context("HTTP request failed")?;

        let status = response.status();
        info!("Upload response status: {}", status);
        trace!("Upload response headers: {:?}", response.headers());

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Upload failed with response: {}", error_text);
            anyhow::bail!("Upload failed with status: {} - {}", status.as_u16(), error_text);
        }

        let result: ApiResponse<UploadData> = response
            .json()
            .await
            .context("Failed to parse upload response")?;

        if !result.success {
            anyhow::bail!("{}", result.message_or("Upload failed"));
        }

        result
            .data
            .ok_or_else(|| anyhow::anyhow!("Upload succeeded but the response carried no data"))
    }

    /// Delete an uploaded résumé. Stored names start with `<user_id>_`, so
    /// anything else is refused before a request is made.
    pub async fn delete_resume(&self, file_name: &str, user_id: &str) -> Result<()> {
        if !file_name.starts_with(&format!("{}_", user_id)) {
            anyhow::bail!("Unauthorized to delete this file: {}", file_name);
        }

        let url = self.resume_url(file_name)?;
        info!("Deleting resume: {}", url);

        let response = self
            .client
            .delete(url.clone())
            .header(USER_ID_HEADER, user_id)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", url))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            anyhow::bail!("Resume not found: {}", file_name);
        }

        let text = response
            .text()
            .await
            .context("Failed to read delete response")?;
        let result: ApiResponse<serde_json::Value> = serde_json::from_str(&text)
            .with_context(|| format!("HTTP {} with unexpected body: {}", status, text))?;

        if !status.is_success() || !result.success {
            anyhow::bail!("Delete failed: {}", result.message_or("Unknown error"));
        }

        Ok(())
    }

    /// Register or update the caller's profile. Rejections come back as
    /// `success: false` envelopes, so the body is returned whatever the status.
    pub async fn register_profile(
        &self,
        identity: &Identity,
        request: &RegisterProfileRequest,
    ) -> Result<ApiResponse<RegistrationData>> {
        let url = self.url(REGISTER_ENDPOINT);
        info!("Registering profile for user: {}", identity.user_id);

        let builder = self
            .with_identity(self.client.post(&url), identity)
            .json(request);

        self.send_for_envelope(builder, &url).await
    }

    /// Dashboard for the caller; a missing profile is a 404 `success: false` envelope
    pub async fn dashboard(&self, identity: &Identity) -> Result<ApiResponse<DashboardData>> {
        let url = self.url(DASHBOARD_ENDPOINT);
        info!("Loading dashboard for user: {}", identity.user_id);

        let builder = self.with_identity(self.client.get(&url), identity);
        self.send_for_envelope(builder, &url).await
    }

    pub async fn profile_exists(&self, user_id: &str) -> Result<ProfileExistence> {
        let url = self.url(EXISTS_ENDPOINT);
        let builder = self.client.get(&url).header(USER_ID_HEADER, user_id);
        self.send_for_envelope(builder, &url).await
    }

    pub async fn health(&self) -> Result<ApiResponse<serde_json::Value>> {
        let url = self.url(HEALTH_ENDPOINT);
        self.send_for_envelope(self.client.get(&url), &url).await
    }

    /// Upload endpoint with `file_name` appended as a single escaped path segment
    fn resume_url(&self, file_name: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.url(UPLOAD_RESUME_ENDPOINT))
            .with_context(|| format!("Invalid API URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API URL cannot carry a path: {}", self.base_url))?
            .push(file_name);
        Ok(url)
    }

    fn with_identity(&self, builder: RequestBuilder, identity: &Identity) -> RequestBuilder {
        builder
            .header(USER_ID_HEADER, &identity.user_id)
            .header(USER_EMAIL_HEADER, &identity.email)
    }

    /// Send and decode the JSON body regardless of status
    async fn send_for_envelope<R>(&self, builder: RequestBuilder, url: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = builder
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        trace!("Response status from {}: {}", url, status);

        let text = response
            .text()
            .await
            .context("Failed to read response body")?;

        serde_json::from_str(&text)
            .with_context(|| format!("HTTP {} with unexpected body: {}", status, text))
    }
}
