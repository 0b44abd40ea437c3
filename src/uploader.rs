// src/uploader.rs
//! Validate, upload and report a résumé in one call

use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::core::ServiceClient;
use crate::status::{MessageKind, Notifier};
use crate::types::UploadData;
use crate::upload_validator::{ResumeFile, UploadValidator};

pub const UPLOADING_MESSAGE: &str = "Uploading resume and analyzing...";
pub const SUCCESS_MESSAGE: &str = "Resume uploaded and analyzed successfully!";

pub struct ResumeUploader {
    client: ServiceClient,
    notifier: Arc<dyn Notifier>,
}

impl ResumeUploader {
    pub fn new(client: ServiceClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Upload `file` for `user_id` and return the server's result data.
    ///
    /// Every failure is reported through the notifier and turned into `None`.
    /// Files that fail validation never reach the server.
    pub async fn handle_resume_upload(
        &self,
        file: &ResumeFile,
        user_id: &str,
    ) -> Option<UploadData> {
        info!("=== RESUME UPLOAD START ===");
        info!("Handling resume upload and analysis for user: {}", user_id);
        info!(
            name = %file.name,
            size = file.size,
            mime_type = %file.mime_type,
            "File details"
        );

        if let Err(validation_error) = UploadValidator::validate(file) {
            warn!(
                code = validation_error.error_type.code(),
                "Upload rejected: {}", validation_error.suggestion
            );
            self.notifier
                .show(&validation_error.message, MessageKind::Error);
            return None;
        }

        self.notifier.show(UPLOADING_MESSAGE, MessageKind::Info);

        match self.client.upload_resume(file, user_id).await {
            Ok(data) => {
                self.notifier.show(SUCCESS_MESSAGE, MessageKind::Success);
                info!("=== RESUME UPLOAD SUCCESS ===");
                info!("File URL: {:?}", data.file_url);
                info!("ATS Score: {:?}", data.ats_score);
                Some(data)
            }
            Err(e) => {
                error!("=== RESUME UPLOAD ERROR ===");
                error!("Resume upload and analysis error: {:#}", e);
                self.notifier
                    .show(&format!("Resume upload failed: {}", e), MessageKind::Error);
                None
            }
        }
    }

    /// Describe the file at `path` (optionally forcing its MIME type), then upload it
    pub async fn upload_path(
        &self,
        path: &Path,
        user_id: &str,
        mime_type: Option<&str>,
    ) -> Option<UploadData> {
        let file = match ResumeFile::from_path(path).await {
            Ok(file) => file,
            Err(e) => {
                warn!("No file provided for upload: {}", e);
                self.notifier.show(&e.message, MessageKind::Error);
                return None;
            }
        };

        let file = match mime_type {
            Some(mime) => file.with_mime_type(mime),
            None => file,
        };

        self.handle_resume_upload(&file, user_id).await
    }
}
