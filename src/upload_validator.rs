// src/upload_validator.rs
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::error;

use crate::utils;

/// Largest résumé accepted for upload: 5MB
pub const MAX_RESUME_SIZE: u64 = 5 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Descriptor of a résumé picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl ResumeFile {
    pub fn new(path: impl Into<PathBuf>, size: u64, mime_type: &str) -> Self {
        let path = path.into();
        Self {
            name: utils::file_name_of(&path),
            path,
            size,
            mime_type: mime_type.to_string(),
        }
    }

    /// Stat the file on disk and guess its MIME type from the extension
    pub async fn from_path(path: &Path) -> Result<Self, UploadValidationError> {
        let metadata = fs::metadata(path).await.map_err(|_| UploadValidationError {
            path: path.to_path_buf(),
            error_type: UploadErrorType::FileNotFound,
            message: format!("File not found: {}", path.display()),
            suggestion: "Check the path and try again".to_string(),
        })?;

        if !metadata.is_file() {
            return Err(UploadValidationError {
                path: path.to_path_buf(),
                error_type: UploadErrorType::FileNotFound,
                message: format!("Not a regular file: {}", path.display()),
                suggestion: "Select a PDF, DOC, or DOCX file".to_string(),
            });
        }

        let mime_type = mime_guess::from_path(path).first_or_octet_stream();

        Ok(Self::new(path, metadata.len(), mime_type.essence_str()))
    }

    pub fn with_mime_type(mut self, mime_type: &str) -> Self {
        self.mime_type = mime_type.to_string();
        self
    }
}

#[derive(Debug, Clone)]
pub struct UploadValidationError {
    pub path: PathBuf,
    pub error_type: UploadErrorType,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadErrorType {
    FileNotFound,
    EmptyFile,
    TooLarge,
    WrongType,
    InvalidName,
}

impl UploadErrorType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::FileNotFound => "RESUME_NOT_FOUND",
            Self::EmptyFile => "RESUME_EMPTY",
            Self::TooLarge => "RESUME_TOO_LARGE",
            Self::WrongType => "RESUME_WRONG_TYPE",
            Self::InvalidName => "RESUME_INVALID_NAME",
        }
    }
}

impl fmt::Display for UploadValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for UploadValidationError {}

pub struct UploadValidator;

impl UploadValidator {
    /// Client-side checks run before any request leaves the machine
    pub fn validate(file: &ResumeFile) -> Result<(), UploadValidationError> {
        if file.size == 0 {
            return Err(Self::reject(
                file,
                UploadErrorType::EmptyFile,
                "Resume file is empty".to_string(),
                "Please select a file to upload",
            ));
        }

        if file.size > MAX_RESUME_SIZE {
            error!("File too large: {}", file.size);
            return Err(Self::reject(
                file,
                UploadErrorType::TooLarge,
                "File size exceeds 5MB limit".to_string(),
                &format!(
                    "Your file is {}; compress it or export a smaller PDF",
                    utils::format_size_mb(file.size)
                ),
            ));
        }

        if !ALLOWED_MIME_TYPES.contains(&file.mime_type.as_str()) {
            error!("Invalid file type: {}", file.mime_type);
            return Err(Self::reject(
                file,
                UploadErrorType::WrongType,
                "Please upload a PDF, DOC, or DOCX file".to_string(),
                "Only PDF, DOC, and DOCX files are allowed",
            ));
        }

        let sanitized = utils::sanitize_filename(&file.name);
        if sanitized.trim().is_empty() {
            return Err(Self::reject(
                file,
                UploadErrorType::InvalidName,
                "Invalid filename".to_string(),
                "Rename the file using letters and digits",
            ));
        }

        if utils::validate_file_extension(&sanitized, &ALLOWED_EXTENSIONS).is_err() {
            return Err(Self::reject(
                file,
                UploadErrorType::WrongType,
                "Please upload a PDF, DOC, or DOCX file".to_string(),
                "The file name must end in .pdf, .doc, or .docx",
            ));
        }

        Ok(())
    }

    fn reject(
        file: &ResumeFile,
        error_type: UploadErrorType,
        message: String,
        suggestion: &str,
    ) -> UploadValidationError {
        UploadValidationError {
            path: file.path.clone(),
            error_type,
            message,
            suggestion: suggestion.to_string(),
        }
    }
}
