// src/lib.rs
pub mod cli;
pub mod core;
pub mod ids;
pub mod smoke;
pub mod status;
pub mod types;
pub mod upload_validator;
pub mod uploader;
pub mod utils;

pub use crate::core::{AuthClient, AuthClientConfig, ConfigManager, Identity, ServiceClient};
pub use status::{ConsoleNotifier, MessageKind, Notifier, StatusBoard};
pub use types::{ApiResponse, UploadData};
pub use upload_validator::{ResumeFile, UploadValidationError, UploadValidator};
pub use uploader::ResumeUploader;
