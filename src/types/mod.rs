// src/types/mod.rs
pub mod profile;
pub mod response;

pub use profile::{
    ActivityItem, DashboardData, DashboardProfile, DashboardStatistics, ProfileExistence,
    RegisterProfileRequest, RegistrationData,
};
pub use response::{ApiResponse, UploadData};
