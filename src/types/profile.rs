// src/types/profile.rs
use serde::{Deserialize, Serialize};

// ===== Request Types =====

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub department: String,
    pub current_year: u32,
    pub current_cgpa: f64,
    pub backlogs: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

// ===== Response Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub current_year: Option<u32>,
    #[serde(default)]
    pub completion_percentage: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub user_profile: DashboardProfile,
    #[serde(default)]
    pub statistics: DashboardStatistics,
    #[serde(default)]
    pub recent_applications: Vec<serde_json::Value>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardProfile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub current_year: Option<u32>,
    // Sent as a string ("8.50" or "N/A")
    #[serde(default)]
    pub current_cgpa: Option<String>,
    #[serde(default)]
    pub completion_percentage: Option<u32>,
    #[serde(default)]
    pub ats_score: Option<f64>,
    #[serde(default)]
    pub ats_feedback: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    #[serde(default)]
    pub profile_views: u64,
    #[serde(default)]
    pub total_applications: u64,
    #[serde(default)]
    pub interviews_attended: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    #[serde(default)]
    pub icon: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// Body of `GET /api/v1/profile-simple/exists`; `exists` sits beside `data`
/// rather than inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileExistence {
    pub success: bool,
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<ExistingProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingProfile {
    pub id: i64,
    #[serde(default)]
    pub completion_percentage: Option<u32>,
}
