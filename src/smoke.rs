// src/smoke.rs
//! End-to-end check of the profile flow: register, then open the dashboard

use anyhow::Result;
use serde::Serialize;
use tracing::{error, info};

use crate::core::{Identity, ServiceClient};
use crate::types::{ApiResponse, DashboardData, RegisterProfileRequest, RegistrationData};

pub const TEST_USER_ID: &str = "test-user-simple";
pub const TEST_USER_EMAIL: &str = "simple@test.com";

#[derive(Debug, Serialize)]
pub struct RegistrationFlowResult {
    pub registration: ApiResponse<RegistrationData>,
    pub dashboard: ApiResponse<DashboardData>,
}

pub fn test_identity() -> Identity {
    Identity::new(TEST_USER_ID, TEST_USER_EMAIL)
}

pub fn test_profile() -> RegisterProfileRequest {
    RegisterProfileRequest {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        phone: "+1234567890".to_string(),
        department: "Computer Science".to_string(),
        current_year: 3,
        current_cgpa: 8.5,
        backlogs: 0,
        ..Default::default()
    }
}

/// Register the test profile for `identity`, then load its dashboard.
/// Either step answering `success: false` fails the flow.
pub async fn test_registration_flow(
    client: &ServiceClient,
    identity: &Identity,
) -> Result<RegistrationFlowResult> {
    info!("Testing registration flow...");

    let result = run_flow(client, identity).await;
    match &result {
        Ok(_) => info!("Registration flow test successful"),
        Err(e) => error!("Registration flow test failed: {:#}", e),
    }
    result
}

async fn run_flow(client: &ServiceClient, identity: &Identity) -> Result<RegistrationFlowResult> {
    let registration = client.register_profile(identity, &test_profile()).await?;
    info!("Registration result: {:?}", registration);

    if !registration.success {
        anyhow::bail!(
            "Registration failed: {}",
            registration.message_or("no message")
        );
    }

    let dashboard = client.dashboard(identity).await?;
    info!("Dashboard result: {:?}", dashboard);

    if !dashboard.success {
        anyhow::bail!("Dashboard failed: {}", dashboard.message_or("no message"));
    }

    Ok(RegistrationFlowResult {
        registration,
        dashboard,
    })
}
