mod common;

use common::{MockServer, RecordedRequest};
use resume_client::core::auth_client::{AuthClient, AuthClientConfig};
use resume_client::smoke::{self, test_registration_flow};
use resume_client::{Identity, ServiceClient};

const REGISTER_OK: &str = r#"{
    "success": true,
    "message": "Profile registered successfully",
    "data": {
        "id": 11,
        "fullName": "Test User",
        "email": "simple@test.com",
        "department": "Computer Science",
        "currentYear": 3,
        "completionPercentage": 70
    }
}"#;

const DASHBOARD_OK: &str = r#"{
    "success": true,
    "data": {
        "userProfile": {
            "id": 11,
            "fullName": "Test User",
            "email": "simple@test.com",
            "phone": "+1234567890",
            "department": "Computer Science",
            "currentYear": 3,
            "currentCgpa": "8.5",
            "completionPercentage": 70,
            "atsScore": 0,
            "atsFeedback": "Resume not yet analyzed"
        },
        "statistics": {"profileViews": 42, "totalApplications": 0, "interviewsAttended": 0},
        "recentApplications": [],
        "recentActivity": []
    }
}"#;

fn route(
    register: &'static str,
    dashboard: (u16, &'static str),
) -> impl Fn(&RecordedRequest) -> (u16, String) {
    move |req| match (req.method.as_str(), req.path.as_str()) {
        ("POST", "/api/v1/profile-simple/register") => (200, register.to_string()),
        ("GET", "/api/v1/profile-simple/dashboard") => (dashboard.0, dashboard.1.to_string()),
        _ => (404, r#"{"success":false,"message":"no route"}"#.to_string()),
    }
}

#[tokio::test]
async fn registration_flow_succeeds() {
    let server = MockServer::start(route(REGISTER_OK, (200, DASHBOARD_OK))).await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let result = test_registration_flow(&client, &smoke::test_identity())
        .await
        .unwrap();

    assert_eq!(result.registration.data.unwrap().id, 11);
    let dashboard = result.dashboard.data.unwrap();
    assert_eq!(dashboard.user_profile.full_name, "Test User");
    assert_eq!(dashboard.statistics.profile_views, 42);
}

#[tokio::test]
async fn registration_sends_identity_headers_and_camel_case_body() {
    let server = MockServer::start(route(REGISTER_OK, (200, DASHBOARD_OK))).await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    test_registration_flow(&client, &smoke::test_identity())
        .await
        .unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 2);

    let register = requests
        .iter()
        .find(|r| r.method == "POST")
        .unwrap();
    assert_eq!(register.header("X-Appwrite-User-Id"), Some("test-user-simple"));
    assert_eq!(register.header("X-Appwrite-User-Email"), Some("simple@test.com"));
    assert!(register
        .header("content-type")
        .unwrap()
        .starts_with("application/json"));

    let body: serde_json::Value = serde_json::from_slice(&register.body).unwrap();
    assert_eq!(body["firstName"], "Test");
    assert_eq!(body["lastName"], "User");
    assert_eq!(body["department"], "Computer Science");
    assert_eq!(body["currentYear"], 3);
    assert_eq!(body["currentCgpa"], 8.5);
    assert_eq!(body["backlogs"], 0);

    let dashboard = requests.iter().find(|r| r.method == "GET").unwrap();
    assert_eq!(dashboard.header("X-Appwrite-User-Email"), Some("simple@test.com"));
}

#[tokio::test]
async fn failed_registration_stops_the_flow() {
    let server = MockServer::start(|req: &RecordedRequest| match req.path.as_str() {
        "/api/v1/profile-simple/register" => (
            400,
            r#"{"success":false,"message":"Registration failed: duplicate email"}"#.to_string(),
        ),
        _ => (200, DASHBOARD_OK.to_string()),
    })
    .await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let err = test_registration_flow(&client, &smoke::test_identity())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Registration failed: Registration failed: duplicate email"
    );
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn missing_dashboard_fails_the_flow() {
    let server = MockServer::start(route(
        REGISTER_OK,
        (
            404,
            r#"{"success":false,"message":"Profile not found. Please complete registration first."}"#,
        ),
    ))
    .await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let err = test_registration_flow(&client, &Identity::new("u9", "u9@test.com"))
        .await
        .unwrap_err();

    assert!(err.to_string().starts_with("Dashboard failed: Profile not found"));
}

#[tokio::test]
async fn non_json_body_is_an_error() {
    let server =
        MockServer::start(|_: &RecordedRequest| (502, "<html>bad gateway</html>".to_string()))
            .await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let err = client.health().await.unwrap_err();
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn delete_own_resume() {
    let server =
        MockServer::fixed(200, r#"{"success":true,"message":"Resume deleted successfully"}"#)
            .await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    client
        .delete_resume("user-42_resume_0f8e.pdf", "user-42")
        .await
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/v1/upload/resume/user-42_resume_0f8e.pdf");
    assert_eq!(request.header("X-Appwrite-User-Id"), Some("user-42"));
}

#[tokio::test]
async fn delete_foreign_resume_is_refused_locally() {
    let server = MockServer::fixed(200, r#"{"success":true}"#).await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    assert!(client
        .delete_resume("user-7_resume.pdf", "user-42")
        .await
        .is_err());
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn delete_keeps_hostile_names_inside_one_path_segment() {
    let server = MockServer::fixed(200, r#"{"success":true}"#).await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let cases = [
        ("u1_/../../admin", "/api/v1/upload/resume/u1_%2F..%2F..%2Fadmin"),
        ("u1_cv#x.pdf", "/api/v1/upload/resume/u1_cv%23x.pdf"),
        ("u1_a?b=c.pdf", "/api/v1/upload/resume/u1_a%3Fb=c.pdf"),
    ];
    for (name, _) in cases {
        client.delete_resume(name, "u1").await.unwrap();
    }

    let paths: Vec<String> = server.requests().into_iter().map(|r| r.path).collect();
    let expected: Vec<&str> = cases.iter().map(|(_, path)| *path).collect();
    assert_eq!(paths, expected);
}

#[tokio::test]
async fn delete_percent_encodes_non_ascii_names() {
    let server = MockServer::fixed(200, r#"{"success":true}"#).await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    client
        .delete_resume("u1_résumé final.pdf", "u1")
        .await
        .unwrap();

    let request = &server.requests()[0];
    assert_eq!(request.method, "DELETE");
    assert_eq!(
        request.path,
        "/api/v1/upload/resume/u1_r%C3%A9sum%C3%A9%20final.pdf"
    );
}

#[tokio::test]
async fn delete_missing_resume() {
    let server = MockServer::fixed(404, "").await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let err = client
        .delete_resume("user-42_gone.pdf", "user-42")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Resume not found: user-42_gone.pdf");
}

#[tokio::test]
async fn profile_existence() {
    let server = MockServer::fixed(
        200,
        r#"{"success":true,"exists":true,"data":{"id":11,"completionPercentage":70}}"#,
    )
    .await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let existence = client.profile_exists("user-42").await.unwrap();
    assert!(existence.exists);
    assert_eq!(existence.data.unwrap().completion_percentage, Some(70));
    assert_eq!(server.requests()[0].path, "/api/v1/profile-simple/exists");
}

#[tokio::test]
async fn health_check() {
    let server = MockServer::fixed(
        200,
        r#"{"success":true,"message":"Profile service is running","timestamp":"2024-01-01T00:00:00"}"#,
    )
    .await;
    let client = ServiceClient::new(&server.base_url, Some(5)).unwrap();

    let health = client.health().await.unwrap();
    assert!(health.success);
    assert_eq!(health.message.as_deref(), Some("Profile service is running"));
}

#[tokio::test]
async fn auth_client_sends_configured_headers() {
    let server = MockServer::fixed(200, r#"{"$id":"abc123","email":"simple@test.com"}"#).await;
    let config = AuthClientConfig {
        endpoint: format!("{}/v1", server.base_url),
        project_id: "project-xyz".to_string(),
        origin: "http://localhost:3000".to_string(),
    };
    let auth = AuthClient::new(config, Some(5)).unwrap();

    let account = auth.account().get().await.unwrap();
    assert_eq!(account["$id"], "abc123");

    let request = &server.requests()[0];
    assert_eq!(request.path, "/v1/account");
    assert_eq!(request.header("X-Appwrite-Project"), Some("project-xyz"));
    assert_eq!(request.header("X-Appwrite-Response-Format"), Some("1.0.0"));
    assert_eq!(request.header("X-Fallback-Cookies"), Some("true"));
    assert_eq!(request.header("Origin"), Some("http://localhost:3000"));
}

#[tokio::test]
async fn auth_client_surfaces_rejections() {
    let server =
        MockServer::fixed(401, r#"{"message":"User (role: guests) missing scope (account)"}"#)
            .await;
    let config = AuthClientConfig {
        endpoint: format!("{}/v1", server.base_url),
        ..Default::default()
    };
    let auth = AuthClient::new(config, Some(5)).unwrap();

    let err = auth.account().get().await.unwrap_err();
    assert!(err.to_string().contains("401"));
}
