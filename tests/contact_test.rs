//! Integration tests for the contact form.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_contact_submit() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Wanjiru Kamau",
                "email": "wanjiru@test.com",
                "subject": "Airport transfer",
                "message": "Do you offer pickups from Moi International?",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
async fn test_contact_requires_message() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Wanjiru Kamau",
                "email": "wanjiru@test.com",
                "message": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_contact_rejects_invalid_email() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/contact",
            Some(serde_json::json!({
                "name": "Wanjiru Kamau",
                "email": "not-an-email",
                "message": "Hello",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
