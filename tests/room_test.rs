//! Integration tests for the public room and package catalogue.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_list_rooms_public() {
    let app = helpers::TestApp::new().await;
    app.create_test_room("Standard Twin", 6000, 2).await;
    app.create_test_room("Family Suite", 18000, 5).await;

    let response = app.request("GET", "/api/rooms", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_room_uses_placeholder_image() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("No Photo Yet", 6000, 2).await;

    let response = app
        .request("GET", &format!("/api/rooms/{}", room_id), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["image_url"].as_str().unwrap(),
        app.config.storage.placeholder_image_url
    );
    assert_eq!(
        response.body["data"]["amenities"].as_array().unwrap().len(),
        1
    );
}

#[tokio::test]
async fn test_get_room_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "GET",
            &format!("/api/rooms/{}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_packages_public() {
    let app = helpers::TestApp::new().await;
    app.create_test_package("Bed and Breakfast", 1500).await;
    app.create_test_package("Full Board", 4000).await;

    let response = app.request("GET", "/api/packages", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Ordered by add-on price, cheapest first.
    assert_eq!(items[0]["name"].as_str().unwrap(), "Bed and Breakfast");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["database"].as_str().unwrap(),
        "connected"
    );
}
