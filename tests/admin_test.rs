//! Integration tests for admin-only endpoints: authorization, content
//! management, user management, and the dashboard.

mod helpers;

use helpers::date;
use http::StatusCode;

#[tokio::test]
async fn test_admin_routes_require_token() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/admin/dashboard", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_routes_reject_non_admin() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("regular", "password123", "user").await;
    let token = app.login("regular", "password123").await;

    let response = app
        .request("GET", "/api/admin/dashboard", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_create_room() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("roomadmin", "password123", "admin")
        .await;
    let token = app.login("roomadmin", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/rooms",
            Some(serde_json::json!({
                "name": "Penthouse",
                "description": "Top floor, sea view",
                "price": 45000,
                "capacity": 4,
                "amenities": ["wifi", "minibar"],
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["name"].as_str().unwrap(), "Penthouse");
}

#[tokio::test]
async fn test_admin_duplicate_room_name_conflict() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("dupadmin", "password123", "admin")
        .await;
    let token = app.login("dupadmin", "password123").await;
    app.create_test_room("Taken Name", 5000, 2).await;

    let response = app
        .request(
            "POST",
            "/api/admin/rooms",
            Some(serde_json::json!({
                "name": "Taken Name",
                "price": 5000,
                "capacity": 2,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_update_room_partial() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("updadmin", "password123", "admin")
        .await;
    let token = app.login("updadmin", "password123").await;
    let room_id = app.create_test_room("Pre Update", 5000, 2).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/rooms/{}", room_id),
            Some(serde_json::json!({ "price": 7500 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["price"].as_i64().unwrap(), 7500);
    // Untouched fields keep their value.
    assert_eq!(
        response.body["data"]["name"].as_str().unwrap(),
        "Pre Update"
    );
}

#[tokio::test]
async fn test_admin_cannot_delete_room_with_bookings() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("deladmin", "password123", "admin")
        .await;
    let token = app.login("deladmin", "password123").await;
    let room_id = app.create_test_room("Occupied", 5000, 2).await;
    app.create_test_booking(room_id, date(2028, 2, 1), date(2028, 2, 3))
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/rooms/{}", room_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_package_crud() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("pkgadmin", "password123", "admin")
        .await;
    let token = app.login("pkgadmin", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/admin/packages",
            Some(serde_json::json!({
                "name": "Honeymoon",
                "description": "Champagne and late checkout",
                "price_addon": 8000,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let package_id = created.body["data"]["id"].as_str().unwrap().to_string();

    let updated = app
        .request(
            "PUT",
            &format!("/api/admin/packages/{}", package_id),
            Some(serde_json::json!({ "price_addon": 9000 })),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["data"]["price_addon"].as_i64().unwrap(), 9000);

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/packages/{}", package_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_admin_list_bookings_with_status_filter() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("listadmin", "password123", "admin")
        .await;
    let token = app.login("listadmin", "password123").await;

    let room_id = app.create_test_room("Listed", 5000, 2).await;
    let booking_id = app
        .create_test_booking(room_id, date(2028, 3, 1), date(2028, 3, 3))
        .await;
    app.create_test_booking(room_id, date(2028, 3, 10), date(2028, 3, 12))
        .await;

    app.request(
        "POST",
        &format!("/api/bookings/{}/payment", booking_id),
        None,
        None,
    )
    .await;

    let all = app
        .request("GET", "/api/admin/bookings", None, Some(&token))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["data"]["total_items"].as_u64().unwrap(), 2);

    let confirmed = app
        .request(
            "GET",
            "/api/admin/bookings?status=confirmed",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(confirmed.status, StatusCode::OK);
    assert_eq!(confirmed.body["data"]["total_items"].as_u64().unwrap(), 1);
}

#[tokio::test]
async fn test_admin_create_user_weak_password_rejected() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("useradmin", "password123", "admin")
        .await;
    let token = app.login("useradmin", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({
                "username": "newstaff",
                "email": "newstaff@test.com",
                "password": "aaaaaaaa",
                "role": "user",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_create_user_and_login() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("useradmin2", "password123", "admin")
        .await;
    let token = app.login("useradmin2", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/admin/users",
            Some(serde_json::json!({
                "username": "newstaff2",
                "email": "newstaff2@test.com",
                "password": "mangrove-heron-tide-42",
                "role": "user",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    app.login("newstaff2", "mangrove-heron-tide-42").await;
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = helpers::TestApp::new().await;
    let admin_id = app
        .create_test_user("selfadmin", "password123", "admin")
        .await;
    let token = app.login("selfadmin", "password123").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{}", admin_id),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_admin_cannot_demote_self() {
    let app = helpers::TestApp::new().await;
    let admin_id = app
        .create_test_user("demoteadmin", "password123", "admin")
        .await;
    let token = app.login("demoteadmin", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/role", admin_id),
            Some(serde_json::json!({ "role": "user" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_dashboard_stats() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("dashadmin", "password123", "admin")
        .await;
    let token = app.login("dashadmin", "password123").await;

    let room_id = app.create_test_room("Dash Room", 10000, 2).await;
    let paid_id = app
        .create_test_booking(room_id, date(2028, 4, 1), date(2028, 4, 3))
        .await;
    app.create_test_booking(room_id, date(2028, 4, 10), date(2028, 4, 12))
        .await;

    app.request(
        "POST",
        &format!("/api/bookings/{}/payment", paid_id),
        None,
        None,
    )
    .await;

    let response = app
        .request("GET", "/api/admin/dashboard", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = &response.body["data"];
    assert_eq!(data["total_bookings"].as_i64().unwrap(), 2);
    assert_eq!(data["pending_bookings"].as_i64().unwrap(), 1);
    assert_eq!(data["confirmed_bookings"].as_i64().unwrap(), 1);
    assert_eq!(data["total_rooms"].as_i64().unwrap(), 1);
    // Only the paid booking counts toward revenue: 2 nights at 10000.
    assert_eq!(data["total_revenue"].as_i64().unwrap(), 20000);
    assert_eq!(data["recent_bookings"].as_array().unwrap().len(), 2);
}
