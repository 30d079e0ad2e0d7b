//! Integration tests for the reservation flow: quoting, creation,
//! overlap rejection, and the payment lifecycle.

mod helpers;

use helpers::date;
use http::StatusCode;

#[tokio::test]
async fn test_quote_without_package() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Ocean View", 12000, 3).await;

    let response = app
        .request(
            "POST",
            "/api/bookings/quote",
            Some(serde_json::json!({
                "room_id": room_id,
                "check_in_date": date(2027, 3, 10),
                "check_out_date": date(2027, 3, 13),
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["nights"].as_i64().unwrap(), 3);
    assert_eq!(response.body["data"]["total_price"].as_i64().unwrap(), 36000);
}

#[tokio::test]
async fn test_quote_with_package() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Garden Suite", 10000, 2).await;
    let package_id = app.create_test_package("Half Board", 2500).await;

    let response = app
        .request(
            "POST",
            "/api/bookings/quote",
            Some(serde_json::json!({
                "room_id": room_id,
                "package_id": package_id,
                "check_in_date": date(2027, 4, 1),
                "check_out_date": date(2027, 4, 5),
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["nights"].as_i64().unwrap(), 4);
    // (10000 + 2500) * 4
    assert_eq!(response.body["data"]["total_price"].as_i64().unwrap(), 50000);
}

#[tokio::test]
async fn test_quote_rejects_inverted_range() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Inverted", 8000, 2).await;

    let response = app
        .request(
            "POST",
            "/api/bookings/quote",
            Some(serde_json::json!({
                "room_id": room_id,
                "check_in_date": date(2027, 5, 10),
                "check_out_date": date(2027, 5, 10),
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_booking() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Deluxe Double", 15000, 2).await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "room_id": room_id,
                "guest_name": "Asha Mwangi",
                "guest_email": "asha@test.com",
                "check_in_date": date(2027, 6, 1),
                "check_out_date": date(2027, 6, 4),
                "adults": 2,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["data"]["status"].as_str().unwrap(), "pending");
    assert_eq!(
        response.body["data"]["payment_status"].as_str().unwrap(),
        "unpaid"
    );
    assert_eq!(response.body["data"]["nights"].as_i64().unwrap(), 3);
    assert_eq!(response.body["data"]["total_price"].as_i64().unwrap(), 45000);
}

#[tokio::test]
async fn test_overlapping_booking_rejected() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Contested", 9000, 4).await;
    app.create_test_booking(room_id, date(2027, 7, 10), date(2027, 7, 15))
        .await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "room_id": room_id,
                "guest_name": "Juma Otieno",
                "guest_email": "juma@test.com",
                "check_in_date": date(2027, 7, 12),
                "check_out_date": date(2027, 7, 14),
                "adults": 1,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_concurrent_overlapping_bookings_exactly_one_wins() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Raced", 9000, 4).await;

    let payload = |guest: &str| {
        serde_json::json!({
            "room_id": room_id,
            "guest_name": guest,
            "guest_email": format!("{}@test.com", guest.to_lowercase()),
            "check_in_date": date(2027, 9, 10),
            "check_out_date": date(2027, 9, 14),
            "adults": 2,
        })
    };

    let (first, second) = tokio::join!(
        app.request("POST", "/api/bookings", Some(payload("Amina")), None),
        app.request("POST", "/api/bookings", Some(payload("Baraka")), None),
    );

    let statuses = [first.status, second.status];
    assert!(
        statuses.contains(&StatusCode::CREATED),
        "{:?} / {:?}",
        first.body,
        second.body
    );
    assert!(
        statuses.contains(&StatusCode::CONFLICT),
        "{:?} / {:?}",
        first.body,
        second.body
    );
}

#[tokio::test]
async fn test_back_to_back_stays_allowed() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Turnover", 9000, 4).await;
    app.create_test_booking(room_id, date(2027, 8, 10), date(2027, 8, 13))
        .await;

    // Checkout day is not an occupied night; the next guest can check in
    // on the same day.
    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "room_id": room_id,
                "guest_name": "Juma Otieno",
                "guest_email": "juma@test.com",
                "check_in_date": date(2027, 8, 13),
                "check_out_date": date(2027, 8, 15),
                "adults": 1,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
}

#[tokio::test]
async fn test_cancelled_booking_frees_dates() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("bookadmin", "password123", "admin")
        .await;
    let token = app.login("bookadmin", "password123").await;

    let room_id = app.create_test_room("Freed", 9000, 4).await;
    let booking_id = app
        .create_test_booking(room_id, date(2027, 9, 10), date(2027, 9, 15))
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/admin/bookings/{}/cancel", booking_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "room_id": room_id,
                "guest_name": "Neema Said",
                "guest_email": "neema@test.com",
                "check_in_date": date(2027, 9, 10),
                "check_out_date": date(2027, 9, 15),
                "adults": 2,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
}

#[tokio::test]
async fn test_booking_rejects_over_capacity() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Small Single", 7000, 1).await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(serde_json::json!({
                "room_id": room_id,
                "guest_name": "Big Family",
                "guest_email": "family@test.com",
                "check_in_date": date(2027, 10, 1),
                "check_out_date": date(2027, 10, 3),
                "adults": 2,
                "children": 1,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_booking_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "GET",
            &format!("/api/bookings/{}", uuid::Uuid::new_v4()),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_payment_confirms_booking() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Paid Up", 11000, 2).await;
    let booking_id = app
        .create_test_booking(room_id, date(2027, 11, 1), date(2027, 11, 4))
        .await;

    let response = app
        .request(
            "POST",
            &format!("/api/bookings/{}/payment", booking_id),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(
        response.body["data"]["status"].as_str().unwrap(),
        "confirmed"
    );
    assert_eq!(
        response.body["data"]["payment_status"].as_str().unwrap(),
        "paid"
    );
    assert!(response.body["data"]["payment_id"].as_str().is_some());
}

#[tokio::test]
async fn test_double_payment_rejected() {
    let app = helpers::TestApp::new().await;
    let room_id = app.create_test_room("Once Only", 11000, 2).await;
    let booking_id = app
        .create_test_booking(room_id, date(2027, 12, 1), date(2027, 12, 4))
        .await;

    let path = format!("/api/bookings/{}/payment", booking_id);
    let first = app.request("POST", &path, None, None).await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app.request("POST", &path, None, None).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_refund_requires_cancellation() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("refundadmin", "password123", "admin")
        .await;
    let token = app.login("refundadmin", "password123").await;

    let room_id = app.create_test_room("Refundable", 11000, 2).await;
    let booking_id = app
        .create_test_booking(room_id, date(2028, 1, 10), date(2028, 1, 12))
        .await;

    app.request(
        "POST",
        &format!("/api/bookings/{}/payment", booking_id),
        None,
        None,
    )
    .await;

    // Refund before cancellation is a conflict.
    let early = app
        .request(
            "POST",
            &format!("/api/admin/bookings/{}/refund", booking_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(early.status, StatusCode::CONFLICT);

    app.request(
        "POST",
        &format!("/api/admin/bookings/{}/cancel", booking_id),
        None,
        Some(&token),
    )
    .await;

    let refund = app
        .request(
            "POST",
            &format!("/api/admin/bookings/{}/refund", booking_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(refund.status, StatusCode::OK, "{:?}", refund.body);
    assert_eq!(
        refund.body["data"]["payment_status"].as_str().unwrap(),
        "refunded"
    );
}
