//! Route definitions for the hotel HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(room_routes())
        .merge(package_routes())
        .merge(booking_routes())
        .merge(contact_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, refresh, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
}

/// Public room catalogue and availability
fn room_routes() -> Router<AppState> {
    Router::new()
        .route("/rooms", get(handlers::rooms::list_rooms))
        .route("/rooms/{id}", get(handlers::rooms::get_room))
        .route(
            "/rooms/{id}/availability",
            get(handlers::rooms::room_availability),
        )
}

/// Public package catalogue
fn package_routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(handlers::packages::list_packages))
        .route("/packages/{id}", get(handlers::packages::get_package))
}

/// Public reservation endpoints
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings/quote", post(handlers::bookings::quote))
        .route("/bookings", post(handlers::bookings::create_booking))
        .route("/bookings/{id}", get(handlers::bookings::get_booking))
        .route(
            "/bookings/{id}/payment",
            post(handlers::bookings::confirm_payment),
        )
}

/// Contact form
fn contact_routes() -> Router<AppState> {
    Router::new().route("/contact", post(handlers::contact::submit))
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/admin/dashboard", get(handlers::admin::dashboard::stats))
        // Booking management
        .route(
            "/admin/bookings",
            get(handlers::admin::bookings::list_bookings),
        )
        .route(
            "/admin/bookings/{id}/cancel",
            post(handlers::admin::bookings::cancel_booking),
        )
        .route(
            "/admin/bookings/{id}/refund",
            post(handlers::admin::bookings::refund_booking),
        )
        .route(
            "/admin/bookings/{id}",
            delete(handlers::admin::bookings::delete_booking),
        )
        // Room management
        .route("/admin/rooms", post(handlers::admin::rooms::create_room))
        .route(
            "/admin/rooms/{id}",
            put(handlers::admin::rooms::update_room),
        )
        .route(
            "/admin/rooms/{id}/image",
            post(handlers::admin::rooms::upload_image),
        )
        .route(
            "/admin/rooms/{id}",
            delete(handlers::admin::rooms::delete_room),
        )
        // Package management
        .route(
            "/admin/packages",
            post(handlers::admin::packages::create_package),
        )
        .route(
            "/admin/packages/{id}",
            put(handlers::admin::packages::update_package),
        )
        .route(
            "/admin/packages/{id}",
            delete(handlers::admin::packages::delete_package),
        )
        // User management
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route("/admin/users", post(handlers::admin::users::create_user))
        .route("/admin/users/{id}", get(handlers::admin::users::get_user))
        .route(
            "/admin/users/{id}/role",
            put(handlers::admin::users::change_role),
        )
        .route(
            "/admin/users/{id}/status",
            put(handlers::admin::users::change_status),
        )
        .route(
            "/admin/users/{id}",
            delete(handlers::admin::users::delete_user),
        )
}

/// Health check endpoints (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
