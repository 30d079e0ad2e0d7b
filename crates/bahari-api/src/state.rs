//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use bahari_auth::jwt::decoder::JwtDecoder;
use bahari_auth::jwt::encoder::JwtEncoder;
use bahari_auth::password::hasher::PasswordHasher;
use bahari_auth::password::validator::PasswordValidator;
use bahari_core::config::AppConfig;
use bahari_core::traits::{ImageStore, Mailer};

use bahari_database::repositories::booking::BookingRepository;
use bahari_database::repositories::package::PackageRepository;
use bahari_database::repositories::room::RoomRepository;
use bahari_database::repositories::user::UserRepository;

use bahari_service::auth::AuthService;
use bahari_service::booking::BookingService;
use bahari_service::contact::ContactService;
use bahari_service::dashboard::DashboardService;
use bahari_service::package::PackageService;
use bahari_service::room::RoomService;
use bahari_service::user::AdminUserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Password policy validator
    pub password_validator: Arc<PasswordValidator>,

    /// Room image blob store
    pub image_store: Arc<dyn ImageStore>,
    /// Outbound email sink
    pub mailer: Arc<dyn Mailer>,

    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Room repository
    pub room_repo: Arc<RoomRepository>,
    /// Package repository
    pub package_repo: Arc<PackageRepository>,
    /// Booking repository
    pub booking_repo: Arc<BookingRepository>,

    /// Auth service
    pub auth_service: Arc<AuthService>,
    /// Booking service
    pub booking_service: Arc<BookingService>,
    /// Room service
    pub room_service: Arc<RoomService>,
    /// Package service
    pub package_service: Arc<PackageService>,
    /// Admin user management service
    pub admin_user_service: Arc<AdminUserService>,
    /// Contact form service
    pub contact_service: Arc<ContactService>,
    /// Dashboard statistics service
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire the full dependency graph from a config, pool, and the two
    /// pluggable collaborators.
    pub fn build(
        config: AppConfig,
        db_pool: PgPool,
        image_store: Arc<dyn ImageStore>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let room_repo = Arc::new(RoomRepository::new(db_pool.clone()));
        let package_repo = Arc::new(PackageRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));

        let auth_service = Arc::new(AuthService::new(
            user_repo.clone(),
            password_hasher.clone(),
            jwt_encoder.clone(),
            jwt_decoder.clone(),
        ));
        let booking_service = Arc::new(BookingService::new(
            booking_repo.clone(),
            room_repo.clone(),
            package_repo.clone(),
            mailer.clone(),
        ));
        let room_service = Arc::new(RoomService::new(room_repo.clone(), image_store.clone()));
        let package_service = Arc::new(PackageService::new(package_repo.clone()));
        let admin_user_service = Arc::new(AdminUserService::new(
            user_repo.clone(),
            password_hasher.clone(),
            password_validator.clone(),
        ));
        let contact_service = Arc::new(ContactService::new(mailer.clone(), &config.email));
        let dashboard_service = Arc::new(DashboardService::new(
            booking_repo.clone(),
            room_repo.clone(),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            password_validator,
            image_store,
            mailer,
            user_repo,
            room_repo,
            package_repo,
            booking_repo,
            auth_service,
            booking_service,
            room_service,
            package_service,
            admin_user_service,
            contact_service,
            dashboard_service,
        }
    }
}
