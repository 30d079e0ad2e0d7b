//! Admin dashboard statistics.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use bahari_core::result::AppResult;
use bahari_core::types::pagination::PageRequest;
use bahari_database::repositories::booking::BookingRepository;
use bahari_database::repositories::room::RoomRepository;
use bahari_entity::booking::model::BookingDetail;
use bahari_entity::booking::status::BookingStatus;

/// Aggregate statistics for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_bookings: i64,
    pub pending_bookings: i64,
    pub confirmed_bookings: i64,
    pub cancelled_bookings: i64,
    pub completed_bookings: i64,
    /// Sum of totals across paid bookings, in whole KES.
    pub total_revenue: i64,
    pub total_rooms: i64,
    /// Rooms with an active booking covering today. Approximate occupancy:
    /// it counts rooms, not physical beds.
    pub occupied_rooms: i64,
    /// Most recent bookings for the dashboard feed.
    pub recent_bookings: Vec<BookingDetail>,
}

/// Computes dashboard statistics.
#[derive(Debug, Clone)]
pub struct DashboardService {
    booking_repo: Arc<BookingRepository>,
    room_repo: Arc<RoomRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(booking_repo: Arc<BookingRepository>, room_repo: Arc<RoomRepository>) -> Self {
        Self {
            booking_repo,
            room_repo,
        }
    }

    /// Current statistics snapshot.
    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let today = Utc::now().date_naive();

        let by_status = self.booking_repo.count_by_status().await?;
        let count_of = |status: BookingStatus| -> i64 {
            by_status
                .iter()
                .find(|(s, _)| *s == status)
                .map(|(_, n)| *n)
                .unwrap_or(0)
        };

        let pending = count_of(BookingStatus::Pending);
        let confirmed = count_of(BookingStatus::Confirmed);
        let cancelled = count_of(BookingStatus::Cancelled);
        let completed = count_of(BookingStatus::Completed);

        let recent = self
            .booking_repo
            .find_all(&PageRequest::new(1, 5))
            .await?
            .items;

        Ok(DashboardStats {
            total_bookings: pending + confirmed + cancelled + completed,
            pending_bookings: pending,
            confirmed_bookings: confirmed,
            cancelled_bookings: cancelled,
            completed_bookings: completed,
            total_revenue: self.booking_repo.paid_revenue().await?,
            total_rooms: self.room_repo.count().await?,
            occupied_rooms: self.booking_repo.occupied_room_count(today).await?,
            recent_bookings: recent,
        })
    }
}
