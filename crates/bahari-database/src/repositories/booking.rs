//! Booking repository implementation.
//!
//! Double-booking protection lives here: `create` re-validates the candidate
//! range against the room's current bookings inside the inserting
//! transaction (with the room's booking rows locked), and the
//! `bookings_no_overlap` exclusion constraint backstops anything the
//! re-check cannot see. Exactly one of two racing inserts for overlapping
//! dates succeeds; the loser gets a Conflict.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use bahari_core::error::{AppError, ErrorKind};
use bahari_core::result::AppResult;
use bahari_core::types::pagination::{PageRequest, PageResponse};
use bahari_entity::booking::availability::{DateSpan, RoomCalendar};
use bahari_entity::booking::model::{Booking, BookingDetail, CreateBooking};
use bahari_entity::booking::status::{BookingStatus, PaymentStatus};

/// Name of the GiST exclusion constraint guarding interval disjointness.
const OVERLAP_CONSTRAINT: &str = "bookings_no_overlap";

const DETAIL_SELECT: &str = "SELECT b.*, r.name AS room_name, r.price AS room_price, \
     r.image_url AS room_image_url, \
     p.name AS package_name, p.price_addon AS package_price_addon \
     FROM bookings b \
     JOIN rooms r ON r.id = b.room_id \
     LEFT JOIN packages p ON p.id = b.package_id";

/// Repository for booking CRUD and availability queries.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find booking by id", e)
            })
    }

    /// Find a booking with its room and package display fields joined in.
    pub async fn find_detail(&self, id: Uuid) -> AppResult<Option<BookingDetail>> {
        sqlx::query_as::<_, BookingDetail>(&format!("{DETAIL_SELECT} WHERE b.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to load booking detail", e)
            })
    }

    /// Active (non-cancelled) booked spans for a room, for the calendar.
    pub async fn active_spans_for_room(&self, room_id: Uuid) -> AppResult<Vec<DateSpan>> {
        let rows: Vec<(NaiveDate, NaiveDate)> = sqlx::query_as(
            "SELECT check_in_date, check_out_date FROM bookings \
             WHERE room_id = $1 AND status <> 'cancelled' \
             ORDER BY check_in_date ASC",
        )
        .bind(room_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load room availability", e)
        })?;

        Ok(rows
            .into_iter()
            .map(|(check_in, check_out)| DateSpan::new(check_in, check_out))
            .collect())
    }

    /// Insert a new booking in pending/unpaid state.
    ///
    /// Runs the authoritative range validation against the room's current
    /// bookings inside the same transaction as the insert. The exclusion
    /// constraint turns any remaining race into a Conflict for exactly one
    /// of the contenders.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let rows: Vec<(NaiveDate, NaiveDate)> = sqlx::query_as(
            "SELECT check_in_date, check_out_date FROM bookings \
             WHERE room_id = $1 AND status <> 'cancelled' \
             FOR UPDATE",
        )
        .bind(data.room_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to load existing bookings for validation",
                e,
            )
        })?;

        let calendar = RoomCalendar::from_spans(
            rows.into_iter()
                .map(|(check_in, check_out)| DateSpan::new(check_in, check_out))
                .collect(),
        );
        calendar
            .validate_range(data.check_in_date, data.check_out_date)
            .map_err(AppError::from)?;

        let booking = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
             (room_id, package_id, guest_name, guest_email, guest_phone, \
              check_in_date, check_out_date, adults, children, special_requests, \
              total_price, status, payment_status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'pending', 'unpaid') \
             RETURNING *",
        )
        .bind(data.room_id)
        .bind(data.package_id)
        .bind(&data.guest_name)
        .bind(&data.guest_email)
        .bind(&data.guest_phone)
        .bind(data.check_in_date)
        .bind(data.check_out_date)
        .bind(data.adults)
        .bind(data.children)
        .bind(&data.special_requests)
        .bind(data.total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| Self::map_insert_error(e, data))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit booking", e)
        })?;

        Ok(booking)
    }

    /// List bookings, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<BookingDetail>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count bookings", e)
            })?;

        let bookings = sqlx::query_as::<_, BookingDetail>(&format!(
            "{DETAIL_SELECT} ORDER BY b.created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List bookings filtered by status, newest first.
    pub async fn find_by_status(
        &self,
        status: BookingStatus,
        page: &PageRequest,
    ) -> AppResult<PageResponse<BookingDetail>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count bookings by status", e)
            })?;

        let bookings = sqlx::query_as::<_, BookingDetail>(&format!(
            "{DETAIL_SELECT} WHERE b.status = $1 ORDER BY b.created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list bookings by status", e)
        })?;

        Ok(PageResponse::new(
            bookings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Update a booking's lifecycle status.
    pub async fn update_status(&self, id: Uuid, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update booking status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Mark a booking paid and confirmed, storing the payment reference.
    pub async fn mark_paid(&self, id: Uuid, payment_id: &str) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = 'confirmed', payment_status = 'paid', \
                                 payment_id = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payment_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark booking paid", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Update a booking's payment status.
    pub async fn update_payment_status(
        &self,
        id: Uuid,
        payment_status: PaymentStatus,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET payment_status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(payment_status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update payment status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// Transition confirmed bookings whose checkout has passed to completed.
    ///
    /// Returns the number of bookings completed.
    pub async fn complete_past(&self, today: NaiveDate) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE bookings SET status = 'completed', updated_at = NOW() \
             WHERE status = 'confirmed' AND check_out_date <= $1",
        )
        .bind(today)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to complete past bookings", e)
        })?;

        Ok(result.rows_affected())
    }

    /// Delete a booking (administrative override only).
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete booking", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count bookings per lifecycle status.
    pub async fn count_by_status(&self) -> AppResult<Vec<(BookingStatus, i64)>> {
        sqlx::query_as("SELECT status, COUNT(*) FROM bookings GROUP BY status")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count bookings by status", e)
            })
    }

    /// Total revenue across paid bookings.
    pub async fn paid_revenue(&self) -> AppResult<i64> {
        let total: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(total_price)::BIGINT FROM bookings WHERE payment_status = 'paid'",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to sum revenue", e))?;

        Ok(total.unwrap_or(0))
    }

    /// Number of distinct rooms with an active booking covering `today`.
    pub async fn occupied_room_count(&self, today: NaiveDate) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(DISTINCT room_id) FROM bookings \
             WHERE status <> 'cancelled' \
             AND check_in_date <= $1 AND $1 < check_out_date",
        )
        .bind(today)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count occupied rooms", e)
        })
    }

    /// Map an insert failure, translating the exclusion-constraint violation
    /// into the "just booked" conflict the reservation flow messages on.
    fn map_insert_error(e: sqlx::Error, data: &CreateBooking) -> AppError {
        match &e {
            sqlx::Error::Database(db_err) if db_err.constraint() == Some(OVERLAP_CONSTRAINT) => {
                AppError::conflict(format!(
                    "Room was just booked for overlapping dates \
                     ({} to {}); please choose different dates",
                    data.check_in_date, data.check_out_date
                ))
                .with_details(serde_json::json!({
                    "check_in_date": data.check_in_date,
                    "check_out_date": data.check_out_date,
                }))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create booking", e),
        }
    }
}
