//! Reservation use cases: quotes, availability, creation, payment,
//! cancellation, and refunds.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use bahari_core::error::AppError;
use bahari_core::result::AppResult;
use bahari_core::traits::Mailer;
use bahari_core::types::pagination::{PageRequest, PageResponse};
use bahari_database::repositories::booking::BookingRepository;
use bahari_database::repositories::package::PackageRepository;
use bahari_database::repositories::room::RoomRepository;
use bahari_entity::booking::availability::{DateSpan, RoomCalendar};
use bahari_entity::booking::model::{Booking, BookingDetail, CreateBooking};
use bahari_entity::booking::pricing;
use bahari_entity::booking::status::{BookingStatus, PaymentStatus};
use bahari_mailer::BookingSummary;

/// Availability of a single room over a date window.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoomAvailability {
    /// Active booked spans.
    pub booked_spans: Vec<DateSpan>,
    /// Every occupied date within the requested window.
    pub unavailable_dates: Vec<NaiveDate>,
}

/// A price quote for a prospective stay.
#[derive(Debug, Clone, serde::Serialize)]
pub struct StayQuote {
    pub room_id: Uuid,
    pub package_id: Option<Uuid>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i64,
    pub room_price: i64,
    pub package_price_addon: Option<i64>,
    /// `room_price * nights + package_price_addon * nights`, in whole KES.
    pub total_price: i64,
}

/// Data for creating a reservation, before server-side pricing.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub room_id: Uuid,
    pub package_id: Option<Uuid>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub special_requests: Option<String>,
}

/// Handles the reservation lifecycle.
#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
    room_repo: Arc<RoomRepository>,
    package_repo: Arc<PackageRepository>,
    mailer: Arc<dyn Mailer>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        room_repo: Arc<RoomRepository>,
        package_repo: Arc<PackageRepository>,
        mailer: Arc<dyn Mailer>,
    ) -> Self {
        Self {
            booking_repo,
            room_repo,
            package_repo,
            mailer,
        }
    }

    /// Availability of a room over `[from, to)` for the booking calendar.
    ///
    /// Errors if the room does not exist. A failed bookings fetch fails
    /// closed: the caller gets a 503, never an empty open calendar.
    pub async fn room_availability(
        &self,
        room_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<RoomAvailability> {
        if to <= from {
            return Err(AppError::validation(
                "Availability window end must be after its start",
            ));
        }

        self.room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;

        let spans = self
            .booking_repo
            .active_spans_for_room(room_id)
            .await
            .map_err(|e| {
                warn!(%room_id, error = %e, "Bookings fetch failed; reporting room as unavailable");
                AppError::service_unavailable("Room availability is temporarily unavailable")
            })?;

        let calendar = RoomCalendar::from_spans(spans);
        Ok(RoomAvailability {
            booked_spans: calendar.spans().to_vec(),
            unavailable_dates: calendar.unavailable_dates(from, to),
        })
    }

    /// Price a prospective stay without persisting anything.
    pub async fn quote(
        &self,
        room_id: Uuid,
        package_id: Option<Uuid>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<StayQuote> {
        let room = self
            .room_repo
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {room_id} not found")))?;

        let package_addon = match package_id {
            Some(id) => {
                let package = self
                    .package_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Package {id} not found")))?;
                Some(package.price_addon)
            }
            None => None,
        };

        let (nights, total) = pricing::quote(room.price, check_in, check_out, package_addon)?;

        Ok(StayQuote {
            room_id,
            package_id,
            check_in_date: check_in,
            check_out_date: check_out,
            nights,
            room_price: room.price,
            package_price_addon: package_addon,
            total_price: total,
        })
    }

    /// Create a reservation in pending/unpaid state.
    ///
    /// The total is computed server-side from the current room and package
    /// rates; the range is re-validated inside the inserting transaction.
    /// A confirmation email is sent afterwards; delivery failure does not
    /// fail the booking.
    pub async fn create_reservation(&self, req: ReservationRequest) -> AppResult<BookingDetail> {
        let room = self
            .room_repo
            .find_by_id(req.room_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {} not found", req.room_id)))?;

        if req.adults <= 0 {
            return Err(AppError::validation("At least one adult is required"));
        }
        if req.children < 0 {
            return Err(AppError::validation("Child count cannot be negative"));
        }
        let guests = req.adults + req.children;
        if guests > room.capacity {
            return Err(AppError::validation(format!(
                "Room '{}' sleeps at most {} guests (requested {guests})",
                room.name, room.capacity
            )));
        }

        let package_addon = match req.package_id {
            Some(id) => {
                let package = self
                    .package_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Package {id} not found")))?;
                Some(package.price_addon)
            }
            None => None,
        };

        let (_, total_price) = pricing::quote(
            room.price,
            req.check_in_date,
            req.check_out_date,
            package_addon,
        )?;

        let booking = self
            .booking_repo
            .create(&CreateBooking {
                room_id: req.room_id,
                package_id: req.package_id,
                guest_name: req.guest_name,
                guest_email: req.guest_email,
                guest_phone: req.guest_phone,
                check_in_date: req.check_in_date,
                check_out_date: req.check_out_date,
                adults: req.adults,
                children: req.children,
                special_requests: req.special_requests,
                total_price,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            check_in = %booking.check_in_date,
            check_out = %booking.check_out_date,
            total = booking.total_price,
            "Reservation created"
        );

        let detail = self.get_detail(booking.id).await?;
        self.send_non_fatal(summary_of(&detail).confirmation_email(), "confirmation")
            .await;

        Ok(detail)
    }

    /// A booking with its room and package display fields.
    pub async fn get_detail(&self, id: Uuid) -> AppResult<BookingDetail> {
        self.booking_repo
            .find_detail(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    /// List bookings, optionally filtered by status.
    pub async fn list(
        &self,
        status: Option<BookingStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<BookingDetail>> {
        match status {
            Some(status) => self.booking_repo.find_by_status(status, page).await,
            None => self.booking_repo.find_all(page).await,
        }
    }

    /// Confirm payment for a pending booking.
    ///
    /// Transitions pending/unpaid to confirmed/paid and stores an opaque
    /// payment reference. A receipt email is sent afterwards; delivery
    /// failure does not fail the payment.
    pub async fn confirm_payment(&self, id: Uuid) -> AppResult<BookingDetail> {
        let booking = self.require_booking(id).await?;

        if !booking.status.can_transition_to(BookingStatus::Confirmed) {
            return Err(AppError::conflict(format!(
                "Booking is {} and cannot accept payment",
                booking.status
            )));
        }
        if !booking
            .payment_status
            .can_transition_to(PaymentStatus::Paid)
        {
            return Err(AppError::conflict(format!(
                "Booking payment is already {}",
                booking.payment_status
            )));
        }

        // Charge the total agreed at creation; log if the current rates
        // would price the same stay differently.
        if let Ok(room) = self.require_room(booking.room_id).await {
            let addon = match booking.package_id {
                Some(pid) => self
                    .package_repo
                    .find_by_id(pid)
                    .await
                    .ok()
                    .flatten()
                    .map(|p| p.price_addon),
                None => None,
            };
            if let Ok((_, current_total)) = pricing::quote(
                room.price,
                booking.check_in_date,
                booking.check_out_date,
                addon,
            ) {
                if current_total != booking.total_price {
                    warn!(
                        booking_id = %id,
                        agreed = booking.total_price,
                        current = current_total,
                        "Rates changed since booking; charging the agreed total"
                    );
                }
            }
        }

        let payment_id = format!("sim_{}", Uuid::new_v4().simple());
        let updated = self.booking_repo.mark_paid(id, &payment_id).await?;

        info!(booking_id = %id, payment_id = %payment_id, "Payment confirmed");

        let detail = self.get_detail(updated.id).await?;
        self.send_non_fatal(summary_of(&detail).receipt_email(), "receipt")
            .await;

        Ok(detail)
    }

    /// Cancel a booking, freeing its dates.
    pub async fn cancel(&self, id: Uuid) -> AppResult<Booking> {
        let booking = self.require_booking(id).await?;

        if !booking.status.can_transition_to(BookingStatus::Cancelled) {
            return Err(AppError::conflict(format!(
                "Booking is {} and cannot be cancelled",
                booking.status
            )));
        }

        let updated = self
            .booking_repo
            .update_status(id, BookingStatus::Cancelled)
            .await?;
        info!(booking_id = %id, "Booking cancelled");
        Ok(updated)
    }

    /// Mark a cancelled, paid booking as refunded.
    pub async fn refund(&self, id: Uuid) -> AppResult<Booking> {
        let booking = self.require_booking(id).await?;

        if booking.status != BookingStatus::Cancelled {
            return Err(AppError::conflict(
                "Only cancelled bookings can be refunded",
            ));
        }
        if !booking
            .payment_status
            .can_transition_to(PaymentStatus::Refunded)
        {
            return Err(AppError::conflict(format!(
                "Booking payment is {} and cannot be refunded",
                booking.payment_status
            )));
        }

        let updated = self
            .booking_repo
            .update_payment_status(id, PaymentStatus::Refunded)
            .await?;
        info!(booking_id = %id, "Booking refunded");
        Ok(updated)
    }

    /// Remove a booking entirely (administrative override).
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        if !self.booking_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Booking {id} not found")));
        }
        info!(booking_id = %id, "Booking deleted");
        Ok(())
    }

    /// Transition confirmed bookings with a past checkout to completed.
    pub async fn complete_past_stays(&self) -> AppResult<u64> {
        let today = Utc::now().date_naive();
        let completed = self.booking_repo.complete_past(today).await?;
        if completed > 0 {
            info!(completed, "Completed past stays");
        }
        Ok(completed)
    }

    async fn require_booking(&self, id: Uuid) -> AppResult<Booking> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))
    }

    async fn require_room(&self, id: Uuid) -> AppResult<bahari_entity::room::Room> {
        self.room_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    async fn send_non_fatal(&self, email: bahari_core::traits::OutboundEmail, kind: &str) {
        if let Err(e) = self.mailer.send(email).await {
            warn!(error = %e, kind, "Failed to send booking email");
        }
    }
}

fn summary_of(detail: &BookingDetail) -> BookingSummary {
    BookingSummary {
        booking_id: detail.booking.id,
        guest_name: detail.booking.guest_name.clone(),
        guest_email: detail.booking.guest_email.clone(),
        room_name: detail.room_name.clone(),
        package_name: detail.package_name.clone(),
        check_in_date: detail.booking.check_in_date,
        check_out_date: detail.booking.check_out_date,
        nights: detail.booking.nights(),
        adults: detail.booking.adults,
        children: detail.booking.children,
        total_price: detail.booking.total_price,
        payment_id: detail.booking.payment_id.clone(),
    }
}

