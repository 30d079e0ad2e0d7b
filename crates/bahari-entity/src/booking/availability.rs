//! Room availability calendar.
//!
//! A booking occupies the half-open date interval `[check_in, check_out)`:
//! the checkout day itself is free, which permits same-day turnover between
//! two guests. The calendar answers per-date questions for the reservation
//! UI and performs the authoritative range validation that runs again at
//! submission time, inside the inserting transaction.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bahari_core::error::AppError;

use super::status::BookingStatus;

/// Errors produced by range validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// Check-out is not strictly after check-in (zero-night stays included).
    #[error("check-out date {check_out} must be after check-in date {check_in}")]
    InvalidRange {
        /// Candidate check-in.
        check_in: NaiveDate,
        /// Candidate check-out.
        check_out: NaiveDate,
    },
    /// The candidate range collides with an existing booking.
    #[error("date {conflicting} is already booked")]
    Overlap {
        /// First conflicting date within the candidate range.
        conflicting: NaiveDate,
    },
    /// The calendar was built from a failed bookings fetch; nothing can be
    /// validated and no date may be offered as bookable.
    #[error("availability is unknown; booking is disabled")]
    Closed,
}

impl From<AvailabilityError> for AppError {
    fn from(err: AvailabilityError) -> Self {
        match err {
            AvailabilityError::InvalidRange { .. } => AppError::validation(err.to_string()),
            AvailabilityError::Overlap { conflicting } => {
                AppError::conflict(format!(
                    "Selected dates are no longer available: {conflicting} is already booked"
                ))
                .with_details(serde_json::json!({ "conflicting_date": conflicting }))
            }
            AvailabilityError::Closed => AppError::service_unavailable(
                "Room availability could not be determined; please try again",
            ),
        }
    }
}

/// A booked half-open date span `[check_in, check_out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSpan {
    /// First occupied night.
    pub check_in: NaiveDate,
    /// Checkout day; not itself occupied.
    pub check_out: NaiveDate,
}

impl DateSpan {
    /// Create a span. The caller is responsible for `check_out > check_in`;
    /// an empty or inverted span simply contains no dates.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Whether `date` falls inside this span (half-open).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Whether two spans share at least one occupied night.
    pub fn overlaps(&self, other: &DateSpan) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// The availability calendar for a single room.
///
/// Built from the room's bookings with cancelled ones filtered out. A
/// calendar can also be constructed [`closed`](RoomCalendar::closed) — the
/// fail-closed state used when the bookings fetch errored. A closed calendar
/// offers no selectable dates and fails validation, rather than silently
/// treating the room as fully available.
#[derive(Debug, Clone)]
pub struct RoomCalendar {
    spans: Vec<DateSpan>,
    closed: bool,
}

impl RoomCalendar {
    /// Build a calendar from booking intervals, dropping cancelled ones.
    pub fn new<I>(bookings: I) -> Self
    where
        I: IntoIterator<Item = (DateSpan, BookingStatus)>,
    {
        let spans = bookings
            .into_iter()
            .filter(|(_, status)| *status != BookingStatus::Cancelled)
            .map(|(span, _)| span)
            .collect();
        Self {
            spans,
            closed: false,
        }
    }

    /// Build a calendar from spans that are already known to be active.
    pub fn from_spans(spans: Vec<DateSpan>) -> Self {
        Self {
            spans,
            closed: false,
        }
    }

    /// The fail-closed calendar: every date reads as unavailable.
    pub fn closed() -> Self {
        Self {
            spans: Vec::new(),
            closed: true,
        }
    }

    /// Whether this calendar is in the fail-closed state.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The active (non-cancelled) booked spans.
    pub fn spans(&self) -> &[DateSpan] {
        &self.spans
    }

    /// Whether `date` is occupied by any active booking.
    pub fn is_date_booked(&self, date: NaiveDate) -> bool {
        self.spans.iter().any(|span| span.contains(date))
    }

    /// Whether `date` can be offered as a check-in choice.
    ///
    /// Past dates (strictly before `today`) and booked dates are out. On a
    /// closed calendar nothing is selectable.
    pub fn is_selectable_check_in(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if self.closed || date < today {
            return false;
        }
        !self.is_date_booked(date)
    }

    /// Whether `date` can be offered as a check-out choice for a stay
    /// beginning at `check_in`.
    ///
    /// Requires `date > check_in` and every night of `[check_in, date)` to
    /// be free; `date` itself must not be booked either.
    pub fn is_selectable_check_out(&self, check_in: NaiveDate, date: NaiveDate) -> bool {
        if self.closed || date <= check_in {
            return false;
        }
        if self.first_conflict(check_in, date).is_some() {
            return false;
        }
        !self.is_date_booked(date)
    }

    /// Authoritative validation of a fully chosen range.
    ///
    /// Re-walks every date in `[check_in, check_out)` and reports the first
    /// conflicting one. This runs again server-side immediately before the
    /// booking row is inserted, closing the race between calendar rendering
    /// and submission.
    pub fn validate_range(
        &self,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<(), AvailabilityError> {
        if self.closed {
            return Err(AvailabilityError::Closed);
        }
        if check_out <= check_in {
            return Err(AvailabilityError::InvalidRange {
                check_in,
                check_out,
            });
        }
        if let Some(conflicting) = self.first_conflict(check_in, check_out) {
            return Err(AvailabilityError::Overlap { conflicting });
        }
        Ok(())
    }

    /// All occupied dates within `[from, to)`, for calendar cell disabling.
    pub fn unavailable_dates(&self, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut current = from;
        while current < to {
            if self.is_date_booked(current) {
                dates.push(current);
            }
            current = match current.checked_add_days(Days::new(1)) {
                Some(next) => next,
                None => break,
            };
        }
        dates
    }

    /// First booked date in `[from, to)`, if any.
    fn first_conflict(&self, from: NaiveDate, to: NaiveDate) -> Option<NaiveDate> {
        let mut current = from;
        while current < to {
            if self.is_date_booked(current) {
                return Some(current);
            }
            current = current.checked_add_days(Days::new(1))?;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn calendar(spans: &[(&str, &str)]) -> RoomCalendar {
        RoomCalendar::from_spans(
            spans
                .iter()
                .map(|(a, b)| DateSpan::new(d(a), d(b)))
                .collect(),
        )
    }

    #[test]
    fn test_half_open_boundary() {
        let cal = calendar(&[("2024-06-01", "2024-06-05")]);
        assert!(cal.is_date_booked(d("2024-06-01")));
        assert!(cal.is_date_booked(d("2024-06-04")));
        // Checkout day is free for new arrivals.
        assert!(!cal.is_date_booked(d("2024-06-05")));
        assert!(!cal.is_date_booked(d("2024-05-31")));
    }

    #[test]
    fn test_cancelled_bookings_free_the_interval() {
        let cal = RoomCalendar::new([
            (
                DateSpan::new(d("2024-06-01"), d("2024-06-05")),
                BookingStatus::Cancelled,
            ),
            (
                DateSpan::new(d("2024-06-10"), d("2024-06-12")),
                BookingStatus::Confirmed,
            ),
        ]);
        assert!(!cal.is_date_booked(d("2024-06-02")));
        assert!(cal.is_date_booked(d("2024-06-10")));
    }

    #[test]
    fn test_check_in_rejects_past_and_booked() {
        let cal = calendar(&[("2024-06-01", "2024-06-05")]);
        let today = d("2024-05-20");
        assert!(!cal.is_selectable_check_in(d("2024-05-19"), today));
        assert!(cal.is_selectable_check_in(d("2024-05-20"), today));
        assert!(!cal.is_selectable_check_in(d("2024-06-03"), today));
        // Checkout day of the existing booking is a valid arrival day.
        assert!(cal.is_selectable_check_in(d("2024-06-05"), today));
    }

    #[test]
    fn test_check_out_requires_free_range() {
        let cal = calendar(&[("2024-06-10", "2024-06-12")]);
        let check_in = d("2024-06-05");
        assert!(cal.is_selectable_check_out(check_in, d("2024-06-09")));
        // The next arrival's check-in day is itself booked, so it cannot be
        // picked as a checkout in the calendar.
        assert!(!cal.is_selectable_check_out(check_in, d("2024-06-10")));
        // Crossing into the existing booking is not selectable either.
        assert!(!cal.is_selectable_check_out(check_in, d("2024-06-11")));
        assert!(!cal.is_selectable_check_out(check_in, d("2024-06-15")));
        // Not after check-in.
        assert!(!cal.is_selectable_check_out(check_in, check_in));
        assert!(!cal.is_selectable_check_out(check_in, d("2024-06-01")));
    }

    #[test]
    fn test_validate_range_rejects_overlap_with_first_conflict() {
        let cal = calendar(&[("2024-07-01", "2024-07-10")]);
        let err = cal
            .validate_range(d("2024-07-05"), d("2024-07-08"))
            .unwrap_err();
        assert_eq!(
            err,
            AvailabilityError::Overlap {
                conflicting: d("2024-07-05")
            }
        );

        // The same candidate on an empty calendar (different room) passes.
        let other = calendar(&[]);
        assert!(other.validate_range(d("2024-07-05"), d("2024-07-08")).is_ok());
    }

    #[test]
    fn test_validate_range_rejects_zero_night_stay() {
        let cal = calendar(&[]);
        let err = cal
            .validate_range(d("2024-07-05"), d("2024-07-05"))
            .unwrap_err();
        assert!(matches!(err, AvailabilityError::InvalidRange { .. }));

        let err = cal
            .validate_range(d("2024-07-05"), d("2024-07-01"))
            .unwrap_err();
        assert!(matches!(err, AvailabilityError::InvalidRange { .. }));
    }

    #[test]
    fn test_validate_range_allows_back_to_back_stays() {
        let cal = calendar(&[("2024-07-01", "2024-07-10")]);
        // Ending exactly at their check-in and starting at their check-out.
        assert!(cal.validate_range(d("2024-06-28"), d("2024-07-01")).is_ok());
        assert!(cal.validate_range(d("2024-07-10"), d("2024-07-14")).is_ok());
    }

    #[test]
    fn test_closed_calendar_fails_closed() {
        let cal = RoomCalendar::closed();
        let today = d("2024-06-01");
        for offset in 0..30u64 {
            let date = today.checked_add_days(Days::new(offset)).unwrap();
            assert!(!cal.is_selectable_check_in(date, today));
        }
        assert!(!cal.is_selectable_check_out(d("2024-06-01"), d("2024-06-05")));
        assert_eq!(
            cal.validate_range(d("2024-06-01"), d("2024-06-05")),
            Err(AvailabilityError::Closed)
        );
    }

    #[test]
    fn test_unavailable_dates_window() {
        let cal = calendar(&[("2024-06-03", "2024-06-05")]);
        let dates = cal.unavailable_dates(d("2024-06-01"), d("2024-06-08"));
        assert_eq!(dates, vec![d("2024-06-03"), d("2024-06-04")]);
    }

    #[test]
    fn test_span_overlap_is_symmetric() {
        let a = DateSpan::new(d("2024-07-01"), d("2024-07-10"));
        let b = DateSpan::new(d("2024-07-09"), d("2024-07-12"));
        let c = DateSpan::new(d("2024-07-10"), d("2024-07-12"));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Touching at the boundary is not an overlap (half-open).
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }
}
