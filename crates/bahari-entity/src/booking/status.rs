//! Booking lifecycle and payment status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// A booking starts `pending` when the reservation flow creates it, becomes
/// `confirmed` on successful payment, may be `cancelled` by an administrator
/// at any point before completion, and moves to `completed` once the stay is
/// over. Rows are never deleted by the core flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created by the reservation flow; payment outstanding.
    Pending,
    /// Payment captured; the stay will happen.
    Confirmed,
    /// Cancelled; the date interval is freed immediately.
    Cancelled,
    /// The stay is over.
    Completed,
}

impl BookingStatus {
    /// Whether a transition to `next` is legal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::Confirmed, Self::Completed)
        )
    }

    /// Whether this booking still occupies its date interval.
    pub fn occupies_dates(&self) -> bool {
        !matches!(self, Self::Cancelled)
    }

    /// Whether the booking is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Completed)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = bahari_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            "completed" => Ok(Self::Completed),
            _ => Err(bahari_core::AppError::validation(format!(
                "Invalid booking status: '{s}'. Expected one of: pending, confirmed, cancelled, completed"
            ))),
        }
    }
}

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// No payment captured yet.
    Unpaid,
    /// Payment captured.
    Paid,
    /// Payment returned after cancellation.
    Refunded,
}

impl PaymentStatus {
    /// Whether a transition to `next` is legal.
    pub fn can_transition_to(&self, next: PaymentStatus) -> bool {
        matches!(
            (self, next),
            (Self::Unpaid, Self::Paid) | (Self::Paid, Self::Refunded)
        )
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stage of the reservation wizard, derived from persisted state.
///
/// The multi-step flow (room selection → guest details → payment) is
/// persisted server-side per booking id; the stage is a pure function of
/// `(status, payment_status)` so browser storage is never load-bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStage {
    /// No booking row yet.
    SelectingRoom,
    /// Booking exists but guest details were incomplete at creation —
    /// unreachable through the API, which requires them; kept for parity
    /// with the wizard's named states.
    EnteringGuestDetails,
    /// Booking is pending and unpaid.
    AwaitingPayment,
    /// Payment captured.
    Confirmed,
    /// Booking was cancelled; the flow is over.
    Cancelled,
}

impl ReservationStage {
    /// Derive the stage from the persisted status pair.
    pub fn from_status(status: BookingStatus, payment: PaymentStatus) -> Self {
        match (status, payment) {
            (BookingStatus::Cancelled, _) => Self::Cancelled,
            (BookingStatus::Pending, PaymentStatus::Unpaid) => Self::AwaitingPayment,
            _ => Self::Confirmed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_transitions() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn test_illegal_transitions() {
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
        assert!(!BookingStatus::Completed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn test_payment_transitions() {
        assert!(PaymentStatus::Unpaid.can_transition_to(PaymentStatus::Paid));
        assert!(PaymentStatus::Paid.can_transition_to(PaymentStatus::Refunded));
        assert!(!PaymentStatus::Unpaid.can_transition_to(PaymentStatus::Refunded));
        assert!(!PaymentStatus::Refunded.can_transition_to(PaymentStatus::Paid));
    }

    #[test]
    fn test_cancelled_frees_dates() {
        assert!(BookingStatus::Pending.occupies_dates());
        assert!(BookingStatus::Confirmed.occupies_dates());
        assert!(BookingStatus::Completed.occupies_dates());
        assert!(!BookingStatus::Cancelled.occupies_dates());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "confirmed".parse::<BookingStatus>().unwrap(),
            BookingStatus::Confirmed
        );
        assert!("unknown".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_stage_derivation() {
        assert_eq!(
            ReservationStage::from_status(BookingStatus::Pending, PaymentStatus::Unpaid),
            ReservationStage::AwaitingPayment
        );
        assert_eq!(
            ReservationStage::from_status(BookingStatus::Confirmed, PaymentStatus::Paid),
            ReservationStage::Confirmed
        );
        assert_eq!(
            ReservationStage::from_status(BookingStatus::Cancelled, PaymentStatus::Unpaid),
            ReservationStage::Cancelled
        );
        assert_eq!(
            ReservationStage::from_status(BookingStatus::Cancelled, PaymentStatus::Refunded),
            ReservationStage::Cancelled
        );
    }
}
