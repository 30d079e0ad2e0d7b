//! HTML templates for reservation mail.

use chrono::NaiveDate;
use uuid::Uuid;

use bahari_core::traits::OutboundEmail;

/// Everything the reservation templates need about a booking.
#[derive(Debug, Clone)]
pub struct BookingSummary {
    pub booking_id: Uuid,
    pub guest_name: String,
    pub guest_email: String,
    pub room_name: String,
    pub package_name: Option<String>,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub nights: i64,
    pub adults: i32,
    pub children: i32,
    /// Total in whole KES.
    pub total_price: i64,
    pub payment_id: Option<String>,
}

impl BookingSummary {
    /// Booking confirmation sent right after the reservation is created.
    pub fn confirmation_email(&self) -> OutboundEmail {
        OutboundEmail {
            to: self.guest_email.clone(),
            subject: format!("Booking Confirmation - Bahari Hotel #{}", self.short_ref()),
            html_body: format!(
                "<div style=\"font-family: sans-serif; max-width: 600px;\">\
                 <h2>Thank you for your reservation, {guest}!</h2>\
                 <p>We have received your booking and are holding your room. \
                 Your reservation is pending until payment is completed.</p>\
                 {details}\
                 <p>If you have any questions, reply to this email and our \
                 front desk will be happy to help.</p>\
                 <p>Karibu sana,<br/>Bahari Hotel</p>\
                 </div>",
                guest = escape_html(&self.guest_name),
                details = self.details_table(),
            ),
        }
    }

    /// Payment receipt sent once the booking is paid and confirmed.
    pub fn receipt_email(&self) -> OutboundEmail {
        let payment_line = self
            .payment_id
            .as_deref()
            .map(|id| {
                format!(
                    "<tr><td><strong>Payment reference</strong></td><td>{}</td></tr>",
                    escape_html(id)
                )
            })
            .unwrap_or_default();

        OutboundEmail {
            to: self.guest_email.clone(),
            subject: format!("Payment Receipt - Bahari Hotel #{}", self.short_ref()),
            html_body: format!(
                "<div style=\"font-family: sans-serif; max-width: 600px;\">\
                 <h2>Payment received</h2>\
                 <p>Dear {guest}, your payment of {total} has been received \
                 and your booking is now confirmed.</p>\
                 {details}\
                 <table style=\"width: 100%;\">{payment_line}</table>\
                 <p>We look forward to welcoming you.</p>\
                 <p>Karibu sana,<br/>Bahari Hotel</p>\
                 </div>",
                guest = escape_html(&self.guest_name),
                total = format_kes(self.total_price),
                details = self.details_table(),
            ),
        }
    }

    fn details_table(&self) -> String {
        let package_row = self
            .package_name
            .as_deref()
            .map(|name| {
                format!(
                    "<tr><td><strong>Package</strong></td><td>{}</td></tr>",
                    escape_html(name)
                )
            })
            .unwrap_or_default();

        format!(
            "<table style=\"width: 100%; border-collapse: collapse;\">\
             <tr><td><strong>Booking reference</strong></td><td>#{reference}</td></tr>\
             <tr><td><strong>Room</strong></td><td>{room}</td></tr>\
             {package_row}\
             <tr><td><strong>Check-in</strong></td><td>{check_in}</td></tr>\
             <tr><td><strong>Check-out</strong></td><td>{check_out}</td></tr>\
             <tr><td><strong>Nights</strong></td><td>{nights}</td></tr>\
             <tr><td><strong>Guests</strong></td><td>{adults} adult(s), {children} child(ren)</td></tr>\
             <tr><td><strong>Total</strong></td><td>{total}</td></tr>\
             </table>",
            reference = self.short_ref(),
            room = escape_html(&self.room_name),
            check_in = self.check_in_date,
            check_out = self.check_out_date,
            nights = self.nights,
            adults = self.adults,
            children = self.children,
            total = format_kes(self.total_price),
        )
    }

    /// Short booking reference shown to guests.
    fn short_ref(&self) -> String {
        self.booking_id.simple().to_string()[..8].to_uppercase()
    }
}

/// Contact form submission forwarded to the front desk mailbox.
pub fn contact_email(
    front_desk: &str,
    name: &str,
    reply_to: &str,
    subject: &str,
    message: &str,
) -> OutboundEmail {
    OutboundEmail {
        to: front_desk.to_string(),
        subject: format!("Contact form: {subject}"),
        html_body: format!(
            "<div style=\"font-family: sans-serif; max-width: 600px;\">\
             <p><strong>From:</strong> {name} &lt;{reply_to}&gt;</p>\
             <p>{message}</p>\
             </div>",
            name = escape_html(name),
            reply_to = escape_html(reply_to),
            message = escape_html(message).replace('\n', "<br/>"),
        ),
    }
}

/// Format a whole-KES amount with thousands separators.
pub fn format_kes(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-KES {grouped}")
    } else {
        format!("KES {grouped}")
    }
}

/// Minimal HTML escaping for guest-supplied text.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> BookingSummary {
        BookingSummary {
            booking_id: Uuid::new_v4(),
            guest_name: "Amina Odhiambo".to_string(),
            guest_email: "amina@example.com".to_string(),
            room_name: "Ocean View Suite".to_string(),
            package_name: Some("Half Board".to_string()),
            check_in_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            check_out_date: NaiveDate::from_ymd_opt(2026, 9, 13).unwrap(),
            nights: 3,
            adults: 2,
            children: 1,
            total_price: 36_000,
            payment_id: Some("sim_abc123".to_string()),
        }
    }

    #[test]
    fn test_format_kes() {
        assert_eq!(format_kes(0), "KES 0");
        assert_eq!(format_kes(950), "KES 950");
        assert_eq!(format_kes(36_000), "KES 36,000");
        assert_eq!(format_kes(1_234_567), "KES 1,234,567");
    }

    #[test]
    fn test_confirmation_email_contains_details() {
        let email = summary().confirmation_email();
        assert_eq!(email.to, "amina@example.com");
        assert!(email.html_body.contains("Ocean View Suite"));
        assert!(email.html_body.contains("Half Board"));
        assert!(email.html_body.contains("KES 36,000"));
        assert!(email.html_body.contains("2026-09-10"));
    }

    #[test]
    fn test_receipt_email_contains_payment_reference() {
        let email = summary().receipt_email();
        assert!(email.html_body.contains("sim_abc123"));
        assert!(email.subject.contains("Receipt"));
    }

    #[test]
    fn test_contact_email_escapes_markup() {
        let email = contact_email(
            "frontdesk@baharihotel.com",
            "Guest <script>",
            "guest@example.com",
            "Hello",
            "line one\nline two",
        );
        assert!(!email.html_body.contains("<script>"));
        assert!(email.html_body.contains("line one<br/>line two"));
    }
}
