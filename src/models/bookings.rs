use crate::schema::bookings;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Queryable)]
pub struct Booking {
    pub id: u64,
    pub customer_name: String,
    pub telephone: String,
    pub services: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub price: f64,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "bookings"]
pub struct NewBooking {
    pub customer_name: String,
    pub telephone: String,
    pub services: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub price: f64,
    pub status: String,
}

#[derive(AsChangeset, Default)]
#[table_name = "bookings"]
pub struct UpdateBooking {
    pub customer_name: Option<String>,
    pub telephone: Option<String>,
    pub services: Option<String>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub price: Option<f64>,
    pub status: Option<String>,
}

impl UpdateBooking {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.telephone.is_none()
            && self.services.is_none()
            && self.date.is_none()
            && self.start_time.is_none()
            && self.price.is_none()
            && self.status.is_none()
    }
}

pub const BOOKING_STATUS_PENDING: &str = "pending";
pub const BOOKING_STATUS_CONFIRMED: &str = "confirmed";
pub const BOOKING_STATUS_CANCELLED: &str = "cancelled";
pub const BOOKING_STATUS_COMPLETED: &str = "completed";

/// Statuses that hold a slot for availability purposes.
pub const HOLDING_STATUSES: [&str; 2] = [BOOKING_STATUS_PENDING, BOOKING_STATUS_CONFIRMED];

pub fn is_valid_status(status: &str) -> bool {
    matches!(
        status,
        BOOKING_STATUS_PENDING
            | BOOKING_STATUS_CONFIRMED
            | BOOKING_STATUS_CANCELLED
            | BOOKING_STATUS_COMPLETED
    )
}

/// A booking's service list is persisted as a comma-joined string.
pub fn split_service_list(services: &str) -> Vec<String> {
    services
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn join_service_list(services: &[String]) -> String {
    services.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_list_round_trip() {
        let joined = join_service_list(&["Gel Polish".to_string(), "Gel Soak".to_string()]);
        assert_eq!(split_service_list(&joined), vec!["Gel Polish", "Gel Soak"]);
    }

    #[test]
    fn service_list_skips_blanks() {
        assert_eq!(split_service_list(" , Gel Polish ,, "), vec!["Gel Polish"]);
        assert!(split_service_list("").is_empty());
    }

    #[test]
    fn empty_patch_detected() {
        assert!(UpdateBooking::default().is_empty());
        let patch = UpdateBooking {
            status: Some(BOOKING_STATUS_CONFIRMED.to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
