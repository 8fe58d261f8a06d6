use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddServiceRequest {
    pub service_name: String,
    pub price: f64,
    pub duration_minutes: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Deserialize)]
pub struct ModifyServiceRequest {
    pub service_id: u64,
    pub service_name: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct DeleteServiceRequest {
    pub service_id: u64,
}

#[derive(Deserialize)]
pub struct SearchServiceRequest {
    pub service_name: Option<String>,
}

#[derive(Deserialize)]
pub struct AddConfigRequest {
    pub config_type: String,
    pub weekday: Option<i32>,
    pub specific_date: Option<String>,
    pub open_time: String,
    pub close_time: String,
    #[serde(default = "default_true")]
    pub has_lunch_break: bool,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Deserialize)]
pub struct ModifyConfigRequest {
    pub config_id: u64,
    pub open_time: Option<String>,
    pub close_time: Option<String>,
    pub has_lunch_break: Option<bool>,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct DeleteConfigRequest {
    pub config_id: u64,
}

#[derive(Deserialize)]
pub struct SearchConfigRequest {
    pub config_type: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchBookingRequest {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<String>,
    pub customer_name: Option<String>,
    pub telephone: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewBookingRequest {
    pub booking_id: u64,
}

#[derive(Deserialize)]
pub struct ModifyBookingRequest {
    pub booking_id: u64,
    pub customer_name: Option<String>,
    pub telephone: Option<String>,
    pub services: Option<Vec<String>>,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub price: Option<f64>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteBookingRequest {
    pub booking_id: u64,
}

#[derive(Deserialize)]
pub struct AddBlockedSlotRequest {
    pub date: String,
    pub start_time: String,
    pub reason: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteBlockedSlotRequest {
    pub slot_id: u64,
}

#[derive(Deserialize)]
pub struct SearchBlockedSlotRequest {
    pub date: Option<String>,
}

#[derive(Deserialize)]
pub struct FinanceSummaryRequest {
    /// `YYYY-MM`, shorthand for a whole-month date range.
    pub month: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<String>,
    pub customer_name: Option<String>,
}

#[derive(Deserialize)]
pub struct SearchClientRequest {
    pub customer_name: Option<String>,
}

fn default_true() -> bool {
    true
}
