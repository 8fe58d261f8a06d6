use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchServiceItem {
    pub service_id: u64,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Default, Serialize)]
pub struct SearchServiceResponse {
    pub success: bool,
    pub err: String,
    pub services: Vec<SearchServiceItem>,
}

#[derive(Default, Serialize)]
pub struct SearchConfigItem {
    pub config_id: u64,
    pub config_type: String,
    pub weekday: Option<i32>,
    pub specific_date: Option<String>,
    pub open_time: String,
    pub close_time: String,
    pub has_lunch_break: bool,
    pub lunch_start: Option<String>,
    pub lunch_end: Option<String>,
    pub active: bool,
}

#[derive(Default, Serialize)]
pub struct SearchConfigResponse {
    pub success: bool,
    pub err: String,
    pub configs: Vec<SearchConfigItem>,
}

#[derive(Default, Serialize)]
pub struct BookingItem {
    pub booking_id: u64,
    pub customer_name: String,
    pub telephone: String,
    pub services: Vec<String>,
    pub date: String,
    pub start_time: String,
    pub price: f64,
    pub status: String,
    pub created_at: String,
}

#[derive(Default, Serialize)]
pub struct SearchBookingResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<BookingItem>,
}

#[derive(Default, Serialize)]
pub struct ViewBookingResponse {
    pub success: bool,
    pub err: String,
    pub booking: BookingItem,
}

#[derive(Default, Serialize)]
pub struct SearchBlockedSlotItem {
    pub slot_id: u64,
    pub date: String,
    pub start_time: String,
    pub reason: Option<String>,
}

#[derive(Default, Serialize)]
pub struct SearchBlockedSlotResponse {
    pub success: bool,
    pub err: String,
    pub blocked_slots: Vec<SearchBlockedSlotItem>,
}

#[derive(Default, Serialize)]
pub struct FinanceSummaryResponse {
    pub success: bool,
    pub err: String,
    pub bookings: Vec<BookingItem>,
    pub total_billed: f64,
    pub total_completed: f64,
    pub total_bookings: i64,
}

#[derive(Default, Serialize)]
pub struct SearchClientItem {
    pub customer_name: String,
    pub telephone: String,
}

#[derive(Default, Serialize)]
pub struct SearchClientResponse {
    pub success: bool,
    pub err: String,
    pub clients: Vec<SearchClientItem>,
}

crate::impl_err_response! {
    SearchServiceResponse,
    SearchConfigResponse,
    SearchBookingResponse,
    ViewBookingResponse,
    SearchBlockedSlotResponse,
    FinanceSummaryResponse,
    SearchClientResponse,
}
