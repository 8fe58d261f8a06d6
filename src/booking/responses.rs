use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchSlotsResponse {
    pub success: bool,
    pub err: String,
    pub date: String,
    pub slots: Vec<String>,
    pub periods: Vec<&'static str>,
}

#[derive(Default, Serialize)]
pub struct MonthAvailabilityResponse {
    pub success: bool,
    pub err: String,
    pub availability: BTreeMap<String, Vec<String>>,
}

#[derive(Default, Serialize)]
pub struct BookResponse {
    pub success: bool,
    pub err: String,
    pub booking_id: u64,
    pub price: f64,
}

#[derive(Default, Serialize)]
pub struct SearchServiceItem {
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
}

#[derive(Default, Serialize)]
pub struct SearchServiceResponse {
    pub success: bool,
    pub err: String,
    pub services: Vec<SearchServiceItem>,
}

crate::impl_err_response! {
    SearchSlotsResponse,
    MonthAvailabilityResponse,
    BookResponse,
    SearchServiceResponse,
}
