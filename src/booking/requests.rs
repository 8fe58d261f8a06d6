use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchSlotsRequest {
    pub date: String,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Deserialize)]
pub struct MonthAvailabilityRequest {
    pub year: i32,
    pub month: u32,
}

#[derive(Deserialize)]
pub struct BookRequest {
    pub customer_name: String,
    pub telephone: String,
    pub date: String,
    pub start_time: String,
    pub services: Vec<String>,
}

#[derive(Deserialize)]
pub struct SearchServiceRequest {
    pub service_name: Option<String>,
}
