use crate::schema::services;
use chrono::NaiveDateTime;

#[derive(Queryable)]
pub struct Service {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "services"]
pub struct NewService {
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub active: bool,
}

#[derive(AsChangeset, Default)]
#[table_name = "services"]
pub struct UpdateService {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub duration_minutes: Option<i32>,
    pub active: Option<bool>,
}

impl UpdateService {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.price.is_none()
            && self.duration_minutes.is_none()
            && self.active.is_none()
    }
}
