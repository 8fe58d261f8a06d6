use crate::schema::schedule_configs;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Queryable)]
pub struct ScheduleConfig {
    pub id: u64,
    pub config_type: String,
    pub weekday: Option<i32>,
    pub specific_date: Option<NaiveDate>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub has_lunch_break: bool,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "schedule_configs"]
pub struct NewScheduleConfig {
    pub config_type: String,
    pub weekday: Option<i32>,
    pub specific_date: Option<NaiveDate>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub has_lunch_break: bool,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub active: bool,
}

#[derive(AsChangeset, Default)]
#[table_name = "schedule_configs"]
pub struct UpdateScheduleConfig {
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
    pub has_lunch_break: Option<bool>,
    pub lunch_start: Option<NaiveTime>,
    pub lunch_end: Option<NaiveTime>,
    pub active: Option<bool>,
}

impl UpdateScheduleConfig {
    pub fn is_empty(&self) -> bool {
        self.open_time.is_none()
            && self.close_time.is_none()
            && self.has_lunch_break.is_none()
            && self.lunch_start.is_none()
            && self.lunch_end.is_none()
            && self.active.is_none()
    }
}

/// A config row applies either to one weekday or to one specific date.
pub const CONFIG_TYPE_WEEKDAY: &str = "weekday";
pub const CONFIG_TYPE_SPECIFIC_DATE: &str = "specific_date";
