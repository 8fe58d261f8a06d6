use crate::schema::blocked_slots;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Queryable)]
pub struct BlockedSlotRow {
    pub id: u64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "blocked_slots"]
pub struct NewBlockedSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub reason: Option<String>,
}
