use std::collections::HashMap;

use anyhow::Context;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::MysqlConnection;

use crate::{
    models::bookings::{split_service_list, HOLDING_STATUSES},
    models::services::Service,
    schedule::{self, resolve, BlockedSlot, ExistingBooking, TimeOfDay},
};

/// Price and duration lookup maps over the active services.
pub fn active_service_maps(
    conn: &MysqlConnection,
) -> anyhow::Result<(HashMap<String, f64>, HashMap<String, i32>)> {
    use crate::schema::services;

    let rows = services::table
        .filter(services::active.eq(true))
        .get_results::<Service>(conn)
        .context("DB error")?;

    let mut prices = HashMap::new();
    let mut durations = HashMap::new();
    for row in rows {
        prices.insert(row.name.clone(), row.price);
        durations.insert(row.name, row.duration_minutes);
    }
    Ok((prices, durations))
}

/// Bookings holding a slot on `date`, with their occupied duration resolved
/// from the persisted service list.
pub fn load_holding_bookings(
    conn: &MysqlConnection,
    date: NaiveDate,
    durations: &HashMap<String, i32>,
) -> anyhow::Result<Vec<ExistingBooking>> {
    use crate::schema::bookings;

    let rows = bookings::table
        .filter(bookings::date.eq(date))
        .filter(bookings::status.eq_any(&HOLDING_STATUSES))
        .select((bookings::start_time, bookings::services))
        .get_results::<(chrono::NaiveTime, String)>(conn)
        .context("DB error")?;

    Ok(rows
        .into_iter()
        .map(|(start_time, services)| ExistingBooking {
            start_time: TimeOfDay::from_naive(start_time),
            duration_minutes: schedule::total_duration(&split_service_list(&services), durations),
        })
        .collect())
}

pub fn load_blocked_slots(
    conn: &MysqlConnection,
    date: NaiveDate,
) -> anyhow::Result<Vec<BlockedSlot>> {
    use crate::schema::blocked_slots;

    let rows = blocked_slots::table
        .filter(blocked_slots::date.eq(date))
        .select(blocked_slots::start_time)
        .get_results::<chrono::NaiveTime>(conn)
        .context("DB error")?;

    Ok(rows
        .into_iter()
        .map(|start_time| BlockedSlot {
            start_time: TimeOfDay::from_naive(start_time),
        })
        .collect())
}

/// Full availability pipeline for one date: resolve the schedule, gather the
/// day's occupancy and run the engine. Lenient about unknown service names.
pub fn available_slots_for_date(
    conn: &MysqlConnection,
    date: NaiveDate,
    requested_services: &[String],
) -> anyhow::Result<Vec<TimeOfDay>> {
    let day_schedule = resolve::resolve_day_schedule(conn, date)?;
    if !day_schedule.is_open {
        return Ok(Vec::new());
    }

    let (_, durations) = active_service_maps(conn)?;
    let duration = schedule::total_duration(requested_services, &durations);
    let bookings = load_holding_bookings(conn, date, &durations)?;
    let blocked = load_blocked_slots(conn, date)?;

    schedule::compute_available_slots(&day_schedule, duration, &bookings, &blocked)
}
