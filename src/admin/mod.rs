mod requests;
mod responses;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{
    database::{assert, get_db_conn, last_insert_id},
    models::{
        blocked_slots::{BlockedSlotRow, NewBlockedSlot},
        bookings::{is_valid_status, join_service_list, split_service_list, Booking, UpdateBooking},
        schedule_configs::{
            NewScheduleConfig, ScheduleConfig, UpdateScheduleConfig, CONFIG_TYPE_SPECIFIC_DATE,
            CONFIG_TYPE_WEEKDAY,
        },
        services::{NewService, Service, UpdateService},
    },
    protocol::{IdResponse, SimpleResponse},
    schedule::{DaySchedule, TimeOfDay},
    DbPool,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(add_service)
        .service(modify_service)
        .service(delete_service)
        .service(search_service)
        .service(add_config)
        .service(modify_config)
        .service(delete_config)
        .service(search_config)
        .service(search_booking)
        .service(view_booking)
        .service(modify_booking)
        .service(delete_booking)
        .service(add_blocked_slot)
        .service(delete_blocked_slot)
        .service(search_blocked_slot)
        .service(finance_summary)
        .service(search_client);
}

crate::post_funcs! {
    (add_service, "/add_service", AddServiceRequest, IdResponse),
    (modify_service, "/modify_service", ModifyServiceRequest, SimpleResponse),
    (delete_service, "/delete_service", DeleteServiceRequest, SimpleResponse),
    (search_service, "/search_service", SearchServiceRequest, SearchServiceResponse),
    (add_config, "/add_config", AddConfigRequest, IdResponse),
    (modify_config, "/modify_config", ModifyConfigRequest, SimpleResponse),
    (delete_config, "/delete_config", DeleteConfigRequest, SimpleResponse),
    (search_config, "/search_config", SearchConfigRequest, SearchConfigResponse),
    (search_booking, "/search_booking", SearchBookingRequest, SearchBookingResponse),
    (view_booking, "/view_booking", ViewBookingRequest, ViewBookingResponse),
    (modify_booking, "/modify_booking", ModifyBookingRequest, SimpleResponse),
    (delete_booking, "/delete_booking", DeleteBookingRequest, SimpleResponse),
    (add_blocked_slot, "/add_blocked_slot", AddBlockedSlotRequest, IdResponse),
    (delete_blocked_slot, "/delete_blocked_slot", DeleteBlockedSlotRequest, SimpleResponse),
    (search_blocked_slot, "/search_blocked_slot", SearchBlockedSlotRequest, SearchBlockedSlotResponse),
    (finance_summary, "/finance_summary", FinanceSummaryRequest, FinanceSummaryResponse),
    (search_client, "/search_client", SearchClientRequest, SearchClientResponse),
}

fn is_unique_violation(err: &diesel::result::Error) -> bool {
    matches!(
        err,
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )
    )
}

async fn add_service_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddServiceRequest>,
) -> anyhow::Result<IdResponse> {
    use crate::schema::services;

    let info = info.into_inner();

    let name = info.service_name.trim().to_string();
    if name.is_empty() {
        bail!("Service name is required");
    }
    if info.price < 0.0 {
        bail!("Invalid price");
    }
    if info.duration_minutes <= 0 {
        bail!("Invalid duration");
    }

    let conn = get_db_conn(&pool)?;
    let data = NewService {
        name,
        price: info.price,
        duration_minutes: info.duration_minutes,
        active: info.active,
    };
    let service_id = web::block(move || {
        conn.transaction(|| {
            match diesel::insert_into(services::table).values(data).execute(&conn) {
                Err(ref err) if is_unique_violation(err) => {
                    bail!("Service name already exists")
                }
                res => {
                    res.context("DB error")?;
                }
            }
            diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")
        })
    })
    .await?;

    Ok(IdResponse::ok(service_id))
}

async fn modify_service_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ModifyServiceRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::services;

    let info = info.into_inner();
    assert::assert_service(&pool, info.service_id).await?;

    let name = match info.service_name {
        Some(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                bail!("Service name must not be empty");
            }
            Some(name)
        }
        None => None,
    };
    if matches!(info.price, Some(price) if price < 0.0) {
        bail!("Invalid price");
    }
    if matches!(info.duration_minutes, Some(duration) if duration <= 0) {
        bail!("Invalid duration");
    }

    let data = UpdateService {
        name,
        price: info.price,
        duration_minutes: info.duration_minutes,
        active: info.active,
    };
    if data.is_empty() {
        bail!("No fields to update");
    }

    let conn = get_db_conn(&pool)?;
    let service_id = info.service_id;
    web::block(move || {
        match diesel::update(services::table.filter(services::id.eq(service_id)))
            .set(&data)
            .execute(&conn)
        {
            Err(ref err) if is_unique_violation(err) => bail!("Service name already exists"),
            res => {
                res.context("DB error")?;
            }
        }
        Ok(())
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn delete_service_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteServiceRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::services;

    let info = info.into_inner();
    assert::assert_service(&pool, info.service_id).await?;

    let conn = get_db_conn(&pool)?;
    let service_id = info.service_id;
    web::block(move || {
        diesel::delete(services::table.filter(services::id.eq(service_id))).execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn search_service_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchServiceRequest>,
) -> anyhow::Result<SearchServiceResponse> {
    use crate::schema::services;

    let info = info.into_inner();

    let conn = get_db_conn(&pool)?;
    let name_pattern = crate::utils::get_str_pattern_opt(info.service_name);
    let rows = web::block(move || {
        services::table
            .filter(services::name.like(name_pattern))
            .order(services::name.asc())
            .get_results::<Service>(&conn)
    })
    .await
    .context("DB error")?;

    let rows = rows
        .into_iter()
        .map(|data| SearchServiceItem {
            service_id: data.id,
            name: data.name,
            price: data.price,
            duration_minutes: data.duration_minutes,
            active: data.active,
            created_at: crate::utils::format_datetime_str(&data.created_at),
            updated_at: crate::utils::format_datetime_str(&data.updated_at),
        })
        .collect();

    Ok(SearchServiceResponse {
        success: true,
        err: "".to_string(),
        services: rows,
    })
}

fn parse_lunch_bounds(
    has_lunch_break: bool,
    lunch_start: Option<&str>,
    lunch_end: Option<&str>,
) -> anyhow::Result<Option<(TimeOfDay, TimeOfDay)>> {
    if !has_lunch_break {
        return Ok(None);
    }
    match (lunch_start, lunch_end) {
        (Some(start), Some(end)) => Ok(Some((TimeOfDay::parse(start)?, TimeOfDay::parse(end)?))),
        _ => bail!("Lunch break times are required"),
    }
}

async fn add_config_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddConfigRequest>,
) -> anyhow::Result<IdResponse> {
    use crate::schema::schedule_configs;

    let info = info.into_inner();

    let (weekday, specific_date) = match info.config_type.as_str() {
        CONFIG_TYPE_WEEKDAY => {
            let weekday = info.weekday.context("Weekday is required")?;
            if !(0..=6).contains(&weekday) {
                bail!("Weekday must be between 0 (Sunday) and 6 (Saturday)");
            }
            (Some(weekday), None)
        }
        CONFIG_TYPE_SPECIFIC_DATE => {
            let date = info.specific_date.context("Specific date is required")?;
            (None, Some(crate::utils::parse_date_str(date)?))
        }
        _ => bail!("Invalid config type"),
    };

    let open_time = TimeOfDay::parse(&info.open_time)?;
    let close_time = TimeOfDay::parse(&info.close_time)?;
    let lunch_break = parse_lunch_bounds(
        info.has_lunch_break,
        info.lunch_start.as_deref(),
        info.lunch_end.as_deref(),
    )?;

    // Contradictory hours are rejected up front, not at query time.
    let schedule = DaySchedule {
        is_open: true,
        open_time,
        close_time,
        lunch_break,
    };
    schedule.validate()?;

    let data = NewScheduleConfig {
        config_type: info.config_type,
        weekday,
        specific_date,
        open_time: open_time.to_naive(),
        close_time: close_time.to_naive(),
        has_lunch_break: info.has_lunch_break,
        lunch_start: lunch_break.map(|(start, _)| start.to_naive()),
        lunch_end: lunch_break.map(|(_, end)| end.to_naive()),
        active: info.active,
    };

    let conn = get_db_conn(&pool)?;
    let config_id = web::block(move || {
        conn.transaction(|| {
            match diesel::insert_into(schedule_configs::table)
                .values(data)
                .execute(&conn)
            {
                Err(ref err) if is_unique_violation(err) => {
                    bail!("Config already exists for that day")
                }
                res => {
                    res.context("DB error")?;
                }
            }
            diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")
        })
    })
    .await?;

    Ok(IdResponse::ok(config_id))
}

async fn modify_config_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ModifyConfigRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::schedule_configs;

    let info = info.into_inner();
    assert::assert_schedule_config(&pool, info.config_id).await?;

    let open_time = info.open_time.as_deref().map(TimeOfDay::parse).transpose()?;
    let close_time = info.close_time.as_deref().map(TimeOfDay::parse).transpose()?;
    let lunch_start = info.lunch_start.as_deref().map(TimeOfDay::parse).transpose()?;
    let lunch_end = info.lunch_end.as_deref().map(TimeOfDay::parse).transpose()?;

    let data = UpdateScheduleConfig {
        open_time: open_time.map(TimeOfDay::to_naive),
        close_time: close_time.map(TimeOfDay::to_naive),
        has_lunch_break: info.has_lunch_break,
        lunch_start: lunch_start.map(TimeOfDay::to_naive),
        lunch_end: lunch_end.map(TimeOfDay::to_naive),
        active: info.active,
    };
    if data.is_empty() {
        bail!("No fields to update");
    }

    let conn = get_db_conn(&pool)?;
    let config_id = info.config_id;
    web::block(move || {
        conn.transaction(|| -> anyhow::Result<()> {
            // Validate the merged row, so a patch cannot leave behind a
            // self-contradictory schedule.
            let current = schedule_configs::table
                .filter(schedule_configs::id.eq(config_id))
                .get_result::<ScheduleConfig>(&conn)
                .context("DB error")?;

            let merged_open = open_time
                .unwrap_or_else(|| TimeOfDay::from_naive(current.open_time));
            let merged_close = close_time
                .unwrap_or_else(|| TimeOfDay::from_naive(current.close_time));
            let merged_has_lunch = data.has_lunch_break.unwrap_or(current.has_lunch_break);
            let merged_lunch = if merged_has_lunch {
                let start = lunch_start
                    .or_else(|| current.lunch_start.map(TimeOfDay::from_naive))
                    .context("Lunch break times are required")?;
                let end = lunch_end
                    .or_else(|| current.lunch_end.map(TimeOfDay::from_naive))
                    .context("Lunch break times are required")?;
                Some((start, end))
            } else {
                None
            };

            let schedule = DaySchedule {
                is_open: true,
                open_time: merged_open,
                close_time: merged_close,
                lunch_break: merged_lunch,
            };
            schedule.validate()?;

            diesel::update(schedule_configs::table.filter(schedule_configs::id.eq(config_id)))
                .set(&data)
                .execute(&conn)
                .context("DB error")?;

            Ok(())
        })
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn delete_config_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteConfigRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::schedule_configs;

    let info = info.into_inner();
    assert::assert_schedule_config(&pool, info.config_id).await?;

    let conn = get_db_conn(&pool)?;
    let config_id = info.config_id;
    web::block(move || {
        diesel::delete(schedule_configs::table.filter(schedule_configs::id.eq(config_id)))
            .execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn search_config_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchConfigRequest>,
) -> anyhow::Result<SearchConfigResponse> {
    use crate::schema::schedule_configs;

    let info = info.into_inner();

    let conn = get_db_conn(&pool)?;
    let type_pattern = crate::utils::get_str_pattern_opt(info.config_type);
    let rows = web::block(move || {
        schedule_configs::table
            .filter(schedule_configs::config_type.like(type_pattern))
            .order((
                schedule_configs::config_type.asc(),
                schedule_configs::weekday.asc(),
                schedule_configs::specific_date.asc(),
            ))
            .get_results::<ScheduleConfig>(&conn)
    })
    .await
    .context("DB error")?;

    let rows = rows
        .into_iter()
        .map(|data| SearchConfigItem {
            config_id: data.id,
            config_type: data.config_type,
            weekday: data.weekday,
            specific_date: data.specific_date.as_ref().map(crate::utils::format_date_str),
            open_time: TimeOfDay::from_naive(data.open_time).to_string(),
            close_time: TimeOfDay::from_naive(data.close_time).to_string(),
            has_lunch_break: data.has_lunch_break,
            lunch_start: data
                .lunch_start
                .map(|t| TimeOfDay::from_naive(t).to_string()),
            lunch_end: data.lunch_end.map(|t| TimeOfDay::from_naive(t).to_string()),
            active: data.active,
        })
        .collect();

    Ok(SearchConfigResponse {
        success: true,
        err: "".to_string(),
        configs: rows,
    })
}

fn booking_item(data: Booking) -> BookingItem {
    BookingItem {
        booking_id: data.id,
        customer_name: data.customer_name,
        telephone: data.telephone,
        services: split_service_list(&data.services),
        date: crate::utils::format_date_str(&data.date),
        start_time: TimeOfDay::from_naive(data.start_time).to_string(),
        price: data.price,
        status: data.status,
        created_at: crate::utils::format_datetime_str(&data.created_at),
    }
}

async fn search_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchBookingRequest>,
) -> anyhow::Result<SearchBookingResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();

    let (date_from, date_to) = crate::utils::parse_date_pair_str_opt(info.date_from, info.date_to)?;
    if let Some(status) = info.status.as_deref() {
        if !is_valid_status(status) {
            bail!("Invalid status");
        }
    }

    let conn = get_db_conn(&pool)?;
    let status = info.status.unwrap_or_default();
    let name_pattern = crate::utils::get_str_pattern_opt(info.customer_name);
    let telephone_pattern = crate::utils::get_str_pattern_opt(info.telephone);
    let first_index = info.first_index.unwrap_or(0).max(0);
    let limit = info.limit.unwrap_or(30).max(0);
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::date.between(date_from, date_to))
            .filter((bookings::status.eq(&status)).or(status.is_empty()))
            .filter(bookings::customer_name.like(name_pattern))
            .filter(bookings::telephone.like(telephone_pattern))
            .order((bookings::date.desc(), bookings::start_time.desc()))
            .offset(first_index)
            .limit(limit)
            .get_results::<Booking>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SearchBookingResponse {
        success: true,
        err: "".to_string(),
        bookings: rows.into_iter().map(booking_item).collect(),
    })
}

async fn view_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ViewBookingRequest>,
) -> anyhow::Result<ViewBookingResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();
    assert::assert_booking(&pool, info.booking_id).await?;

    let conn = get_db_conn(&pool)?;
    let booking_id = info.booking_id;
    let data = web::block(move || {
        bookings::table
            .filter(bookings::id.eq(booking_id))
            .get_result::<Booking>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(ViewBookingResponse {
        success: true,
        err: "".to_string(),
        booking: booking_item(data),
    })
}

async fn modify_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<ModifyBookingRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();
    assert::assert_booking(&pool, info.booking_id).await?;

    if let Some(status) = info.status.as_deref() {
        if !is_valid_status(status) {
            bail!("Invalid status");
        }
    }
    if matches!(info.price, Some(price) if price < 0.0) {
        bail!("Invalid price");
    }

    let mut data = UpdateBooking {
        customer_name: info.customer_name,
        telephone: info.telephone,
        services: info.services.as_deref().map(join_service_list),
        price: info.price,
        status: info.status,
        ..Default::default()
    };
    if let Some(date) = info.date {
        data.date = Some(crate::utils::parse_date_str(date)?);
    }
    if let Some(start_time) = info.start_time {
        data.start_time = Some(TimeOfDay::parse(&start_time)?.to_naive());
    }
    if data.is_empty() {
        bail!("No fields to update");
    }

    let conn = get_db_conn(&pool)?;
    let booking_id = info.booking_id;
    web::block(move || {
        match diesel::update(bookings::table.filter(bookings::id.eq(booking_id)))
            .set(&data)
            .execute(&conn)
        {
            // Moving a booking onto an occupied slot trips the unique key.
            Err(ref err) if is_unique_violation(err) => bail!("Slot already booked"),
            res => {
                res.context("DB error")?;
            }
        }
        Ok(())
    })
    .await?;

    Ok(SimpleResponse::ok())
}

async fn delete_booking_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteBookingRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();
    assert::assert_booking(&pool, info.booking_id).await?;

    let conn = get_db_conn(&pool)?;
    let booking_id = info.booking_id;
    web::block(move || {
        diesel::delete(bookings::table.filter(bookings::id.eq(booking_id))).execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn add_blocked_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddBlockedSlotRequest>,
) -> anyhow::Result<IdResponse> {
    use crate::schema::blocked_slots;

    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;
    let start_time = TimeOfDay::parse(&info.start_time)?;

    let data = NewBlockedSlot {
        date,
        start_time: start_time.to_naive(),
        reason: info.reason,
    };

    let conn = get_db_conn(&pool)?;
    let slot_id = web::block(move || {
        conn.transaction(|| {
            match diesel::insert_into(blocked_slots::table)
                .values(data)
                .execute(&conn)
            {
                Err(ref err) if is_unique_violation(err) => bail!("Slot already blocked"),
                res => {
                    res.context("DB error")?;
                }
            }
            diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")
        })
    })
    .await?;

    Ok(IdResponse::ok(slot_id))
}

async fn delete_blocked_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DeleteBlockedSlotRequest>,
) -> anyhow::Result<SimpleResponse> {
    use crate::schema::blocked_slots;

    let info = info.into_inner();
    assert::assert_blocked_slot(&pool, info.slot_id).await?;

    let conn = get_db_conn(&pool)?;
    let slot_id = info.slot_id;
    web::block(move || {
        diesel::delete(blocked_slots::table.filter(blocked_slots::id.eq(slot_id))).execute(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SimpleResponse::ok())
}

async fn search_blocked_slot_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchBlockedSlotRequest>,
) -> anyhow::Result<SearchBlockedSlotResponse> {
    use crate::schema::blocked_slots;

    let info = info.into_inner();
    let (date_from, date_to) = match info.date {
        Some(date) => {
            let date = crate::utils::parse_date_str(date)?;
            (date, date)
        }
        None => crate::utils::parse_date_pair_str_opt::<String, String>(None, None)?,
    };

    let conn = get_db_conn(&pool)?;
    let rows = web::block(move || {
        blocked_slots::table
            .filter(blocked_slots::date.between(date_from, date_to))
            .order((blocked_slots::date.asc(), blocked_slots::start_time.asc()))
            .get_results::<BlockedSlotRow>(&conn)
    })
    .await
    .context("DB error")?;

    let rows = rows
        .into_iter()
        .map(|data| SearchBlockedSlotItem {
            slot_id: data.id,
            date: crate::utils::format_date_str(&data.date),
            start_time: TimeOfDay::from_naive(data.start_time).to_string(),
            reason: data.reason,
        })
        .collect();

    Ok(SearchBlockedSlotResponse {
        success: true,
        err: "".to_string(),
        blocked_slots: rows,
    })
}

async fn finance_summary_impl(
    pool: web::Data<DbPool>,
    info: web::Json<FinanceSummaryRequest>,
) -> anyhow::Result<FinanceSummaryResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();

    let (date_from, date_to) = match info.month.as_deref() {
        Some(month) => {
            use chrono::Datelike;

            let first = crate::utils::parse_date_str(format!("{}-01", month))
                .context("Invalid month format, expected YYYY-MM")?;
            let (next_year, next_month) = if first.month() == 12 {
                (first.year() + 1, 1)
            } else {
                (first.year(), first.month() + 1)
            };
            let next = chrono::NaiveDate::from_ymd_opt(next_year, next_month, 1)
                .context("Invalid month format, expected YYYY-MM")?;
            (first, next.pred())
        }
        None => crate::utils::parse_date_pair_str_opt(info.date_from, info.date_to)?,
    };
    if let Some(status) = info.status.as_deref() {
        if !is_valid_status(status) {
            bail!("Invalid status");
        }
    }

    let conn = get_db_conn(&pool)?;
    let status = info.status.unwrap_or_default();
    let name_pattern = crate::utils::get_str_pattern_opt(info.customer_name);
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::date.between(date_from, date_to))
            .filter((bookings::status.eq(&status)).or(status.is_empty()))
            .filter(bookings::customer_name.like(name_pattern))
            .order((bookings::date.desc(), bookings::start_time.desc()))
            .get_results::<Booking>(&conn)
    })
    .await
    .context("DB error")?;

    let total_billed = rows.iter().map(|b| b.price).sum();
    let total_completed = rows
        .iter()
        .filter(|b| b.status == crate::models::bookings::BOOKING_STATUS_COMPLETED)
        .map(|b| b.price)
        .sum();
    let total_bookings = rows.len() as i64;

    Ok(FinanceSummaryResponse {
        success: true,
        err: "".to_string(),
        bookings: rows.into_iter().map(booking_item).collect(),
        total_billed,
        total_completed,
        total_bookings,
    })
}

const CLIENT_SEARCH_LIMIT: usize = 20;

/// Latest-first client list from booking history: one entry per customer
/// name (case-insensitive), keeping the telephone of the most recent booking.
fn recent_clients(
    rows: Vec<(String, String, chrono::NaiveDateTime)>,
) -> Vec<SearchClientItem> {
    let mut seen = std::collections::HashSet::new();
    rows.into_iter()
        .filter(|(customer_name, _, _)| seen.insert(customer_name.to_lowercase()))
        .take(CLIENT_SEARCH_LIMIT)
        .map(|(customer_name, telephone, _)| SearchClientItem {
            customer_name,
            telephone,
        })
        .collect()
}

async fn search_client_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchClientRequest>,
) -> anyhow::Result<SearchClientResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();

    let conn = get_db_conn(&pool)?;
    let name_pattern = crate::utils::get_str_pattern_opt(info.customer_name);
    let rows = web::block(move || {
        bookings::table
            .filter(bookings::customer_name.like(name_pattern))
            .select((
                bookings::customer_name,
                bookings::telephone,
                bookings::created_at,
            ))
            .order(bookings::created_at.desc())
            .get_results::<(String, String, chrono::NaiveDateTime)>(&conn)
    })
    .await
    .context("DB error")?;

    Ok(SearchClientResponse {
        success: true,
        err: "".to_string(),
        clients: recent_clients(rows),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(name: &str, telephone: &str, day: u32) -> (String, String, chrono::NaiveDateTime) {
        (
            name.to_string(),
            telephone.to_string(),
            NaiveDate::from_ymd(2026, 8, day).and_hms(10, 0, 0),
        )
    }

    #[test]
    fn client_list_keeps_latest_booking_per_name() {
        // Rows arrive ordered by created_at descending, as queried.
        let rows = vec![
            row("Ana", "111-0003", 20),
            row("ana", "111-0001", 15),
            row("Bia", "222-0001", 10),
        ];
        let clients = recent_clients(rows);
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].customer_name, "Ana");
        assert_eq!(clients[0].telephone, "111-0003");
        assert_eq!(clients[1].customer_name, "Bia");
    }

    #[test]
    fn client_list_returns_most_recent_when_over_the_limit() {
        let rows = (1..=28)
            .rev()
            .map(|day| row(&format!("Client {:02}", day), "333-0000", day))
            .collect();
        let clients = recent_clients(rows);
        assert_eq!(clients.len(), CLIENT_SEARCH_LIMIT);
        assert_eq!(clients[0].customer_name, "Client 28");
        assert_eq!(
            clients.last().map(|c| c.customer_name.as_str()),
            Some("Client 09")
        );
    }
}
