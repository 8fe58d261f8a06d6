mod requests;
mod responses;
pub mod utils;

use std::collections::BTreeMap;

use actix_web::{post, web, HttpResponse, Responder};
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{
    database::{get_db_conn, last_insert_id},
    models::bookings::{join_service_list, NewBooking, BOOKING_STATUS_PENDING},
    models::services::Service,
    schedule::{available_periods, TimeOfDay},
    DbPool,
};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(search_slots)
        .service(month_availability)
        .service(book)
        .service(search_service);
}

crate::post_funcs! {
    (search_slots, "/available_slots", SearchSlotsRequest, SearchSlotsResponse),
    (month_availability, "/month_availability", MonthAvailabilityRequest, MonthAvailabilityResponse),
    (book, "/book", BookRequest, BookResponse),
    (search_service, "/search_service", SearchServiceRequest, SearchServiceResponse),
}

async fn search_slots_impl(
    pool: web::Data<DbPool>,
    info: web::Json<SearchSlotsRequest>,
) -> anyhow::Result<SearchSlotsResponse> {
    let info = info.into_inner();
    let date = crate::utils::parse_date_str(&info.date)?;

    let conn = get_db_conn(&pool)?;
    let services = info.services;
    let slots =
        web::block(move || utils::available_slots_for_date(&conn, date, &services)).await?;

    Ok(SearchSlotsResponse {
        success: true,
        err: "".to_string(),
        date: info.date,
        periods: available_periods(&slots),
        slots: slots.iter().map(|s| s.to_string()).collect(),
    })
}

async fn month_availability_impl(
    pool: web::Data<DbPool>,
    info: web::Json<MonthAvailabilityRequest>,
) -> anyhow::Result<MonthAvailabilityResponse> {
    let info = info.into_inner();

    let first = chrono::NaiveDate::from_ymd_opt(info.year, info.month, 1)
        .context("Invalid month or year")?;
    let next_month = if info.month == 12 {
        chrono::NaiveDate::from_ymd_opt(info.year + 1, 1, 1)
    } else {
        chrono::NaiveDate::from_ymd_opt(info.year, info.month + 1, 1)
    }
    .context("Invalid month or year")?;

    let conn = get_db_conn(&pool)?;
    let availability = web::block(move || -> anyhow::Result<BTreeMap<String, Vec<String>>> {
        let mut availability = BTreeMap::new();
        let mut date = first;
        while date < next_month {
            // Empty service list: a generic 60-minute probe per day.
            let slots = utils::available_slots_for_date(&conn, date, &[])?;
            availability.insert(
                crate::utils::format_date_str(&date),
                slots.iter().map(|s| s.to_string()).collect(),
            );
            date = date.succ_opt().context("Date out of range")?;
        }
        Ok(availability)
    })
    .await?;

    Ok(MonthAvailabilityResponse {
        success: true,
        err: "".to_string(),
        availability,
    })
}

async fn book_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BookRequest>,
) -> anyhow::Result<BookResponse> {
    use crate::schema::bookings;

    let info = info.into_inner();

    let customer_name = info.customer_name.trim().to_string();
    let telephone = info.telephone.trim().to_string();
    if customer_name.is_empty() || telephone.is_empty() {
        bail!("Name and telephone are required");
    }
    if info.services.is_empty() {
        bail!("At least one service is required");
    }
    let date = crate::utils::parse_date_str(&info.date)?;
    let start_time = TimeOfDay::parse(&info.start_time)?;

    let conn = get_db_conn(&pool)?;
    let services = info.services;
    let (booking_id, price) = web::block(move || {
        conn.transaction(|| {
            // Booking creation is strict about service names, unlike the
            // lenient availability queries.
            let (prices, _) = utils::active_service_maps(&conn)?;
            let mut price = 0.0;
            for name in &services {
                match prices.get(name.as_str()) {
                    Some(value) => price += value,
                    None => bail!("Invalid service: {}", name),
                }
            }

            let free = utils::available_slots_for_date(&conn, date, &services)?;
            if !free.contains(&start_time) {
                bail!("Time not available");
            }

            let data = NewBooking {
                customer_name,
                telephone,
                services: join_service_list(&services),
                date,
                start_time: start_time.to_naive(),
                price,
                status: BOOKING_STATUS_PENDING.to_string(),
            };
            match diesel::insert_into(bookings::table).values(data).execute(&conn) {
                // The unique (date, start_time) key is the final arbiter for
                // two concurrent requests racing for the same slot.
                Err(diesel::result::Error::DatabaseError(
                    diesel::result::DatabaseErrorKind::UniqueViolation,
                    _,
                )) => bail!("Slot already booked"),
                res => {
                    res.context("DB error")?;
                }
            }

            let booking_id = diesel::select(last_insert_id)
                .get_result::<u64>(&conn)
                .context("DB error")?;

            Ok((booking_id, price))
        })
    })
    .await?;

    Ok(BookResponse {
        success: true,
        err: "".to_string(),
        booking_id,
        price,
    })
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
            .filter(services::active.eq(true))
            .filter(services::name.like(name_pattern))
            .order(services::name.asc())
            .get_results::<Service>(&conn)
    })
    .await
    .context("DB error")?;

    let rows = rows
        .into_iter()
        .map(|data| SearchServiceItem {
            name: data.name,
            price: data.price,
            duration_minutes: data.duration_minutes,
        })
        .collect();

    Ok(SearchServiceResponse {
        success: true,
        err: "".to_string(),
        services: rows,
    })
}
