use actix_web::web;
use anyhow::{bail, Context};
use diesel::prelude::*;

use crate::{database::get_db_conn, DbPool};

pub async fn assert_service(pool: &web::Data<DbPool>, service_id: u64) -> anyhow::Result<()> {
    use crate::schema::services;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        services::table
            .filter(services::id.eq(service_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such service");
    }

    Ok(())
}

pub async fn assert_booking(pool: &web::Data<DbPool>, booking_id: u64) -> anyhow::Result<()> {
    use crate::schema::bookings;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        bookings::table
            .filter(bookings::id.eq(booking_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such booking");
    }

    Ok(())
}

pub async fn assert_schedule_config(pool: &web::Data<DbPool>, config_id: u64) -> anyhow::Result<()> {
    use crate::schema::schedule_configs;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        schedule_configs::table
            .filter(schedule_configs::id.eq(config_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such schedule config");
    }

    Ok(())
}

pub async fn assert_blocked_slot(pool: &web::Data<DbPool>, slot_id: u64) -> anyhow::Result<()> {
    use crate::schema::blocked_slots;

    let conn = get_db_conn(pool)?;
    let res = web::block(move || {
        blocked_slots::table
            .filter(blocked_slots::id.eq(slot_id))
            .count()
            .get_result::<i64>(&conn)
    })
    .await
    .context("DB error")?;

    if res == 0 {
        bail!("No such blocked slot");
    }

    Ok(())
}
