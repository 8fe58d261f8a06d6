pub mod assert;

use crate::DbPool;
use actix_web::web;
use anyhow::Context;
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use r2d2::PooledConnection;

no_arg_sql_function!(
    last_insert_id,
    diesel::sql_types::Unsigned<diesel::sql_types::BigInt>
);

pub fn build_pool(conn_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<MysqlConnection>::new(conn_url);
    r2d2::Pool::builder()
        .build(manager)
        .context("Failed to create DB pool")
}

pub fn get_db_conn(
    pool: &web::Data<DbPool>,
) -> anyhow::Result<PooledConnection<ConnectionManager<MysqlConnection>>> {
    pool.get().context("DB connection")
}
