#[macro_use]
extern crate diesel;

mod admin;
mod booking;
mod database;
mod models;
mod protocol;
mod schedule;
mod schema;
mod utils;

use actix_web::{middleware, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let conn_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        log::error!("DATABASE_URL not found");
        std::process::exit(1);
    });
    let pool = match database::build_pool(&conn_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to create pool: {}", err);
            std::process::exit(1);
        }
    };

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Listening on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .data(pool.clone())
            // /api/admin must be registered before /api
            .service(web::scope("/api/admin").configure(admin::config))
            .service(web::scope("/api").configure(booking::config))
            .service(actix_files::Files::new("/", "./static").index_file("index.html"))
    })
    .bind(bind)?
    .run()
    .await
}
