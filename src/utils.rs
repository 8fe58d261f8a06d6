#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](pool, info).await {
                        Ok(response) => response,
                        Err(err) => $response::err(err.to_string()),
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use anyhow::Context;
use chrono::NaiveDate;

const DATE_FMT: &str = "%Y-%m-%d";

pub fn parse_date_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref(), DATE_FMT).context("Invalid date format")
}

pub fn parse_date_pair_str_opt<S1: AsRef<str>, S2: AsRef<str>>(
    date_from: Option<S1>,
    date_to: Option<S2>,
) -> anyhow::Result<(NaiveDate, NaiveDate)> {
    let date_from = date_from.map_or(Ok(NaiveDate::from_ymd(1901, 1, 1)), |d| {
        parse_date_str(d).context("Invalid start date")
    })?;
    let date_to = date_to.map_or(Ok(NaiveDate::from_ymd(2901, 1, 1)), |d| {
        parse_date_str(d).context("Invalid end date")
    })?;
    Ok((date_from, date_to))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn format_datetime_str(time: &chrono::NaiveDateTime) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

    format!("{}+00:00", time.format(TIME_FMT))
}

pub fn get_str_pattern<S: AsRef<str>>(s: S) -> String {
    format!("%{}%", s.as_ref())
}

pub fn get_str_pattern_opt<S: AsRef<str>>(s: Option<S>) -> String {
    match s {
        Some(s) => get_str_pattern(s),
        None => "%".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date_str("2026-02-30").is_err());
        assert!(parse_date_str("26/02/2026").is_err());
        assert!(parse_date_str("2026-02-10").is_ok());
    }

    #[test]
    fn date_pair_defaults_cover_everything() {
        let (from, to) = parse_date_pair_str_opt::<String, String>(None, None).unwrap();
        assert!(from < NaiveDate::from_ymd(2026, 1, 1));
        assert!(to > NaiveDate::from_ymd(2500, 1, 1));
    }
}
