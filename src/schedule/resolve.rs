use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use diesel::prelude::*;
use diesel::MysqlConnection;

use super::{DaySchedule, TimeOfDay};
use crate::models::schedule_configs::{
    ScheduleConfig, CONFIG_TYPE_SPECIFIC_DATE, CONFIG_TYPE_WEEKDAY,
};

const SUNDAY: u32 = 0;

pub const DEFAULT_OPEN_TIME: TimeOfDay = TimeOfDay::from_minutes_unchecked(8 * 60);
pub const DEFAULT_CLOSE_TIME: TimeOfDay = TimeOfDay::from_minutes_unchecked(21 * 60);
pub const DEFAULT_LUNCH_START: TimeOfDay = TimeOfDay::from_minutes_unchecked(12 * 60);
pub const DEFAULT_LUNCH_END: TimeOfDay = TimeOfDay::from_minutes_unchecked(13 * 60);

/// Hardcoded fallback when no configuration exists for a date:
/// 08:00-21:00 with a 12:00-13:00 lunch break, closed on Sundays.
pub fn default_schedule(weekday: u32) -> DaySchedule {
    DaySchedule {
        is_open: weekday != SUNDAY,
        open_time: DEFAULT_OPEN_TIME,
        close_time: DEFAULT_CLOSE_TIME,
        lunch_break: Some((DEFAULT_LUNCH_START, DEFAULT_LUNCH_END)),
    }
}

fn schedule_from_config(cfg: &ScheduleConfig) -> DaySchedule {
    let lunch_break = if cfg.has_lunch_break {
        match (cfg.lunch_start, cfg.lunch_end) {
            (Some(start), Some(end)) => {
                Some((TimeOfDay::from_naive(start), TimeOfDay::from_naive(end)))
            }
            _ => None,
        }
    } else {
        None
    };

    DaySchedule {
        is_open: cfg.active,
        open_time: TimeOfDay::from_naive(cfg.open_time),
        close_time: TimeOfDay::from_naive(cfg.close_time),
        lunch_break,
    }
}

/// Precedence: specific-date override, then weekday default, then the
/// hardcoded fallback.
pub fn pick_schedule(
    specific: Option<DaySchedule>,
    weekday_default: Option<DaySchedule>,
    weekday: u32,
) -> DaySchedule {
    specific
        .or(weekday_default)
        .unwrap_or_else(|| default_schedule(weekday))
}

/// Resolves the working hours for `date` from the store. Read-only and
/// deterministic for a given store snapshot.
pub fn resolve_day_schedule(
    conn: &MysqlConnection,
    date: NaiveDate,
) -> anyhow::Result<DaySchedule> {
    use crate::schema::schedule_configs;

    // 0 = Sunday .. 6 = Saturday, matching the persisted weekday numbering.
    let weekday = date.weekday().num_days_from_sunday();

    let specific = schedule_configs::table
        .filter(schedule_configs::config_type.eq(CONFIG_TYPE_SPECIFIC_DATE))
        .filter(schedule_configs::specific_date.eq(date))
        .filter(schedule_configs::active.eq(true))
        .first::<ScheduleConfig>(conn)
        .optional()
        .context("DB error")?;

    let weekday_default = if specific.is_none() {
        schedule_configs::table
            .filter(schedule_configs::config_type.eq(CONFIG_TYPE_WEEKDAY))
            .filter(schedule_configs::weekday.eq(weekday as i32))
            .filter(schedule_configs::active.eq(true))
            .first::<ScheduleConfig>(conn)
            .optional()
            .context("DB error")?
    } else {
        None
    };

    Ok(pick_schedule(
        specific.as_ref().map(schedule_from_config),
        weekday_default.as_ref().map(schedule_from_config),
        weekday,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::compute_available_slots;

    fn open_day(open: &str, close: &str) -> DaySchedule {
        DaySchedule {
            is_open: true,
            open_time: TimeOfDay::parse(open).unwrap(),
            close_time: TimeOfDay::parse(close).unwrap(),
            lunch_break: None,
        }
    }

    #[test]
    fn specific_date_beats_weekday_default() {
        let picked = pick_schedule(
            Some(open_day("10:00", "16:00")),
            Some(open_day("08:00", "21:00")),
            3,
        );
        assert_eq!(picked.open_time, TimeOfDay::parse("10:00").unwrap());
    }

    #[test]
    fn weekday_default_beats_fallback() {
        let picked = pick_schedule(None, Some(open_day("09:00", "18:00")), 0);
        assert!(picked.is_open);
        assert_eq!(picked.close_time, TimeOfDay::parse("18:00").unwrap());
    }

    #[test]
    fn fallback_closes_sundays() {
        // A Sunday with no overrides resolves to a closed day.
        let sunday = pick_schedule(None, None, 0);
        assert!(!sunday.is_open);
        assert!(compute_available_slots(&sunday, 60, &[], &[])
            .unwrap()
            .is_empty());

        let monday = pick_schedule(None, None, 1);
        assert!(monday.is_open);
        assert_eq!(monday.open_time, DEFAULT_OPEN_TIME);
        assert_eq!(monday.lunch_break, Some((DEFAULT_LUNCH_START, DEFAULT_LUNCH_END)));
    }

    #[test]
    fn weekday_numbering_starts_at_sunday() {
        // 2026-08-23 is a Sunday.
        let date = NaiveDate::from_ymd(2026, 8, 23);
        assert_eq!(date.weekday().num_days_from_sunday(), 0);
        assert_eq!(date.succ().weekday().num_days_from_sunday(), 1);
    }
}
