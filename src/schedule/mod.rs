pub mod resolve;

use std::collections::HashMap;
use std::fmt;

use anyhow::bail;
use chrono::{NaiveTime, Timelike};

/// Bookings always start on a 30-minute grid, independent of service duration.
pub const SLOT_INTERVAL_MINUTES: i32 = 30;
/// Mandatory idle gap on both sides of an existing booking.
pub const BOOKING_BUFFER_MINUTES: i32 = 30;
/// A blocked slot occupies a fixed hour; no buffer is applied around it.
pub const BLOCKED_SLOT_MINUTES: i32 = 60;
/// Duration assumed for unknown service names and for empty requests.
pub const DEFAULT_SERVICE_MINUTES: i32 = 60;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Wall-clock time with minute granularity, stored as minutes since midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub fn from_minutes(minutes: i32) -> anyhow::Result<Self> {
        if minutes < 0 || minutes >= MINUTES_PER_DAY {
            bail!("Time out of range");
        }
        Ok(Self(minutes as u16))
    }

    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Parses `HH:MM`; a trailing `:SS` part (the TIME column text form) is
    /// accepted but its value is discarded.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        let mut parts = s.splitn(3, ':');
        let hours = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .filter(|h| (0..24).contains(h));
        let minutes = parts
            .next()
            .and_then(|p| p.parse::<i32>().ok())
            .filter(|m| (0..60).contains(m));
        if let Some(seconds) = parts.next() {
            if !seconds.parse::<i32>().map_or(false, |s| (0..60).contains(&s)) {
                bail!("Invalid time format");
            }
        }
        match (hours, minutes) {
            (Some(h), Some(m)) => Self::from_minutes(h * 60 + m),
            _ => bail!("Invalid time format"),
        }
    }

    pub fn from_naive(time: NaiveTime) -> Self {
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    pub fn to_naive(self) -> NaiveTime {
        NaiveTime::from_hms(self.0 as u32 / 60, self.0 as u32 % 60, 0)
    }

    pub fn minutes(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Resolved working hours for one calendar date. Immutable once resolved.
#[derive(Clone, Debug)]
pub struct DaySchedule {
    pub is_open: bool,
    pub open_time: TimeOfDay,
    pub close_time: TimeOfDay,
    pub lunch_break: Option<(TimeOfDay, TimeOfDay)>,
}

impl DaySchedule {
    /// Rejects self-contradictory configurations instead of silently
    /// correcting them.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.open_time >= self.close_time {
            bail!("Invalid schedule config: opening time not before closing time");
        }
        if let Some((lunch_start, lunch_end)) = self.lunch_break {
            if lunch_start >= lunch_end
                || lunch_start < self.open_time
                || lunch_end > self.close_time
            {
                bail!("Invalid schedule config: lunch break outside working hours");
            }
        }
        Ok(())
    }
}

pub struct ExistingBooking {
    pub start_time: TimeOfDay,
    pub duration_minutes: i32,
}

pub struct BlockedSlot {
    pub start_time: TimeOfDay,
}

/// Total duration of a requested service list. Unknown names fall back to
/// the 60-minute default; an empty request is probed as a single default
/// service, never as zero minutes.
pub fn total_duration(requested: &[String], durations: &HashMap<String, i32>) -> i32 {
    if requested.is_empty() {
        return DEFAULT_SERVICE_MINUTES;
    }
    requested
        .iter()
        .map(|name| {
            durations
                .get(name.as_str())
                .copied()
                .unwrap_or(DEFAULT_SERVICE_MINUTES)
        })
        .sum()
}

/// Start times at which a request of `duration_minutes` fits into the day.
///
/// Candidates run from opening to closing time on the 30-minute grid
/// (anchored at the opening time). A candidate survives when the service
/// finishes before closing, does not overlap the lunch break, keeps a
/// 30-minute gap to every holding booking, and does not touch a blocked
/// slot. All interval tests are half-open.
pub fn compute_available_slots(
    schedule: &DaySchedule,
    duration_minutes: i32,
    bookings: &[ExistingBooking],
    blocked: &[BlockedSlot],
) -> anyhow::Result<Vec<TimeOfDay>> {
    if !schedule.is_open {
        return Ok(Vec::new());
    }
    schedule.validate()?;

    let close = schedule.close_time.minutes();
    let mut slots = Vec::new();
    let mut start = schedule.open_time.minutes();
    while start < close {
        if fits(schedule, start, start + duration_minutes, bookings, blocked) {
            slots.push(TimeOfDay::from_minutes(start)?);
        }
        start += SLOT_INTERVAL_MINUTES;
    }
    Ok(slots)
}

fn fits(
    schedule: &DaySchedule,
    start: i32,
    end: i32,
    bookings: &[ExistingBooking],
    blocked: &[BlockedSlot],
) -> bool {
    if end > schedule.close_time.minutes() {
        return false;
    }

    if let Some((lunch_start, lunch_end)) = schedule.lunch_break {
        if start < lunch_end.minutes() && end > lunch_start.minutes() {
            return false;
        }
    }

    let booking_conflict = bookings.iter().any(|b| {
        let b_start = b.start_time.minutes();
        let b_end = b_start + b.duration_minutes;
        start < b_end + BOOKING_BUFFER_MINUTES && end > b_start - BOOKING_BUFFER_MINUTES
    });
    if booking_conflict {
        return false;
    }

    !blocked.iter().any(|s| {
        let s_start = s.start_time.minutes();
        start < s_start + BLOCKED_SLOT_MINUTES && end > s_start
    })
}

const PERIOD_NAMES: [&str; 3] = ["morning", "afternoon", "evening"];
const PERIOD_STARTS: [[u16; 2]; 3] = [
    [8 * 60, 9 * 60],
    [14 * 60, 15 * 60],
    [17 * 60, 18 * 60],
];

/// Legacy morning/afternoon/evening view, derived as a pure projection over
/// the slot list: a period is available when at least one of its
/// representative start times is free.
pub fn available_periods(slots: &[TimeOfDay]) -> Vec<&'static str> {
    PERIOD_NAMES
        .iter()
        .zip(PERIOD_STARTS.iter())
        .filter(|(_, starts)| {
            starts
                .iter()
                .any(|m| slots.contains(&TimeOfDay::from_minutes_unchecked(*m)))
        })
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    fn standard_day() -> DaySchedule {
        DaySchedule {
            is_open: true,
            open_time: t("08:00"),
            close_time: t("21:00"),
            lunch_break: Some((t("12:00"), t("13:00"))),
        }
    }

    fn slot_strings(slots: &[TimeOfDay]) -> Vec<String> {
        slots.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn time_of_day_parses_and_formats() {
        assert_eq!(t("08:05").minutes(), 485);
        assert_eq!(t("08:05").to_string(), "08:05");
        assert_eq!(t("21:00:00").minutes(), 1260);
        assert_eq!(t("08:05:59").minutes(), 485);
        assert!(TimeOfDay::parse("24:00").is_err());
        assert!(TimeOfDay::parse("12:60").is_err());
        assert!(TimeOfDay::parse("08:05:99").is_err());
        assert!(TimeOfDay::parse("08:05:junk").is_err());
        assert!(TimeOfDay::parse("noonish").is_err());
    }

    #[test]
    fn time_of_day_naive_round_trip() {
        let time = t("19:30");
        assert_eq!(TimeOfDay::from_naive(time.to_naive()), time);
    }

    #[test]
    fn closed_day_yields_nothing() {
        // A closed day beats every other input.
        let schedule = DaySchedule {
            is_open: false,
            ..standard_day()
        };
        let bookings = [ExistingBooking {
            start_time: t("10:00"),
            duration_minutes: 60,
        }];
        let slots = compute_available_slots(&schedule, 60, &bookings, &[]).unwrap();
        assert!(slots.is_empty());
    }

    #[test]
    fn invalid_schedule_is_an_error_not_empty() {
        let schedule = DaySchedule {
            open_time: t("21:00"),
            close_time: t("08:00"),
            ..standard_day()
        };
        assert!(compute_available_slots(&schedule, 60, &[], &[]).is_err());

        let schedule = DaySchedule {
            lunch_break: Some((t("07:00"), t("13:00"))),
            ..standard_day()
        };
        assert!(compute_available_slots(&schedule, 60, &[], &[]).is_err());

        let schedule = DaySchedule {
            lunch_break: Some((t("13:00"), t("12:00"))),
            ..standard_day()
        };
        assert!(compute_available_slots(&schedule, 60, &[], &[]).is_err());
    }

    #[test]
    fn ninety_minute_service_on_a_standard_day() {
        let slots = compute_available_slots(&standard_day(), 90, &[], &[]).unwrap();
        let strings = slot_strings(&slots);

        assert_eq!(strings.first().map(String::as_str), Some("08:00"));
        assert_eq!(strings.last().map(String::as_str), Some("19:30"));
        assert!(!strings.iter().any(|s| s == "20:00"));
        // 11:30 + 90min would run into lunch; the whole lunch hour is gone too.
        for excluded in &["11:00", "11:30", "12:00", "12:30"] {
            assert!(!strings.iter().any(|s| s == excluded), "{}", excluded);
        }
        assert!(strings.iter().any(|s| s == "13:00"));
    }

    #[test]
    fn grid_is_anchored_at_opening_time() {
        // With an off-hour opening, slots land on :05 and :35.
        let schedule = DaySchedule {
            is_open: true,
            open_time: t("08:05"),
            close_time: t("11:05"),
            lunch_break: None,
        };
        let slots = compute_available_slots(&schedule, 30, &[], &[]).unwrap();
        assert_eq!(
            slot_strings(&slots),
            vec!["08:05", "08:35", "09:05", "09:35", "10:05", "10:35"]
        );
        for slot in &slots {
            let offset = slot.minutes() - schedule.open_time.minutes();
            assert_eq!(offset % SLOT_INTERVAL_MINUTES, 0);
        }
    }

    #[test]
    fn every_slot_finishes_before_closing() {
        // Capacity follows the resolved closing time.
        let schedule = DaySchedule {
            close_time: t("18:00"),
            ..standard_day()
        };
        let slots = compute_available_slots(&schedule, 120, &[], &[]).unwrap();
        assert!(!slots.is_empty());
        for slot in &slots {
            assert!(slot.minutes() + 120 <= t("18:00").minutes());
        }
        assert_eq!(slot_strings(&slots).last().map(String::as_str), Some("16:00"));
    }

    #[test]
    fn bookings_keep_a_symmetric_buffer() {
        // A 10:00+90min booking occupies [09:30, 12:00) once padded.
        let schedule = DaySchedule {
            is_open: true,
            open_time: t("08:00"),
            close_time: t("21:00"),
            lunch_break: None,
        };
        let bookings = [ExistingBooking {
            start_time: t("10:00"),
            duration_minutes: 90,
        }];
        let slots = compute_available_slots(&schedule, 30, &bookings, &[]).unwrap();
        let strings = slot_strings(&slots);

        assert!(!strings.iter().any(|s| s == "11:30"));
        assert!(strings.iter().any(|s| s == "12:00"));
        // The buffer also guards the front edge: 09:00+30min ends at 09:30,
        // which is exactly the padded start and therefore still free.
        assert!(strings.iter().any(|s| s == "09:00"));
        assert!(!strings.iter().any(|s| s == "09:30"));

        // No result slot may touch the padded window.
        for slot in &slots {
            let start = slot.minutes();
            let end = start + 30;
            assert!(start >= 690 + 30 || end <= 600 - 30, "slot {}", slot);
        }
    }

    #[test]
    fn blocked_slots_exclude_direct_overlap_only() {
        let schedule = DaySchedule {
            is_open: true,
            open_time: t("08:00"),
            close_time: t("21:00"),
            lunch_break: None,
        };
        let blocked = [BlockedSlot {
            start_time: t("14:00"),
        }];
        let slots = compute_available_slots(&schedule, 30, &[], &blocked).unwrap();
        let strings = slot_strings(&slots);

        assert!(!strings.iter().any(|s| s == "14:00"));
        assert!(!strings.iter().any(|s| s == "14:30"));
        // No buffer around blocks: the adjacent slots stay bookable.
        assert!(strings.iter().any(|s| s == "13:30"));
        assert!(strings.iter().any(|s| s == "15:00"));
    }

    #[test]
    fn long_service_cannot_straddle_a_block() {
        let schedule = DaySchedule {
            is_open: true,
            open_time: t("08:00"),
            close_time: t("21:00"),
            lunch_break: None,
        };
        let blocked = [BlockedSlot {
            start_time: t("14:00"),
        }];
        let slots = compute_available_slots(&schedule, 90, &[], &blocked).unwrap();
        let strings = slot_strings(&slots);

        // 13:00 + 90min ends 14:30, inside the blocked hour.
        assert!(!strings.iter().any(|s| s == "13:00"));
        assert!(strings.iter().any(|s| s == "12:30"));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let bookings = [ExistingBooking {
            start_time: t("15:00"),
            duration_minutes: 150,
        }];
        let blocked = [BlockedSlot {
            start_time: t("09:00"),
        }];
        let first = compute_available_slots(&standard_day(), 60, &bookings, &blocked).unwrap();
        let second = compute_available_slots(&standard_day(), 60, &bookings, &blocked).unwrap();
        assert_eq!(first, second);
        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(first, sorted);
    }

    #[test]
    fn empty_request_probes_with_default_duration() {
        // An empty service list still occupies 60 minutes.
        let durations = HashMap::new();
        assert_eq!(total_duration(&[], &durations), 60);

        let slots =
            compute_available_slots(&standard_day(), total_duration(&[], &durations), &[], &[])
                .unwrap();
        let strings = slot_strings(&slots);
        // 20:30 + 60min would pass closing.
        assert_eq!(strings.last().map(String::as_str), Some("20:00"));
        // 11:30 + 60min overlaps lunch.
        assert!(!strings.iter().any(|s| s == "11:30"));
    }

    #[test]
    fn durations_default_per_unknown_name() {
        let mut durations = HashMap::new();
        durations.insert("Gel Polish - Hands".to_string(), 90);
        durations.insert("Gel Soak".to_string(), 150);

        let request = vec![
            "Gel Polish - Hands".to_string(),
            "Something Discontinued".to_string(),
        ];
        assert_eq!(total_duration(&request, &durations), 150);

        let request = vec!["Gel Soak".to_string()];
        assert_eq!(total_duration(&request, &durations), 150);
    }

    #[test]
    fn period_view_is_a_projection() {
        let all = compute_available_slots(&standard_day(), 60, &[], &[]).unwrap();
        assert_eq!(
            available_periods(&all),
            vec!["morning", "afternoon", "evening"]
        );

        // Take out both morning anchors; the other periods survive.
        let bookings = [ExistingBooking {
            start_time: t("08:30"),
            duration_minutes: 60,
        }];
        let slots = compute_available_slots(&standard_day(), 60, &bookings, &[]).unwrap();
        assert_eq!(available_periods(&slots), vec!["afternoon", "evening"]);

        assert!(available_periods(&[]).is_empty());
    }
}
