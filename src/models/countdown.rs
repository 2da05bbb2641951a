use chrono::NaiveDateTime;
use serde::Serialize;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Duration breakdown shown on the home-page countdown. Each field is the
/// remainder within the next coarser unit (hours are hours-within-the-day,
/// not total hours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn total_seconds(&self) -> i64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::ZERO
    }
}

/// Break the distance to the target instant into days/hours/minutes/seconds
/// by integer division of the millisecond difference. Once the target has
/// passed the countdown pins at zero instead of going negative.
pub fn time_left(target: NaiveDateTime, now: NaiveDateTime) -> TimeLeft {
    let distance = (target - now).num_milliseconds().max(0);
    TimeLeft {
        days: distance / MS_PER_DAY,
        hours: (distance % MS_PER_DAY) / MS_PER_HOUR,
        minutes: (distance % MS_PER_HOUR) / MS_PER_MINUTE,
        seconds: (distance % MS_PER_MINUTE) / MS_PER_SECOND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test]
    fn one_day_out() {
        let left = time_left(at("2024-12-15T09:00:00"), at("2024-12-14T09:00:00"));
        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn fields_are_remainders_not_totals() {
        let left = time_left(at("2024-12-15T09:00:00"), at("2024-12-13T06:58:57"));
        assert_eq!(
            left,
            TimeLeft {
                days: 2,
                hours: 2,
                minutes: 1,
                seconds: 3
            }
        );
    }

    #[test]
    fn one_second_apart_borrows_across_boundaries() {
        let target = at("2024-12-15T09:00:00");
        let before = time_left(target, at("2024-12-14T08:59:59"));
        let after = time_left(target, at("2024-12-14T09:00:00"));
        assert_eq!(
            before,
            TimeLeft {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
        assert_eq!(before.total_seconds() - after.total_seconds(), 1);
    }

    #[test]
    fn past_target_clamps_to_zero() {
        let left = time_left(at("2024-12-15T09:00:00"), at("2024-12-16T00:00:00"));
        assert!(left.is_zero());
    }

    #[test]
    fn sub_second_distance_rounds_down() {
        let target = at("2024-12-15T09:00:00");
        let now = at("2024-12-15T08:59:59") + chrono::Duration::milliseconds(500);
        let left = time_left(target, now);
        assert!(left.is_zero());
    }
}
