//! Time-window calculation for history queries.
//!
//! Windows are always computed by localizing the reference instant into the
//! configured zone first and converting the local day/week boundaries back to
//! UTC. Truncating the UTC timestamp and shifting by a fixed offset gives
//! wrong boundaries for any zone with a non-zero offset.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use memobot_core::{QueryKind, TimeWindow};

/// Returns the half-open UTC window covering "today" or "the current ISO
/// week" in `zone`, as seen at `now_utc`.
///
/// Today: [local day start, +1 day). Week: [local Monday start, +7 days).
pub fn window_for(kind: QueryKind, now_utc: DateTime<Utc>, zone: Tz) -> TimeWindow {
    let local_date = now_utc.with_timezone(&zone).date_naive();

    let (first_day, len_days) = match kind {
        QueryKind::Today => (local_date, 1),
        QueryKind::Week => (local_date.week(Weekday::Mon).first_day(), 7),
    };

    TimeWindow {
        start_utc: local_midnight_utc(first_day, zone),
        end_utc: local_midnight_utc(first_day + Duration::days(len_days), zone),
    }
}

/// UTC instant of local midnight on `date` in `zone`.
///
/// A repeated midnight (DST fall-back) resolves to the earlier instant; a
/// skipped midnight (spring-forward) resolves to the first existing local
/// time of that day.
fn local_midnight_utc(date: NaiveDate, zone: Tz) -> DateTime<Utc> {
    let mut naive = date.and_time(NaiveTime::MIN);
    loop {
        match zone.from_local_datetime(&naive) {
            LocalResult::Single(local) => return local.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            // DST gaps are at most a few hours; step forward until a valid
            // local time exists.
            LocalResult::None => naive = naive + Duration::minutes(30),
        }
    }
}
