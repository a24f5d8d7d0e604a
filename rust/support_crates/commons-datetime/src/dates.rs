//! Calendar helpers over UTC instants viewed in a time zone.
//!
//! Instants are always `DateTime<Utc>`; the time zone argument decides which
//! local calendar day, week or year an instant falls into. Functions taking
//! `Option` arguments treat an absent value the way the surrounding helpers
//! do (see each function).

use std::fmt::Display;

use chrono::{
    DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Timelike, Utc, Weekday,
    format::{Item, StrftimeItems},
};
use commons_core::{Error, Result};
use commons_ranges::DateRange;

use crate::week::WeekRules;

/// `2017-08-01T07:02:03.004`
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

fn local_date<Tz: TimeZone>(date: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    date.with_timezone(tz).date_naive()
}

fn out_of_range(name: &str) -> Error {
    Error::invalid_arg(name, "outside of the supported calendar range")
}

fn earliest<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|d| d.with_timezone(&Utc))
        .ok_or_else(|| Error::invalid_arg("date", format!("local time {local} does not exist")))
}

fn latest<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&local)
        .latest()
        .map(|d| d.with_timezone(&Utc))
        .ok_or_else(|| Error::invalid_arg("date", format!("local time {local} does not exist")))
}

fn start_of(day: NaiveDate, tz: &impl TimeZone) -> Result<DateTime<Utc>> {
    let local = day.and_hms_opt(0, 0, 0).ok_or_else(|| out_of_range("date"))?;
    earliest(local, tz)
}

fn end_of(day: NaiveDate, tz: &impl TimeZone) -> Result<DateTime<Utc>> {
    let local = day
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| out_of_range("date"))?;
    latest(local, tz)
}

/// The first millisecond of the local day of `date`.
pub fn day_start<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> Result<DateTime<Utc>> {
    start_of(local_date(&date, tz), tz)
}

/// The last millisecond (23:59:59.999) of the local day of `date`.
pub fn day_end<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> Result<DateTime<Utc>> {
    end_of(local_date(&date, tz), tz)
}

/// The local day of `date` as a closed range.
pub fn day_range<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> Result<DateRange> {
    Ok(DateRange::new(
        Some(day_start(date, tz)?),
        Some(day_end(date, tz)?),
    ))
}

/// Formats `date` in `tz` with a strftime `pattern`. An absent date formats
/// as the empty string.
///
/// # Errors
///
/// `InvalidArgument` if the pattern contains an unknown specifier.
pub fn format_date<Tz>(pattern: &str, date: Option<DateTime<Utc>>, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items = StrftimeItems::new(pattern).collect::<Vec<_>>();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(Error::invalid_arg(
            "pattern",
            format!("'{pattern}' is not a valid format"),
        ));
    }
    Ok(date
        .map(|date| {
            date.with_timezone(tz)
                .format_with_items(items.iter())
                .to_string()
        })
        .unwrap_or_default())
}

/// Formats `date` in `tz` using [`ISO_DATE_FORMAT`].
pub fn format_iso_date<Tz>(date: Option<DateTime<Utc>>, tz: &Tz) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_date(ISO_DATE_FORMAT, date, tz)
}

/// Builds the instant of a local date and time in `tz`. `month` and `day` are
/// 1-based.
///
/// # Errors
///
/// `InvalidArgument` if a field is out of range, or if the local time does not
/// exist or is ambiguous in `tz`.
#[allow(clippy::too_many_arguments)]
pub fn date<Tz: TimeZone>(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
    tz: &Tz,
) -> Result<DateTime<Utc>> {
    let local = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_milli_opt(hour, minute, second, millis))
        .ok_or_else(|| {
            Error::invalid_arg(
                "date",
                format!("{year}-{month}-{day} {hour}:{minute}:{second}.{millis} is invalid"),
            )
        })?;
    tz.from_local_datetime(&local)
        .single()
        .map(|d| d.with_timezone(&Utc))
        .ok_or_else(|| {
            Error::invalid_arg("date", format!("local time {local} is missing or ambiguous"))
        })
}

/// Week number of `date` in `tz`.
pub fn week_number<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<u32> {
    rules
        .week_of_year(local_date(&date, tz))
        .map(|(_, week)| week)
        .ok_or_else(|| out_of_range("date"))
}

/// Week of the month of `date` in `tz`; `0` before the month's first week.
pub fn week_of_month<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<u32> {
    rules
        .week_of_month(local_date(&date, tz))
        .ok_or_else(|| out_of_range("date"))
}

/// The number of weeks in `year`.
pub fn max_week_of_year(year: i32, rules: WeekRules) -> Result<u32> {
    rules.weeks_in_year(year).ok_or_else(|| out_of_range("year"))
}

fn day_of_week<Tz: TimeZone>(
    week: u32,
    year: i32,
    weekday: Weekday,
    tz: &Tz,
) -> Result<DateTime<Utc>> {
    let day = WeekRules::EU
        .week_date(year, week, weekday)
        .ok_or_else(|| Error::invalid_arg("week", format!("no week {week} in {year}")))?;
    start_of(day, tz)
}

/// Midnight of the Monday of ISO week `week` of `year`, in `tz`.
pub fn monday_of_week<Tz: TimeZone>(week: u32, year: i32, tz: &Tz) -> Result<DateTime<Utc>> {
    day_of_week(week, year, Weekday::Mon, tz)
}

/// Midnight of the Friday of ISO week `week` of `year`, in `tz`.
pub fn friday_of_week<Tz: TimeZone>(week: u32, year: i32, tz: &Tz) -> Result<DateTime<Utc>> {
    day_of_week(week, year, Weekday::Fri, tz)
}

fn local_week_start<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<NaiveDate> {
    rules
        .week_start(local_date(&date, tz))
        .ok_or_else(|| out_of_range("date"))
}

fn local_week_end<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<NaiveDate> {
    local_week_start(date, tz, rules)?
        .checked_add_days(Days::new(6))
        .ok_or_else(|| out_of_range("date"))
}

/// Midnight of the first day of the week containing `date`.
pub fn week_start<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<DateTime<Utc>> {
    start_of(local_week_start(date, tz, rules)?, tz)
}

/// The last millisecond of the last day of the week containing `date`.
pub fn week_end<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<DateTime<Utc>> {
    end_of(local_week_end(date, tz, rules)?, tz)
}

/// The week containing `date` as a closed range.
pub fn week_range<Tz: TimeZone>(
    date: DateTime<Utc>,
    tz: &Tz,
    rules: WeekRules,
) -> Result<DateRange> {
    weeks_range(date, 0, 0, tz, rules)
}

/// From the start of the week `weeks_before` weeks before `date` to the end of
/// the week `weeks_after` weeks after it.
pub fn weeks_range<Tz: TimeZone>(
    date: DateTime<Utc>,
    weeks_before: u32,
    weeks_after: u32,
    tz: &Tz,
    rules: WeekRules,
) -> Result<DateRange> {
    let shift = |weeks: u32| {
        TimeDelta::try_weeks(i64::from(weeks)).ok_or_else(|| out_of_range("weeks"))
    };
    let first = date
        .checked_sub_signed(shift(weeks_before)?)
        .ok_or_else(|| out_of_range("weeks_before"))?;
    let last = date
        .checked_add_signed(shift(weeks_after)?)
        .ok_or_else(|| out_of_range("weeks_after"))?;
    Ok(DateRange::new(
        Some(week_start(first, tz, rules)?),
        Some(week_end(last, tz, rules)?),
    ))
}

/// Returns `true` if both instants fall on the same local day.
pub fn is_same_day<Tz: TimeZone>(a: DateTime<Utc>, b: DateTime<Utc>, tz: &Tz) -> bool {
    local_date(&a, tz) == local_date(&b, tz)
}

/// Returns `true` if `date` falls on the current local day.
pub fn is_today<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> bool {
    is_same_day(date, Utc::now(), tz)
}

/// The local calendar year of `date`.
pub fn year<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> i32 {
    local_date(&date, tz).year()
}

pub fn current_year<Tz: TimeZone>(tz: &Tz) -> i32 {
    year(Utc::now(), tz)
}

/// The earlier of two instants; an absent one yields the other.
pub fn min_date(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// The later of two instants; an absent one yields the other.
pub fn max_date(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    }
}

pub fn add_millis(date: DateTime<Utc>, millis: i64) -> Result<DateTime<Utc>> {
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or_else(|| out_of_range("millis"))
}

/// Adds `duration` to `date`. An absent date stays absent; an absent duration
/// leaves the date unchanged.
pub fn add_duration(
    date: Option<DateTime<Utc>>,
    duration: Option<TimeDelta>,
) -> Result<Option<DateTime<Utc>>> {
    match (date, duration) {
        (Some(date), Some(duration)) => date
            .checked_add_signed(duration)
            .map(Some)
            .ok_or_else(|| out_of_range("duration")),
        (date, _) => Ok(date),
    }
}

/// `a - b` in milliseconds, or `0` when either is absent.
pub fn delta(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> i64 {
    match (a, b) {
        (Some(a), Some(b)) => a.signed_duration_since(b).num_milliseconds(),
        _ => 0,
    }
}

/// Milliseconds since the Unix epoch.
pub fn get_time(date: Option<DateTime<Utc>>) -> Option<i64> {
    date.map(|d| d.timestamp_millis())
}

/// The instant `millis` milliseconds after the Unix epoch. Values outside of
/// the representable range yield `None`.
pub fn from_time(millis: Option<i64>) -> Option<DateTime<Utc>> {
    millis.and_then(DateTime::<Utc>::from_timestamp_millis)
}

/// A Quartz-style cron expression (`s m h d M ? yyyy`) firing once at the
/// local time of `date`.
pub fn to_cron<Tz: TimeZone>(date: DateTime<Utc>, tz: &Tz) -> String {
    let local = date.with_timezone(tz);
    format!(
        "{} {} {} {} {} ? {}",
        local.second(),
        local.minute(),
        local.hour(),
        local.day(),
        local.month(),
        local.year()
    )
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;
    use commons_core::ErrorKind;

    use super::*;

    // Europe/Sofia in summer.
    fn sofia() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> DateTime<Utc> {
        date(y, mo, d, h, mi, s, ms, &sofia()).unwrap()
    }

    #[test]
    fn test_date_and_iso_format() {
        let d = at(2017, 8, 1, 7, 2, 3, 4);
        assert_eq!(d.timestamp_millis(), 1501560123004);
        assert_eq!(
            format_iso_date(Some(d), &sofia()).unwrap(),
            "2017-08-01T07:02:03.004"
        );
        assert_eq!(format_iso_date(Some(d), &Utc).unwrap(), "2017-08-01T04:02:03.004");
        assert_eq!(format_iso_date(None, &sofia()).unwrap(), "");
    }

    #[test]
    fn test_date_rejects_invalid_fields() {
        let err = date(2017, 2, 30, 0, 0, 0, 0, &sofia()).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidArgument { .. }));
        assert!(date(2017, 1, 1, 24, 0, 0, 0, &Utc).is_err());
    }

    #[test]
    fn test_format_date() {
        let d = at(2017, 8, 1, 7, 2, 3, 4);
        assert_eq!(format_date("%d.%m.%Y", Some(d), &sofia()).unwrap(), "01.08.2017");
        assert!(format_date("%!", Some(d), &sofia()).is_err());
    }

    #[test]
    fn test_day_range() {
        let d = at(2017, 8, 22, 12, 30, 0, 0);
        assert_eq!(day_start(d, &sofia()).unwrap(), at(2017, 8, 22, 0, 0, 0, 0));
        assert_eq!(day_end(d, &sofia()).unwrap(), at(2017, 8, 22, 23, 59, 59, 999));
        let range = day_range(d, &sofia()).unwrap();
        assert_eq!(range.start(), Some(at(2017, 8, 22, 0, 0, 0, 0)));
        assert_eq!(range.end(), Some(at(2017, 8, 22, 23, 59, 59, 999)));
        assert!(range.contains(Some(d)));
        assert_eq!(delta(range.end(), range.start()), 86399999);
    }

    #[test]
    fn test_day_depends_on_time_zone() {
        // 01:30 in Sofia is still the previous day in UTC.
        let d = at(2017, 8, 22, 1, 30, 0, 0);
        assert!(!is_same_day(d, at(2017, 8, 22, 12, 0, 0, 0), &Utc));
        assert!(is_same_day(d, at(2017, 8, 22, 12, 0, 0, 0), &sofia()));
        assert_eq!(year(at(2018, 1, 1, 1, 0, 0, 0), &Utc), 2017);
    }

    #[test]
    fn test_monday_and_friday_of_week() {
        assert_eq!(monday_of_week(34, 2017, &sofia()).unwrap(), at(2017, 8, 21, 0, 0, 0, 0));
        assert_eq!(friday_of_week(34, 2017, &sofia()).unwrap(), at(2017, 8, 25, 0, 0, 0, 0));
        assert!(monday_of_week(0, 2017, &sofia()).is_err());
    }

    #[test]
    fn test_week_number() {
        let d = at(2017, 8, 24, 0, 0, 0, 0);
        assert_eq!(week_number(d, &sofia(), WeekRules::EU).unwrap(), 34);
        assert_eq!(week_of_month(d, &sofia(), WeekRules::EU).unwrap(), 4);
        assert_eq!(max_week_of_year(2017, WeekRules::EU).unwrap(), 52);
    }

    #[test]
    fn test_week_start_end() {
        let d = at(2017, 8, 22, 0, 0, 0, 0);
        let tz = sofia();
        assert_eq!(week_start(d, &tz, WeekRules::EU).unwrap(), at(2017, 8, 21, 0, 0, 0, 0));
        assert_eq!(week_start(d, &tz, WeekRules::US).unwrap(), at(2017, 8, 20, 0, 0, 0, 0));
        assert_eq!(week_end(d, &tz, WeekRules::EU).unwrap(), at(2017, 8, 27, 23, 59, 59, 999));
        assert_eq!(week_end(d, &tz, WeekRules::US).unwrap(), at(2017, 8, 26, 23, 59, 59, 999));
    }

    #[test]
    fn test_week_range() {
        let d = at(2017, 8, 22, 0, 0, 0, 0);
        let tz = sofia();
        let us = DateRange::new(
            Some(at(2017, 8, 20, 0, 0, 0, 0)),
            Some(at(2017, 8, 26, 23, 59, 59, 999)),
        );
        assert_eq!(week_range(d, &tz, WeekRules::US).unwrap(), us);
        let eu = DateRange::new(
            Some(at(2017, 8, 21, 0, 0, 0, 0)),
            Some(at(2017, 8, 27, 23, 59, 59, 999)),
        );
        assert_eq!(week_range(d, &tz, WeekRules::EU).unwrap(), eu);
    }

    #[test]
    fn test_weeks_range() {
        let d = at(2017, 8, 22, 0, 0, 0, 0);
        let tz = sofia();
        let us = DateRange::new(
            Some(at(2017, 8, 6, 0, 0, 0, 0)),
            Some(at(2017, 9, 16, 23, 59, 59, 999)),
        );
        assert_eq!(weeks_range(d, 2, 3, &tz, WeekRules::US).unwrap(), us);
        let eu = DateRange::new(
            Some(at(2017, 8, 7, 0, 0, 0, 0)),
            Some(at(2017, 9, 17, 23, 59, 59, 999)),
        );
        assert_eq!(weeks_range(d, 2, 3, &tz, WeekRules::EU).unwrap(), eu);
        assert_eq!(
            weeks_range(d, 0, 0, &tz, WeekRules::US).unwrap(),
            week_range(d, &tz, WeekRules::US).unwrap()
        );
    }

    #[test]
    fn test_is_today() {
        assert!(is_today(Utc::now(), &sofia()));
        assert!(!is_today(at(2017, 8, 22, 0, 0, 0, 0), &sofia()));
        assert!(current_year(&Utc) >= 2024);
    }

    #[test]
    fn test_min_max() {
        let a = at(2017, 8, 1, 0, 0, 0, 0);
        let b = at(2017, 8, 2, 0, 0, 0, 0);
        assert_eq!(min_date(Some(a), Some(b)), Some(a));
        assert_eq!(min_date(Some(b), Some(a)), Some(a));
        assert_eq!(min_date(None, Some(b)), Some(b));
        assert_eq!(min_date(Some(a), None), Some(a));
        assert_eq!(min_date(None, None), None);
        assert_eq!(max_date(Some(a), Some(b)), Some(b));
        assert_eq!(max_date(None, Some(a)), Some(a));
        assert_eq!(max_date(None, None), None);
    }

    #[test]
    fn test_time_arithmetic() {
        let d = at(2017, 8, 1, 0, 0, 0, 0);
        assert_eq!(add_millis(d, 1500).unwrap(), at(2017, 8, 1, 0, 0, 1, 500));
        assert_eq!(
            add_duration(Some(d), Some(TimeDelta::hours(2))).unwrap(),
            Some(at(2017, 8, 1, 2, 0, 0, 0))
        );
        assert_eq!(add_duration(Some(d), None).unwrap(), Some(d));
        assert_eq!(add_duration(None, Some(TimeDelta::hours(2))).unwrap(), None);
        assert!(add_millis(DateTime::<Utc>::MAX_UTC, 1).is_err());

        assert_eq!(delta(Some(d), None), 0);
        assert_eq!(delta(Some(add_millis(d, -5).unwrap()), Some(d)), -5);
        assert_eq!(get_time(None), None);
        assert_eq!(from_time(get_time(Some(d))), Some(d));
        assert_eq!(from_time(None), None);
    }

    #[test]
    fn test_to_cron() {
        let d = at(2017, 8, 1, 7, 2, 3, 4);
        assert_eq!(to_cron(d, &sofia()), "3 2 7 1 8 ? 2017");
        assert_eq!(to_cron(d, &Utc), "3 2 4 1 8 ? 2017");
    }
}
