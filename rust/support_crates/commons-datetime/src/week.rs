//! Week numbering over calendar dates.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use commons_core::{Result, verify_arg};

/// Determines where weeks start and which week of a year (or month) is the
/// first one.
///
/// Week 1 is the first week with at least `min_days_in_first_week` days inside
/// the year. Days before it belong to the last week of the previous year, and
/// trailing days of December may belong to week 1 of the next year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WeekRules {
    pub first_day: Weekday,
    pub min_days_in_first_week: u8,
}

impl WeekRules {
    /// ISO-8601 weeks: Monday first, week 1 holds the first Thursday.
    pub const EU: WeekRules = WeekRules {
        first_day: Weekday::Mon,
        min_days_in_first_week: 4,
    };

    /// Sunday first, week 1 holds January 1st.
    pub const US: WeekRules = WeekRules {
        first_day: Weekday::Sun,
        min_days_in_first_week: 1,
    };

    pub fn new(first_day: Weekday, min_days_in_first_week: u8) -> Result<WeekRules> {
        verify_arg!(
            min_days_in_first_week,
            (1..=7).contains(&min_days_in_first_week)
        );
        Ok(WeekRules {
            first_day,
            min_days_in_first_week,
        })
    }

    /// Position of `weekday` within a week, `0` for [`first_day`](Self::first_day).
    pub fn day_of_week(&self, weekday: Weekday) -> u32 {
        (weekday.num_days_from_monday() + 7 - self.first_day.num_days_from_monday()) % 7
    }

    /// The first day of the week containing `date`.
    pub fn week_start(&self, date: NaiveDate) -> Option<NaiveDate> {
        date.checked_sub_days(Days::new(self.day_of_week(date.weekday()).into()))
    }

    /// The first day of week 1 of `year`, possibly in December of the year
    /// before.
    pub fn first_week_start(&self, year: i32) -> Option<NaiveDate> {
        self.first_week_start_from(NaiveDate::from_ymd_opt(year, 1, 1)?)
    }

    fn first_week_start_from(&self, first_day: NaiveDate) -> Option<NaiveDate> {
        let start = self.week_start(first_day)?;
        let days_inside = 7 - self.day_of_week(first_day.weekday());
        if days_inside >= u32::from(self.min_days_in_first_week) {
            Some(start)
        } else {
            start.checked_add_days(Days::new(7))
        }
    }

    /// Returns the week-based year and the week number (1-based) of `date`.
    pub fn week_of_year(&self, date: NaiveDate) -> Option<(i32, u32)> {
        let year = date.year();
        let start = self.week_start(date)?;
        if start >= self.first_week_start(year + 1)? {
            return Some((year + 1, 1));
        }
        let mut week_year = year;
        let mut first = self.first_week_start(year)?;
        if start < first {
            week_year = year - 1;
            first = self.first_week_start(week_year)?;
        }
        Some((week_year, weeks_between(first, start) + 1))
    }

    /// Week of the month of `date`, `0` for days before the month's first
    /// full week.
    pub fn week_of_month(&self, date: NaiveDate) -> Option<u32> {
        let first = self.first_week_start_from(date.with_day(1)?)?;
        let start = self.week_start(date)?;
        if start < first {
            Some(0)
        } else {
            Some(weeks_between(first, start) + 1)
        }
    }

    /// Number of weeks in the week-based `year` (52 or 53).
    pub fn weeks_in_year(&self, year: i32) -> Option<u32> {
        Some(weeks_between(
            self.first_week_start(year)?,
            self.first_week_start(year + 1)?,
        ))
    }

    /// The date of `weekday` in week `week` of `year`.
    pub fn week_date(&self, year: i32, week: u32, weekday: Weekday) -> Option<NaiveDate> {
        let offset = u64::from(week.checked_sub(1)?) * 7 + u64::from(self.day_of_week(weekday));
        self.first_week_start(year)?.checked_add_days(Days::new(offset))
    }
}

impl Default for WeekRules {
    fn default() -> Self {
        WeekRules::EU
    }
}

fn weeks_between(from: NaiveDate, to: NaiveDate) -> u32 {
    (to.signed_duration_since(from).num_days() / 7) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_week_start() {
        let d = ymd(2017, 8, 22);
        assert_eq!(WeekRules::EU.week_start(d), Some(ymd(2017, 8, 21)));
        assert_eq!(WeekRules::US.week_start(d), Some(ymd(2017, 8, 20)));
        assert_eq!(WeekRules::US.week_start(ymd(2017, 8, 20)), Some(ymd(2017, 8, 20)));
    }

    #[test]
    fn test_week_of_year() {
        assert_eq!(WeekRules::EU.week_of_year(ymd(2017, 8, 24)), Some((2017, 34)));
        assert_eq!(WeekRules::US.week_of_year(ymd(2017, 8, 24)), Some((2017, 34)));
        // Sunday 2017-01-01 still belongs to the last ISO week of 2016.
        assert_eq!(WeekRules::EU.week_of_year(ymd(2017, 1, 1)), Some((2016, 52)));
        assert_eq!(WeekRules::US.week_of_year(ymd(2017, 1, 1)), Some((2017, 1)));
        assert_eq!(WeekRules::EU.week_of_year(ymd(2018, 12, 31)), Some((2019, 1)));
        assert_eq!(WeekRules::US.week_of_year(ymd(2017, 12, 31)), Some((2018, 1)));
    }

    #[test]
    fn test_week_of_year_matches_iso() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..2000 {
            let date = NaiveDate::from_yo_opt(rng.i32(1900..2200), rng.u32(1..=365)).unwrap();
            let iso = date.iso_week();
            assert_eq!(
                WeekRules::EU.week_of_year(date),
                Some((iso.year(), iso.week())),
                "{date}"
            );
        }
    }

    #[test]
    fn test_week_of_month() {
        assert_eq!(WeekRules::EU.week_of_month(ymd(2017, 8, 24)), Some(4));
        assert_eq!(WeekRules::US.week_of_month(ymd(2017, 8, 24)), Some(4));
        // October 2017 starts on a Sunday, so its first EU week starts on the 2nd.
        assert_eq!(WeekRules::EU.week_of_month(ymd(2017, 10, 1)), Some(0));
        assert_eq!(WeekRules::EU.week_of_month(ymd(2017, 10, 2)), Some(1));
    }

    #[test]
    fn test_weeks_in_year() {
        assert_eq!(WeekRules::EU.weeks_in_year(2017), Some(52));
        assert_eq!(WeekRules::EU.weeks_in_year(2020), Some(53));
        assert_eq!(WeekRules::US.weeks_in_year(2017), Some(52));
    }

    #[test]
    fn test_week_date() {
        assert_eq!(
            WeekRules::EU.week_date(2017, 34, Weekday::Mon),
            Some(ymd(2017, 8, 21))
        );
        assert_eq!(
            WeekRules::EU.week_date(2017, 34, Weekday::Fri),
            Some(ymd(2017, 8, 25))
        );
        assert_eq!(
            WeekRules::EU.week_date(2017, 34, Weekday::Sun),
            Some(ymd(2017, 8, 27))
        );
        assert_eq!(WeekRules::EU.week_date(2017, 0, Weekday::Mon), None);
    }

    #[test]
    fn test_new_validates_min_days() {
        assert_eq!(WeekRules::new(Weekday::Mon, 4).unwrap(), WeekRules::EU);
        assert!(WeekRules::new(Weekday::Mon, 0).is_err());
        assert!(WeekRules::new(Weekday::Mon, 8).is_err());
        assert_eq!(WeekRules::default(), WeekRules::EU);
    }
}
