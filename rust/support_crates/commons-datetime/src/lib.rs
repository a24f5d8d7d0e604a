//! Calendar helpers on top of `chrono`: local day and week boundaries, week
//! numbering under configurable [`WeekRules`], formatting, and a fixed table of
//! named time zones.
//!
//! All instants are `DateTime<Utc>`. Day and week spans come back as
//! [`commons_ranges::DateRange`] values.

pub mod dates;
pub mod timezone_list;
pub mod week;

pub use dates::{
    ISO_DATE_FORMAT, add_duration, add_millis, current_year, date, day_end, day_range, day_start,
    delta, format_date, format_iso_date, friday_of_week, from_time, get_time, is_same_day,
    is_today, max_date, max_week_of_year, min_date, monday_of_week, to_cron, week_end,
    week_number, week_of_month, week_range, week_start, weeks_range, year,
};
pub use timezone_list::{NamedTimeZone, TimeZoneList};
pub use week::WeekRules;
