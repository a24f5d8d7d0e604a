//! A fixed table of user-facing time zones.
//!
//! Each entry pairs an IANA zone id with a Windows-style standard name and a
//! display name of the form `(GMT +hh:mm) Cities`. The offset in the display
//! name is the zone's standard (non-DST) offset and is what the table sorts and
//! matches by. Date arithmetic goes through the zone's [`chrono_tz::Tz`], which
//! carries the full daylight saving history.

use std::{cmp::Ordering, fmt, sync::OnceLock};

use chrono::{Datelike, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::{OffsetComponents, Tz};

const GMT_ID: &str = "Europe/London";
const GMT_STANDARD_NAME: &str = "GMT Standard Time";
const GMT_DISPLAY_NAME: &str = "(GMT) Dublin, Edinburgh, Lisbon, London";

/// `(standard name, IANA id, display name)`
const ZONE_MAPPINGS: &[(&str, &str, &str)] = &[
    ("GMT Standard Time", "Europe/London", "(GMT) Dublin, Edinburgh, Lisbon, London"),
    ("Afghanistan Standard Time", "Asia/Kabul", "(GMT +04:30) Kabul"),
    ("Alaskan Standard Time", "America/Anchorage", "(GMT -09:00) Alaska"),
    ("Arab Standard Time", "Asia/Riyadh", "(GMT +03:00) Kuwait, Riyadh"),
    ("Arabian Standard Time", "Asia/Dubai", "(GMT +04:00) Abu Dhabi, Muscat"),
    ("Arabic Standard Time", "Asia/Baghdad", "(GMT +03:00) Baghdad"),
    ("Argentina Standard Time", "America/Buenos_Aires", "(GMT -03:00) Buenos Aires"),
    ("Atlantic Standard Time", "America/Halifax", "(GMT -04:00) Atlantic Time (Canada)"),
    ("AUS Central Standard Time", "Australia/Darwin", "(GMT +09:30) Darwin"),
    ("AUS Eastern Standard Time", "Australia/Sydney", "(GMT +10:00) Canberra, Melbourne, Sydney"),
    ("Azerbaijan Standard Time", "Asia/Baku", "(GMT +04:00) Baku"),
    ("Azores Standard Time", "Atlantic/Azores", "(GMT -01:00) Azores"),
    ("Bangladesh Standard Time", "Asia/Dhaka", "(GMT +06:00) Dhaka"),
    ("Canada Central Standard Time", "America/Regina", "(GMT -06:00) Saskatchewan"),
    ("Cape Verde Standard Time", "Atlantic/Cape_Verde", "(GMT -01:00) Cape Verde Is."),
    ("Caucasus Standard Time", "Asia/Yerevan", "(GMT +04:00) Yerevan"),
    ("Cen. Australia Standard Time", "Australia/Adelaide", "(GMT +09:30) Adelaide"),
    ("Central America Standard Time", "America/Guatemala", "(GMT -06:00) Central America"),
    ("Central Asia Standard Time", "Asia/Almaty", "(GMT +06:00) Astana"),
    ("Central Brazilian Standard Time", "America/Cuiaba", "(GMT -04:00) Cuiaba"),
    ("Central Europe Standard Time", "Europe/Budapest", "(GMT +01:00) Belgrade, Bratislava, Budapest, Ljubljana, Prague"),
    ("Central European Standard Time", "Europe/Warsaw", "(GMT +01:00) Sarajevo, Skopje, Warsaw, Zagreb"),
    ("Central Pacific Standard Time", "Pacific/Guadalcanal", "(GMT +11:00) Solomon Is., New Caledonia"),
    ("Central Standard Time (Mexico)", "America/Mexico_City", "(GMT -06:00) Guadalajara, Mexico City, Monterrey"),
    ("Central Standard Time", "America/Chicago", "(GMT -06:00) Central Time (US & Canada)"),
    ("China Standard Time", "Asia/Shanghai", "(GMT +08:00) Beijing, Chongqing, Hong Kong, Urumqi"),
    ("Dateline Standard Time", "Etc/GMT+12", "(GMT -12:00) International Date Line West"),
    ("E. Africa Standard Time", "Africa/Nairobi", "(GMT +03:00) Nairobi"),
    ("E. Australia Standard Time", "Australia/Brisbane", "(GMT +10:00) Brisbane"),
    ("E. Europe Standard Time", "Europe/Minsk", "(GMT +02:00) Minsk"),
    ("E. South America Standard Time", "America/Sao_Paulo", "(GMT -03:00) Brasilia"),
    ("Eastern Standard Time", "America/New_York", "(GMT -05:00) Eastern Time (US & Canada)"),
    ("Egypt Standard Time", "Africa/Cairo", "(GMT +02:00) Cairo"),
    ("Ekaterinburg Standard Time", "Asia/Yekaterinburg", "(GMT +05:00) Ekaterinburg"),
    ("Fiji Standard Time", "Pacific/Fiji", "(GMT +12:00) Fiji, Marshall Is."),
    ("FLE Standard Time", "Europe/Sofia", "(GMT +02:00) Helsinki, Kyiv, Riga, Sofia, Tallinn, Vilnius"),
    ("Georgian Standard Time", "Asia/Tbilisi", "(GMT +04:00) Tbilisi"),
    ("Greenland Standard Time", "America/Godthab", "(GMT -03:00) Greenland"),
    ("Greenwich Standard Time", "Atlantic/Reykjavik", "(GMT) Monrovia, Reykjavik"),
    ("GTB Standard Time", "Europe/Istanbul", "(GMT +02:00) Athens, Bucharest, Istanbul"),
    ("Hawaiian Standard Time", "Pacific/Honolulu", "(GMT -10:00) Hawaii"),
    ("India Standard Time", "Asia/Calcutta", "(GMT +05:30) Chennai, Kolkata, Mumbai, New Delhi"),
    ("Iran Standard Time", "Asia/Tehran", "(GMT +03:30) Tehran"),
    ("Israel Standard Time", "Asia/Jerusalem", "(GMT +02:00) Jerusalem"),
    ("Jordan Standard Time", "Asia/Amman", "(GMT +02:00) Amman"),
    ("Kamchatka Standard Time", "Asia/Kamchatka", "(GMT +12:00) Petropavlovsk-Kamchatsky - Old"),
    ("Korea Standard Time", "Asia/Seoul", "(GMT +09:00) Seoul"),
    ("Magadan Standard Time", "Asia/Magadan", "(GMT +11:00) Magadan"),
    ("Mauritius Standard Time", "Indian/Mauritius", "(GMT +04:00) Port Louis"),
    ("Mid-Atlantic Standard Time", "Etc/GMT+2", "(GMT -02:00) Mid-Atlantic"),
    ("Middle East Standard Time", "Asia/Beirut", "(GMT +02:00) Beirut"),
    ("Montevideo Standard Time", "America/Montevideo", "(GMT -03:00) Montevideo"),
    ("Morocco Standard Time", "Africa/Casablanca", "(GMT) Casablanca"),
    ("Mountain Standard Time (Mexico)", "America/Chihuahua", "(GMT -07:00) Chihuahua, La Paz, Mazatlan"),
    ("Mountain Standard Time", "America/Denver", "(GMT -07:00) Mountain Time (US & Canada)"),
    ("Myanmar Standard Time", "Asia/Rangoon", "(GMT +06:30) Yangon (Rangoon)"),
    ("N. Central Asia Standard Time", "Asia/Novosibirsk", "(GMT +06:00) Novosibirsk"),
    ("Namibia Standard Time", "Africa/Windhoek", "(GMT +02:00) Windhoek"),
    ("Nepal Standard Time", "Asia/Katmandu", "(GMT +05:45) Kathmandu"),
    ("New Zealand Standard Time", "Pacific/Auckland", "(GMT +12:00) Auckland, Wellington"),
    ("Newfoundland Standard Time", "America/St_Johns", "(GMT -03:30) Newfoundland"),
    ("North Asia East Standard Time", "Asia/Irkutsk", "(GMT +08:00) Irkutsk"),
    ("North Asia Standard Time", "Asia/Krasnoyarsk", "(GMT +07:00) Krasnoyarsk"),
    ("Pacific SA Standard Time", "America/Santiago", "(GMT -04:00) Santiago"),
    ("Pacific Standard Time (Mexico)", "America/Tijuana", "(GMT -08:00) Baja California"),
    ("Pacific Standard Time", "America/Los_Angeles", "(GMT -08:00) Pacific Time (US & Canada)"),
    ("Pakistan Standard Time", "Asia/Karachi", "(GMT +05:00) Islamabad, Karachi"),
    ("Paraguay Standard Time", "America/Asuncion", "(GMT -04:00) Asuncion"),
    ("Romance Standard Time", "Europe/Paris", "(GMT +01:00) Brussels, Copenhagen, Madrid, Paris"),
    ("Russian Standard Time", "Europe/Moscow", "(GMT +03:00) Moscow, St. Petersburg, Volgograd"),
    ("SA Eastern Standard Time", "America/Cayenne", "(GMT -03:00) Cayenne, Fortaleza"),
    ("SA Pacific Standard Time", "America/Bogota", "(GMT -05:00) Bogota, Lima, Quito"),
    ("SA Western Standard Time", "America/La_Paz", "(GMT -04:00) Georgetown, La Paz, Manaus, San Juan"),
    ("Samoa Standard Time", "Pacific/Apia", "(GMT -11:00) Samoa"),
    ("SE Asia Standard Time", "Asia/Bangkok", "(GMT +07:00) Bangkok, Hanoi, Jakarta"),
    ("Singapore Standard Time", "Asia/Singapore", "(GMT +08:00) Kuala Lumpur, Singapore"),
    ("South Africa Standard Time", "Africa/Johannesburg", "(GMT +02:00) Harare, Pretoria"),
    ("Sri Lanka Standard Time", "Asia/Colombo", "(GMT +05:30) Sri Jayawardenepura"),
    ("Syria Standard Time", "Asia/Damascus", "(GMT +02:00) Damascus"),
    ("Taipei Standard Time", "Asia/Taipei", "(GMT +08:00) Taipei"),
    ("Tasmania Standard Time", "Australia/Hobart", "(GMT +10:00) Hobart"),
    ("Tokyo Standard Time", "Asia/Tokyo", "(GMT +09:00) Osaka, Sapporo, Tokyo"),
    ("Tonga Standard Time", "Pacific/Tongatapu", "(GMT +13:00) Nuku'alofa"),
    ("Ulaanbaatar Standard Time", "Asia/Ulaanbaatar", "(GMT +08:00) Ulaanbaatar"),
    ("US Eastern Standard Time", "America/Indianapolis", "(GMT -05:00) Indiana (East)"),
    ("US Mountain Standard Time", "America/Phoenix", "(GMT -07:00) Arizona"),
    ("GMT", "Etc/GMT", "(GMT) Coordinated Universal Time"),
    ("GMT +12", "Etc/GMT-12", "(GMT +12:00) Coordinated Universal Time+12"),
    ("GMT -11", "Etc/GMT+11", "(GMT -11:00) Coordinated Universal Time-11"),
    ("Venezuela Standard Time", "America/Caracas", "(GMT -04:30) Caracas"),
    ("Vladivostok Standard Time", "Asia/Vladivostok", "(GMT +10:00) Vladivostok"),
    ("W. Australia Standard Time", "Australia/Perth", "(GMT +08:00) Perth"),
    ("W. Central Africa Standard Time", "Africa/Lagos", "(GMT +01:00) West Central Africa"),
    ("W. Europe Standard Time", "Europe/Berlin", "(GMT +01:00) Amsterdam, Berlin, Bern, Rome, Stockholm, Vienna"),
    ("West Asia Standard Time", "Asia/Tashkent", "(GMT +05:00) Tashkent"),
    ("West Pacific Standard Time", "Pacific/Port_Moresby", "(GMT +10:00) Guam, Port Moresby"),
    ("Yakutsk Standard Time", "Asia/Yakutsk", "(GMT +09:00) Yakutsk"),
];

/// A time zone from [`TimeZoneList`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedTimeZone {
    tz: Tz,
    standard_name: &'static str,
    display_name: &'static str,
    standard_offset: FixedOffset,
}

impl NamedTimeZone {
    fn from_mapping(
        (standard_name, id, display_name): (&'static str, &'static str, &'static str),
    ) -> Option<NamedTimeZone> {
        let Ok(tz) = id.parse::<Tz>() else {
            log::warn!("skipping unknown time zone id {id}");
            return None;
        };
        let Some(standard_offset) = parse_display_offset(display_name) else {
            log::warn!("skipping time zone {id} with malformed display name");
            return None;
        };
        Some(NamedTimeZone {
            tz,
            standard_name,
            display_name,
            standard_offset,
        })
    }

    /// The IANA zone id, e.g. `Europe/Sofia`.
    pub fn id(&self) -> &'static str {
        self.tz.name()
    }

    /// The Windows-style name, e.g. `FLE Standard Time`.
    pub fn standard_name(&self) -> &'static str {
        self.standard_name
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// The zone itself, daylight saving rules included. This is what the
    /// date helpers expect as their time zone argument.
    pub fn time_zone(&self) -> Tz {
        self.tz
    }

    /// The standard offset from UTC, as shown in the display name.
    pub fn standard_offset(&self) -> FixedOffset {
        self.standard_offset
    }
}

impl Ord for NamedTimeZone {
    fn cmp(&self, other: &Self) -> Ordering {
        self.standard_offset
            .local_minus_utc()
            .cmp(&other.standard_offset.local_minus_utc())
            .then_with(|| self.display_name.cmp(other.display_name))
            .then_with(|| self.standard_name.cmp(other.standard_name))
            .then_with(|| self.id().cmp(other.id()))
    }
}

impl PartialOrd for NamedTimeZone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for NamedTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name)
    }
}

/// Parses the offset of a display name: `(GMT)` or `(GMT +hh:mm)`.
fn parse_display_offset(display_name: &str) -> Option<FixedOffset> {
    let rest = display_name.strip_prefix("(GMT")?;
    let (offset, _) = rest.split_once(')')?;
    let offset = offset.trim();
    if offset.is_empty() {
        return Some(Utc.fix());
    }
    let (sign, hh_mm) = if let Some(v) = offset.strip_prefix('+') {
        (1, v)
    } else {
        (-1, offset.strip_prefix('-')?)
    };
    let (hours, minutes) = hh_mm.split_once(':')?;
    let seconds = hours.parse::<i32>().ok()? * 3600 + minutes.parse::<i32>().ok()? * 60;
    FixedOffset::east_opt(sign * seconds)
}

fn year_start(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}

/// Returns `true` if `a` and `b` have the same UTC offset at every hour of
/// `year`.
fn same_rules(a: Tz, b: Tz, year: i32) -> bool {
    let Some(start) = year_start(year) else {
        return false;
    };
    let hours = NaiveDate::from_ymd_opt(year, 12, 31).map_or(365, |d| d.ordinal()) * 24;
    (0..i64::from(hours)).all(|hour| {
        start
            .checked_add_signed(TimeDelta::hours(hour))
            .is_some_and(|t| {
                a.offset_from_utc_datetime(&t).fix() == b.offset_from_utc_datetime(&t).fix()
            })
    })
}

/// Returns `true` if `tz` has daylight saving time in effect on the first of
/// any month of `year`.
fn observes_dst(tz: Tz, year: i32) -> bool {
    (1..=12).any(|month| {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .is_some_and(|t| tz.offset_from_utc_datetime(&t).dst_offset() != TimeDelta::zero())
    })
}

/// The same standard offset at the start of `year`, and daylight saving time
/// either in both zones or in neither.
fn similar_rules(a: Tz, b: Tz, year: i32) -> bool {
    let Some(start) = year_start(year) else {
        return false;
    };
    a.offset_from_utc_datetime(&start).base_utc_offset()
        == b.offset_from_utc_datetime(&start).base_utc_offset()
        && observes_dst(a, year) == observes_dst(b, year)
}

/// The process-wide list of named time zones, sorted by offset and then by
/// display name.
#[derive(Debug)]
pub struct TimeZoneList {
    zones: Vec<NamedTimeZone>,
    gmt: NamedTimeZone,
}

impl TimeZoneList {
    /// Returns the shared list, building it on first use.
    pub fn instance() -> &'static TimeZoneList {
        static INSTANCE: OnceLock<TimeZoneList> = OnceLock::new();
        INSTANCE.get_or_init(TimeZoneList::build)
    }

    fn build() -> TimeZoneList {
        let mut zones = ZONE_MAPPINGS
            .iter()
            .filter_map(|&mapping| NamedTimeZone::from_mapping(mapping))
            .collect::<Vec<_>>();
        zones.sort();

        let gmt = zones
            .iter()
            .find(|zone| zone.id() == GMT_ID)
            .cloned()
            .unwrap_or_else(|| NamedTimeZone {
                tz: chrono_tz::Europe::London,
                standard_name: GMT_STANDARD_NAME,
                display_name: GMT_DISPLAY_NAME,
                standard_offset: Utc.fix(),
            });
        TimeZoneList { zones, gmt }
    }

    pub fn named_time_zones(&self) -> &[NamedTimeZone] {
        &self.zones
    }

    /// The zone ids, in list order.
    pub fn time_zone_ids(&self) -> Vec<&'static str> {
        self.zones.iter().map(NamedTimeZone::id).collect()
    }

    /// The London zone, used whenever a lookup finds nothing.
    pub fn gmt(&self) -> &NamedTimeZone {
        &self.gmt
    }

    /// The first zone, in list order, matching `predicate`.
    pub fn find<F>(&self, mut predicate: F) -> Option<&NamedTimeZone>
    where
        F: FnMut(&NamedTimeZone) -> bool,
    {
        self.zones.iter().find(|zone| predicate(zone))
    }

    /// The zone for an IANA id.
    ///
    /// An id missing from the table resolves to the first zone with the same
    /// offsets throughout the current year (`Europe/Helsinki` gives
    /// `Europe/Sofia`), then to the first zone with the same standard offset
    /// and daylight saving usage. Anything else, unknown ids included, gives
    /// [`gmt`](Self::gmt).
    pub fn by_id(&self, id: &str) -> &NamedTimeZone {
        if let Some(zone) = self.find(|zone| zone.id() == id) {
            return zone;
        }
        let Ok(tz) = id.parse::<Tz>() else {
            log::warn!("unknown time zone id {id}, falling back to {GMT_ID}");
            return &self.gmt;
        };
        let year = Utc::now().year();
        let zone = self
            .find(|zone| same_rules(zone.tz, tz, year))
            .or_else(|| self.find(|zone| similar_rules(zone.tz, tz, year)));
        match zone {
            Some(zone) => {
                log::debug!("time zone {id} resolved to {} by its rules", zone.id());
                zone
            }
            None => {
                log::warn!("no time zone with the rules of {id}, falling back to {GMT_ID}");
                &self.gmt
            }
        }
    }

    /// The first zone whose standard offset equals `offset`, or
    /// [`gmt`](Self::gmt) if none does.
    pub fn by_offset(&self, offset: FixedOffset) -> &NamedTimeZone {
        self.find(|zone| zone.standard_offset == offset)
            .unwrap_or_else(|| {
                log::debug!("no time zone with offset {offset}, falling back to {GMT_ID}");
                &self.gmt
            })
    }

    /// The zone of the local system, looked up by its IANA id.
    pub fn default_time_zone(&self) -> &NamedTimeZone {
        match iana_time_zone::get_timezone() {
            Ok(id) => self.by_id(&id),
            Err(err) => {
                log::warn!(
                    "cannot determine the local time zone ({err}), falling back to {GMT_ID}"
                );
                &self.gmt
            }
        }
    }
}
