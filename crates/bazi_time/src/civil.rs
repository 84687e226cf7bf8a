//! Validated civil date and date-time values.
//!
//! `CivilDate` and `CivilDateTime` can only be built from fields that name a
//! real calendar day and clock time: 1900-02-30 or 24:00 are rejected with
//! [`TimeError::InvalidDateTime`], never wrapped into a neighbouring day.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{DateField, TimeError};
use crate::julian::{days_in_month, gregorian_to_jdn, jdn_to_gregorian};

/// A proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, rejecting months outside 1-12 and days beyond the month's length.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDateTime {
                field: DateField::Month,
                value: month as i64,
            });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDateTime {
                field: DateField::Day,
                value: day as i64,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Date for a Julian Day Number.
    pub const fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_gregorian(jdn);
        Self { year, month, day }
    }

    /// Julian Day Number of this date.
    pub const fn jdn(&self) -> i64 {
        gregorian_to_jdn(self.year, self.month, self.day)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// `(year, month, day)` tuple.
    pub const fn ymd(&self) -> (i32, u32, u32) {
        (self.year, self.month, self.day)
    }

    /// The date `days` days later (earlier when negative).
    pub const fn add_days(&self, days: i64) -> Self {
        Self::from_jdn(self.jdn() + days)
    }

    /// Signed number of days from `earlier` to `self`.
    pub const fn days_since(&self, earlier: &CivilDate) -> i64 {
        self.jdn() - earlier.jdn()
    }

    /// Midnight at the start of this date.
    pub const fn at_midnight(self) -> CivilDateTime {
        CivilDateTime {
            date: self,
            hour: 0,
            minute: 0,
        }
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('-').collect();
        // Leading '-' would be a negative year; unsupported in text form.
        if parts.len() != 3 || parts[0].is_empty() {
            return Err(TimeError::Parse(format!("expected YYYY-MM-DD, got '{s}'")));
        }
        let year: i32 = parse_num(parts[0], "year")?;
        let month: u32 = parse_num(parts[1], "month")?;
        let day: u32 = parse_num(parts[2], "day")?;
        Self::new(year, month, day)
    }
}

/// A civil date with a wall-clock hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDateTime {
    date: CivilDate,
    hour: u32,
    minute: u32,
}

impl CivilDateTime {
    /// Build a date-time. The date is validated first, then hour (0-23) and minute (0-59).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Result<Self, TimeError> {
        let date = CivilDate::new(year, month, day)?;
        Self::from_date(date, hour, minute)
    }

    /// Attach a clock time to an already-validated date.
    pub fn from_date(date: CivilDate, hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::InvalidDateTime {
                field: DateField::Hour,
                value: hour as i64,
            });
        }
        if minute > 59 {
            return Err(TimeError::InvalidDateTime {
                field: DateField::Minute,
                value: minute as i64,
            });
        }
        Ok(Self { date, hour, minute })
    }

    pub const fn date(&self) -> CivilDate {
        self.date
    }

    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}:{:02}", self.date, self.hour, self.minute)
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm`, `YYYY-MM-DD hh:mm`, or a bare date (midnight).
    /// Trailing seconds (`:ss`) are accepted and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((date_part, time_part)) = s.split_once(['T', ' ']) else {
            return Ok(s.parse::<CivilDate>()?.at_midnight());
        };
        let date: CivilDate = date_part.parse()?;
        let fields: Vec<&str> = time_part.trim_end_matches('Z').split(':').collect();
        if !(2..=3).contains(&fields.len()) {
            return Err(TimeError::Parse(format!("expected hh:mm, got '{time_part}'")));
        }
        let hour: u32 = parse_num(fields[0], "hour")?;
        let minute: u32 = parse_num(fields[1], "minute")?;
        Self::from_date(date, hour, minute)
    }
}

fn parse_num<T: FromStr>(text: &str, what: &str) -> Result<T, TimeError>
where
    T::Err: Display,
{
    text.parse()
        .map_err(|e| TimeError::Parse(format!("{what} '{text}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_february_30() {
        let err = CivilDate::new(2024, 2, 30).unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidDateTime {
                field: DateField::Day,
                value: 30
            }
        );
    }

    #[test]
    fn rejects_day_31_in_30_day_month() {
        assert!(CivilDate::new(2023, 4, 31).is_err());
        assert!(CivilDate::new(2023, 4, 30).is_ok());
    }

    #[test]
    fn rejects_month_13_before_day() {
        let err = CivilDate::new(2023, 13, 40).unwrap_err();
        assert!(matches!(
            err,
            TimeError::InvalidDateTime {
                field: DateField::Month,
                ..
            }
        ));
    }

    #[test]
    fn rejects_hour_24() {
        let err = CivilDateTime::new(2023, 1, 1, 24, 0).unwrap_err();
        assert_eq!(
            err,
            TimeError::InvalidDateTime {
                field: DateField::Hour,
                value: 24
            }
        );
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::new(1999, 12, 31).unwrap();
        assert_eq!(d.add_days(1), CivilDate::new(2000, 1, 1).unwrap());
        assert_eq!(d.add_days(-365), CivilDate::new(1998, 12, 31).unwrap());
    }

    #[test]
    fn days_since_epoch() {
        let base = CivilDate::new(1900, 1, 1).unwrap();
        let d = CivilDate::new(1990, 1, 1).unwrap();
        assert_eq!(d.days_since(&base), 32_872);
    }

    #[test]
    fn ordering_follows_time() {
        let a = CivilDateTime::new(2024, 2, 3, 23, 59).unwrap();
        let b = CivilDateTime::new(2024, 2, 4, 0, 0).unwrap();
        assert!(a < b);
    }

    #[test]
    fn parse_date_and_datetime() {
        let d: CivilDate = "2024-02-10".parse().unwrap();
        assert_eq!(d.ymd(), (2024, 2, 10));

        let t: CivilDateTime = "1990-01-01T12:30".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (12, 30));

        let t: CivilDateTime = "1990-01-01 08:05:59".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (8, 5));

        let t: CivilDateTime = "1990-01-01".parse().unwrap();
        assert_eq!((t.hour(), t.minute()), (0, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "2024/02/10".parse::<CivilDate>(),
            Err(TimeError::Parse(_))
        ));
        assert!(matches!(
            "2024-02-10T12".parse::<CivilDateTime>(),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn parse_validates_fields() {
        assert!(matches!(
            "2023-02-29".parse::<CivilDate>(),
            Err(TimeError::InvalidDateTime { .. })
        ));
    }

    #[test]
    fn display_iso() {
        let t = CivilDateTime::new(2024, 3, 5, 7, 9).unwrap();
        assert_eq!(t.to_string(), "2024-03-05T07:09");
    }
}
