//! Solar ↔ lunar date conversion over the 1900-2100 table.
//!
//! Both directions count days from the fixed epoch 1900-01-31, which is
//! lunar 1900-01-01. A lunar year holds months 1..12 in order, with the leap
//! month (if any) inserted directly after the regular month of the same
//! number.

use std::fmt::{Display, Formatter};

use bazi_time::{CivilDate, DateField, gregorian_to_jdn};
use tracing::debug;

use crate::error::BaziError;
use crate::lunar_table::{FIRST_YEAR, year_info};

/// Solar date of lunar 1900-01-01.
pub const LUNAR_EPOCH: CivilDate = CivilDate::from_jdn(gregorian_to_jdn(1900, 1, 31));

/// A date in the Chinese lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LunarDate {
    year: i32,
    month: u8,
    is_leap: bool,
    day: u8,
}

impl LunarDate {
    /// Build a lunar date, checking it against the year's month lengths.
    ///
    /// `is_leap` is only accepted for the year's leap month.
    pub fn new(year: i32, month: u8, day: u8, is_leap: bool) -> Result<Self, BaziError> {
        let info = year_info(year)?;
        if !(1..=12).contains(&month) {
            return Err(invalid(DateField::Month, month as i64));
        }
        if is_leap && info.leap_month() != month {
            return Err(invalid(DateField::Month, month as i64));
        }
        let len = if is_leap {
            info.leap_month_days()
        } else {
            info.month_days(month)
        };
        if day == 0 || day as u32 > len {
            return Err(invalid(DateField::Day, day as i64));
        }
        Ok(Self {
            year,
            month,
            is_leap,
            day,
        })
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap(&self) -> bool {
        self.is_leap
    }

    /// Chinese month name, e.g. "正月", "闰六月", "腊月".
    pub fn month_name(&self) -> String {
        month_name(self.month, self.is_leap)
    }

    /// Chinese day name, e.g. "初一", "廿五".
    pub fn day_name(&self) -> String {
        day_name(self.day)
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}{}", self.year, self.month_name(), self.day_name())
    }
}

fn invalid(field: DateField, value: i64) -> BaziError {
    debug!(%field, value, "rejected lunar date");
    BaziError::InvalidLunarDate { field, value }
}

/// Convert a solar date to its lunar date.
///
/// The range is bounded by the lunar year: solar dates up to 2101-01-28
/// (lunar 2100-12-29) convert. Fails with [`BaziError::DateOutOfRange`]
/// before lunar 1900-01-01 or after the last day of lunar 2100.
pub fn solar_to_lunar(date: CivilDate) -> Result<LunarDate, BaziError> {
    if date.year() < FIRST_YEAR {
        debug!(%date, "solar year before supported range");
        return Err(BaziError::DateOutOfRange { year: date.year() });
    }
    let mut offset = date.days_since(&LUNAR_EPOCH);
    if offset < 0 {
        debug!(%date, "solar date precedes the lunar table");
        return Err(BaziError::DateOutOfRange {
            year: FIRST_YEAR - 1,
        });
    }

    let mut year = FIRST_YEAR;
    let info = loop {
        let info = year_info(year)?;
        let days = info.year_days() as i64;
        if offset < days {
            break info;
        }
        offset -= days;
        year += 1;
    };

    let leap = info.leap_month();
    let mut month = 1u8;
    let mut in_leap = false;
    while month <= 12 {
        let len = i64::from(if in_leap {
            info.leap_month_days()
        } else {
            info.month_days(month)
        });
        if offset < len {
            return Ok(LunarDate {
                year,
                month,
                is_leap: in_leap,
                day: offset as u8 + 1,
            });
        }
        offset -= len;
        if !in_leap && month == leap {
            in_leap = true;
        } else {
            in_leap = false;
            month += 1;
        }
    }
    // Unreachable while offset < year_days, which the year walk guarantees.
    Err(BaziError::DateOutOfRange { year })
}

/// Convert a lunar date to its solar date.
pub fn lunar_to_solar(lunar: LunarDate) -> Result<CivilDate, BaziError> {
    let mut offset: i64 = 0;
    for y in FIRST_YEAR..lunar.year {
        offset += year_info(y)?.year_days() as i64;
    }

    let info = year_info(lunar.year)?;
    let leap = info.leap_month();
    for m in 1..lunar.month {
        offset += info.month_days(m) as i64;
        if m == leap {
            offset += info.leap_month_days() as i64;
        }
    }
    if lunar.is_leap {
        offset += info.month_days(lunar.month) as i64;
    }
    offset += lunar.day as i64 - 1;

    Ok(LUNAR_EPOCH.add_days(offset))
}

const NUM_CHINESE: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Chinese name of a lunar month. Months 11 and 12 are "冬月" and "腊月".
pub fn month_name(month: u8, is_leap: bool) -> String {
    let mut name = String::new();
    if is_leap {
        name.push('闰');
    }
    name.push_str(match month {
        1 => "正",
        11 => "冬",
        12 => "腊",
        m => NUM_CHINESE[(m % 10) as usize],
    });
    name.push('月');
    name
}

/// Chinese name of a lunar day (1-30).
pub fn day_name(day: u8) -> String {
    let prefix = match day {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        _ => "三",
    };
    format!("{prefix}{}", NUM_CHINESE[(day % 10) as usize])
}
