//! Four Pillars (四柱) derivation for a solar date and time.
//!
//! - Year: the ganzhi year turns at Start of Spring, not on January 1;
//!   index `(ganzhi_year - 1984) mod 60`.
//! - Month: branch fixed by calendar month (January = 寅); the stem starts
//!   from a value keyed by the year stem.
//! - Day: `(40 + days since 1900-01-01) mod 60`.
//! - Hour: two-hour windows offset by one hour (23:00-00:59 = 子); the stem
//!   starts from a value keyed by the day stem.
//!
//! Month boundaries follow the calendar month rather than the solar terms.

use bazi_time::{CivilDate, CivilDateTime, gregorian_to_jdn};
use tracing::trace;

use crate::error::BaziError;
use crate::ganzhi::{Branch, Stem};
use crate::lunar_table::{FIRST_YEAR, LAST_YEAR};
use crate::sexagenary::Pillar;
use crate::solar_term::start_of_spring;

/// Year whose ganzhi is 甲子 (cycle index 0).
pub const YEAR_EPOCH: i32 = 1984;

/// Reference day for the day pillar.
pub const DAY_EPOCH: CivilDate = CivilDate::from_jdn(gregorian_to_jdn(1900, 1, 1));

/// Cycle index of [`DAY_EPOCH`].
pub const DAY_EPOCH_INDEX: i64 = 40;

// First month stem, keyed by year stem mod 5: 甲己→丙, 乙庚→戊, 丙辛→庚, 丁壬→壬, 戊癸→甲.
const MONTH_STEM_START: [Stem; 5] = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];

// 子-hour stem, keyed by day stem mod 5: 甲己→甲, 乙庚→丙, 丙辛→戊, 丁壬→庚, 戊癸→壬.
const HOUR_STEM_START: [Stem; 5] = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in chart order.
pub const ALL_POSITIONS: [PillarPosition; 4] = [
    PillarPosition::Year,
    PillarPosition::Month,
    PillarPosition::Day,
    PillarPosition::Hour,
];

impl PillarPosition {
    /// Chinese name, e.g. "年柱".
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "年柱",
            Self::Month => "月柱",
            Self::Day => "日柱",
            Self::Hour => "时柱",
        }
    }

    /// Lower-case English key.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }
}

/// The four pillars of one date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillar at `position`.
    pub const fn get(&self, position: PillarPosition) -> Pillar {
        match position {
            PillarPosition::Year => self.year,
            PillarPosition::Month => self.month,
            PillarPosition::Day => self.day,
            PillarPosition::Hour => self.hour,
        }
    }

    /// Pillars in year, month, day, hour order.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Visible stems in chart order.
    pub const fn stems(&self) -> [Stem; 4] {
        [
            self.year.stem(),
            self.month.stem(),
            self.day.stem(),
            self.hour.stem(),
        ]
    }

    /// Visible branches in chart order.
    pub const fn branches(&self) -> [Branch; 4] {
        [
            self.year.branch(),
            self.month.branch(),
            self.day.branch(),
            self.hour.branch(),
        ]
    }
}

/// Year used for the year pillar: `year - 1` before that year's Start of Spring.
pub fn ganzhi_year(at: CivilDateTime) -> Result<i32, BaziError> {
    let year = at.date().year();
    let spring = start_of_spring(year)?.at_midnight();
    let gz_year = if at < spring { year - 1 } else { year };
    trace!(%at, gz_year, "ganzhi year");
    Ok(gz_year)
}

/// Year pillar of a ganzhi year.
pub const fn year_pillar(gz_year: i32) -> Pillar {
    Pillar::from_cycle(gz_year as i64 - YEAR_EPOCH as i64)
}

/// Month pillar for calendar `month` (1-12) within ganzhi year `gz_year`.
pub fn month_pillar(gz_year: i32, month: u32) -> Result<Pillar, BaziError> {
    let year_stem = year_pillar(gz_year).stem();
    let start = MONTH_STEM_START[(year_stem.index() % 5) as usize];
    let stem = start.offset(month as i64 - 1);
    let branch = Branch::from_cycle(month as i64 + 1);
    Pillar::new(stem, branch)
}

/// Day pillar of a civil date.
pub const fn day_pillar(date: CivilDate) -> Pillar {
    Pillar::from_cycle(DAY_EPOCH_INDEX + date.days_since(&DAY_EPOCH))
}

/// Branch of the two-hour window containing `hour` (0-23).
pub const fn hour_branch(hour: u32) -> Branch {
    Branch::from_cycle(((hour + 1) / 2) as i64)
}

/// Hour pillar for `hour` (0-23) on a day whose stem is `day_stem`.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar, BaziError> {
    let branch = hour_branch(hour);
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize];
    Pillar::new(start.offset(branch.index() as i64), branch)
}

/// Ganzhi of a plain calendar year, without the Start-of-Spring adjustment.
pub fn year_ganzhi(year: i32) -> Result<Pillar, BaziError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(BaziError::DateOutOfRange { year });
    }
    Ok(year_pillar(year))
}

/// Four pillars of a validated date-time in 1900-2100.
pub fn compute_pillars(at: CivilDateTime) -> Result<FourPillars, BaziError> {
    let year = at.date().year();
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(BaziError::DateOutOfRange { year });
    }
    let gz_year = ganzhi_year(at)?;
    let day = day_pillar(at.date());
    Ok(FourPillars {
        year: year_pillar(gz_year),
        month: month_pillar(gz_year, at.date().month())?,
        day,
        hour: hour_pillar(day.stem(), at.hour())?,
    })
}
